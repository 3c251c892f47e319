//! Scanner for Tale, a line-oriented language for interactive narratives.
//!
//! A Tale source is a sequence of blocks. A line starting with a run of `>`
//! (input header) or `=` (state header) opens a block; everything else is
//! prose, with `<name args...>` actions embedded anywhere in it.
//!
//! The scanner is pull-based: [`Scanner::next_token`] returns one
//! [`Token`] per call and never fails. Token literals borrow from the
//! source and carry their 1-based line and column (columns count code
//! points) plus a byte [`Span`].
//!
//! ```
//! use tale_lexer::{tokenize, TokenKind};
//!
//! let kinds: Vec<_> = tokenize("> greet >\nHello!").iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::InputHeader,
//!         TokenKind::Arg,
//!         TokenKind::HeaderEnd,
//!         TokenKind::Text,
//!         TokenKind::Eof,
//!     ]
//! );
//! ```

pub mod classify;

mod capture;
mod cursor;
mod scanner;
mod source;

#[cfg(test)]
mod tests;

use std::sync::Once;

use tracing::debug;

pub use capture::{CaptureMode, CaptureStack};
pub use cursor::{Cursor, Lexeme, Mark};
pub use scanner::Scanner;
pub use source::{EncodingIssue, EncodingIssueKind, SourceError, SourceText};
pub use tale_ir::{Span, Token, TokenKind};

/// Scan a whole source, returning every token up to and including `Eof`.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    let tokens: Vec<_> = Scanner::new(source).collect();
    debug!(count = tokens.len(), "tokenized");
    tokens
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set;
/// enable with `RUST_LOG=tale_lexer=debug` or `RUST_LOG=tale_lexer=trace`
/// (one event per token and capture push/pop).
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
