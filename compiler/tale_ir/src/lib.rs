//! Tale IR - token vocabulary
//!
//! This crate contains the data the Tale scanner hands to the parser:
//! - Spans for source locations
//! - `TokenKind`, the closed set of token categories
//! - `Token`, a kind plus a borrowed literal and its position
//!
//! The scanner lives in `tale_lexer`; nothing here knows how to scan.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod span;
mod token;

pub use span::{Span, SpanError};
pub use token::{Token, TokenKind};
