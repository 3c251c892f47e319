//! Capture stack: the lexical modes currently open.
//!
//! The top of the stack decides how the scanner reads the next code point.
//! Empty means top level (prose and block markers).

use smallvec::SmallVec;
use tracing::trace;

use crate::classify::{INPUT_HEADER_MARKER, STATE_HEADER_MARKER};

/// A lexical mode pushed while a construct is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CaptureMode {
    /// Inside a `>` header line.
    InputHeader,
    /// Inside a `=` header line.
    StateHeader,
    /// Inside `<...>`, after the name.
    Action,
    /// Right after `<`, expecting the action name.
    Name,
}

impl CaptureMode {
    /// The header mode opened by a marker character.
    pub const fn for_header_marker(c: char) -> Option<CaptureMode> {
        match c {
            INPUT_HEADER_MARKER => Some(CaptureMode::InputHeader),
            STATE_HEADER_MARKER => Some(CaptureMode::StateHeader),
            _ => None,
        }
    }
}

/// LIFO stack of [`CaptureMode`]s.
///
/// Real nesting never exceeds two entries (`Name` over `Action`), so the
/// stack stays inline.
#[derive(Clone, Debug, Default)]
pub struct CaptureStack {
    modes: SmallVec<[CaptureMode; 4]>,
}

impl CaptureStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, mode: CaptureMode) {
        self.modes.push(mode);
        trace!(?mode, depth = self.modes.len(), "capture push");
    }

    /// Pop the top mode. Popping an empty stack is a no-op.
    pub fn pop(&mut self) -> Option<CaptureMode> {
        let mode = self.modes.pop();
        trace!(?mode, depth = self.modes.len(), "capture pop");
        mode
    }

    #[inline]
    pub fn top(&self) -> Option<CaptureMode> {
        self.modes.last().copied()
    }

    #[inline]
    pub fn top_is(&self, mode: CaptureMode) -> bool {
        self.top() == Some(mode)
    }

    pub fn top_is_any_of(&self, modes: &[CaptureMode]) -> bool {
        self.top().is_some_and(|top| modes.contains(&top))
    }

    /// Walk `order` front to back, popping each mode that is on top when
    /// its turn comes. Modes not on top are skipped.
    ///
    /// Returns how many modes were popped. Closing an action uses
    /// `[Name, Action]`: releases both when the name was never scanned,
    /// only `Action` otherwise.
    pub fn pop_matching_in_order(&mut self, order: &[CaptureMode]) -> usize {
        let mut popped = 0;
        for &mode in order {
            if self.top_is(mode) {
                self.pop();
                popped += 1;
            }
        }
        popped
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.modes.len()
    }

    /// Open modes, bottom first.
    #[inline]
    pub fn as_slice(&self) -> &[CaptureMode] {
        &self.modes
    }
}
