//! Code point classification.
//!
//! Pure predicates with no scanner state. `>` is both the input-header
//! marker and the action-end marker; which one it means is decided by the
//! capture mode, never here.

/// Opens an input header when repeated at the start of a line.
pub const INPUT_HEADER_MARKER: char = '>';
/// Opens a state header when repeated at the start of a line.
pub const STATE_HEADER_MARKER: char = '=';
/// Opens an action anywhere in prose.
pub const ACTION_START: char = '<';
/// Closes an action.
pub const ACTION_END: char = '>';

#[inline]
pub const fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r')
}

/// Space or tab.
#[inline]
pub const fn is_horizontal_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t')
}

#[inline]
pub const fn is_whitespace(c: char) -> bool {
    is_line_break(c) || is_horizontal_whitespace(c)
}

#[inline]
pub const fn is_input_header_marker(c: char) -> bool {
    c == INPUT_HEADER_MARKER
}

#[inline]
pub const fn is_state_header_marker(c: char) -> bool {
    c == STATE_HEADER_MARKER
}

#[inline]
pub const fn is_header_marker(c: char) -> bool {
    is_input_header_marker(c) || is_state_header_marker(c)
}

#[inline]
pub const fn is_action_start(c: char) -> bool {
    c == ACTION_START
}

#[inline]
pub const fn is_action_end(c: char) -> bool {
    c == ACTION_END
}
