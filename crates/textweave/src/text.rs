//! Flattening clustered lines into plain reading-order text.
use crate::types::Line;
use crate::utils::{COLUMN_SEPARATOR, LINE_SEPARATOR};

/// Join lines into plain reading-order text: tokens separated by a tab,
/// lines separated by a newline.
///
/// An empty line sequence yields an empty string. Whether blank output means
/// "no text could be extracted" is the caller's policy, not this crate's.
pub fn lines_to_text(lines: &[Line]) -> String {
    lines
        .iter()
        .map(|line| line.tokens.join(&COLUMN_SEPARATOR.to_string()))
        .collect::<Vec<_>>()
        .join(&LINE_SEPARATOR.to_string())
}
