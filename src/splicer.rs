//! Replaces the generated region of a target file.
//!
//! The region starts after the last `// Begin` marker and ends at the first
//! `// End` line that follows it. Everything outside the region is kept as-is.

use crate::error::UpdateError;

pub const BEGIN_MARKER: &str = "// Begin";
pub const END_MARKER: &str = "// End\n";

/// Indentation written in front of the end marker, matching the records.
const END_MARKER_INDENT: &str = "    ";

/// Returns `content` with the generated region replaced by `block`.
///
/// The rest of the begin marker's line and the indentation of the old end
/// marker belong to the region and are rewritten.
pub fn splice(content: &str, block: &str) -> Result<String, UpdateError> {
    let begin = content
        .rfind(BEGIN_MARKER)
        .ok_or(UpdateError::MissingBeginMarker)?;

    let search_from = begin + BEGIN_MARKER.len();
    let end = content[search_from..]
        .find(END_MARKER)
        .map(|offset| search_from + offset)
        .ok_or(UpdateError::MissingEndMarker)?;

    let head = &content[..begin];
    let tail = &content[end + END_MARKER.len()..];

    let mut spliced = String::with_capacity(content.len() + block.len());
    spliced.push_str(head);
    spliced.push_str(BEGIN_MARKER);
    spliced.push('\n');
    spliced.push_str(block);
    spliced.push_str(END_MARKER_INDENT);
    spliced.push_str(END_MARKER);
    spliced.push_str(tail);

    Ok(spliced)
}
