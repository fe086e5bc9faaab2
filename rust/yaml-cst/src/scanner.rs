// Copyright (c) 2026 Arista Networks, Inc.
// Use of this source code is governed by the Apache License 2.0
// that can be found in the LICENSE file.

//! Boundary scanning over the source buffer.
//!
//! Every function here is pure and total: offsets at or past the end of the
//! buffer are valid inputs, and the scanning functions never return an
//! offset smaller than the one they were given (except [`normalize_offset`],
//! which may step back over a single newline).
//!
//! Only ASCII bytes are ever matched, so every returned offset lies on a
//! UTF-8 character boundary whenever the input offset does.

/// Byte at `offset`, or `None` at or past the end of the buffer.
#[inline]
pub(crate) fn byte_at(src: &str, offset: usize) -> Option<u8> {
    src.as_bytes().get(offset).copied()
}

/// Byte before `offset`, or `None` at the start of the buffer.
#[inline]
fn byte_before(src: &str, offset: usize) -> Option<u8> {
    offset.checked_sub(1).and_then(|prev| byte_at(src, prev))
}

fn is_blank(ch: u8) -> bool {
    matches!(ch, b'\n' | b'\t' | b' ')
}

/// Scan forward while `pred` holds.
fn scan_while(src: &str, mut offset: usize, pred: impl Fn(u8) -> bool) -> usize {
    while byte_at(src, offset).is_some_and(&pred) {
        offset += 1;
    }
    offset
}

/// Returns `true` if `offset` starts a `---` or `...` document marker line,
/// or is the end of the buffer at a line start.
///
/// The marker must be exactly three characters long: it has to be followed
/// by a blank or the end of the buffer.
#[must_use]
pub fn at_document_boundary(src: &str, offset: usize) -> bool {
    if byte_before(src, offset).is_some_and(|prev| prev != b'\n') {
        return false;
    }
    let Some(ch0) = byte_at(src, offset) else {
        return true;
    };
    if ch0 != b'-' && ch0 != b'.' {
        return false;
    }
    byte_at(src, offset + 1) == Some(ch0)
        && byte_at(src, offset + 2) == Some(ch0)
        && byte_at(src, offset + 3).is_none_or(|next| is_blank(next) || next == b'\r')
}

/// End of an anchor, alias or tag name starting at `offset`.
///
/// A verbatim tag (`<...>`) ends after its closing `>`; an unterminated one
/// ends at the first blank.
#[must_use]
pub fn end_of_identifier(src: &str, offset: usize) -> usize {
    if byte_at(src, offset) == Some(b'<') {
        let end = scan_while(src, offset, |ch| !matches!(ch, b'\n' | b'\t' | b' ' | b'>'));
        return if byte_at(src, end) == Some(b'>') {
            end + 1
        } else {
            end
        };
    }
    scan_while(src, offset, |ch| {
        !matches!(ch, b'\n' | b'\t' | b' ' | b'[' | b']' | b'{' | b'}' | b',')
    })
}

/// End of a run of spaces. Tabs are not indentation.
#[must_use]
pub fn end_of_indent(src: &str, offset: usize) -> usize {
    scan_while(src, offset, |ch| ch == b' ')
}

/// Offset of the next `\n`, or the end of the buffer.
#[must_use]
pub fn end_of_line(src: &str, offset: usize) -> usize {
    scan_while(src, offset, |ch| ch != b'\n')
}

/// End of a run of spaces and tabs.
#[must_use]
pub fn end_of_white_space(src: &str, offset: usize) -> usize {
    scan_while(src, offset, |ch| ch == b' ' || ch == b'\t')
}

/// End of the indentation of the line starting at `line_start`, if the line
/// is indented more than `indent` or is blank.
///
/// For a blank line the returned offset is that of its terminating newline
/// (or the end of the buffer). `None` means the line is not indented enough
/// to belong to a block at this level.
#[must_use]
pub fn end_of_block_indent(src: &str, indent: isize, line_start: usize) -> Option<usize> {
    let in_end = end_of_indent(src, line_start);
    if offset_diff(in_end, line_start) > indent {
        return Some(in_end);
    }
    let ws_end = end_of_white_space(src, in_end);
    match byte_at(src, ws_end) {
        None | Some(b'\n') => Some(ws_end),
        Some(_) => None,
    }
}

/// Returns `true` at a newline, tab or space.
#[must_use]
pub fn at_blank(src: &str, offset: usize) -> bool {
    byte_at(src, offset).is_some_and(is_blank)
}

/// Returns `true` at a `?`, `:` or `-` indicator followed by a blank.
#[must_use]
pub fn at_collection_item(src: &str, offset: usize) -> bool {
    matches!(byte_at(src, offset), Some(b'?' | b':' | b'-')) && at_blank(src, offset + 1)
}

/// Decide whether the node starting with `ch` is nested in the current one.
///
/// With `indicator_as_indent`, a collection indicator at the same
/// indentation counts as one level deeper.
#[must_use]
pub fn next_node_is_indented(
    ch: Option<u8>,
    indent_diff: isize,
    indicator_as_indent: bool,
) -> bool {
    let Some(ch) = ch else {
        return false;
    };
    if indent_diff < 0 {
        return false;
    }
    if indent_diff > 0 {
        return true;
    }
    indicator_as_indent && matches!(ch, b'-' | b'?' | b':')
}

/// Move `offset` to a line end, the buffer end, or the next non-blank.
///
/// A position just after a newline steps back onto that newline so that
/// trailing blank handling lines up with line starts.
#[must_use]
pub fn normalize_offset(src: &str, offset: usize) -> usize {
    match byte_at(src, offset) {
        None => offset,
        Some(ch) if ch != b'\n' && byte_before(src, offset) == Some(b'\n') => offset - 1,
        Some(_) => end_of_white_space(src, offset),
    }
}

/// Offset just past the character at `offset`, or `offset` itself at the end
/// of the buffer.
pub(crate) fn end_of_char(src: &str, offset: usize) -> usize {
    src.get(offset..)
        .and_then(|rest| rest.chars().next())
        .map_or(offset, |ch| offset + ch.len_utf8())
}

/// Signed `a - b` for buffer offsets.
#[inline]
pub(crate) fn offset_diff(a: usize, b: usize) -> isize {
    isize::try_from(a).unwrap_or(isize::MAX) - isize::try_from(b).unwrap_or(isize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_boundary_markers() {
        assert!(at_document_boundary("---\n", 0));
        assert!(at_document_boundary("...", 0));
        assert!(at_document_boundary("a\n--- x", 2));
        assert!(at_document_boundary("a\n...\n", 2));
        assert!(!at_document_boundary("--\n", 0));
        assert!(!at_document_boundary("----\n", 0));
        assert!(!at_document_boundary("-.-\n", 0));
        assert!(!at_document_boundary("a ---", 2));
    }

    #[test]
    fn test_document_boundary_at_end() {
        assert!(at_document_boundary("", 0));
        assert!(at_document_boundary("a\n", 2));
        assert!(!at_document_boundary("ab", 2));
    }

    #[test]
    fn test_end_of_identifier() {
        let src = "&anchor value";
        assert_eq!(end_of_identifier(src, 1), 7);
        assert_eq!(end_of_identifier("*a,b", 1), 2);
        assert_eq!(end_of_identifier("!tag]", 1), 4);
        assert_eq!(end_of_identifier("!<tag:x,y> z", 1), 10);
        // Verbatim tags may contain flow indicators
        assert_eq!(end_of_identifier("!<a[b]> z", 1), 7);
        // Unterminated verbatim tag
        assert_eq!(end_of_identifier("!<abc def", 1), 5);
        assert_eq!(end_of_identifier("!<abc", 1), 5);
    }

    #[test]
    fn test_end_of_indent_ignores_tabs() {
        assert_eq!(end_of_indent("   x", 0), 3);
        assert_eq!(end_of_indent("  \tx", 0), 2);
        assert_eq!(end_of_white_space("  \tx", 0), 3);
    }

    #[test]
    fn test_end_of_line() {
        assert_eq!(end_of_line("abc\ndef", 0), 3);
        assert_eq!(end_of_line("abc\ndef", 4), 7);
        assert_eq!(end_of_line("abc", 3), 3);
        assert_eq!(end_of_line("abc", 10), 10);
    }

    #[test]
    fn test_scanners_are_idempotent() {
        let src = "  \t key: value # c\n\n  next";
        for offset in 0..=src.len() {
            let eol = end_of_line(src, offset);
            assert_eq!(end_of_line(src, eol), eol);
            let ws = end_of_white_space(src, offset);
            assert_eq!(end_of_white_space(src, ws), ws);
            let ind = end_of_indent(src, offset);
            assert_eq!(end_of_indent(src, ind), ind);
            assert!(eol >= offset && ws >= offset && ind >= offset);
        }
    }

    #[test]
    fn test_end_of_block_indent() {
        // More indented than the ambient level
        assert_eq!(end_of_block_indent("   x", 2, 0), Some(3));
        // Not indented enough
        assert_eq!(end_of_block_indent("  x", 2, 0), None);
        // Blank lines always qualify
        assert_eq!(end_of_block_indent(" \t\nx", 2, 0), Some(2));
        assert_eq!(end_of_block_indent("\n", 2, 0), Some(0));
        assert_eq!(end_of_block_indent(" ", 2, 0), Some(1));
        // Document level allows column zero
        assert_eq!(end_of_block_indent("x", -1, 0), Some(0));
    }

    #[test]
    fn test_at_blank() {
        assert!(at_blank(" ", 0));
        assert!(at_blank("\t", 0));
        assert!(at_blank("\n", 0));
        assert!(!at_blank("x", 0));
        assert!(!at_blank("", 0));
    }

    #[test]
    fn test_at_collection_item() {
        assert!(at_collection_item("- ", 0));
        assert!(at_collection_item("? ", 0));
        assert!(at_collection_item(": ", 0));
        assert!(at_collection_item("-\n", 0));
        assert!(!at_collection_item("-x", 0));
        assert!(!at_collection_item("-", 0));
        assert!(!at_collection_item("x ", 0));
    }

    #[test]
    fn test_next_node_is_indented() {
        assert!(!next_node_is_indented(None, 2, true));
        assert!(!next_node_is_indented(Some(b'x'), -1, true));
        assert!(next_node_is_indented(Some(b'x'), 1, false));
        assert!(!next_node_is_indented(Some(b'x'), 0, true));
        assert!(next_node_is_indented(Some(b'-'), 0, true));
        assert!(next_node_is_indented(Some(b'?'), 0, true));
        assert!(next_node_is_indented(Some(b':'), 0, true));
        assert!(!next_node_is_indented(Some(b'-'), 0, false));
    }

    #[test]
    fn test_end_of_char() {
        assert_eq!(end_of_char("a\n", 1), 2);
        assert_eq!(end_of_char("|é\n", 1), 3);
        assert_eq!(end_of_char("ab", 2), 2);
        assert_eq!(end_of_char("ab", 5), 5);
    }

    #[test]
    fn test_normalize_offset() {
        let src = "a\nb  c";
        // End of buffer
        assert_eq!(normalize_offset(src, 6), 6);
        // Just after a newline: step back onto it
        assert_eq!(normalize_offset(src, 2), 1);
        // Otherwise skip whitespace
        assert_eq!(normalize_offset(src, 3), 5);
        assert_eq!(normalize_offset(src, 1), 1);
        assert_eq!(normalize_offset("a\n\nb", 2), 2);
    }
}
