// Copyright (c) 2026 Arista Networks, Inc.
// Use of this source code is governed by the Apache License 2.0
// that can be found in the LICENSE file.

//! Literal (`|`) and folded (`>`) block scalars.
//!
//! Accepted forms are
//!
//! ```text
//! BS
//!   block
//!   lines
//!
//! BS #comment
//!   block
//!   lines
//! ```
//!
//! where the header `BS` matches `[|>][-+0-9]*` and block lines are empty or
//! indented more than the ambient indentation.

use chumsky::span::Span as _;

use crate::context::ParseContext;
use crate::error::{ErrorKind, SemanticError};
use crate::node::{Node, NodeKind};
use crate::scanner::{
    at_document_boundary, byte_at, end_of_block_indent, end_of_char, end_of_line,
    end_of_white_space, offset_diff,
};
use crate::span::{OriginMap, Span};

/// Block scalar chomping indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Chomping {
    /// `-` strip all trailing newlines
    Strip,
    /// (default) clip to single trailing newline
    #[default]
    Clip,
    /// `+` keep all trailing newlines
    Keep,
}

/// Block scalar style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockStyle {
    /// `|`
    Literal,
    /// `>`
    Folded,
}

impl BlockStyle {
    #[must_use]
    pub const fn from_indicator(ch: u8) -> Option<Self> {
        match ch {
            b'|' => Some(Self::Literal),
            b'>' => Some(Self::Folded),
            _ => None,
        }
    }

    #[must_use]
    pub const fn kind(self) -> NodeKind {
        match self {
            Self::Literal => NodeKind::BlockLiteral,
            Self::Folded => NodeKind::BlockFolded,
        }
    }
}

/// A block scalar node.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockScalar<'a> {
    node: Node<'a>,
    style: BlockStyle,
    block_indent: Option<usize>,
    chomping: Chomping,
    header: Option<Span>,
}

impl<'a> BlockScalar<'a> {
    #[must_use]
    pub fn new(style: BlockStyle, props: Vec<Span>) -> Self {
        Self {
            node: Node::new(style.kind(), props),
            style,
            block_indent: None,
            chomping: Chomping::default(),
            header: None,
        }
    }

    #[must_use]
    pub const fn node(&self) -> &Node<'a> {
        &self.node
    }

    pub fn node_mut(&mut self) -> &mut Node<'a> {
        &mut self.node
    }

    #[must_use]
    pub const fn style(&self) -> BlockStyle {
        self.style
    }

    /// Content indentation relative to the ambient indent, once known.
    #[must_use]
    pub const fn block_indent(&self) -> Option<usize> {
        self.block_indent
    }

    #[must_use]
    pub const fn chomping(&self) -> Chomping {
        self.chomping
    }

    /// Span of the `[|>][-+0-9]*` header.
    #[must_use]
    pub const fn header(&self) -> Option<Span> {
        self.header
    }

    /// Returns `true` if trailing blank lines belong to the value.
    #[must_use]
    pub fn includes_trailing_lines(&self) -> bool {
        self.chomping == Chomping::Keep
    }

    /// Parse the block scalar whose header indicator is at `start`.
    ///
    /// Returns the offset of the first character after the block.
    pub fn parse(&mut self, context: &'a ParseContext<'a>, start: usize) -> usize {
        self.node.set_context(context);
        log::trace!("block-start {} at {start}", self.node.kind());
        let mut offset = self.parse_block_header(context.src, start);
        offset = end_of_white_space(context.src, offset);
        offset = self.node.parse_comment(offset);
        offset = self.parse_block_value(context, offset);
        self.node.set_span(Span::new((), start..offset));
        log::trace!(
            "{} chomping={:?} block_indent={:?} value_span={:?}",
            self.node.kind(),
            self.chomping,
            self.block_indent,
            self.node.value_span(),
        );
        offset
    }

    /// Read the chomping and indentation indicators following the style
    /// indicator at `start`.
    ///
    /// Repeated or conflicting indicators are accepted: the last chomping
    /// indicator wins and all digits form a single number.
    fn parse_block_header(&mut self, src: &str, start: usize) -> usize {
        let mut offset = start + 1;
        let mut explicit_indent: usize = 0;
        loop {
            match byte_at(src, offset) {
                Some(b'-') => self.chomping = Chomping::Strip,
                Some(b'+') => self.chomping = Chomping::Keep,
                Some(digit @ b'0'..=b'9') => {
                    explicit_indent = explicit_indent
                        .saturating_mul(10)
                        .saturating_add(usize::from(digit - b'0'));
                }
                _ => break,
            }
            offset += 1;
        }
        self.block_indent = (explicit_indent != 0).then_some(explicit_indent);
        self.header = Some(Span::new((), start..offset));
        offset
    }

    /// Consume the block's lines, starting at the newline ending the header.
    fn parse_block_value(&mut self, context: &ParseContext<'a>, start: usize) -> usize {
        let ParseContext { src, indent } = *context;
        let explicit = self.block_indent.is_some();
        let mut offset = start;
        let mut value_end = start;
        // Deepest indentation among leading empty lines
        let mut min_block_indent: isize = 1;

        while byte_at(src, offset) == Some(b'\n') {
            offset += 1;
            if at_document_boundary(src, offset) {
                break;
            }
            let Some(end) = end_of_block_indent(src, indent, offset) else {
                break;
            };
            let ch = byte_at(src, end);
            let has_content = ch.is_some_and(|ch| ch != b'\n');
            let line_indent = offset_diff(end, offset).saturating_sub(indent);
            // An indented whitespace-only last line also fixes the indentation
            let sets_indent = has_content || (ch.is_none() && line_indent > 0);

            let kind = self.node.kind();
            match self.block_indent {
                None if sets_indent => {
                    if line_indent < min_block_indent {
                        let error = line_error(
                            ErrorKind::MoreIndentedLeadingEmptyLines,
                            kind,
                            src,
                            offset,
                        );
                        self.node.set_error(error);
                    }
                    self.block_indent = usize::try_from(line_indent).ok();
                }
                None => min_block_indent = min_block_indent.max(line_indent),
                Some(block_indent)
                    if has_content && line_indent < indent_as_isize(block_indent) =>
                {
                    // A less indented comment ends the block
                    if ch == Some(b'#') {
                        break;
                    }
                    let error =
                        line_error(ErrorKind::LessIndented { explicit }, kind, src, offset);
                    self.node.set_error(error);
                }
                Some(_) => {}
            }

            if ch == Some(b'\n') {
                offset = end;
            } else {
                offset = end_of_line(src, end);
                value_end = offset;
            }
        }

        if self.chomping != Chomping::Keep {
            offset = end_of_char(src, value_end);
        }
        let value_start = end_of_char(src, start);
        let offset = offset.max(value_start);
        self.node.set_value_span(Span::new((), value_start..offset));
        offset
    }

    /// The logical string value, with chomping and folding applied.
    ///
    /// Returns `None` until the block has been parsed.
    #[must_use]
    pub fn str_value(&self) -> Option<String> {
        let context = self.node.context()?;
        let value_span = self.node.value_span()?;
        let src = context.src;
        let start = value_span.start;
        let mut end = value_span.end;
        if start == end {
            return Some(String::new());
        }

        // Trim trailing blanks, remembering the last newline among them.
        let mut last_newline = None;
        let mut ch = end.checked_sub(1).and_then(|prev| byte_at(src, prev));
        while let Some(blank @ (b'\n' | b'\t' | b' ')) = ch {
            end -= 1;
            if end <= start {
                if self.chomping == Chomping::Keep {
                    break;
                }
                return Some(String::new());
            }
            if blank == b'\n' {
                last_newline = Some(end);
            }
            ch = end.checked_sub(1).and_then(|prev| byte_at(src, prev));
        }

        // Lines from `keep_start` on are kept verbatim and never folded.
        let mut keep_start = end + 1;
        if let Some(newline) = last_newline {
            if self.chomping == Chomping::Keep {
                keep_start = newline;
                end = value_span.end;
            } else {
                end = newline;
            }
        }

        let block_indent = indent_as_isize(self.block_indent.unwrap_or(0));
        let strip = usize::try_from(context.indent.saturating_add(block_indent)).unwrap_or(0);
        let folded = self.style == BlockStyle::Folded;
        let mut at_start = true;
        let mut out = String::new();
        let mut sep = "";
        let mut prev_more_indented = false;

        let mut i = start;
        while i < end {
            for _ in 0..strip {
                if byte_at(src, i) != Some(b' ') {
                    break;
                }
                i += 1;
            }
            let ch = byte_at(src, i);
            if ch == Some(b'\n') {
                if sep == "\n" {
                    out.push('\n');
                } else {
                    sep = "\n";
                }
            } else {
                let line_end = end_of_line(src, i);
                let line = src.get(i..line_end).unwrap_or_default();
                i = line_end;
                if folded && matches!(ch, Some(b' ' | b'\t')) && i < keep_start {
                    // More-indented lines are never folded.
                    if sep == " " {
                        sep = "\n";
                    } else if !prev_more_indented && !at_start && sep == "\n" {
                        sep = "\n\n";
                    }
                    out.push_str(sep);
                    out.push_str(line);
                    sep = if line_end < end { "\n" } else { "" };
                    prev_more_indented = true;
                } else {
                    out.push_str(sep);
                    out.push_str(line);
                    sep = if folded && i < keep_start { " " } else { "\n" };
                    prev_more_indented = false;
                }
                if at_start && !line.is_empty() {
                    at_start = false;
                }
            }
            i += 1;
        }

        if self.chomping != Chomping::Strip {
            out.push('\n');
        }
        Some(out)
    }

    /// See [`Node::set_orig_ranges`]. The header span is remapped too.
    pub fn set_orig_ranges(&mut self, map: &OriginMap, from: usize) -> usize {
        use crate::span::SpanExt as _;

        let from = self.node.set_orig_ranges(map, from);
        let Some(header) = self.header else {
            return from;
        };
        let (mapped, next) = header.remap_origin(map, from);
        self.node.set_orig_header(mapped);
        next
    }
}

/// Error covering the offending line.
fn line_error(kind: ErrorKind, node: NodeKind, src: &str, line_start: usize) -> SemanticError {
    let span = Span::new((), line_start..end_of_line(src, line_start));
    SemanticError::new(kind, node, span)
}

fn indent_as_isize(indent: usize) -> isize {
    isize::try_from(indent).unwrap_or(isize::MAX)
}
