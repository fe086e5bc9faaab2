// Copyright (c) 2026 Arista Networks, Inc.
// Use of this source code is governed by the Apache License 2.0
// that can be found in the LICENSE file.

//! Semantic errors attached to CST nodes.
//!
//! These errors never interrupt scanning. A node records at most one of
//! them and consumers decide whether it is fatal for their purposes.

use crate::node::NodeKind;
use crate::span::Span;

/// An indentation-legality violation found while scanning a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticError {
    /// The kind of error
    pub kind: ErrorKind,
    /// Kind of the node the error is attached to
    pub node: NodeKind,
    /// The offending source line
    pub span: Span,
}

/// The kind of semantic error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A block scalar line is less indented than the block indentation.
    ///
    /// `explicit` is set when the indentation came from the header's
    /// indentation indicator rather than from the first content line.
    LessIndented { explicit: bool },

    /// Leading empty lines are more indented than the first content line,
    /// so the block indentation cannot be inferred.
    MoreIndentedLeadingEmptyLines,
}

impl ErrorKind {
    /// Get a suggestion for how to fix this error.
    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::LessIndented { explicit: true } => {
                Some("Indent every content line by at least the indentation indicator")
            }
            Self::LessIndented { explicit: false } => {
                Some("Indent every content line at least as far as the first one")
            }
            Self::MoreIndentedLeadingEmptyLines => Some(
                "Add an indentation indicator to the header, e.g. |2, or trim the leading empty lines",
            ),
        }
    }
}

impl SemanticError {
    #[must_use]
    pub const fn new(kind: ErrorKind, node: NodeKind, span: Span) -> Self {
        Self { kind, node, span }
    }

    /// Get a suggestion for how to fix this error.
    ///
    /// Delegates to [`ErrorKind::suggestion()`].
    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        self.kind.suggestion()
    }
}

impl std::fmt::Display for SemanticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            ErrorKind::LessIndented { explicit } => {
                let reference = if explicit {
                    "explicit indentation indicator"
                } else {
                    "first line"
                };
                write!(
                    f,
                    "Block scalars must not be less indented than their {reference}"
                )
            }
            ErrorKind::MoreIndentedLeadingEmptyLines => write!(
                f,
                "Block scalars with more-indented leading empty lines must use an explicit indentation indicator"
            ),
        }
    }
}

impl std::error::Error for SemanticError {}
