// Copyright (c) 2026 Arista Networks, Inc.
// Use of this source code is governed by the Apache License 2.0
// that can be found in the LICENSE file.

//! Concrete syntax tree scanning layer for YAML.
//!
//! This crate turns a raw source buffer into typed CST nodes carrying exact
//! byte spans. It provides:
//! - Boundary scanning primitives (line ends, indentation, identifiers,
//!   document markers) over the source buffer
//! - A generic node holding its span, value span and anchor/tag/comment
//!   properties, with text derived lazily from the buffer
//! - Literal and folded block scalars, including chomping and folding
//!
//! Resolving the abstract data model (mappings, sequences, tags) happens in
//! higher layers that consume these nodes.
//!
//! # Example
//!
//! ```
//! use yaml_cst::{BlockScalar, BlockStyle, Chomping, ParseContext};
//!
//! let src = "text: |-\n  line one\n  line two\n";
//! let context = ParseContext::new(src, 0);
//!
//! let mut block = BlockScalar::new(BlockStyle::Literal, Vec::new());
//! let end = block.parse(&context, 6);
//!
//! assert_eq!(end, src.len());
//! assert_eq!(block.chomping(), Chomping::Strip);
//! assert_eq!(block.str_value().as_deref(), Some("line one\nline two"));
//! if let Some(error) = block.node().error() {
//!     eprintln!("Error: {error}");
//! }
//! ```

mod block;
mod context;
mod error;
mod node;
pub mod scanner;
mod span;

pub use block::{BlockScalar, BlockStyle, Chomping};
pub use context::ParseContext;
pub use error::{ErrorKind, SemanticError};
pub use node::{CstNode, Node, NodeKind, OrigSpans, Prop};
pub use span::{OriginMap, Span, SpanError, SpanExt};
