// Copyright (c) 2026 Arista Networks, Inc.
// Use of this source code is governed by the Apache License 2.0
// that can be found in the LICENSE file.

//! Generic CST nodes.
//!
//! A node is a kind tag plus spans into the shared source buffer. Anchor, tag
//! and comment properties are kept as spans and only turned into text when
//! asked for, so the common no-property path never allocates.

use chumsky::span::Span as _;

use crate::block::{BlockScalar, BlockStyle};
use crate::context::ParseContext;
use crate::error::SemanticError;
use crate::scanner::{byte_at, end_of_line};
use crate::span::{OriginMap, Span, SpanExt as _};

/// The closed set of CST node kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Alias,
    BlockFolded,
    BlockLiteral,
    Collection,
    Comment,
    Directive,
    Document,
    DoubleQuoted,
    FlowMap,
    FlowSeq,
    MapKey,
    MapValue,
    Plain,
    SeqItem,
    SingleQuoted,
}

impl NodeKind {
    /// Returns `true` for `|` and `>` scalars.
    #[must_use]
    pub const fn is_block_scalar(self) -> bool {
        matches!(self, Self::BlockFolded | Self::BlockLiteral)
    }

    /// Returns `true` for kinds whose text is unambiguous without context:
    /// quoted scalars and flow collections.
    #[must_use]
    pub const fn is_scalar_like(self) -> bool {
        matches!(
            self,
            Self::DoubleQuoted | Self::SingleQuoted | Self::FlowMap | Self::FlowSeq
        )
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Alias => "ALIAS",
            Self::BlockFolded => "BLOCK_FOLDED",
            Self::BlockLiteral => "BLOCK_LITERAL",
            Self::Collection => "COLLECTION",
            Self::Comment => "COMMENT",
            Self::Directive => "DIRECTIVE",
            Self::Document => "DOCUMENT",
            Self::DoubleQuoted => "DOUBLE",
            Self::FlowMap => "FLOW_MAP",
            Self::FlowSeq => "FLOW_SEQ",
            Self::MapKey => "MAP_KEY",
            Self::MapValue => "MAP_VALUE",
            Self::Plain => "PLAIN",
            Self::SeqItem => "SEQ_ITEM",
            Self::SingleQuoted => "SINGLE",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Node property, identified by the first character of its span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prop {
    /// `&name`
    Anchor,
    /// `!tag`
    Tag,
    /// `# text`
    Comment,
}

impl Prop {
    #[must_use]
    pub const fn indicator(self) -> u8 {
        match self {
            Self::Anchor => b'&',
            Self::Tag => b'!',
            Self::Comment => b'#',
        }
    }

    #[must_use]
    pub const fn from_indicator(ch: u8) -> Option<Self> {
        match ch {
            b'&' => Some(Self::Anchor),
            b'!' => Some(Self::Tag),
            b'#' => Some(Self::Comment),
            _ => None,
        }
    }
}

/// Spans translated to original-source coordinates by
/// [`Node::set_orig_ranges`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrigSpans {
    pub span: Option<Span>,
    pub value_span: Option<Span>,
    pub props: Vec<Span>,
    /// Block scalar header; unset for other kinds.
    pub header: Option<Span>,
}

/// A CST node.
///
/// Created empty by the dispatcher with a kind and any properties scanned
/// ahead of it, then filled in by its parse routine. `span` and `value_span`
/// are assigned at most once; `value_span` lies within `span` when both are
/// set.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<'a> {
    kind: NodeKind,
    props: Vec<Span>,
    span: Option<Span>,
    value_span: Option<Span>,
    context: Option<&'a ParseContext<'a>>,
    error: Option<SemanticError>,
    orig: Option<OrigSpans>,
}

impl<'a> Node<'a> {
    #[must_use]
    pub fn new(kind: NodeKind, props: Vec<Span>) -> Self {
        Self {
            kind,
            props,
            span: None,
            value_span: None,
            context: None,
            error: None,
            orig: None,
        }
    }

    /// Attach the shared parse context.
    #[must_use]
    pub fn with_context(mut self, context: &'a ParseContext<'a>) -> Self {
        self.context = Some(context);
        self
    }

    pub(crate) fn set_context(&mut self, context: &'a ParseContext<'a>) {
        self.context = Some(context);
    }

    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Property spans in source order.
    #[must_use]
    pub fn props(&self) -> &[Span] {
        &self.props
    }

    #[must_use]
    pub const fn span(&self) -> Option<Span> {
        self.span
    }

    #[must_use]
    pub const fn value_span(&self) -> Option<Span> {
        self.value_span
    }

    #[must_use]
    pub const fn context(&self) -> Option<&'a ParseContext<'a>> {
        self.context
    }

    /// The semantic error recorded while parsing, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&SemanticError> {
        self.error.as_ref()
    }

    /// Spans in original-source coordinates, once remapped.
    #[must_use]
    pub const fn orig_spans(&self) -> Option<&OrigSpans> {
        self.orig.as_ref()
    }

    /// Assign the node's overall span. Only the first assignment is kept.
    pub fn set_span(&mut self, span: Span) {
        self.span.get_or_insert(span);
    }

    /// Assign the node's value span. Only the first assignment is kept.
    pub fn set_value_span(&mut self, span: Span) {
        self.value_span.get_or_insert(span);
    }

    /// Record a semantic error. Only the first one is kept.
    pub fn set_error(&mut self, error: SemanticError) {
        if self.error.is_none() {
            log::debug!("{} at {:?}: {error}", self.kind, error.span);
            self.error = Some(error);
        }
    }

    /// Text of property `index` after its indicator, if it is a `prop`.
    #[must_use]
    pub fn property_value(&self, index: usize, prop: Prop) -> Option<&'a str> {
        let src = self.context?.src;
        let span = self.props.get(index)?;
        if byte_at(src, span.start) != Some(prop.indicator()) {
            return None;
        }
        src.get(span.start + 1..span.end)
    }

    fn first_property(&self, prop: Prop) -> Option<&'a str> {
        (0..self.props.len()).find_map(|idx| self.property_value(idx, prop))
    }

    /// The first anchor property.
    #[must_use]
    pub fn anchor(&self) -> Option<&'a str> {
        self.first_property(Prop::Anchor)
    }

    /// The first tag property.
    #[must_use]
    pub fn tag(&self) -> Option<&'a str> {
        self.first_property(Prop::Tag)
    }

    /// All comment properties joined with newlines.
    #[must_use]
    pub fn comment(&self) -> Option<String> {
        let comments: Vec<&str> = (0..self.props.len())
            .filter_map(|idx| self.property_value(idx, Prop::Comment))
            .collect();
        if comments.is_empty() {
            None
        } else {
            Some(comments.join("\n"))
        }
    }

    /// Returns `true` if any property is a comment.
    #[must_use]
    pub fn has_comment(&self) -> bool {
        let Some(context) = self.context else {
            return false;
        };
        self.props
            .iter()
            .any(|span| byte_at(context.src, span.start) == Some(Prop::Comment.indicator()))
    }

    /// See [`NodeKind::is_scalar_like`].
    #[must_use]
    pub const fn is_scalar_like(&self) -> bool {
        self.kind.is_scalar_like()
    }

    /// The source text covered by the value span.
    #[must_use]
    pub fn raw_value(&self) -> Option<&'a str> {
        let src = self.context?.src;
        let span = self.value_span?;
        src.get(span.start..span.end)
    }

    /// Consume a comment starting at `start`, recording it as a property.
    ///
    /// Returns the offset of the end of the comment line, or `start` if there
    /// is no comment there.
    pub fn parse_comment(&mut self, start: usize) -> usize {
        let Some(context) = self.context else {
            return start;
        };
        if byte_at(context.src, start) != Some(Prop::Comment.indicator()) {
            return start;
        }
        let end = end_of_line(context.src, start + 1);
        self.props.push(Span::new((), start..end));
        end
    }

    /// Translate the node's spans to original-source coordinates.
    ///
    /// Returns the break-list index the next node should resume from.
    pub fn set_orig_ranges(&mut self, map: &OriginMap, mut from: usize) -> usize {
        let mut orig = OrigSpans::default();
        if let Some(span) = self.span {
            let (mapped, next) = span.remap_origin(map, from);
            orig.span = Some(mapped);
            from = next;
        }
        orig.value_span = self.value_span.map(|span| span.remap_origin(map, from).0);
        orig.props = self
            .props
            .iter()
            .map(|span| span.remap_origin(map, from).0)
            .collect();
        self.orig = Some(orig);
        from
    }

    pub(crate) fn set_orig_header(&mut self, header: Span) {
        self.orig.get_or_insert_with(OrigSpans::default).header = Some(header);
    }
}

/// A CST node of any kind.
///
/// Block scalars carry extra header state; every other kind is a plain
/// [`Node`].
#[derive(Debug, Clone, PartialEq)]
pub enum CstNode<'a> {
    Generic(Node<'a>),
    Block(BlockScalar<'a>),
}

impl<'a> CstNode<'a> {
    /// Create an empty node of `kind` with pre-scanned properties.
    #[must_use]
    pub fn new(kind: NodeKind, props: Vec<Span>) -> Self {
        match kind {
            NodeKind::BlockFolded => Self::Block(BlockScalar::new(BlockStyle::Folded, props)),
            NodeKind::BlockLiteral => Self::Block(BlockScalar::new(BlockStyle::Literal, props)),
            NodeKind::Alias
            | NodeKind::Collection
            | NodeKind::Comment
            | NodeKind::Directive
            | NodeKind::Document
            | NodeKind::DoubleQuoted
            | NodeKind::FlowMap
            | NodeKind::FlowSeq
            | NodeKind::MapKey
            | NodeKind::MapValue
            | NodeKind::Plain
            | NodeKind::SeqItem
            | NodeKind::SingleQuoted => Self::Generic(Node::new(kind, props)),
        }
    }

    #[must_use]
    pub const fn node(&self) -> &Node<'a> {
        match self {
            Self::Generic(node) => node,
            Self::Block(block) => block.node(),
        }
    }

    pub fn node_mut(&mut self) -> &mut Node<'a> {
        match self {
            Self::Generic(node) => node,
            Self::Block(block) => block.node_mut(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        self.node().kind()
    }

    #[must_use]
    pub const fn as_block(&self) -> Option<&BlockScalar<'a>> {
        match self {
            Self::Block(block) => Some(block),
            Self::Generic(_) => None,
        }
    }

    pub fn as_block_mut(&mut self) -> Option<&mut BlockScalar<'a>> {
        match self {
            Self::Block(block) => Some(block),
            Self::Generic(_) => None,
        }
    }

    /// The logical string value of a block scalar.
    ///
    /// Scalars of other kinds are resolved outside this crate.
    #[must_use]
    pub fn str_value(&self) -> Option<String> {
        match self {
            Self::Block(block) => block.str_value(),
            Self::Generic(_) => None,
        }
    }

    /// See [`Node::set_orig_ranges`].
    pub fn set_orig_ranges(&mut self, map: &OriginMap, from: usize) -> usize {
        match self {
            Self::Generic(node) => node.set_orig_ranges(map, from),
            Self::Block(block) => block.set_orig_ranges(map, from),
        }
    }
}
