// Copyright (c) 2026 Arista Networks, Inc.
// Use of this source code is governed by the Apache License 2.0
// that can be found in the LICENSE file.

/// Shared, read-only state for one parse pass.
///
/// Every node produced by the pass borrows the same context, so the source
/// buffer is never copied per node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseContext<'src> {
    /// The fully materialized source buffer.
    pub src: &'src str,
    /// Indentation of the enclosing structure. Document-level content uses `-1`
    /// so that it may start at column zero.
    pub indent: isize,
}

impl<'src> ParseContext<'src> {
    #[must_use]
    pub const fn new(src: &'src str, indent: isize) -> Self {
        Self { src, indent }
    }

    /// Context for content at document level.
    #[must_use]
    pub const fn document(src: &'src str) -> Self {
        Self::new(src, -1)
    }
}
