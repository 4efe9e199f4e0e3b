//! Syntax tree for Rutile, and the parser that builds it.
//!
//! This module provides:
//! - Node definitions for every production ([`Item`] and friends)
//! - The error-tolerant recursive-descent [`Parser`]
//! - A [`Visitor`](visitor::Visitor) for traversal
//! - An unparser that re-serializes a tree
//!
//! # Example
//!
//! ```
//! use rutile_parser::{Item, Parser};
//! use bumpalo::Bump;
//!
//! let arena = Bump::new();
//! let (file, diagnostics) = Parser::parse_lenient(": sq dup * ; 4 sq", &arena);
//!
//! assert!(diagnostics.is_empty());
//! assert!(matches!(file.items()[0], Item::WordDefinition(_)));
//! ```

mod item_parser;
mod node;
mod parser;
pub mod unparse;
pub mod visitor;

pub use node::*;
pub use parser::{DEFAULT_MAX_DEPTH, ParseOptions, Parser};

use crate::lexer::Trivia;
use rutile_core::Span;

/// A parsed source file: the root of the tree.
///
/// The file borrows from an arena allocator. All nodes are allocated in the
/// arena and remain valid for the lifetime of the arena. Nothing is mutated
/// after construction; re-parsing builds a fresh tree.
#[derive(Debug, Clone, Copy)]
pub struct SourceFile<'ast> {
    items: &'ast [Item<'ast>],
    trivia: &'ast [Trivia<'ast>],
    span: Span,
}

impl<'ast> SourceFile<'ast> {
    pub(crate) fn new(items: &'ast [Item<'ast>], trivia: &'ast [Trivia<'ast>], span: Span) -> Self {
        Self {
            items,
            trivia,
            span,
        }
    }

    /// Get the top-level items in source order.
    pub fn items(&self) -> &'ast [Item<'ast>] {
        self.items
    }

    /// Comments seen while lexing. Empty unless trivia retention was enabled.
    pub fn trivia(&self) -> &'ast [Trivia<'ast>] {
        self.trivia
    }

    /// Get the span of the whole source text.
    pub fn span(&self) -> Span {
        self.span
    }
}
