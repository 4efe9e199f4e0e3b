//! Shared types for the Rutile lexer and parser.
//!
//! - [`Span`]: byte range plus start line/column
//! - [`LexError`]: lexical failures carried by error tokens
//! - [`Diagnostic`] / [`Diagnostics`]: recoverable problems reported by a parse

mod error;
mod span;

pub use error::{Diagnostic, DiagnosticKind, Diagnostics, LexError};
pub use span::Span;
