//! Rutile parser crate.
//!
//! This crate provides the lexer and error-tolerant parser for Rutile, a
//! small concatenative scripting language. It includes:
//! - Lexical analysis (tokenization, with optional comment trivia)
//! - Syntax tree definitions with byte/line/column spans
//! - A recursive-descent parser that always produces a full tree
//! - Visitor, unparser, and outline helpers for editor tooling
//!
//! # Example
//!
//! ```
//! use rutile_parser::Parser;
//! use bumpalo::Bump;
//!
//! let arena = Bump::new();
//! let source = r#"
//!     : deploy ( env -- )
//!         { "env" swap } @hooks.deploy ;
//!     "prod" deploy
//! "#;
//!
//! let (file, diagnostics) = Parser::parse_lenient(source, &arena);
//! assert!(diagnostics.is_empty());
//! assert_eq!(file.items().len(), 3);
//! ```

pub mod ast;
pub mod lexer;
pub mod outline;

pub use ast::{
    DEFAULT_MAX_DEPTH, Item, MapLiteral, NumberLiteral, ParseOptions, Parser, Quotation, SourceFile,
    StringLiteral, WebhookSigil, Word, WordDefinition,
};
pub use ast::{unparse, visitor};
pub use lexer::{Lexer, Token, TokenKind, TokenStream, Trivia, TriviaKind, tokenize};
pub use rutile_core::{Diagnostic, DiagnosticKind, Diagnostics, LexError, Span};
