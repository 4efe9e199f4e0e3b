//! Rutile: lexer and error-tolerant parser for a small concatenative
//! scripting language.
//!
//! The parser is built for editor use: input is often mid-edit, so every
//! parse produces a complete tree plus a list of diagnostics instead of
//! stopping at the first problem.
//!
//! # Example
//!
//! ```
//! use rutile::{parse_lenient, Item};
//! use bumpalo::Bump;
//!
//! let arena = Bump::new();
//! let (file, diagnostics) = parse_lenient(": greet \"hi\" print ; greet [", &arena);
//!
//! assert_eq!(file.items().len(), 3);
//! assert!(matches!(file.items()[2], Item::Quotation(_)));
//! assert_eq!(diagnostics.len(), 1);
//! ```

pub use rutile_core::{Diagnostic, DiagnosticKind, Diagnostics, LexError, Span};
pub use rutile_parser::outline::{
    FoldKind, FoldingRange, Highlight, HighlightCategory, folding_ranges, highlights,
};
pub use rutile_parser::unparse::{unparse, unparse_item};
pub use rutile_parser::visitor;
pub use rutile_parser::{
    DEFAULT_MAX_DEPTH, Item, Lexer, MapLiteral, NumberLiteral, ParseOptions, Parser, Quotation,
    SourceFile, StringLiteral, Token, TokenKind, TokenStream, Trivia, TriviaKind, WebhookSigil,
    Word, WordDefinition, tokenize,
};

use bumpalo::Bump;

/// Parse source text, returning the tree and every diagnostic.
///
/// Never fails. Malformed input yields a best-effort tree.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn parse_lenient<'src, 'ast>(
    source: &'src str,
    arena: &'ast Bump,
) -> (SourceFile<'ast>, Diagnostics) {
    Parser::parse_lenient(source, arena)
}

/// Parse source text with explicit [`ParseOptions`].
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn parse_with_options<'src, 'ast>(
    source: &'src str,
    arena: &'ast Bump,
    options: ParseOptions,
) -> (SourceFile<'ast>, Diagnostics) {
    Parser::parse_with_options(source, arena, options)
}

/// Parse source text, failing with the full diagnostic list if anything
/// was reported.
pub fn parse<'src, 'ast>(
    source: &'src str,
    arena: &'ast Bump,
) -> Result<SourceFile<'ast>, Diagnostics> {
    Parser::parse(source, arena)
}
