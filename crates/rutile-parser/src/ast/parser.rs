//! Parser infrastructure for Rutile.
//!
//! Provides the main [`Parser`] struct, its options, and the diagnostic
//! plumbing shared by the item parsers.

use bumpalo::Bump;
use rutile_core::{Diagnostic, DiagnosticKind, Diagnostics, LexError, Span};

use crate::lexer::{Lexer, TokenStream};

/// Default limit on how deeply definitions, quotations, and maps may nest.
pub const DEFAULT_MAX_DEPTH: u32 = 128;

/// Knobs for a single parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Keep comments as [`Trivia`](crate::lexer::Trivia) on the source file.
    pub retain_trivia: bool,
    /// Constructs opened deeper than this are skipped with a diagnostic.
    ///
    /// The limit applies to well-formed input too: a balanced program nested
    /// deeper than `max_depth` gets a `NestingTooDeep` diagnostic and loses
    /// the innermost construct.
    pub max_depth: u32,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            retain_trivia: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    /// Keep comments as trivia.
    pub fn with_trivia(mut self) -> Self {
        self.retain_trivia = true;
        self
    }

    /// Set the nesting limit.
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Recursive-descent parser for Rutile source code.
///
/// Tokens are pulled lazily from the lexer with one token of lookahead.
/// The parser never fails: every problem becomes a [`Diagnostic`] and the
/// parse continues at the next usable token.
///
/// The `'src` lifetime is the source text; `'ast` is the arena holding the
/// tree and all token lexemes.
pub struct Parser<'src, 'ast> {
    /// Token source with one token of lookahead
    pub(super) tokens: TokenStream<'src, 'ast>,
    /// Accumulated diagnostics, in the order they were found
    pub(super) diagnostics: Diagnostics,
    /// Number of constructs currently open
    pub(super) depth: u32,
    pub(super) options: ParseOptions,
    /// Arena allocator for AST nodes
    pub(super) arena: &'ast Bump,
}

impl<'src, 'ast> Parser<'src, 'ast> {
    /// Create a new parser with default options.
    pub fn new(source: &'src str, arena: &'ast Bump) -> Self {
        Self::with_options(source, arena, ParseOptions::default())
    }

    /// Create a new parser with the given options.
    pub fn with_options(source: &'src str, arena: &'ast Bump, options: ParseOptions) -> Self {
        let lexer = Lexer::new(source, arena)
            .retain_trivia(options.retain_trivia);
        Self {
            tokens: TokenStream::new(lexer),
            diagnostics: Diagnostics::new(),
            depth: 0,
            options,
            arena,
        }
    }

    /// Check if there are any diagnostics.
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Take the diagnostics, leaving an empty collection.
    pub fn take_diagnostics(&mut self) -> Diagnostics {
        std::mem::take(&mut self.diagnostics)
    }

    // ========================================================================
    // Error Handling
    // ========================================================================

    /// Record a diagnostic.
    pub(super) fn error(&mut self, kind: DiagnosticKind, span: Span, message: impl Into<String>) {
        self.push_diagnostic(Diagnostic::new(kind, span, message));
    }

    /// Record the lexer error that belongs to a consumed error token.
    pub(super) fn lex_error(&mut self, fallback: Span) {
        let diagnostic = match self.tokens.take_lex_error() {
            Some(error) => Diagnostic::from(error),
            // Every error token queues exactly one error; stay total anyway.
            None => Diagnostic::from(LexError::UnexpectedCharacter {
                ch: '\u{FFFD}',
                span: fallback,
            }),
        };
        self.push_diagnostic(diagnostic);
    }

    fn push_diagnostic(&mut self, diagnostic: Diagnostic) {
        tracing::trace!(
            kind = %diagnostic.kind,
            span = %diagnostic.span,
            "recorded diagnostic"
        );
        self.diagnostics.push(diagnostic);
    }
}
