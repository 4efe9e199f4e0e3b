//! Error and diagnostic types shared by the lexer and parser.
//!
//! ## Hierarchy
//!
//! ```text
//! Diagnostic (kind + span + message)
//! ├── lexical   - produced from a LexError carried by an error token
//! └── syntactic - produced by the parser's recovery paths
//! ```
//!
//! Nothing here is fatal. Every failure is recorded as a [`Diagnostic`] and
//! the parse continues; [`Diagnostics`] only becomes an `Err` when a caller
//! asks for strict parsing.

use std::fmt;

use thiserror::Error;

use crate::Span;

// ============================================================================
// Lexer Errors
// ============================================================================

/// Errors that occur during lexical analysis.
///
/// The lexer never returns these. It emits an error token and queues the
/// matching `LexError` so scanning can continue past the failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A `(` block comment reached end of input before its depth returned to zero.
    #[error("unterminated block comment at {span} (expected closing `)`)")]
    UnterminatedBlockComment { span: Span },

    /// A string literal reached a newline or end of input before its closing quote.
    #[error("unterminated string literal at {span}")]
    UnterminatedString { span: Span },

    /// An `@` was not followed by an identifier start.
    #[error("invalid webhook sigil at {span}: expected identifier after `@`")]
    InvalidSigil { span: Span },

    /// A character that starts no token.
    #[error("unexpected character '{}' at {span}", ch.escape_default())]
    UnexpectedCharacter { ch: char, span: Span },
}

impl LexError {
    /// Get the span where this error occurred.
    pub fn span(&self) -> Span {
        match self {
            LexError::UnterminatedBlockComment { span } => *span,
            LexError::UnterminatedString { span } => *span,
            LexError::InvalidSigil { span } => *span,
            LexError::UnexpectedCharacter { span, .. } => *span,
        }
    }

    /// The diagnostic category for this error.
    pub fn kind(&self) -> DiagnosticKind {
        match self {
            LexError::UnterminatedBlockComment { .. } => DiagnosticKind::UnterminatedBlockComment,
            LexError::UnterminatedString { .. } => DiagnosticKind::UnterminatedString,
            LexError::InvalidSigil { .. } => DiagnosticKind::InvalidSigil,
            LexError::UnexpectedCharacter { .. } => DiagnosticKind::UnexpectedCharacter,
        }
    }

    fn detail(&self) -> String {
        match self {
            LexError::UnterminatedBlockComment { .. } => {
                "block comment is missing its closing `)`".to_string()
            }
            LexError::UnterminatedString { .. } => {
                "string literal is missing its closing `\"`".to_string()
            }
            LexError::InvalidSigil { .. } => "expected identifier after `@`".to_string(),
            LexError::UnexpectedCharacter { ch, .. } => {
                format!("unexpected character '{}'", ch.escape_default())
            }
        }
    }
}

// ============================================================================
// Diagnostics
// ============================================================================

/// Categories of diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    // Lexical
    /// A block comment was never closed.
    UnterminatedBlockComment,
    /// A string literal was never closed.
    UnterminatedString,
    /// `@` without a following identifier.
    InvalidSigil,
    /// A character that starts no token.
    UnexpectedCharacter,

    // Syntactic
    /// `:` not followed by a word.
    ExpectedNameAfterColon,
    /// A word definition reached end of input without `;`.
    UnterminatedDefinition,
    /// A quotation reached end of input without `]`.
    UnterminatedQuotation,
    /// A map literal reached end of input without `}`.
    UnterminatedMap,
    /// A closer where an item was expected.
    UnexpectedToken,
    /// Definitions, quotations, or maps nested deeper than the configured limit.
    NestingTooDeep,
}

impl DiagnosticKind {
    /// Whether this kind originates in the lexer.
    pub fn is_lexical(self) -> bool {
        matches!(
            self,
            DiagnosticKind::UnterminatedBlockComment
                | DiagnosticKind::UnterminatedString
                | DiagnosticKind::InvalidSigil
                | DiagnosticKind::UnexpectedCharacter
        )
    }

    /// Get a short description of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            DiagnosticKind::UnterminatedBlockComment => "unterminated block comment",
            DiagnosticKind::UnterminatedString => "unterminated string",
            DiagnosticKind::InvalidSigil => "invalid webhook sigil",
            DiagnosticKind::UnexpectedCharacter => "unexpected character",
            DiagnosticKind::ExpectedNameAfterColon => "expected name after `:`",
            DiagnosticKind::UnterminatedDefinition => "unterminated word definition",
            DiagnosticKind::UnterminatedQuotation => "unterminated quotation",
            DiagnosticKind::UnterminatedMap => "unterminated map literal",
            DiagnosticKind::UnexpectedToken => "unexpected token",
            DiagnosticKind::NestingTooDeep => "nesting too deep",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recoverable problem found while lexing or parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at {span}: {message}")]
pub struct Diagnostic {
    /// The category of this diagnostic.
    pub kind: DiagnosticKind,
    /// Human-readable detail.
    pub message: String,
    /// The source location the diagnostic is anchored to.
    pub span: Span,
}

impl Diagnostic {
    /// Create a new diagnostic.
    pub fn new(kind: DiagnosticKind, span: Span, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            span,
        }
    }

    /// Format the diagnostic with source context for display.
    pub fn display_with_source(&self, source: &str) -> String {
        let mut output = String::new();
        let line = self.span.line;
        let column = self.span.col;

        output.push_str(&format!("error at {}:{}: {}\n", line, column, self.kind));
        if !self.message.is_empty() {
            output.push_str(&format!("  {}\n", self.message));
        }

        if let Some(line_text) = source.lines().nth(line.saturating_sub(1) as usize) {
            output.push_str("  |\n");
            output.push_str(&format!("{:>3} | {}\n", line, line_text));

            // Underline stops at the end of the first line for multi-line spans.
            let available = (line_text.len() + 1).saturating_sub(column as usize);
            let width = (self.span.len() as usize).clamp(1, available.max(1));
            let indent = " ".repeat(column.saturating_sub(1) as usize);
            let pointer = format!("^{}", "~".repeat(width - 1));
            output.push_str(&format!("  | {}{}\n", indent, pointer));
        }

        output
    }
}

impl From<LexError> for Diagnostic {
    fn from(error: LexError) -> Self {
        Diagnostic::new(error.kind(), error.span(), error.detail())
    }
}

/// An ordered collection of diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    diagnostics: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Create a new empty collection.
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    /// Add a diagnostic to the collection.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Check if there are any diagnostics.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Get the number of diagnostics.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Get all diagnostics in the order they were recorded.
    pub fn errors(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Iterate over the diagnostics.
    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.diagnostics.iter()
    }

    /// Count the diagnostics of one kind.
    pub fn count_kind(&self, kind: DiagnosticKind) -> usize {
        self.diagnostics.iter().filter(|d| d.kind == kind).count()
    }

    /// Consume and return the diagnostics.
    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl From<Diagnostic> for Diagnostics {
    fn from(diagnostic: Diagnostic) -> Self {
        let mut diagnostics = Diagnostics::new();
        diagnostics.push(diagnostic);
        diagnostics
    }
}

impl FromIterator<Diagnostic> for Diagnostics {
    fn from_iter<T: IntoIterator<Item = Diagnostic>>(iter: T) -> Self {
        Self {
            diagnostics: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.iter()
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.diagnostics.as_slice() {
            [] => write!(f, "no errors"),
            [single] => write!(f, "{}", single),
            all => {
                writeln!(f, "{} errors:", all.len())?;
                for (i, diagnostic) in all.iter().enumerate() {
                    writeln!(f, "  {}: {}", i + 1, diagnostic)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for Diagnostics {}
