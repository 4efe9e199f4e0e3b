//! Token types for the Rutile lexer.

use rutile_core::Span;
use std::fmt;

/// A token from the source code.
///
/// The `'ast` lifetime refers to the arena where the lexeme string is allocated.
/// This allows the source string to be freed after lexing, since all string
/// content is copied into the arena.
#[derive(Clone, Copy, PartialEq)]
pub struct Token<'ast> {
    /// The type of token.
    pub kind: TokenKind,
    /// The raw source text of this token (allocated in arena).
    pub lexeme: &'ast str,
    /// Location in source.
    pub span: Span,
}

impl<'ast> Token<'ast> {
    /// Create a new token.
    #[inline]
    pub fn new(kind: TokenKind, lexeme: &'ast str, span: Span) -> Self {
        Self { kind, lexeme, span }
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?} {:?})", self.kind, self.lexeme, self.span)
    }
}

/// All token types in Rutile.
///
/// Comments and whitespace are trivia and never appear here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `:`
    Colon,
    /// `;`
    Semicolon,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// String literal, quotes included: `"a\"b"`
    String,
    /// Number literal: `42`, `-3.5`
    Number,
    /// Word: `dup`, `empty?`, `*`
    Word,
    /// Webhook sigil: `@hooks.deploy`
    WebhookSigil,
    /// End of input. Repeats forever once reached.
    EndOfInput,
    /// A lexical error; the matching `LexError` is queued on the lexer.
    Error,
}

impl TokenKind {
    /// Whether this kind closes a definition, quotation, or map.
    #[inline]
    pub fn is_closer(self) -> bool {
        matches!(
            self,
            TokenKind::Semicolon | TokenKind::RBracket | TokenKind::RBrace
        )
    }

    /// Whether this kind opens a definition, quotation, or map.
    #[inline]
    pub fn is_opener(self) -> bool {
        matches!(
            self,
            TokenKind::Colon | TokenKind::LBracket | TokenKind::LBrace
        )
    }

    /// The closer that ends a construct opened by this kind.
    pub fn closer(self) -> Option<TokenKind> {
        match self {
            TokenKind::Colon => Some(TokenKind::Semicolon),
            TokenKind::LBracket => Some(TokenKind::RBracket),
            TokenKind::LBrace => Some(TokenKind::RBrace),
            _ => None,
        }
    }

    /// Get a human-readable description, used in diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Colon => "`:`",
            TokenKind::Semicolon => "`;`",
            TokenKind::LBracket => "`[`",
            TokenKind::RBracket => "`]`",
            TokenKind::LBrace => "`{`",
            TokenKind::RBrace => "`}`",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::Word => "word",
            TokenKind::WebhookSigil => "webhook sigil",
            TokenKind::EndOfInput => "end of input",
            TokenKind::Error => "invalid token",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comment text kept on the side when trivia retention is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trivia<'ast> {
    pub kind: TriviaKind,
    /// Raw comment text, delimiters included.
    pub text: &'ast str,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriviaKind {
    /// `# ...` through end of line.
    LineComment,
    /// `( ... )`, possibly nested.
    BlockComment,
}
