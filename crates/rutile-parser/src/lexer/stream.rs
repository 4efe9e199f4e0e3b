//! Lazily-filled token stream with one token of lookahead.

use rutile_core::{LexError, Span};

use super::lexer::Lexer;
use super::token::{Token, TokenKind, Trivia};

/// A position-addressable view over a [`Lexer`].
///
/// Tokens are produced on demand; at most one token is buffered ahead of
/// the parser.
pub struct TokenStream<'src, 'ast> {
    lexer: Lexer<'src, 'ast>,
    /// The current (not yet consumed) token.
    current: Token<'ast>,
    /// Span of the most recently consumed token.
    previous: Span,
    /// Number of tokens consumed so far.
    position: usize,
}

impl<'src, 'ast> TokenStream<'src, 'ast> {
    /// Create a stream, pulling the first token from the lexer.
    pub fn new(mut lexer: Lexer<'src, 'ast>) -> Self {
        let current = lexer.next_token();
        let previous = Span::point(current.span.start, current.span.line, current.span.col);
        Self {
            lexer,
            current,
            previous,
            position: 0,
        }
    }

    /// Peek at the current token without consuming it.
    #[inline]
    pub fn peek(&self) -> &Token<'ast> {
        &self.current
    }

    /// Get the current token and advance to the next.
    ///
    /// At end of input this keeps returning the `EndOfInput` token.
    pub fn advance(&mut self) -> Token<'ast> {
        let token = self.current;
        if token.kind != TokenKind::EndOfInput {
            self.current = self.lexer.next_token();
            self.previous = token.span;
            self.position += 1;
        }
        token
    }

    /// Check if the current token matches the given kind.
    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// Check if the stream is exhausted.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.check(TokenKind::EndOfInput)
    }

    /// If the current token matches the given kind, consume it and return Some.
    pub fn eat(&mut self, kind: TokenKind) -> Option<Token<'ast>> {
        if self.check(kind) {
            Some(self.advance())
        } else {
            None
        }
    }

    /// Index of the current token in the full token sequence.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Span of the most recently consumed token.
    ///
    /// Before anything is consumed this is an empty span at the first token.
    #[inline]
    pub fn previous_span(&self) -> Span {
        self.previous
    }

    /// Take the lexer error belonging to the oldest unconsumed error token.
    pub fn take_lex_error(&mut self) -> Option<LexError> {
        self.lexer.pop_error()
    }

    /// Take the comments recorded so far.
    pub fn take_trivia(&mut self) -> Vec<Trivia<'ast>> {
        self.lexer.take_trivia()
    }
}
