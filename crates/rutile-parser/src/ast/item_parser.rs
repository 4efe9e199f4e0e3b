//! Item parsing functions for Rutile.
//!
//! Grammar:
//!
//! ```text
//! source_file     = item*
//! item            = word_definition | quotation | map | STRING | NUMBER | WORD | SIGIL
//! word_definition = ':' WORD item* ';'
//! quotation       = '[' item* ']'
//! map             = '{' item* '}'
//! ```

use bumpalo::Bump;
use bumpalo::collections::Vec as BVec;
use rutile_core::{DiagnosticKind, Diagnostics, Span};

use super::SourceFile;
use super::node::*;
use super::parser::{ParseOptions, Parser};
use crate::lexer::{Token, TokenKind};

impl<'src, 'ast> Parser<'src, 'ast> {
    // ========================================================================
    // Entry points
    // ========================================================================

    /// Parse a source file, keeping the tree and every diagnostic.
    ///
    /// This always succeeds: malformed input yields a best-effort tree plus
    /// diagnostics.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn parse_lenient(source: &'src str, arena: &'ast Bump) -> (SourceFile<'ast>, Diagnostics) {
        Self::parse_with_options(source, arena, ParseOptions::default())
    }

    /// Parse with explicit options, keeping the tree and every diagnostic.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn parse_with_options(
        source: &'src str,
        arena: &'ast Bump,
        options: ParseOptions,
    ) -> (SourceFile<'ast>, Diagnostics) {
        let mut parser = Parser::with_options(source, arena, options);
        let file = parser.parse_source_file();
        (file, parser.take_diagnostics())
    }

    /// Parse a source file, failing if anything was reported.
    pub fn parse(source: &'src str, arena: &'ast Bump) -> Result<SourceFile<'ast>, Diagnostics> {
        let (file, diagnostics) = Self::parse_lenient(source, arena);
        if diagnostics.is_empty() {
            Ok(file)
        } else {
            Err(diagnostics)
        }
    }

    // ========================================================================
    // Productions
    // ========================================================================

    /// Parse items until end of input.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn parse_source_file(&mut self) -> SourceFile<'ast> {
        let mut items = BVec::new_in(self.arena);
        while !self.tokens.is_eof() {
            if let Some(item) = self.parse_item() {
                items.push(item);
            }
        }

        let end = self.tokens.peek().span.end;
        let trivia = self.arena.alloc_slice_copy(&self.tokens.take_trivia());
        let file = SourceFile::new(items.into_bump_slice(), trivia, Span::new(0, end, 1, 1));

        tracing::debug!(
            items = file.items().len(),
            diagnostics = self.diagnostics.len(),
            bytes = end,
            "parsed source file"
        );
        file
    }

    /// Parse one item.
    ///
    /// Returns `None` at end of input, and after skipping a token that
    /// cannot start an item (stray closers, lexer errors). Every call that
    /// does not see end of input consumes at least one token.
    pub fn parse_item(&mut self) -> Option<Item<'ast>> {
        let token = *self.tokens.peek();

        match token.kind {
            TokenKind::Colon => self.parse_word_definition(),
            TokenKind::LBracket => self.parse_quotation(),
            TokenKind::LBrace => self.parse_map(),

            TokenKind::String => {
                self.tokens.advance();
                // The lexer only emits String tokens with both quotes present.
                let raw = &token.lexeme[1..token.lexeme.len() - 1];
                Some(Item::String(StringLiteral {
                    raw,
                    span: token.span,
                }))
            }
            TokenKind::Number => {
                self.tokens.advance();
                Some(Item::Number(NumberLiteral {
                    raw: token.lexeme,
                    span: token.span,
                }))
            }
            TokenKind::Word => {
                self.tokens.advance();
                Some(Item::Word(Word::new(token.lexeme, token.span)))
            }
            TokenKind::WebhookSigil => {
                self.tokens.advance();
                Some(Item::WebhookSigil(WebhookSigil {
                    name: &token.lexeme[1..],
                    span: token.span,
                }))
            }

            TokenKind::Semicolon | TokenKind::RBracket | TokenKind::RBrace => {
                self.tokens.advance();
                self.error(
                    DiagnosticKind::UnexpectedToken,
                    token.span,
                    format!("unexpected {} with nothing open to close", token.kind),
                );
                None
            }
            TokenKind::Error => {
                self.tokens.advance();
                self.lex_error(token.span);
                None
            }
            TokenKind::EndOfInput => None,
        }
    }

    /// Parse `: name body... ;`.
    fn parse_word_definition(&mut self) -> Option<Item<'ast>> {
        let colon = self.tokens.advance();
        if self.depth >= self.options.max_depth {
            self.skip_too_deep(colon);
            return None;
        }

        let name = match self.tokens.eat(TokenKind::Word) {
            Some(token) => Word::new(token.lexeme, token.span),
            None => {
                let found = *self.tokens.peek();
                self.error(
                    DiagnosticKind::ExpectedNameAfterColon,
                    found.span,
                    format!("expected word after `:`, found {}", found.kind),
                );
                let after = colon.span;
                Word::new("", Span::point(after.end, after.line, after.col + 1))
            }
        };

        let body = self.parse_sequence(TokenKind::Semicolon);
        let span = self.close(
            colon,
            TokenKind::Semicolon,
            DiagnosticKind::UnterminatedDefinition,
        );

        let definition = self.arena.alloc(WordDefinition { name, body, span });
        Some(Item::WordDefinition(definition))
    }

    /// Parse `[ items... ]`.
    fn parse_quotation(&mut self) -> Option<Item<'ast>> {
        let open = self.tokens.advance();
        if self.depth >= self.options.max_depth {
            self.skip_too_deep(open);
            return None;
        }

        let items = self.parse_sequence(TokenKind::RBracket);
        let span = self.close(
            open,
            TokenKind::RBracket,
            DiagnosticKind::UnterminatedQuotation,
        );

        Some(Item::Quotation(self.arena.alloc(Quotation { items, span })))
    }

    /// Parse `{ items... }`. Any number and mix of items is accepted.
    fn parse_map(&mut self) -> Option<Item<'ast>> {
        let open = self.tokens.advance();
        if self.depth >= self.options.max_depth {
            self.skip_too_deep(open);
            return None;
        }

        let items = self.parse_sequence(TokenKind::RBrace);
        let span = self.close(open, TokenKind::RBrace, DiagnosticKind::UnterminatedMap);

        Some(Item::Map(self.arena.alloc(MapLiteral { items, span })))
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    /// Parse items until `terminator` or end of input, without consuming either.
    fn parse_sequence(&mut self, terminator: TokenKind) -> &'ast [Item<'ast>] {
        self.depth += 1;
        let mut items = BVec::new_in(self.arena);
        while !self.tokens.check(terminator) && !self.tokens.is_eof() {
            if let Some(item) = self.parse_item() {
                items.push(item);
            }
        }
        self.depth -= 1;
        items.into_bump_slice()
    }

    /// Consume the closer of a construct opened by `open` and return the
    /// construct's span.
    ///
    /// A missing closer is reported at the opener, and the span ends at the
    /// last consumed token.
    fn close(&mut self, open: Token<'ast>, closer: TokenKind, missing: DiagnosticKind) -> Span {
        match self.tokens.eat(closer) {
            Some(close) => open.span.merge(close.span),
            None => {
                self.error(
                    missing,
                    open.span,
                    format!("{} opened here is never closed by {}", open.kind, closer),
                );
                open.span.merge(self.tokens.previous_span())
            }
        }
    }

    /// Skip a construct opened past the nesting limit, without recursing.
    ///
    /// `open` has already been consumed. Closers are matched against a stack
    /// of expected closers, so a mismatched closer is reported as stray just
    /// as it would be inside a parsed construct. Skipping ends when the
    /// stack empties or input ends.
    fn skip_too_deep(&mut self, open: Token<'ast>) {
        self.error(
            DiagnosticKind::NestingTooDeep,
            open.span,
            format!(
                "{} nests deeper than {} levels; construct skipped",
                open.kind, self.options.max_depth
            ),
        );

        let mut expected: Vec<TokenKind> = open.kind.closer().into_iter().collect();
        while !expected.is_empty() && !self.tokens.is_eof() {
            let token = self.tokens.advance();
            if let Some(closer) = token.kind.closer() {
                expected.push(closer);
            } else if expected.last() == Some(&token.kind) {
                expected.pop();
            } else if token.kind.is_closer() {
                self.error(
                    DiagnosticKind::UnexpectedToken,
                    token.span,
                    format!("unexpected {} with nothing open to close", token.kind),
                );
            } else if token.kind == TokenKind::Error {
                self.lex_error(token.span);
            }
        }
    }
}
