//! Main lexer implementation for Rutile.
//!
//! The [`Lexer`] converts source text into a stream of [`Token`]s in a single
//! left-to-right scan. Whitespace and comments are trivia: they are skipped,
//! and optionally recorded on the side as [`Trivia`].
//!
//! Failures never stop the scan. The lexer emits a [`TokenKind::Error`] token
//! and queues the matching [`LexError`], then carries on after the bad input.
//!
//! The lexer copies all lexemes into the arena, allowing the source string
//! to be freed after lexing completes.

use std::collections::VecDeque;

use bumpalo::Bump;
use rutile_core::{LexError, Span};

use super::cursor::{Cursor, Mark, is_sigil_continue, is_symbol, is_word_continue, is_word_start};
use super::token::{Token, TokenKind, Trivia, TriviaKind};

/// Lexer for Rutile source code.
///
/// The `'src` lifetime is the source string being lexed (temporary).
/// The `'ast` lifetime is the arena where token lexemes are allocated (persists).
pub struct Lexer<'src, 'ast> {
    /// Low-level character cursor.
    cursor: Cursor<'src>,
    /// Arena for allocating token lexemes.
    arena: &'ast Bump,
    /// Errors for emitted error tokens, oldest first.
    errors: VecDeque<LexError>,
    /// Comments seen so far, when retention is enabled.
    trivia: Option<Vec<Trivia<'ast>>>,
    /// Whether the iterator has already yielded `EndOfInput`.
    finished: bool,
}

impl<'src, 'ast> Lexer<'src, 'ast> {
    /// Create a new lexer for the given source text.
    pub fn new(source: &'src str, arena: &'ast Bump) -> Self {
        Self {
            cursor: Cursor::new(source),
            arena,
            errors: VecDeque::new(),
            trivia: None,
            finished: false,
        }
    }

    /// Record comments as [`Trivia`] instead of discarding them.
    pub fn retain_trivia(mut self, retain: bool) -> Self {
        self.trivia = retain.then(Vec::new);
        self
    }

    /// Take accumulated errors, leaving the queue empty.
    pub fn take_errors(&mut self) -> Vec<LexError> {
        std::mem::take(&mut self.errors).into()
    }

    /// Take the oldest queued error.
    ///
    /// Each error token has exactly one queued error, in emission order.
    pub fn pop_error(&mut self) -> Option<LexError> {
        self.errors.pop_front()
    }

    /// Check if any errors are queued.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Take recorded trivia. Empty when retention is disabled.
    pub fn take_trivia(&mut self) -> Vec<Trivia<'ast>> {
        self.trivia.as_mut().map(std::mem::take).unwrap_or_default()
    }

    /// Consume and return the next token.
    ///
    /// Returns `EndOfInput` forever once the source is exhausted.
    pub fn next_token(&mut self) -> Token<'ast> {
        loop {
            self.skip_whitespace();

            let start = self.cursor.mark();
            match self.cursor.peek() {
                None => return self.make_eof(),
                Some('#') => self.skip_line_comment(start),
                Some('(') => {
                    if let Some(error) = self.skip_block_comment(start) {
                        return self.make_error(error);
                    }
                }
                Some(c) => return self.scan_significant(c, start),
            }
        }
    }

    // =========================================
    // Internal: Trivia
    // =========================================

    /// Skip whitespace and a leading BOM.
    fn skip_whitespace(&mut self) {
        if self.cursor.offset() == 0 {
            self.cursor.eat('\u{FEFF}');
        }
        self.cursor.eat_while(char::is_whitespace);
    }

    /// Skip `#` through end of line. The newline itself is left as whitespace.
    fn skip_line_comment(&mut self, start: Mark) {
        self.cursor.eat_while(|c| c != '\n');
        self.record_trivia(TriviaKind::LineComment, start);
    }

    /// Skip a `( ... )` block comment, honoring nested parentheses.
    ///
    /// Returns an error if input ends before the depth returns to zero.
    fn skip_block_comment(&mut self, start: Mark) -> Option<LexError> {
        let mut depth = 0u32;
        while let Some(c) = self.cursor.advance() {
            match c {
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        self.record_trivia(TriviaKind::BlockComment, start);
                        return None;
                    }
                }
                _ => {}
            }
        }

        Some(LexError::UnterminatedBlockComment {
            span: self.cursor.span_from(start),
        })
    }

    fn record_trivia(&mut self, kind: TriviaKind, start: Mark) {
        if let Some(trivia) = self.trivia.as_mut() {
            let text = self.arena.alloc_str(self.cursor.slice_from(start.offset));
            trivia.push(Trivia {
                kind,
                text,
                span: self.cursor.span_from(start),
            });
        }
    }

    // =========================================
    // Internal: Token scanning
    // =========================================

    /// Dispatch on the first character of a significant token.
    fn scan_significant(&mut self, c: char, start: Mark) -> Token<'ast> {
        match c {
            '"' => self.scan_string(start),
            c if c.is_ascii_digit() => self.scan_number(start),
            '-' if self.cursor.peek_nth(1).is_some_and(|n| n.is_ascii_digit()) => {
                self.scan_number(start)
            }
            c if is_word_start(c) => {
                self.cursor.eat_while(is_word_continue);
                self.make_token(TokenKind::Word, start)
            }
            c if is_symbol(c) => {
                self.cursor.eat_while(is_symbol);
                self.make_token(TokenKind::Word, start)
            }
            '@' => self.scan_sigil(start),
            _ => self.scan_punctuation(start),
        }
    }

    /// Scan a string literal. Escapes are skipped over, never decoded.
    fn scan_string(&mut self, start: Mark) -> Token<'ast> {
        self.cursor.advance(); // opening quote

        loop {
            match self.cursor.peek() {
                None | Some('\n') => {
                    let span = self.cursor.span_from(start);
                    return self.make_error(LexError::UnterminatedString { span });
                }
                Some('\\') => {
                    self.cursor.advance();
                    // An escaped newline still ends the line.
                    if self.cursor.check(|c| c != '\n') {
                        self.cursor.advance();
                    }
                }
                Some('"') => {
                    self.cursor.advance();
                    return self.make_token(TokenKind::String, start);
                }
                Some(_) => {
                    self.cursor.advance();
                }
            }
        }
    }

    /// Scan `-?digits(.digits)?`.
    ///
    /// A `.` without a digit after it is left for the next token.
    fn scan_number(&mut self, start: Mark) -> Token<'ast> {
        self.cursor.eat('-');
        self.cursor.eat_while(|c| c.is_ascii_digit());

        if self.cursor.peek() == Some('.')
            && self.cursor.peek_nth(1).is_some_and(|c| c.is_ascii_digit())
        {
            self.cursor.advance();
            self.cursor.eat_while(|c| c.is_ascii_digit());
        }

        self.make_token(TokenKind::Number, start)
    }

    /// Scan `@name.space`.
    fn scan_sigil(&mut self, start: Mark) -> Token<'ast> {
        let valid = self.cursor.peek_nth(1).is_some_and(is_word_start);
        self.cursor.advance(); // '@'

        if !valid {
            let span = self.cursor.span_from(start);
            return self.make_error(LexError::InvalidSigil { span });
        }

        self.cursor.eat_while(is_sigil_continue);
        self.make_token(TokenKind::WebhookSigil, start)
    }

    /// Scan single-character punctuation, or report an unexpected character.
    fn scan_punctuation(&mut self, start: Mark) -> Token<'ast> {
        let Some(c) = self.cursor.advance() else {
            return self.make_eof();
        };

        let kind = match c {
            ':' => TokenKind::Colon,
            ';' => TokenKind::Semicolon,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            _ => {
                let span = self.cursor.span_from(start);
                return self.make_error(LexError::UnexpectedCharacter { ch: c, span });
            }
        };

        self.make_token(kind, start)
    }

    // =========================================
    // Internal: Token construction
    // =========================================

    /// Create an end-of-input token.
    fn make_eof(&self) -> Token<'ast> {
        let span = Span::point(
            self.cursor.offset(),
            self.cursor.line(),
            self.cursor.column(),
        );
        Token::new(TokenKind::EndOfInput, "", span)
    }

    /// Create a token from `start` to the current position.
    /// Copies the lexeme into the arena.
    fn make_token(&self, kind: TokenKind, start: Mark) -> Token<'ast> {
        let lexeme = self.arena.alloc_str(self.cursor.slice_from(start.offset));
        Token::new(kind, lexeme, self.cursor.span_from(start))
    }

    /// Create an error token covering the error's span and queue the error.
    fn make_error(&mut self, error: LexError) -> Token<'ast> {
        let span = error.span();
        let lexeme = self.arena.alloc_str(&self.cursor.source()[span.range()]);
        self.errors.push_back(error);
        Token::new(TokenKind::Error, lexeme, span)
    }
}

/// Yields every token including a final `EndOfInput`, then stops.
impl<'src, 'ast> Iterator for Lexer<'src, 'ast> {
    type Item = Token<'ast>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.kind == TokenKind::EndOfInput {
            self.finished = true;
        }
        Some(token)
    }
}

/// Lex `source` lazily. The sequence ends with an `EndOfInput` token.
pub fn tokenize<'src, 'ast>(source: &'src str, arena: &'ast Bump) -> Lexer<'src, 'ast> {
    Lexer::new(source, arena)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper to collect significant tokens (no EndOfInput) from source.
    fn lex(source: &str) -> Vec<(TokenKind, String)> {
        let arena = Bump::new();
        tokenize(source, &arena)
            .filter(|t| t.kind != TokenKind::EndOfInput)
            .map(|t| (t.kind, t.lexeme.to_string()))
            .collect()
    }

    /// Helper to get token kinds only.
    fn token_kinds(source: &str) -> Vec<TokenKind> {
        lex(source).into_iter().map(|(kind, _)| kind).collect()
    }

    fn tok(kind: TokenKind, lexeme: &str) -> (TokenKind, String) {
        (kind, lexeme.to_string())
    }

    // =========================================
    // Basics
    // =========================================

    #[test]
    fn empty_source() {
        let arena = Bump::new();
        let tokens: Vec<_> = tokenize("", &arena).collect();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::EndOfInput);
        assert_eq!(tokens[0].span, Span::point(0, 1, 1));
    }

    #[test]
    fn end_of_input_repeats() {
        let arena = Bump::new();
        let mut lexer = Lexer::new("x", &arena);
        assert_eq!(lexer.next_token().kind, TokenKind::Word);
        assert_eq!(lexer.next_token().kind, TokenKind::EndOfInput);
        assert_eq!(lexer.next_token().kind, TokenKind::EndOfInput);
    }

    #[test]
    fn unicode_whitespace_is_skipped() {
        assert_eq!(
            lex("a\u{00A0}b\u{3000}\t\r\nc"),
            vec![
                tok(TokenKind::Word, "a"),
                tok(TokenKind::Word, "b"),
                tok(TokenKind::Word, "c"),
            ]
        );
    }

    #[test]
    fn bom_handling() {
        assert_eq!(lex("\u{FEFF}dup"), vec![tok(TokenKind::Word, "dup")]);
    }

    #[test]
    fn punctuation() {
        assert_eq!(
            token_kinds(": ; [ ] { }"),
            vec![
                TokenKind::Colon,
                TokenKind::Semicolon,
                TokenKind::LBracket,
                TokenKind::RBracket,
                TokenKind::LBrace,
                TokenKind::RBrace,
            ]
        );
    }

    #[test]
    fn punctuation_needs_no_whitespace() {
        assert_eq!(
            lex(":sq[dup]{}"),
            vec![
                tok(TokenKind::Colon, ":"),
                tok(TokenKind::Word, "sq"),
                tok(TokenKind::LBracket, "["),
                tok(TokenKind::Word, "dup"),
                tok(TokenKind::RBracket, "]"),
                tok(TokenKind::LBrace, "{"),
                tok(TokenKind::RBrace, "}"),
            ]
        );
    }

    // =========================================
    // Comments
    // =========================================

    #[test]
    fn line_comment() {
        assert_eq!(
            lex("a # comment ( not a block\nb"),
            vec![tok(TokenKind::Word, "a"), tok(TokenKind::Word, "b")]
        );
    }

    #[test]
    fn line_comment_at_end_of_input() {
        assert_eq!(lex("a #"), vec![tok(TokenKind::Word, "a")]);
    }

    #[test]
    fn nested_block_comment_produces_no_tokens() {
        assert!(lex("(a (b (c)) d)").is_empty());
    }

    #[test]
    fn block_comment_between_tokens() {
        assert_eq!(
            lex("dup ( n -- n n\n  duplicates ) swap"),
            vec![tok(TokenKind::Word, "dup"), tok(TokenKind::Word, "swap")]
        );
    }

    #[test]
    fn block_comment_swallows_quotes_and_hashes() {
        assert_eq!(lex("( \" # ] ) x"), vec![tok(TokenKind::Word, "x")]);
    }

    #[test]
    fn unterminated_block_comment() {
        let arena = Bump::new();
        let mut lexer = Lexer::new("a (b (c)", &arena);
        assert_eq!(lexer.next_token().kind, TokenKind::Word);

        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::Error);
        assert_eq!(token.span, Span::new(2, 8, 1, 3));
        assert_eq!(token.lexeme, "(b (c)");
        assert_eq!(
            lexer.pop_error(),
            Some(LexError::UnterminatedBlockComment {
                span: Span::new(2, 8, 1, 3),
            })
        );
        assert_eq!(lexer.next_token().kind, TokenKind::EndOfInput);
    }

    #[test]
    fn stray_close_paren_is_unexpected() {
        let arena = Bump::new();
        let mut lexer = Lexer::new(")", &arena);
        assert_eq!(lexer.next_token().kind, TokenKind::Error);
        assert!(matches!(
            lexer.pop_error(),
            Some(LexError::UnexpectedCharacter { ch: ')', .. })
        ));
    }

    #[test]
    fn trivia_retention() {
        let arena = Bump::new();
        let mut lexer = Lexer::new("# head\na ( x (y) ) b", &arena).retain_trivia(true);
        let kinds: Vec<_> = lexer.by_ref().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::Word, TokenKind::Word, TokenKind::EndOfInput]
        );

        let trivia = lexer.take_trivia();
        assert_eq!(trivia.len(), 2);
        assert_eq!(trivia[0].kind, TriviaKind::LineComment);
        assert_eq!(trivia[0].text, "# head");
        assert_eq!(trivia[1].kind, TriviaKind::BlockComment);
        assert_eq!(trivia[1].text, "( x (y) )");
        assert_eq!(trivia[1].span, Span::new(9, 18, 2, 3));
    }

    #[test]
    fn trivia_discarded_by_default() {
        let arena = Bump::new();
        let mut lexer = Lexer::new("# note\nx", &arena);
        while lexer.next_token().kind != TokenKind::EndOfInput {}
        assert!(lexer.take_trivia().is_empty());
    }

    // =========================================
    // Strings
    // =========================================

    #[test]
    fn string_literal() {
        assert_eq!(
            lex(r#""hello world""#),
            vec![tok(TokenKind::String, r#""hello world""#)]
        );
    }

    #[test]
    fn string_escapes_kept_raw() {
        assert_eq!(
            lex(r#""a\"b\\" "tab\there""#),
            vec![
                tok(TokenKind::String, r#""a\"b\\""#),
                tok(TokenKind::String, r#""tab\there""#),
            ]
        );
    }

    #[test]
    fn string_contains_comment_chars() {
        assert_eq!(
            lex(r#""( # )""#),
            vec![tok(TokenKind::String, r#""( # )""#)]
        );
    }

    #[test]
    fn unterminated_string_at_end_of_input() {
        let arena = Bump::new();
        let mut lexer = Lexer::new(r#""abc"#, &arena);
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::Error);
        assert_eq!(token.span, Span::new(0, 4, 1, 1));
        assert!(matches!(lexer.pop_error(), Some(LexError::UnterminatedString { .. })));
    }

    #[test]
    fn unterminated_string_stops_at_newline() {
        let arena = Bump::new();
        let mut lexer = Lexer::new("\"abc\ndup", &arena);
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::Error);
        assert_eq!(token.lexeme, "\"abc");

        let next = lexer.next_token();
        assert_eq!(next.kind, TokenKind::Word);
        assert_eq!(next.lexeme, "dup");
        assert_eq!((next.span.line, next.span.col), (2, 1));
    }

    #[test]
    fn escaped_newline_does_not_continue_string() {
        let arena = Bump::new();
        let mut lexer = Lexer::new("\"abc\\\nx\"", &arena);
        assert_eq!(lexer.next_token().kind, TokenKind::Error);
        assert!(matches!(lexer.pop_error(), Some(LexError::UnterminatedString { .. })));
    }

    #[test]
    fn trailing_backslash_at_end_of_input() {
        let arena = Bump::new();
        let mut lexer = Lexer::new("\"abc\\", &arena);
        assert_eq!(lexer.next_token().kind, TokenKind::Error);
        assert_eq!(lexer.next_token().kind, TokenKind::EndOfInput);
    }

    // =========================================
    // Numbers and words
    // =========================================

    #[test]
    fn numbers() {
        assert_eq!(
            lex("0 42 3.14 -5 -0.25"),
            vec![
                tok(TokenKind::Number, "0"),
                tok(TokenKind::Number, "42"),
                tok(TokenKind::Number, "3.14"),
                tok(TokenKind::Number, "-5"),
                tok(TokenKind::Number, "-0.25"),
            ]
        );
    }

    #[test]
    fn minus_with_space_is_word_then_number() {
        assert_eq!(
            lex("- 5"),
            vec![tok(TokenKind::Word, "-"), tok(TokenKind::Number, "5")]
        );
    }

    #[test]
    fn number_is_maximal() {
        assert_eq!(lex("123456789"), vec![tok(TokenKind::Number, "123456789")]);
        assert_eq!(
            lex("1.2.3"),
            vec![
                tok(TokenKind::Number, "1.2"),
                tok(TokenKind::Error, "."),
                tok(TokenKind::Number, "3"),
            ]
        );
    }

    #[test]
    fn trailing_dot_is_not_part_of_number() {
        let arena = Bump::new();
        let mut lexer = Lexer::new("7.", &arena);
        let number = lexer.next_token();
        assert_eq!(number.kind, TokenKind::Number);
        assert_eq!(number.lexeme, "7");

        let dot = lexer.next_token();
        assert_eq!(dot.kind, TokenKind::Error);
        assert_eq!(
            lexer.pop_error(),
            Some(LexError::UnexpectedCharacter {
                ch: '.',
                span: Span::new(1, 2, 1, 2),
            })
        );
    }

    #[test]
    fn number_followed_by_letters() {
        assert_eq!(
            lex("12abc"),
            vec![tok(TokenKind::Number, "12"), tok(TokenKind::Word, "abc")]
        );
    }

    #[test]
    fn words() {
        assert_eq!(
            lex("dup _tmp empty? save! swap-pair x2"),
            vec![
                tok(TokenKind::Word, "dup"),
                tok(TokenKind::Word, "_tmp"),
                tok(TokenKind::Word, "empty?"),
                tok(TokenKind::Word, "save!"),
                tok(TokenKind::Word, "swap-pair"),
                tok(TokenKind::Word, "x2"),
            ]
        );
    }

    #[test]
    fn word_with_embedded_minus_digit() {
        assert_eq!(
            lex("a-5 trailing-"),
            vec![
                tok(TokenKind::Word, "a-5"),
                tok(TokenKind::Word, "trailing-"),
            ]
        );
    }

    #[test]
    fn operator_words() {
        assert_eq!(
            lex("* + <= != -- /"),
            vec![
                tok(TokenKind::Word, "*"),
                tok(TokenKind::Word, "+"),
                tok(TokenKind::Word, "<="),
                tok(TokenKind::Word, "!="),
                tok(TokenKind::Word, "--"),
                tok(TokenKind::Word, "/"),
            ]
        );
    }

    #[test]
    fn operator_word_stops_at_letters() {
        assert_eq!(
            lex("-foo"),
            vec![tok(TokenKind::Word, "-"), tok(TokenKind::Word, "foo")]
        );
    }

    // =========================================
    // Webhook sigils
    // =========================================

    #[test]
    fn webhook_sigil() {
        assert_eq!(
            lex("@hooks.deploy"),
            vec![tok(TokenKind::WebhookSigil, "@hooks.deploy")]
        );
        assert_eq!(lex("@_x9"), vec![tok(TokenKind::WebhookSigil, "@_x9")]);
    }

    #[test]
    fn webhook_sigil_stops_at_word_punctuation() {
        assert_eq!(
            lex("@notify-all"),
            vec![
                tok(TokenKind::WebhookSigil, "@notify"),
                tok(TokenKind::Word, "-"),
                tok(TokenKind::Word, "all"),
            ]
        );
    }

    #[test]
    fn invalid_sigil() {
        let arena = Bump::new();
        let mut lexer = Lexer::new("@9 @", &arena);

        let first = lexer.next_token();
        assert_eq!(first.kind, TokenKind::Error);
        assert_eq!(first.span, Span::new(0, 1, 1, 1));
        assert_eq!(lexer.next_token().kind, TokenKind::Number);

        assert_eq!(lexer.next_token().kind, TokenKind::Error);
        assert_eq!(lexer.take_errors().len(), 2);
    }

    // =========================================
    // Error recovery
    // =========================================

    #[test]
    fn unexpected_character() {
        let arena = Bump::new();
        let mut lexer = Lexer::new("a $ b", &arena);
        let tokens: Vec<_> = lexer.by_ref().collect();

        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0].kind, TokenKind::Word);
        assert_eq!(tokens[1].kind, TokenKind::Error);
        assert_eq!(tokens[1].lexeme, "$");
        assert_eq!(tokens[2].kind, TokenKind::Word);
        assert_eq!(tokens[3].kind, TokenKind::EndOfInput);
        assert!(lexer.has_errors());
    }

    #[test]
    fn errors_queue_in_emission_order() {
        let arena = Bump::new();
        let mut lexer = Lexer::new("$ \"x", &arena);
        while lexer.next_token().kind != TokenKind::EndOfInput {}

        assert!(matches!(lexer.pop_error(), Some(LexError::UnexpectedCharacter { .. })));
        assert!(matches!(lexer.pop_error(), Some(LexError::UnterminatedString { .. })));
        assert_eq!(lexer.pop_error(), None);
    }

    // =========================================
    // Positions
    // =========================================

    #[test]
    fn spans_track_lines() {
        let arena = Bump::new();
        let tokens: Vec<_> = tokenize(": sq\n  dup * ;", &arena).collect();
        let positions: Vec<_> = tokens
            .iter()
            .map(|t| (t.span.start, t.span.end, t.span.line, t.span.col))
            .collect();
        assert_eq!(
            positions,
            vec![
                (0, 1, 1, 1),
                (2, 4, 1, 3),
                (7, 10, 2, 3),
                (11, 12, 2, 7),
                (13, 14, 2, 9),
                (14, 14, 2, 10),
            ]
        );
    }

    #[test]
    fn realistic_program() {
        let source = r#"
            # deploy pipeline
            : ship ( env -- )
                { "env" swap "retries" 3 } @hooks.deploy
                [ "done" print ] when ;
        "#;

        let arena = Bump::new();
        let mut lexer = Lexer::new(source, &arena);
        let kinds: Vec<_> = lexer.by_ref().map(|t| t.kind).collect();

        assert!(!lexer.has_errors());
        assert_eq!(
            kinds,
            vec![
                TokenKind::Colon,
                TokenKind::Word,
                TokenKind::LBrace,
                TokenKind::String,
                TokenKind::Word,
                TokenKind::String,
                TokenKind::Number,
                TokenKind::RBrace,
                TokenKind::WebhookSigil,
                TokenKind::LBracket,
                TokenKind::String,
                TokenKind::Word,
                TokenKind::RBracket,
                TokenKind::Word,
                TokenKind::Semicolon,
                TokenKind::EndOfInput,
            ]
        );
    }
}
