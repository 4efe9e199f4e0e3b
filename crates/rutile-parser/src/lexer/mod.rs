//! Lexical analysis for Rutile.

mod cursor;
#[allow(clippy::module_inception)]
mod lexer;
mod stream;
mod token;

pub use lexer::{Lexer, tokenize};
pub use stream::TokenStream;
pub use token::{Token, TokenKind, Trivia, TriviaKind};
