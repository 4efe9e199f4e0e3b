//! Re-serialize a tree to source text.
//!
//! Output is canonical: leaves keep their raw lexemes, tokens are separated
//! by single spaces, and comments are not reproduced. Constructs that were
//! unterminated in the input come out closed, and placeholder definition
//! names are omitted.

use crate::ast::SourceFile;
use crate::ast::node::*;

/// Re-serialize a whole source file.
pub fn unparse(file: &SourceFile) -> String {
    let mut out = Unparser::default();
    out.items(file.items());
    out.finish()
}

/// Re-serialize a single item.
pub fn unparse_item(item: &Item) -> String {
    let mut out = Unparser::default();
    out.item(item);
    out.finish()
}

#[derive(Default)]
struct Unparser {
    buf: String,
}

impl Unparser {
    fn finish(self) -> String {
        self.buf
    }

    fn token(&mut self, text: &str) {
        if !self.buf.is_empty() {
            self.buf.push(' ');
        }
        self.buf.push_str(text);
    }

    fn items(&mut self, items: &[Item]) {
        for item in items {
            self.item(item);
        }
    }

    fn item(&mut self, item: &Item) {
        match item {
            Item::WordDefinition(definition) => {
                self.token(":");
                if !definition.name.is_placeholder() {
                    self.token(definition.name.name);
                }
                self.items(definition.body);
                self.token(";");
            }
            Item::Quotation(quotation) => {
                self.token("[");
                self.items(quotation.items);
                self.token("]");
            }
            Item::Map(map) => {
                self.token("{");
                self.items(map.items);
                self.token("}");
            }
            Item::String(string) => {
                if !self.buf.is_empty() {
                    self.buf.push(' ');
                }
                self.buf.push('"');
                self.buf.push_str(string.raw);
                self.buf.push('"');
            }
            Item::Number(number) => self.token(number.raw),
            Item::Word(word) => self.token(word.name),
            Item::WebhookSigil(sigil) => {
                if !self.buf.is_empty() {
                    self.buf.push(' ');
                }
                self.buf.push('@');
                self.buf.push_str(sigil.name);
            }
        }
    }
}
