//! Visitor pattern for traversing the tree.
//!
//! Each `visit_*` method defaults to the matching `walk_*` function, which
//! continues into child nodes in source order. Override a `visit_*` method
//! to act on a node kind; call the `walk_*` function from the override to
//! keep descending.
//!
//! # Example
//!
//! ```
//! use rutile_parser::visitor::{walk_word_definition, Visitor};
//! use rutile_parser::{Parser, WordDefinition};
//! use bumpalo::Bump;
//!
//! struct DefinitionNames(Vec<String>);
//!
//! impl Visitor for DefinitionNames {
//!     fn visit_word_definition(&mut self, definition: &WordDefinition) {
//!         self.0.push(definition.name.name.to_string());
//!         walk_word_definition(self, definition);
//!     }
//! }
//!
//! let arena = Bump::new();
//! let (file, _) = Parser::parse_lenient(": a : b ; ;", &arena);
//! let mut names = DefinitionNames(Vec::new());
//! names.visit_source_file(&file);
//! assert_eq!(names.0, vec!["a", "b"]);
//! ```

use crate::ast::SourceFile;
use crate::ast::node::*;

/// Visitor trait for traversing tree nodes.
pub trait Visitor: Sized {
    /// Visit the root.
    fn visit_source_file(&mut self, file: &SourceFile) {
        walk_source_file(self, file);
    }

    /// Visit any item.
    fn visit_item(&mut self, item: &Item) {
        walk_item(self, item);
    }

    /// Visit a word definition.
    fn visit_word_definition(&mut self, definition: &WordDefinition) {
        walk_word_definition(self, definition);
    }

    /// Visit a quotation.
    fn visit_quotation(&mut self, quotation: &Quotation) {
        walk_quotation(self, quotation);
    }

    /// Visit a map literal.
    fn visit_map(&mut self, map: &MapLiteral) {
        walk_map(self, map);
    }

    /// Visit the name of a word definition.
    fn visit_definition_name(&mut self, _name: &Word) {}

    fn visit_string(&mut self, _string: &StringLiteral) {}

    fn visit_number(&mut self, _number: &NumberLiteral) {}

    fn visit_word(&mut self, _word: &Word) {}

    fn visit_webhook_sigil(&mut self, _sigil: &WebhookSigil) {}
}

pub fn walk_source_file<V: Visitor>(visitor: &mut V, file: &SourceFile) {
    for item in file.items() {
        visitor.visit_item(item);
    }
}

pub fn walk_item<V: Visitor>(visitor: &mut V, item: &Item) {
    match item {
        Item::WordDefinition(definition) => visitor.visit_word_definition(definition),
        Item::Quotation(quotation) => visitor.visit_quotation(quotation),
        Item::Map(map) => visitor.visit_map(map),
        Item::String(string) => visitor.visit_string(string),
        Item::Number(number) => visitor.visit_number(number),
        Item::Word(word) => visitor.visit_word(word),
        Item::WebhookSigil(sigil) => visitor.visit_webhook_sigil(sigil),
    }
}

pub fn walk_word_definition<V: Visitor>(visitor: &mut V, definition: &WordDefinition) {
    visitor.visit_definition_name(&definition.name);
    for item in definition.body {
        visitor.visit_item(item);
    }
}

pub fn walk_quotation<V: Visitor>(visitor: &mut V, quotation: &Quotation) {
    for item in quotation.items {
        visitor.visit_item(item);
    }
}

pub fn walk_map<V: Visitor>(visitor: &mut V, map: &MapLiteral) {
    for item in map.items {
        visitor.visit_item(item);
    }
}
