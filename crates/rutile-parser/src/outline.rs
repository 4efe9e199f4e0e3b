//! Structural views of a parsed file for editor collaborators.
//!
//! - [`folding_ranges`]: one range per definition, quotation, and map
//! - [`highlights`]: a display category for every leaf and definition name

use rutile_core::Span;

use crate::ast::visitor::{Visitor, walk_map, walk_quotation, walk_word_definition};
use crate::ast::{
    MapLiteral, NumberLiteral, Quotation, SourceFile, StringLiteral, WebhookSigil, Word,
    WordDefinition,
};

/// What kind of construct a folding range covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FoldKind {
    Definition,
    Quotation,
    Map,
}

/// A foldable region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoldingRange {
    pub kind: FoldKind,
    pub span: Span,
}

/// Display category of a leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightCategory {
    /// The name introduced by `: name`.
    Definition,
    Word,
    String,
    Number,
    WebhookSigil,
}

/// A classified source range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub category: HighlightCategory,
    pub span: Span,
}

/// Collect folding ranges in pre-order, nested constructs included.
pub fn folding_ranges(file: &SourceFile) -> Vec<FoldingRange> {
    let mut collector = FoldCollector(Vec::new());
    collector.visit_source_file(file);
    collector.0
}

/// Classify every leaf in source order.
///
/// Placeholder definition names (from a `:` with no name) are skipped.
pub fn highlights(file: &SourceFile) -> Vec<Highlight> {
    let mut collector = HighlightCollector(Vec::new());
    collector.visit_source_file(file);
    collector.0
}

struct FoldCollector(Vec<FoldingRange>);

impl FoldCollector {
    fn push(&mut self, kind: FoldKind, span: Span) {
        self.0.push(FoldingRange { kind, span });
    }
}

impl Visitor for FoldCollector {
    fn visit_word_definition(&mut self, definition: &WordDefinition) {
        self.push(FoldKind::Definition, definition.span);
        walk_word_definition(self, definition);
    }

    fn visit_quotation(&mut self, quotation: &Quotation) {
        self.push(FoldKind::Quotation, quotation.span);
        walk_quotation(self, quotation);
    }

    fn visit_map(&mut self, map: &MapLiteral) {
        self.push(FoldKind::Map, map.span);
        walk_map(self, map);
    }
}

struct HighlightCollector(Vec<Highlight>);

impl HighlightCollector {
    fn push(&mut self, category: HighlightCategory, span: Span) {
        self.0.push(Highlight { category, span });
    }
}

impl Visitor for HighlightCollector {
    fn visit_definition_name(&mut self, name: &Word) {
        if !name.is_placeholder() {
            self.push(HighlightCategory::Definition, name.span);
        }
    }

    fn visit_string(&mut self, string: &StringLiteral) {
        self.push(HighlightCategory::String, string.span);
    }

    fn visit_number(&mut self, number: &NumberLiteral) {
        self.push(HighlightCategory::Number, number.span);
    }

    fn visit_word(&mut self, word: &Word) {
        self.push(HighlightCategory::Word, word.span);
    }

    fn visit_webhook_sigil(&mut self, sigil: &WebhookSigil) {
        self.push(HighlightCategory::WebhookSigil, sigil.span);
    }
}
