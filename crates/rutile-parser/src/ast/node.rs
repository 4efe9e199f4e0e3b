//! Syntax tree nodes.
//!
//! Every construct is a flat case of the closed [`Item`] set. Definitions,
//! quotations, and maps hold ordered child slices allocated in the arena;
//! any item may appear inside any of them, including further definitions.

use rutile_core::Span;

/// One element of a source file, definition body, quotation, or map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Item<'ast> {
    /// `: name body... ;`
    WordDefinition(&'ast WordDefinition<'ast>),
    /// `[ items... ]`
    Quotation(&'ast Quotation<'ast>),
    /// `{ items... }`
    Map(&'ast MapLiteral<'ast>),
    /// `"..."`
    String(StringLiteral<'ast>),
    /// `42`, `-1.5`
    Number(NumberLiteral<'ast>),
    /// `dup`, `*`
    Word(Word<'ast>),
    /// `@hooks.deploy`
    WebhookSigil(WebhookSigil<'ast>),
}

impl<'ast> Item<'ast> {
    /// Get the span of this item.
    pub fn span(&self) -> Span {
        match self {
            Self::WordDefinition(d) => d.span,
            Self::Quotation(q) => q.span,
            Self::Map(m) => m.span,
            Self::String(s) => s.span,
            Self::Number(n) => n.span,
            Self::Word(w) => w.span,
            Self::WebhookSigil(s) => s.span,
        }
    }

    /// Short name of the production, e.g. for outlines and debug dumps.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::WordDefinition(_) => "word_definition",
            Self::Quotation(_) => "quotation",
            Self::Map(_) => "map",
            Self::String(_) => "string",
            Self::Number(_) => "number",
            Self::Word(_) => "word",
            Self::WebhookSigil(_) => "webhook_sigil",
        }
    }

    /// Child items, empty for leaves.
    pub fn children(&self) -> &'ast [Item<'ast>] {
        match self {
            Self::WordDefinition(d) => d.body,
            Self::Quotation(q) => q.items,
            Self::Map(m) => m.items,
            _ => &[],
        }
    }

    /// Whether this item is a leaf (string, number, word, or sigil).
    pub fn is_leaf(&self) -> bool {
        matches!(
            self,
            Self::String(_) | Self::Number(_) | Self::Word(_) | Self::WebhookSigil(_)
        )
    }
}

/// A named definition: `: name body... ;`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordDefinition<'ast> {
    /// The defined name. Empty when the name was missing.
    pub name: Word<'ast>,
    /// Body items in execution order.
    pub body: &'ast [Item<'ast>],
    /// From `:` through `;`, or through the last consumed token if unterminated.
    pub span: Span,
}

/// An anonymous deferred sequence: `[ items... ]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quotation<'ast> {
    pub items: &'ast [Item<'ast>],
    pub span: Span,
}

/// A brace-delimited item list: `{ items... }`.
///
/// Contents are not checked for key/value pairing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapLiteral<'ast> {
    pub items: &'ast [Item<'ast>],
    pub span: Span,
}

/// A string literal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StringLiteral<'ast> {
    /// Text between the quotes, escapes not decoded.
    pub raw: &'ast str,
    pub span: Span,
}

/// A number literal, kept as its raw lexeme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberLiteral<'ast> {
    pub raw: &'ast str,
    pub span: Span,
}

/// A word reference, or the name of a definition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Word<'ast> {
    pub name: &'ast str,
    pub span: Span,
}

impl<'ast> Word<'ast> {
    /// Create a new word.
    pub fn new(name: &'ast str, span: Span) -> Self {
        Self { name, span }
    }

    /// Whether this is the empty stand-in for a missing definition name.
    pub fn is_placeholder(&self) -> bool {
        self.name.is_empty()
    }
}

/// A reference to an external hook endpoint: `@hooks.deploy`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WebhookSigil<'ast> {
    /// Name without the `@`, namespace segments included.
    pub name: &'ast str,
    pub span: Span,
}

impl<'ast> WebhookSigil<'ast> {
    /// The dot-separated segments of the name.
    pub fn segments(&self) -> impl Iterator<Item = &'ast str> {
        self.name.split('.')
    }

    /// Everything before the last `.`, if the name is namespaced.
    pub fn namespace(&self) -> Option<&'ast str> {
        self.name.rsplit_once('.').map(|(namespace, _)| namespace)
    }
}
