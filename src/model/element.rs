//! Graph elements: activities, roles and rules.

use smol_str::SmolStr;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use super::{Highlight, ModelError};

// ============================================================================
// IDs
// ============================================================================

/// Stable identifier of a graph element.
///
/// Corresponds to the `id` of the `item` a highlight is attached to.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub SmolStr);

impl ElementId {
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(SmolStr::new(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ElementId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ElementId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

// ============================================================================
// ELEMENT KINDS
// ============================================================================

/// The category an element belongs to. Decides its bucket in a [`super::Graph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementKind {
    Activity,
    Role,
    Rule,
}

impl ElementKind {
    /// All kinds in bucket order.
    pub const ALL: [ElementKind; 3] = [ElementKind::Activity, ElementKind::Role, ElementKind::Rule];

    /// Canonical upper-case tag.
    pub fn as_tag(&self) -> &'static str {
        match self {
            ElementKind::Activity => "ACTIVITY",
            ElementKind::Role => "ROLE",
            ElementKind::Rule => "RULE",
        }
    }
}

impl FromStr for ElementKind {
    type Err = ModelError;

    /// Parse a type tag. Tags are case-insensitive aliases of each other.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "activity" => Ok(ElementKind::Activity),
            "role" => Ok(ElementKind::Role),
            "rule" => Ok(ElementKind::Rule),
            _ => Err(ModelError::unknown_type(tag)),
        }
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_tag())
    }
}

// ============================================================================
// ELEMENT
// ============================================================================

/// A node or edge of a DCR graph together with its highlight evidence.
///
/// Identity is the [`ElementId`] alone: two elements with the same id are
/// equal regardless of kind or highlights.
#[derive(Clone, Debug)]
pub struct Element {
    pub id: ElementId,
    pub kind: ElementKind,
    /// Highlights in insertion order. Order carries no meaning.
    pub highlights: Vec<Highlight>,
    /// Whether an activity is a subprocess. Not populated by the extractor yet.
    pub is_subprocess: Option<bool>,
    /// Role assigned to an activity. Not populated by the extractor yet.
    pub role: Option<ElementId>,
    /// Rule kind (condition, response, ...). Not populated by the extractor yet.
    pub rule_kind: Option<SmolStr>,
    /// Source endpoint of a rule.
    pub source: Option<ElementId>,
    /// Target endpoint of a rule.
    pub target: Option<ElementId>,
}

impl Element {
    /// Create a new element with the given ID and kind.
    pub fn new(id: impl Into<ElementId>, kind: ElementKind) -> Self {
        Self {
            id: id.into(),
            kind,
            highlights: Vec::new(),
            is_subprocess: None,
            role: None,
            rule_kind: None,
            source: None,
            target: None,
        }
    }

    pub fn activity(id: impl Into<ElementId>) -> Self {
        Self::new(id, ElementKind::Activity)
    }

    pub fn role(id: impl Into<ElementId>) -> Self {
        Self::new(id, ElementKind::Role)
    }

    pub fn rule(id: impl Into<ElementId>) -> Self {
        Self::new(id, ElementKind::Rule)
    }

    /// Create an element from an untyped tag such as `"activity"` or `"RULE"`.
    pub fn from_tag(id: impl Into<ElementId>, tag: &str) -> Result<Self, ModelError> {
        Ok(Self::new(id, tag.parse()?))
    }

    /// Append a highlight.
    pub fn with_highlight(mut self, highlight: Highlight) -> Self {
        self.highlights.push(highlight);
        self
    }

    /// Append a highlight in place.
    pub fn push_highlight(&mut self, highlight: Highlight) {
        self.highlights.push(highlight);
    }

    /// The `(start, end)` pairs of all highlights, in insertion order.
    pub fn spans(&self) -> Vec<(i64, i64)> {
        self.highlights.iter().map(Highlight::span).collect()
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Element {}

impl Hash for Element {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
