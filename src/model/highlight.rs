/// A highlighted text span grounding a graph element in a source document.
///
/// Offsets are inclusive on both ends. `start <= end` is assumed but not
/// enforced; the extractor is responsible for well-formed input.
///
/// Two highlights are considered equivalent when their ranges overlap, see
/// [`Highlight::overlaps`]. `PartialEq` compares the stored values instead,
/// since overlap is not transitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Highlight {
    pub start: i64,
    pub end: i64,
    /// The highlighted source text, when the document provides it.
    pub text: Option<String>,
}

impl Highlight {
    pub fn new(start: i64, end: i64) -> Self {
        Self {
            start,
            end,
            text: None,
        }
    }

    /// Attach the highlighted text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// The `(start, end)` pair of this highlight.
    pub fn span(&self) -> (i64, i64) {
        (self.start, self.end)
    }

    /// Check if the two ranges share at least one offset.
    ///
    /// Touching ranges such as `[0, 5]` and `[5, 9]` overlap.
    pub fn overlaps(&self, other: &Highlight) -> bool {
        self.end >= other.start && other.end >= self.start
    }
}
