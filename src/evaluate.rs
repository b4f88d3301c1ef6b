//! Similarity scoring over a finished [`Comparison`].
//!
//! ```text
//! union                          #intersection          / #union
//! source_intersection, corrected #(intersection ∩ source) / #(union ∩ source)
//! source_intersection, literal   #intersection          / #(remaining ∩ source)
//! ```
//!
//! Scores are percentages. A non-positive numerator or denominator scores 0.

use rustc_hash::FxHashSet;
use std::str::FromStr;
use tracing::debug;

use crate::compare::{CompareError, Comparison};
use crate::model::{ElementId, Graph};

/// How a comparison is turned into a score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EvaluationMethod {
    /// Share of the union that was matched.
    #[default]
    Union,
    /// Share measured against the source graph, see [`SourceIntersectionMode`].
    SourceIntersection,
}

impl EvaluationMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            EvaluationMethod::Union => "union",
            EvaluationMethod::SourceIntersection => "source_intersection",
        }
    }
}

impl FromStr for EvaluationMethod {
    type Err = CompareError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim() {
            "union" => Ok(EvaluationMethod::Union),
            "source_intersection" => Ok(EvaluationMethod::SourceIntersection),
            _ => Err(CompareError::UnknownEvaluationMethod(name.to_string())),
        }
    }
}

impl std::fmt::Display for EvaluationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Formula used by [`EvaluationMethod::SourceIntersection`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SourceIntersectionMode {
    /// Matched source elements over compared source elements.
    #[default]
    Corrected,
    /// All matched elements over the source elements still in `remaining`.
    ///
    /// Not clamped; can exceed 100.
    Literal,
}

/// Computes a similarity percentage for a comparison.
#[derive(Debug)]
pub struct Evaluator<'a> {
    comparison: &'a Comparison,
    method: EvaluationMethod,
    mode: SourceIntersectionMode,
}

impl<'a> Evaluator<'a> {
    pub fn new(comparison: &'a Comparison, method: EvaluationMethod) -> Self {
        Self {
            comparison,
            method,
            mode: SourceIntersectionMode::default(),
        }
    }

    /// Evaluator for a method given by name, as it arrives in a request.
    pub fn from_name(comparison: &'a Comparison, method: &str) -> Result<Self, CompareError> {
        Ok(Self::new(comparison, method.parse()?))
    }

    /// Select the `source_intersection` formula.
    pub fn with_mode(mut self, mode: SourceIntersectionMode) -> Self {
        self.mode = mode;
        self
    }

    /// The similarity score in percent.
    pub fn similarity(&self) -> f64 {
        let (part, whole) = match (self.method, self.mode) {
            (EvaluationMethod::Union, _) => self.union_ratio(),
            (EvaluationMethod::SourceIntersection, SourceIntersectionMode::Corrected) => {
                self.source_ratio()
            }
            (EvaluationMethod::SourceIntersection, SourceIntersectionMode::Literal) => {
                self.literal_source_ratio()
            }
        };
        let score = percentage(part, whole);
        debug!(
            "[EVALUATE] {} ({:?}): {}/{} = {}",
            self.method, self.mode, part, whole, score
        );
        score
    }

    fn union_ratio(&self) -> (usize, usize) {
        (
            self.comparison.intersection().len(),
            self.comparison.union().len(),
        )
    }

    fn source_ratio(&self) -> (usize, usize) {
        let source = source_ids(self.comparison.source());
        (
            count_in(self.comparison.intersection(), &source),
            count_in(self.comparison.union(), &source),
        )
    }

    fn literal_source_ratio(&self) -> (usize, usize) {
        let source = source_ids(self.comparison.source());
        (
            self.comparison.intersection().len(),
            count_in(self.comparison.remaining(), &source),
        )
    }
}

/// `100 * part / whole`, or 0 when either side is zero.
pub fn percentage(part: usize, whole: usize) -> f64 {
    if part > 0 && whole > 0 {
        100.0 * part as f64 / whole as f64
    } else {
        0.0
    }
}

fn source_ids(source: &Graph) -> FxHashSet<&ElementId> {
    source.all().map(|e| &e.id).collect()
}

fn count_in(graph: &Graph, ids: &FxHashSet<&ElementId>) -> usize {
    graph.all().filter(|e| ids.contains(&e.id)).count()
}
