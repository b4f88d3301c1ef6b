//! Comparison output and top-level entry points.
//!
//! [`compare`] runs one session and scores it. [`grade_all`] grades many
//! candidate graphs against one reference graph in parallel, one isolated
//! session per candidate.
//!
//! The report holds plain snapshots (ids and spans) rather than graph
//! references, so a transport layer can embed it in any response format.
//! With the `interchange` feature the snapshots implement `serde::Serialize`.

use rayon::prelude::*;
use tracing::debug;

use crate::compare::{CompareError, Comparison};
use crate::config::CompareConfig;
use crate::evaluate::Evaluator;
use crate::model::{Element, Graph, Highlight};

/// One highlight of a snapshotted element.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct HighlightSnapshot {
    pub start: i64,
    pub end: i64,
    #[cfg_attr(feature = "interchange", serde(skip_serializing_if = "Option::is_none"))]
    pub text: Option<String>,
}

impl From<&Highlight> for HighlightSnapshot {
    fn from(highlight: &Highlight) -> Self {
        Self {
            start: highlight.start,
            end: highlight.end,
            text: highlight.text.clone(),
        }
    }
}

/// An element reduced to its id and highlights.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct ElementSnapshot {
    pub id: String,
    pub highlights: Vec<HighlightSnapshot>,
}

impl From<&Element> for ElementSnapshot {
    fn from(element: &Element) -> Self {
        Self {
            id: element.id.to_string(),
            highlights: element.highlights.iter().map(HighlightSnapshot::from).collect(),
        }
    }
}

/// The three element buckets of a graph, as plain data.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct GraphSnapshot {
    pub activities: Vec<ElementSnapshot>,
    pub roles: Vec<ElementSnapshot>,
    pub rules: Vec<ElementSnapshot>,
}

impl From<&Graph> for GraphSnapshot {
    fn from(graph: &Graph) -> Self {
        use crate::model::ElementKind;

        let bucket = |kind: ElementKind| -> Vec<ElementSnapshot> {
            graph
                .get(kind)
                .iter()
                .map(|e| ElementSnapshot::from(e.as_ref()))
                .collect()
        };
        Self {
            activities: bucket(ElementKind::Activity),
            roles: bucket(ElementKind::Role),
            rules: bucket(ElementKind::Rule),
        }
    }
}

impl GraphSnapshot {
    /// Ids across all buckets: activities, then roles, then rules.
    pub fn ids(&self) -> Vec<&str> {
        self.activities
            .iter()
            .chain(&self.roles)
            .chain(&self.rules)
            .map(|e| e.id.as_str())
            .collect()
    }
}

/// Score and intersection of a finished comparison.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct ComparisonReport {
    /// Similarity in percent.
    pub score: f64,
    /// Elements matched across the two graphs.
    pub intersection: GraphSnapshot,
}

impl ComparisonReport {
    /// Score a finished comparison with the evaluation settings of `config`.
    pub fn from_comparison(comparison: &Comparison, config: &CompareConfig) -> Self {
        let score = Evaluator::new(comparison, config.evaluation)
            .with_mode(config.source_intersection_mode)
            .similarity();
        Self {
            score,
            intersection: GraphSnapshot::from(comparison.intersection()),
        }
    }
}

/// Compare `source` against `target` and score the result.
pub fn compare(
    source: &Graph,
    target: &Graph,
    config: &CompareConfig,
) -> Result<ComparisonReport, CompareError> {
    let comparison = Comparison::new_with_fold(
        source,
        target,
        &config.compare_types,
        &config.compare_methods,
        config.intersection_fold,
    )?;
    Ok(ComparisonReport::from_comparison(&comparison, config))
}

/// Grade every candidate against `reference`, in parallel.
///
/// The reference is the source graph of each session. Results keep the
/// order of `candidates`.
pub fn grade_all(
    reference: &Graph,
    candidates: &[Graph],
    config: &CompareConfig,
) -> Vec<Result<ComparisonReport, CompareError>> {
    debug!("[GRADE] grading {} candidates", candidates.len());
    candidates
        .par_iter()
        .map(|candidate| compare(reference, candidate, config))
        .collect()
}
