//! # dcr-compare
//!
//! Comparison and scoring of highlight-annotated DCR graphs.
//!
//! A DCR graph is reduced here to its activities, roles and rules, each
//! grounded by one or more highlighted text spans. Two graphs are compared by
//! checking whether the same textual evidence grounds the same kind of element
//! in both, which is how a student graph gets graded against a reference.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! interchange → XML extraction, compare requests, JSON output (feature)
//!   ↓
//! report      → ComparisonReport snapshots, compare(), grade_all()
//!   ↓
//! config      → CompareConfig, UnknownMethodPolicy
//!   ↓
//! evaluate    → Evaluator, similarity formulas
//!   ↓
//! compare     → Matchers, Comparison session
//!   ↓
//! model       → Highlight, Element, Graph
//! ```

// ============================================================================
// MODULES (dependency order: model → compare → evaluate → config → report)
// ============================================================================

/// Data model: highlights, elements and the three-bucket graph
pub mod model;

/// Matchers and the union/intersection/remaining comparison session
pub mod compare;

/// Similarity scoring over a finished comparison
pub mod evaluate;

/// Comparison settings, from typed values or request strings
pub mod config;

/// Serializable comparison output and top-level entry points
pub mod report;

/// DCR highlight XML extraction and compare-request handling
#[cfg(feature = "interchange")]
pub mod interchange;

pub use compare::{CompareError, CompareMethod, Comparison, IntersectionFold, Match, Matcher};
pub use config::{CompareConfig, UnknownMethodPolicy};
pub use evaluate::{EvaluationMethod, Evaluator, SourceIntersectionMode};
pub use model::{Element, ElementId, ElementKind, Graph, Highlight, ModelError};
pub use report::{ComparisonReport, GraphSnapshot, compare, grade_all};
