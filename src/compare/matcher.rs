//! Matchers: strategies that pair elements across two graphs.
//!
//! Each matcher looks at a source and a target graph, restricted to a list of
//! element kinds, and reports the pairs it judges equivalent.
//!
//! | Matcher | Criterion | Status |
//! |---|---|---|
//! | [`SpanMatcher`] | overlapping highlight spans | implemented |
//! | [`LabelMatcher`] | equal textual labels | unsupported |
//! | [`RoleMatcher`] | shared role assignment | unsupported |
//! | [`RuleMatcher`] | shared rule endpoints | unsupported |
//!
//! Unsupported matchers return [`CompareError::UnsupportedMatcher`] instead of
//! an empty list, so "no matches" always means the criterion was evaluated.

use std::sync::Arc;
use tracing::{debug, trace};

use super::CompareError;
use crate::model::{Element, ElementKind, Graph};

/// A source element and a target element judged equivalent.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Match {
    /// Element from the source graph.
    pub a: Arc<Element>,
    /// Element from the target graph.
    pub b: Arc<Element>,
}

impl Match {
    pub fn new(a: Arc<Element>, b: Arc<Element>) -> Self {
        Self { a, b }
    }

    /// Check if `element` is one of the two endpoints (by id).
    pub fn contains(&self, element: &Element) -> bool {
        self.a.as_ref() == element || self.b.as_ref() == element
    }

    /// The same pair with source and target swapped.
    pub fn mirrored(&self) -> Self {
        Self::new(self.b.clone(), self.a.clone())
    }
}

/// Strategy for finding equivalent elements across two graphs.
pub trait Matcher: Send + Sync {
    /// Name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Find matching pairs between `source` and `target` for the given kinds.
    fn find_matches(
        &self,
        source: &Graph,
        target: &Graph,
        kinds: &[ElementKind],
    ) -> Result<Vec<Match>, CompareError>;
}

/// Matches elements whose highlights overlap.
///
/// Every span of every source element is tested against every span of every
/// target element of the same kind. A pair is reported once per overlapping
/// span pair, so duplicates are expected.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpanMatcher;

impl Matcher for SpanMatcher {
    fn name(&self) -> &'static str {
        "spans"
    }

    fn find_matches(
        &self,
        source: &Graph,
        target: &Graph,
        kinds: &[ElementKind],
    ) -> Result<Vec<Match>, CompareError> {
        let mut matches = Vec::new();

        for &kind in kinds {
            for a in source.get(kind) {
                for b in target.get(kind) {
                    for a_highlight in &a.highlights {
                        for b_highlight in &b.highlights {
                            if a_highlight.overlaps(b_highlight) {
                                trace!(
                                    "[SPANS] {} {:?} overlaps {} {:?}",
                                    a.id,
                                    a_highlight.span(),
                                    b.id,
                                    b_highlight.span()
                                );
                                matches.push(Match::new(a.clone(), b.clone()));
                            }
                        }
                    }
                }
            }
        }

        debug!("[SPANS] {} matches over kinds {:?}", matches.len(), kinds);
        Ok(matches)
    }
}

/// Matches elements by textual label equality.
#[derive(Debug, Clone, Copy, Default)]
pub struct LabelMatcher;

impl Matcher for LabelMatcher {
    fn name(&self) -> &'static str {
        "labels"
    }

    fn find_matches(
        &self,
        _source: &Graph,
        _target: &Graph,
        _kinds: &[ElementKind],
    ) -> Result<Vec<Match>, CompareError> {
        Err(CompareError::unsupported(self.name()))
    }
}

/// Matches activities that share a role assignment.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoleMatcher;

impl Matcher for RoleMatcher {
    fn name(&self) -> &'static str {
        "roles"
    }

    fn find_matches(
        &self,
        _source: &Graph,
        _target: &Graph,
        _kinds: &[ElementKind],
    ) -> Result<Vec<Match>, CompareError> {
        Err(CompareError::unsupported(self.name()))
    }
}

/// Matches rules that connect equivalent endpoints.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleMatcher;

impl Matcher for RuleMatcher {
    fn name(&self) -> &'static str {
        "rules"
    }

    fn find_matches(
        &self,
        _source: &Graph,
        _target: &Graph,
        _kinds: &[ElementKind],
    ) -> Result<Vec<Match>, CompareError> {
        Err(CompareError::unsupported(self.name()))
    }
}
