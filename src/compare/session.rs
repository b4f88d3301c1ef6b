//! The comparison session: union, remaining and intersection bookkeeping.
//!
//! A session runs in two phases and is never re-entered:
//!
//! 1. **Union build** - every source and target element of the requested
//!    kinds goes into `union`; `remaining` starts as an independent copy.
//! 2. **Fold** - each requested method runs its matchers, and every match
//!    removes its endpoints from `remaining` and adds them to `intersection`
//!    as chosen by [`IntersectionFold`].
//!
//! `remaining` and `intersection` are not complements of each other. Both only
//! hold ids found in `union`, and no element named by a match is left in
//! `remaining`.

use std::sync::Arc;
use tracing::debug;

use super::{CompareError, CompareMethod, Match};
use crate::model::{Element, ElementKind, Graph};

/// How a match's endpoints enter `intersection`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum IntersectionFold {
    /// Add both endpoints unless both are already present.
    ///
    /// An element matched twice can be counted twice, mirroring how `union`
    /// counts an id present in both graphs. A graph compared with itself
    /// scores 100.
    #[default]
    Pairwise,
    /// Add each endpoint only if it is absent. Keeps `intersection` free of
    /// duplicate ids, so an id shared by both graphs is counted once.
    Distinct,
}

/// A finished comparison of a source graph against a target graph.
#[derive(Clone, Debug)]
pub struct Comparison {
    source: Graph,
    target: Graph,
    fold: IntersectionFold,
    union: Graph,
    remaining: Graph,
    intersection: Graph,
    matches: Vec<Match>,
}

impl Comparison {
    /// Compare `source` against `target` over `compare_types` using `compare_methods` in order.
    ///
    /// Fails if a requested method has no implementation; a partially folded
    /// session is never returned.
    pub fn new(
        source: &Graph,
        target: &Graph,
        compare_types: &[ElementKind],
        compare_methods: &[CompareMethod],
    ) -> Result<Self, CompareError> {
        Self::new_with_fold(
            source,
            target,
            compare_types,
            compare_methods,
            IntersectionFold::default(),
        )
    }

    /// [`Comparison::new`] with an explicit [`IntersectionFold`].
    pub fn new_with_fold(
        source: &Graph,
        target: &Graph,
        compare_types: &[ElementKind],
        compare_methods: &[CompareMethod],
        fold: IntersectionFold,
    ) -> Result<Self, CompareError> {
        let mut union = Graph::new();
        for &kind in compare_types {
            for element in source.get(kind) {
                union.add(element.clone());
            }
            for element in target.get(kind) {
                union.add(element.clone());
            }
        }
        debug!(
            "[COMPARE] union of {} elements over {:?}",
            union.len(),
            compare_types
        );

        let mut comparison = Self {
            source: source.clone(),
            target: target.clone(),
            fold,
            remaining: union.clone(),
            union,
            intersection: Graph::new(),
            matches: Vec::new(),
        };

        for method in compare_methods {
            for matcher in method.matchers() {
                let matches =
                    matcher.find_matches(&comparison.source, &comparison.target, compare_types)?;
                debug!(
                    "[COMPARE] method '{}' matcher '{}' produced {} matches",
                    method,
                    matcher.name(),
                    matches.len()
                );
                comparison.update(matches);
            }
        }

        debug!(
            "[COMPARE] done: union={} intersection={} remaining={}",
            comparison.union.len(),
            comparison.intersection.len(),
            comparison.remaining.len()
        );
        Ok(comparison)
    }

    /// Fold matches into `remaining` and `intersection`.
    ///
    /// Idempotent: folding the same pair twice changes nothing the second time.
    fn update(&mut self, matches: Vec<Match>) {
        for m in matches {
            let named: Vec<Arc<Element>> = self
                .remaining
                .all()
                .filter(|element| m.contains(element))
                .cloned()
                .collect();
            for element in &named {
                self.remaining.remove(element);
            }

            match self.fold {
                IntersectionFold::Pairwise => {
                    if !self.intersection.contains(&m.a) || !self.intersection.contains(&m.b) {
                        self.intersection.add(m.a.clone());
                        self.intersection.add(m.b.clone());
                    }
                }
                IntersectionFold::Distinct => {
                    for endpoint in [&m.a, &m.b] {
                        if !self.intersection.contains(endpoint) {
                            self.intersection.add(endpoint.clone());
                        }
                    }
                }
            }
            self.matches.push(m);
        }
    }

    pub fn source(&self) -> &Graph {
        &self.source
    }

    pub fn target(&self) -> &Graph {
        &self.target
    }

    /// All compared elements from both graphs.
    pub fn union(&self) -> &Graph {
        &self.union
    }

    /// Union elements not named by any match.
    pub fn remaining(&self) -> &Graph {
        &self.remaining
    }

    /// Elements matched to something in the other graph.
    pub fn intersection(&self) -> &Graph {
        &self.intersection
    }

    /// Every match folded into this session, duplicates included.
    pub fn matches(&self) -> &[Match] {
        &self.matches
    }
}
