//! Comparison configuration.
//!
//! A [`CompareConfig`] carries everything a caller chooses about a comparison:
//! which element kinds to compare, which methods to run and how to score.
//! It can be built from typed values or from the plain strings a transport
//! layer receives.

use tracing::warn;

use crate::compare::{CompareError, CompareMethod, IntersectionFold};
use crate::evaluate::{EvaluationMethod, SourceIntersectionMode};
use crate::model::ElementKind;

/// What to do with compare method names that are not recognized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum UnknownMethodPolicy {
    /// Skip the name with a warning. The comparison runs as if it was absent.
    #[default]
    Ignore,
    /// Fail with [`CompareError::UnknownMethod`].
    Reject,
}

/// Settings for one comparison session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompareConfig {
    /// Element kinds to compare, in union-building order.
    pub compare_types: Vec<ElementKind>,
    /// Compare methods, in folding order.
    pub compare_methods: Vec<CompareMethod>,
    pub evaluation: EvaluationMethod,
    pub source_intersection_mode: SourceIntersectionMode,
    pub intersection_fold: IntersectionFold,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            compare_types: ElementKind::ALL.to_vec(),
            compare_methods: vec![CompareMethod::Spans],
            evaluation: EvaluationMethod::Union,
            source_intersection_mode: SourceIntersectionMode::default(),
            intersection_fold: IntersectionFold::default(),
        }
    }
}

impl CompareConfig {
    pub fn new(
        compare_types: impl Into<Vec<ElementKind>>,
        compare_methods: impl Into<Vec<CompareMethod>>,
        evaluation: EvaluationMethod,
    ) -> Self {
        Self {
            compare_types: compare_types.into(),
            compare_methods: compare_methods.into(),
            evaluation,
            ..Self::default()
        }
    }

    /// Build a config from request strings with the default [`UnknownMethodPolicy`].
    ///
    /// Element types are case-insensitive. An unknown type or evaluation
    /// method is always an error.
    pub fn from_names<T, M>(
        compare_types: &[T],
        compare_methods: &[M],
        evaluation: &str,
    ) -> Result<Self, CompareError>
    where
        T: AsRef<str>,
        M: AsRef<str>,
    {
        Self::from_names_with_policy(
            compare_types,
            compare_methods,
            evaluation,
            UnknownMethodPolicy::default(),
        )
    }

    /// Build a config from request strings, handling unknown compare methods per `policy`.
    pub fn from_names_with_policy<T, M>(
        compare_types: &[T],
        compare_methods: &[M],
        evaluation: &str,
        policy: UnknownMethodPolicy,
    ) -> Result<Self, CompareError>
    where
        T: AsRef<str>,
        M: AsRef<str>,
    {
        let compare_types = compare_types
            .iter()
            .map(|tag| tag.as_ref().parse::<ElementKind>())
            .collect::<Result<Vec<_>, _>>()?;

        let mut methods = Vec::with_capacity(compare_methods.len());
        for name in compare_methods {
            match name.as_ref().parse::<CompareMethod>() {
                Ok(method) => methods.push(method),
                Err(err) => match policy {
                    UnknownMethodPolicy::Ignore => {
                        warn!("Ignoring unrecognized compare method '{}'", name.as_ref());
                    }
                    UnknownMethodPolicy::Reject => return Err(err),
                },
            }
        }

        Ok(Self {
            compare_types,
            compare_methods: methods,
            evaluation: evaluation.parse()?,
            ..Self::default()
        })
    }

    /// Set the `source_intersection` formula.
    pub fn with_source_intersection_mode(mut self, mode: SourceIntersectionMode) -> Self {
        self.source_intersection_mode = mode;
        self
    }

    pub fn with_evaluation(mut self, evaluation: EvaluationMethod) -> Self {
        self.evaluation = evaluation;
        self
    }

    /// Set how matches enter the intersection.
    pub fn with_intersection_fold(mut self, fold: IntersectionFold) -> Self {
        self.intersection_fold = fold;
        self
    }
}
