//! Compare methods and their matcher lookup table.

use std::str::FromStr;

use super::CompareError;
use super::matcher::{LabelMatcher, Matcher, RoleMatcher, RuleMatcher, SpanMatcher};

static SPAN_MATCHERS: [&dyn Matcher; 1] = [&SpanMatcher];
static LABEL_MATCHERS: [&dyn Matcher; 1] = [&LabelMatcher];
static COMPOSITION_MATCHERS: [&dyn Matcher; 2] = [&RoleMatcher, &RuleMatcher];

/// A comparison criterion a caller can request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CompareMethod {
    /// Overlapping highlight spans.
    Spans,
    /// Equal textual labels.
    Labels,
    /// Role assignment and rule endpoint composition.
    Compositions,
}

impl CompareMethod {
    pub const ALL: [CompareMethod; 3] = [
        CompareMethod::Spans,
        CompareMethod::Labels,
        CompareMethod::Compositions,
    ];

    /// Request name, as it appears in compare requests.
    pub fn as_str(&self) -> &'static str {
        match self {
            CompareMethod::Spans => "spans",
            CompareMethod::Labels => "labels",
            CompareMethod::Compositions => "compositions",
        }
    }

    /// Matchers run for this method, in folding order.
    pub fn matchers(&self) -> &'static [&'static dyn Matcher] {
        match self {
            CompareMethod::Spans => &SPAN_MATCHERS,
            CompareMethod::Labels => &LABEL_MATCHERS,
            CompareMethod::Compositions => &COMPOSITION_MATCHERS,
        }
    }
}

impl FromStr for CompareMethod {
    type Err = CompareError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim() {
            "spans" => Ok(CompareMethod::Spans),
            "labels" => Ok(CompareMethod::Labels),
            "compositions" => Ok(CompareMethod::Compositions),
            _ => Err(CompareError::UnknownMethod(name.to_string())),
        }
    }
}

impl std::fmt::Display for CompareMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
