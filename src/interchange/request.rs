//! Compare requests: two graphs plus the settings to compare them with.
//!
//! ```xml
//! <request>
//!   <compare_types><type>activity</type><type>role</type></compare_types>
//!   <compare_methods><compare_method>spans</compare_method></compare_methods>
//!   <evaluation_methods><evaluation_method>union</evaluation_method></evaluation_methods>
//!   <source_graph><dcrgraph>...</dcrgraph></source_graph>
//!   <target_graph><dcrgraph>...</dcrgraph></target_graph>
//! </request>
//! ```

use std::path::Path;
use tracing::debug;

use super::InterchangeError;
use super::xml::DcrReader;
use crate::config::{CompareConfig, UnknownMethodPolicy};
use crate::model::Graph;
use crate::report::{ComparisonReport, compare};

/// A parsed compare request. Settings stay as the strings that were sent
/// until [`CompareRequest::config`] validates them.
#[derive(Clone, Debug)]
pub struct CompareRequest {
    pub compare_types: Vec<String>,
    pub compare_methods: Vec<String>,
    pub evaluation_method: String,
    pub source: Graph,
    pub target: Graph,
}

impl CompareRequest {
    /// Read a request document.
    ///
    /// Only the first evaluation method is used. The evaluation method and
    /// both graphs are required.
    pub fn from_xml(input: &[u8]) -> Result<Self, InterchangeError> {
        let document = DcrReader::new().read(input)?;

        let evaluation_method = document
            .evaluation_methods
            .into_iter()
            .next()
            .ok_or_else(|| InterchangeError::missing_element("evaluation_method"))?;
        let source = document
            .source
            .ok_or_else(|| InterchangeError::missing_element("source_graph"))?
            .build();
        let target = document
            .target
            .ok_or_else(|| InterchangeError::missing_element("target_graph"))?
            .build();

        debug!(
            "[REQUEST] compare_types={:?} compare_methods={:?} evaluation={}",
            document.compare_types, document.compare_methods, evaluation_method
        );

        Ok(Self {
            compare_types: document.compare_types,
            compare_methods: document.compare_methods,
            evaluation_method,
            source,
            target,
        })
    }

    /// Read a request document from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, InterchangeError> {
        let bytes = std::fs::read(path)?;
        Self::from_xml(&bytes)
    }

    /// Validate the request settings.
    pub fn config(&self, policy: UnknownMethodPolicy) -> Result<CompareConfig, InterchangeError> {
        Ok(CompareConfig::from_names_with_policy(
            &self.compare_types,
            &self.compare_methods,
            &self.evaluation_method,
            policy,
        )?)
    }

    /// Compare the two graphs with the request settings and the default policy.
    pub fn run(&self) -> Result<ComparisonReport, InterchangeError> {
        let config = self.config(UnknownMethodPolicy::default())?;
        Ok(compare(&self.source, &self.target, &config)?)
    }
}
