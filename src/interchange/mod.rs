//! DCR interchange: graph extraction, compare requests and JSON reports.
//!
//! This module connects the comparison core to the documents it is fed
//! with and the responses it produces:
//!
//! - **Graph XML** - DCR highlight documents, read into a [`Graph`](crate::Graph)
//! - **Compare requests** - settings plus a source and a target graph
//! - **JSON** - [`ComparisonReport`](crate::ComparisonReport) output
//!
//! ```text
//! ┌──────────────┐      ┌──────────────┐
//! │  Graph XML   │      │ Request XML  │
//! └──────┬───────┘      └──────┬───────┘
//!        ▼                     ▼
//!  graph_from_xml()   CompareRequest::from_xml()
//!        │                     │ run()
//!        ▼                     ▼
//!      Graph           ComparisonReport ──► to_json()
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use dcr::interchange::CompareRequest;
//!
//! let request = CompareRequest::from_path("request.xml")?;
//! let json = request.run()?.to_json()?;
//! ```

mod error;
mod json;
mod request;
mod xml;

pub use error::InterchangeError;
pub use request::CompareRequest;
pub use xml::graph_from_xml;
