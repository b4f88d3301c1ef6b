//! Data model for highlight-annotated DCR graphs.
//!
//! This module provides the types every comparison works on:
//! - [`Highlight`] - A text span grounding an element in a source document
//! - [`Element`], [`ElementId`], [`ElementKind`] - Activities, roles and rules
//! - [`Graph`] - Three typed buckets of shared element references
//!
//! ```text
//! Graph
//! ├── activities: Vec<Arc<Element>>
//! ├── roles:      Vec<Arc<Element>>
//! └── rules:      Vec<Arc<Element>>
//!                      │
//!                      ▼
//!                 Element { id, kind, highlights: Vec<Highlight> }
//! ```
//!
//! This module has NO dependencies on other dcr modules.

mod element;
mod error;
mod graph;
mod highlight;

pub use element::{Element, ElementId, ElementKind};
pub use error::ModelError;
pub use graph::Graph;
pub use highlight::Highlight;
