//! Graph comparison: matchers and the comparison session.
//!
//! ```text
//! ┌──────────┐   ┌──────────┐
//! │  source  │   │  target  │
//! └────┬─────┘   └────┬─────┘
//!      └──────┬───────┘
//!             ▼
//! ┌──────────────────────────────┐
//! │ Comparison::new              │
//! │  1. union := source ∪ target │
//! │  2. for method: matchers()   │──► Vec<Match>
//! │     fold into remaining /    │
//! │     intersection             │
//! └──────────────────────────────┘
//! ```
//!
//! Compare methods are a closed enumeration mapped to matchers through
//! [`CompareMethod::matchers`]. New criteria plug in as [`Matcher`]
//! implementations.

mod error;
pub mod matcher;
mod method;
mod session;

pub use error::CompareError;
pub use matcher::{LabelMatcher, Match, Matcher, RoleMatcher, RuleMatcher, SpanMatcher};
pub use method::CompareMethod;
pub use session::{Comparison, IntersectionFold};
