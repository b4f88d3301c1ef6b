//! The three-bucket DCR graph container.

use std::sync::Arc;

use super::{Element, ElementKind, ModelError};

/// A DCR graph reduced to its activities, roles and rules.
///
/// Every stored element lives in exactly one bucket, chosen by its kind.
/// Elements are held by `Arc`, so several graphs (a source and the union
/// built from it, for example) can reference the same element objects.
/// Cloning a graph clones the references, not the elements.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    activities: Vec<Arc<Element>>,
    roles: Vec<Arc<Element>>,
    rules: Vec<Arc<Element>>,
}

impl Graph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element to the bucket matching its kind.
    pub fn add(&mut self, element: impl Into<Arc<Element>>) {
        let element = element.into();
        self.bucket_mut(element.kind).push(element);
    }

    /// Builder form of [`Graph::add`].
    pub fn with(mut self, element: impl Into<Arc<Element>>) -> Self {
        self.add(element);
        self
    }

    /// Remove the first entry equal to `element` (by id) from its kind's bucket.
    ///
    /// Removing an element that is not present is a no-op.
    pub fn remove(&mut self, element: &Element) {
        let bucket = self.bucket_mut(element.kind);
        if let Some(index) = bucket.iter().position(|existing| existing.as_ref() == element) {
            bucket.remove(index);
        }
    }

    /// The live bucket for a kind, in insertion order.
    pub fn get(&self, kind: ElementKind) -> &[Arc<Element>] {
        match kind {
            ElementKind::Activity => &self.activities,
            ElementKind::Role => &self.roles,
            ElementKind::Rule => &self.rules,
        }
    }

    /// The bucket for an untyped tag such as `"activity"`.
    pub fn get_tag(&self, tag: &str) -> Result<&[Arc<Element>], ModelError> {
        Ok(self.get(tag.parse()?))
    }

    /// All elements across the three buckets: activities, then roles, then rules.
    ///
    /// This is a multiset; an id stored twice is yielded twice.
    pub fn all(&self) -> impl Iterator<Item = &Arc<Element>> {
        self.activities
            .iter()
            .chain(self.roles.iter())
            .chain(self.rules.iter())
    }

    /// Check if an element equal to `element` (by id) is stored in any bucket.
    pub fn contains(&self, element: &Element) -> bool {
        self.all().any(|existing| existing.as_ref() == element)
    }

    /// Total number of stored entries.
    pub fn len(&self) -> usize {
        self.activities.len() + self.roles.len() + self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn bucket_mut(&mut self, kind: ElementKind) -> &mut Vec<Arc<Element>> {
        match kind {
            ElementKind::Activity => &mut self.activities,
            ElementKind::Role => &mut self.roles,
            ElementKind::Rule => &mut self.rules,
        }
    }
}
