//! Section type registry.
//!
//! An immutable table from type tag to renderer handle, built once at
//! startup from a static list of `(tag, handle)` pairs. Adding a section type
//! means adding one entry; the dispatcher's control flow never changes.

use std::collections::HashMap;

/// Registry of section renderers keyed by type tag.
///
/// Generic over the handle type so each host stores whatever it dispatches
/// to (view constructors in the browser, summary functions in the CLI).
#[derive(Clone, Debug)]
pub struct SectionRegistry<H> {
    /// Handles keyed by tag
    entries: HashMap<&'static str, H>,
    /// Registration order of tags (for iteration)
    order: Vec<&'static str>,
}

impl<H> SectionRegistry<H> {
    /// Build a registry from `(tag, handle)` pairs.
    ///
    /// If a tag appears more than once, the later handle replaces the
    /// earlier one but keeps its original position.
    pub fn from_entries(entries: impl IntoIterator<Item = (&'static str, H)>) -> Self {
        let mut registry = Self {
            entries: HashMap::new(),
            order: Vec::new(),
        };
        for (tag, handle) in entries {
            if registry.entries.insert(tag, handle).is_none() {
                registry.order.push(tag);
            }
        }
        registry
    }

    /// Look up the handle for a tag. Absence is a normal outcome.
    #[inline]
    pub fn resolve(&self, tag: &str) -> Option<&H> {
        self.entries.get(tag)
    }

    #[inline]
    pub fn contains(&self, tag: &str) -> bool {
        self.entries.contains_key(tag)
    }

    /// Registered tags in registration order.
    pub fn tags(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.order.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_and_unknown() {
        let registry = SectionRegistry::from_entries([("markdown", 1), ("video", 2)]);
        assert_eq!(registry.resolve("markdown"), Some(&1));
        assert_eq!(registry.resolve("video"), Some(&2));
        assert_eq!(registry.resolve("exchange"), None);
        assert_eq!(registry.resolve(""), None);
    }

    #[test]
    fn test_duplicate_tag_replaces_in_place() {
        let registry =
            SectionRegistry::from_entries([("markdown", 1), ("video", 2), ("markdown", 3)]);
        assert_eq!(registry.resolve("markdown"), Some(&3));
        assert_eq!(registry.tags().collect::<Vec<_>>(), vec!["markdown", "video"]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_empty_registry() {
        let registry: SectionRegistry<()> = SectionRegistry::from_entries([]);
        assert!(registry.is_empty());
        assert!(!registry.contains("markdown"));
    }
}
