//! Per-tag classification, flags and properties.

use crate::classification::{ClassificationBits, EntityClassification, EntityClassificationRegistry};
use crate::error::ClassificationError;
use crate::tag::GraphicTag;
use indexmap::{IndexMap, IndexSet};

/// Metadata recorded for one graphic tag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagMetaData<B: ClassificationBits> {
    /// Union of every class assigned to the tag.
    pub classification: EntityClassification<B>,
    /// Free-form flags.
    pub flags: IndexSet<String>,
    /// Free-form key/value properties.
    pub properties: IndexMap<String, String>,
}

/// Registry mapping [`GraphicTag`]s to classifications, flags and properties.
///
/// Owns the [`EntityClassificationRegistry`] that assigns class bits, so a
/// class named while registering a tag is created on demand. Tags are kept
/// in registration order, which makes every derived lookup table
/// deterministic.
///
/// # Examples
///
/// ```
/// use tessera_tags::{GraphicTag, GraphicTagMetaDataRegistry};
///
/// let mut tags = GraphicTagMetaDataRegistry::<u32>::new();
/// tags.register("river")
///     .with_classification("water").unwrap()
///     .with_flag("animated");
/// tags.register("grass").with_classification("land").unwrap();
///
/// let water = tags.classes().get("water").unwrap();
/// assert!(tags.query_classes(&GraphicTag::new("river")).matches_any(water));
/// assert!(tags.has_flag(&GraphicTag::new("river"), "animated"));
/// assert!(tags.query_classes(&GraphicTag::new("lava")).is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct GraphicTagMetaDataRegistry<B: ClassificationBits> {
    classes: EntityClassificationRegistry<B>,
    tags: IndexMap<GraphicTag, TagMetaData<B>>,
}

impl<B: ClassificationBits> GraphicTagMetaDataRegistry<B> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::with_classes(EntityClassificationRegistry::new())
    }

    /// Create a registry over an existing class registry.
    pub fn with_classes(classes: EntityClassificationRegistry<B>) -> Self {
        Self {
            classes,
            tags: IndexMap::new(),
        }
    }

    /// Register a tag (idempotent) and return a builder for its metadata.
    pub fn register(&mut self, tag: impl Into<GraphicTag>) -> TagEntry<'_, B> {
        let tag = tag.into();
        self.tags.entry(tag.clone()).or_default();
        TagEntry {
            registry: self,
            tag,
        }
    }

    /// Register a class without attaching it to a tag.
    pub fn register_class(
        &mut self,
        name: &str,
    ) -> Result<EntityClassification<B>, ClassificationError> {
        self.classes.register(name)
    }

    /// The class registry.
    pub fn classes(&self) -> &EntityClassificationRegistry<B> {
        &self.classes
    }

    /// Full classification of `tag`; empty for unknown tags.
    pub fn query_classes(&self, tag: &GraphicTag) -> EntityClassification<B> {
        self.tags
            .get(tag)
            .map(|m| m.classification)
            .unwrap_or_default()
    }

    /// Whether `tag` carries `flag`.
    pub fn has_flag(&self, tag: &GraphicTag, flag: &str) -> bool {
        self.tags
            .get(tag)
            .is_some_and(|m| m.flags.contains(flag))
    }

    /// Property `key` of `tag`.
    pub fn property(&self, tag: &GraphicTag, key: &str) -> Option<&str> {
        self.tags
            .get(tag)
            .and_then(|m| m.properties.get(key))
            .map(String::as_str)
    }

    /// Full metadata of `tag`.
    pub fn metadata(&self, tag: &GraphicTag) -> Option<&TagMetaData<B>> {
        self.tags.get(tag)
    }

    /// Whether `tag` is registered.
    pub fn contains(&self, tag: &GraphicTag) -> bool {
        self.tags.contains_key(tag)
    }

    /// Registered tags with their classification, in registration order.
    pub fn tags(&self) -> impl Iterator<Item = (&GraphicTag, EntityClassification<B>)> + '_ {
        self.tags.iter().map(|(t, m)| (t, m.classification))
    }

    /// Number of registered tags.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Whether no tag is registered.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

/// Builder returned by [`GraphicTagMetaDataRegistry::register`].
///
/// Every call accumulates into the tag's metadata; nothing is replaced.
pub struct TagEntry<'a, B: ClassificationBits> {
    registry: &'a mut GraphicTagMetaDataRegistry<B>,
    tag: GraphicTag,
}

impl<'a, B: ClassificationBits> TagEntry<'a, B> {
    fn meta(&mut self) -> &mut TagMetaData<B> {
        self.registry.tags.entry(self.tag.clone()).or_default()
    }

    /// Add class `name` (registering it if needed) to the tag's classification.
    pub fn with_classification(mut self, name: &str) -> Result<Self, ClassificationError> {
        let class = self.registry.classes.register(name)?;
        let meta = self.meta();
        meta.classification = meta.classification.union(class);
        Ok(self)
    }

    /// Add a flag.
    pub fn with_flag(mut self, flag: &str) -> Self {
        self.meta().flags.insert(flag.trim().to_owned());
        self
    }

    /// Set a property, replacing any previous value for `key`.
    pub fn with_property(mut self, key: &str, value: &str) -> Self {
        self.meta()
            .properties
            .insert(key.trim().to_owned(), value.to_owned());
        self
    }

    /// The tag being configured.
    pub fn tag(&self) -> &GraphicTag {
        &self.tag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> GraphicTag {
        GraphicTag::new(s)
    }

    #[test]
    fn classifications_accumulate_across_registrations() {
        let mut reg = GraphicTagMetaDataRegistry::<u16>::new();
        reg.register("bridge").with_classification("road").unwrap();
        reg.register("bridge").with_classification("water").unwrap();
        let road = reg.classes().get("road").unwrap();
        let water = reg.classes().get("water").unwrap();
        assert_eq!(reg.query_classes(&t("bridge")), road | water);
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn flags_and_properties() {
        let mut reg = GraphicTagMetaDataRegistry::<u8>::new();
        reg.register("lava")
            .with_flag("hot")
            .with_property("damage", "3")
            .with_property("damage", "5");
        assert!(reg.has_flag(&t("lava"), "hot"));
        assert!(!reg.has_flag(&t("lava"), "cold"));
        assert!(!reg.has_flag(&t("ice"), "hot"));
        assert_eq!(reg.property(&t("lava"), "damage"), Some("5"));
        assert!(reg.query_classes(&t("lava")).is_empty());
    }

    #[test]
    fn capacity_error_propagates_from_builder() {
        let mut reg = GraphicTagMetaDataRegistry::<u8>::new();
        for i in 0..8 {
            reg.register_class(&format!("c{i}")).unwrap();
        }
        let err = reg.register("x").with_classification("c8").err();
        assert!(matches!(
            err,
            Some(ClassificationError::CapacityExceeded { capacity: 8, .. })
        ));
        // The tag itself is still registered, just unclassified.
        assert!(reg.contains(&t("x")));
    }

    #[test]
    fn tags_iterate_in_registration_order() {
        let mut reg = GraphicTagMetaDataRegistry::<u32>::new();
        for name in ["c", "a", "b"] {
            reg.register(name);
        }
        let order: Vec<_> = reg.tags().map(|(t, _)| t.as_str().to_owned()).collect();
        assert_eq!(order, vec!["c", "a", "b"]);
    }
}
