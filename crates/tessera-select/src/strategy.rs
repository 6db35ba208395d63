//! Tag-to-selection resolution.
//!
//! [`ClassSelectorBuilder`] precomputes which declared class every known
//! tag belongs to; [`MatchStrategy`] uses that table to resolve a map cell
//! to a [`TileTagEntrySelection`].

use std::collections::HashMap;

use tessera_core::MapCoordinate;
use tessera_data::SparseTagQueryResult;
use tessera_tags::{ClassificationBits, GraphicTag, GraphicTagMetaDataRegistry};

use crate::context::SharedDataSet;
use crate::selection::{TileTagEntrySelection, TileTagEntrySelectionFactory};

/// Builds the `tag → selection` table for a declared class list.
pub struct ClassSelectorBuilder<'a, B: ClassificationBits> {
    factory: &'a TileTagEntrySelectionFactory<B>,
}

impl<'a, B: ClassificationBits> ClassSelectorBuilder<'a, B> {
    /// Create a builder over the declared classes of `factory`.
    pub fn new(factory: &'a TileTagEntrySelectionFactory<B>) -> Self {
        Self { factory }
    }

    /// Map every registered tag to the declared class it carries.
    ///
    /// Tags carrying none of the declared classes stay unmapped. A tag
    /// carrying several keeps the last one in declaration order, and a
    /// warning is logged.
    pub fn build(
        &self,
        tags: &GraphicTagMetaDataRegistry<B>,
    ) -> HashMap<GraphicTag, TileTagEntrySelection<B>> {
        let mut table = HashMap::new();
        for (tag, classes) in tags.tags() {
            for selection in self.factory.selections() {
                if !classes.matches_any(selection.classification) {
                    continue;
                }
                if let Some(previous) = table.insert(tag.clone(), *selection) {
                    log::warn!(
                        "tag '{}' belongs to both '{}' and '{}'; using '{}'",
                        tag,
                        self.factory.name_of(previous).unwrap_or("?"),
                        self.factory.name_of(*selection).unwrap_or("?"),
                        self.factory.name_of(*selection).unwrap_or("?"),
                    );
                }
            }
        }
        table
    }
}

/// Resolves cells and tags to selections, with an optional default.
pub struct MatchStrategy<B: ClassificationBits, E> {
    data_set: SharedDataSet<E>,
    table: HashMap<GraphicTag, TileTagEntrySelection<B>>,
    default: Option<TileTagEntrySelection<B>>,
}

impl<B: ClassificationBits, E> MatchStrategy<B, E> {
    /// Create a strategy over a precomputed table.
    pub fn new(
        data_set: SharedDataSet<E>,
        table: HashMap<GraphicTag, TileTagEntrySelection<B>>,
        default: Option<TileTagEntrySelection<B>>,
    ) -> Self {
        Self {
            data_set,
            table,
            default,
        }
    }

    /// Selection for a tag, falling back to the default.
    pub fn resolve_tag(&self, tag: &GraphicTag) -> Option<TileTagEntrySelection<B>> {
        self.table.get(tag).copied().or(self.default)
    }

    /// Selection for the cell at `coord` on layer `z`.
    ///
    /// The first queried row whose tag is mapped wins; otherwise the
    /// default, otherwise `None`. `scratch` is cleared before use.
    pub fn try_match(
        &self,
        coord: MapCoordinate,
        z: i32,
        scratch: &mut Vec<SparseTagQueryResult<GraphicTag, E>>,
    ) -> Option<TileTagEntrySelection<B>> {
        scratch.clear();
        self.data_set.query_point(coord, z, scratch);
        scratch
            .iter()
            .find_map(|row| self.table.get(&row.tag).copied())
            .or(self.default)
    }

    /// Whether the underlying data set advertises thread-safety.
    pub fn is_thread_safe(&self) -> bool {
        self.data_set.meta_data().thread_safe
    }

    /// The default selection, if any.
    pub fn default_selection(&self) -> Option<TileTagEntrySelection<B>> {
        self.default
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tessera_test_utils::fixtures::tag_registry;
    use tessera_test_utils::MockDataSet;

    fn registry() -> GraphicTagMetaDataRegistry<u8> {
        tag_registry(&[
            ("grass", &["land"]),
            ("river", &["water"]),
            ("bridge", &["water", "road"]),
            ("fog", &[]),
        ])
    }

    #[test]
    fn unmapped_tags_stay_out_of_the_table() {
        let tags = registry();
        let f = TileTagEntrySelectionFactory::new(tags.classes(), &["land", "water"]).unwrap();
        let table = ClassSelectorBuilder::new(&f).build(&tags);
        assert_eq!(table[&GraphicTag::new("grass")].index, 0);
        assert_eq!(table[&GraphicTag::new("river")].index, 1);
        assert!(!table.contains_key(&GraphicTag::new("fog")));
    }

    #[test]
    fn multi_class_tag_keeps_the_last_declared_class() {
        let tags = registry();
        let f = TileTagEntrySelectionFactory::new(tags.classes(), &["water", "road"]).unwrap();
        let table = ClassSelectorBuilder::new(&f).build(&tags);
        assert_eq!(table[&GraphicTag::new("bridge")], f.lookup("road").unwrap());

        let f = TileTagEntrySelectionFactory::new(tags.classes(), &["road", "water"]).unwrap();
        let table = ClassSelectorBuilder::new(&f).build(&tags);
        assert_eq!(table[&GraphicTag::new("bridge")], f.lookup("water").unwrap());
    }

    #[test]
    fn try_match_takes_first_mapped_row_then_default() {
        let tags = registry();
        let f = TileTagEntrySelectionFactory::new(tags.classes(), &["land", "water"]).unwrap();
        let table = ClassSelectorBuilder::new(&f).build(&tags);

        let mut data = MockDataSet::new();
        data.set(0, 0, "fog").set(0, 0, "river").set(0, 0, "grass");
        data.set(1, 0, "fog");
        let data: SharedDataSet<u32> = Arc::new(data);

        let strict = MatchStrategy::new(data.clone(), table.clone(), None);
        let mut scratch = Vec::new();
        let hit = strict.try_match(MapCoordinate::new(0, 0), 0, &mut scratch);
        assert_eq!(hit, f.lookup("water"));
        assert_eq!(strict.try_match(MapCoordinate::new(1, 0), 0, &mut scratch), None);
        assert_eq!(strict.try_match(MapCoordinate::new(9, 9), 0, &mut scratch), None);

        let lenient = MatchStrategy::new(data, table, f.lookup("land"));
        assert_eq!(
            lenient.try_match(MapCoordinate::new(1, 0), 0, &mut scratch),
            f.lookup("land")
        );
        assert_eq!(lenient.resolve_tag(&GraphicTag::new("river")), f.lookup("water"));
        assert_eq!(lenient.resolve_tag(&GraphicTag::new("lava")), f.lookup("land"));
    }
}
