//! Turns selector models into runnable matchers.

use std::sync::Arc;

use indexmap::IndexMap;
use tessera_nav::{GridNavigator, NavigatorCache, NavigatorMetaData};
use tessera_tags::{
    ClassificationBits, EntityClassification, GraphicTag, GraphicTagMetaDataRegistry,
};

use crate::basic::BasicMatcher;
use crate::cardinal::CardinalMatcher;
use crate::cell_group::CellGroupMatcher;
use crate::composite::{ChoiceMatcher, ListMatcher, QuantityChoiceMatcher};
use crate::context::{NeighbourContext, SharedDataSet};
use crate::corner::CornerMatcher;
use crate::diagonal::DiagonalMatcher;
use crate::error::MatcherError;
use crate::matcher::{Matcher, MatcherType};
use crate::model::{NeighbourSelectorModel, SelectorModel};
use crate::overlay::NeighbourOverlayMatcher;
use crate::river::RiverOutletMatcher;
use crate::road::{RoadCornerMatcher, RoadParityMatcher};
use crate::selection::TileTagEntrySelectionFactory;
use crate::strategy::{ClassSelectorBuilder, MatchStrategy};

/// Builds [`Matcher`]s from [`SelectorModel`]s against a fixed context.
///
/// The context is the tag registry, the grid navigator, and the named
/// data sets that models refer to by id. All of it is shared read-only
/// by every matcher the factory builds.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use tessera_core::MapCoordinate;
/// use tessera_data::SparseTileLayer;
/// use tessera_nav::{GridType, NavigatorMetaData};
/// use tessera_select::{MatcherFactory, NeighbourSelectorModel, SelectorModel, TileMatchRequest};
/// use tessera_tags::{GraphicTag, GraphicTagMetaDataRegistry};
///
/// let mut tags = GraphicTagMetaDataRegistry::<u8>::new();
/// tags.register("river").with_classification("water").unwrap();
///
/// let mut layer = SparseTileLayer::new();
/// for y in 0..3 {
///     layer.place(MapCoordinate::new(1, y), 0, GraphicTag::new("river"), ());
/// }
///
/// let navigator = Arc::from(NavigatorMetaData::new(GridType::Grid).build().unwrap());
/// let factory = MatcherFactory::<u8, ()>::new(Arc::new(tags), navigator)
///     .with_data_set("terrain", Arc::new(layer));
///
/// let model = SelectorModel::Cardinal(
///     NeighbourSelectorModel::new("", "terrain")
///         .matching_self("water")
///         .matching_with("water"),
/// );
/// let matcher = factory.build(&model).unwrap();
///
/// let mut out = Vec::new();
/// let request = TileMatchRequest::new("river", MapCoordinate::new(1, 1), 0);
/// assert!(matcher.match_tile(&request, &mut out));
/// assert_eq!(out[0].sprite.id(), "river_n1e0s1w0");
/// ```
pub struct MatcherFactory<B: ClassificationBits, E> {
    tags: Arc<GraphicTagMetaDataRegistry<B>>,
    navigator: Arc<dyn GridNavigator>,
    data_sets: IndexMap<String, SharedDataSet<E>>,
}

impl<B: ClassificationBits, E> MatcherFactory<B, E> {
    /// Create a factory with no data sets.
    pub fn new(
        tags: Arc<GraphicTagMetaDataRegistry<B>>,
        navigator: Arc<dyn GridNavigator>,
    ) -> Self {
        Self {
            tags,
            navigator,
            data_sets: IndexMap::new(),
        }
    }

    /// Create a factory whose navigator comes from `cache`.
    ///
    /// # Errors
    ///
    /// [`MatcherError::Navigator`] if the grid type is unsupported.
    pub fn from_metadata(
        tags: Arc<GraphicTagMetaDataRegistry<B>>,
        meta: &NavigatorMetaData,
        cache: &mut NavigatorCache,
    ) -> Result<Self, MatcherError> {
        let navigator = cache.get_or_build(meta)?;
        Ok(Self::new(tags, navigator))
    }

    /// Register a context data set under `id`.
    pub fn with_data_set(mut self, id: &str, data_set: SharedDataSet<E>) -> Self {
        self.insert_data_set(id, data_set);
        self
    }

    /// Register a context data set, returning any it replaced.
    pub fn insert_data_set(
        &mut self,
        id: &str,
        data_set: SharedDataSet<E>,
    ) -> Option<SharedDataSet<E>> {
        self.data_sets.insert(id.trim().to_owned(), data_set)
    }

    /// A registered data set.
    pub fn data_set(&self, id: &str) -> Option<&SharedDataSet<E>> {
        self.data_sets.get(id.trim())
    }

    /// Ids of registered data sets, in registration order.
    pub fn data_set_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.data_sets.keys().map(String::as_str)
    }

    /// The tag registry.
    pub fn tags(&self) -> &Arc<GraphicTagMetaDataRegistry<B>> {
        &self.tags
    }

    /// The navigator.
    pub fn navigator(&self) -> &Arc<dyn GridNavigator> {
        &self.navigator
    }

    /// Build a matcher tree from `model`.
    ///
    /// # Errors
    ///
    /// Any [`MatcherError`] found anywhere in the tree. Nothing is
    /// returned for a tree with any error in it.
    pub fn build(&self, model: &SelectorModel) -> Result<Matcher<B, E>, MatcherError> {
        let kind = model.matcher_type();
        log::debug!("building {kind} matcher");
        Ok(match model {
            SelectorModel::Basic(m) => Matcher::Basic(BasicMatcher::new(&m.prefix, &m.suffix)),
            SelectorModel::Cardinal(m) => {
                Matcher::Cardinal(CardinalMatcher::new(&m.prefix, self.neighbour_context(kind, m)?))
            }
            SelectorModel::Diagonal(m) => {
                Matcher::Diagonal(DiagonalMatcher::new(&m.prefix, self.neighbour_context(kind, m)?))
            }
            SelectorModel::NeighbourOverlay(m) => Matcher::NeighbourOverlay(
                NeighbourOverlayMatcher::new(&m.prefix, self.neighbour_context(kind, m)?),
            ),
            SelectorModel::RoadParity(m) => Matcher::RoadParity(RoadParityMatcher::new(
                &m.prefix,
                self.neighbour_context(kind, m)?,
            )),
            SelectorModel::RoadCorner(m) => Matcher::RoadCorner(RoadCornerMatcher::new(
                &m.prefix,
                self.neighbour_context(kind, m)?,
            )),
            SelectorModel::RiverOutlet(m) => Matcher::RiverOutlet(RiverOutletMatcher::new(
                &m.prefix,
                self.neighbour_context(kind, m)?,
            )),
            SelectorModel::Corner(m) => {
                let prefix = required(kind, "prefix", m.prefix.as_deref())?;
                let (strategy, names) = self.strategy(
                    kind,
                    m.context_data_set.as_deref(),
                    &m.matches,
                    m.default_class.as_deref(),
                )?;
                Matcher::Corner(CornerMatcher::new(
                    prefix,
                    strategy,
                    self.navigator.clone(),
                    &names,
                ))
            }
            SelectorModel::CellGroup(m) => {
                let prefix = required(kind, "prefix", m.prefix.as_deref())?;
                let (strategy, names) = self.strategy(
                    kind,
                    m.context_data_set.as_deref(),
                    &m.matches,
                    m.default_class.as_deref(),
                )?;
                Matcher::CellGroup(CellGroupMatcher::new(
                    prefix,
                    strategy,
                    self.navigator.clone(),
                    m.direction,
                    &names,
                ))
            }
            SelectorModel::List(m) => {
                let children = m
                    .selectors
                    .iter()
                    .map(|child| self.build(child))
                    .collect::<Result<Vec<_>, _>>()?;
                Matcher::List(ListMatcher::new(children))
            }
            SelectorModel::Choice(m) => {
                let mut choices = Vec::with_capacity(m.choices.len());
                for choice in &m.choices {
                    let child = required(kind, "selector", choice.selector.as_deref())?;
                    let tags = choice.tags.iter().map(|t| GraphicTag::from(t.as_str())).collect();
                    choices.push((tags, self.build(child)?));
                }
                Matcher::Choice(ChoiceMatcher::new(choices))
            }
            SelectorModel::QuantityChoice(m) => {
                let mut choices = Vec::with_capacity(m.choices.len());
                for choice in &m.choices {
                    let child = required(kind, "selector", choice.selector.as_deref())?;
                    choices.push((choice.quantity, self.build(child)?));
                }
                Matcher::QuantityChoice(QuantityChoiceMatcher::new(choices))
            }
        })
    }

    fn resolve_data_set(
        &self,
        kind: MatcherType,
        id: Option<&str>,
    ) -> Result<SharedDataSet<E>, MatcherError> {
        let id = required(kind, "context_data_set", id)?;
        self.data_set(id)
            .cloned()
            .ok_or_else(|| MatcherError::UnknownDataSet { id: id.to_owned() })
    }

    fn union_of(&self, names: &[String]) -> Result<EntityClassification<B>, MatcherError> {
        let classes = self.tags.classes();
        names.iter().try_fold(EntityClassification::none(), |acc, name| {
            classes
                .get(name)
                .map(|c| acc.union(c))
                .ok_or_else(|| MatcherError::UnknownClass {
                    name: name.trim().to_owned(),
                })
        })
    }

    fn neighbour_context(
        &self,
        kind: MatcherType,
        model: &NeighbourSelectorModel,
    ) -> Result<NeighbourContext<B, E>, MatcherError> {
        let data_set = self.resolve_data_set(kind, model.context_data_set.as_deref())?;
        Ok(NeighbourContext::new(
            self.tags.clone(),
            self.navigator.clone(),
            data_set,
            self.union_of(&model.match_self)?,
            self.union_of(&model.match_with)?,
        ))
    }

    fn strategy(
        &self,
        kind: MatcherType,
        data_set: Option<&str>,
        matches: &[String],
        default_class: Option<&str>,
    ) -> Result<(MatchStrategy<B, E>, Vec<String>), MatcherError> {
        let data_set = self.resolve_data_set(kind, data_set)?;
        if matches.is_empty() {
            return Err(MatcherError::MissingField {
                selector: kind,
                field: "matches",
            });
        }
        let selections = TileTagEntrySelectionFactory::new(self.tags.classes(), matches)?;
        let default = default_class
            .map(|name| {
                selections
                    .lookup(name)
                    .ok_or_else(|| MatcherError::DefaultClassNotDeclared {
                        name: name.trim().to_owned(),
                    })
            })
            .transpose()?;
        let table = ClassSelectorBuilder::new(&selections).build(&self.tags);
        log::debug!(
            "{kind} matcher maps {} tags onto {} classes",
            table.len(),
            selections.cardinality()
        );
        Ok((
            MatchStrategy::new(data_set, table, default),
            selections.names().to_vec(),
        ))
    }
}

fn required<'a, T: ?Sized>(
    selector: MatcherType,
    field: &'static str,
    value: Option<&'a T>,
) -> Result<&'a T, MatcherError> {
    value.ok_or(MatcherError::MissingField { selector, field })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        CellGroupSelectorModel, ChoiceSelectorModel, CornerSelectorModel,
        QuantityChoiceSelectorModel, QuantityChoiceModel, TagChoiceModel,
    };
    use crate::testing::registry;
    use tessera_nav::{GridType, NavigatorError};
    use tessera_test_utils::fixtures::grid_navigator;
    use tessera_test_utils::MockDataSet;

    fn factory() -> MatcherFactory<u8, u32> {
        MatcherFactory::<u8, u32>::new(registry(), grid_navigator())
            .with_data_set("terrain", Arc::new(MockDataSet::new()))
    }

    fn corner(prefix: Option<&str>, matches: &[&str], default: Option<&str>) -> SelectorModel {
        SelectorModel::Corner(CornerSelectorModel {
            prefix: prefix.map(str::to_owned),
            context_data_set: Some("terrain".into()),
            matches: matches.iter().map(|s| s.to_string()).collect(),
            default_class: default.map(str::to_owned),
        })
    }

    // ── Success ──────────────────────────────────────────────────

    #[test]
    fn builds_every_leaf_kind() {
        let n = NeighbourSelectorModel::new("", "terrain")
            .matching_self("a")
            .matching_with("b");
        let models = [
            SelectorModel::basic("", ""),
            SelectorModel::Cardinal(n.clone()),
            SelectorModel::Diagonal(n.clone()),
            SelectorModel::NeighbourOverlay(n.clone()),
            SelectorModel::RoadParity(n.clone()),
            SelectorModel::RoadCorner(n.clone()),
            SelectorModel::RiverOutlet(n),
            corner(Some("c"), &["a", "b"], Some("a")),
            SelectorModel::CellGroup(CellGroupSelectorModel {
                prefix: Some("g".into()),
                context_data_set: Some("terrain".into()),
                matches: vec!["a".into()],
                ..Default::default()
            }),
        ];
        let f = factory();
        for model in &models {
            let m = f.build(model).unwrap();
            assert_eq!(m.matcher_type(), model.matcher_type());
        }
    }

    #[test]
    fn data_set_ids_are_trimmed() {
        let f = factory();
        assert!(f.data_set(" terrain ").is_some());
        assert_eq!(f.data_set_ids().collect::<Vec<_>>(), ["terrain"]);
    }

    #[test]
    fn from_metadata_uses_the_cache() {
        let mut cache = NavigatorCache::new();
        let meta = NavigatorMetaData::new(GridType::IsoDiamond);
        let a = MatcherFactory::<u8, u32>::from_metadata(registry(), &meta, &mut cache).unwrap();
        let b = MatcherFactory::<u8, u32>::from_metadata(registry(), &meta, &mut cache).unwrap();
        assert!(Arc::ptr_eq(a.navigator(), b.navigator()));
        assert_eq!(cache.len(), 1);
    }

    // ── Errors ───────────────────────────────────────────────────

    #[test]
    fn corner_without_prefix_is_rejected() {
        let err = factory().build(&corner(None, &["a"], None)).unwrap_err();
        assert_eq!(
            err,
            MatcherError::MissingField {
                selector: MatcherType::Corner,
                field: "prefix"
            }
        );
    }

    #[test]
    fn missing_data_set_field() {
        let model = SelectorModel::Cardinal(NeighbourSelectorModel::default());
        let err = factory().build(&model).unwrap_err();
        assert_eq!(
            err,
            MatcherError::MissingField {
                selector: MatcherType::Cardinal,
                field: "context_data_set"
            }
        );
    }

    #[test]
    fn unknown_data_set() {
        let model = SelectorModel::RiverOutlet(NeighbourSelectorModel::new("", "elevation"));
        let err = factory().build(&model).unwrap_err();
        assert_eq!(err, MatcherError::UnknownDataSet { id: "elevation".into() });
    }

    #[test]
    fn unknown_class_in_neighbour_model() {
        let model = SelectorModel::Cardinal(
            NeighbourSelectorModel::new("", "terrain").matching_with("lava"),
        );
        let err = factory().build(&model).unwrap_err();
        assert_eq!(err, MatcherError::UnknownClass { name: "lava".into() });
    }

    #[test]
    fn empty_match_list() {
        let err = factory().build(&corner(Some("c"), &[], None)).unwrap_err();
        assert!(matches!(err, MatcherError::MissingField { field: "matches", .. }));
    }

    #[test]
    fn default_must_be_declared() {
        let err = factory()
            .build(&corner(Some("c"), &["a"], Some("b")))
            .unwrap_err();
        assert_eq!(err, MatcherError::DefaultClassNotDeclared { name: "b".into() });
    }

    #[test]
    fn nested_errors_abort_the_whole_tree() {
        let model = SelectorModel::list(vec![
            SelectorModel::basic("", ""),
            SelectorModel::Choice(ChoiceSelectorModel {
                choices: vec![TagChoiceModel {
                    tags: vec!["A".into()],
                    selector: Some(Box::new(corner(None, &["a"], None))),
                }],
            }),
        ]);
        assert!(factory().build(&model).is_err());
    }

    #[test]
    fn choice_branches_need_a_selector() {
        let model = SelectorModel::QuantityChoice(QuantityChoiceSelectorModel {
            choices: vec![QuantityChoiceModel {
                quantity: 1,
                selector: None,
            }],
        });
        let err = factory().build(&model).unwrap_err();
        assert_eq!(
            err,
            MatcherError::MissingField {
                selector: MatcherType::QuantityChoice,
                field: "selector"
            }
        );
    }

    #[test]
    fn hex_grids_fail_fast() {
        let mut cache = NavigatorCache::new();
        let meta = NavigatorMetaData::new(GridType::HexDiamond);
        let err = MatcherFactory::<u8, u32>::from_metadata(registry(), &meta, &mut cache)
            .err()
            .unwrap();
        assert!(matches!(
            err,
            MatcherError::Navigator(NavigatorError::UnsupportedGridType { .. })
        ));
    }
}
