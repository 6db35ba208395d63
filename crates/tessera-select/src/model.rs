//! Selector models: the plain-data description a matcher is built from.
//!
//! Models are what a configuration loader produces. Mandatory fields are
//! `Option`s so that a missing value can be represented and rejected by
//! [`MatcherFactory::build`](crate::MatcherFactory::build).

use crate::cell_group::CellGroupDirection;
use crate::matcher::MatcherType;

/// Model for [`BasicMatcher`](crate::BasicMatcher).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BasicSelectorModel {
    /// Sprite prefix.
    pub prefix: String,
    /// Sprite suffix.
    pub suffix: String,
}

/// Model shared by the self-gated neighbour matchers (cardinal, diagonal,
/// neighbour overlay, road parity, road corner, river outlet).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NeighbourSelectorModel {
    /// Sprite prefix.
    pub prefix: String,
    /// Id of the context data set neighbours are read from. Mandatory.
    pub context_data_set: Option<String>,
    /// Classes the tile itself must carry (any of).
    pub match_self: Vec<String>,
    /// Classes a neighbour must carry to count (any of).
    pub match_with: Vec<String>,
}

impl NeighbourSelectorModel {
    /// A model reading from data set `data_set`.
    pub fn new(prefix: &str, data_set: &str) -> Self {
        Self {
            prefix: prefix.to_owned(),
            context_data_set: Some(data_set.to_owned()),
            ..Self::default()
        }
    }

    /// Add a self class.
    pub fn matching_self(mut self, class: &str) -> Self {
        self.match_self.push(class.to_owned());
        self
    }

    /// Add a neighbour class.
    pub fn matching_with(mut self, class: &str) -> Self {
        self.match_with.push(class.to_owned());
        self
    }
}

/// Model for [`CornerMatcher`](crate::CornerMatcher).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CornerSelectorModel {
    /// Sprite prefix. Mandatory.
    pub prefix: Option<String>,
    /// Context data set id. Mandatory.
    pub context_data_set: Option<String>,
    /// Declared classes, in key order. Must not be empty.
    pub matches: Vec<String>,
    /// Class assumed for cells that resolve to none of `matches`.
    pub default_class: Option<String>,
}

/// Model for [`CellGroupMatcher`](crate::CellGroupMatcher).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CellGroupSelectorModel {
    /// Sprite prefix. Mandatory.
    pub prefix: Option<String>,
    /// Context data set id. Mandatory.
    pub context_data_set: Option<String>,
    /// Declared classes, in key order. Must not be empty.
    pub matches: Vec<String>,
    /// Class assumed for cells that resolve to none of `matches`.
    pub default_class: Option<String>,
    /// Which quad the tile anchors.
    pub direction: CellGroupDirection,
}

/// Model for [`ListMatcher`](crate::ListMatcher).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListSelectorModel {
    /// Children, run in order.
    pub selectors: Vec<SelectorModel>,
}

/// One branch of a [`ChoiceSelectorModel`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagChoiceModel {
    /// Tags routed to this branch.
    pub tags: Vec<String>,
    /// The branch. Mandatory.
    pub selector: Option<Box<SelectorModel>>,
}

/// Model for [`ChoiceMatcher`](crate::ChoiceMatcher).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChoiceSelectorModel {
    /// Branches.
    pub choices: Vec<TagChoiceModel>,
}

/// One branch of a [`QuantityChoiceSelectorModel`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuantityChoiceModel {
    /// Threshold this branch serves.
    pub quantity: i64,
    /// The branch. Mandatory.
    pub selector: Option<Box<SelectorModel>>,
}

/// Model for [`QuantityChoiceMatcher`](crate::QuantityChoiceMatcher).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuantityChoiceSelectorModel {
    /// Branches, in any order.
    pub choices: Vec<QuantityChoiceModel>,
}

/// A selector model of any kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectorModel {
    /// Fixed prefix/suffix.
    Basic(BasicSelectorModel),
    /// N/E/S/W bitmask.
    Cardinal(NeighbourSelectorModel),
    /// NW/NE/SE/SW bitmask.
    Diagonal(NeighbourSelectorModel),
    /// One overlay per matching neighbour.
    NeighbourOverlay(NeighbourSelectorModel),
    /// Separate cardinal and diagonal road patterns.
    RoadParity(NeighbourSelectorModel),
    /// Diagonal road corner fill-ins.
    RoadCorner(NeighbourSelectorModel),
    /// Outlets drawn on matching neighbours.
    RiverOutlet(NeighbourSelectorModel),
    /// Quadrant corners.
    Corner(CornerSelectorModel),
    /// Four-cell group.
    CellGroup(CellGroupSelectorModel),
    /// Run every child.
    List(ListSelectorModel),
    /// Dispatch on tag.
    Choice(ChoiceSelectorModel),
    /// Dispatch on quantity.
    QuantityChoice(QuantityChoiceSelectorModel),
}

impl SelectorModel {
    /// The kind of matcher this model builds.
    pub fn matcher_type(&self) -> MatcherType {
        match self {
            Self::Basic(_) => MatcherType::Basic,
            Self::Cardinal(_) => MatcherType::Cardinal,
            Self::Diagonal(_) => MatcherType::Diagonal,
            Self::NeighbourOverlay(_) => MatcherType::NeighbourOverlay,
            Self::RoadParity(_) => MatcherType::RoadParity,
            Self::RoadCorner(_) => MatcherType::RoadCorner,
            Self::RiverOutlet(_) => MatcherType::RiverOutlet,
            Self::Corner(_) => MatcherType::Corner,
            Self::CellGroup(_) => MatcherType::CellGroup,
            Self::List(_) => MatcherType::List,
            Self::Choice(_) => MatcherType::Choice,
            Self::QuantityChoice(_) => MatcherType::QuantityChoice,
        }
    }

    /// Shorthand for a basic model.
    pub fn basic(prefix: &str, suffix: &str) -> Self {
        Self::Basic(BasicSelectorModel {
            prefix: prefix.to_owned(),
            suffix: suffix.to_owned(),
        })
    }

    /// Shorthand for a list model.
    pub fn list(selectors: Vec<SelectorModel>) -> Self {
        Self::List(ListSelectorModel { selectors })
    }

    /// Number of models in this tree, including itself.
    pub fn node_count(&self) -> usize {
        let children: usize = match self {
            Self::List(m) => m.selectors.iter().map(Self::node_count).sum(),
            Self::Choice(m) => m
                .choices
                .iter()
                .filter_map(|c| c.selector.as_deref())
                .map(Self::node_count)
                .sum(),
            Self::QuantityChoice(m) => m
                .choices
                .iter()
                .filter_map(|c| c.selector.as_deref())
                .map(Self::node_count)
                .sum(),
            _ => 0,
        };
        1 + children
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_line_up_with_matcher_types() {
        let n = NeighbourSelectorModel::new("p", "terrain");
        let models = [
            SelectorModel::basic("", ""),
            SelectorModel::Cardinal(n.clone()),
            SelectorModel::Diagonal(n.clone()),
            SelectorModel::NeighbourOverlay(n.clone()),
            SelectorModel::RoadParity(n.clone()),
            SelectorModel::RoadCorner(n.clone()),
            SelectorModel::RiverOutlet(n),
            SelectorModel::Corner(CornerSelectorModel::default()),
            SelectorModel::CellGroup(CellGroupSelectorModel::default()),
            SelectorModel::list(Vec::new()),
            SelectorModel::Choice(ChoiceSelectorModel::default()),
            SelectorModel::QuantityChoice(QuantityChoiceSelectorModel::default()),
        ];
        let kinds: Vec<_> = models.iter().map(SelectorModel::matcher_type).collect();
        assert_eq!(kinds, MatcherType::ALL);
    }

    #[test]
    fn node_count_walks_nested_models() {
        let model = SelectorModel::list(vec![
            SelectorModel::basic("", ""),
            SelectorModel::Choice(ChoiceSelectorModel {
                choices: vec![TagChoiceModel {
                    tags: vec!["grass".into()],
                    selector: Some(Box::new(SelectorModel::basic("", ""))),
                }],
            }),
        ]);
        assert_eq!(model.node_count(), 4);
    }
}
