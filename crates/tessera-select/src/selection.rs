//! Indexed class selections and the factory that hands them out.

use tessera_tags::{ClassificationBits, EntityClassification, EntityClassificationRegistry};

use crate::error::MatcherError;

/// One "match bucket": a declared class, its position in the declaration
/// list, and the size of that list.
///
/// Selections are the parts combined into combinatorial keys: `index`
/// is the digit and `cardinality` the radix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TileTagEntrySelection<B: ClassificationBits> {
    /// The class this selection stands for.
    pub classification: EntityClassification<B>,
    /// Position in the declared class list.
    pub index: usize,
    /// Length of the declared class list.
    pub cardinality: usize,
}

/// Hands out one [`TileTagEntrySelection`] per declared class.
///
/// Selection `i` has `index = i` and `cardinality = matches.len()`.
///
/// ```
/// use tessera_select::TileTagEntrySelectionFactory;
/// use tessera_tags::EntityClassificationRegistry;
///
/// let mut classes = EntityClassificationRegistry::<u8>::new();
/// classes.register("land").unwrap();
/// classes.register("water").unwrap();
///
/// let factory = TileTagEntrySelectionFactory::new(&classes, &["water", "land"]).unwrap();
/// let water = factory.lookup("water").unwrap();
/// assert_eq!((water.index, water.cardinality), (0, 2));
/// ```
#[derive(Clone, Debug)]
pub struct TileTagEntrySelectionFactory<B: ClassificationBits> {
    names: Vec<String>,
    selections: Vec<TileTagEntrySelection<B>>,
}

impl<B: ClassificationBits> TileTagEntrySelectionFactory<B> {
    /// Build selections for `matches`, in order.
    ///
    /// # Errors
    ///
    /// [`MatcherError::UnknownClass`] if a name is not registered in `classes`.
    pub fn new<S: AsRef<str>>(
        classes: &EntityClassificationRegistry<B>,
        matches: &[S],
    ) -> Result<Self, MatcherError> {
        let cardinality = matches.len();
        let mut names = Vec::with_capacity(cardinality);
        let mut selections = Vec::with_capacity(cardinality);
        for (index, name) in matches.iter().enumerate() {
            let name = name.as_ref().trim();
            let classification = classes.get(name).ok_or_else(|| MatcherError::UnknownClass {
                name: name.to_owned(),
            })?;
            names.push(name.to_owned());
            selections.push(TileTagEntrySelection {
                classification,
                index,
                cardinality,
            });
        }
        Ok(Self { names, selections })
    }

    /// Selection for a declared class name.
    pub fn lookup(&self, name: &str) -> Option<TileTagEntrySelection<B>> {
        let name = name.trim();
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| self.selections[i])
    }

    /// Declared class name of a selection.
    pub fn name_of(&self, selection: TileTagEntrySelection<B>) -> Option<&str> {
        self.names.get(selection.index).map(String::as_str)
    }

    /// Declared class names, in order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// All selections, in declaration order.
    pub fn selections(&self) -> &[TileTagEntrySelection<B>] {
        &self.selections
    }

    /// Number of declared classes.
    pub fn cardinality(&self) -> usize {
        self.selections.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes() -> EntityClassificationRegistry<u16> {
        let mut c = EntityClassificationRegistry::new();
        for name in ["grass", "sand", "water"] {
            c.register(name).unwrap();
        }
        c
    }

    #[test]
    fn selections_follow_declaration_order() {
        let c = classes();
        let f = TileTagEntrySelectionFactory::new(&c, &["water", "grass"]).unwrap();
        assert_eq!(f.cardinality(), 2);
        let water = f.lookup("water").unwrap();
        let grass = f.lookup("grass").unwrap();
        assert_eq!(water.index, 0);
        assert_eq!(grass.index, 1);
        assert_eq!(water.classification, c.get("water").unwrap());
        assert!(f.selections().iter().all(|s| s.cardinality == 2));
        assert_eq!(f.name_of(grass), Some("grass"));
        assert!(f.lookup("sand").is_none());
    }

    #[test]
    fn unknown_class_is_rejected() {
        let err = TileTagEntrySelectionFactory::new(&classes(), &["grass", "lava"]).unwrap_err();
        assert_eq!(err, MatcherError::UnknownClass { name: "lava".into() });
    }
}
