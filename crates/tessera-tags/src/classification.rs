//! Fixed-width classification bitsets and the registry that assigns bits.

use crate::error::ClassificationError;
use indexmap::IndexMap;
use std::fmt;
use std::hash::Hash;
use std::ops::{BitAnd, BitOr};

/// Unsigned integer types usable as classification storage.
///
/// Implemented for `u8`, `u16`, `u32` and `u64`; the bit width is the
/// number of classes a registry of that type can hold.
pub trait ClassificationBits:
    Copy
    + Eq
    + Hash
    + Default
    + fmt::Debug
    + fmt::Binary
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + Send
    + Sync
    + 'static
{
    /// Bit width.
    const BITS: u32;
    /// The all-zero value.
    const ZERO: Self;

    /// A value with only bit `index` set. `index` must be below `BITS`.
    fn bit(index: u32) -> Self;

    /// Number of set bits.
    fn count_ones(self) -> u32;

    /// Whether bit `index` is set.
    fn test(self, index: u32) -> bool {
        self & Self::bit(index) != Self::ZERO
    }
}

macro_rules! impl_classification_bits {
    ($($t:ty),*) => {
        $(
            impl ClassificationBits for $t {
                const BITS: u32 = <$t>::BITS;
                const ZERO: Self = 0;

                fn bit(index: u32) -> Self {
                    1 << index
                }

                fn count_ones(self) -> u32 {
                    <$t>::count_ones(self)
                }
            }
        )*
    };
}

impl_classification_bits!(u8, u16, u32, u64);

/// Membership of an entity in a set of registered classes.
///
/// A class registered in an [`EntityClassificationRegistry`] is a value
/// with exactly one bit set; the classification of a tag is the union of
/// its classes. The all-zero value means "no class".
///
/// # Examples
///
/// ```
/// use tessera_tags::{EntityClassification16, EntityClassificationRegistry};
///
/// let mut reg = EntityClassificationRegistry::<u16>::new();
/// let water = reg.register("water").unwrap();
/// let road = reg.register("road").unwrap();
/// let bridge = water.union(road);
/// assert!(bridge.matches_any(water));
/// assert!(!water.matches_any(road));
/// assert_eq!(EntityClassification16::none().cardinality(), 16);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EntityClassification<B: ClassificationBits>(B);

/// Classification with room for 8 classes.
pub type EntityClassification8 = EntityClassification<u8>;
/// Classification with room for 16 classes.
pub type EntityClassification16 = EntityClassification<u16>;
/// Classification with room for 32 classes.
pub type EntityClassification32 = EntityClassification<u32>;
/// Classification with room for 64 classes.
pub type EntityClassification64 = EntityClassification<u64>;

impl<B: ClassificationBits> EntityClassification<B> {
    /// The empty classification.
    pub fn none() -> Self {
        Self(B::ZERO)
    }

    /// Wrap raw bits.
    pub fn from_bits(bits: B) -> Self {
        Self(bits)
    }

    /// The classification holding only bit `index`, or `None` past the width.
    pub fn from_index(index: u32) -> Option<Self> {
        (index < B::BITS).then(|| Self(B::bit(index)))
    }

    /// Raw bits.
    pub fn bits(self) -> B {
        self.0
    }

    /// Whether no class is set.
    pub fn is_empty(self) -> bool {
        self.0 == B::ZERO
    }

    /// Whether `self` and `other` share at least one class.
    pub fn matches_any(self, other: Self) -> bool {
        self.0 & other.0 != B::ZERO
    }

    /// Whether every class of `other` is also in `self`.
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Union of both classifications.
    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Intersection of both classifications.
    pub fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Number of classes this type can represent (its bit width).
    pub fn cardinality(self) -> usize {
        B::BITS as usize
    }

    /// Number of classes set.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Indices of the set bits, ascending.
    pub fn indices(self) -> impl Iterator<Item = u32> {
        (0..B::BITS).filter(move |&i| self.0.test(i))
    }
}

impl<B: ClassificationBits> fmt::Debug for EntityClassification<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityClassification({:#b})", self.0)
    }
}

impl<B: ClassificationBits> BitOr for EntityClassification<B> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl<B: ClassificationBits> BitAnd for EntityClassification<B> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

/// Assigns classification bits to class names.
///
/// Registration is idempotent by name and keeps insertion order, so the
/// n-th distinct name always owns bit n. Built once at configuration time.
#[derive(Clone, Debug, Default)]
pub struct EntityClassificationRegistry<B: ClassificationBits> {
    classes: IndexMap<String, EntityClassification<B>>,
}

impl<B: ClassificationBits> EntityClassificationRegistry<B> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            classes: IndexMap::new(),
        }
    }

    /// Register `name`, or return its existing classification.
    ///
    /// Names are trimmed. Returns `Err(ClassificationError::CapacityExceeded)`
    /// once every bit is assigned.
    pub fn register(&mut self, name: &str) -> Result<EntityClassification<B>, ClassificationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ClassificationError::EmptyName);
        }
        if let Some(existing) = self.classes.get(name) {
            return Ok(*existing);
        }
        let next = self.classes.len() as u32;
        let class = EntityClassification::from_index(next).ok_or_else(|| {
            ClassificationError::CapacityExceeded {
                name: name.to_owned(),
                capacity: B::BITS as usize,
            }
        })?;
        self.classes.insert(name.to_owned(), class);
        Ok(class)
    }

    /// Classification of a registered name.
    pub fn get(&self, name: &str) -> Option<EntityClassification<B>> {
        self.classes.get(name.trim()).copied()
    }

    /// Union of the named classes; `None` if any name is unknown.
    pub fn union_of<'a>(
        &self,
        names: impl IntoIterator<Item = &'a str>,
    ) -> Option<EntityClassification<B>> {
        names
            .into_iter()
            .try_fold(EntityClassification::none(), |acc, name| {
                self.get(name).map(|c| acc.union(c))
            })
    }

    /// Name owning exactly `class`, if it is a single registered class.
    pub fn name_of(&self, class: EntityClassification<B>) -> Option<&str> {
        self.classes
            .iter()
            .find(|(_, c)| **c == class)
            .map(|(name, _)| name.as_str())
    }

    /// Names of every registered class set in `classification`, in registration order.
    pub fn names_in(
        &self,
        classification: EntityClassification<B>,
    ) -> impl Iterator<Item = &str> + '_ {
        self.classes
            .iter()
            .filter(move |(_, c)| classification.matches_any(**c))
            .map(|(name, _)| name.as_str())
    }

    /// Number of registered classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Maximum number of classes.
    pub fn capacity(&self) -> usize {
        B::BITS as usize
    }

    /// Registered `(name, classification)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, EntityClassification<B>)> + '_ {
        self.classes.iter().map(|(n, c)| (n.as_str(), *c))
    }
}
