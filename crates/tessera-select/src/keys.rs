//! Combinatorial selector keys.
//!
//! A key is an ordered tuple of parts, each with an `index` (digit) and a
//! `cardinality` (radix). [`linear_index`](CellGroupSelectorKey::linear_index)
//! folds the tuple into one mixed-radix integer:
//!
//! ```text
//! a.index + b.index*card(a) + c.index*card(a)*card(b) + d.index*card(a)*card(b)*card(c)
//! ```
//!
//! with `card(x) = max(1, x.cardinality)`. For `bool` parts (radix 2) this
//! is the 4-bit mask `a*1 + b*2 + c*4 + d*8`.

use tessera_tags::ClassificationBits;

use crate::selection::TileTagEntrySelection;

/// One digit of a combinatorial key.
pub trait SelectorKeyPart: Copy {
    /// Digit value.
    fn index(&self) -> usize;
    /// Radix. Zero is treated as one.
    fn cardinality(&self) -> usize;
}

impl SelectorKeyPart for bool {
    fn index(&self) -> usize {
        usize::from(*self)
    }

    fn cardinality(&self) -> usize {
        2
    }
}

impl<B: ClassificationBits> SelectorKeyPart for TileTagEntrySelection<B> {
    fn index(&self) -> usize {
        self.index
    }

    fn cardinality(&self) -> usize {
        self.cardinality
    }
}

fn card<T: SelectorKeyPart>(part: &T) -> usize {
    part.cardinality().max(1)
}

fn combine<A, B, C, D>(a: &A, b: &B, c: &C, d: &D) -> usize
where
    A: SelectorKeyPart,
    B: SelectorKeyPart,
    C: SelectorKeyPart,
    D: SelectorKeyPart,
{
    let ab = card(a);
    let abc = ab * card(b);
    let abcd = abc * card(c);
    a.index() + b.index() * ab + c.index() * abc + d.index() * abcd
}

/// Size of the key space for four parts of radix `cardinality`.
pub fn key_space(cardinality: usize) -> usize {
    cardinality.max(1).pow(4)
}

/// Split a linear index back into four digits of radix `cardinality`.
///
/// Inverse of [`linear_index`](CellGroupSelectorKey::linear_index) for
/// keys whose parts share one radix.
pub fn digits(index: usize, cardinality: usize) -> [usize; 4] {
    let r = cardinality.max(1);
    [index % r, (index / r) % r, (index / (r * r)) % r, (index / (r * r * r)) % r]
}

/// Key over the four cardinal neighbours, weighted N, E, S, W.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CardinalSelectorKey<T> {
    /// North.
    pub n: T,
    /// East.
    pub e: T,
    /// South.
    pub s: T,
    /// West.
    pub w: T,
}

impl<T: SelectorKeyPart> CardinalSelectorKey<T> {
    /// Create a key.
    pub fn new(n: T, e: T, s: T, w: T) -> Self {
        Self { n, e, s, w }
    }

    /// Mixed-radix index of this key.
    pub fn linear_index(&self) -> usize {
        combine(&self.n, &self.e, &self.s, &self.w)
    }
}

impl CardinalSelectorKey<bool> {
    /// Decode a 4-bit mask.
    pub fn from_mask(mask: usize) -> Self {
        Self::new(mask & 1 != 0, mask & 2 != 0, mask & 4 != 0, mask & 8 != 0)
    }
}

/// Key over the four diagonal neighbours, weighted NW, NE, SE, SW.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DiagonalSelectorKey<T> {
    /// North-west.
    pub nw: T,
    /// North-east.
    pub ne: T,
    /// South-east.
    pub se: T,
    /// South-west.
    pub sw: T,
}

impl<T: SelectorKeyPart> DiagonalSelectorKey<T> {
    /// Create a key.
    pub fn new(nw: T, ne: T, se: T, sw: T) -> Self {
        Self { nw, ne, se, sw }
    }

    /// Mixed-radix index of this key.
    pub fn linear_index(&self) -> usize {
        combine(&self.nw, &self.ne, &self.se, &self.sw)
    }
}

impl DiagonalSelectorKey<bool> {
    /// Decode a 4-bit mask.
    pub fn from_mask(mask: usize) -> Self {
        Self::new(mask & 1 != 0, mask & 2 != 0, mask & 4 != 0, mask & 8 != 0)
    }
}

/// Key over four arbitrary cells `a`, `b`, `c`, `d`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellGroupSelectorKey<T> {
    /// Lowest-weight part.
    pub a: T,
    /// Second part.
    pub b: T,
    /// Third part.
    pub c: T,
    /// Highest-weight part.
    pub d: T,
}

impl<T: SelectorKeyPart> CellGroupSelectorKey<T> {
    /// Create a key.
    pub fn new(a: T, b: T, c: T, d: T) -> Self {
        Self { a, b, c, d }
    }

    /// Mixed-radix index of this key.
    pub fn linear_index(&self) -> usize {
        combine(&self.a, &self.b, &self.c, &self.d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tessera_tags::EntityClassification;

    fn sel(index: usize, cardinality: usize) -> TileTagEntrySelection<u8> {
        TileTagEntrySelection {
            classification: EntityClassification::none(),
            index,
            cardinality,
        }
    }

    #[test]
    fn north_and_south_is_five() {
        let key = CardinalSelectorKey::new(true, false, true, false);
        assert_eq!(key.linear_index(), 5);
    }

    #[test]
    fn bool_keys_equal_the_bitmask() {
        for mask in 0..16 {
            assert_eq!(CardinalSelectorKey::from_mask(mask).linear_index(), mask);
            assert_eq!(DiagonalSelectorKey::from_mask(mask).linear_index(), mask);
        }
        let d = DiagonalSelectorKey::new(false, true, false, true);
        assert_eq!(d.linear_index(), 2 + 8);
    }

    #[test]
    fn zero_cardinality_counts_as_one() {
        let key = CellGroupSelectorKey::new(sel(0, 0), sel(1, 3), sel(2, 3), sel(0, 3));
        assert_eq!(key.linear_index(), 1 + 2 * 3);
    }

    #[test]
    fn mixed_radix_weights() {
        let key = CellGroupSelectorKey::new(sel(2, 3), sel(1, 3), sel(0, 3), sel(1, 3));
        assert_eq!(key.linear_index(), 2 + 3 + 27);
        assert_eq!(digits(key.linear_index(), 3), [2, 1, 0, 1]);
    }

    proptest! {
        #[test]
        fn linear_index_is_a_bijection_onto_the_key_space(
            radix in 1usize..8,
            raw in any::<[usize; 4]>(),
        ) {
            let d = raw.map(|v| v % radix);
            let key = CellGroupSelectorKey::new(
                sel(d[0], radix), sel(d[1], radix), sel(d[2], radix), sel(d[3], radix),
            );
            let index = key.linear_index();
            prop_assert!(index < key_space(radix));
            prop_assert_eq!(digits(index, radix), d);
        }
    }
}
