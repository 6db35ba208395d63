//! Navigator contract compliance helpers.
//!
//! These functions verify that a navigator satisfies the invariants the
//! matchers rely on. Reused across the base topology and decorator tests.

use crate::navigator::GridNavigator;
use std::collections::HashSet;
use tessera_core::{Direction, MapCoordinate, Range};

fn origins() -> impl Iterator<Item = MapCoordinate> {
    (-3..=3).flat_map(|y| (-3..=3).map(move |x| MapCoordinate::new(x, y)))
}

/// Assert that `Direction::None` and zero steps never move.
pub fn assert_none_is_identity(nav: &dyn GridNavigator) {
    for origin in origins() {
        assert_eq!(
            nav.navigate(Direction::None, origin, 3),
            Some(origin),
            "Direction::None moved {origin}"
        );
        for d in Direction::COMPASS {
            assert_eq!(
                nav.navigate(d, origin, 0),
                Some(origin),
                "zero steps {d:?} moved {origin}"
            );
        }
    }
}

/// Assert that stepping out and back along opposite directions returns home.
pub fn assert_opposites_round_trip(nav: &dyn GridNavigator) {
    for origin in origins() {
        for d in Direction::COMPASS {
            for steps in 1..=3 {
                let out = nav.navigate(d, origin, steps).expect("in range");
                let back = nav.navigate(d.opposite(), out, steps).expect("in range");
                assert_eq!(
                    back, origin,
                    "{d:?} x{steps} from {origin} went to {out} but came back to {back}"
                );
            }
        }
    }
}

/// Assert that the eight neighbours of a cell are distinct and exclude the cell.
pub fn assert_neighbours_distinct(nav: &dyn GridNavigator) {
    for origin in origins() {
        let mut seen = HashSet::new();
        for d in Direction::COMPASS {
            let n = nav.navigate(d, origin, 1).expect("in range");
            assert_ne!(n, origin, "{d:?} neighbour of {origin} is itself");
            assert!(seen.insert(n), "duplicate neighbour {n} of {origin}");
        }
    }
}

/// Assert that every result lands inside the wrap ranges and that out-and-back
/// trips leave the wrap counters balanced.
pub fn assert_wrap_balanced(nav: &dyn GridNavigator, x: Range, y: Range) {
    for origin in origins().map(|c| MapCoordinate::new(x.wrap(c.x), y.wrap(c.y))) {
        for d in Direction::COMPASS {
            let (out, a) = nav.navigate_with_info(d, origin, 4).expect("in range");
            assert!(x.contains(out.x) && y.contains(out.y), "{out} escaped wrap");
            let (back, b) = nav
                .navigate_with_info(d.opposite(), out, 4)
                .expect("in range");
            assert_eq!(back, origin);
            assert_eq!(a.wrap_x + b.wrap_x, 0, "unbalanced x wraps for {d:?}");
            assert_eq!(a.wrap_y + b.wrap_y, 0, "unbalanced y wraps for {d:?}");
        }
    }
}

/// Run every applicable check on an unbounded navigator.
pub fn run_unbounded_compliance(nav: &dyn GridNavigator) {
    assert_none_is_identity(nav);
    assert_opposites_round_trip(nav);
    assert_neighbours_distinct(nav);
}

/// Run every applicable check on a navigator wrapped on both axes.
pub fn run_wrapped_compliance(nav: &dyn GridNavigator, x: Range, y: Range) {
    assert_wrap_balanced(nav, x, y);
}
