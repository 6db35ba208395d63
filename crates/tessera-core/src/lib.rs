//! Core types for the Tessera autotiling engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the value types shared by every other layer: integer and continuous
//! map coordinates, half-open axis ranges, compass directions, and the
//! sprite identifiers and placements the matchers emit.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coord;
pub mod direction;
pub mod range;
pub mod sprite;

pub use coord::{ContinuousMapCoordinate, MapArea, MapCoordinate};
pub use direction::Direction;
pub use range::{Range, RangeError};
pub use sprite::{SpritePlacement, SpritePosition, SpriteTag};
