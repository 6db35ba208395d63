//! Classification and tag metadata for Tessera autotiling.
//!
//! A *classification* is a named boolean property a tile can hold
//! ("water", "road", "cliff"). Each registered class owns one bit of a
//! fixed-width [`EntityClassification`] bitset, so testing "does this
//! tile belong to any of these classes" is a single AND.
//!
//! [`GraphicTagMetaDataRegistry`] associates opaque [`GraphicTag`]s with
//! the union of their classes plus free-form flags and properties. Both
//! registries are filled once during setup and read-only afterwards.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod classification;
pub mod error;
pub mod metadata;
pub mod tag;

pub use classification::{
    ClassificationBits, EntityClassification, EntityClassification16, EntityClassification32,
    EntityClassification64, EntityClassification8, EntityClassificationRegistry,
};
pub use error::ClassificationError;
pub use metadata::{GraphicTagMetaDataRegistry, TagEntry, TagMetaData};
pub use tag::GraphicTag;
