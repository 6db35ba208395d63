//! Sparse tile data access for Tessera autotiling.
//!
//! Matchers never see the host's map model directly. They read it through
//! the [`TileDataSet`] trait, which answers "what is at this cell" with
//! denormalized [`SparseTagQueryResult`] rows: one row per tag per entity.
//!
//! [`SparseTileLayer`] is a ready-made in-memory implementation for hosts
//! that do not have their own map storage.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod dataset;
pub mod layer;

pub use dataset::{SparseTagQueryResult, TileDataSet, TileDataSetMetaData};
pub use layer::SparseTileLayer;
