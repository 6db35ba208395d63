//! Grid navigation for Tessera autotiling.
//!
//! This crate defines the [`GridNavigator`] trait, which every matcher uses
//! to find neighbour coordinates, along with the base topologies and the
//! decorators that bound, wrap or rotate them.
//!
//! # Topologies
//!
//! - [`OrthogonalNavigator`]: plain square grid
//! - [`IsoDiamondNavigator`]: isometric diamond over a rectangular store
//! - [`IsoStaggeredNavigator`]: isometric staggered rows (odd rows shifted)
//!
//! # Decorators
//!
//! - [`LimitNavigator`]: clamp one or both axes into a [`Range`](tessera_core::Range)
//! - [`WrapNavigator`]: toroidal wrap of one or both axes
//! - [`RotationNavigator`]: fixed quarter-turn rotation of the compass
//!
//! Navigators are normally built from a [`NavigatorMetaData`] descriptor
//! and shared through a [`NavigatorCache`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod build;
pub mod cache;
pub mod decorator;
pub mod error;
pub mod iso;
pub mod meta;
pub mod navigator;
pub mod orthogonal;

#[cfg(test)]
pub(crate) mod compliance;

pub use cache::NavigatorCache;
pub use decorator::{LimitNavigator, RotationNavigator, WrapNavigator};
pub use error::NavigatorError;
pub use iso::{IsoDiamondNavigator, IsoStaggeredNavigator};
pub use meta::{BorderPolicy, GridType, NavigationInfo, NavigatorMetaData};
pub use navigator::GridNavigator;
pub use orthogonal::OrthogonalNavigator;
