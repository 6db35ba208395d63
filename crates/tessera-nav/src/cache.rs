//! Build-once navigator cache keyed by [`NavigatorMetaData`].
//!
//! Navigators are cheap to use but comparatively expensive to assemble,
//! so hosts keep one per distinct descriptor. Descriptors compare
//! structurally: two equal descriptors always share the same navigator.

use crate::error::NavigatorError;
use crate::meta::NavigatorMetaData;
use crate::navigator::GridNavigator;
use std::collections::HashMap;
use std::sync::Arc;

/// Cache of built navigators keyed by their descriptor.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use tessera_nav::{GridType, NavigatorCache, NavigatorMetaData};
///
/// let mut cache = NavigatorCache::new();
/// let meta = NavigatorMetaData::new(GridType::IsoStaggered);
/// let a = cache.get_or_build(&meta).unwrap();
/// let b = cache.get_or_build(&meta).unwrap();
/// assert!(Arc::ptr_eq(&a, &b));
/// assert_eq!(cache.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct NavigatorCache {
    entries: HashMap<NavigatorMetaData, Arc<dyn GridNavigator>>,
}

impl NavigatorCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached navigator for `meta`, building it on first use.
    ///
    /// Build failures are not cached.
    pub fn get_or_build(
        &mut self,
        meta: &NavigatorMetaData,
    ) -> Result<Arc<dyn GridNavigator>, NavigatorError> {
        if let Some(nav) = self.entries.get(meta) {
            return Ok(Arc::clone(nav));
        }
        let nav: Arc<dyn GridNavigator> = Arc::from(meta.build()?);
        self.entries.insert(*meta, Arc::clone(&nav));
        Ok(nav)
    }

    /// Number of cached navigators.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every cached navigator.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
