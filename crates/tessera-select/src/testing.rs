//! Shared setup for matcher unit tests.

use std::sync::Arc;

use tessera_core::SpritePlacement;
use tessera_tags::GraphicTagMetaDataRegistry;
use tessera_test_utils::fixtures::{grid_navigator, tag_registry};
use tessera_test_utils::MockDataSet;

use crate::context::{NeighbourContext, SharedDataSet};

/// Tags `A` (class a), `B` (class b), `AB` (both) and `X` (no class).
pub(crate) fn registry() -> Arc<GraphicTagMetaDataRegistry<u8>> {
    Arc::new(tag_registry(&[
        ("A", &["a"]),
        ("B", &["b"]),
        ("AB", &["a", "b"]),
        ("X", &[]),
    ]))
}

/// Orthogonal context matching self against `a` and neighbours against `b`.
pub(crate) fn context(data: MockDataSet) -> NeighbourContext<u8, u32> {
    let tags = registry();
    let a = tags.classes().get("a").expect("class a");
    let b = tags.classes().get("b").expect("class b");
    let data: SharedDataSet<u32> = Arc::new(data);
    NeighbourContext::new(tags, grid_navigator(), data, a, b)
}

/// Sprite ids in emission order.
pub(crate) fn ids(out: &[SpritePlacement]) -> Vec<&str> {
    out.iter().map(|p| p.sprite.id()).collect()
}
