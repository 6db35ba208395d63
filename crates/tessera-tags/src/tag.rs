//! Interned graphic tag identifiers.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// Opaque identifier of a tile or terrain kind.
///
/// Distinct from the rendered sprite tag (`tessera_core::SpriteTag`):
/// a graphic tag names *what* a cell holds ("grass", "river"), a sprite
/// tag names *which picture* is drawn for it. The string is trimmed on
/// construction and shared, so clones are cheap and equality is value
/// equality on the normalized text.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GraphicTag(Arc<str>);

impl GraphicTag {
    /// Create a tag from text, trimming surrounding whitespace.
    pub fn new(id: &str) -> Self {
        Self(Arc::from(id.trim()))
    }

    /// The normalized text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the normalized text is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for GraphicTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GraphicTag({:?})", &*self.0)
    }
}

impl fmt::Display for GraphicTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GraphicTag {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for GraphicTag {
    fn from(s: String) -> Self {
        Self::new(&s)
    }
}

impl Borrow<str> for GraphicTag {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for GraphicTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn trimmed_text_is_equal() {
        assert_eq!(GraphicTag::new("  grass "), GraphicTag::from("grass"));
        assert_ne!(GraphicTag::new("Grass"), GraphicTag::new("grass"));
    }

    #[test]
    fn lookup_by_str() {
        let mut map = HashMap::new();
        map.insert(GraphicTag::new("river"), 3);
        assert_eq!(map.get("river"), Some(&3));
    }
}
