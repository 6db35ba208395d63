//! Fixed prefix/suffix matcher.

use tessera_core::{SpritePlacement, SpritePosition, SpriteTag};

use crate::request::TileMatchRequest;

/// Emits `prefix + tag + suffix` for every tile, unconditionally.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BasicMatcher {
    prefix: String,
    suffix: String,
}

impl BasicMatcher {
    /// Create a matcher.
    pub fn new(prefix: &str, suffix: &str) -> Self {
        Self {
            prefix: prefix.to_owned(),
            suffix: suffix.to_owned(),
        }
    }

    /// Append the sprite. Always returns `true`.
    pub fn match_tile(&self, request: &TileMatchRequest, out: &mut Vec<SpritePlacement>) -> bool {
        out.push(SpritePlacement::new(
            SpriteTag::new(&self.prefix, request.tag.as_str(), &self.suffix),
            SpritePosition::Whole,
            request.position,
        ));
        true
    }
}
