//! Draw payloads: where a fortune appears and what it says.

use serde::{Deserialize, Serialize};

use crate::tin::{FishId, TinId};

/// Horizontal distance from a fish's left edge to its mouth.
pub const MOUTH_OFFSET: f32 = 30.0;

/// Screen position a fortune bubble is attached to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    /// Horizontal position.
    pub x: f32,
    /// Vertical position.
    pub y: f32,
}

impl Anchor {
    /// Anchor at an explicit position.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Anchor at the mouth of a fish drawn in the given bounding box.
    ///
    /// The head faces left, so the mouth sits a fixed offset in from the
    /// left edge, centred vertically on the body.
    pub fn at_mouth(left: f32, top: f32, height: f32) -> Self {
        Self {
            x: left + MOUTH_OFFSET,
            y: top + height / 2.0,
        }
    }
}

/// A draw that has started but not yet resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingDraw {
    /// Tin the fish belongs to.
    pub tin: TinId,
    /// Fish being consulted.
    pub fish: FishId,
    /// Where the result will be shown.
    pub anchor: Anchor,
}

/// The fortune currently on display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveFortune {
    /// Fortune text.
    pub text: String,
    /// Index into the fortune list.
    pub index: usize,
    /// Fish that spoke it.
    pub fish: FishId,
    /// Where the bubble is attached.
    pub anchor: Anchor,
}
