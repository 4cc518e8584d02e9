use std::fmt;

use crate::config::CardSettings;

use super::DigitPosition;

/// The four addressable faces of a flip tile.
///
/// Static faces sit underneath and are never animated; animated faces are the
/// decoys that rotate on top of them.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum FaceSlot {
    UpperStatic,
    LowerStatic,
    UpperAnimated,
    LowerAnimated,
}

impl FaceSlot {
    pub const ALL: [FaceSlot; 4] = [
        FaceSlot::UpperStatic,
        FaceSlot::LowerStatic,
        FaceSlot::UpperAnimated,
        FaceSlot::LowerAnimated,
    ];

    #[inline]
    pub fn is_animated(self) -> bool {
        matches!(self, FaceSlot::UpperAnimated | FaceSlot::LowerAnimated)
    }

    #[inline]
    pub fn is_upper(self) -> bool {
        matches!(self, FaceSlot::UpperStatic | FaceSlot::UpperAnimated)
    }

    pub fn name(self) -> &'static str {
        match self {
            FaceSlot::UpperStatic => "upper-static",
            FaceSlot::LowerStatic => "lower-static",
            FaceSlot::UpperAnimated => "upper-animated",
            FaceSlot::LowerAnimated => "lower-animated",
        }
    }
}

impl fmt::Display for FaceSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Named animation triggers applied to the animated faces.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum FlipClass {
    /// Upper decoy folds from flat to -90°.
    FlipDownTop,
    /// Lower decoy drops from 90° to flat, delayed by one phase.
    FlipDownBottom,
}

impl FlipClass {
    pub fn name(self) -> &'static str {
        match self {
            FlipClass::FlipDownTop => "flip-down-top",
            FlipClass::FlipDownBottom => "flip-down-bottom",
        }
    }
}

/// Rendering-side handle for one digit tile.
///
/// Implementors own the actual visuals. Removing a class, forcing layout and
/// re-adding the class must restart that face's animation from its first
/// keyframe.
pub trait FlipTile {
    /// Returns `false` if the face is not constructed (or already destroyed).
    fn has_face(&self, slot: FaceSlot) -> bool;

    fn set_text(&mut self, slot: FaceSlot, glyph: char);

    fn add_class(&mut self, slot: FaceSlot, class: FlipClass);

    fn remove_class(&mut self, slot: FaceSlot, class: FlipClass);

    /// Commits pending visual state so the next class addition starts a
    /// fresh animation.
    fn force_layout(&mut self);
}

/// Rendering-side container for all tiles of one widget.
pub trait FlipSurface {
    /// Builds tiles for every active position of `settings`, replacing any
    /// previously mounted tiles.
    fn mount(&mut self, settings: &CardSettings);

    /// Destroys all tiles.
    fn unmount(&mut self);

    /// Resolves the tile for `position`, if mounted.
    fn tile_mut(&mut self, position: DigitPosition) -> Option<&mut dyn FlipTile>;
}
