use std::fmt;

use thiserror::Error;

use crate::digit::{DigitPosition, FaceSlot};

/// Recoverable conditions reported by the clock core.
///
/// None of these stop the widget. Each one has a local fallback and is only
/// surfaced through the log (and returned to callers that want to inspect it).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClockError {
    /// The configured IANA zone did not parse; local time is used instead.
    #[error("invalid timezone `{0}`")]
    InvalidTimezone(String),

    /// A digit tile (or one of its faces) is not mounted; the update is skipped.
    #[error("digit {position}: missing {element}")]
    MissingVisualElement {
        position: DigitPosition,
        element: VisualElement,
    },

    /// No visibility facility; the clock ticks unconditionally.
    #[error("visibility observer unavailable: {0}")]
    ObserverUnavailable(String),
}

/// The piece of a tile that could not be resolved.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum VisualElement {
    Tile,
    Face(FaceSlot),
}

impl fmt::Display for VisualElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VisualElement::Tile => f.write_str("tile"),
            VisualElement::Face(slot) => write!(f, "{slot} face"),
        }
    }
}
