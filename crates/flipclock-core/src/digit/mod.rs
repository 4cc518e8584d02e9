//! Digit cells.
//!
//! One [`DigitCell`] per displayed character. A cell owns the flip timeline
//! for its position and paints each transition onto the four faces of its
//! tile through the [`FlipSurface`] contract.
//!
//! The illusion relies on paint order: the static faces are set to their
//! final content first, then two animated decoy faces carrying the old/new
//! split fold away on top of them, so when the decoys finish only the static
//! layer remains visible.

mod cell;
mod faces;
mod keyframes;
mod position;

pub use cell::{CellState, DigitCell, FlipPhase, UpdateOutcome};
pub use faces::{FaceSlot, FlipClass, FlipSurface, FlipTile};
pub use keyframes::{FlipFrame, Keyframes, ROTATE_BOTTOM, ROTATE_TOP};
pub use position::DigitPosition;
