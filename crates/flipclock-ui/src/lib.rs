//! Flip clock UI: the rendering side of `flipclock-core`.
//!
//! [`FlipBoard`](board::FlipBoard) implements the core's `FlipSurface`
//! contract with retained four-face tiles. [`FlipPainter`](painter::FlipPainter)
//! turns a board plus the current animation frames into a renderer-agnostic
//! [`DrawList`](scene::DrawList).
//!
//! ```rust,ignore
//! use flipclock_ui::prelude::*;
//!
//! let mut clock = FlipClock::new(FlipBoard::new(), SystemClock, None, settings);
//! clock.attach(Instant::now());
//!
//! // each frame:
//! clock.poll(now);
//! let mut list = DrawList::new();
//! FlipPainter::new(&mut list, clock.surface()).paint(clock.orchestrator(), now);
//! for item in list.iter_in_paint_order() { /* replay */ }
//! ```

pub mod board;
pub mod color;
pub mod geometry;
pub mod layout;
pub mod painter;
pub mod scene;
pub mod theme;
pub mod tile;

/// Common imports for hosts.
pub mod prelude {
    pub use crate::board::FlipBoard;
    pub use crate::color::Color;
    pub use crate::geometry::{Rect, Vec2};
    pub use crate::layout::ClockLayout;
    pub use crate::painter::FlipPainter;
    pub use crate::scene::{DrawCmd, DrawList, ZIndex};
    pub use crate::theme::ResolvedStyle;
    pub use crate::tile::Tile;
    pub use flipclock_core::time::SystemClock;
    pub use flipclock_core::{CardSettings, FlipClock};
}
