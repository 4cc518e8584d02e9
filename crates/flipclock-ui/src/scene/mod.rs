//! Renderer-agnostic draw stream.
//!
//! The painter records commands here; a host renderer replays them in
//! paint order (z-index, then insertion order).

mod cmd;
mod key;
mod list;

pub use cmd::{Border, DrawCmd, GlyphCmd, LineCmd, PanelCmd, TextCmd};
pub use key::{SortKey, ZIndex};
pub use list::{DrawItem, DrawList};
