use crate::geometry::Rect;

use super::{DrawCmd, SortKey, ZIndex};

#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
    /// Clip in effect when the item was recorded.
    pub clip_rect: Option<Rect>,
}

/// Everything painted for one frame, in recording order.
///
/// Halves clip their contents with [`push_clip`](Self::push_clip) and
/// [`pop_clip`](Self::pop_clip). A nested clip is the intersection with the
/// enclosing one.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    clips: Vec<Rect>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.clips.clear();
    }

    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of open clip regions.
    pub fn clip_depth(&self) -> usize {
        self.clips.len()
    }

    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let key = SortKey { z, order: self.items.len() as u32 };
        let clip_rect = self.clips.last().copied();
        self.items.push(DrawItem { key, cmd, clip_rect });
    }

    pub fn push_clip(&mut self, rect: Rect) {
        let clip = match self.clips.last() {
            Some(outer) => outer.intersect(rect).unwrap_or_default(),
            None => rect,
        };
        self.clips.push(clip);
    }

    pub fn pop_clip(&mut self) {
        if self.clips.pop().is_none() {
            log::warn!("pop_clip with no open clip");
        }
    }

    /// Items back to front: by layer, ties in recording order.
    pub fn iter_in_paint_order(&self) -> impl Iterator<Item = &DrawItem> {
        let mut sorted: Vec<&DrawItem> = self.items.iter().collect();
        sorted.sort_unstable_by_key(|item| item.key);
        sorted.into_iter()
    }

    /// Items on one layer, in recording order.
    pub fn layer(&self, z: ZIndex) -> impl Iterator<Item = &DrawItem> {
        self.items.iter().filter(move |item| item.key.z == z)
    }
}
