//! Test doubles for the rendering and visibility contracts.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::config::CardSettings;
use crate::digit::{DigitPosition, FaceSlot, FlipClass, FlipSurface, FlipTile};
use crate::error::ClockError;
use crate::visibility::VisibilityObserver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileOp {
    SetText(FaceSlot, char),
    AddClass(FaceSlot, FlipClass),
    RemoveClass(FaceSlot, FlipClass),
    ForceLayout,
}

#[derive(Debug, Default)]
pub struct RecordedTile {
    pub ops: Vec<TileOp>,
    pub missing: Vec<FaceSlot>,
    pub layouts: usize,
    texts: BTreeMap<&'static str, char>,
}

impl RecordedTile {
    pub fn text(&self, slot: FaceSlot) -> char {
        self.texts.get(slot.name()).copied().unwrap_or('0')
    }
}

impl FlipTile for RecordedTile {
    fn has_face(&self, slot: FaceSlot) -> bool {
        !self.missing.contains(&slot)
    }

    fn set_text(&mut self, slot: FaceSlot, glyph: char) {
        self.texts.insert(slot.name(), glyph);
        self.ops.push(TileOp::SetText(slot, glyph));
    }

    fn add_class(&mut self, slot: FaceSlot, class: FlipClass) {
        self.ops.push(TileOp::AddClass(slot, class));
    }

    fn remove_class(&mut self, slot: FaceSlot, class: FlipClass) {
        self.ops.push(TileOp::RemoveClass(slot, class));
    }

    fn force_layout(&mut self) {
        self.layouts += 1;
        self.ops.push(TileOp::ForceLayout);
    }
}

/// Surface that records every operation per tile.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub tiles: BTreeMap<DigitPosition, RecordedTile>,
    pub mounts: usize,
}

impl RecordingSurface {
    pub fn with_positions(positions: &[DigitPosition]) -> Self {
        Self {
            tiles: positions.iter().map(|&p| (p, RecordedTile::default())).collect(),
            mounts: 0,
        }
    }

    pub fn tile(&self, position: DigitPosition) -> &RecordedTile {
        &self.tiles[&position]
    }

    pub fn tile_mut_rec(&mut self, position: DigitPosition) -> &mut RecordedTile {
        self.tiles.get_mut(&position).expect("tile mounted")
    }

    /// Upper static glyphs of all mounted tiles in position order.
    pub fn shown(&self) -> String {
        self.tiles.values().map(|t| t.text(FaceSlot::UpperStatic)).collect()
    }
}

impl FlipSurface for RecordingSurface {
    fn mount(&mut self, settings: &CardSettings) {
        self.mounts += 1;
        self.tiles = settings
            .clock
            .positions()
            .iter()
            .map(|&p| (p, RecordedTile::default()))
            .collect();
    }

    fn unmount(&mut self) {
        self.tiles.clear();
    }

    fn tile_mut(&mut self, position: DigitPosition) -> Option<&mut dyn FlipTile> {
        self.tiles.get_mut(&position).map(|t| t as &mut dyn FlipTile)
    }
}

#[derive(Debug, Default)]
pub struct ObserverLog {
    pub observing: bool,
    pub observe_calls: usize,
    pub disconnects: usize,
}

/// Observer whose calls are visible to the test through a shared log.
pub struct FakeObserver {
    pub log: Rc<RefCell<ObserverLog>>,
    pub fail: bool,
}

impl FakeObserver {
    pub fn new() -> (Self, Rc<RefCell<ObserverLog>>) {
        let log = Rc::new(RefCell::new(ObserverLog::default()));
        (Self { log: log.clone(), fail: false }, log)
    }

    pub fn failing() -> (Self, Rc<RefCell<ObserverLog>>) {
        let (mut obs, log) = Self::new();
        obs.fail = true;
        (obs, log)
    }
}

impl VisibilityObserver for FakeObserver {
    fn observe(&mut self, _threshold: f32) -> Result<(), ClockError> {
        let mut log = self.log.borrow_mut();
        log.observe_calls += 1;
        if self.fail {
            return Err(ClockError::ObserverUnavailable("observer refused target".into()));
        }
        log.observing = true;
        Ok(())
    }

    fn disconnect(&mut self) {
        let mut log = self.log.borrow_mut();
        log.observing = false;
        log.disconnects += 1;
    }
}
