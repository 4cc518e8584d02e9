use std::time::{Duration, Instant};

use crate::error::{ClockError, VisualElement};

use super::{DigitPosition, FaceSlot, FlipClass, FlipFrame, FlipSurface, FlipTile};

/// Which half of the flip is currently moving.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FlipPhase {
    /// Upper decoy folding away, revealing `next` on the upper static face.
    Top,
    /// Lower decoy dropping into place with `next`.
    Bottom,
}

/// Flip state of one digit cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CellState {
    /// Not animating. `None` until the first value arrives.
    Idle(Option<char>),
    Flipping {
        previous: char,
        next: char,
        phase: FlipPhase,
        started: Instant,
    },
}

/// What [`DigitCell::update`] did with a new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Same value as currently shown; nothing touched.
    Unchanged,
    /// A flip started from idle.
    Started,
    /// An in-flight flip was cancelled and re-armed with the new value.
    Restarted,
    /// The tile could not be resolved; state left as it was.
    Skipped(ClockError),
}

impl UpdateOutcome {
    /// `true` if a flip animation was (re)armed.
    #[inline]
    pub fn flipped(&self) -> bool {
        matches!(self, UpdateOutcome::Started | UpdateOutcome::Restarted)
    }
}

/// State machine for a single displayed character.
///
/// `Idle(v)` → `update(n)` with `n != v` → `Flipping { Top }` → after one
/// half-speed → `Flipping { Bottom }` → after another → `Idle(n)`.
///
/// Phase changes are applied lazily by [`advance`](Self::advance), which every
/// other operation calls first, so the cell can be driven by any clock.
#[derive(Debug, Clone)]
pub struct DigitCell {
    position: DigitPosition,
    half_speed: Duration,
    state: CellState,
    flips_started: u64,
}

impl DigitCell {
    pub fn new(position: DigitPosition, half_speed: Duration) -> Self {
        Self {
            position,
            half_speed,
            state: CellState::Idle(None),
            flips_started: 0,
        }
    }

    #[inline]
    pub fn position(&self) -> DigitPosition {
        self.position
    }

    #[inline]
    pub fn state(&self) -> CellState {
        self.state
    }

    /// Duration of each of the two flip phases.
    #[inline]
    pub fn half_speed(&self) -> Duration {
        self.half_speed
    }

    /// The value this cell shows or is flipping towards.
    pub fn value(&self) -> Option<char> {
        match self.state {
            CellState::Idle(v) => v,
            CellState::Flipping { next, .. } => Some(next),
        }
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        matches!(self.state, CellState::Flipping { .. })
    }

    /// Number of flips armed since construction (restarts included).
    #[inline]
    pub fn flips_started(&self) -> u64 {
        self.flips_started
    }

    /// When the current flip will finish, if one is running.
    pub fn flip_deadline(&self) -> Option<Instant> {
        match self.state {
            CellState::Flipping { started, .. } => Some(started + self.half_speed * 2),
            CellState::Idle(_) => None,
        }
    }

    /// Applies any phase transitions due by `now` and returns the new state.
    pub fn advance(&mut self, now: Instant) -> CellState {
        if let CellState::Flipping { previous, next, phase, started } = self.state {
            let elapsed = now.saturating_duration_since(started);
            if elapsed >= self.half_speed * 2 {
                self.state = CellState::Idle(Some(next));
                log::trace!("{}: settled on {next}", self.position);
            } else if elapsed >= self.half_speed && phase == FlipPhase::Top {
                self.state = CellState::Flipping {
                    previous,
                    next,
                    phase: FlipPhase::Bottom,
                    started,
                };
            }
        }
        self.state
    }

    /// Rotation of the tile's animated faces at `now`.
    pub fn frame_at(&self, now: Instant) -> FlipFrame {
        match self.state {
            CellState::Flipping { started, .. } => {
                FlipFrame::at(now.saturating_duration_since(started), self.half_speed)
            }
            CellState::Idle(_) if self.flips_started > 0 => FlipFrame::SETTLED,
            CellState::Idle(_) => FlipFrame::REST,
        }
    }

    /// Feeds a new value into the cell.
    ///
    /// Equal values are ignored. A different value arms a two-phase flip from
    /// the current value; if a flip is already running it is cancelled and
    /// re-armed from a clean baseline with `previous` set to the value the
    /// cell was flipping towards.
    ///
    /// If the tile or any of its faces cannot be resolved the update is
    /// skipped and logged; the cell keeps its old value so the next tick
    /// retries.
    pub fn update(
        &mut self,
        value: char,
        now: Instant,
        surface: &mut dyn FlipSurface,
    ) -> UpdateOutcome {
        self.advance(now);
        let current = self.value();
        if current == Some(value) {
            return UpdateOutcome::Unchanged;
        }

        let Some(tile) = surface.tile_mut(self.position) else {
            return self.skip(VisualElement::Tile);
        };
        if let Some(slot) = FaceSlot::ALL.into_iter().find(|&slot| !tile.has_face(slot)) {
            return self.skip(VisualElement::Face(slot));
        }

        // An uninitialized cell flips in from its own value.
        let previous = current.unwrap_or(value);
        let interrupted = self.is_animating();
        arm(tile, previous, value);

        self.state = CellState::Flipping {
            previous,
            next: value,
            phase: FlipPhase::Top,
            started: now,
        };
        self.flips_started += 1;

        if interrupted {
            log::trace!("{}: restarted flip {previous} -> {value}", self.position);
            UpdateOutcome::Restarted
        } else {
            log::trace!("{}: flip {previous} -> {value}", self.position);
            UpdateOutcome::Started
        }
    }

    fn skip(&self, element: VisualElement) -> UpdateOutcome {
        let err = ClockError::MissingVisualElement { position: self.position, element };
        log::warn!("{err}; update skipped");
        UpdateOutcome::Skipped(err)
    }
}

/// Paints destination content on the static faces, loads the decoys with the
/// old/new split, and restarts both decoy animations.
fn arm(tile: &mut dyn FlipTile, previous: char, next: char) {
    tile.set_text(FaceSlot::UpperStatic, next);
    tile.set_text(FaceSlot::LowerStatic, previous);
    tile.set_text(FaceSlot::UpperAnimated, previous);
    tile.set_text(FaceSlot::LowerAnimated, next);

    tile.remove_class(FaceSlot::UpperAnimated, FlipClass::FlipDownTop);
    tile.remove_class(FaceSlot::LowerAnimated, FlipClass::FlipDownBottom);
    tile.force_layout();
    tile.add_class(FaceSlot::UpperAnimated, FlipClass::FlipDownTop);
    tile.add_class(FaceSlot::LowerAnimated, FlipClass::FlipDownBottom);
}
