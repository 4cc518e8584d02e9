//! Widget lifecycle context.
//!
//! [`FlipClock`] owns one surface, one wall clock, the tick loop and the
//! visibility gate. Hosts forward their lifecycle events (attach, detach,
//! intersection, reconfigure) and drive time through [`FlipClock::poll`].

use std::time::{Duration, Instant};

use crate::config::CardSettings;
use crate::digit::FlipSurface;
use crate::tick::{TickOrchestrator, TickReport};
use crate::time::{resolve_zone, WallClock};
use crate::visibility::{
    GateDirective, GateState, IntersectionEntry, VisibilityGate, VisibilityObserver,
};

/// Repaint cadence while any tile is flipping.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

pub struct FlipClock<S: FlipSurface, C: WallClock> {
    surface: S,
    clock: C,
    settings: CardSettings,
    orchestrator: TickOrchestrator,
    gate: VisibilityGate,
}

impl<S: FlipSurface, C: WallClock> FlipClock<S, C> {
    /// Builds the widget and mounts its tiles. Nothing ticks until
    /// [`attach`](Self::attach).
    pub fn new(
        mut surface: S,
        clock: C,
        observer: Option<Box<dyn VisibilityObserver>>,
        settings: CardSettings,
    ) -> Self {
        warn_on_bad_zone(&settings);
        surface.mount(&settings);
        Self {
            orchestrator: TickOrchestrator::new(settings.clock.clone()),
            surface,
            clock,
            settings,
            gate: VisibilityGate::new(observer),
        }
    }

    // ── lifecycle ─────────────────────────────────────────────────────────

    /// The widget entered the document.
    pub fn attach(&mut self, now: Instant) -> Option<TickReport> {
        let directive = self.gate.attach();
        log::debug!("attached ({:?})", self.gate.state());
        self.apply(directive, now)
    }

    /// The widget left the document. Safe to call repeatedly.
    pub fn detach(&mut self) {
        self.gate.detach();
        self.orchestrator.stop();
        log::debug!("detached");
    }

    /// Intersection notifications for the widget's container.
    pub fn on_intersection(
        &mut self,
        entries: &[IntersectionEntry],
        now: Instant,
    ) -> Option<TickReport> {
        let directive = self.gate.on_intersection(entries);
        self.apply(directive, now)
    }

    /// Replaces the settings and rebuilds the tiles.
    ///
    /// The tick loop is stopped, the surface remounted and a fresh set of
    /// cells created. Ticking resumes immediately if the gate is open; an
    /// observing gate keeps observing.
    pub fn configure(&mut self, settings: CardSettings, now: Instant) -> Option<TickReport> {
        warn_on_bad_zone(&settings);
        self.orchestrator.stop();
        self.surface.unmount();
        self.surface.mount(&settings);
        self.orchestrator = TickOrchestrator::new(settings.clock.clone());
        self.settings = settings;
        log::debug!("reconfigured: theme {}", self.settings.theme);

        if self.gate.is_open() {
            self.apply(GateDirective::Start, now)
        } else {
            None
        }
    }

    // ── time ──────────────────────────────────────────────────────────────

    /// Settles due flip phases and fires the tick if one is due.
    pub fn poll(&mut self, now: Instant) -> Option<TickReport> {
        self.orchestrator.advance(now);
        let report = self.orchestrator.poll(now, &self.clock, &mut self.surface)?;
        log::debug!(
            "tick {}: {}:{}:{}",
            self.orchestrator.ticks(),
            report.digits.hour,
            report.digits.minute,
            report.digits.second
        );
        Some(report)
    }

    /// Applies due phase transitions without ticking. Returns `true` while
    /// any tile is still flipping.
    pub fn advance_animations(&mut self, now: Instant) -> bool {
        self.orchestrator.advance(now)
    }

    /// When the host should call [`poll`](Self::poll) next.
    ///
    /// One frame away while a flip is running, otherwise the next tick.
    /// `None` when stopped with nothing animating.
    pub fn next_wakeup(&self, now: Instant) -> Option<Instant> {
        let frame = self
            .orchestrator
            .animation_deadline()
            .map(|end| end.min(now + FRAME_INTERVAL));
        match (frame, self.orchestrator.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn settings(&self) -> &CardSettings {
        &self.settings
    }

    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[inline]
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[inline]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    #[inline]
    pub fn orchestrator(&self) -> &TickOrchestrator {
        &self.orchestrator
    }

    #[inline]
    pub fn gate_state(&self) -> GateState {
        self.gate.state()
    }

    #[inline]
    pub fn is_ticking(&self) -> bool {
        self.orchestrator.is_running()
    }

    fn apply(&mut self, directive: GateDirective, now: Instant) -> Option<TickReport> {
        match directive {
            GateDirective::Start => self.orchestrator.start(now, &self.clock, &mut self.surface),
            GateDirective::Stop => {
                self.orchestrator.stop();
                None
            }
            GateDirective::Hold => None,
        }
    }
}

impl<S: FlipSurface, C: WallClock> Drop for FlipClock<S, C> {
    fn drop(&mut self) {
        if self.gate.state() != GateState::Detached {
            self.gate.detach();
        }
    }
}

fn warn_on_bad_zone(settings: &CardSettings) {
    if let Some(name) = settings.clock.timezone.as_deref() {
        if let Err(err) = resolve_zone(name) {
            log::warn!("{err}; local time will be shown");
        }
    }
}
