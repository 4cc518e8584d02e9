//! Viewport visibility gating.
//!
//! The gate turns intersection notifications into start/stop directives for
//! the tick loop. When the host has no intersection facility the gate fails
//! open and the clock ticks unconditionally.

use crate::error::ClockError;

/// Minimum intersection ratio for the widget to count as visible.
pub const VISIBILITY_THRESHOLD: f32 = 0.1;

/// One intersection notification for the widget's container.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct IntersectionEntry {
    pub is_intersecting: bool,
    /// Visible fraction of the target, `0.0..=1.0`.
    pub ratio: f32,
}

impl IntersectionEntry {
    pub const fn visible() -> Self {
        Self { is_intersecting: true, ratio: 1.0 }
    }

    pub const fn hidden() -> Self {
        Self { is_intersecting: false, ratio: 0.0 }
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.is_intersecting && self.ratio >= VISIBILITY_THRESHOLD
    }
}

/// Host-provided viewport observer.
pub trait VisibilityObserver {
    /// Begins observing the widget's container. Notifications are delivered
    /// back through [`VisibilityGate::on_intersection`].
    fn observe(&mut self, threshold: f32) -> Result<(), ClockError>;

    /// Stops all observation. Must be safe to call more than once.
    fn disconnect(&mut self);
}

/// What the tick loop should do after a gate transition.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GateDirective {
    Start,
    Stop,
    /// Leave the tick loop as it is.
    Hold,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GateState {
    Detached,
    /// Observing; `visible` reflects the last notification.
    Observing { visible: bool },
    /// No observer available; ticking is unconditional.
    AlwaysOn,
}

pub struct VisibilityGate {
    observer: Option<Box<dyn VisibilityObserver>>,
    state: GateState,
}

impl VisibilityGate {
    pub fn new(observer: Option<Box<dyn VisibilityObserver>>) -> Self {
        Self { observer, state: GateState::Detached }
    }

    #[inline]
    pub fn state(&self) -> GateState {
        self.state
    }

    /// `true` when ticks are allowed to run.
    pub fn is_open(&self) -> bool {
        matches!(self.state, GateState::AlwaysOn | GateState::Observing { visible: true })
    }

    /// Called when the widget enters the document.
    ///
    /// With a working observer the gate waits for the first notification
    /// before allowing ticks. Without one, or if observation fails, ticking
    /// starts immediately.
    pub fn attach(&mut self) -> GateDirective {
        if self.state != GateState::Detached {
            log::debug!("visibility gate already attached");
            return GateDirective::Hold;
        }

        let result = match self.observer.as_mut() {
            Some(observer) => observer.observe(VISIBILITY_THRESHOLD),
            None => Err(ClockError::ObserverUnavailable("no intersection observer".into())),
        };

        match result {
            Ok(()) => {
                self.state = GateState::Observing { visible: false };
                GateDirective::Hold
            }
            Err(err) => {
                log::warn!("{err}; ticking unconditionally");
                self.state = GateState::AlwaysOn;
                GateDirective::Start
            }
        }
    }

    /// Handles a batch of notifications; the last entry wins.
    pub fn on_intersection(&mut self, entries: &[IntersectionEntry]) -> GateDirective {
        let GateState::Observing { visible: was } = self.state else {
            return GateDirective::Hold;
        };
        let Some(last) = entries.last() else {
            return GateDirective::Hold;
        };

        let visible = last.is_visible();
        self.state = GateState::Observing { visible };
        if visible != was {
            log::debug!("widget {}", if visible { "visible" } else { "hidden" });
        }
        // Start and stop are idempotent, so repeats are re-asserted.
        if visible { GateDirective::Start } else { GateDirective::Stop }
    }

    /// Called when the widget leaves the document. Always stops ticking.
    pub fn detach(&mut self) -> GateDirective {
        if let GateState::Observing { .. } = self.state {
            if let Some(observer) = self.observer.as_mut() {
                observer.disconnect();
            }
        }
        self.state = GateState::Detached;
        GateDirective::Stop
    }
}

impl std::fmt::Debug for VisibilityGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VisibilityGate")
            .field("has_observer", &self.observer.is_some())
            .field("state", &self.state)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeObserver;

    #[test]
    fn threshold_boundary() {
        assert!(IntersectionEntry { is_intersecting: true, ratio: 0.1 }.is_visible());
        assert!(!IntersectionEntry { is_intersecting: true, ratio: 0.05 }.is_visible());
        assert!(!IntersectionEntry { is_intersecting: false, ratio: 0.5 }.is_visible());
    }

    #[test]
    fn attach_with_observer_waits_for_notification() {
        let (obs, log) = FakeObserver::new();
        let mut gate = VisibilityGate::new(Some(Box::new(obs)));
        assert_eq!(gate.attach(), GateDirective::Hold);
        assert_eq!(gate.state(), GateState::Observing { visible: false });
        assert!(!gate.is_open());
        assert!(log.borrow().observing);
    }

    #[test]
    fn attach_without_observer_fails_open() {
        let mut gate = VisibilityGate::new(None);
        assert_eq!(gate.attach(), GateDirective::Start);
        assert_eq!(gate.state(), GateState::AlwaysOn);
        assert!(gate.is_open());
    }

    #[test]
    fn failing_observer_fails_open() {
        let (obs, log) = FakeObserver::failing();
        let mut gate = VisibilityGate::new(Some(Box::new(obs)));
        assert_eq!(gate.attach(), GateDirective::Start);
        assert!(gate.is_open());
        assert_eq!(log.borrow().observe_calls, 1);
    }

    #[test]
    fn notifications_toggle_directives() {
        let (obs, _log) = FakeObserver::new();
        let mut gate = VisibilityGate::new(Some(Box::new(obs)));
        gate.attach();
        assert_eq!(gate.on_intersection(&[IntersectionEntry::visible()]), GateDirective::Start);
        assert!(gate.is_open());
        assert_eq!(gate.on_intersection(&[IntersectionEntry::hidden()]), GateDirective::Stop);
        assert!(!gate.is_open());
    }

    #[test]
    fn last_entry_in_batch_wins() {
        let (obs, _log) = FakeObserver::new();
        let mut gate = VisibilityGate::new(Some(Box::new(obs)));
        gate.attach();
        let batch = [IntersectionEntry::visible(), IntersectionEntry::hidden()];
        assert_eq!(gate.on_intersection(&batch), GateDirective::Stop);
        assert_eq!(gate.on_intersection(&[]), GateDirective::Hold);
    }

    #[test]
    fn notifications_ignored_unless_observing() {
        let mut gate = VisibilityGate::new(None);
        assert_eq!(gate.on_intersection(&[IntersectionEntry::visible()]), GateDirective::Hold);
        gate.attach();
        assert_eq!(gate.on_intersection(&[IntersectionEntry::hidden()]), GateDirective::Hold);
        assert!(gate.is_open());
    }

    #[test]
    fn detach_disconnects_and_is_repeatable() {
        let (obs, log) = FakeObserver::new();
        let mut gate = VisibilityGate::new(Some(Box::new(obs)));
        gate.attach();
        assert_eq!(gate.detach(), GateDirective::Stop);
        assert_eq!(gate.detach(), GateDirective::Stop);
        assert_eq!(gate.state(), GateState::Detached);
        assert_eq!(log.borrow().disconnects, 1);
        assert!(!log.borrow().observing);
    }

    #[test]
    fn reattach_observes_again() {
        let (obs, log) = FakeObserver::new();
        let mut gate = VisibilityGate::new(Some(Box::new(obs)));
        gate.attach();
        gate.detach();
        assert_eq!(gate.attach(), GateDirective::Hold);
        assert_eq!(log.borrow().observe_calls, 2);
    }
}
