//! Once-per-second tick loop.
//!
//! [`TickOrchestrator`] does not own a timer. The host loop asks it for
//! [`next_deadline`](TickOrchestrator::next_deadline), sleeps, and calls
//! [`poll`](TickOrchestrator::poll); the orchestrator decides whether a tick
//! is due. This keeps the schedule deterministic under a simulated clock.

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};

use crate::config::ClockConfig;
use crate::digit::{DigitCell, DigitPosition, FlipSurface, UpdateOutcome};
use crate::time::{sample, ClockDigits, WallClock};

/// Cadence of the clock.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Schedule {
    Stopped,
    Running { next_due: Instant },
}

/// Result of one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickReport {
    pub digits: ClockDigits,
    /// One entry per active position, in update order.
    pub outcomes: Vec<(DigitPosition, UpdateOutcome)>,
}

impl TickReport {
    /// Positions whose flip was armed by this tick.
    pub fn flipped(&self) -> impl Iterator<Item = DigitPosition> + '_ {
        self.outcomes
            .iter()
            .filter(|(_, o)| o.flipped())
            .map(|(p, _)| *p)
    }
}

/// Samples the time source on a fixed cadence and feeds each active digit
/// cell, in the fixed order `h1, h2, m1, m2, [s1, s2]`.
///
/// Start and stop are idempotent. Once stopped, no tick fires until the next
/// start, which ticks immediately.
#[derive(Debug)]
pub struct TickOrchestrator {
    config: ClockConfig,
    cells: Vec<DigitCell>,
    schedule: Schedule,
    ticks: u64,
}

impl TickOrchestrator {
    /// Creates fresh cells for every position active under `config`.
    pub fn new(config: ClockConfig) -> Self {
        let half = config.half_speed();
        let cells = config
            .positions()
            .iter()
            .map(|&p| DigitCell::new(p, half))
            .collect();
        Self { config, cells, schedule: Schedule::Stopped, ticks: 0 }
    }

    #[inline]
    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    #[inline]
    pub fn cells(&self) -> &[DigitCell] {
        &self.cells
    }

    pub fn cell(&self, position: DigitPosition) -> Option<&DigitCell> {
        self.cells.iter().find(|c| c.position() == position)
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        matches!(self.schedule, Schedule::Running { .. })
    }

    /// Total ticks executed since construction.
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// When the next tick is due, if running.
    pub fn next_deadline(&self) -> Option<Instant> {
        match self.schedule {
            Schedule::Running { next_due } => Some(next_due),
            Schedule::Stopped => None,
        }
    }

    /// Starts ticking: runs one tick immediately and schedules the next one
    /// second later. Returns `None` if already running.
    pub fn start(
        &mut self,
        now: Instant,
        clock: &dyn WallClock,
        surface: &mut dyn FlipSurface,
    ) -> Option<TickReport> {
        if self.is_running() {
            log::debug!("tick loop already running; start ignored");
            return None;
        }
        self.schedule = Schedule::Running { next_due: now + TICK_INTERVAL };
        log::debug!("tick loop started");
        Some(self.tick(now, clock.now(), surface))
    }

    /// Stops ticking. Returns `false` if it was not running.
    pub fn stop(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.schedule = Schedule::Stopped;
        log::debug!("tick loop stopped");
        true
    }

    /// Runs a tick if one is due at `now`.
    ///
    /// At most one tick fires per call. If the host woke up late and several
    /// deadlines passed, the missed ones are skipped and the schedule resumes
    /// on the one-second grid set by `start`.
    pub fn poll(
        &mut self,
        now: Instant,
        clock: &dyn WallClock,
        surface: &mut dyn FlipSurface,
    ) -> Option<TickReport> {
        let Schedule::Running { next_due } = self.schedule else {
            return None;
        };
        if now < next_due {
            return None;
        }

        let mut due = next_due + TICK_INTERVAL;
        let mut missed = 0u32;
        while due <= now {
            due += TICK_INTERVAL;
            missed += 1;
        }
        if missed > 0 {
            log::debug!("skipped {missed} late tick(s)");
        }
        self.schedule = Schedule::Running { next_due: due };

        Some(self.tick(now, clock.now(), surface))
    }

    /// One evaluation: sample the time at `instant` and feed every active cell.
    pub fn tick(
        &mut self,
        now: Instant,
        instant: DateTime<Utc>,
        surface: &mut dyn FlipSurface,
    ) -> TickReport {
        let digits = sample(&self.config, instant);
        let outcomes = self
            .cells
            .iter_mut()
            .map(|cell| {
                let value = cell.position().pick(&digits);
                (cell.position(), cell.update(value, now, surface))
            })
            .collect();
        self.ticks += 1;
        TickReport { digits, outcomes }
    }

    /// Applies due phase transitions to every cell. Returns `true` while any
    /// cell is still flipping.
    pub fn advance(&mut self, now: Instant) -> bool {
        let mut animating = false;
        for cell in &mut self.cells {
            cell.advance(now);
            animating |= cell.is_animating();
        }
        animating
    }

    /// Earliest instant at which any running flip completes.
    pub fn animation_deadline(&self) -> Option<Instant> {
        self.cells.iter().filter_map(DigitCell::flip_deadline).min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TimeFormat;
    use crate::testing::RecordingSurface;
    use crate::time::ManualClock;
    use chrono::TimeZone;

    fn utc(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, h, m, s).unwrap()
    }

    fn utc_config(format: TimeFormat, show_seconds: bool) -> ClockConfig {
        ClockConfig {
            time_format: format,
            show_seconds,
            timezone: Some("UTC".into()),
            ..ClockConfig::default()
        }
    }

    fn setup(config: ClockConfig) -> (TickOrchestrator, RecordingSurface) {
        let surface = RecordingSurface::with_positions(config.positions());
        (TickOrchestrator::new(config), surface)
    }

    #[test]
    fn end_to_end_24h_without_seconds() {
        let (mut orch, mut surface) = setup(utc_config(TimeFormat::H24, false));
        let clock = ManualClock::new(utc(14, 5, 9));

        let report = orch.start(Instant::now(), &clock, &mut surface).unwrap();
        assert_eq!(report.digits.chars_for(orch.config().positions()), "1405");
        assert_eq!(surface.shown(), "1405");

        let positions: Vec<_> = orch.cells().iter().map(|c| c.position()).collect();
        assert_eq!(positions, DigitPosition::active(false));
        assert!(orch.cell(DigitPosition::S1).is_none());
    }

    #[test]
    fn wall_clock_jump_flips_changed_digits_on_next_tick() {
        let (mut orch, mut surface) = setup(utc_config(TimeFormat::H24, false));
        let clock = ManualClock::new(utc(9, 59, 30));
        let t0 = Instant::now();
        orch.start(t0, &clock, &mut surface);
        orch.advance(t0 + TICK_INTERVAL);

        clock.set(utc(10, 0, 0));
        let report = orch.poll(t0 + TICK_INTERVAL, &clock, &mut surface).unwrap();
        assert_eq!(report.flipped().count(), 4);
        assert_eq!(surface.shown(), "1000");

        clock.set(utc(10, 1, 0));
        let report = orch.poll(t0 + TICK_INTERVAL * 2, &clock, &mut surface).unwrap();
        assert_eq!(report.flipped().collect::<Vec<_>>(), [DigitPosition::M2]);
    }

    #[test]
    fn end_to_end_12h_hours() {
        let (mut orch, mut surface) = setup(utc_config(TimeFormat::H12, false));
        let t0 = Instant::now();

        orch.tick(t0, utc(0, 0, 0), &mut surface);
        assert_eq!(&surface.shown()[..2], "12");

        orch.tick(t0 + TICK_INTERVAL, utc(13, 0, 0), &mut surface);
        assert_eq!(&surface.shown()[..2], "01");
    }

    #[test]
    fn cells_update_in_fixed_order() {
        let (mut orch, mut surface) = setup(utc_config(TimeFormat::H24, true));
        let report = orch.tick(Instant::now(), utc(14, 5, 9), &mut surface);
        let order: Vec<_> = report.outcomes.iter().map(|(p, _)| *p).collect();
        assert_eq!(order, DigitPosition::ALL);
    }

    #[test]
    fn only_changed_digits_flip() {
        let (mut orch, mut surface) = setup(utc_config(TimeFormat::H24, true));
        let t0 = Instant::now();
        orch.tick(t0, utc(14, 5, 9), &mut surface);

        let report = orch.tick(t0 + TICK_INTERVAL, utc(14, 5, 10), &mut surface);
        let flipped: Vec<_> = report.flipped().collect();
        assert_eq!(flipped, [DigitPosition::S1, DigitPosition::S2]);
    }

    #[test]
    fn start_ticks_immediately_and_is_idempotent() {
        let (mut orch, mut surface) = setup(utc_config(TimeFormat::H24, false));
        let clock = ManualClock::new(utc(8, 0, 0));
        let t0 = Instant::now();

        assert!(orch.start(t0, &clock, &mut surface).is_some());
        assert_eq!(orch.ticks(), 1);
        assert!(orch.start(t0, &clock, &mut surface).is_none());
        assert_eq!(orch.ticks(), 1);
        assert_eq!(orch.next_deadline(), Some(t0 + TICK_INTERVAL));
    }

    #[test]
    fn poll_fires_on_one_second_grid() {
        let (mut orch, mut surface) = setup(utc_config(TimeFormat::H24, false));
        let clock = ManualClock::new(utc(8, 0, 0));
        let t0 = Instant::now();
        orch.start(t0, &clock, &mut surface);

        assert!(orch.poll(t0 + Duration::from_millis(999), &clock, &mut surface).is_none());
        assert!(orch.poll(t0 + TICK_INTERVAL, &clock, &mut surface).is_some());
        assert!(orch.poll(t0 + TICK_INTERVAL, &clock, &mut surface).is_none());
        assert_eq!(orch.next_deadline(), Some(t0 + TICK_INTERVAL * 2));
        assert_eq!(orch.ticks(), 2);
    }

    #[test]
    fn late_poll_skips_missed_ticks() {
        let (mut orch, mut surface) = setup(utc_config(TimeFormat::H24, false));
        let clock = ManualClock::new(utc(8, 0, 0));
        let t0 = Instant::now();
        orch.start(t0, &clock, &mut surface);

        let late = t0 + Duration::from_millis(3500);
        assert!(orch.poll(late, &clock, &mut surface).is_some());
        assert_eq!(orch.ticks(), 2);
        assert_eq!(orch.next_deadline(), Some(t0 + TICK_INTERVAL * 4));
    }

    #[test]
    fn stop_prevents_further_ticks() {
        let (mut orch, mut surface) = setup(utc_config(TimeFormat::H24, false));
        let clock = ManualClock::new(utc(8, 0, 0));
        let t0 = Instant::now();
        orch.start(t0, &clock, &mut surface);

        assert!(orch.stop());
        assert!(!orch.stop());
        assert!(orch.poll(t0 + TICK_INTERVAL * 5, &clock, &mut surface).is_none());
        assert_eq!(orch.ticks(), 1);
        assert_eq!(orch.next_deadline(), None);
    }

    #[test]
    fn advance_reports_animation_until_settled() {
        let (mut orch, mut surface) = setup(utc_config(TimeFormat::H24, false));
        let t0 = Instant::now();
        orch.tick(t0, utc(14, 5, 9), &mut surface);
        let speed = orch.config().animation_speed;

        assert_eq!(orch.animation_deadline(), Some(t0 + speed));
        assert!(orch.advance(t0 + speed - Duration::from_millis(1)));
        assert!(!orch.advance(t0 + speed));
        assert_eq!(orch.animation_deadline(), None);
    }
}
