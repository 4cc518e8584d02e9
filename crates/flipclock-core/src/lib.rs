//! Flip clock core.
//!
//! Owns everything that decides *when* and *what* a flip clock tile shows:
//! the per-digit flip state machine, the once-per-second tick loop, and the
//! visibility-driven lifecycle. Pixels are someone else's problem; the core
//! reaches the renderer only through [`digit::FlipSurface`].
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`config`] | `RawCardConfig`, `CardSettings`, `ClockConfig`, sanitizers |
//! | [`time`] | `sample`, `ClockDigits`, `WallClock` |
//! | [`digit`] | `DigitPosition`, `DigitCell`, keyframes, face contract |
//! | [`tick`] | `TickOrchestrator` |
//! | [`visibility`] | `VisibilityGate`, `VisibilityObserver` |
//! | [`widget`] | `FlipClock` lifecycle context |
//! | [`error`] | `ClockError` |
//! | [`logging`] | `init_logging` |
//!
//! # Driving a clock
//!
//! ```rust,ignore
//! let mut clock = FlipClock::new(board, SystemClock, None, settings);
//! clock.attach(Instant::now());
//! loop {
//!     let now = Instant::now();
//!     clock.poll(now);
//!     // paint ...
//!     sleep_until(clock.next_wakeup(now));
//! }
//! ```

pub mod config;
pub mod digit;
pub mod error;
pub mod logging;
pub mod tick;
pub mod time;
pub mod visibility;
pub mod widget;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{CardSettings, ClockConfig, RawCardConfig, TimeFormat};
pub use error::{ClockError, VisualElement};
pub use widget::FlipClock;
