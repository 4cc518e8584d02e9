//! Time subsystem.
//!
//! Two clocks are in play and they are kept apart on purpose:
//! - wall-clock time ([`WallClock`], `DateTime<Utc>`) decides *what* the
//!   digits read;
//! - monotonic time (`std::time::Instant`, supplied by the host loop) decides
//!   *when* ticks fire and how far a flip has progressed.
//!
//! Both can be injected, so every timing rule is testable with fixed instants.

mod source;
mod wall_clock;

pub use source::{resolve_zone, sample, ClockDigits};
pub use wall_clock::{ManualClock, SystemClock, WallClock};
