//! Logger setup.
//!
//! The clock itself only talks to the `log` facade. Hosts that want output
//! call [`init_logging`] once; library users can install any other backend.
//!
//! Levels used across the crate:
//! - `warn`: a recovered fault (missing tile, bad timezone, no observer)
//! - `debug`: lifecycle transitions and per-tick summaries
//! - `trace`: individual flips

mod init;

pub use init::{init_logging, LoggingConfig};
