use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "Runs a flip clock card in the terminal", long_about = None)]
pub struct Args {
    #[arg(help = "Card configuration (JSON). Defaults apply when omitted")]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Stop after this many seconds")]
    pub duration: Option<u64>,

    #[arg(short, long, help = "Log filter, e.g. \"debug\" or \"flipclock_core=trace\"")]
    pub log: Option<String>,

    #[arg(long, help = "Override the card's theme")]
    pub theme: Option<String>,

    #[arg(long, default_value_t = false, help = "Show seconds regardless of the card")]
    pub seconds: bool,
}

impl Args {
    /// When a run started at `started` should end. `None` runs until Ctrl-C,
    /// including durations too large to represent.
    pub fn stop_deadline(&self, started: Instant) -> Option<Instant> {
        let secs = self.duration?;
        let deadline = started.checked_add(Duration::from_secs(secs));
        if deadline.is_none() {
            log::warn!("duration of {secs}s is out of range; running until interrupted");
        }
        deadline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags() {
        let args = Args::parse_from(["flipclock-studio", "card.json", "-d", "5", "--seconds"]);
        assert_eq!(args.config, Some(PathBuf::from("card.json")));
        assert_eq!(args.duration, Some(5));
        assert!(args.seconds);
        assert_eq!(args.theme, None);
    }

    #[test]
    fn deadline_follows_duration() {
        let started = Instant::now();
        let args = Args::parse_from(["flipclock-studio", "-d", "5"]);
        assert_eq!(args.stop_deadline(started), Some(started + Duration::from_secs(5)));
        assert_eq!(Args::parse_from(["flipclock-studio"]).stop_deadline(started), None);
    }

    #[test]
    fn huge_duration_runs_until_interrupted() {
        let args = Args::parse_from(["flipclock-studio", "-d", "18446744073709551615"]);
        assert_eq!(args.stop_deadline(Instant::now()), None);
    }

    #[test]
    fn everything_is_optional() {
        let args = Args::parse_from(["flipclock-studio"]);
        assert!(args.config.is_none());
        assert!(args.duration.is_none());
    }
}
