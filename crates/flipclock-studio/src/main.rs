mod args;
mod card;
mod present;

use std::io;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use flipclock_core::logging::{init_logging, LoggingConfig};
use flipclock_ui::prelude::*;

use crate::args::Args;
use crate::present::{layer_counts, render_at, TerminalPresenter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut logging = LoggingConfig::default().with_default_level(log::LevelFilter::Warn);
    if let Some(filter) = &args.log {
        logging = logging.with_filter(filter.clone());
    }
    init_logging(logging);

    let settings = card::load(&args)?;
    log::info!(
        "card: theme {}, size {}, seconds {}",
        settings.theme,
        settings.size,
        settings.clock.show_seconds
    );

    // No viewport in a terminal: the gate has no observer and stays open.
    let mut clock = FlipClock::new(FlipBoard::new(), SystemClock, None, settings);
    let mut presenter = TerminalPresenter::new(io::stdout().lock());
    let mut scene = DrawList::new();

    let started = Instant::now();
    let stop_at = args.stop_deadline(started);
    clock.attach(started);

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        let now = Instant::now();
        if stop_at.is_some_and(|t| now >= t) {
            log::info!("run duration elapsed");
            break;
        }

        clock.poll(now);
        draw(&clock, &mut scene, now);
        presenter
            .present(render_at(clock.surface(), clock.orchestrator(), now))
            .context("writing to the terminal")?;

        let Some(wake) = clock.next_wakeup(now) else {
            log::warn!("clock stopped; nothing left to wait for");
            break;
        };
        let wake = stop_at.map_or(wake, |t| wake.min(t));

        tokio::select! {
            _ = tokio::time::sleep_until(wake.into()) => {}
            res = &mut ctrl_c => {
                res.context("listening for ctrl-c")?;
                log::info!("interrupted");
                break;
            }
        }
    }

    clock.detach();
    log::info!("{} ticks in {:.1?}", clock.orchestrator().ticks(), started.elapsed());
    Ok(())
}

/// Records the frame into the scene list so its size shows up in trace logs.
fn draw(clock: &FlipClock<FlipBoard, SystemClock>, scene: &mut DrawList, now: Instant) {
    if !log::log_enabled!(log::Level::Trace) {
        return;
    }
    scene.clear();
    FlipPainter::new(scene, clock.surface()).paint(clock.orchestrator(), now);
    log::trace!("frame: {} draw commands {:?}", scene.len(), layer_counts(scene));
}
