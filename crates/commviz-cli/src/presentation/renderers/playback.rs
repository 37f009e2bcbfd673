//! Non-interactive playback
//!
//! Used when stdout is not a terminal: runs the same controller and timer
//! as the TUI, printing one line per phase.

use std::io::Write;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use anyhow::Result;
use commviz_engine::PresentationController;

use crate::presentation::presenters::phase_caption;

/// Upper bound on one sleep so a stop request is noticed promptly
const STOP_CHECK: Duration = Duration::from_millis(100);

pub struct ConsolePlayback {
    controller: PresentationController,
    /// Full cycles to print; 0 means until stopped
    cycles: u32,
    stop: Arc<AtomicBool>,
}

impl ConsolePlayback {
    pub fn new(controller: PresentationController, cycles: u32, stop: Arc<AtomicBool>) -> Self {
        Self {
            controller,
            cycles,
            stop,
        }
    }

    pub fn run<W: Write>(mut self, out: &mut W) -> Result<()> {
        let topic = self.controller.topic();
        let total_phases = u64::from(self.cycles) * 4;

        writeln!(out, "{} ({})", topic.info().title, topic)?;
        if !self.controller.is_running() {
            self.controller.toggle_animation();
        }

        write_phase(out, &self.controller)?;
        let mut printed: u64 = 1;

        while !self.stop.load(Ordering::SeqCst) && (total_phases == 0 || printed < total_phases) {
            let wait = self
                .controller
                .next_tick_in(Instant::now())
                .unwrap_or(Duration::ZERO);
            std::thread::sleep(wait.min(STOP_CHECK));

            let mut written = Ok(());
            self.controller.poll_with(Instant::now(), |controller| {
                let wanted = total_phases == 0 || printed < total_phases;
                if wanted && written.is_ok() {
                    written = write_phase(out, controller);
                    printed += 1;
                }
            });
            written?;
        }

        self.controller.reset_animation();
        tracing::info!(%topic, phases = printed, "playback finished");
        out.flush()?;
        Ok(())
    }
}

fn write_phase<W: Write>(out: &mut W, controller: &PresentationController) -> std::io::Result<()> {
    let step = controller.step();
    writeln!(
        out,
        "step {}/4  {}",
        step.index() + 1,
        phase_caption(controller.topic(), step)
    )
}
