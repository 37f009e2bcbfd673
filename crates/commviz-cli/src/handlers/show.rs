use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Result;
use commviz_engine::PresentationController;
use is_terminal::IsTerminal;

use crate::context::ExecutionContext;
use crate::presentation::renderers::{ConsolePlayback, TuiRenderer};

#[derive(Debug, Default)]
pub struct ShowOptions {
    pub topic: Option<String>,
    pub play: bool,
    pub interval_ms: Option<u64>,
    pub cycles: u32,
}

pub fn handle(ctx: &ExecutionContext, options: ShowOptions) -> Result<()> {
    let config = ctx.config()?;
    let interval = config.tick_interval(options.interval_ms)?;

    let mut controller = PresentationController::with_interval(config.default_topic, interval);
    if let Some(name) = options.topic.as_deref() {
        controller.select_topic_named(name)?;
    }

    if io::stdout().is_terminal() {
        if options.play || config.autoplay {
            controller.toggle_animation();
        }
        let progress = ctx.load_progress()?;
        TuiRenderer::new(controller, progress, ctx.progress_path()).run()
    } else {
        let stop = Arc::new(AtomicBool::new(false));
        let handler_stop = stop.clone();
        ctrlc::set_handler(move || {
            handler_stop.store(true, Ordering::SeqCst);
        })?;

        let mut stdout = io::stdout().lock();
        ConsolePlayback::new(controller, options.cycles, stop).run(&mut stdout)
    }
}
