use crate::context::ExecutionContext;
use crate::presentation::presenters;
use anyhow::Result;
use commviz_types::Topic;

/// Flip the completion mark for `topic` and persist it
pub fn handle(ctx: &ExecutionContext, topic: &str) -> Result<()> {
    let topic: Topic = topic.parse()?;
    let mut progress = ctx.load_progress()?;
    let completed = progress.toggle(topic);
    ctx.save_progress(&progress)?;

    ctx.render(presenters::present_completion(topic, completed, &progress))
}
