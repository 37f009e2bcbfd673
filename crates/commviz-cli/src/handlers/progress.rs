use crate::context::ExecutionContext;
use crate::presentation::presenters;
use anyhow::Result;

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let progress = ctx.load_progress()?;
    ctx.render(presenters::present_progress(&progress))
}
