use crate::context::ExecutionContext;
use crate::presentation::presenters;
use anyhow::Result;

pub fn handle(ctx: &ExecutionContext, message: &[String]) -> Result<()> {
    let question = message.join(" ");
    let progress = ctx.load_progress()?;
    let reply = commviz_engine::respond(&question, &progress);
    tracing::debug!(question = %question, action = ?reply.action, "guide reply");

    ctx.render(presenters::present_guide_reply(&question, &reply))
}
