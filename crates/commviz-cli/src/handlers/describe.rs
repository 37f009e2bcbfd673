use crate::context::ExecutionContext;
use crate::presentation::presenters;
use anyhow::Result;
use commviz_types::Topic;

pub fn handle(ctx: &ExecutionContext, topic: &str) -> Result<()> {
    let topic: Topic = topic.parse()?;
    let progress = ctx.load_progress()?;
    ctx.render(presenters::present_topic_detail(topic, &progress))
}
