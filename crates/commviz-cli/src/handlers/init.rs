use crate::config::Config;
use crate::context::ExecutionContext;
use crate::presentation::presenters;
use anyhow::Result;

/// Write a default config unless one exists; `force` overwrites it
pub fn handle(ctx: &ExecutionContext, force: bool) -> Result<()> {
    let config_path = ctx.config_path();

    let (config, created) = if config_path.exists() && !force {
        (Config::load_from(&config_path)?, false)
    } else {
        let config = Config::default();
        config.save_to(&config_path)?;
        tracing::info!(path = %config_path.display(), "config written");
        (config, true)
    };

    ctx.render(presenters::present_init(&config_path, created, &config))
}
