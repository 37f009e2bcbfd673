use crate::config::Config;
use crate::presentation::view_models::{CommandResultViewModel, CreateView};
use crate::presentation::renderers::ConsoleRenderer;
use crate::types::OutputFormat;
use anyhow::Result;
use commviz_engine::Progress;
use once_cell::sync::OnceCell;
use serde::Serialize;
use std::path::PathBuf;

pub const PROGRESS_FILE: &str = "progress.json";

/// Shared state for handlers: data directory, lazily loaded config and
/// output format
pub struct ExecutionContext {
    data_dir: PathBuf,
    config: OnceCell<Config>,
    pub format: OutputFormat,
}

impl ExecutionContext {
    pub fn new(data_dir: PathBuf, format: OutputFormat) -> Self {
        Self {
            data_dir,
            config: OnceCell::new(),
            format,
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join(Config::FILE_NAME)
    }

    pub fn progress_path(&self) -> PathBuf {
        self.data_dir.join(PROGRESS_FILE)
    }

    pub fn config(&self) -> Result<&Config> {
        self.config
            .get_or_try_init(|| Config::load_from(&self.config_path()))
    }

    pub fn load_progress(&self) -> Result<Progress> {
        Ok(Progress::load_from(&self.progress_path())?)
    }

    pub fn save_progress(&self, progress: &Progress) -> Result<()> {
        Ok(progress.save_to(&self.progress_path())?)
    }

    /// Render a view model in the configured output format
    pub fn render<T>(&self, view_model: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        ConsoleRenderer::new(self.format == OutputFormat::Json).render(view_model)
    }
}
