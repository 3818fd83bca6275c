//! export 命令处理器

use super::{CommandContext, CommandHandler};
use crate::application::{Exporter, ProfileManager};
use crate::domain::error::{DomainError, Result};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// export 命令
pub struct ExportCommand {
    pub profiles: Arc<ProfileManager>,
    pub exporter: Arc<Exporter>,
    pub project: String,
    pub env: Option<String>,
    pub output: PathBuf,
    pub with_comments: bool,
    pub overwrite: bool,
}

impl CommandHandler for ExportCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        let env = self.profiles.resolve_env(&self.project, self.env.as_deref())?;
        let vars = self.profiles.list_variables(&self.project, &env)?;

        if vars.is_empty() {
            return Err(DomainError::InvalidArgument(format!(
                "{}/{env} 中没有可导出的变量",
                self.project
            )));
        }

        if self.output.exists() && !self.overwrite {
            return Err(DomainError::InvalidArgument(format!(
                "文件 '{}' 已存在，使用 --overwrite 覆盖",
                self.output.display()
            )));
        }

        debug!(output = %self.output.display(), count = vars.len(), "exporting variables");
        self.exporter
            .export_to_dotenv(&vars, &self.output, self.with_comments)?;

        println!(
            "✓ 已导出 {} 个变量到 {}",
            vars.len(),
            self.output.display()
        );
        Ok(())
    }
}
