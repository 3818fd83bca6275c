//! template 命令处理器

use super::{CommandContext, CommandHandler};
use crate::application::{Exporter, ProfileManager};
use crate::domain::error::{DomainError, Result};
use std::path::PathBuf;
use std::sync::Arc;

/// template 命令
pub struct TemplateCommand {
    pub profiles: Arc<ProfileManager>,
    pub exporter: Arc<Exporter>,
    pub project: String,
    pub env: Option<String>,
    /// 为空时输出到标准输出
    pub output: Option<PathBuf>,
}

impl CommandHandler for TemplateCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        let env = self.profiles.resolve_env(&self.project, self.env.as_deref())?;
        let vars = self.profiles.list_variables(&self.project, &env)?;

        if vars.is_empty() {
            return Err(DomainError::InvalidArgument(format!(
                "{}/{env} 中没有可导出的变量",
                self.project
            )));
        }

        match &self.output {
            Some(path) => {
                self.exporter.export_template(&vars, path)?;
                println!("✓ 模板已导出到 {}", path.display());
            }
            None => print!("{}", self.exporter.render_template(&vars)),
        }

        Ok(())
    }
}
