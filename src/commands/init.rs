//! init 命令处理器

use super::{CommandContext, CommandHandler};
use crate::application::ProfileManager;
use crate::domain::error::Result;
use std::sync::Arc;
use tracing::debug;

/// init 命令
pub struct InitCommand {
    profiles: Arc<ProfileManager>,
    project: String,
    description: String,
    env: String,
}

impl InitCommand {
    pub fn new(
        profiles: Arc<ProfileManager>,
        project: String,
        description: String,
        env: String,
    ) -> Self {
        Self {
            profiles,
            project,
            description,
            env,
        }
    }
}

impl CommandHandler for InitCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        debug!(project = %self.project, env = %self.env, "initializing project");
        self.profiles
            .init_project(&self.project, &self.description, &self.env)?;
        println!("✓ 已初始化项目 '{}'，环境 '{}'", self.project, self.env);
        Ok(())
    }
}
