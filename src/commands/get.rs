//! get 命令处理器

use super::{CommandContext, CommandHandler};
use crate::application::ProfileManager;
use crate::domain::error::Result;
use std::sync::Arc;

/// get 命令
pub struct GetCommand {
    profiles: Arc<ProfileManager>,
    project: String,
    env: Option<String>,
    key: String,
}

impl GetCommand {
    pub fn new(profiles: Arc<ProfileManager>, project: String, env: Option<String>, key: String) -> Self {
        Self {
            profiles,
            project,
            env,
            key,
        }
    }
}

impl CommandHandler for GetCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        let env = self.profiles.resolve_env(&self.project, self.env.as_deref())?;
        let var = self.profiles.get_variable(&self.project, &env, &self.key)?;
        println!("{}", var.value);
        Ok(())
    }
}
