//! set 命令处理器

use super::{CommandContext, CommandHandler};
use crate::application::ProfileManager;
use crate::domain::error::Result;
use crate::domain::models::{validate_variable_key, validate_variable_value};
use std::sync::Arc;
use tracing::debug;

/// set 命令
pub struct SetCommand {
    profiles: Arc<ProfileManager>,
    project: String,
    env: Option<String>,
    pairs: Vec<(String, String)>,
    description: Option<String>,
    is_secret: Option<bool>,
}

impl SetCommand {
    pub fn new(
        profiles: Arc<ProfileManager>,
        project: String,
        env: Option<String>,
        pairs: Vec<(String, String)>,
        description: Option<String>,
        is_secret: Option<bool>,
    ) -> Self {
        Self {
            profiles,
            project,
            env,
            pairs,
            description,
            is_secret,
        }
    }
}

impl CommandHandler for SetCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let env = self.profiles.resolve_env(&self.project, self.env.as_deref())?;

        // 任何一个键值无效都不写入
        for (key, value) in &self.pairs {
            validate_variable_key(key)?;
            validate_variable_value(key, value)?;
        }

        for (key, value) in &self.pairs {
            debug!(project = %self.project, env = %env, key = %key, "setting variable");
            self.profiles.set_variable(
                &self.project,
                &env,
                key,
                value,
                self.description.as_deref(),
                self.is_secret,
            )?;

            if ctx.verbose {
                println!("✓ 已设置 {key} ({}/{env})", self.project);
            } else {
                println!("✓ 已设置 {key}");
            }
        }

        Ok(())
    }
}
