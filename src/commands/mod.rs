//! 命令处理器
//!
//! 每个命令一个模块，实现 CommandHandler trait

use crate::app::Application;
use crate::cli::{self, Commands};
use crate::domain::error::Result;

pub mod export;
pub mod get;
pub mod import;
pub mod init;
pub mod list;
pub mod set;
pub mod template;

pub use export::ExportCommand;
pub use get::GetCommand;
pub use import::ImportCommand;
pub use init::InitCommand;
pub use list::ListCommand;
pub use set::SetCommand;
pub use template::TemplateCommand;

/// 命令上下文
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub verbose: bool,
}

/// 命令处理器 trait
pub trait CommandHandler {
    /// 执行命令
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// 把解析后的命令行参数装配成处理器
pub fn build(command: Commands, app: &Application) -> Result<Box<dyn CommandHandler>> {
    let profiles = app.profiles.clone();

    let handler: Box<dyn CommandHandler> = match command {
        Commands::Init {
            project,
            env,
            description,
        } => Box::new(InitCommand::new(
            profiles,
            project,
            description,
            env.unwrap_or_else(|| app.config.default_env.clone()),
        )),

        Commands::Set {
            project,
            pairs,
            env,
            description,
            secret,
            no_secret,
        } => Box::new(SetCommand::new(
            profiles,
            project,
            env,
            cli::parse_pairs(&pairs)?,
            description,
            cli::secret_flag(secret, no_secret),
        )),

        Commands::Get { project, key, env } => Box::new(GetCommand::new(profiles, project, env, key)),

        Commands::List {
            project,
            env,
            format,
            show_secrets,
        } => Box::new(ListCommand::new(profiles, project, env, format, show_secrets)),

        Commands::Export {
            project,
            env,
            output,
            with_comments,
            overwrite,
        } => Box::new(ExportCommand {
            profiles,
            exporter: app.exporter.clone(),
            project,
            env,
            output,
            with_comments,
            overwrite,
        }),

        Commands::Import {
            project,
            file,
            env,
            merge,
            dry_run,
        } => Box::new(ImportCommand {
            profiles,
            importer: app.importer.clone(),
            project,
            file,
            env,
            merge,
            dry_run,
        }),

        Commands::Template {
            project,
            env,
            output,
        } => Box::new(TemplateCommand {
            profiles,
            exporter: app.exporter.clone(),
            project,
            env,
            output,
        }),
    };

    Ok(handler)
}
