//! 应用程序容器
//!
//! 负责配置解析和依赖注入；每次调用构造一次，不使用全局状态

use crate::application::{Exporter, Importer, ProfileManager};
use crate::domain::repositories::{ProjectRepository, StorageConfig};
use crate::infrastructure::{FileProjectRepository, Settings, paths};
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// 应用程序配置
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub verbose: bool,
    pub data_dir: PathBuf,
    /// `init` 未指定环境时使用
    pub default_env: String,
}

impl AppConfig {
    /// 按 命令行/ENVX_HOME > ~/.envx 的顺序确定数据目录，并读取其中的 config.toml
    pub fn resolve(data_dir: Option<PathBuf>, verbose: bool) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => paths::default_data_dir().context("无法确定数据目录")?,
        };

        let settings = Settings::load(&data_dir)
            .with_context(|| format!("加载 {} 中的配置失败", data_dir.display()))?;

        debug!(data_dir = %data_dir.display(), default_env = %settings.default_env, "configuration resolved");

        Ok(Self {
            verbose,
            data_dir,
            default_env: settings.default_env,
        })
    }

    pub fn storage(&self) -> StorageConfig {
        StorageConfig::new(&self.data_dir)
    }
}

/// 应用程序容器
pub struct Application {
    pub config: AppConfig,
    pub profiles: Arc<ProfileManager>,
    pub importer: Arc<Importer>,
    pub exporter: Arc<Exporter>,
}

impl Application {
    /// 使用文件存储创建应用实例
    pub fn new(config: AppConfig) -> Self {
        let repo: Arc<dyn ProjectRepository> =
            Arc::new(FileProjectRepository::new(config.storage()));
        Self::with_repository(config, repo)
    }

    /// 使用指定存储创建应用实例
    pub fn with_repository(config: AppConfig, repository: Arc<dyn ProjectRepository>) -> Self {
        Self {
            config,
            profiles: Arc::new(ProfileManager::new(repository)),
            importer: Arc::new(Importer::new()),
            exporter: Arc::new(Exporter::new()),
        }
    }
}
