//! 数据目录下的 config.toml

use crate::domain::error::{DomainError, Result};
use crate::infrastructure::paths;
use serde::Deserialize;
use std::path::Path;

pub const SETTINGS_FILE: &str = "config.toml";
pub const DEFAULT_ENV: &str = "development";

/// 文件配置，缺失的字段取默认值
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// `init` 未指定 --env 时使用的环境名
    pub default_env: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_env: DEFAULT_ENV.to_string(),
        }
    }
}

impl Settings {
    /// 从数据目录读取配置，文件不存在时使用默认值
    pub fn load(data_dir: &Path) -> Result<Self> {
        let path = data_dir.join(SETTINGS_FILE);
        if !path.is_file() {
            return Ok(Self::default());
        }

        let content = paths::read_file(&path)?;
        Self::parse(&content)
            .map_err(|e| DomainError::Config(format!("{}: {e}", path.display())))
    }

    fn parse(content: &str) -> std::result::Result<Self, String> {
        let settings: Settings = toml::from_str(content).map_err(|e| e.to_string())?;
        if settings.default_env.trim().is_empty() {
            return Err("default_env 不能为空".to_string());
        }
        Ok(settings)
    }
}
