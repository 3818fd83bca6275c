//! 项目实体

use super::variable::Environment;
use crate::domain::error::{DomainError, Result};
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// 项目名会成为文件名，只允许安全字符
static PROJECT_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*$").expect("项目名正则无效"));

/// 校验项目名
pub fn validate_project_name(name: &str) -> Result<()> {
    if PROJECT_NAME.is_match(name) {
        Ok(())
    } else {
        Err(DomainError::InvalidArgument(format!(
            "项目名 '{name}' 无效，只能包含字母、数字、'.'、'_'、'-'，且以字母或数字开头"
        )))
    }
}

/// 校验环境名
pub fn validate_env_name(env: &str) -> Result<()> {
    if env.trim().is_empty() {
        return Err(DomainError::InvalidArgument("环境名不能为空".to_string()));
    }
    Ok(())
}

/// 项目：一组命名环境的容器
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub environments: BTreeMap<String, Environment>,
    #[serde(default)]
    pub default_env: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// 创建项目，并以 `env_name` 作为唯一且默认的环境
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>, env_name: &str) -> Self {
        let now = Utc::now();
        let mut environments = BTreeMap::new();
        environments.insert(env_name.to_string(), Environment::new(env_name));

        Self {
            name: name.into(),
            description: description.into(),
            environments,
            default_env: env_name.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn environment(&self, name: &str) -> Option<&Environment> {
        self.environments.get(name)
    }

    /// 获取环境，不存在时隐式创建
    pub fn environment_or_insert(&mut self, name: &str) -> &mut Environment {
        self.environments
            .entry(name.to_string())
            .or_insert_with(|| Environment::new(name))
    }

    /// 默认环境（为空表示未设置）
    pub fn default_environment(&self) -> Option<&str> {
        if self.default_env.is_empty() {
            None
        } else {
            Some(&self.default_env)
        }
    }

    /// default_env 要么为空，要么指向已存在的环境
    pub fn default_env_is_valid(&self) -> bool {
        self.default_env.is_empty() || self.environments.contains_key(&self.default_env)
    }

    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}
