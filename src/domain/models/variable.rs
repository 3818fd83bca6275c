//! 变量与环境实体

use crate::domain::error::{DomainError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 键 -> 变量，按键排序
pub type VariableMap = BTreeMap<String, Variable>;

/// 校验变量名
///
/// 变量名必须能原样写回 .env 文件：非空、首尾无空白、不含 `=` 和换行、不以 `#` 开头。
pub fn validate_variable_key(key: &str) -> Result<()> {
    let reason = if key.is_empty() {
        Some("不能为空")
    } else if key.trim() != key {
        Some("首尾不能有空白")
    } else if key.contains(['=', '\n', '\r']) {
        Some("不能包含 '=' 或换行")
    } else if key.starts_with('#') {
        Some("不能以 '#' 开头")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(DomainError::InvalidArgument(format!(
            "变量名 '{}' 无效：{reason}",
            key.escape_debug()
        ))),
        None => Ok(()),
    }
}

/// 校验变量值：.env 中每个变量占一行，值不能包含换行
pub fn validate_variable_value(key: &str, value: &str) -> Result<()> {
    if value.contains(['\n', '\r']) {
        return Err(DomainError::InvalidArgument(format!(
            "变量 '{key}' 的值不能包含换行"
        )));
    }
    Ok(())
}

/// 单个变量
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    pub key: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub is_secret: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Variable {
    /// 创建新变量，非机密、无描述
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            key: key.into(),
            value: value.into(),
            description: None,
            is_secret: false,
            created_at: now,
            updated_at: now,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description.filter(|d| !d.is_empty());
        self
    }

    #[must_use]
    pub fn secret(mut self, is_secret: bool) -> Self {
        self.is_secret = is_secret;
        self
    }

    /// 覆盖值与描述，created_at 保持不变
    pub fn overwrite(&mut self, value: String, description: Option<String>, now: DateTime<Utc>) {
        self.value = value;
        self.description = description.filter(|d| !d.is_empty());
        self.updated_at = now;
    }
}

/// 项目下的一个命名环境
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    pub name: String,
    #[serde(default)]
    pub variables: VariableMap,
}

impl Environment {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variables: VariableMap::new(),
        }
    }

    /// 新建或更新变量
    ///
    /// 已存在的变量只覆盖值和描述；`is_secret` 为 `None` 时保留原有分类。
    pub fn upsert(
        &mut self,
        key: &str,
        value: String,
        description: Option<String>,
        is_secret: Option<bool>,
        now: DateTime<Utc>,
    ) {
        match self.variables.get_mut(key) {
            Some(existing) => {
                existing.overwrite(value, description, now);
                if let Some(flag) = is_secret {
                    existing.is_secret = flag;
                }
            }
            None => {
                let mut var = Variable::new(key, value)
                    .with_description(description)
                    .secret(is_secret.unwrap_or(false));
                var.created_at = now;
                var.updated_at = now;
                self.variables.insert(key.to_string(), var);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
