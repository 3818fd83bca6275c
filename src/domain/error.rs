//! 领域层错误类型

use miette::Diagnostic;
use std::error::Error as _;
use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DomainError>;

/// 未找到的资源
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Missing {
    Project(String),
    Environment { project: String, env: String },
    Variable { project: String, env: String, key: String },
}

impl fmt::Display for Missing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Missing::Project(name) => write!(f, "项目 '{name}'"),
            Missing::Environment { project, env } => write!(f, "环境 '{project}/{env}'"),
            Missing::Variable { project, env, key } => {
                write!(f, "变量 '{key}' (位于 {project}/{env})")
            }
        }
    }
}

/// 领域层错误类型
#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("项目已存在: {0}")]
    #[diagnostic(code(envx::already_exists), help("换一个项目名，或直接使用 'envx set'"))]
    AlreadyExists(String),

    #[error("未找到{0}")]
    #[diagnostic(code(envx::not_found), help("使用 'envx init' 创建项目，或用 'envx list' 查看变量"))]
    NotFound(Missing),

    #[error("解析错误 (第 {line} 行): {text}")]
    #[diagnostic(code(envx::parse), help("每行格式应为 KEY=VALUE"))]
    Parse { line: usize, text: String },

    #[error("IO 错误: {context}")]
    #[diagnostic(code(envx::io))]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("序列化错误: {0}")]
    #[diagnostic(code(envx::serialization))]
    Serialization(String),

    #[error("无效参数: {0}")]
    #[diagnostic(code(envx::invalid_argument))]
    InvalidArgument(String),

    #[error("配置错误: {0}")]
    #[diagnostic(code(envx::config), help("检查数据目录下的 config.toml"))]
    Config(String),
}

impl DomainError {
    /// 包装 IO 错误并附带上下文
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        DomainError::Io {
            context: context.into(),
            source,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::NotFound(_))
    }

    /// 报告错误，支持详细/安静模式
    /// verbose = true: 打印完整错误链与帮助
    /// verbose = false: 只打印关键信息
    pub fn report(&self, verbose: bool) {
        eprintln!("错误: {self}");

        if !verbose {
            return;
        }

        let mut current = self.source();
        while let Some(cause) = current {
            eprintln!("  └─ 原因: {cause}");
            current = cause.source();
        }

        if let Some(help) = self.help() {
            eprintln!("提示: {help}");
        }
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::Serialization(err.to_string())
    }
}
