//! Domain Layer - 核心业务逻辑
//!
//! 包含：
//! - models: 领域实体
//! - repositories: 存储接口（输出端口）
//! - error: 领域错误类型

pub mod error;
pub mod models;
pub mod repositories;

pub use error::{DomainError, Missing, Result};
pub use models::{Environment, Project, Variable, VariableMap};
pub use repositories::{ProjectRepository, StorageConfig};
