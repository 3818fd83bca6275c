//! envx - 本地优先的多项目、多环境变量管理工具
//!
//! 代码结构遵循 Clean Architecture 原则

// 领域层
pub mod domain;

// 应用层
pub mod application;

// 基础设施层
pub mod infrastructure;

// .env 编解码
pub mod format;

// 命令层
pub mod commands;

// CLI 定义
pub mod cli;

// 应用程序容器
pub mod app;

// 诊断日志
pub mod logging;

#[cfg(test)]
pub(crate) mod test_utils;

// 重新导出常用类型
pub use domain::{DomainError, Environment, Missing, Project, Result, Variable, VariableMap};
