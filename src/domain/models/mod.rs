//! 领域实体
//!
//! Project 独占其 Environment，Environment 独占其 Variable，不存在跨项目引用。

pub mod project;
pub mod variable;

pub use project::{Project, validate_env_name, validate_project_name};
pub use variable::{
    Environment, Variable, VariableMap, validate_variable_key, validate_variable_value,
};
