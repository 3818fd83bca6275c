//! 导出服务

use crate::domain::error::Result;
use crate::domain::models::VariableMap;
use crate::format::dotenv::DotenvWriter;
use crate::infrastructure::paths;
use std::path::Path;

/// .env 导出器
#[derive(Debug, Default)]
pub struct Exporter;

impl Exporter {
    pub fn new() -> Self {
        Self
    }

    /// 完整导出：KEY=VALUE
    pub fn export_to_dotenv(&self, vars: &VariableMap, path: &Path, with_comments: bool) -> Result<()> {
        paths::write_file_atomic(path, &DotenvWriter::render(vars, with_comments))
    }

    /// 模板导出：只有键，没有值
    pub fn export_template(&self, vars: &VariableMap, path: &Path) -> Result<()> {
        paths::write_file_atomic(path, &DotenvWriter::render_template(vars))
    }

    pub fn render_template(&self, vars: &VariableMap) -> String {
        DotenvWriter::render_template(vars)
    }
}
