//! 文件存储实现
//!
//! 每个项目一个 JSON 文件：`<data_dir>/projects/<name>.json`

use crate::domain::error::{DomainError, Missing, Result};
use crate::domain::models::{Project, validate_project_name};
use crate::domain::repositories::{ProjectRepository, StorageConfig};
use crate::infrastructure::paths;
use std::path::PathBuf;
use tracing::debug;

/// 文件项目存储
pub struct FileProjectRepository {
    config: StorageConfig,
}

impl FileProjectRepository {
    pub fn new(config: StorageConfig) -> Self {
        Self { config }
    }

    /// 项目文件路径（先校验项目名，防止路径穿越）
    fn project_path(&self, name: &str) -> Result<PathBuf> {
        validate_project_name(name)?;
        Ok(self.config.projects_dir().join(format!("{name}.json")))
    }
}

impl ProjectRepository for FileProjectRepository {
    fn exists(&self, name: &str) -> Result<bool> {
        Ok(self.project_path(name)?.is_file())
    }

    fn load(&self, name: &str) -> Result<Project> {
        let path = self.project_path(name)?;
        if !path.is_file() {
            debug!(project = name, path = %path.display(), "project file missing");
            return Err(DomainError::NotFound(Missing::Project(name.to_string())));
        }

        debug!(project = name, path = %path.display(), "loading project");
        let content = paths::read_file(&path)?;
        serde_json::from_str(&content).map_err(|e| {
            DomainError::Serialization(format!("解析 {} 失败: {e}", path.display()))
        })
    }

    fn save(&self, project: &Project) -> Result<()> {
        let path = self.project_path(&project.name)?;
        debug!(
            project = %project.name,
            environments = project.environments.len(),
            path = %path.display(),
            "saving project"
        );

        let mut buf = serde_json::to_string_pretty(project)?;
        buf.push('\n');
        paths::write_file_atomic(&path, &buf)
    }
}
