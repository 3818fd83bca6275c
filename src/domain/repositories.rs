//! 存储接口定义（输出端口）

use crate::domain::error::Result;
use crate::domain::models::Project;
use std::path::PathBuf;

/// 项目存储接口
///
/// 以项目名为键的整体读写：每次 `save` 都必须原子地替换整个项目，
/// 调用方看到的要么是旧状态，要么是完整的新状态。
pub trait ProjectRepository: Send + Sync {
    /// 项目是否存在
    fn exists(&self, name: &str) -> Result<bool>;

    /// 读取项目，不存在时返回 `NotFound`
    fn load(&self, name: &str) -> Result<Project>;

    /// 整体写入项目
    fn save(&self, project: &Project) -> Result<()>;
}

/// 存储配置
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl StorageConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// 项目文件所在目录
    pub fn projects_dir(&self) -> PathBuf {
        self.data_dir.join("projects")
    }
}
