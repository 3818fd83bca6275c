//! 测试工具模块
//!
//! 提供统一的测试存储，避免测试之间共享数据目录

use crate::application::ProfileManager;
use crate::domain::repositories::StorageConfig;
use crate::infrastructure::{FileProjectRepository, InMemoryProjectRepository};
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// 基于内存存储的服务，同时返回存储句柄以便注入故障
pub fn memory_manager() -> (Arc<InMemoryProjectRepository>, ProfileManager) {
    let repo = Arc::new(InMemoryProjectRepository::new());
    let manager = ProfileManager::new(repo.clone());
    (repo, manager)
}

/// 基于临时目录的文件存储，离开作用域时自动清理
pub struct TestStore {
    pub dir: TempDir,
    pub manager: ProfileManager,
}

impl Default for TestStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TestStore {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("创建临时目录失败");
        let manager = Self::manager_for(&dir);
        Self { dir, manager }
    }

    /// 指向同一数据目录的新服务实例
    pub fn fresh_manager(&self) -> ProfileManager {
        Self::manager_for(&self.dir)
    }

    /// 在临时目录中写入文件，返回路径
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).expect("写入测试文件失败");
        path
    }

    fn manager_for(dir: &TempDir) -> ProfileManager {
        let repo = FileProjectRepository::new(StorageConfig::new(dir.path()));
        ProfileManager::new(Arc::new(repo))
    }
}
