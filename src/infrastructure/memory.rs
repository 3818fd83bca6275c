//! 内存存储实现（测试替身）

use crate::domain::error::{DomainError, Missing, Result};
use crate::domain::models::Project;
use crate::domain::repositories::ProjectRepository;
use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// 内存项目存储
///
/// `fail_saves` 打开后所有写入都会失败，用来验证失败的操作不会留下部分修改。
#[derive(Default)]
pub struct InMemoryProjectRepository {
    projects: Mutex<BTreeMap<String, Project>>,
    fail_saves: AtomicBool,
}

impl InMemoryProjectRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// 已存储的项目数
    pub fn len(&self) -> usize {
        self.projects.lock().map(|p| p.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn lock_error() -> DomainError {
    DomainError::Io {
        context: "内存存储锁错误".to_string(),
        source: std::io::Error::other("mutex poisoned"),
    }
}

impl ProjectRepository for InMemoryProjectRepository {
    fn exists(&self, name: &str) -> Result<bool> {
        let projects = self.projects.lock().map_err(|_| lock_error())?;
        Ok(projects.contains_key(name))
    }

    fn load(&self, name: &str) -> Result<Project> {
        let projects = self.projects.lock().map_err(|_| lock_error())?;
        projects
            .get(name)
            .cloned()
            .ok_or_else(|| DomainError::NotFound(Missing::Project(name.to_string())))
    }

    fn save(&self, project: &Project) -> Result<()> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(DomainError::io(
                format!("写入项目 {} 失败", project.name),
                std::io::Error::other("simulated write failure"),
            ));
        }

        let mut projects = self.projects.lock().map_err(|_| lock_error())?;
        projects.insert(project.name.clone(), project.clone());
        Ok(())
    }
}
