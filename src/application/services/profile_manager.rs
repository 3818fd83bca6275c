//! 项目与变量管理服务
//!
//! 每个操作都是一次完整的 读取 -> 修改 -> 整体写回，不在调用之间缓存状态。
//! 任何一步失败都不会写入，存储中要么是调用前的状态，要么是完整的新状态。

use crate::domain::error::{DomainError, Missing, Result};
use crate::domain::models::{
    Project, Variable, VariableMap, validate_env_name, validate_project_name,
    validate_variable_key, validate_variable_value,
};
use crate::domain::repositories::ProjectRepository;
use chrono::Utc;
use std::sync::Arc;

/// 导入时如何处理已存在的键
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImportMode {
    /// 值不同则覆盖
    #[default]
    Overwrite,
    /// 已存在的键一律跳过
    Merge,
}

/// 导入结果统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub added: usize,
    pub updated: usize,
    pub unchanged: usize,
    pub skipped: usize,
}

impl ImportSummary {
    /// 实际写入的变量数
    pub fn written(&self) -> usize {
        self.added + self.updated
    }
}

/// 项目管理服务
pub struct ProfileManager {
    repository: Arc<dyn ProjectRepository>,
}

impl ProfileManager {
    pub fn new(repository: Arc<dyn ProjectRepository>) -> Self {
        Self { repository }
    }

    /// 创建项目，`env_name` 成为唯一且默认的环境
    pub fn init_project(&self, name: &str, description: &str, env_name: &str) -> Result<()> {
        validate_project_name(name)?;
        validate_env_name(env_name)?;

        if self.repository.exists(name)? {
            return Err(DomainError::AlreadyExists(name.to_string()));
        }

        self.repository
            .save(&Project::new(name, description, env_name))
    }

    /// 读取整个项目
    pub fn load_project(&self, name: &str) -> Result<Project> {
        self.repository.load(name)
    }

    /// 解析要操作的环境：显式指定优先，否则使用项目的默认环境
    pub fn resolve_env(&self, project: &str, env: Option<&str>) -> Result<String> {
        if let Some(env) = env {
            validate_env_name(env)?;
            return Ok(env.to_string());
        }

        let project = self.repository.load(project)?;
        project
            .default_environment()
            .map(str::to_string)
            .ok_or_else(|| {
                DomainError::InvalidArgument(format!(
                    "项目 '{}' 没有默认环境，请使用 --env 指定",
                    project.name
                ))
            })
    }

    /// 设置变量
    ///
    /// 变量名和值必须能原样写回 .env，否则返回 `InvalidArgument` 且不写入。
    /// 环境不存在时隐式创建。已存在的变量覆盖值和描述、刷新 `updated_at`；
    /// `is_secret` 为 `None` 时保留原有分类，新变量默认为非机密。
    pub fn set_variable(
        &self,
        project: &str,
        env: &str,
        key: &str,
        value: &str,
        description: Option<&str>,
        is_secret: Option<bool>,
    ) -> Result<()> {
        validate_env_name(env)?;
        validate_variable_key(key)?;
        validate_variable_value(key, value)?;

        let mut project = self.repository.load(project)?;
        let now = Utc::now();

        project.environment_or_insert(env).upsert(
            key,
            value.to_string(),
            description.map(str::to_string),
            is_secret,
            now,
        );
        project.touch(now);

        self.repository.save(&project)
    }

    /// 获取单个变量
    pub fn get_variable(&self, project: &str, env: &str, key: &str) -> Result<Variable> {
        let mut vars = self.list_variables(project, env)?;
        vars.remove(key).ok_or_else(|| {
            DomainError::NotFound(Missing::Variable {
                project: project.to_string(),
                env: env.to_string(),
                key: key.to_string(),
            })
        })
    }

    /// 列出环境中的全部变量，环境存在但为空时返回空表
    pub fn list_variables(&self, project: &str, env: &str) -> Result<VariableMap> {
        let mut loaded = self.repository.load(project)?;
        loaded
            .environments
            .remove(env)
            .map(|environment| environment.variables)
            .ok_or_else(|| {
                DomainError::NotFound(Missing::Environment {
                    project: project.to_string(),
                    env: env.to_string(),
                })
            })
    }

    /// 把解析好的 .env 变量一次性合并进环境
    ///
    /// 新键按导入条目写入；值不同的键只替换值，保留描述、机密标记和创建时间；
    /// 值相同的键不动。`Merge` 模式下已存在的键全部跳过。
    pub fn apply_import(
        &self,
        project: &str,
        env: &str,
        imported: VariableMap,
        mode: ImportMode,
    ) -> Result<ImportSummary> {
        validate_env_name(env)?;

        let mut loaded = self.repository.load(project)?;
        let env_created = loaded.environment(env).is_none();
        let environment = loaded.environment_or_insert(env);
        let now = Utc::now();
        let mut summary = ImportSummary::default();

        for (key, incoming) in imported {
            match environment.variables.get_mut(&key) {
                Some(_) if mode == ImportMode::Merge => summary.skipped += 1,
                Some(existing) if existing.value == incoming.value => summary.unchanged += 1,
                Some(existing) => {
                    existing.value = incoming.value;
                    existing.updated_at = now;
                    summary.updated += 1;
                }
                None => {
                    let mut var = incoming;
                    var.created_at = now;
                    var.updated_at = now;
                    environment.variables.insert(key, var);
                    summary.added += 1;
                }
            }
        }

        if summary.written() > 0 || env_created {
            loaded.touch(now);
            self.repository.save(&loaded)?;
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::dotenv::{DotenvParser, DotenvWriter};
    use crate::test_utils::{TestStore, memory_manager};

    fn vars(pairs: &[(&str, &str)]) -> VariableMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), Variable::new(*k, *v)))
            .collect()
    }

    #[test]
    fn test_init_then_get_is_not_found() {
        let (_, manager) = memory_manager();
        manager.init_project("api", "backend", "development").unwrap();

        let err = manager.get_variable("api", "development", "ANY").unwrap_err();
        assert!(matches!(err, DomainError::NotFound(Missing::Variable { .. })));
    }

    #[test]
    fn test_init_twice_is_already_exists() {
        let (_, manager) = memory_manager();
        manager.init_project("api", "", "development").unwrap();

        let err = manager.init_project("api", "other", "production").unwrap_err();
        assert!(matches!(err, DomainError::AlreadyExists(ref n) if n == "api"));
        assert_eq!(manager.load_project("api").unwrap().default_env, "development");
    }

    #[test]
    fn test_init_rejects_bad_names() {
        let (repo, manager) = memory_manager();
        assert!(matches!(
            manager.init_project("a/b", "", "development"),
            Err(DomainError::InvalidArgument(_))
        ));
        assert!(matches!(
            manager.init_project("api", "", " "),
            Err(DomainError::InvalidArgument(_))
        ));
        assert!(repo.is_empty());
    }

    #[test]
    fn test_set_on_missing_project() {
        let (_, manager) = memory_manager();
        let err = manager
            .set_variable("ghost", "development", "A", "1", None, None)
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound(Missing::Project(_))));
    }

    #[test]
    fn test_set_and_get() {
        let (_, manager) = memory_manager();
        manager.init_project("api", "", "development").unwrap();
        manager
            .set_variable("api", "development", "DB_HOST", "localhost", Some("db"), None)
            .unwrap();

        let var = manager.get_variable("api", "development", "DB_HOST").unwrap();
        assert_eq!(var.key, "DB_HOST");
        assert_eq!(var.value, "localhost");
        assert_eq!(var.description.as_deref(), Some("db"));
        assert!(!var.is_secret);
    }

    #[test]
    fn test_set_creates_environment_implicitly() {
        let (_, manager) = memory_manager();
        manager.init_project("api", "", "development").unwrap();
        manager
            .set_variable("api", "production", "A", "1", None, None)
            .unwrap();

        let project = manager.load_project("api").unwrap();
        assert!(project.environment("production").is_some());
        assert_eq!(project.default_env, "development");
        assert!(project.default_env_is_valid());
    }

    #[test]
    fn test_set_same_value_twice_only_advances_updated_at() {
        let (_, manager) = memory_manager();
        manager.init_project("api", "", "development").unwrap();
        manager
            .set_variable("api", "development", "A", "1", None, None)
            .unwrap();
        let first = manager.get_variable("api", "development", "A").unwrap();

        manager
            .set_variable("api", "development", "A", "1", None, None)
            .unwrap();
        let second = manager.get_variable("api", "development", "A").unwrap();

        assert_eq!(second.value, "1");
        assert_eq!(second.created_at, first.created_at);
        assert!(second.updated_at >= first.updated_at);
    }

    #[test]
    fn test_set_preserves_secret_unless_changed() {
        let (_, manager) = memory_manager();
        manager.init_project("api", "", "development").unwrap();
        manager
            .set_variable("api", "development", "TOKEN", "a", None, Some(true))
            .unwrap();
        manager
            .set_variable("api", "development", "TOKEN", "b", None, None)
            .unwrap();
        assert!(manager.get_variable("api", "development", "TOKEN").unwrap().is_secret);

        manager
            .set_variable("api", "development", "TOKEN", "b", None, Some(false))
            .unwrap();
        assert!(!manager.get_variable("api", "development", "TOKEN").unwrap().is_secret);
    }

    #[test]
    fn test_set_overwrites_description() {
        let (_, manager) = memory_manager();
        manager.init_project("api", "", "development").unwrap();
        manager
            .set_variable("api", "development", "A", "1", Some("first"), None)
            .unwrap();
        manager
            .set_variable("api", "development", "A", "2", None, None)
            .unwrap();
        assert!(
            manager
                .get_variable("api", "development", "A")
                .unwrap()
                .description
                .is_none()
        );
    }

    #[test]
    fn test_set_rejects_keys_that_cannot_be_exported() {
        let (_, manager) = memory_manager();
        manager.init_project("api", "", "development").unwrap();

        for key in [" ", " PAD ", "#HASH", "A=B", "A\nB"] {
            assert!(
                matches!(
                    manager.set_variable("api", "development", key, "1", None, None),
                    Err(DomainError::InvalidArgument(_))
                ),
                "{key:?} should be rejected"
            );
        }
        assert!(manager.list_variables("api", "development").unwrap().is_empty());
    }

    #[test]
    fn test_set_rejects_multiline_value() {
        let (_, manager) = memory_manager();
        manager.init_project("api", "", "development").unwrap();

        for value in ["line1\nline2", "line1\r\nline2"] {
            assert!(matches!(
                manager.set_variable("api", "development", "CERT", value, None, None),
                Err(DomainError::InvalidArgument(_))
            ));
        }
        assert!(manager.get_variable("api", "development", "CERT").is_err());
    }

    #[test]
    fn test_accepted_variables_survive_dotenv_round_trip() {
        let (_, manager) = memory_manager();
        manager.init_project("api", "", "development").unwrap();
        let pairs = [
            ("A#B", "x # not a comment"),
            ("lower.case-key", "  padded  "),
            ("QUOTED", "\"already quoted\""),
            ("URL", "postgres://h/db?a=b"),
            ("EMPTY", ""),
        ];
        for (key, value) in pairs {
            manager
                .set_variable("api", "development", key, value, None, None)
                .unwrap();
        }

        let stored = manager.list_variables("api", "development").unwrap();
        let rendered = DotenvWriter::render(&stored, false);
        let reparsed = DotenvParser::parse(&rendered).unwrap();

        assert_eq!(
            reparsed.keys().collect::<Vec<_>>(),
            stored.keys().collect::<Vec<_>>()
        );
        for (key, value) in pairs {
            assert_eq!(reparsed[key].value, value, "value of {key}");
        }
    }

    #[test]
    fn test_failed_save_leaves_state_untouched() {
        let (repo, manager) = memory_manager();
        manager.init_project("api", "", "development").unwrap();
        manager
            .set_variable("api", "development", "A", "1", None, None)
            .unwrap();

        repo.set_fail_saves(true);
        assert!(
            manager
                .set_variable("api", "development", "A", "2", None, None)
                .is_err()
        );
        assert!(
            manager
                .set_variable("api", "staging", "B", "1", None, None)
                .is_err()
        );

        let project = manager.load_project("api").unwrap();
        assert_eq!(project.environments["development"].variables["A"].value, "1");
        assert!(project.environment("staging").is_none());
    }

    #[test]
    fn test_list_empty_environment_is_empty_map() {
        let (_, manager) = memory_manager();
        manager.init_project("api", "", "development").unwrap();
        assert!(manager.list_variables("api", "development").unwrap().is_empty());
    }

    #[test]
    fn test_list_missing_environment_and_project() {
        let (_, manager) = memory_manager();
        manager.init_project("api", "", "development").unwrap();

        assert!(matches!(
            manager.list_variables("api", "production"),
            Err(DomainError::NotFound(Missing::Environment { .. }))
        ));
        assert!(matches!(
            manager.list_variables("web", "development"),
            Err(DomainError::NotFound(Missing::Project(_)))
        ));
        assert!(matches!(
            manager.get_variable("api", "production", "A"),
            Err(DomainError::NotFound(Missing::Environment { .. }))
        ));
    }

    #[test]
    fn test_resolve_env() {
        let (_, manager) = memory_manager();
        manager.init_project("api", "", "staging").unwrap();

        assert_eq!(manager.resolve_env("api", None).unwrap(), "staging");
        assert_eq!(manager.resolve_env("api", Some("production")).unwrap(), "production");
        assert!(manager.resolve_env("ghost", None).unwrap_err().is_not_found());
    }

    #[test]
    fn test_apply_import_overwrite() {
        let (_, manager) = memory_manager();
        manager.init_project("api", "", "development").unwrap();
        manager
            .set_variable("api", "development", "A", "1", None, None)
            .unwrap();
        manager
            .set_variable("api", "development", "B", "9", Some("kept"), Some(true))
            .unwrap();
        let before = manager.get_variable("api", "development", "B").unwrap();

        let summary = manager
            .apply_import(
                "api",
                "development",
                vars(&[("A", "1"), ("B", "2"), ("C", "3")]),
                ImportMode::Overwrite,
            )
            .unwrap();
        assert_eq!(
            summary,
            ImportSummary {
                added: 1,
                updated: 1,
                unchanged: 1,
                skipped: 0,
            }
        );

        let after = manager.list_variables("api", "development").unwrap();
        assert_eq!(after["B"].value, "2");
        assert!(after["B"].is_secret);
        assert_eq!(after["B"].description.as_deref(), Some("kept"));
        assert_eq!(after["B"].created_at, before.created_at);
        assert_eq!(after["C"].value, "3");
        assert!(!after["C"].is_secret);
    }

    #[test]
    fn test_apply_import_merge_skips_existing() {
        let (_, manager) = memory_manager();
        manager.init_project("api", "", "development").unwrap();
        manager
            .set_variable("api", "development", "A", "old", None, None)
            .unwrap();

        let summary = manager
            .apply_import(
                "api",
                "development",
                vars(&[("A", "new"), ("B", "2")]),
                ImportMode::Merge,
            )
            .unwrap();
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.added, 1);

        let after = manager.list_variables("api", "development").unwrap();
        assert_eq!(after["A"].value, "old");
        assert_eq!(after["B"].value, "2");
    }

    #[test]
    fn test_apply_import_is_all_or_nothing() {
        let (repo, manager) = memory_manager();
        manager.init_project("api", "", "development").unwrap();
        repo.set_fail_saves(true);

        let result = manager.apply_import(
            "api",
            "development",
            vars(&[("A", "1"), ("B", "2")]),
            ImportMode::Overwrite,
        );
        assert!(result.is_err());
        repo.set_fail_saves(false);
        assert!(manager.list_variables("api", "development").unwrap().is_empty());
    }

    #[test]
    fn test_file_backed_round_trip() {
        let store = TestStore::new();
        store.manager.init_project("web", "frontend", "development").unwrap();
        store
            .manager
            .set_variable("web", "development", "PORT", "3000", None, None)
            .unwrap();

        // 新的服务实例从磁盘读取
        let fresh = store.fresh_manager();
        let var = fresh.get_variable("web", "development", "PORT").unwrap();
        assert_eq!(var.value, "3000");
        assert!(matches!(
            fresh.init_project("web", "", "development"),
            Err(DomainError::AlreadyExists(_))
        ));
    }
}
