//! import 命令处理器

use super::{CommandContext, CommandHandler};
use crate::application::{ImportMode, ImportPreview, ImportSummary, Importer, ProfileManager};
use crate::domain::error::{DomainError, Missing, Result};
use crate::domain::models::VariableMap;
use std::fmt::Write as _;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// import 命令
pub struct ImportCommand {
    pub profiles: Arc<ProfileManager>,
    pub importer: Arc<Importer>,
    pub project: String,
    pub file: PathBuf,
    pub env: Option<String>,
    pub merge: bool,
    pub dry_run: bool,
}

impl ImportCommand {
    /// 当前环境的变量；环境尚未创建时视为空
    fn existing(&self, env: &str) -> Result<VariableMap> {
        match self.profiles.list_variables(&self.project, env) {
            Err(DomainError::NotFound(Missing::Environment { .. })) => Ok(VariableMap::new()),
            other => other,
        }
    }
}

impl CommandHandler for ImportCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        let env = self.profiles.resolve_env(&self.project, self.env.as_deref())?;
        let imported = self.importer.import_from_dotenv(&self.file)?;

        if imported.is_empty() {
            return Err(DomainError::InvalidArgument(format!(
                "文件 '{}' 中没有变量",
                self.file.display()
            )));
        }

        let existing = self.existing(&env)?;

        if self.dry_run {
            let preview = self.importer.preview_import(&self.file, &existing)?;
            print!("{}", render_preview(&self.project, &env, &preview));
            return Ok(());
        }

        let mode = if self.merge {
            ImportMode::Merge
        } else {
            ImportMode::Overwrite
        };
        debug!(
            project = %self.project,
            env = %env,
            count = imported.len(),
            ?mode,
            "applying import"
        );

        let summary = self
            .profiles
            .apply_import(&self.project, &env, imported, mode)?;
        print!("{}", render_summary(&summary));
        Ok(())
    }
}

/// 渲染三方对比预览
pub fn render_preview(project: &str, env: &str, preview: &ImportPreview) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "📋 导入预览 {project} ({env})，共 {} 个变量",
        preview.total()
    );

    let sections = [
        ("新增", '+', &preview.new),
        ("更新", '~', &preview.updated),
        ("未变化", '=', &preview.unchanged),
    ];
    for (title, marker, keys) in sections {
        if keys.is_empty() {
            continue;
        }
        let _ = writeln!(out, "\n{title} ({}):", keys.len());
        for key in keys {
            let _ = writeln!(out, "  {marker} {key}");
        }
    }

    if preview.has_changes() {
        out.push_str("\n去掉 --dry-run 以应用变更\n");
    } else {
        out.push_str("\n没有需要应用的变更\n");
    }
    out
}

/// 渲染导入结果
pub fn render_summary(summary: &ImportSummary) -> String {
    let mut out = format!(
        "✓ 已导入 {} 个变量 (新增 {}，更新 {}，未变化 {})\n",
        summary.written(),
        summary.added,
        summary.updated,
        summary.unchanged
    );
    if summary.skipped > 0 {
        let _ = writeln!(out, "⚠ 跳过 {} 个已存在的变量 (merge 模式)", summary.skipped);
    }
    out
}
