//! list 命令处理器

use super::{CommandContext, CommandHandler};
use crate::application::ProfileManager;
use crate::cli::OutputFormat;
use crate::domain::error::Result;
use crate::domain::models::VariableMap;
use std::fmt::Write as _;
use std::sync::Arc;

/// list 命令
pub struct ListCommand {
    profiles: Arc<ProfileManager>,
    project: String,
    env: Option<String>,
    format: OutputFormat,
    show_secrets: bool,
}

impl ListCommand {
    pub fn new(
        profiles: Arc<ProfileManager>,
        project: String,
        env: Option<String>,
        format: OutputFormat,
        show_secrets: bool,
    ) -> Self {
        Self {
            profiles,
            project,
            env,
            format,
            show_secrets,
        }
    }
}

impl CommandHandler for ListCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        let env = self.profiles.resolve_env(&self.project, self.env.as_deref())?;
        let mut vars = self.profiles.list_variables(&self.project, &env)?;

        if !self.show_secrets {
            mask_all(&mut vars);
        }

        match self.format {
            OutputFormat::Env => print!("{}", render_table(&self.project, &env, &vars)),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&vars)?),
        }

        Ok(())
    }
}

/// 机密值打码：超过 8 个字符时保留首尾各 4 个，否则全部替换为 *
pub fn mask_secret(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    let len = chars.len();
    if len > 8 {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[len - 4..].iter().collect();
        format!("{head}{}{tail}", "*".repeat(len - 8))
    } else {
        "*".repeat(len)
    }
}

fn mask_all(vars: &mut VariableMap) {
    for var in vars.values_mut().filter(|v| v.is_secret) {
        var.value = mask_secret(&var.value);
    }
}

/// 渲染为对齐的两列表格
pub fn render_table(project: &str, env: &str, vars: &VariableMap) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "📦 {project} ({env})\n");

    if vars.is_empty() {
        out.push_str("未设置任何变量\n");
        return out;
    }

    let width = vars.keys().map(|k| k.chars().count()).max().unwrap_or(0).max(20);
    for var in vars.values() {
        let _ = writeln!(out, "{:<width$} {}", var.key, var.value);
    }
    let _ = writeln!(out, "\n共 {} 个变量", vars.len());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Variable;

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret("abcd1234efgh"), "abcd****efgh");
        assert_eq!(mask_secret("12345678"), "********");
        assert_eq!(mask_secret(""), "");
        assert_eq!(mask_secret("密钥密钥密钥密钥密钥"), "密钥密钥**密钥密钥");
    }

    #[test]
    fn test_mask_all_only_touches_secrets() {
        let mut vars = VariableMap::new();
        vars.insert("PUBLIC".into(), Variable::new("PUBLIC", "visible-value"));
        vars.insert("TOKEN".into(), Variable::new("TOKEN", "sk-1234567890").secret(true));

        mask_all(&mut vars);
        assert_eq!(vars["PUBLIC"].value, "visible-value");
        assert_eq!(vars["TOKEN"].value, "sk-1*****7890");
    }

    #[test]
    fn test_render_table() {
        let mut vars = VariableMap::new();
        vars.insert("A".into(), Variable::new("A", "1"));
        vars.insert("B".into(), Variable::new("B", "2"));

        let out = render_table("api", "development", &vars);
        assert!(out.starts_with("📦 api (development)"));
        assert!(out.contains(&format!("{:<20} 1", "A")));
        assert!(out.contains("共 2 个变量"));
    }

    #[test]
    fn test_render_empty_table() {
        let out = render_table("api", "development", &VariableMap::new());
        assert!(out.contains("未设置任何变量"));
    }
}
