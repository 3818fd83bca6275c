//! CLI 参数定义

use crate::domain::error::{DomainError, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// envx - 多项目、多环境的变量管理工具
#[derive(Parser, Debug)]
#[command(
    name = "envx",
    version,
    about = "本地优先的环境变量管理工具",
    long_about = "按项目和环境管理变量，支持 .env 文件的导入、导出与模板生成"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 详细输出模式
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 数据目录（默认 ~/.envx）
    #[arg(long, global = true, env = "ENVX_HOME", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 初始化项目
    Init {
        /// 项目名
        project: String,
        /// 初始环境（默认取 config.toml 的 default_env）
        #[arg(short, long)]
        env: Option<String>,
        /// 项目描述
        #[arg(short = 'd', long = "desc", default_value = "")]
        description: String,
    },

    /// 设置变量
    Set {
        /// 项目名
        project: String,
        /// 一个或多个 KEY=VALUE
        #[arg(required = true, value_name = "KEY=VALUE")]
        pairs: Vec<String>,
        /// 环境名（默认使用项目的默认环境）
        #[arg(short, long)]
        env: Option<String>,
        /// 变量描述
        #[arg(short = 'd', long = "desc")]
        description: Option<String>,
        /// 标记为机密
        #[arg(long, conflicts_with = "no_secret")]
        secret: bool,
        /// 取消机密标记
        #[arg(long)]
        no_secret: bool,
    },

    /// 获取变量值
    Get {
        /// 项目名
        project: String,
        /// 变量名
        key: String,
        /// 环境名
        #[arg(short, long)]
        env: Option<String>,
    },

    /// 列出变量（机密值默认打码）
    List {
        /// 项目名
        project: String,
        /// 环境名
        #[arg(short, long)]
        env: Option<String>,
        /// 输出格式
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Env)]
        format: OutputFormat,
        /// 显示机密变量的原值
        #[arg(long)]
        show_secrets: bool,
    },

    /// 导出为 .env 文件
    Export {
        /// 项目名
        project: String,
        /// 环境名
        #[arg(short, long)]
        env: Option<String>,
        /// 输出路径
        #[arg(short, long, default_value = ".env")]
        output: PathBuf,
        /// 把描述写成注释
        #[arg(long)]
        with_comments: bool,
        /// 覆盖已存在的文件
        #[arg(long)]
        overwrite: bool,
    },

    /// 从 .env 文件导入
    Import {
        /// 项目名
        project: String,
        /// .env 文件路径
        file: PathBuf,
        /// 环境名
        #[arg(short, long)]
        env: Option<String>,
        /// 不覆盖已存在的变量
        #[arg(long)]
        merge: bool,
        /// 只预览变化，不写入
        #[arg(long)]
        dry_run: bool,
    },

    /// 生成只含键名的模板
    Template {
        /// 项目名
        project: String,
        /// 环境名
        #[arg(short, long)]
        env: Option<String>,
        /// 输出路径（默认输出到标准输出）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// 输出格式类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Env,
    Json,
}

/// 解析 KEY=VALUE 参数，只按第一个 `=` 切分
pub fn parse_pair(pair: &str) -> Result<(String, String)> {
    match pair.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(DomainError::InvalidArgument(format!(
            "无效格式: {pair} (应为 KEY=VALUE)"
        ))),
    }
}

/// 解析全部参数；任何一个无效都不返回结果
pub fn parse_pairs(pairs: &[String]) -> Result<Vec<(String, String)>> {
    pairs.iter().map(|p| parse_pair(p)).collect()
}

/// --secret / --no-secret 转为可选标记，都未给出时保留原有分类
pub fn secret_flag(secret: bool, no_secret: bool) -> Option<bool> {
    match (secret, no_secret) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}
