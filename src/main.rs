//! envx 主程序入口
//!
//! 设计原则：
//! - 模块化：入口只负责解析参数、装配依赖，逻辑委托给各模块
//! - 显式配置：每次调用构造一次 AppConfig，不使用全局状态
//! - 错误处理：详细/安静错误模式，通过 --verbose 切换

use clap::Parser;
use envx::app::{AppConfig, Application};
use envx::cli::Cli;
use envx::commands::{self, CommandContext};
use envx::logging;

fn main() {
    // 解析 CLI 参数
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // 配置初始化
    let config = match AppConfig::resolve(cli.data_dir.clone(), cli.verbose) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("配置初始化失败: {e:#}");
            std::process::exit(1);
        }
    };

    let ctx = CommandContext {
        verbose: config.verbose,
    };
    let app = Application::new(config);

    // 执行命令，统一错误处理
    let result = commands::build(cli.command, &app).and_then(|handler| handler.execute(&ctx));

    if let Err(e) = result {
        e.report(ctx.verbose);
        std::process::exit(1);
    }
}
