//! 诊断日志
//!
//! 日志只写到 stderr，不影响命令在 stdout 上的输出。
//! `RUST_LOG` 优先；未设置时 --verbose 为 `envx=debug`，否则为 `warn`。

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// 初始化 tracing 订阅者
pub fn init(verbose: bool) {
    let default = if verbose { "envx=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // 重复初始化（例如测试中）时忽略
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}
