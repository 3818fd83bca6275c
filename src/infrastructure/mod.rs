//! Infrastructure Layer - 技术实现
//!
//! 包含：
//! - storage: 文件系统存储实现
//! - memory: 内存存储实现
//! - settings: config.toml 读取
//! - paths: 路径与原子写入工具

pub mod memory;
pub mod paths;
pub mod settings;
pub mod storage;

pub use memory::InMemoryProjectRepository;
pub use settings::Settings;
pub use storage::FileProjectRepository;
