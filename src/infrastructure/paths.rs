//! 路径与文件工具

use crate::domain::error::{DomainError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// 数据目录名（位于用户主目录下）
const DATA_DIR_NAME: &str = ".envx";

/// 获取默认数据目录 ~/.envx
pub fn default_data_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|h| h.join(DATA_DIR_NAME))
        .ok_or_else(|| DomainError::Config("无法确定主目录".to_string()))
}

/// 读取文本文件，错误附带路径
pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| DomainError::io(format!("读取文件 {} 失败", path.display()), e))
}

/// 安全写入文件 (临时文件 + 原子替换)
///
/// 临时文件与目标同目录，保证 rename 不跨文件系统；文件名带进程号，
/// 避免两个并发进程互相覆盖对方的临时文件。
pub fn write_file_atomic(path: &Path, content: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&parent)
        .map_err(|e| DomainError::io(format!("创建目录 {} 失败", parent.display()), e))?;

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| DomainError::InvalidArgument(format!("无效的文件路径: {}", path.display())))?;
    let temp_path = parent.join(format!(".{file_name}.{}.tmp", std::process::id()));

    fs::write(&temp_path, content)
        .map_err(|e| DomainError::io(format!("写入临时文件 {} 失败", temp_path.display()), e))?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(DomainError::io(format!("替换文件 {} 失败", path.display()), e));
    }

    Ok(())
}
