//! 导入服务：读取 .env 文件并与现有变量做三方对比

use crate::domain::error::Result;
use crate::domain::models::VariableMap;
use crate::format::dotenv::DotenvParser;
use crate::infrastructure::paths;
use std::path::Path;

/// 导入预览：新增 / 值变化 / 未变化，各列表按键排序
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportPreview {
    pub new: Vec<String>,
    pub updated: Vec<String>,
    pub unchanged: Vec<String>,
}

impl ImportPreview {
    pub fn total(&self) -> usize {
        self.new.len() + self.updated.len() + self.unchanged.len()
    }

    /// 导入是否会改变任何值
    pub fn has_changes(&self) -> bool {
        !self.new.is_empty() || !self.updated.is_empty()
    }
}

/// .env 导入器
#[derive(Debug, Default)]
pub struct Importer;

impl Importer {
    pub fn new() -> Self {
        Self
    }

    /// 读取并解析 .env 文件
    ///
    /// 产出的变量都是非机密、无描述、带新时间戳的条目，由调用方决定如何合并。
    pub fn import_from_dotenv(&self, path: &Path) -> Result<VariableMap> {
        let content = paths::read_file(path)?;
        self.parse(&content)
    }

    /// 解析 .env 文本
    pub fn parse(&self, content: &str) -> Result<VariableMap> {
        DotenvParser::parse(content)
    }

    /// 重新解析文件并与 `existing` 对比
    pub fn preview_import(&self, path: &Path, existing: &VariableMap) -> Result<ImportPreview> {
        let imported = self.import_from_dotenv(path)?;
        Ok(Self::diff(&imported, existing))
    }

    /// 三方对比，只比较值，不比较描述和机密标记
    pub fn diff(imported: &VariableMap, existing: &VariableMap) -> ImportPreview {
        let mut preview = ImportPreview::default();

        // BTreeMap 按键有序遍历，结果天然排序
        for (key, var) in imported {
            match existing.get(key) {
                None => preview.new.push(key.clone()),
                Some(current) if current.value != var.value => preview.updated.push(key.clone()),
                Some(_) => preview.unchanged.push(key.clone()),
            }
        }

        preview
    }
}
