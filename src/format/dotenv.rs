//! .env 格式编解码 (简单原则：透明的文本解析)

use crate::domain::error::{DomainError, Result};
use crate::domain::models::{Variable, VariableMap};

/// .env 格式解析器
pub struct DotenvParser;

impl DotenvParser {
    /// 解析 .env 文件内容
    ///
    /// 规则：
    /// - 忽略空行和以 # 开头的整行注释（行内注释不处理）
    /// - 格式：KEY=VALUE，只按第一个 `=` 切分，键和值都去掉首尾空白
    /// - 值两端成对的 `"` 或 `'` 去掉一层，然后把 `\"` 还原为 `"`
    /// - 同名键以后出现的为准
    ///
    /// # Errors
    ///
    /// 任何一行不是 KEY=VALUE（或键为空）时返回 `Parse`，附带行号和该行内容；
    /// 出错时不返回已解析的部分。
    pub fn parse(content: &str) -> Result<VariableMap> {
        let mut vars = VariableMap::new();

        for (index, raw) in content.lines().enumerate() {
            let line = raw.trim();

            // 跳过空行和注释
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (key, value) = match line.split_once('=') {
                Some((key, value)) if !key.trim().is_empty() => (key.trim(), value.trim()),
                _ => {
                    return Err(DomainError::Parse {
                        line: index + 1,
                        text: line.to_string(),
                    });
                }
            };

            let value = unquote(value);
            vars.insert(key.to_string(), Variable::new(key, value));
        }

        Ok(vars)
    }
}

/// 去掉一层成对引号并还原 `\"`
fn unquote(value: &str) -> String {
    let bytes = value.as_bytes();
    let stripped = match bytes {
        [first @ (b'"' | b'\''), .., last] if first == last => &value[1..value.len() - 1],
        _ => value,
    };
    stripped.replace("\\\"", "\"")
}

/// 值是否需要加引号才能原样读回
fn needs_quoting(value: &str) -> bool {
    if value != value.trim() || value.contains("\\\"") {
        return true;
    }
    let bytes = value.as_bytes();
    matches!(bytes, [first @ (b'"' | b'\''), .., last] if first == last)
}

/// 编码单个值
pub fn encode_value(value: &str) -> String {
    if needs_quoting(value) {
        format!("\"{}\"", value.replace('"', "\\\""))
    } else {
        value.to_string()
    }
}

/// .env 格式写出器
pub struct DotenvWriter;

impl DotenvWriter {
    /// 序列化为 .env 格式，按键排序，每行一个变量
    ///
    /// `with_comments` 为真时，有描述的变量前会多一行 `# 描述`。
    #[must_use]
    pub fn render(vars: &VariableMap, with_comments: bool) -> String {
        let mut out = String::new();
        for var in vars.values() {
            if with_comments {
                push_comment(&mut out, var);
            }
            out.push_str(&var.key);
            out.push('=');
            out.push_str(&encode_value(&var.value));
            out.push('\n');
        }
        out
    }

    /// 只保留键的模板（值留空），描述作为注释保留
    #[must_use]
    pub fn render_template(vars: &VariableMap) -> String {
        let mut out = String::new();
        for var in vars.values() {
            push_comment(&mut out, var);
            out.push_str(&var.key);
            out.push_str("=\n");
        }
        out
    }
}

fn push_comment(out: &mut String, var: &Variable) {
    if let Some(desc) = var.description.as_deref().filter(|d| !d.is_empty()) {
        // 多行描述逐行注释，否则读回时会被当成变量行
        for line in desc.lines() {
            out.push_str("# ");
            out.push_str(line);
            out.push('\n');
        }
    }
}
