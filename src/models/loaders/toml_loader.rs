use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tokio::fs;

/// 预设答案文件
///
/// ```toml
/// [[answer]]
/// question = "Service?"
/// choice = "Good"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnswerScript {
    #[serde(default, rename = "answer")]
    pub answers: Vec<ScriptedAnswer>,
}

/// 单条预设答案
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScriptedAnswer {
    pub question: String,
    pub choice: String,
}

/// 解析 TOML 格式的预设答案
pub fn parse_answers(content: &str) -> Result<Vec<ScriptedAnswer>> {
    let script: AnswerScript = toml::from_str(content).context("无法解析答案文件")?;
    Ok(script.answers)
}

/// 从 TOML 文件加载预设答案，保持文件中的顺序
pub async fn load_answers(path: &Path) -> Result<Vec<ScriptedAnswer>> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("无法读取答案文件: {}", path.display()))?;

    let answers = parse_answers(&content)
        .with_context(|| format!("答案文件格式错误: {}", path.display()))?;

    tracing::info!(
        "成功加载 {} 条预设答案: {}",
        answers.len(),
        path.file_name().unwrap_or_default().to_string_lossy()
    );

    Ok(answers)
}
