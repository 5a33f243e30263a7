//! 终端交互
//!
//! 用 dialoguer 的单选列表代替单选按钮组

use anyhow::{Context, Result};
use dialoguer::{Confirm, Select};
use tracing::warn;

/// 询问一个问题
///
/// # 参数
/// - `index`: 问题索引（从0开始，仅用于显示）
/// - `question`: 问题文本
/// - `choices`: 可选答案
/// - `current`: 当前答案，作为默认高亮项
///
/// # 返回
/// 用户按 Esc / q 跳过，或该问题没有选项时返回 `None`
pub fn ask_question(
    index: usize,
    question: &str,
    choices: &[String],
    current: Option<&str>,
) -> Result<Option<String>> {
    if choices.is_empty() {
        warn!("⚠️ 问题 {} 没有可选答案，跳过", index + 1);
        return Ok(None);
    }

    let default = current
        .and_then(|c| choices.iter().position(|choice| choice == c))
        .unwrap_or(0);

    let picked = Select::new()
        .with_prompt(format!("{}. {}", index + 1, question))
        .items(choices)
        .default(default)
        .interact_opt()
        .with_context(|| format!("无法读取问题 {} 的答案", index + 1))?;

    Ok(picked.map(|i| choices[i].clone()))
}

/// 未答完时询问是否继续作答
pub fn confirm_retry() -> Result<bool> {
    Confirm::new()
        .with_prompt("还有问题未回答，继续作答？")
        .default(true)
        .interact()
        .context("无法读取确认结果")
}
