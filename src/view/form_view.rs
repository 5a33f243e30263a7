//! 表单文本视图
//!
//! 纯函数，只读取表单状态，方便在终端打印和测试

use crate::workflow::FeedbackForm;
use std::fmt::Write;

/// 未答完时的提示
pub const INCOMPLETE_MESSAGE: &str = "请回答所有问题。";
/// 提交成功时的提示
pub const SUBMITTED_MESSAGE: &str = "提交成功！";
/// 提交按钮文字
pub const SUBMIT_LABEL: &str = "[ 提交反馈 ]";

/// 渲染整张表单
///
/// - Logo 和单位名称为空时不输出对应行
/// - 选项用 `(•)` / `( )` 标出当前答案
/// - 两个提示按各自标记独立显示
pub fn render_form(form: &FeedbackForm) -> String {
    let mut out = String::new();

    let header = render_header(form);
    if !header.is_empty() {
        out.push_str(&header);
        out.push('\n');
    }

    for (index, question) in form.questions().iter().enumerate() {
        let selected = form.response_for(question);
        let _ = writeln!(out, "{}. {}", index + 1, question);
        for choice in form.choices_for(index) {
            let marker = if selected == Some(choice.as_str()) { "(•)" } else { "( )" };
            let _ = writeln!(out, "   {} {}", marker, choice);
        }
        out.push('\n');
    }

    out.push_str(SUBMIT_LABEL);
    out.push('\n');

    if form.validation_error() {
        out.push_str(INCOMPLETE_MESSAGE);
        out.push('\n');
    }
    if form.submitted() {
        out.push_str(SUBMITTED_MESSAGE);
        out.push('\n');
    }

    out
}

fn render_header(form: &FeedbackForm) -> String {
    let metadata = form.metadata();
    let mut header = String::new();

    if let Some(logo) = metadata.company_logo.as_deref() {
        let _ = writeln!(header, "[Logo] {}", logo);
    }
    if let Some(name) = metadata.unit_name.as_deref() {
        let _ = writeln!(header, "== {} ==", name);
    }

    header
}
