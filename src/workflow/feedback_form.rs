//! 反馈表单 - 流程层
//!
//! 核心职责：持有一次填写会话的全部状态
//!
//! 状态变化：
//! 1. `Loading` → 加载完成（成功或失败）→ `Ready`
//! 2. 提交时未答完 → `Invalid`
//! 3. 提交时已答完 → `Submitted`
//!
//! 没有终止状态，提交后仍可修改并再次提交。

use std::collections::HashMap;
use tracing::{debug, info};

use crate::clients::QuestionSource;
use crate::error::{FormError, FormResult};
use crate::models::{FormMetadata, QuestionSheet, SubmissionPayload};
use crate::services::{Diagnostics, SubmissionSink};

/// 表单所处阶段（由内部标记推导）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// 题目尚未加载完成
    Loading,
    /// 可以作答
    Ready,
    /// 最近一次提交时有问题未回答
    Invalid,
    /// 已成功提交过
    Submitted,
}

/// 反馈表单
///
/// - 问题以索引区分，允许重复文本
/// - 答案以问题文本为键，重复的问题共享同一个答案
/// - 答案在会话内不会被清空
#[derive(Debug, Default)]
pub struct FeedbackForm {
    questions: Vec<String>,
    choices: Vec<Vec<String>>,
    metadata: FormMetadata,
    responses: HashMap<String, String>,
    load_settled: bool,
    validation_error: bool,
    submitted: bool,
}

impl FeedbackForm {
    /// 创建空表单（处于 `Loading` 阶段）
    pub fn new() -> Self {
        Self::default()
    }

    /// 从题目源加载
    ///
    /// # 返回
    /// 成功应用了新题目时返回 `true`；失败时保留原有状态，
    /// 错误只交给 `diagnostics`
    pub async fn load(
        &mut self,
        source: &dyn QuestionSource,
        diagnostics: &dyn Diagnostics,
    ) -> bool {
        let result = source.fetch().await;
        self.apply_load(result, diagnostics)
    }

    /// 应用一次加载结果
    ///
    /// 与 `load` 分开，便于在独立任务中请求、在表单所在处应用
    pub fn apply_load(
        &mut self,
        result: FormResult<QuestionSheet>,
        diagnostics: &dyn Diagnostics,
    ) -> bool {
        self.load_settled = true;
        match result {
            Ok(sheet) => {
                self.apply_sheet(sheet);
                true
            }
            Err(e) => {
                diagnostics.report(&e);
                false
            }
        }
    }

    fn apply_sheet(&mut self, sheet: QuestionSheet) {
        let (questions, choices, metadata) = sheet.into_parts();
        info!("✓ 表单已加载 {} 个问题", questions.len());

        self.questions = questions;
        self.choices = choices;
        self.metadata = metadata;
    }

    /// 记录（或覆盖）某个问题的答案
    ///
    /// 不校验 `choice` 是否属于该问题的选项
    pub fn select_choice(&mut self, question: impl Into<String>, choice: impl Into<String>) {
        let question = question.into();
        let choice = choice.into();
        debug!("选择答案: {} -> {}", question, choice);
        self.responses.insert(question, choice);
    }

    /// 提交
    ///
    /// # 返回
    /// - 未答完：设置校验错误标记，返回 `IncompleteSubmission`，不调用 `sink`
    /// - 已答完：清除校验错误标记，把数据交给 `sink`，
    ///   成功后设置已提交标记
    pub fn submit(&mut self, sink: &dyn SubmissionSink) -> FormResult<SubmissionPayload> {
        if !self.is_complete() {
            let missing = self.missing_questions();
            debug!("提交被拒绝，未回答的问题: {:?}", missing);
            self.validation_error = true;
            return Err(FormError::IncompleteSubmission { missing });
        }

        self.validation_error = false;
        let payload = self.build_payload();
        sink.accept(&payload)?;
        self.submitted = true;

        info!("✓ 反馈已提交 ({} 个问题)", payload.feedback.questions.len());
        Ok(payload)
    }

    fn build_payload(&self) -> SubmissionPayload {
        let choices = self
            .questions
            .iter()
            .map(|q| self.responses.get(q).cloned().unwrap_or_default())
            .collect();
        SubmissionPayload::new(self.questions.clone(), choices)
    }

    /// 未回答问题的索引（按问题顺序）
    pub fn missing_questions(&self) -> Vec<usize> {
        self.questions
            .iter()
            .enumerate()
            .filter(|(_, q)| !self.responses.contains_key(q.as_str()))
            .map(|(idx, _)| idx)
            .collect()
    }

    /// 是否所有问题都已回答
    pub fn is_complete(&self) -> bool {
        self.questions
            .iter()
            .all(|q| self.responses.contains_key(q.as_str()))
    }

    pub fn phase(&self) -> FormPhase {
        if !self.load_settled {
            FormPhase::Loading
        } else if self.validation_error {
            FormPhase::Invalid
        } else if self.submitted {
            FormPhase::Submitted
        } else {
            FormPhase::Ready
        }
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    /// 某个问题的选项，缺失时为空
    pub fn choices_for(&self, index: usize) -> &[String] {
        self.choices.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn metadata(&self) -> &FormMetadata {
        &self.metadata
    }

    /// 某个问题当前的答案
    pub fn response_for(&self, question: &str) -> Option<&str> {
        self.responses.get(question).map(String::as_str)
    }

    /// 已记录答案的数量（按问题文本计）
    pub fn response_count(&self) -> usize {
        self.responses.len()
    }

    pub fn validation_error(&self) -> bool {
        self.validation_error
    }

    pub fn submitted(&self) -> bool {
        self.submitted
    }
}
