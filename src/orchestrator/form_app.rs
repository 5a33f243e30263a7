//! 反馈表单应用 - 编排层
//!
//! ## 职责
//!
//! 1. **应用初始化**：根据配置创建题目客户端、诊断通道和提交出口
//! 2. **加载题目**：在独立任务中请求题目，表单关闭（Ctrl-C）时丢弃结果
//! 3. **填写表单**：交互模式逐题选择，或从预设答案文件读取
//! 4. **提交**：未答完时提示并允许补答，答完后交给提交出口
//!
//! 本模块不做校验判断，校验全部由 `FeedbackForm` 完成。

use crate::clients::{QuestionClient, QuestionSource};
use crate::config::Config;
use crate::error::FormError;
use crate::models::{load_answers, ScriptedAnswer, SubmissionPayload};
use crate::services::{
    Diagnostics, FileSink, LogSink, SubmissionSink, TeeSink, TracingDiagnostics,
};
use crate::utils::logging::{log_form_loaded, log_startup, log_submission};
use crate::view::{ask_question, confirm_retry, render_form};
use crate::workflow::FeedbackForm;
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::future::Future;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    source: Arc<dyn QuestionSource>,
    diagnostics: Box<dyn Diagnostics>,
    sink: Box<dyn SubmissionSink>,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        let client = QuestionClient::new(&config).context("无法创建题目客户端")?;

        let mut sink = TeeSink::new().with(LogSink);
        if let Some(path) = &config.submission_log_file {
            info!("📝 提交记录将写入: {}", path);
            sink = sink.with(FileSink::with_path(path));
        }

        Ok(Self::with_parts(
            config,
            Arc::new(client),
            Box::new(TracingDiagnostics),
            Box::new(sink),
        ))
    }

    /// 使用自定义的题目源、诊断通道和提交出口创建
    pub fn with_parts(
        config: Config,
        source: Arc<dyn QuestionSource>,
        diagnostics: Box<dyn Diagnostics>,
        sink: Box<dyn SubmissionSink>,
    ) -> Self {
        Self {
            config,
            source,
            diagnostics,
            sink,
        }
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<()> {
        log_startup(&self.config);

        let Some(mut form) = self.load_form().await else {
            warn!("⚠️ 表单在题目加载完成前被关闭");
            return Ok(());
        };

        log_form_loaded(&form);
        println!("{}", render_form(&form));

        if form.questions().is_empty() {
            warn!("⚠️ 没有可回答的问题，程序结束");
            return Ok(());
        }

        match &self.config.answers_file {
            Some(path) => {
                let answers = load_answers(Path::new(path)).await?;
                self.fill_from_answers(&mut form, &answers)?;
            }
            None => self.fill_interactively(&mut form)?,
        }

        Ok(())
    }

    /// 加载题目，收到 Ctrl-C 时放弃
    pub async fn load_form(&self) -> Option<FeedbackForm> {
        self.load_form_until(async {
            if tokio::signal::ctrl_c().await.is_err() {
                // 无法监听信号时只等加载结果
                futures::future::pending::<()>().await;
            }
        })
        .await
    }

    /// 加载题目，`teardown` 先完成时中止请求并返回 `None`
    ///
    /// 加载失败时仍返回空表单，错误只交给诊断通道
    pub async fn load_form_until<F>(&self, teardown: F) -> Option<FeedbackForm>
    where
        F: Future<Output = ()>,
    {
        let source = Arc::clone(&self.source);
        let mut task = tokio::spawn(async move { source.fetch().await });

        let result = tokio::select! {
            joined = &mut task => joined.unwrap_or_else(|e| {
                error!("❌ 加载任务异常退出: {}", e);
                Err(FormError::source_unavailable("load-task", e))
            }),
            _ = teardown => {
                task.abort();
                return None;
            }
        };

        let mut form = FeedbackForm::new();
        form.apply_load(result, self.diagnostics.as_ref());
        Some(form)
    }

    /// 按预设答案填写并提交一次
    ///
    /// # 返回
    /// 提交成功返回数据；未答完返回 `None`（不视为错误）
    pub fn fill_from_answers(
        &self,
        form: &mut FeedbackForm,
        answers: &[ScriptedAnswer],
    ) -> Result<Option<SubmissionPayload>> {
        for answer in answers {
            if !form.questions().contains(&answer.question) {
                warn!("⚠️ 预设答案中的问题不在表单中: {}", answer.question);
            }
            form.select_choice(answer.question.as_str(), answer.choice.as_str());
        }

        match form.submit(self.sink.as_ref()) {
            Ok(payload) => {
                println!("{}", render_form(form));
                log_submission(&payload);
                Ok(Some(payload))
            }
            Err(FormError::IncompleteSubmission { missing }) => {
                println!("{}", render_form(form));
                for index in missing {
                    warn!("⚠️ 未回答: {}. {}", index + 1, form.questions()[index]);
                }
                Ok(None)
            }
            Err(e) => Err(e).context("提交失败"),
        }
    }

    /// 在终端逐题作答，未答完时只补问缺失的问题
    fn fill_interactively(&self, form: &mut FeedbackForm) -> Result<()> {
        let mut first_round = true;

        loop {
            for index in questions_to_ask(form, first_round) {
                let question = form.questions()[index].clone();
                let current = form.response_for(&question).map(str::to_string);
                let choices = form.choices_for(index).to_vec();

                let picked = ask_question(index, &question, &choices, current.as_deref())?;
                if let Some(choice) = picked {
                    form.select_choice(question, choice);
                }
            }
            first_round = false;

            match form.submit(self.sink.as_ref()) {
                Ok(payload) => {
                    println!("{}", render_form(form));
                    log_submission(&payload);
                    return Ok(());
                }
                Err(e) if e.is_incomplete() => {
                    println!("{}", render_form(form));
                    if !confirm_retry()? {
                        info!("已放弃填写，未提交");
                        return Ok(());
                    }
                }
                Err(e) => return Err(e).context("提交失败"),
            }
        }
    }
}

/// 本轮需要询问的问题索引
///
/// 第一轮询问全部问题；之后只补问未回答的问题。
/// 重复的问题共享答案，只问第一个。
fn questions_to_ask(form: &FeedbackForm, first_round: bool) -> Vec<usize> {
    if first_round {
        return (0..form.questions().len()).collect();
    }

    let mut seen = HashSet::new();
    form.missing_questions()
        .into_iter()
        .filter(|&index| seen.insert(form.questions()[index].as_str()))
        .collect()
}
