//! 提交出口 - 业务能力层
//!
//! 只负责"接收已校验的反馈数据"，不关心校验和流程

use crate::error::{FormError, FormResult};
use crate::models::SubmissionPayload;
use serde_json::json;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

/// 提交出口
///
/// 只会收到完整的反馈数据
pub trait SubmissionSink: Send + Sync {
    /// 出口名称（用于日志）
    fn name(&self) -> &str;

    /// 接收一次提交
    fn accept(&self, payload: &SubmissionPayload) -> FormResult<()>;
}

/// 把提交内容写到日志
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl SubmissionSink for LogSink {
    fn name(&self) -> &str {
        "log"
    }

    fn accept(&self, payload: &SubmissionPayload) -> FormResult<()> {
        let body = serde_json::to_string(payload).map_err(|e| FormError::sink_failed("log", e))?;
        info!("📨 收到反馈: {}", body);
        Ok(())
    }
}

/// 追加写入提交记录文件
///
/// 每次提交一行 JSON：`{"submitted_at": ..., "payload": ...}`
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    /// 使用指定文件路径创建
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SubmissionSink for FileSink {
    fn name(&self) -> &str {
        "file"
    }

    fn accept(&self, payload: &SubmissionPayload) -> FormResult<()> {
        let sink = self.path.display().to_string();
        debug!("写入提交记录: {}", sink);

        let record = json!({
            "submitted_at": chrono::Local::now().to_rfc3339(),
            "payload": payload,
        });

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| FormError::sink_failed(&sink, e))?;

        writeln!(file, "{}", record).map_err(|e| FormError::sink_failed(&sink, e))?;

        Ok(())
    }
}

/// 依次转发给多个出口，遇到第一个错误即停止
#[derive(Default)]
pub struct TeeSink {
    sinks: Vec<Box<dyn SubmissionSink>>,
}

impl TeeSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一个出口
    pub fn with(mut self, sink: impl SubmissionSink + 'static) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }
}

impl SubmissionSink for TeeSink {
    fn name(&self) -> &str {
        "tee"
    }

    fn accept(&self, payload: &SubmissionPayload) -> FormResult<()> {
        for sink in &self.sinks {
            sink.accept(payload)?;
            debug!("✓ 出口 {} 已接收", sink.name());
        }
        Ok(())
    }
}
