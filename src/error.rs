use thiserror::Error;

/// 表单错误类型
#[derive(Debug, Error)]
pub enum FormError {
    /// 题目源不可用（网络、HTTP 状态或 JSON 解析失败）
    ///
    /// 只上报给诊断通道，不展示给用户
    #[error("题目源不可用 ({endpoint}): {source}")]
    SourceUnavailable {
        endpoint: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// 提交时仍有问题未回答
    ///
    /// `missing` 为未回答问题的索引（从0开始）
    #[error("还有 {} 个问题未回答", .missing.len())]
    IncompleteSubmission { missing: Vec<usize> },

    /// 提交出口写入失败
    #[error("提交写入失败 ({sink}): {source}")]
    SinkFailed {
        sink: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// 配置错误
    #[error("配置错误: {0}")]
    Config(String),
}

// ========== 便捷构造函数 ==========

impl FormError {
    /// 创建题目源不可用错误
    pub fn source_unavailable(
        endpoint: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        FormError::SourceUnavailable {
            endpoint: endpoint.into(),
            source: Box::new(source),
        }
    }

    /// 创建提交写入失败错误
    pub fn sink_failed(
        sink: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        FormError::SinkFailed {
            sink: sink.into(),
            source: Box::new(source),
        }
    }

    /// 是否为用户可恢复的未答完错误
    pub fn is_incomplete(&self) -> bool {
        matches!(self, FormError::IncompleteSubmission { .. })
    }
}

/// 表单结果类型
pub type FormResult<T> = Result<T, FormError>;
