/// 题目接口客户端
///
/// 封装所有与题目接口相关的调用逻辑
use crate::config::Config;
use crate::error::{FormError, FormResult};
use crate::models::QuestionSheet;
use futures::future::{BoxFuture, FutureExt};
use std::time::Duration;
use tracing::{debug, info, warn};

/// 题目源
///
/// 表单只依赖这一个读取能力，测试中可以替换为内存实现
pub trait QuestionSource: Send + Sync {
    /// 获取题目、选项和展示信息
    fn fetch(&self) -> BoxFuture<'_, FormResult<QuestionSheet>>;
}

/// 基于 HTTP 的题目客户端
pub struct QuestionClient {
    http: reqwest::Client,
    endpoint: String,
    unit_id: String,
}

impl QuestionClient {
    /// 创建新的题目客户端
    pub fn new(config: &Config) -> FormResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| FormError::Config(format!("无法创建 HTTP 客户端: {}", e)))?;

        Ok(Self {
            http,
            endpoint: config.questions_endpoint(),
            unit_id: config.unit_id.clone(),
        })
    }

    /// 请求题目
    ///
    /// # 返回
    /// 网络错误、非 2xx 状态码、JSON 解析失败统一返回 `SourceUnavailable`
    pub async fn fetch_sheet(&self) -> FormResult<QuestionSheet> {
        debug!("请求题目: {}?unitID={}", self.endpoint, self.unit_id);

        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("unitID", &self.unit_id)])
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| FormError::source_unavailable(&self.endpoint, e))?;

        let sheet: QuestionSheet = response
            .json()
            .await
            .map_err(|e| FormError::source_unavailable(&self.endpoint, e))?;

        info!("✓ 获取到 {} 个问题", sheet.feedback_questions.len());

        if sheet.choices.len() != sheet.feedback_questions.len() {
            warn!(
                "⚠️ 选项组数量 ({}) 与问题数量 ({}) 不一致",
                sheet.choices.len(),
                sheet.feedback_questions.len()
            );
        }

        Ok(sheet)
    }
}

impl QuestionSource for QuestionClient {
    fn fetch(&self) -> BoxFuture<'_, FormResult<QuestionSheet>> {
        self.fetch_sheet().boxed()
    }
}
