//! 诊断通道 - 业务能力层
//!
//! 只面向运维：题目加载失败等错误写到这里，不展示给填写者

use crate::error::FormError;
use tracing::error;

/// 诊断通道
pub trait Diagnostics: Send + Sync {
    /// 上报一个不影响填写流程的错误
    fn report(&self, error: &FormError);
}

/// 写入 tracing 日志的诊断通道
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn report(&self, err: &FormError) {
        match std::error::Error::source(err) {
            Some(cause) => error!("❌ {} (原因: {:?})", err, cause),
            None => error!("❌ {}", err),
        }
    }
}
