//! 编排层（Orchestration Layer）
//!
//! ## 层次关系
//!
//! ```text
//! orchestrator::App (加载 / 填写 / 提交)
//!     ↓
//! workflow::FeedbackForm (表单状态与校验)
//!     ↓
//! clients (题目源) / services (诊断通道、提交出口) / view (渲染、终端交互)
//! ```

pub mod form_app;

pub use form_app::App;
