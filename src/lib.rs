//! # Feedback Form
//!
//! 一个从接口加载问题、逐题单选、校验后提交的反馈表单
//!
//! ## 架构设计
//!
//! ### ① 外部能力层
//! - `clients/` - 题目源（`QuestionSource`），默认实现为 HTTP 客户端
//! - `services/` - 诊断通道（`Diagnostics`）与提交出口（`SubmissionSink`）
//!
//! ### ② 流程层（Workflow）
//! - `workflow/` - `FeedbackForm`，持有问题、选项、答案和两个状态标记
//!
//! ### ③ 展示层（View）
//! - `view/` - 表单文本渲染与终端单选交互
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/` - 应用入口，串起加载、填写、提交
//!
//! ## 模块结构

pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod view;
pub mod workflow;

// 重新导出常用类型
pub use clients::{QuestionClient, QuestionSource};
pub use config::Config;
pub use error::{FormError, FormResult};
pub use models::{FormMetadata, QuestionSheet, SubmissionPayload};
pub use orchestrator::App;
pub use services::{Diagnostics, SubmissionSink};
pub use workflow::{FeedbackForm, FormPhase};
