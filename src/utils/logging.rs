/// 日志工具模块
///
/// 提供日志初始化和输出的辅助函数
use crate::config::Config;
use crate::models::SubmissionPayload;
use crate::workflow::FeedbackForm;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// 优先使用 `RUST_LOG`；否则按 `config.verbose_logging` 选择 debug / info。
/// 重复调用不会报错。
pub fn init(config: &Config) {
    let fallback = default_directive(config.verbose_logging);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 未设置 `RUST_LOG` 时使用的日志级别
fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 反馈表单启动 - {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));
    info!("🌐 题目接口: {} (unitID={})", config.questions_endpoint(), config.unit_id);
    match &config.answers_file {
        Some(path) => info!("📄 预设答案模式: {}", path),
        None => info!("⌨️ 交互模式"),
    }
    info!("{}", "=".repeat(60));
}

/// 记录表单加载结果
pub fn log_form_loaded(form: &FeedbackForm) {
    let metadata = form.metadata();
    info!(
        "📋 单位: {} | 问题: {} 个",
        metadata.unit_name.as_deref().unwrap_or("(未命名)"),
        form.questions().len()
    );
    for (index, question) in form.questions().iter().enumerate() {
        info!(
            "  {}. {} [{} 个选项]",
            index + 1,
            truncate_text(question, 40),
            form.choices_for(index).len()
        );
    }
}

/// 打印提交结果
pub fn log_submission(payload: &SubmissionPayload) {
    info!("\n{}", "─".repeat(60));
    info!("✅ 提交完成");
    for (question, choice) in payload.pairs() {
        info!("  {} → {}", truncate_text(question, 40), choice);
    }
    info!("{}", "─".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度（按字符计）
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
