use std::str::FromStr;
use tracing::warn;

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 题目接口基础地址
    pub api_base_url: String,
    /// 题目接口路径
    pub questions_path: String,
    /// 单位ID（作为 `unitID` 查询参数发送）
    pub unit_id: String,
    /// 请求超时（秒）
    pub request_timeout_secs: u64,
    /// 预设答案文件（TOML），为空时进入交互模式
    pub answers_file: Option<String>,
    /// 提交记录文件，为空时只写日志
    pub submission_log_file: Option<String>,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "https://brijfeedback.pythonanywhere.com".to_string(),
            questions_path: "/api/get-feedback-questions/".to_string(),
            unit_id: "1".to_string(),
            request_timeout_secs: 10,
            answers_file: None,
            submission_log_file: None,
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            api_base_url: std::env::var("FEEDBACK_API_BASE_URL").unwrap_or(default.api_base_url),
            questions_path: std::env::var("FEEDBACK_QUESTIONS_PATH")
                .unwrap_or(default.questions_path),
            unit_id: std::env::var("FEEDBACK_UNIT_ID").unwrap_or(default.unit_id),
            request_timeout_secs: parse_env("REQUEST_TIMEOUT_SECS", default.request_timeout_secs),
            answers_file: non_empty_env("ANSWERS_FILE").or(default.answers_file),
            submission_log_file: non_empty_env("SUBMISSION_LOG_FILE")
                .or(default.submission_log_file),
            verbose_logging: parse_env("VERBOSE_LOGGING", default.verbose_logging),
        }
    }

    /// 完整的题目接口地址（不含查询参数）
    pub fn questions_endpoint(&self) -> String {
        let base = self.api_base_url.trim_end_matches('/');
        let path = self.questions_path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }
}

fn non_empty_env(var_name: &str) -> Option<String> {
    std::env::var(var_name).ok().filter(|v| !v.trim().is_empty())
}

/// 读取并解析环境变量，解析失败时回退到默认值
fn parse_env<T: FromStr>(var_name: &str, default: T) -> T {
    match std::env::var(var_name) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("环境变量 {} 的值 '{}' 无法解析，使用默认值", var_name, raw);
            default
        }),
        Err(_) => default,
    }
}
