use serde::{Deserialize, Deserializer, Serialize};

/// 题目接口返回的数据
///
/// `choices` 与 `feedback_questions` 按索引一一对应
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionSheet {
    pub feedback_questions: Vec<String>,
    #[serde(default)]
    pub choices: Vec<Vec<String>>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub company_logo: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub unit_name: Option<String>,
}

impl QuestionSheet {
    /// 拆分为表单需要的三部分
    pub fn into_parts(self) -> (Vec<String>, Vec<Vec<String>>, FormMetadata) {
        let metadata = FormMetadata {
            unit_name: self.unit_name,
            company_logo: self.company_logo,
        };
        (self.feedback_questions, self.choices, metadata)
    }
}

/// 表单的展示信息（单位名称、公司 Logo），均可缺省
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormMetadata {
    pub unit_name: Option<String>,
    pub company_logo: Option<String>,
}

/// 提交给提交出口的数据
///
/// 序列化后为 `{"feedback": {"questions": [...], "choices": [...]}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub feedback: FeedbackAnswers,
}

/// 问题与所选答案，两个列表顺序一致
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackAnswers {
    pub questions: Vec<String>,
    pub choices: Vec<String>,
}

impl SubmissionPayload {
    pub fn new(questions: Vec<String>, choices: Vec<String>) -> Self {
        Self {
            feedback: FeedbackAnswers { questions, choices },
        }
    }

    /// 按顺序遍历 (问题, 答案)
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.feedback
            .questions
            .iter()
            .zip(self.feedback.choices.iter())
            .map(|(q, c)| (q.as_str(), c.as_str()))
    }
}

// 空字符串和 null 都视为缺省
fn deserialize_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|text| !text.trim().is_empty()))
}
