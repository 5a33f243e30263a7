use feedback_form::config::Config;
use feedback_form::models::ScriptedAnswer;
use feedback_form::services::LogSink;
use feedback_form::view::{render_form, INCOMPLETE_MESSAGE, SUBMITTED_MESSAGE};
use feedback_form::{
    App, Diagnostics, FeedbackForm, FormError, FormPhase, FormResult, QuestionSheet,
    QuestionSource, SubmissionPayload, SubmissionSink,
};
use futures::future::{self, BoxFuture, FutureExt};
use std::sync::{Arc, Mutex};

// ========== 测试替身 ==========

/// 内存题目源
enum FakeSource {
    Sheet(QuestionSheet),
    Offline,
    Never,
}

impl QuestionSource for FakeSource {
    fn fetch(&self) -> BoxFuture<'_, FormResult<QuestionSheet>> {
        match self {
            FakeSource::Sheet(sheet) => future::ready(Ok(sheet.clone())).boxed(),
            FakeSource::Offline => future::ready(Err(FormError::source_unavailable(
                "memory://questions",
                std::io::Error::new(std::io::ErrorKind::TimedOut, "timed out"),
            )))
            .boxed(),
            FakeSource::Never => future::pending().boxed(),
        }
    }
}

/// 记录所有上报的诊断信息
#[derive(Clone, Default)]
struct SharedDiagnostics(Arc<Mutex<Vec<String>>>);

impl Diagnostics for SharedDiagnostics {
    fn report(&self, error: &FormError) {
        self.0.lock().unwrap().push(error.to_string());
    }
}

/// 记录所有收到的提交
#[derive(Clone, Default)]
struct SharedSink(Arc<Mutex<Vec<SubmissionPayload>>>);

impl SubmissionSink for SharedSink {
    fn name(&self) -> &str {
        "memory"
    }

    fn accept(&self, payload: &SubmissionPayload) -> FormResult<()> {
        self.0.lock().unwrap().push(payload.clone());
        Ok(())
    }
}

fn service_sheet() -> QuestionSheet {
    QuestionSheet {
        feedback_questions: vec!["Service?".to_string(), "Speed?".to_string()],
        choices: vec![
            vec!["Good".to_string(), "Bad".to_string()],
            vec!["Fast".to_string(), "Slow".to_string()],
        ],
        company_logo: Some("https://example.com/logo.png".to_string()),
        unit_name: Some("Main Street".to_string()),
    }
}

async fn loaded_form(source: FakeSource) -> (FeedbackForm, SharedDiagnostics) {
    let diagnostics = SharedDiagnostics::default();
    let mut form = FeedbackForm::new();
    form.load(&source, &diagnostics).await;
    (form, diagnostics)
}

fn app_with(source: FakeSource) -> (App, SharedDiagnostics, SharedSink) {
    let diagnostics = SharedDiagnostics::default();
    let sink = SharedSink::default();
    let app = App::with_parts(
        Config::default(),
        Arc::new(source),
        Box::new(diagnostics.clone()),
        Box::new(sink.clone()),
    );
    (app, diagnostics, sink)
}

// ========== 场景 ==========

#[tokio::test]
async fn test_partial_answers_are_rejected() {
    let (mut form, _) = loaded_form(FakeSource::Sheet(service_sheet())).await;
    let sink = SharedSink::default();

    form.select_choice("Service?", "Good");
    let result = form.submit(&sink);

    assert!(matches!(result, Err(FormError::IncompleteSubmission { .. })));
    assert!(form.validation_error());
    assert!(!form.submitted());
    assert!(sink.0.lock().unwrap().is_empty());
    assert!(render_form(&form).contains(INCOMPLETE_MESSAGE));
}

#[tokio::test]
async fn test_complete_answers_are_submitted() {
    let (mut form, _) = loaded_form(FakeSource::Sheet(service_sheet())).await;
    let sink = SharedSink::default();

    form.select_choice("Service?", "Good");
    form.select_choice("Speed?", "Fast");
    let payload = form.submit(&sink).unwrap();

    assert!(!form.validation_error());
    assert!(form.submitted());
    assert_eq!(form.phase(), FormPhase::Submitted);
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        serde_json::json!({
            "feedback": {
                "questions": ["Service?", "Speed?"],
                "choices": ["Good", "Fast"]
            }
        })
    );
    assert_eq!(sink.0.lock().unwrap().as_slice(), [payload]);
    assert!(render_form(&form).contains(SUBMITTED_MESSAGE));
}

#[tokio::test]
async fn test_empty_metadata_renders_questions_only() {
    let mut sheet = service_sheet();
    sheet.company_logo = None;
    sheet.unit_name = None;
    let (form, diagnostics) = loaded_form(FakeSource::Sheet(sheet)).await;

    let text = render_form(&form);
    assert!(!text.contains("[Logo]"));
    assert!(!text.contains("Main Street"));
    assert!(text.contains("1. Service?"));
    assert!(text.contains("2. Speed?"));
    assert!(diagnostics.0.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_empty_metadata_from_json() {
    let sheet: QuestionSheet = serde_json::from_str(
        concat!(
            r#"{"feedbackQuestions":["Service?"],"choices":[["Good","Bad"]],"#,
            r#""companyLogo":"","unitName":""}"#
        ),
    )
    .unwrap();
    let (form, _) = loaded_form(FakeSource::Sheet(sheet)).await;

    assert_eq!(form.metadata().company_logo, None);
    assert_eq!(form.metadata().unit_name, None);
    assert!(render_form(&form).starts_with("1. Service?"));
}

#[tokio::test]
async fn test_source_failure_leaves_empty_form() {
    let (form, diagnostics) = loaded_form(FakeSource::Offline).await;

    assert!(form.questions().is_empty());
    assert_eq!(form.phase(), FormPhase::Ready);
    assert!(!render_form(&form).contains("1."));

    let reports = diagnostics.0.lock().unwrap();
    assert_eq!(reports.len(), 1);
    assert!(reports[0].contains("memory://questions"));
}

// ========== 性质 ==========

#[tokio::test]
async fn test_submit_succeeds_iff_every_question_answered() {
    let questions = ["Q1?", "Q2?", "Q3?"];
    let sheet = QuestionSheet {
        feedback_questions: questions.iter().map(|q| q.to_string()).collect(),
        choices: vec![vec!["x".to_string()]; 3],
        ..QuestionSheet::default()
    };

    // 遍历所有已答问题的子集
    for mask in 0u8..8 {
        let (mut form, _) = loaded_form(FakeSource::Sheet(sheet.clone())).await;
        for (bit, question) in questions.iter().enumerate() {
            if mask & (1 << bit) != 0 {
                form.select_choice(*question, "x");
            }
        }

        let sink = SharedSink::default();
        let succeeded = form.submit(&sink).is_ok();
        assert_eq!(succeeded, mask == 0b111, "mask {:03b}", mask);
        assert_eq!(sink.0.lock().unwrap().len(), usize::from(succeeded));
    }
}

#[tokio::test]
async fn test_payload_follows_question_order_not_answer_order() {
    let (mut form, _) = loaded_form(FakeSource::Sheet(service_sheet())).await;

    form.select_choice("Speed?", "Slow");
    form.select_choice("Service?", "Bad");
    let payload = form.submit(&LogSink).unwrap();

    assert_eq!(payload.feedback.questions, vec!["Service?", "Speed?"]);
    assert_eq!(payload.feedback.choices, vec!["Bad", "Slow"]);
}

#[tokio::test]
async fn test_reselecting_keeps_last_choice() {
    let (mut form, _) = loaded_form(FakeSource::Sheet(service_sheet())).await;

    form.select_choice("Service?", "Good");
    form.select_choice("Service?", "Bad");

    assert_eq!(form.response_count(), 1);
    assert_eq!(form.response_for("Service?"), Some("Bad"));
}

#[tokio::test]
async fn test_resubmit_without_edits_repeats_payload() {
    let (mut form, _) = loaded_form(FakeSource::Sheet(service_sheet())).await;
    let sink = SharedSink::default();
    form.select_choice("Service?", "Good");
    form.select_choice("Speed?", "Fast");

    let first = form.submit(&sink).unwrap();
    assert_eq!(form.response_count(), 2);
    let second = form.submit(&sink).unwrap();

    assert_eq!(first, second);
    assert_eq!(sink.0.lock().unwrap().len(), 2);
}

// ========== 应用编排 ==========

#[tokio::test]
async fn test_app_loads_and_submits_scripted_answers() {
    let (app, diagnostics, sink) = app_with(FakeSource::Sheet(service_sheet()));

    let mut form = app
        .load_form_until(future::pending::<()>())
        .await
        .expect("form should load");
    let answers = vec![
        ScriptedAnswer {
            question: "Speed?".to_string(),
            choice: "Fast".to_string(),
        },
        ScriptedAnswer {
            question: "Service?".to_string(),
            choice: "Good".to_string(),
        },
    ];

    let payload = app.fill_from_answers(&mut form, &answers).unwrap();

    assert_eq!(
        payload.map(|p| p.feedback.choices),
        Some(vec!["Good".to_string(), "Fast".to_string()])
    );
    assert_eq!(sink.0.lock().unwrap().len(), 1);
    assert!(diagnostics.0.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_app_scripted_answers_incomplete() {
    let (app, _, sink) = app_with(FakeSource::Sheet(service_sheet()));
    let mut form = app.load_form_until(future::pending::<()>()).await.unwrap();
    let answers = vec![ScriptedAnswer {
        question: "Service?".to_string(),
        choice: "Good".to_string(),
    }];

    let payload = app.fill_from_answers(&mut form, &answers).unwrap();

    assert!(payload.is_none());
    assert_eq!(form.phase(), FormPhase::Invalid);
    assert!(sink.0.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_app_reports_load_failure_to_diagnostics() {
    let (app, diagnostics, _) = app_with(FakeSource::Offline);

    let form = app.load_form_until(future::pending::<()>()).await.unwrap();

    assert!(form.questions().is_empty());
    assert_eq!(diagnostics.0.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_app_discards_load_after_teardown() {
    let (app, diagnostics, _) = app_with(FakeSource::Never);

    let form = app.load_form_until(future::ready(())).await;

    assert!(form.is_none());
    assert!(diagnostics.0.lock().unwrap().is_empty());
}
