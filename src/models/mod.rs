pub mod feedback;
pub mod loaders;

pub use feedback::{FeedbackAnswers, FormMetadata, QuestionSheet, SubmissionPayload};
pub use loaders::{load_answers, ScriptedAnswer};
