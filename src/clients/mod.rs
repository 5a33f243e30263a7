pub mod question_client;

pub use question_client::{QuestionClient, QuestionSource};
