pub mod feedback_form;

pub use feedback_form::{FeedbackForm, FormPhase};
