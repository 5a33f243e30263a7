pub mod form_view;
pub mod prompt;

pub use form_view::{render_form, INCOMPLETE_MESSAGE, SUBMITTED_MESSAGE};
pub use prompt::{ask_question, confirm_retry};
