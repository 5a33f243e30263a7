pub mod diagnostics;
pub mod submission_sink;

pub use diagnostics::{Diagnostics, TracingDiagnostics};
pub use submission_sink::{FileSink, LogSink, SubmissionSink, TeeSink};
