pub mod toml_loader;

pub use toml_loader::{load_answers, parse_answers, ScriptedAnswer};
