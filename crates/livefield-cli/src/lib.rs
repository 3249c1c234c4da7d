// Event script support for the livefield CLI

pub mod script;

pub use script::{parse_script, Event, ScriptError};
