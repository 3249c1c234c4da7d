// File: src/script.rs
// Purpose: Parse event scripts, one user interaction per line
//
//   change <field> <raw input...>   raw input is everything after the field
//   blur <field>
//   submit
//   reset
//   show
//
// Blank lines and lines starting with '#' are ignored.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Change { field: String, raw: String },
    Blur { field: String },
    Submit,
    Reset,
    Show,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("line {line}: unknown command `{command}`")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: `{command}` needs a field name")]
    MissingField { line: usize, command: String },

    #[error("line {line}: `{command}` takes no arguments")]
    UnexpectedArgument { line: usize, command: String },
}

/// A parsed event with its 1-based line number.
pub type ScriptLine = (usize, Event);

pub fn parse_script(text: &str) -> Result<Vec<ScriptLine>, ScriptError> {
    let mut events = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if let Some(event) = parse_line(idx + 1, line)? {
            events.push((idx + 1, event));
        }
    }
    Ok(events)
}

fn parse_line(line_no: usize, line: &str) -> Result<Option<Event>, ScriptError> {
    let line = line.trim_start().trim_end_matches('\r');
    if line.trim().is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (command, rest) = split_word(line);
    let rest = rest.unwrap_or("");

    let event = match command {
        "change" => {
            let (field, raw) = split_word(rest);
            if field.is_empty() {
                return Err(missing(line_no, command));
            }
            Event::Change {
                field: field.to_string(),
                raw: raw.unwrap_or("").to_string(),
            }
        }
        "blur" => {
            let field = rest.trim();
            if field.is_empty() {
                return Err(missing(line_no, command));
            }
            if field.contains(char::is_whitespace) {
                return Err(unexpected(line_no, command));
            }
            Event::Blur {
                field: field.to_string(),
            }
        }
        "submit" | "reset" | "show" => {
            if !rest.trim().is_empty() {
                return Err(unexpected(line_no, command));
            }
            match command {
                "submit" => Event::Submit,
                "reset" => Event::Reset,
                _ => Event::Show,
            }
        }
        other => {
            return Err(ScriptError::UnknownCommand {
                line: line_no,
                command: other.to_string(),
            })
        }
    };

    Ok(Some(event))
}

/// Splits off the first space-separated word. The remainder keeps its
/// inner and trailing whitespace, minus the single separating space.
fn split_word(s: &str) -> (&str, Option<&str>) {
    match s.split_once(' ') {
        Some((word, rest)) => (word, Some(rest)),
        None => (s, None),
    }
}

fn missing(line: usize, command: &str) -> ScriptError {
    ScriptError::MissingField {
        line,
        command: command.to_string(),
    }
}

fn unexpected(line: usize, command: &str) -> ScriptError {
    ScriptError::UnexpectedArgument {
        line,
        command: command.to_string(),
    }
}
