use anyhow::{Context, Result};
use colored::Colorize;
use livefield::registration::registration_session;
use livefield::{Config, DisplayState, FieldMap, FormSession, InputField, SubmitOutcome};
use livefield_cli::{parse_script, Event};
use std::io::Read;
use std::path::Path;
use tracing::debug;

pub fn execute(config: &Config, script: Option<&Path>, json: bool) -> Result<()> {
    let text = read_script(script)?;
    let events = parse_script(&text)?;
    debug!(count = events.len(), "script parsed");

    let mut session = registration_session(config)?;

    for (line, event) in events {
        apply(&mut session, &event, json).with_context(|| format!("line {}", line))?;
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
    } else {
        print_state(&session);
    }

    Ok(())
}

fn read_script(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script: {:?}", path)),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read script from stdin")?;
            Ok(text)
        }
    }
}

fn apply(session: &mut FormSession, event: &Event, quiet: bool) -> Result<()> {
    match event {
        Event::Change { field, raw } => {
            session.change(field, raw)?;
            if !quiet {
                print_field(session, "change", field);
            }
        }
        Event::Blur { field } => {
            session.blur(field)?;
            if !quiet {
                print_field(session, "blur", field);
            }
        }
        Event::Submit => {
            let mut submitted: Option<FieldMap> = None;
            let outcome = session.submit(&mut |values: &FieldMap| submitted = Some(values.clone()));
            if !quiet {
                print_submit(session, outcome, submitted.as_ref())?;
            }
        }
        Event::Reset => {
            session.reset();
            if !quiet {
                println!("{}", "form reset".dimmed());
            }
        }
        Event::Show => {
            if !quiet {
                print_state(session);
            }
        }
    }
    Ok(())
}

fn print_field(session: &FormSession, action: &str, name: &str) {
    let Some(field) = session.field(name) else {
        return;
    };

    let state = match field.display_state() {
        DisplayState::Valid => "valid".green().to_string(),
        DisplayState::Invalid => "invalid".red().to_string(),
        DisplayState::Neutral => "neutral".dimmed().to_string(),
    };

    let counter = match field.config().max_length {
        Some(max) => format!(" [{}/{}]", field.char_count(), max),
        None => String::new(),
    };

    print!("{:>6} {} = {:?}{} {}", action, name.bold(), field.value(), counter, state);
    if field.is_invalid() {
        if let Some(err) = field.error() {
            print!(" ({})", err.message().red());
        }
    }
    println!();

    if let Some(err) = session.form().error(name) {
        println!("       {} {}", "!".red().bold(), err.red());
    }
}

fn print_submit(
    session: &FormSession,
    outcome: SubmitOutcome,
    submitted: Option<&FieldMap>,
) -> Result<()> {
    match outcome {
        SubmitOutcome::Accepted => {
            println!("{}", "Form submitted successfully!".green().bold());
            if let Some(values) = submitted {
                println!("{}", serde_json::to_string_pretty(values)?);
            }
        }
        SubmitOutcome::Rejected { .. } => {
            println!("{}", "Form has errors and was not submitted:".red().bold());
            for (field, err) in session.form().errors().iter() {
                println!("  - {}: {}", field, err);
            }
        }
    }
    Ok(())
}

fn print_state(session: &FormSession) {
    println!("{}", "Live data:".bold());
    for field in session.fields() {
        let marker = match field.display_state() {
            DisplayState::Valid => "✓".green(),
            DisplayState::Invalid => "✗".red(),
            DisplayState::Neutral => "·".dimmed(),
        };
        println!("  {} {:<12} {:?}", marker, field.name(), field.value());
    }

    let form = session.form();
    if form.submit_attempted() && !form.errors().is_empty() {
        println!("{}", "Errors:".red().bold());
        for (field, err) in form.errors().iter() {
            println!("  - {}: {}", field, err);
        }
    }
}
