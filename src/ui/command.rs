//! Input line parsing for the voice form
//!
//! Anything typed or pasted is a transcript unless it starts with `:` or `@`:
//! - `:q` or `:quit` → Quit
//! - `:h` or `:help` → Help
//! - `:lang en` / `:lang sw` → switch prompt language
//! - `:skip`, `:back`, `:reset` → form navigation
//! - `@filename` → replay a transcript file
//! - `@@` → read transcript from clipboard

use crate::app::AppEvent;
use crate::engine::config::Language;

/// Commands that can be parsed from the input line
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quit,
    Help,
    SetLanguage(Language),
    Skip,
    Back,
    Reset,
    LoadFile(String),
    LoadClipboard,
    Transcript(String),
    Empty,
    Unknown(String),
}

/// Parse an input line into a Command
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();

    if input.is_empty() {
        return Command::Empty;
    }

    if let Some(cmd) = input.strip_prefix(':') {
        let mut parts = cmd.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("q" | "quit"), None) => Command::Quit,
            (Some("h" | "help"), None) => Command::Help,
            (Some("skip" | "s"), None) => Command::Skip,
            (Some("back" | "b"), None) => Command::Back,
            (Some("reset"), None) => Command::Reset,
            (Some("lang" | "l"), Some(code)) => match code.parse::<Language>() {
                Ok(language) => Command::SetLanguage(language),
                Err(_) => Command::Unknown(input.to_string()),
            },
            _ => Command::Unknown(input.to_string()),
        }
    } else if let Some(rest) = input.strip_prefix('@') {
        let filename = rest.trim();
        if filename.is_empty() || filename == "@" {
            Command::LoadClipboard
        } else {
            Command::LoadFile(filename.to_string())
        }
    } else {
        Command::Transcript(input.to_string())
    }
}

/// Convert a parsed command into an AppEvent
pub fn command_to_app_event(command: Command) -> AppEvent {
    match command {
        Command::Quit => AppEvent::Quit,
        Command::Help => AppEvent::Help,
        Command::SetLanguage(language) => AppEvent::SetLanguage(language),
        Command::Skip => AppEvent::Skip,
        Command::Back => AppEvent::Back,
        Command::Reset => AppEvent::Reset,
        Command::LoadFile(path) => AppEvent::LoadFile(path),
        Command::LoadClipboard => AppEvent::LoadClipboard,
        Command::Transcript(text) => AppEvent::Transcript(text),
        Command::Empty => AppEvent::None,
        Command::Unknown(input) => AppEvent::InvalidCommand(input),
    }
}
