use super::event::AppEvent;
use super::mode::AppMode;
use super::render_state::RenderState;
use super::state::VitalsForm;
use crate::engine::config::{Config, Language, VitalsConfig};
use crate::input::{self, LoadError, LoadedTranscripts};
use crate::numbers::NumberParser;
use crate::vitals::{classify, messages, Answer, VitalField};
use tracing::{debug, info, warn};

/// Voice form session: walks the vitals fields one transcript at a time
pub struct App {
    mode: AppMode,
    language: Language,
    form: VitalsForm,
    vitals: VitalsConfig,
    parser: NumberParser<'static>,
    heard: Option<String>,
    status: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        Self {
            mode: AppMode::Prompting(VitalField::ALL[0]),
            language: config.language,
            form: VitalsForm::new(),
            vitals: config.vitals.clone(),
            parser: NumberParser::default(),
            heard: None,
            status: None,
        }
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn form(&self) -> &VitalsForm {
        &self.form
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Show a message in the status line without touching the form
    pub fn notice(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Transcript(text) => self.handle_transcript(&text),
            AppEvent::LoadFile(path) => {
                let result = input::file::load(&path);
                self.replay(result);
            }
            AppEvent::LoadClipboard => {
                let result = input::clipboard::load();
                self.replay(result);
            }
            AppEvent::SetLanguage(language) => {
                info!(event = "language_changed", language = language.code());
                self.language = language;
                self.status = Some(format!("{}: {}", language.code(), language.name()));
            }
            AppEvent::Skip => {
                if let Some(field) = self.mode.field() {
                    self.skip(field);
                }
            }
            AppEvent::Back => self.back(),
            AppEvent::Reset => {
                info!(event = "form_reset");
                self.form.reset();
                self.heard = None;
                self.status = None;
                self.mode = AppMode::Prompting(VitalField::ALL[0]);
            }
            AppEvent::Quit => {
                info!(event = "quit", filled = self.form.filled_count());
                self.mode = AppMode::Quit;
            }
            AppEvent::Help => {
                self.status = Some(messages::help(self.language));
            }
            AppEvent::InvalidCommand(input) => {
                self.status = Some(format!("Unknown command: {}", input));
            }
            AppEvent::None => {}
        }
    }

    /// Feed one transcript into the form
    pub fn handle_transcript(&mut self, transcript: &str) {
        let transcript = transcript.trim();
        if transcript.is_empty() {
            return;
        }

        let answer = classify(transcript, &self.parser);
        debug!(mode = self.mode.name(), answer = answer_kind(&answer));

        match (self.mode, answer) {
            (AppMode::Complete | AppMode::Quit, _) => return,
            (AppMode::Prompting(field) | AppMode::Confirming { field, .. }, Answer::Skip) => {
                self.skip(field);
            }
            (AppMode::Prompting(field) | AppMode::Confirming { field, .. }, Answer::Number(value)) => {
                self.propose(field, value);
            }
            (AppMode::Prompting(field), Answer::Yes | Answer::No | Answer::Unrecognized) => {
                info!(field = field.key(), outcome = "not_understood");
                self.status = Some(messages::not_understood(self.language));
            }
            (AppMode::Confirming { field, value }, Answer::Yes) => {
                info!(field = field.key(), outcome = "accepted");
                self.form.set(field, value);
                self.status = Some(messages::next_field(self.language));
                self.advance(field);
            }
            (AppMode::Confirming { field, .. }, Answer::No) => {
                info!(field = field.key(), outcome = "rejected");
                self.status = Some(messages::retry(self.language));
                self.mode = AppMode::Prompting(field);
            }
            (AppMode::Confirming { field, value }, Answer::Unrecognized) => {
                self.status = Some(messages::confirm(self.language, value, field));
            }
        }

        self.heard = Some(transcript.to_string());
    }

    pub fn get_render_state(&self) -> RenderState {
        let (field_label, prompt) = match self.mode {
            AppMode::Prompting(field) => (
                Some(field.label(self.language)),
                field.prompt(self.language).to_string(),
            ),
            AppMode::Confirming { field, value } => (
                Some(field.label(self.language)),
                messages::confirm(self.language, value, field),
            ),
            AppMode::Complete | AppMode::Quit => (None, messages::complete(self.language)),
        };

        let total = VitalField::ALL.len();
        let progress = match self.mode.field() {
            Some(field) => (field.index(), total),
            None => (total, total),
        };

        RenderState {
            mode: self.mode,
            language: self.language,
            field_label,
            prompt,
            heard: self.heard.clone(),
            status: self.status.clone(),
            readings: RenderState::readings_for(self.language, self.form.iter()),
            progress,
        }
    }

    fn propose(&mut self, field: VitalField, value: u32) {
        let range = self.vitals.range(field);
        if range.contains(&value) {
            info!(field = field.key(), outcome = "heard");
            self.status = None;
            self.mode = AppMode::Confirming { field, value };
        } else {
            info!(field = field.key(), outcome = "out_of_range");
            self.status = Some(messages::out_of_range(self.language, value, range));
            self.mode = AppMode::Prompting(field);
        }
    }

    fn skip(&mut self, field: VitalField) {
        info!(field = field.key(), outcome = "skipped");
        self.status = Some(messages::skipped(self.language));
        self.advance(field);
    }

    fn advance(&mut self, from: VitalField) {
        match from.next() {
            Some(next) => self.mode = AppMode::Prompting(next),
            None => {
                info!(event = "form_complete", filled = self.form.filled_count());
                self.status = Some(messages::complete(self.language));
                self.mode = AppMode::Complete;
            }
        }
    }

    fn back(&mut self) {
        self.mode = match self.mode {
            AppMode::Prompting(field) => AppMode::Prompting(field.previous().unwrap_or(field)),
            AppMode::Confirming { field, .. } => AppMode::Prompting(field),
            AppMode::Complete => AppMode::Prompting(VitalField::ALL[VitalField::ALL.len() - 1]),
            AppMode::Quit => AppMode::Quit,
        };
        self.status = None;
    }

    fn replay(&mut self, result: Result<LoadedTranscripts, LoadError>) {
        match result {
            Ok(loaded) => {
                info!(
                    event = "transcripts_loaded",
                    source = %loaded.source,
                    lines = loaded.lines.len()
                );
                for line in &loaded.lines {
                    if matches!(self.mode, AppMode::Complete | AppMode::Quit) {
                        break;
                    }
                    self.handle_transcript(line);
                }
            }
            Err(err) => {
                warn!(error = %err, "failed to load transcripts");
                self.status = Some(err.to_string());
            }
        }
    }
}

fn answer_kind(answer: &Answer) -> &'static str {
    match answer {
        Answer::Skip => "skip",
        Answer::Yes => "yes",
        Answer::No => "no",
        Answer::Number(_) => "number",
        Answer::Unrecognized => "unrecognized",
    }
}
