use crate::app::{App, AppEvent, AppMode};
use crate::engine::config::UiConfig;
use crate::ui::command::{command_to_app_event, parse_command};
use crate::ui::render::{
    cursor_column, render_header, render_input, render_progress_bar, render_prompt,
    render_readings, render_status,
};
use crate::ui::terminal_guard::TerminalGuard;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;

/// Line editor state for the input row
#[derive(Debug, Default, Clone, PartialEq)]
pub struct InputLine {
    buffer: String,
    max_len: usize,
}

impl InputLine {
    pub fn new(max_len: usize) -> Self {
        Self {
            buffer: String::new(),
            max_len,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn push(&mut self, c: char) {
        if self.buffer.chars().count() < self.max_len {
            self.buffer.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Take the current line, leaving the editor empty
    pub fn submit(&mut self) -> String {
        std::mem::take(&mut self.buffer)
    }
}

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    input: InputLine,
    tick: Duration,
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new(config: &UiConfig) -> Result<Self, io::Error> {
        let guard = TerminalGuard::new()?;

        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            input: InputLine::new(config.max_input_len),
            tick: Duration::from_millis(config.tick_ms),
            _guard: guard,
        })
    }

    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<AppMode> {
        self.render_frame(app)?;

        loop {
            if app.mode() == AppMode::Quit {
                return Ok(AppMode::Quit);
            }

            if event::poll(self.tick)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(app, key);
                    }
                }
            }

            self.render_frame(app)?;
        }
    }

    fn handle_key(&mut self, app: &mut App, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.handle_event(AppEvent::Quit);
            }
            KeyCode::Char(c) => self.input.push(c),
            KeyCode::Backspace => self.input.backspace(),
            KeyCode::Esc => self.input.clear(),
            KeyCode::Enter => {
                let line = self.input.submit();
                app.handle_event(command_to_app_event(parse_command(&line)));
            }
            _ => {}
        }
    }

    pub fn render_frame(&mut self, app: &App) -> io::Result<()> {
        let render_state = app.get_render_state();
        let input = self.input.as_str();

        self.terminal.draw(|frame| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1),
                    Constraint::Length(1),
                    Constraint::Min(5),
                    Constraint::Length(6),
                    Constraint::Length(2),
                    Constraint::Length(1),
                ])
                .split(frame.area());

            frame.render_widget(render_header(&render_state), chunks[0]);
            frame.render_widget(render_progress_bar(render_state.progress), chunks[1]);
            frame.render_widget(render_prompt(&render_state), chunks[2]);
            frame.render_widget(render_readings(&render_state), chunks[3]);
            frame.render_widget(render_status(&render_state), chunks[4]);
            frame.render_widget(render_input(input), chunks[5]);

            let input_area = chunks[5];
            let x = input_area
                .x
                .saturating_add(cursor_column(input))
                .min(input_area.right().saturating_sub(1));
            frame.set_cursor_position((x, input_area.y));
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_line_edit_and_submit() {
        let mut line = InputLine::new(16);
        for c in "mia moja".chars() {
            line.push(c);
        }
        line.backspace();
        line.push('a');
        assert_eq!(line.as_str(), "mia moja");
        assert_eq!(line.submit(), "mia moja");
        assert_eq!(line.as_str(), "");
    }

    #[test]
    fn test_input_line_respects_max_len() {
        let mut line = InputLine::new(3);
        for c in "seventy".chars() {
            line.push(c);
        }
        assert_eq!(line.as_str(), "sev");
    }

    #[test]
    fn test_input_line_clear() {
        let mut line = InputLine::new(8);
        line.push('x');
        line.clear();
        assert_eq!(line.as_str(), "");
    }
}
