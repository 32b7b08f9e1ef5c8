use crate::app::{AppMode, RenderState};
use crate::ui::theme::colors;
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

pub const INPUT_PREFIX: &str = "> ";

pub fn render_header(state: &RenderState) -> Line<'static> {
    let (current, total) = state.progress;
    let step = match state.mode {
        AppMode::Complete | AppMode::Quit => format!("{}/{}", total, total),
        _ => format!("{}/{}", current + 1, total),
    };

    Line::from(vec![
        Span::styled(
            "Vitals voice entry",
            Style::default()
                .fg(colors::accent())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  [{}]  {}", state.language.code(), step),
            Style::default().fg(colors::dimmed()),
        ),
    ])
}

pub fn render_prompt(state: &RenderState) -> Paragraph<'static> {
    let title = state.field_label.unwrap_or("");
    let mut lines = vec![Line::from(Span::styled(
        state.prompt.clone(),
        Style::default().fg(colors::text()),
    ))];

    if let Some(heard) = &state.heard {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("heard: \"{}\"", heard),
            Style::default().fg(colors::dimmed()),
        )));
    }

    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(title))
        .style(Style::default().bg(colors::background()))
}

pub fn render_readings(state: &RenderState) -> Paragraph<'static> {
    let lines: Vec<Line<'static>> = state
        .readings
        .iter()
        .map(|(label, value)| {
            let (text, style) = match value {
                Some(v) => (v.clone(), Style::default().fg(colors::accent())),
                None => ("-".to_string(), Style::default().fg(colors::dimmed())),
            };
            Line::from(vec![
                Span::styled(format!("{:<34}", label), Style::default().fg(colors::text())),
                Span::styled(text, style),
            ])
        })
        .collect();

    Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().bg(colors::background()))
}

pub fn render_status(state: &RenderState) -> Paragraph<'static> {
    let text = state.status.clone().unwrap_or_default();
    Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(colors::warning()).bg(colors::background()))
}

pub fn render_input(input: &str) -> Paragraph<'static> {
    Paragraph::new(format!("{}{}", INPUT_PREFIX, input))
        .alignment(Alignment::Left)
        .style(Style::default().fg(colors::text()).bg(colors::background()))
}

/// Column of the cursor after `input`, measured in terminal cells
pub fn cursor_column(input: &str) -> u16 {
    let width = UnicodeWidthStr::width(INPUT_PREFIX) + UnicodeWidthStr::width(input);
    u16::try_from(width).unwrap_or(u16::MAX)
}

pub fn render_progress_bar(progress: (usize, usize)) -> Line<'static> {
    let (current, total) = progress;
    let filled_len = if total == 0 {
        0
    } else {
        (current * 20 / total).min(20)
    };
    let empty_len = 20 - filled_len;

    Line::from(vec![
        Span::styled("─".repeat(filled_len), Style::default().fg(colors::accent())),
        Span::styled("─".repeat(empty_len), Style::default().fg(colors::dimmed())),
    ])
    .alignment(Alignment::Center)
}
