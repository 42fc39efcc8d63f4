//! Listening view: audio reference and playback status

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::App;
use lesson_core::AudioStatus;

/// Render the Listening view
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Listening ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let mut lines: Vec<Line> = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Audio: ", Style::default().fg(Color::DarkGray)),
            Span::styled(app.lesson.audio.clone(), Style::default().fg(Color::White)),
        ]),
        Line::from(""),
    ];

    if !app.audio_enabled {
        lines.push(Line::from(Span::styled(
            "Audio playback is disabled (--no-audio).",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        match &app.audio_status {
            AudioStatus::Idle => {
                lines.push(Line::from(Span::styled(
                    "Press p or Space to play.",
                    Style::default().fg(Color::Green),
                )));
            }
            AudioStatus::Playing => {
                lines.push(Line::from(Span::styled(
                    "▶ Playing - press p or Space to stop.",
                    Style::default().fg(Color::Green).bold(),
                )));
            }
            AudioStatus::Failed(msg) => {
                // Fallback text instead of playback; the platform error is
                // already in the log
                lines.push(Line::from(Span::styled(
                    "Audio could not be played.",
                    Style::default().fg(Color::Red).bold(),
                )));
                lines.push(Line::from(Span::styled(
                    msg.clone(),
                    Style::default().fg(Color::Red),
                )));
            }
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Listen to the whole recording first, then switch to the Shadowing \
         tab and repeat each sentence out loud right after the speaker.",
        Style::default().fg(Color::Gray),
    )));

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}
