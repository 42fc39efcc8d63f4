//! Shadowing view: transcript segments with a persistent highlight

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::App;

/// Render the Shadowing view
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Shadowing ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if app.segments.is_empty() {
        let fallback = Paragraph::new("No transcript available for this lesson.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(fallback, area);
        return;
    }

    let items: Vec<ListItem> = app
        .segments
        .iter()
        .enumerate()
        .map(|(i, segment)| {
            let is_active = app.selection.active_segment == Some(i);

            let marker = if is_active { "▶ " } else { "  " };
            let style = if is_active {
                Style::default().fg(Color::Yellow).bold()
            } else {
                Style::default()
            };

            let spans = vec![
                Span::styled(marker, style),
                Span::styled(format!("{:>2}. ", i + 1), style.fg(Color::DarkGray)),
                Span::styled(segment.text.clone(), style),
            ];

            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    state.select(Some(app.segment_cursor));

    frame.render_stateful_widget(list, area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use lesson_core::Lesson;
    use ratatui::{backend::TestBackend, Terminal};

    fn rendered_text(app: &App) -> String {
        let backend = TestBackend::new(80, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), app))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer.cell((x, y)).unwrap().symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_empty_transcript_renders_fallback() {
        let app = App::new(Lesson {
            title: None,
            audio: "lesson.mp3".to_string(),
            transcript: String::new(),
            vocabulary: Vec::new(),
        });
        let text = rendered_text(&app);
        assert!(
            text.contains("No transcript available"),
            "fallback missing: {text}"
        );
    }

    #[test]
    fn test_segments_render_with_numbering() {
        let app = App::new(Lesson {
            title: None,
            audio: "lesson.mp3".to_string(),
            transcript: "Một. Hai.".to_string(),
            vocabulary: Vec::new(),
        });
        let text = rendered_text(&app);
        assert!(text.contains("1. Một."));
        assert!(text.contains("2. Hai."));
    }
}
