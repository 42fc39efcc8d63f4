//! Vocabulary view: word cards with one expandable example at a time

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::App;
use lesson_core::VocabEntry;

/// Render the Vocabulary view
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Vocabulary ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if app.lesson.vocabulary.is_empty() {
        let fallback = Paragraph::new("No vocabulary for this lesson.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(fallback, area);
        return;
    }

    let items: Vec<ListItem> = app
        .lesson
        .vocabulary
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let is_expanded = app.selection.expanded_vocab == Some(i);
            format_card(entry, is_expanded)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    state.select(Some(app.vocab_cursor));

    frame.render_stateful_widget(list, area, &mut state);
}

/// Format a single vocabulary card. An entry missing its word or definition
/// is flagged rather than dropped, so the list length always matches the
/// lesson data and the cursor indices stay valid.
fn format_card(entry: &VocabEntry, is_expanded: bool) -> ListItem<'static> {
    if !entry.is_complete() {
        return ListItem::new(Line::from(Span::styled(
            "  (incomplete entry)",
            Style::default().fg(Color::DarkGray).italic(),
        )));
    }

    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!("  {}", entry.word),
            Style::default().fg(Color::Green).bold(),
        ),
        Span::styled(" — ", Style::default().fg(Color::DarkGray)),
        Span::styled(entry.definition.clone(), Style::default()),
    ])];

    if is_expanded {
        let example = entry
            .example
            .as_deref()
            .unwrap_or("(no example for this word)");
        lines.push(Line::from(Span::styled(
            format!("      {}", example),
            Style::default().fg(Color::Yellow).italic(),
        )));
    }

    ListItem::new(lines)
}
