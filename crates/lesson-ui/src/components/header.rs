//! Header component with the tab bar

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::App;
use lesson_core::ActiveView;

/// Render the header: lesson title plus the three-tab bar
pub fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let title = app.title();

    let tabs_display: String = ActiveView::all()
        .iter()
        .enumerate()
        .map(|(i, view)| {
            let label = format!("{}:{}", i + 1, view.name());
            if *view == app.active_view() {
                format!("[{}]", label)
            } else {
                label
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    let header_text = format!("{} │ {}", title, tabs_display);

    let header = Paragraph::new(header_text)
        .style(Style::default().fg(Color::Cyan).bold())
        .block(Block::default().borders(Borders::BOTTOM));

    frame.render_widget(header, area);
}
