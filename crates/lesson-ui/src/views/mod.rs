//! View renderers and the view router
//!
//! Three views:
//! - Listening: audio reference and playback status
//! - Shadowing: transcript segments with a persistent highlight
//! - Vocabulary: word cards, one expandable example at a time

pub mod listening;
pub mod shadowing;
pub mod vocabulary;

use ratatui::prelude::*;

use crate::App;
use lesson_core::ActiveView;

/// Route the main content area to exactly one view renderer
pub fn render_view(frame: &mut Frame, area: Rect, app: &App) {
    match app.active_view() {
        ActiveView::Listening => listening::render(frame, area, app),
        ActiveView::Shadowing => shadowing::render(frame, area, app),
        ActiveView::Vocabulary => vocabulary::render(frame, area, app),
    }
}
