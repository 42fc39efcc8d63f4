//! Event handling for the TUI

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use lesson_core::ActiveView;

/// Actions that can be triggered by events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Quit the application
    Quit,
    /// Switch to a view directly (1-3)
    SelectView(ActiveView),
    /// Cycle to the next view
    NextView,
    /// Move cursor up
    CursorUp,
    /// Move cursor down
    CursorDown,
    /// Jump to first entry
    CursorFirst,
    /// Jump to last entry
    CursorLast,
    /// Primary action at the cursor (select segment / toggle example)
    Activate,
    /// Start or stop audio playback
    TogglePlayback,
    /// Toggle help overlay
    ToggleHelp,
    /// Redraw screen
    Redraw,
    /// No action
    None,
}

/// Handle a terminal event and return the corresponding action
pub fn handle_event(event: Event, active_view: ActiveView) -> AppAction {
    match event {
        Event::Key(key) => handle_key(key, active_view),
        Event::Resize(_, _) => AppAction::Redraw,
        _ => AppAction::None,
    }
}

/// Handle a key event
fn handle_key(key: KeyEvent, active_view: ActiveView) -> AppAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => AppAction::Quit,
            KeyCode::Char('l') => AppAction::Redraw,
            _ => AppAction::None,
        };
    }

    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Esc => AppAction::Quit,

        // Navigation (vim-style)
        KeyCode::Char('j') | KeyCode::Down => AppAction::CursorDown,
        KeyCode::Char('k') | KeyCode::Up => AppAction::CursorUp,
        KeyCode::Char('g') | KeyCode::Home => AppAction::CursorFirst,
        KeyCode::Char('G') | KeyCode::End => AppAction::CursorLast,

        // View switching
        KeyCode::Tab => AppAction::NextView,
        KeyCode::Char(c @ '1'..='3') => match ActiveView::from_key(c) {
            Some(view) => AppAction::SelectView(view),
            None => AppAction::None,
        },

        // Primary action
        KeyCode::Enter => AppAction::Activate,

        // Playback: 'p' works everywhere, Space doubles as the primary
        // action outside the Listening view
        KeyCode::Char('p') => AppAction::TogglePlayback,
        KeyCode::Char(' ') => {
            if active_view == ActiveView::Listening {
                AppAction::TogglePlayback
            } else {
                AppAction::Activate
            }
        }

        // Overlays
        KeyCode::Char('?') => AppAction::ToggleHelp,

        // Redraw
        KeyCode::Char('r') => AppAction::Redraw,

        _ => AppAction::None,
    }
}

/// Key binding help text
pub const HELP_TEXT: &str = r#"
╭─────────────────────────────────────────╮
│             shadow-tui                  │
│            Key Bindings                 │
├─────────────────────────────────────────┤
│                                         │
│  Views                                  │
│  ─────                                  │
│  1           Listening (audio)          │
│  2           Shadowing (transcript)     │
│  3           Vocabulary (cards)         │
│  Tab         Next view                  │
│                                         │
│  Navigation                             │
│  ──────────                             │
│  j/k, ↑/↓    Move cursor up/down        │
│  g/G         First/last entry           │
│                                         │
│  Actions                                │
│  ───────                                │
│  Enter       Highlight segment /        │
│              expand vocabulary example  │
│  p, Space    Play/stop audio            │
│                                         │
│  Other                                  │
│  ─────                                  │
│  r           Redraw screen              │
│  ?           Show this help             │
│  q, Esc      Quit                       │
│                                         │
╰─────────────────────────────────────────╯
"#;
