//! shadow-tui - Terminal viewer for Vietnamese shadowing practice lessons
//!
//! Three views over one static lesson: listen to the audio, shadow the
//! transcript sentence by sentence, review the vocabulary.

mod audio;
mod cli;
mod logging;

use std::io::stdout;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use audio::{AudioPlayer, PlayerEvent};
use cli::Cli;
use lesson_ui::{
    components::{render_footer, render_header, render_help_overlay},
    event::{handle_event, AppAction},
    views::render_view,
    App,
};

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    let lesson = match &cli.lesson {
        Some(path) => lesson_core::load_lesson(path)
            .with_context(|| format!("failed to load lesson {}", path.display()))?,
        None => lesson_core::sample_lesson(),
    };

    tracing::info!(
        title = lesson.display_title(),
        vocab = lesson.vocabulary.len(),
        "lesson loaded"
    );

    let mut app = App::new(lesson);
    app.select_view(cli.initial_view());
    app.audio_enabled = !cli.no_audio;

    let player = AudioPlayer::new(cli.player.clone());

    run_tui(app, player)
}

/// Run the TUI application
fn run_tui(mut app: App, mut player: AudioPlayer) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main event loop
    loop {
        // Draw
        terminal.draw(|frame| ui(frame, &app))?;

        // Poll for events; the timeout also paces player-exit polling
        if event::poll(Duration::from_millis(250))? {
            let event = event::read()?;
            let action = handle_event(event, app.active_view());

            match action {
                AppAction::Quit => break,
                AppAction::SelectView(view) => app.select_view(view),
                AppAction::NextView => app.next_view(),
                AppAction::CursorUp => app.cursor_up(),
                AppAction::CursorDown => app.cursor_down(),
                AppAction::CursorFirst => app.cursor_first(),
                AppAction::CursorLast => app.cursor_last(),
                AppAction::Activate => app.activate(),
                AppAction::TogglePlayback => toggle_playback(&mut app, &mut player),
                AppAction::ToggleHelp => app.show_help = !app.show_help,
                AppAction::Redraw => {
                    terminal.clear()?;
                }
                AppAction::None => {}
            }
        }

        // Notice when the player process finished or died on its own
        if app.audio_status.is_playing() {
            match player.poll() {
                Ok(PlayerEvent::NoChange) => {}
                Ok(PlayerEvent::Finished) => app.set_audio_stopped(),
                Err(e) => app.set_audio_failed(e.to_string()),
            }
        }
    }

    // Cleanup
    player.stop();
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    Ok(())
}

/// Start or stop playback and reflect the outcome in the app state.
/// Player failures end here as a visible fallback message, never as an
/// error returned to the event loop.
fn toggle_playback(app: &mut App, player: &mut AudioPlayer) {
    if !app.audio_enabled {
        app.status_message = Some("Audio playback is disabled".to_string());
        return;
    }

    if player.is_active() {
        player.stop();
        app.set_audio_stopped();
        return;
    }

    match player.play(&app.lesson.audio) {
        Ok(()) => app.set_audio_playing(),
        Err(e) => app.set_audio_failed(e.to_string()),
    }
}

/// Render the UI
fn ui(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(0),    // Active view
            Constraint::Length(2), // Footer
        ])
        .split(area);

    render_header(frame, chunks[0], app);
    render_view(frame, chunks[1], app);
    render_footer(frame, chunks[2], app);

    if app.show_help {
        render_help_overlay(frame);
    }
}
