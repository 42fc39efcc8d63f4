//! CLI argument parsing

use clap::Parser;
use lesson_core::ActiveView;
use std::path::PathBuf;

/// Terminal viewer for Vietnamese shadowing practice lessons
#[derive(Parser, Debug)]
#[command(name = "shadow-tui")]
#[command(version)]
#[command(about = "Interactive TUI for shadowing practice: listen, repeat, review vocabulary")]
pub struct Cli {
    /// Lesson file to open (JSON with audio, transcript and vocabulary)
    ///
    /// When omitted, the bundled sample lesson is used.
    #[arg(value_name = "LESSON")]
    pub lesson: Option<PathBuf>,

    /// Initial tab (1=listening, 2=shadowing, 3=vocabulary)
    #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u8).range(1..=3))]
    pub tab: u8,

    /// Media player command used for audio playback
    ///
    /// The audio reference is passed as the single argument. Defaults to a
    /// platform player (afplay on macOS, mpv elsewhere).
    #[arg(long, env = "SHADOW_TUI_PLAYER")]
    pub player: Option<String>,

    /// Disable audio playback entirely
    #[arg(long)]
    pub no_audio: bool,
}

impl Cli {
    /// Get the initial view
    pub fn initial_view(&self) -> ActiveView {
        match self.tab {
            2 => ActiveView::Shadowing,
            3 => ActiveView::Vocabulary,
            _ => ActiveView::Listening,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_view_mapping() {
        let cli = Cli::parse_from(["shadow-tui", "--tab", "2"]);
        assert_eq!(cli.initial_view(), ActiveView::Shadowing);

        let cli = Cli::parse_from(["shadow-tui"]);
        assert_eq!(cli.initial_view(), ActiveView::Listening);
        assert!(cli.lesson.is_none());
    }

    #[test]
    fn test_rejects_out_of_range_tab() {
        assert!(Cli::try_parse_from(["shadow-tui", "--tab", "4"]).is_err());
    }
}
