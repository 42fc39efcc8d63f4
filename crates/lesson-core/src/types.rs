//! Core type definitions for lesson data

use serde::{Deserialize, Serialize};

/// A complete lesson: one audio reference, one transcript, a vocabulary list.
///
/// Loaded once at startup and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lesson {
    /// Title shown in the header
    #[serde(default)]
    pub title: Option<String>,
    /// URI or file path of the audio resource; playback is delegated to an
    /// external media player
    pub audio: String,
    /// Full transcript text, segmented on demand
    pub transcript: String,
    /// Vocabulary entries in lesson order
    #[serde(default)]
    pub vocabulary: Vec<VocabEntry>,
}

impl Lesson {
    /// Display title for the header
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Shadowing lesson")
    }
}

/// A single vocabulary card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabEntry {
    pub word: String,
    pub definition: String,
    #[serde(default)]
    pub example: Option<String>,
}

impl VocabEntry {
    /// An entry needs a non-empty word and definition to be shown as a
    /// normal card; anything else gets a placeholder in the list.
    pub fn is_complete(&self) -> bool {
        !self.word.trim().is_empty() && !self.definition.trim().is_empty()
    }
}

/// The three views of the lesson
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    /// Audio playback
    #[default]
    Listening,
    /// Transcript broken into sentence segments
    Shadowing,
    /// Vocabulary cards with expandable examples
    Vocabulary,
}

impl ActiveView {
    /// All views in tab order
    pub fn all() -> &'static [ActiveView] {
        &[
            ActiveView::Listening,
            ActiveView::Shadowing,
            ActiveView::Vocabulary,
        ]
    }

    /// Get view from key (1-3)
    pub fn from_key(key: char) -> Option<ActiveView> {
        match key {
            '1' => Some(ActiveView::Listening),
            '2' => Some(ActiveView::Shadowing),
            '3' => Some(ActiveView::Vocabulary),
            _ => None,
        }
    }

    /// Next view in tab order, wrapping
    pub fn next(&self) -> ActiveView {
        match self {
            ActiveView::Listening => ActiveView::Shadowing,
            ActiveView::Shadowing => ActiveView::Vocabulary,
            ActiveView::Vocabulary => ActiveView::Listening,
        }
    }

    /// Get display name
    pub fn name(&self) -> &'static str {
        match self {
            ActiveView::Listening => "Listening",
            ActiveView::Shadowing => "Shadowing",
            ActiveView::Vocabulary => "Vocabulary",
        }
    }
}

impl std::fmt::Display for ActiveView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Playback state reported by the external media player boundary
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AudioStatus {
    #[default]
    Idle,
    Playing,
    /// Playback could not start or exited abnormally; the message is shown
    /// to the user as a fallback, the underlying error goes to the log
    Failed(String),
}

impl AudioStatus {
    pub fn is_playing(&self) -> bool {
        matches!(self, AudioStatus::Playing)
    }

    pub fn failure_message(&self) -> Option<&str> {
        match self {
            AudioStatus::Failed(msg) => Some(msg.as_str()),
            _ => None,
        }
    }
}
