//! Application state and logic

use lesson_core::{
    segment_transcript, ActiveView, AudioStatus, Lesson, Segment, SelectionState,
};

/// Application state
pub struct App {
    /// The loaded lesson (immutable for the session)
    pub lesson: Lesson,
    /// Transcript segments, derived once from the lesson
    pub segments: Vec<Segment>,
    /// Which view is active and what is highlighted/expanded
    pub selection: SelectionState,
    /// Cursor position in the Shadowing segment list
    pub segment_cursor: usize,
    /// Cursor position in the Vocabulary card list
    pub vocab_cursor: usize,
    /// Playback state reported by the audio boundary
    pub audio_status: AudioStatus,
    /// Whether audio playback is available at all (--no-audio disables it)
    pub audio_enabled: bool,
    /// Status message
    pub status_message: Option<String>,
    /// Show help overlay
    pub show_help: bool,
}

impl App {
    /// Create a new app for a lesson
    pub fn new(lesson: Lesson) -> Self {
        let segments = segment_transcript(&lesson.transcript);
        Self {
            lesson,
            segments,
            selection: SelectionState::new(),
            segment_cursor: 0,
            vocab_cursor: 0,
            audio_status: AudioStatus::Idle,
            audio_enabled: true,
            status_message: None,
            show_help: false,
        }
    }

    /// The currently active view
    pub fn active_view(&self) -> ActiveView {
        self.selection.active_view
    }

    /// Switch to a view directly (tab keys 1-3)
    pub fn select_view(&mut self, view: ActiveView) {
        self.selection.select_view(view);
        self.status_message = None;
    }

    /// Cycle to the next view (Tab)
    pub fn next_view(&mut self) {
        self.select_view(self.selection.active_view.next());
    }

    /// Length of the list the cursor moves over in the active view
    fn cursor_list_len(&self) -> usize {
        match self.selection.active_view {
            ActiveView::Listening => 0,
            ActiveView::Shadowing => self.segments.len(),
            ActiveView::Vocabulary => self.lesson.vocabulary.len(),
        }
    }

    fn cursor_mut(&mut self) -> Option<&mut usize> {
        match self.selection.active_view {
            ActiveView::Listening => None,
            ActiveView::Shadowing => Some(&mut self.segment_cursor),
            ActiveView::Vocabulary => Some(&mut self.vocab_cursor),
        }
    }

    /// Move the active view's cursor up
    pub fn cursor_up(&mut self) {
        if let Some(cursor) = self.cursor_mut() {
            *cursor = cursor.saturating_sub(1);
        }
    }

    /// Move the active view's cursor down
    pub fn cursor_down(&mut self) {
        let len = self.cursor_list_len();
        if let Some(cursor) = self.cursor_mut() {
            if *cursor + 1 < len {
                *cursor += 1;
            }
        }
    }

    /// Jump the cursor to the first entry
    pub fn cursor_first(&mut self) {
        if let Some(cursor) = self.cursor_mut() {
            *cursor = 0;
        }
    }

    /// Jump the cursor to the last entry
    pub fn cursor_last(&mut self) {
        let len = self.cursor_list_len();
        if let Some(cursor) = self.cursor_mut() {
            *cursor = len.saturating_sub(1);
        }
    }

    /// Perform the view's primary action at the cursor (Enter):
    /// highlight the segment in Shadowing, toggle the example in Vocabulary.
    pub fn activate(&mut self) {
        match self.selection.active_view {
            ActiveView::Listening => {}
            ActiveView::Shadowing => {
                self.selection
                    .select_segment(self.segment_cursor, self.segments.len());
            }
            ActiveView::Vocabulary => {
                self.selection
                    .toggle_example(self.vocab_cursor, self.lesson.vocabulary.len());
            }
        }
    }

    /// Record that playback started
    pub fn set_audio_playing(&mut self) {
        self.audio_status = AudioStatus::Playing;
        self.status_message = Some("Playing audio".to_string());
    }

    /// Record that playback stopped normally
    pub fn set_audio_stopped(&mut self) {
        self.audio_status = AudioStatus::Idle;
        self.status_message = Some("Playback stopped".to_string());
    }

    /// Record a playback failure. The fallback message is shown in the UI;
    /// the underlying error has already been logged at the boundary.
    pub fn set_audio_failed(&mut self, message: impl Into<String>) {
        self.audio_status = AudioStatus::Failed(message.into());
        self.status_message = None;
    }

    /// Display title for the app
    pub fn title(&self) -> String {
        format!("Shadowing: {}", self.lesson.display_title())
    }

    /// Get status line info
    pub fn status_info(&self) -> String {
        let mut parts = vec![format!("View: {}", self.selection.active_view)];

        match self.selection.active_view {
            ActiveView::Listening => {
                if self.audio_status.is_playing() {
                    parts.push("PLAYING".to_string());
                }
            }
            ActiveView::Shadowing => {
                if !self.segments.is_empty() {
                    parts.push(format!(
                        "Segment {}/{}",
                        self.segment_cursor + 1,
                        self.segments.len()
                    ));
                }
            }
            ActiveView::Vocabulary => {
                if !self.lesson.vocabulary.is_empty() {
                    parts.push(format!(
                        "Card {}/{}",
                        self.vocab_cursor + 1,
                        self.lesson.vocabulary.len()
                    ));
                }
            }
        }

        parts.join(" | ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lesson_core::VocabEntry;

    fn test_lesson() -> Lesson {
        Lesson {
            title: Some("Bài 1".to_string()),
            audio: "lesson.mp3".to_string(),
            transcript: "Một. Hai. Ba.".to_string(),
            vocabulary: vec![
                VocabEntry {
                    word: "một".to_string(),
                    definition: "one".to_string(),
                    example: Some("Một, hai, ba!".to_string()),
                },
                VocabEntry {
                    word: "hai".to_string(),
                    definition: "two".to_string(),
                    example: None,
                },
            ],
        }
    }

    #[test]
    fn test_new_app_starts_in_listening() {
        let app = App::new(test_lesson());
        assert_eq!(app.active_view(), ActiveView::Listening);
        assert_eq!(app.segments.len(), 3);
        assert_eq!(app.audio_status, AudioStatus::Idle);
    }

    #[test]
    fn test_activate_highlights_segment_at_cursor() {
        let mut app = App::new(test_lesson());
        app.select_view(ActiveView::Shadowing);
        app.cursor_down();
        app.activate();
        assert_eq!(app.selection.active_segment, Some(1));
    }

    #[test]
    fn test_activate_toggles_vocab_example() {
        let mut app = App::new(test_lesson());
        app.select_view(ActiveView::Vocabulary);
        app.activate();
        assert_eq!(app.selection.expanded_vocab, Some(0));
        app.activate();
        assert_eq!(app.selection.expanded_vocab, None);
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut app = App::new(test_lesson());
        app.select_view(ActiveView::Shadowing);
        app.cursor_up();
        assert_eq!(app.segment_cursor, 0);
        for _ in 0..10 {
            app.cursor_down();
        }
        assert_eq!(app.segment_cursor, 2);
        app.cursor_first();
        assert_eq!(app.segment_cursor, 0);
        app.cursor_last();
        assert_eq!(app.segment_cursor, 2);
    }

    #[test]
    fn test_cursors_are_per_view() {
        let mut app = App::new(test_lesson());
        app.select_view(ActiveView::Shadowing);
        app.cursor_down();
        app.select_view(ActiveView::Vocabulary);
        assert_eq!(app.vocab_cursor, 0);
        app.cursor_down();
        app.select_view(ActiveView::Shadowing);
        assert_eq!(app.segment_cursor, 1);
        assert_eq!(app.vocab_cursor, 1);
    }

    #[test]
    fn test_highlights_survive_view_switches() {
        let mut app = App::new(test_lesson());
        app.select_view(ActiveView::Shadowing);
        app.activate();
        app.select_view(ActiveView::Vocabulary);
        app.activate();
        app.select_view(ActiveView::Listening);
        app.select_view(ActiveView::Shadowing);
        assert_eq!(app.selection.active_segment, Some(0));
        assert_eq!(app.selection.expanded_vocab, Some(0));
    }

    #[test]
    fn test_audio_failure_sets_visible_fallback() {
        let mut app = App::new(test_lesson());
        app.set_audio_playing();
        app.set_audio_failed("could not start player");
        assert_eq!(
            app.audio_status.failure_message(),
            Some("could not start player")
        );
        // The app keeps running; views still render from the same state
        assert_eq!(app.active_view(), ActiveView::Listening);
    }

    #[test]
    fn test_empty_transcript_yields_no_segments() {
        let mut lesson = test_lesson();
        lesson.transcript = String::new();
        let app = App::new(lesson);
        assert!(app.segments.is_empty());
    }

    #[test]
    fn test_activate_on_empty_lists_is_noop() {
        let mut lesson = test_lesson();
        lesson.transcript = String::new();
        lesson.vocabulary.clear();
        let mut app = App::new(lesson);
        app.select_view(ActiveView::Shadowing);
        app.activate();
        assert_eq!(app.selection.active_segment, None);
        app.select_view(ActiveView::Vocabulary);
        app.activate();
        assert_eq!(app.selection.expanded_vocab, None);
    }
}
