//! View-selection state machine
//!
//! Tracks which of the three views is active, which transcript segment is
//! highlighted in the Shadowing view, and which single vocabulary entry has
//! its example expanded. None of the transitions can fail; out-of-range
//! indices are ignored because the UI only produces indices from the
//! rendered sequences.

use crate::types::ActiveView;

/// Selection state for the lesson session.
///
/// Created once per session with `Listening` active and no indices set;
/// mutated only by user input. Switching views does not reset the index
/// fields, so a highlight survives a round trip through the other tabs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    /// Which view is rendered
    pub active_view: ActiveView,
    /// Highlighted segment in the Shadowing view
    pub active_segment: Option<usize>,
    /// The single vocabulary entry with its example expanded
    pub expanded_vocab: Option<usize>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch to a view. Unconditional; leaves both index fields alone.
    pub fn select_view(&mut self, view: ActiveView) {
        self.active_view = view;
    }

    /// Highlight a segment (last write wins). Out of range is a no-op.
    pub fn select_segment(&mut self, index: usize, segment_count: usize) {
        if index < segment_count {
            self.active_segment = Some(index);
        }
    }

    /// Expand the example of entry `index`, or collapse it if it is already
    /// the expanded one. At most one entry is expanded at a time.
    pub fn toggle_example(&mut self, index: usize, vocab_count: usize) {
        if index >= vocab_count {
            return;
        }
        if self.expanded_vocab == Some(index) {
            self.expanded_vocab = None;
        } else {
            self.expanded_vocab = Some(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = SelectionState::new();
        assert_eq!(state.active_view, ActiveView::Listening);
        assert_eq!(state.active_segment, None);
        assert_eq!(state.expanded_vocab, None);
    }

    #[test]
    fn test_select_view_is_unconditional() {
        let mut state = SelectionState::new();
        for view in [
            ActiveView::Vocabulary,
            ActiveView::Vocabulary,
            ActiveView::Shadowing,
            ActiveView::Listening,
            ActiveView::Shadowing,
        ] {
            state.select_view(view);
            assert_eq!(state.active_view, view);
        }
    }

    #[test]
    fn test_view_switch_preserves_indices() {
        let mut state = SelectionState::new();
        state.select_segment(2, 5);
        state.toggle_example(1, 3);

        state.select_view(ActiveView::Vocabulary);
        state.select_view(ActiveView::Listening);
        state.select_view(ActiveView::Shadowing);

        assert_eq!(state.active_segment, Some(2));
        assert_eq!(state.expanded_vocab, Some(1));
    }

    #[test]
    fn test_select_segment_last_write_wins() {
        let mut state = SelectionState::new();
        state.select_segment(0, 4);
        state.select_segment(3, 4);
        state.select_segment(3, 4);
        assert_eq!(state.active_segment, Some(3));
    }

    #[test]
    fn test_select_segment_out_of_range_is_noop() {
        let mut state = SelectionState::new();
        state.select_segment(1, 4);
        state.select_segment(4, 4);
        state.select_segment(100, 4);
        assert_eq!(state.active_segment, Some(1));

        let mut empty = SelectionState::new();
        empty.select_segment(0, 0);
        assert_eq!(empty.active_segment, None);
    }

    #[test]
    fn test_toggle_example_twice_collapses() {
        let mut state = SelectionState::new();
        state.toggle_example(2, 5);
        assert_eq!(state.expanded_vocab, Some(2));
        state.toggle_example(2, 5);
        assert_eq!(state.expanded_vocab, None);
    }

    #[test]
    fn test_toggle_example_moves_single_expansion() {
        let mut state = SelectionState::new();
        state.toggle_example(0, 5);
        state.toggle_example(4, 5);
        assert_eq!(state.expanded_vocab, Some(4));
    }

    #[test]
    fn test_toggle_example_out_of_range_is_noop() {
        let mut state = SelectionState::new();
        state.toggle_example(1, 3);
        state.toggle_example(3, 3);
        assert_eq!(state.expanded_vocab, Some(1));
    }
}
