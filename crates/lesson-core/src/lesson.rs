//! Lesson loading

use crate::error::{LessonError, LessonResult};
use crate::types::Lesson;
use std::path::Path;

/// Bundled sample lesson, used when no lesson file is given.
const SAMPLE_LESSON: &str = include_str!("../assets/sample_lesson.json");

/// Load a lesson from a JSON file.
pub fn load_lesson<P: AsRef<Path>>(path: P) -> LessonResult<Lesson> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| LessonError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_lesson(&raw)
}

/// Parse a lesson from its JSON text.
pub fn parse_lesson(raw: &str) -> LessonResult<Lesson> {
    let lesson: Lesson = serde_json::from_str(raw)?;
    if lesson.audio.trim().is_empty() && lesson.transcript.trim().is_empty() {
        return Err(LessonError::EmptyLesson);
    }
    Ok(lesson)
}

/// The built-in sample lesson.
pub fn sample_lesson() -> Lesson {
    // The bundled JSON is checked by tests, so a parse failure here is a
    // build defect, not a runtime condition.
    parse_lesson(SAMPLE_LESSON).expect("bundled sample lesson is valid")
}
