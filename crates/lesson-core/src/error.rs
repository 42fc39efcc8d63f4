//! Error types for lesson loading

use std::path::PathBuf;
use thiserror::Error;

pub type LessonResult<T> = Result<T, LessonError>;

#[derive(Debug, Error)]
pub enum LessonError {
    #[error("failed to read lesson file `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid lesson JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("lesson has no audio reference and no transcript")]
    EmptyLesson,
}
