//! lesson-core - Content model and view-selection logic for shadowing lessons
//!
//! This crate provides the lesson data types (audio reference, transcript,
//! vocabulary), the transcript segmenter, and the state machine that tracks
//! which of the three views is active.

pub mod error;
pub mod lesson;
pub mod segment;
pub mod selection;
pub mod types;

pub use error::*;
pub use lesson::*;
pub use segment::*;
pub use selection::*;
pub use types::*;
