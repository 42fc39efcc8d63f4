//! UI components for the lesson viewer

pub mod footer;
pub mod header;
pub mod overlays;

pub use footer::*;
pub use header::*;
pub use overlays::*;
