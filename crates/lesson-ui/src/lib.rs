//! lesson-ui - TUI components for the shadowing lesson viewer
//!
//! This crate provides the application state and the user interface
//! components built on ratatui.

pub mod app;
pub mod components;
pub mod event;
pub mod views;

pub use app::*;
pub use event::*;
