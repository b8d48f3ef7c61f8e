// ABOUTME: Main application structure and state management for the TUI

pub mod events;
pub mod field_editor;
pub mod state;

pub use events::{AppEvent, EventHandler};
pub use field_editor::FieldEditor;
pub use state::{App, AppState};
