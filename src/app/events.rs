// ABOUTME: Event handling system for keyboard input and wizard actions

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

use crate::app::state::{AppState, View};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    OpenWizard,
    RequestClose,
    // Confirmation dialog
    ConfirmationToggle,
    ConfirmationConfirm,
    ConfirmationCancel,
    // Wizard navigation
    NextStep,
    PreviousStep,
    FocusNext,
    FocusPrevious,
    Activate,
    AdjustUp,
    AdjustDown,
    // Text editing
    EditorInput(char),
    EditorNewline,
    EditorBackspace,
    EditorDelete,
    EditorCursorLeft,
    EditorCursorRight,
    EditorCursorUp,
    EditorCursorDown,
    EditorLineStart,
    EditorLineEnd,
    EditorStop,
    Paste(String),
}

pub struct EventHandler;

impl EventHandler {
    /// Map a raw terminal event to an app event
    pub fn handle_event(event: Event, state: &mut AppState) -> Option<AppEvent> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                Self::handle_key_event(key, state)
            }
            Event::Paste(text) if state.is_editing() => Some(AppEvent::Paste(text)),
            _ => None,
        }
    }

    pub fn handle_key_event(key_event: KeyEvent, state: &mut AppState) -> Option<AppEvent> {
        if key_event.modifiers.contains(KeyModifiers::CONTROL)
            && key_event.code == KeyCode::Char('c')
        {
            return Some(AppEvent::Quit);
        }

        // Handle confirmation dialog first (highest priority)
        if state.confirmation_dialog.is_some() {
            return match key_event.code {
                KeyCode::Left | KeyCode::Right | KeyCode::Tab => Some(AppEvent::ConfirmationToggle),
                KeyCode::Enter => Some(AppEvent::ConfirmationConfirm),
                KeyCode::Esc => Some(AppEvent::ConfirmationCancel),
                _ => None,
            };
        }

        match state.current_view {
            View::Launcher => Self::handle_launcher_keys(key_event),
            View::Wizard if state.is_editing() => Self::handle_editor_keys(key_event, state),
            View::Wizard => Self::handle_wizard_keys(key_event),
        }
    }

    fn handle_launcher_keys(key_event: KeyEvent) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Enter | KeyCode::Char('o') => Some(AppEvent::OpenWizard),
            KeyCode::Char('q') | KeyCode::Esc => Some(AppEvent::Quit),
            _ => None,
        }
    }

    fn handle_editor_keys(key_event: KeyEvent, state: &AppState) -> Option<AppEvent> {
        let multiline = state
            .editor
            .as_ref()
            .is_some_and(|active| active.field.is_multiline());

        match key_event.code {
            KeyCode::Esc => Some(AppEvent::EditorStop),
            KeyCode::Tab => Some(AppEvent::FocusNext),
            KeyCode::BackTab => Some(AppEvent::FocusPrevious),
            KeyCode::Enter if multiline => Some(AppEvent::EditorNewline),
            KeyCode::Enter => Some(AppEvent::EditorStop),
            KeyCode::Backspace => Some(AppEvent::EditorBackspace),
            KeyCode::Delete => Some(AppEvent::EditorDelete),
            KeyCode::Left => Some(AppEvent::EditorCursorLeft),
            KeyCode::Right => Some(AppEvent::EditorCursorRight),
            KeyCode::Up => Some(AppEvent::EditorCursorUp),
            KeyCode::Down => Some(AppEvent::EditorCursorDown),
            KeyCode::Home => Some(AppEvent::EditorLineStart),
            KeyCode::End => Some(AppEvent::EditorLineEnd),
            KeyCode::Char(_)
                if key_event
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                None
            }
            KeyCode::Char(ch) => Some(AppEvent::EditorInput(ch)),
            _ => None,
        }
    }

    fn handle_wizard_keys(key_event: KeyEvent) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => Some(AppEvent::FocusNext),
            KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => Some(AppEvent::FocusPrevious),
            KeyCode::Enter | KeyCode::Char(' ') => Some(AppEvent::Activate),
            KeyCode::Right | KeyCode::PageDown | KeyCode::Char('n') => Some(AppEvent::NextStep),
            KeyCode::Left | KeyCode::PageUp | KeyCode::Char('p') => Some(AppEvent::PreviousStep),
            KeyCode::Char('+') | KeyCode::Char('=') => Some(AppEvent::AdjustUp),
            KeyCode::Char('-') => Some(AppEvent::AdjustDown),
            KeyCode::Esc | KeyCode::Char('q') => Some(AppEvent::RequestClose),
            _ => None,
        }
    }

    pub fn process_event(event: AppEvent, state: &mut AppState) {
        debug!(?event, "Processing app event");
        match event {
            AppEvent::Quit => state.quit(),
            AppEvent::OpenWizard => state.open_wizard(),
            AppEvent::RequestClose => state.request_close(),
            AppEvent::ConfirmationToggle => state.confirmation_toggle(),
            AppEvent::ConfirmationConfirm => state.confirmation_confirm(),
            AppEvent::ConfirmationCancel => state.confirmation_cancel(),
            AppEvent::NextStep => state.next_step(),
            AppEvent::PreviousStep => state.previous_step(),
            AppEvent::FocusNext => state.focus_next(),
            AppEvent::FocusPrevious => state.focus_previous(),
            AppEvent::Activate => state.activate(),
            AppEvent::AdjustUp => state.adjust_number(1),
            AppEvent::AdjustDown => state.adjust_number(-1),
            AppEvent::EditorInput(ch) => state.editor_input_char(ch),
            AppEvent::EditorNewline => state.editor_newline(),
            AppEvent::EditorBackspace => state.editor_backspace(),
            AppEvent::EditorDelete => state.editor_delete(),
            AppEvent::EditorCursorLeft => state.editor_cursor_left(),
            AppEvent::EditorCursorRight => state.editor_cursor_right(),
            AppEvent::EditorCursorUp => state.editor_cursor_up(),
            AppEvent::EditorCursorDown => state.editor_cursor_down(),
            AppEvent::EditorLineStart => state.editor_line_start(),
            AppEvent::EditorLineEnd => state.editor_line_end(),
            AppEvent::EditorStop => state.stop_editing(),
            AppEvent::Paste(text) => state.editor_insert_text(&text),
        }
    }
}
