// ABOUTME: Unit tests for event handling to ensure keyboard inputs map to correct wizard actions

use crawl_wizard::app::state::{Field, TextField, View};
use crawl_wizard::app::{AppEvent, AppState, EventHandler};
use crawl_wizard::models::{CrawlScope, CrawlType};
use crawl_wizard::wizard::WizardStep;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

const fn create_key_event(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

const fn create_key_event_with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new(code, modifiers)
}

/// Map and apply one key press
fn press(state: &mut AppState, code: KeyCode) -> Option<AppEvent> {
    let event = EventHandler::handle_key_event(create_key_event(code), state);
    if let Some(event) = event.clone() {
        EventHandler::process_event(event, state);
    }
    event
}

fn type_text(state: &mut AppState, text: &str) {
    for ch in text.chars() {
        let code = if ch == '\n' { KeyCode::Enter } else { KeyCode::Char(ch) };
        press(state, code);
    }
}

#[test]
fn test_launcher_keys() {
    let mut state = AppState::default();

    assert_eq!(
        EventHandler::handle_key_event(create_key_event(KeyCode::Char('q')), &mut state),
        Some(AppEvent::Quit)
    );
    assert_eq!(
        EventHandler::handle_key_event(create_key_event(KeyCode::Esc), &mut state),
        Some(AppEvent::Quit)
    );
    assert_eq!(
        EventHandler::handle_key_event(create_key_event(KeyCode::Char('o')), &mut state),
        Some(AppEvent::OpenWizard)
    );

    press(&mut state, KeyCode::Enter);
    assert_eq!(state.current_view, View::Wizard);
}

#[test]
fn test_ctrl_c_quits_everywhere() {
    let mut state = AppState::default();
    state.open_wizard();
    state.request_close();

    let event = EventHandler::handle_key_event(
        create_key_event_with_modifiers(KeyCode::Char('c'), KeyModifiers::CONTROL),
        &mut state,
    );
    assert_eq!(event, Some(AppEvent::Quit));
}

#[test]
fn test_wizard_navigation_keys() {
    let mut state = AppState::default();
    state.open_wizard();

    for (code, expected) in [
        (KeyCode::Tab, AppEvent::FocusNext),
        (KeyCode::Char('j'), AppEvent::FocusNext),
        (KeyCode::BackTab, AppEvent::FocusPrevious),
        (KeyCode::Up, AppEvent::FocusPrevious),
        (KeyCode::Char(' '), AppEvent::Activate),
        (KeyCode::Right, AppEvent::NextStep),
        (KeyCode::PageUp, AppEvent::PreviousStep),
        (KeyCode::Char('+'), AppEvent::AdjustUp),
        (KeyCode::Char('-'), AppEvent::AdjustDown),
        (KeyCode::Esc, AppEvent::RequestClose),
    ] {
        assert_eq!(
            EventHandler::handle_key_event(create_key_event(code), &mut state),
            Some(expected),
            "{code:?}"
        );
    }
}

#[test]
fn test_escape_asks_before_closing() {
    let mut state = AppState::default();
    state.open_wizard();

    press(&mut state, KeyCode::Esc);
    assert!(state.confirmation_dialog.is_some());

    // Esc in the dialog cancels
    press(&mut state, KeyCode::Esc);
    assert!(state.confirmation_dialog.is_none());
    assert!(state.is_wizard_open());

    press(&mut state, KeyCode::Esc);
    press(&mut state, KeyCode::Left);
    press(&mut state, KeyCode::Enter);
    assert!(!state.is_wizard_open());
    assert_eq!(state.current_view, View::Launcher);
}

#[test]
fn test_finish_does_not_close() {
    let mut state = AppState::default();
    state.open_wizard();

    for _ in 0..6 {
        press(&mut state, KeyCode::Right);
    }
    assert_eq!(state.current_step(), Some(WizardStep::Review));
    assert!(state.is_wizard_open());
}

#[test]
fn test_typing_specific_pages_through_keys() {
    let mut state = AppState::default();
    state.open_wizard();

    press(&mut state, KeyCode::Enter);
    assert_eq!(state.crawl_data().map(|d| d.crawl_type), Some(CrawlType::Discovery));

    press(&mut state, KeyCode::Right);
    // All, check-new-pages, Specific
    press(&mut state, KeyCode::Down);
    press(&mut state, KeyCode::Down);
    press(&mut state, KeyCode::Enter);
    assert_eq!(state.crawl_data().map(|d| d.scope), Some(CrawlScope::Specific));

    press(&mut state, KeyCode::Down);
    assert_eq!(state.focused_field(), Some(Field::Text(TextField::SpecificPages)));
    press(&mut state, KeyCode::Enter);
    assert!(state.is_editing());

    // Keys go to the editor, not to navigation
    type_text(&mut state, "https://a.com\nhttps://b.com");
    assert_eq!(
        state.crawl_data().map(|d| d.specific_pages.clone()),
        Some(vec!["https://a.com".to_string(), "https://b.com".to_string()])
    );
    assert_eq!(state.current_step(), Some(WizardStep::Scope));

    press(&mut state, KeyCode::Esc);
    assert!(!state.is_editing());
    assert!(state.confirmation_dialog.is_none());
}

#[test]
fn test_single_line_enter_commits() {
    let mut state = AppState::default();
    state.open_wizard();
    state.edit_step(WizardStep::Scope);
    state.activate(); // select "All"

    let fields = state.fields();
    state.focus = fields
        .iter()
        .position(|f| *f == Field::ScopeAdvanced)
        .expect("advanced toggle present");
    press(&mut state, KeyCode::Enter);
    press(&mut state, KeyCode::Tab); // Limit To tab
    press(&mut state, KeyCode::Tab); // Exclude tab
    press(&mut state, KeyCode::Tab); // Limit To input
    assert_eq!(state.focused_field(), Some(Field::Text(TextField::LimitTo)));

    press(&mut state, KeyCode::Enter);
    type_text(&mut state, "/en/,/fr/");
    press(&mut state, KeyCode::Enter);
    assert!(!state.is_editing());
    assert_eq!(
        state.crawl_data().map(|d| d.additional_settings.limit_to.clone()),
        Some(vec!["/en/".to_string(), "/fr/".to_string()])
    );
}

#[test]
fn test_modified_chars_are_not_typed() {
    let mut state = AppState::default();
    state.open_wizard();
    state.edit_step(WizardStep::Scope);
    state.activate(); // select "All"
    press(&mut state, KeyCode::Down);
    press(&mut state, KeyCode::Down);
    press(&mut state, KeyCode::Enter); // Specific
    press(&mut state, KeyCode::Down);
    press(&mut state, KeyCode::Enter);
    assert!(state.is_editing());

    for modifiers in [KeyModifiers::CONTROL, KeyModifiers::ALT] {
        let event = EventHandler::handle_key_event(
            create_key_event_with_modifiers(KeyCode::Char('u'), modifiers),
            &mut state,
        );
        assert_eq!(event, None, "{modifiers:?}");
    }

    // Shifted characters are still text
    assert_eq!(
        EventHandler::handle_key_event(
            create_key_event_with_modifiers(KeyCode::Char('U'), KeyModifiers::SHIFT),
            &mut state,
        ),
        Some(AppEvent::EditorInput('U'))
    );
    assert!(state.crawl_data().is_some_and(|d| d.specific_pages.is_empty()));
}

#[test]
fn test_paste_only_while_editing() {
    let mut state = AppState::default();
    state.open_wizard();
    assert_eq!(EventHandler::handle_event(Event::Paste("x".to_string()), &mut state), None);

    let release = KeyEvent {
        kind: KeyEventKind::Release,
        ..create_key_event(KeyCode::Enter)
    };
    assert_eq!(EventHandler::handle_event(Event::Key(release), &mut state), None);
}
