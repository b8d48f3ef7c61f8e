// ABOUTME: UI testing framework for the wizard screens using headless rendering

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};

use crawl_wizard::app::state::View;
use crawl_wizard::app::{App, EventHandler};
use crawl_wizard::components::LayoutComponent;
use crawl_wizard::wizard::WizardStep;

pub struct UITestFramework {
    app: App,
    terminal: Terminal<TestBackend>,
    layout: LayoutComponent,
}

impl UITestFramework {
    pub fn new() -> Self {
        let backend = TestBackend::new(120, 40); // Standard terminal size
        let terminal = Terminal::new(backend).unwrap();

        Self {
            app: App::new(),
            terminal,
            layout: LayoutComponent::new(),
        }
    }

    pub fn send_key(&mut self, code: KeyCode) {
        let key = KeyEvent::new(code, KeyModifiers::NONE);
        if let Some(event) = EventHandler::handle_key_event(key, &mut self.app.state) {
            EventHandler::process_event(event, &mut self.app.state);
        }
    }

    pub fn send_keys(&mut self, codes: &[KeyCode]) {
        for code in codes {
            self.send_key(*code);
        }
    }

    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            let code = if ch == '\n' { KeyCode::Enter } else { KeyCode::Char(ch) };
            self.send_key(code);
        }
    }

    /// Render and return the screen, one string per row
    pub fn render(&mut self) -> Vec<String> {
        self.terminal
            .draw(|frame| self.layout.render(frame, &self.app.state))
            .unwrap();

        let buffer = self.terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(ratatui::buffer::Cell::symbol).collect::<String>())
            .collect()
    }

    pub fn screen(&mut self) -> String {
        self.render().join("\n")
    }

    pub const fn current_view(&self) -> &View {
        &self.app.state.current_view
    }
}

fn position(screen: &str, needle: &str) -> usize {
    screen
        .find(needle)
        .unwrap_or_else(|| panic!("{needle:?} not on screen:\n{screen}"))
}

#[test]
fn test_launcher_renders() {
    let mut ui = UITestFramework::new();
    let screen = ui.screen();

    assert!(screen.contains("Crawl Wizard"));
    assert!(screen.contains("Open Crawl Wizard"));
    assert_eq!(ui.current_view(), &View::Launcher);
}

#[test]
fn test_wizard_chrome() {
    let mut ui = UITestFramework::new();
    ui.send_key(KeyCode::Enter);
    let screen = ui.screen();

    assert!(screen.contains(WizardStep::CrawlType.description()));
    assert!(screen.contains("Step 1 of 4"));
    assert!(screen.contains("(1) Type"));
    assert!(screen.contains("(4) Review"));
    assert!(screen.contains("Discover your site"));
    assert!(screen.contains("Extract content for translation"));
    assert!(screen.contains("[Free]"));
}

#[test]
fn test_progress_marks_completed_steps() {
    let mut ui = UITestFramework::new();
    ui.send_keys(&[KeyCode::Enter, KeyCode::Right, KeyCode::Right]);
    let screen = ui.screen();

    assert!(screen.contains("(✓) Type"));
    assert!(screen.contains("(✓) Scope"));
    assert!(screen.contains("(3) Settings"));
    assert!(screen.contains("Step 3 of 4"));
}

#[test]
fn test_last_step_shows_finish() {
    let mut ui = UITestFramework::new();
    ui.send_keys(&[KeyCode::Enter, KeyCode::PageDown, KeyCode::PageDown, KeyCode::PageDown]);
    let screen = ui.screen();

    assert!(screen.contains("Finish"));
    assert!(screen.contains("Step 4 of 4"));
    assert!(screen.contains("Crawl Type"));
    assert!(screen.contains("Type: Not selected"));
}

#[test]
fn test_review_shows_entered_pages_in_order() {
    let mut ui = UITestFramework::new();
    ui.send_keys(&[KeyCode::Enter, KeyCode::Enter]); // open, pick Discovery
    ui.send_keys(&[KeyCode::Right, KeyCode::Down, KeyCode::Down, KeyCode::Enter]); // Specific
    ui.send_keys(&[KeyCode::Down, KeyCode::Enter]);
    ui.type_text("https://example.com/zeta\nhttps://example.com/alpha");
    ui.send_keys(&[KeyCode::Esc, KeyCode::Right, KeyCode::Right]);

    let screen = ui.screen();
    let kind = position(&screen, "Discover your site");
    let scope = position(&screen, "Scope: Specific pages");
    let zeta = position(&screen, "https://example.com/zeta");
    let alpha = position(&screen, "https://example.com/alpha");
    assert!(kind < scope && scope < zeta && zeta < alpha);
}

#[test]
fn test_close_dialog_over_wizard() {
    let mut ui = UITestFramework::new();
    ui.send_keys(&[KeyCode::Enter, KeyCode::Esc]);
    let screen = ui.screen();
    assert!(screen.contains("Close Crawl Wizard"));
    assert!(screen.contains("Yes"));

    ui.send_keys(&[KeyCode::Tab, KeyCode::Enter]);
    assert_eq!(ui.current_view(), &View::Launcher);
    assert!(ui.screen().contains("Open Crawl Wizard"));
}

#[test]
fn test_settings_advanced_section_expands() {
    let mut ui = UITestFramework::new();
    ui.send_keys(&[KeyCode::Enter, KeyCode::Right, KeyCode::Right]);
    assert!(!ui.screen().contains("JavaScript Support"));

    // recurring, 3 resources, advanced toggle
    ui.send_keys(&[KeyCode::Down, KeyCode::Down, KeyCode::Down, KeyCode::Down, KeyCode::Enter]);
    let screen = ui.screen();
    assert!(screen.contains("JavaScript Support"));
    assert!(screen.contains("Prerendering requires Crest"));
}

#[test]
fn test_editing_shows_typed_text() {
    let mut ui = UITestFramework::new();
    ui.send_keys(&[KeyCode::Enter, KeyCode::Right]);
    // All, check-new-pages, Specific, excluded toggle
    ui.send_keys(&[KeyCode::Down, KeyCode::Down, KeyCode::Down, KeyCode::Enter]);
    assert!(ui.screen().contains("Hide Excluded Pages"));

    ui.send_keys(&[KeyCode::Down, KeyCode::Enter]);
    ui.type_text("/private/*");
    assert!(ui.screen().contains("/private/*"));
}
