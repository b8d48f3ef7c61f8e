// ABOUTME: Shared color palette and styles for the wizard screens

use ratatui::style::{Color, Modifier, Style};

pub const CORNFLOWER_BLUE: Color = Color::Rgb(100, 149, 237);
pub const GOLD: Color = Color::Rgb(255, 215, 0);
pub const SELECTION_GREEN: Color = Color::Rgb(100, 200, 100);
pub const DARK_BG: Color = Color::Rgb(25, 25, 35);
pub const PANEL_BG: Color = Color::Rgb(30, 30, 40);
pub const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
pub const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
pub const SUBDUED_BORDER: Color = Color::Rgb(60, 60, 80);
pub const ERROR_RED: Color = Color::Rgb(220, 80, 80);
pub const WARNING_YELLOW: Color = Color::Rgb(220, 180, 80);

pub fn title() -> Style {
    Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
}

pub fn text() -> Style {
    Style::default().fg(SOFT_WHITE)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED_GRAY)
}

pub fn border() -> Style {
    Style::default().fg(SUBDUED_BORDER)
}

pub fn key_hint() -> Style {
    Style::default().fg(GOLD)
}

/// Row style for the focused field
pub fn focused() -> Style {
    Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
}

pub fn selected() -> Style {
    Style::default().fg(SELECTION_GREEN).add_modifier(Modifier::BOLD)
}

pub fn cursor() -> Style {
    Style::default().fg(DARK_BG).bg(SELECTION_GREEN)
}
