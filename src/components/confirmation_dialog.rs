// ABOUTME: Confirmation dialog component for displaying yes/no prompts with keyboard navigation

use crate::app::state::AppState;
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use super::theme;

pub struct ConfirmationDialogComponent;

impl ConfirmationDialogComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let Some(dialog) = &state.confirmation_dialog else {
            return;
        };

        let dialog_width = 60.min(area.width.saturating_sub(4));
        let dialog_height = 8.min(area.height);
        let dialog_area = Rect {
            x: area.x + (area.width.saturating_sub(dialog_width)) / 2,
            y: area.y + (area.height.saturating_sub(dialog_height)) / 2,
            width: dialog_width,
            height: dialog_height,
        };

        // Clear only the dialog area so the wizard stays visible behind it
        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .title(dialog.title.clone())
            .title_style(theme::title())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme::WARNING_YELLOW))
            .style(Style::default().bg(theme::PANEL_BG));
        let inner_area = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),    // Message
                Constraint::Length(2), // Buttons
            ])
            .split(inner_area);

        let message = Paragraph::new(dialog.message.clone())
            .wrap(Wrap { trim: true })
            .style(theme::text());
        frame.render_widget(message, chunks[0]);

        let button_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);

        let button_style = |selected: bool| {
            if selected {
                Style::default().fg(theme::DARK_BG).bg(theme::GOLD)
            } else {
                theme::text()
            }
        };

        let yes_button = Paragraph::new(" Yes ")
            .style(button_style(dialog.selected_option))
            .alignment(Alignment::Center);
        frame.render_widget(yes_button, button_chunks[0]);

        let no_button = Paragraph::new(" No ")
            .style(button_style(!dialog.selected_option))
            .alignment(Alignment::Center);
        frame.render_widget(no_button, button_chunks[1]);
    }
}

impl Default for ConfirmationDialogComponent {
    fn default() -> Self {
        Self::new()
    }
}
