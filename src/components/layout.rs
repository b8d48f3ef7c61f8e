// ABOUTME: Top-level layout: launcher screen or the wizard modal with its chrome and dialogs

use ratatui::{
    prelude::*,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use super::{steps, theme, ConfirmationDialogComponent, ProgressBarComponent, StepNavigationComponent};
use crate::app::{state::View, AppState};
use crate::wizard::WizardStep;

const SIDEBAR_WIDTH: u16 = 18;

pub struct LayoutComponent {
    progress_bar: ProgressBarComponent,
    step_navigation: StepNavigationComponent,
    confirmation_dialog: ConfirmationDialogComponent,
}

impl LayoutComponent {
    pub fn new() -> Self {
        Self {
            progress_bar: ProgressBarComponent::new(),
            step_navigation: StepNavigationComponent::new(),
            confirmation_dialog: ConfirmationDialogComponent::new(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let area = frame.size();
        frame.render_widget(Block::default().style(Style::default().bg(theme::DARK_BG)), area);

        match state.current_view {
            View::Launcher => self.render_launcher(frame, area),
            View::Wizard => self.render_wizard(frame, area, state),
        }

        // Dialog renders last, on top of everything
        if state.confirmation_dialog.is_some() {
            self.confirmation_dialog.render(frame, area, state);
        }
    }

    fn render_launcher(&self, frame: &mut Frame, area: Rect) {
        let panel = centered_rect(60, 40, area);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme::CORNFLOWER_BLUE))
            .style(Style::default().bg(theme::PANEL_BG))
            .title(" Website Crawl ")
            .title_style(theme::title());
        let inner = block.inner(panel);
        frame.render_widget(block, panel);

        let lines = vec![
            Line::default(),
            Line::from(Span::styled("Crawl Wizard", theme::title())),
            Line::default(),
            Line::from(Span::styled(
                "Set up a website crawl: pick a crawl type, choose which pages to cover, tune the crawler and review the result.",
                theme::text(),
            )),
            Line::default(),
            Line::from(vec![
                Span::styled("[", theme::border()),
                Span::styled("Enter", theme::key_hint()),
                Span::styled("]", theme::border()),
                Span::styled(" Open Crawl Wizard", theme::text()),
                Span::styled("  |  ", theme::border()),
                Span::styled("[", theme::border()),
                Span::styled("q", theme::key_hint()),
                Span::styled("]", theme::border()),
                Span::styled(" Quit", theme::muted()),
            ]),
        ];

        let body = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(body, inner);
    }

    fn render_wizard(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let Some(step) = state.current_step() else {
            return;
        };

        let modal = centered_rect(90, 90, area);
        frame.render_widget(Clear, modal);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme::CORNFLOWER_BLUE))
            .style(Style::default().bg(theme::DARK_BG));
        let inner = block.inner(modal);
        frame.render_widget(block, modal);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
            .split(inner);

        self.progress_bar
            .render(frame, columns[0], step.number(), WizardStep::total());

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Header
                Constraint::Min(5),    // Step body
                Constraint::Length(2), // Navigation footer
            ])
            .split(columns[1]);

        self.render_header(frame, rows[0], step);
        steps::render_step(frame, rows[1], state);
        self.step_navigation
            .render(frame, rows[2], step.number(), WizardStep::total());
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, step: WizardStep) {
        let lines = vec![
            Line::from(vec![
                Span::styled(" Crawl Wizard", theme::title()),
                Span::styled("  ·  ", theme::border()),
                Span::styled(step.title(), Style::default().fg(theme::CORNFLOWER_BLUE)),
            ]),
            Line::from(Span::styled(format!(" {}", step.description()), theme::muted())),
        ];

        let header = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(theme::border()),
        );
        frame.render_widget(header, area);
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new()
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
