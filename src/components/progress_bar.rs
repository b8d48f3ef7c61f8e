// ABOUTME: Step progress sidebar driven only by the current step and the step count

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::theme;
use crate::wizard::WizardStep;

pub struct ProgressBarComponent;

impl ProgressBarComponent {
    pub fn new() -> Self {
        Self
    }

    /// One row per step with connector rows between them
    pub fn lines(current_step: usize, total_steps: usize) -> Vec<Line<'static>> {
        let mut lines = Vec::with_capacity(total_steps * 2);

        for number in 1..=total_steps {
            let title = WizardStep::from_number(number)
                .map(|step| step.title())
                .unwrap_or_default();

            let (icon, icon_style, title_style) = if number < current_step {
                ("✓".to_string(), theme::selected(), theme::muted())
            } else if number == current_step {
                (number.to_string(), theme::focused(), theme::title())
            } else {
                (number.to_string(), theme::muted(), theme::muted())
            };

            lines.push(Line::from(vec![
                Span::styled(" ", Style::default()),
                Span::styled(format!("({icon})"), icon_style),
                Span::styled(format!(" {title}"), title_style),
            ]));

            if number < total_steps {
                let connector = if number < current_step {
                    theme::selected()
                } else {
                    theme::border()
                };
                lines.push(Line::from(Span::styled("  │", connector)));
            }
        }
        lines
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, current_step: usize, total_steps: usize) {
        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_type(BorderType::Rounded)
            .border_style(theme::border())
            .style(Style::default().bg(theme::DARK_BG));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let progress = Paragraph::new(Self::lines(current_step, total_steps));
        frame.render_widget(progress, inner);
    }
}

impl Default for ProgressBarComponent {
    fn default() -> Self {
        Self::new()
    }
}
