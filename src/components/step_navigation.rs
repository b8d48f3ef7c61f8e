// ABOUTME: Wizard navigation footer with Previous / step counter / Next or Finish

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::theme;

pub struct StepNavigationComponent;

impl StepNavigationComponent {
    pub fn new() -> Self {
        Self
    }

    fn key(key: &str, enabled: bool) -> Vec<Span<'static>> {
        vec![
            Span::styled("[", theme::border()),
            Span::styled(key.to_string(), if enabled { theme::key_hint() } else { theme::muted() }),
            Span::styled("]", theme::border()),
        ]
    }

    pub fn line(current_step: usize, total_steps: usize) -> Line<'static> {
        let can_go_back = current_step > 1;
        let is_final = current_step >= total_steps;
        let forward_label = if is_final { "Finish" } else { "Next" };
        let label_style = |enabled: bool| if enabled { theme::text() } else { theme::muted() };

        let mut spans = Self::key("←", can_go_back);
        spans.push(Span::styled(" Previous", label_style(can_go_back)));
        spans.push(Span::styled("  |  ", theme::border()));
        spans.push(Span::styled(
            format!("Step {current_step} of {total_steps}"),
            theme::muted(),
        ));
        spans.push(Span::styled("  |  ", theme::border()));

        // Finish is shown but inert: there is nothing to submit
        spans.extend(Self::key("→", !is_final));
        spans.push(Span::styled(format!(" {forward_label}"), label_style(!is_final)));

        spans.push(Span::styled("  |  ", theme::border()));
        spans.extend(Self::key("Esc", true));
        spans.push(Span::styled(" Close", theme::muted()));

        Line::from(spans)
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, current_step: usize, total_steps: usize) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Rounded)
            .border_style(theme::border())
            .style(Style::default().bg(theme::DARK_BG));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let nav = Paragraph::new(Self::line(current_step, total_steps)).alignment(Alignment::Center);
        frame.render_widget(nav, inner);
    }
}

impl Default for StepNavigationComponent {
    fn default() -> Self {
        Self::new()
    }
}
