// ABOUTME: Step body renderers and the line-based form builder they share
// Every focusable row is marked so the body can scroll the focused field into view

pub mod crawl_type;
pub mod scope;
pub mod settings;
pub mod summary;

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::theme;
use crate::app::state::{AppState, Field, TextField};
use crate::models::CrawlData;
use crate::wizard::WizardStep;

/// Rows kept visible below the focused row when scrolling
const LOOKAHEAD: usize = 4;

/// Accumulates the rows of one step body
pub struct StepForm<'a> {
    state: &'a AppState,
    focused: Option<Field>,
    lines: Vec<Line<'static>>,
    focus_line: Option<usize>,
}

impl<'a> StepForm<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self {
            state,
            focused: state.focused_field(),
            lines: Vec::new(),
            focus_line: None,
        }
    }

    fn marker(&mut self, field: Field) -> (Span<'static>, bool) {
        let is_focused = self.focused == Some(field);
        if is_focused {
            self.focus_line = Some(self.lines.len());
        }
        let marker = if is_focused { "▶ " } else { "  " };
        (Span::styled(marker, theme::focused()), is_focused)
    }

    fn label_style(is_focused: bool) -> Style {
        if is_focused {
            theme::focused()
        } else {
            theme::text()
        }
    }

    pub fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    pub fn section(&mut self, title: &str) {
        if !self.lines.is_empty() {
            self.blank();
        }
        self.lines.push(Line::from(Span::styled(
            title.to_string(),
            Style::default()
                .fg(theme::CORNFLOWER_BLUE)
                .add_modifier(Modifier::BOLD),
        )));
    }

    /// Indented secondary text
    pub fn note(&mut self, text: &str) {
        self.styled_note(text, theme::muted());
    }

    pub fn styled_note(&mut self, text: &str, style: Style) {
        self.lines.push(Line::from(Span::styled(format!("      {text}"), style)));
    }

    pub fn radio(&mut self, field: Field, selected: bool, label: &str, badge: Option<&str>) {
        let (marker, is_focused) = self.marker(field);
        let bullet = if selected { "(●) " } else { "( ) " };
        let mut spans = vec![
            marker,
            Span::styled(bullet, if selected { theme::selected() } else { theme::muted() }),
            Span::styled(label.to_string(), Self::label_style(is_focused)),
        ];
        if let Some(badge) = badge.filter(|b| !b.is_empty()) {
            spans.push(Span::styled(format!("  [{badge}]"), theme::key_hint()));
        }
        self.lines.push(Line::from(spans));
    }

    pub fn checkbox(&mut self, field: Field, checked: bool, label: &str) {
        let (marker, is_focused) = self.marker(field);
        let box_text = if checked { "[x] " } else { "[ ] " };
        self.lines.push(Line::from(vec![
            marker,
            Span::styled(box_text, if checked { theme::selected() } else { theme::muted() }),
            Span::styled(label.to_string(), Self::label_style(is_focused)),
        ]));
    }

    /// Collapsible section header
    pub fn accordion(&mut self, field: Field, open: bool, label: &str) {
        let (marker, is_focused) = self.marker(field);
        let arrow = if open { "▾ " } else { "▸ " };
        self.lines.push(Line::from(vec![
            marker,
            Span::styled(arrow, theme::key_hint()),
            Span::styled(label.to_string(), Self::label_style(is_focused)),
        ]));
    }

    pub fn button(&mut self, field: Field, label: &str) {
        let (marker, is_focused) = self.marker(field);
        self.lines.push(Line::from(vec![
            marker,
            Span::styled(format!("[ {label} ]"), Self::label_style(is_focused)),
        ]));
    }

    /// Several focusable tabs on one row
    pub fn tabs(&mut self, tabs: &[(Field, &str, bool)]) {
        let mut spans = vec![Span::raw("  ")];
        for (field, label, active) in tabs {
            let is_focused = self.focused == Some(*field);
            if is_focused {
                self.focus_line = Some(self.lines.len());
            }
            let style = match (is_focused, *active) {
                (true, _) => theme::focused().add_modifier(Modifier::REVERSED),
                (false, true) => theme::selected().add_modifier(Modifier::UNDERLINED),
                (false, false) => theme::muted(),
            };
            spans.push(Span::styled(format!(" {label} "), style));
            spans.push(Span::styled(" │ ", theme::border()));
        }
        spans.pop();
        self.lines.push(Line::from(spans));
    }

    /// Labelled text input, showing the live editor when this field is being typed into
    pub fn text_input(&mut self, field: TextField, data: &CrawlData) {
        let (marker, is_focused) = self.marker(Field::Text(field));
        let mut label = vec![marker, Span::styled(field.label().to_string(), Self::label_style(is_focused))];
        if let Some((min, max)) = field.numeric_range() {
            label.push(Span::styled(format!("  ({min}-{max}, +/- to adjust)"), theme::muted()));
        }
        self.lines.push(Line::from(label));

        let state = self.state;
        let editing = state
            .editor
            .as_ref()
            .filter(|active| active.field == field)
            .map(|active| &active.editor);

        let gutter = Span::styled("    │ ", theme::border());
        match editing {
            Some(editor) => {
                let (cursor_line, cursor_col) = editor.cursor();
                for (idx, text) in editor.lines().iter().enumerate() {
                    let mut spans = vec![gutter.clone()];
                    if idx == cursor_line {
                        self.focus_line = Some(self.lines.len());
                        spans.extend(cursor_spans(text, cursor_col, state.show_cursor));
                    } else {
                        spans.push(Span::styled(text.clone(), theme::text()));
                    }
                    self.lines.push(Line::from(spans));
                }
            }
            None => {
                let value = field.display_text(data);
                if value.is_empty() {
                    self.lines.push(Line::from(vec![
                        gutter,
                        Span::styled(field.placeholder().to_string(), theme::muted()),
                    ]));
                } else {
                    for text in value.split('\n') {
                        self.lines.push(Line::from(vec![
                            gutter.clone(),
                            Span::styled(text.to_string(), theme::text()),
                        ]));
                    }
                }
            }
        }
    }

    /// Rows and the index of the row that must stay visible
    pub fn finish(self) -> (Vec<Line<'static>>, Option<usize>) {
        (self.lines, self.focus_line)
    }
}

/// Split `text` around a block cursor at char column `col`
fn cursor_spans(text: &str, col: usize, show_cursor: bool) -> Vec<Span<'static>> {
    let before: String = text.chars().take(col).collect();
    let at: Option<char> = text.chars().nth(col);
    let after: String = text.chars().skip(col + 1).collect();

    let cursor_style = if show_cursor { theme::cursor() } else { theme::text() };
    let mut spans = Vec::new();
    if !before.is_empty() {
        spans.push(Span::styled(before, theme::text()));
    }
    match at {
        Some(ch) => spans.push(Span::styled(ch.to_string(), cursor_style)),
        None if show_cursor => spans.push(Span::styled("█", Style::default().fg(theme::SELECTION_GREEN))),
        None => spans.push(Span::raw(" ")),
    }
    if !after.is_empty() {
        spans.push(Span::styled(after, theme::text()));
    }
    spans
}

/// First visible row so that `focus_line` plus a few rows below it fit in `height`
pub fn scroll_offset(focus_line: Option<usize>, height: usize, total: usize) -> usize {
    let Some(focus) = focus_line else {
        return 0;
    };
    let wanted = (focus + LOOKAHEAD + 1).saturating_sub(height);
    wanted.min(total.saturating_sub(height)).min(focus)
}

/// Render the body of the current step
pub fn render_step(frame: &mut Frame, area: Rect, state: &AppState) {
    let (Some(step), Some(data)) = (state.current_step(), state.crawl_data()) else {
        return;
    };

    let mut form = StepForm::new(state);
    match step {
        WizardStep::CrawlType => crawl_type::build(&mut form, data),
        WizardStep::Scope => scope::build(&mut form, data, state),
        WizardStep::Settings => settings::build(&mut form, data, state),
        WizardStep::Review => summary::build(&mut form, data),
    }
    let (lines, focus_line) = form.finish();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(Style::default().bg(theme::PANEL_BG));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let offset = scroll_offset(focus_line, inner.height as usize, lines.len());
    let body = Paragraph::new(lines).scroll((offset as u16, 0));
    frame.render_widget(body, inner);
}
