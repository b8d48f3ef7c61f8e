// ABOUTME: Review step: read-only summary of the configuration with per-section edit jumps

use ratatui::prelude::*;

use super::StepForm;
use crate::app::state::Field;
use crate::components::theme;
use crate::models::CrawlData;
use crate::wizard::{review_sections, ReviewItem};

pub fn build(form: &mut StepForm<'_>, data: &CrawlData) {
    for section in review_sections(data) {
        form.section(section.title);
        form.button(Field::ReviewEdit(section.edit_step), "Edit");

        for item in &section.items {
            match item {
                ReviewItem::Heading(heading) => {
                    form.styled_note(heading, theme::key_hint().add_modifier(Modifier::BOLD));
                }
                ReviewItem::Field { label, value } => {
                    form.styled_note(&format!("{label}: {value}"), theme::text());
                }
                ReviewItem::List { label, items } => {
                    form.styled_note(&format!("{label}:"), theme::text());
                    if items.is_empty() {
                        form.note("  (none)");
                    }
                    for entry in items {
                        form.styled_note(&format!("  • {entry}"), theme::text());
                    }
                }
            }
        }
    }

    form.blank();
    form.note("Nothing is submitted from this screen. Press Esc to close the wizard.");
}
