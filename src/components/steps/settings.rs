// ABOUTME: Additional settings step: scheduling, resource collection and advanced crawler options

use ratatui::style::Style;

use super::StepForm;
use crate::app::state::{AppState, Field, TextField};
use crate::components::theme;
use crate::models::{CrawlData, CrawlFrequency, ResourceKind, SIMULTANEOUS_REQUESTS_RANGE};
use crate::wizard::{CredentialField, SettingFlag};

fn resource_rows(form: &mut StepForm<'_>, data: &CrawlData, kinds: &[ResourceKind]) {
    let resources = &data.additional_settings.collect_resources;
    for kind in kinds {
        form.checkbox(Field::Resource(*kind), resources.get(*kind), kind.label());
        form.note(kind.tooltip());
    }
}

pub fn build(form: &mut StepForm<'_>, data: &CrawlData, state: &AppState) {
    let settings = &data.additional_settings;

    form.section("Scheduling");
    form.checkbox(
        Field::Flag(SettingFlag::EnableRecurringCrawl),
        settings.enable_recurring_crawl,
        SettingFlag::EnableRecurringCrawl.label(),
    );
    if settings.enable_recurring_crawl {
        for frequency in CrawlFrequency::all() {
            form.radio(
                Field::Frequency(*frequency),
                settings.crawl_frequency == *frequency,
                frequency.label(),
                None,
            );
        }
    }

    form.section("Collect Resources");
    resource_rows(form, data, ResourceKind::basic());

    form.blank();
    form.accordion(
        Field::SettingsAdvanced,
        state.settings_view.advanced_open,
        "Advanced Settings",
    );
    if !state.settings_view.advanced_open {
        return;
    }

    form.section("JavaScript Support");
    form.checkbox(Field::UseCrest, settings.use_crest, "Use Crest (JavaScript rendering)");
    form.checkbox(Field::PrerenderPages, settings.prerender_pages, "Prerender pages");
    if !settings.use_crest {
        form.note("Prerendering requires Crest; turning it on enables Crest.");
    }

    form.section("Authentication");
    for field in CredentialField::all() {
        form.text_input(TextField::Credential(*field), data);
    }

    form.section("Additional Resources");
    resource_rows(form, data, ResourceKind::advanced());

    form.section("Crawl Behavior");
    for flag in [
        SettingFlag::SkipContentTypeCheck,
        SettingFlag::SkipExistingResources,
        SettingFlag::UseEtags,
    ] {
        form.checkbox(Field::Flag(flag), flag.get(settings), flag.label());
    }

    form.blank();
    form.text_input(TextField::SimultaneousRequests, data);
    let (min, max) = SIMULTANEOUS_REQUESTS_RANGE;
    if !(min..=max).contains(&settings.simultaneous_requests) {
        form.styled_note(
            &format!(
                "{} simultaneous requests is outside the usual range",
                settings.simultaneous_requests
            ),
            Style::default().fg(theme::WARNING_YELLOW),
        );
    }
}
