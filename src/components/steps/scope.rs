// ABOUTME: Scope step: all vs specific pages, exclusions and crawl limits

use ratatui::style::Style;
use regex::Regex;

use super::StepForm;
use crate::app::state::{AppState, Field, LimitTab, TextField};
use crate::components::theme;
use crate::models::{CrawlData, CrawlScope, CRAWL_DEPTH_RANGE};

/// Anchored patterns (`^...` or `...$`) that do not compile as regular expressions
pub fn invalid_patterns(patterns: &[String]) -> Vec<&str> {
    patterns
        .iter()
        .map(String::as_str)
        .filter(|pattern| pattern.starts_with('^') || pattern.ends_with('$'))
        .filter(|pattern| Regex::new(pattern).is_err())
        .collect()
}

pub fn build(form: &mut StepForm<'_>, data: &CrawlData, state: &AppState) {
    let view = state.scope_view;

    form.section("Which pages should be crawled?");
    form.blank();

    form.radio(
        Field::Scope(CrawlScope::All),
        data.scope == CrawlScope::All,
        CrawlScope::All.title(),
        None,
    );
    form.note(CrawlScope::All.description());
    form.checkbox(
        Field::CheckNewPages,
        data.check_new_pages,
        "Automatically check for new pages",
    );
    form.blank();

    form.radio(
        Field::Scope(CrawlScope::Specific),
        data.scope == CrawlScope::Specific,
        CrawlScope::Specific.title(),
        None,
    );
    form.note(CrawlScope::Specific.description());

    match data.scope {
        CrawlScope::Specific => {
            form.blank();
            form.text_input(TextField::SpecificPages, data);
            form.blank();
            form.text_input(TextField::SitemapFile, data);
            form.note("Only the file name is kept; the file itself is not read.");
        }
        CrawlScope::All => {
            form.blank();
            let label = if view.show_excluded_pages {
                "Hide Excluded Pages"
            } else {
                "Add Excluded Pages"
            };
            form.button(Field::ToggleExcludedPages, label);
            if view.show_excluded_pages {
                form.text_input(TextField::ExcludedPages, data);
            }
        }
    }

    form.blank();
    form.accordion(Field::ScopeAdvanced, view.advanced_open, "Advanced Settings");
    if !view.advanced_open {
        return;
    }

    form.tabs(&[
        (
            Field::LimitTab(LimitTab::LimitTo),
            LimitTab::LimitTo.label(),
            view.limit_tab == LimitTab::LimitTo,
        ),
        (
            Field::LimitTab(LimitTab::Exclude),
            LimitTab::Exclude.label(),
            view.limit_tab == LimitTab::Exclude,
        ),
    ]);

    let settings = &data.additional_settings;
    match view.limit_tab {
        LimitTab::LimitTo => {
            form.text_input(TextField::LimitTo, data);
            form.note("Separate prefixes with commas.");
            form.text_input(TextField::CrawlDepth, data);
            let (min, max) = CRAWL_DEPTH_RANGE;
            if !(min..=max).contains(&settings.crawl_depth) {
                form.styled_note(
                    &format!("Depth {} is outside the usual range", settings.crawl_depth),
                    Style::default().fg(theme::WARNING_YELLOW),
                );
            }
        }
        LimitTab::Exclude => {
            form.text_input(TextField::ExcludeUrls, data);
            form.note("One pattern per line. Use ^ or $ to match with a regular expression.");
            for pattern in invalid_patterns(&settings.exclude_urls) {
                form.styled_note(
                    &format!("Invalid pattern: {pattern}"),
                    Style::default().fg(theme::ERROR_RED),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_patterns_only_checks_anchored_lines() {
        let patterns = vec![
            "/blog/*".to_string(),
            "^/docs/.*$".to_string(),
            "^/broken/(".to_string(),
            "[unclosed$".to_string(),
        ];
        assert_eq!(invalid_patterns(&patterns), vec!["^/broken/(", "[unclosed$"]);
    }
}
