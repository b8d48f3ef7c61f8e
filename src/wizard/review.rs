// ABOUTME: Read-only review of the crawl configuration, grouped by wizard step
// Rebuilt from the current data on every call so derived flags never go stale

use super::step::WizardStep;
use crate::models::{CrawlData, CrawlScope};

/// One row in a review section
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewItem {
    /// Subsection heading
    Heading(&'static str),
    /// `label: value`
    Field { label: &'static str, value: String },
    /// `label:` followed by one entry per row, in stored order
    List { label: &'static str, items: Vec<String> },
}

impl ReviewItem {
    fn field(label: &'static str, value: impl Into<String>) -> Self {
        Self::Field {
            label,
            value: value.into(),
        }
    }
}

/// A titled group of review rows with the step that edits them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewSection {
    pub title: &'static str,
    pub edit_step: WizardStep,
    pub items: Vec<ReviewItem>,
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

fn enabled_disabled(value: bool) -> &'static str {
    if value {
        "Enabled"
    } else {
        "Disabled"
    }
}

/// Show only the first few characters of a secret
pub fn mask_secret(secret: &str) -> String {
    const VISIBLE: usize = 4;
    let visible: String = secret.chars().take(VISIBLE).collect();
    if secret.chars().count() <= VISIBLE {
        "•".repeat(secret.chars().count())
    } else {
        format!("{visible}••••")
    }
}

/// Build the Type / Scope / Settings review sections
pub fn review_sections(data: &CrawlData) -> Vec<ReviewSection> {
    vec![type_section(data), scope_section(data), settings_section(data)]
}

fn type_section(data: &CrawlData) -> ReviewSection {
    ReviewSection {
        title: "Crawl Type",
        edit_step: WizardStep::CrawlType,
        items: vec![ReviewItem::field("Type", data.crawl_type.title())],
    }
}

fn scope_section(data: &CrawlData) -> ReviewSection {
    let mut items = vec![ReviewItem::field("Scope", data.scope.title())];

    match data.scope {
        CrawlScope::All => {
            items.push(ReviewItem::field("Check for new pages", yes_no(data.check_new_pages)));
        }
        CrawlScope::Specific => {
            items.push(ReviewItem::List {
                label: "Specific pages",
                items: data.specific_pages.clone(),
            });
        }
    }

    if let Some(sitemap) = &data.sitemap_file {
        items.push(ReviewItem::field("Sitemap file", sitemap.clone()));
    }

    if data.scope == CrawlScope::All && !data.excluded_pages.is_empty() {
        items.push(ReviewItem::List {
            label: "Excluded pages",
            items: data.excluded_pages.clone(),
        });
    }

    ReviewSection {
        title: "Crawl Scope",
        edit_step: WizardStep::Scope,
        items,
    }
}

fn settings_section(data: &CrawlData) -> ReviewSection {
    let settings = &data.additional_settings;
    let mut items = vec![
        ReviewItem::Heading("Scheduling"),
        ReviewItem::field("Recurring crawl", enabled_disabled(settings.enable_recurring_crawl)),
    ];
    if settings.enable_recurring_crawl {
        items.push(ReviewItem::field("Crawl frequency", settings.crawl_frequency.label()));
    }

    items.push(ReviewItem::Heading("JavaScript Support"));
    items.push(ReviewItem::field("Use Crest", yes_no(settings.use_crest)));
    items.push(ReviewItem::field("Prerender pages", yes_no(settings.prerender_pages)));

    items.push(ReviewItem::Heading("Limits"));
    if !settings.limit_to.is_empty() {
        items.push(ReviewItem::List {
            label: "Only URLs starting with",
            items: settings.limit_to.clone(),
        });
    }
    if !settings.exclude_urls.is_empty() {
        items.push(ReviewItem::List {
            label: "Exclude URLs",
            items: settings.exclude_urls.clone(),
        });
    }
    items.push(ReviewItem::field("Crawl depth", settings.crawl_depth.to_string()));
    items.push(ReviewItem::field(
        "Simultaneous requests",
        settings.simultaneous_requests.to_string(),
    ));
    items.push(ReviewItem::field(
        "Skip content-type check",
        yes_no(settings.skip_content_type_check),
    ));
    items.push(ReviewItem::field(
        "Skip existing resources",
        yes_no(settings.skip_existing_resources),
    ));
    items.push(ReviewItem::field("Use ETags", yes_no(settings.use_etags)));

    if settings.collect_resources.any_enabled() {
        items.push(ReviewItem::Heading("Collected Resources"));
        items.push(ReviewItem::List {
            label: "Resources",
            items: settings
                .collect_resources
                .enabled()
                .iter()
                .map(|kind| kind.label().to_string())
                .collect(),
        });
    }

    if settings.has_auth_configured() {
        items.push(ReviewItem::Heading("Authentication"));
        if !settings.user_agent.is_empty() {
            items.push(ReviewItem::field("User agent", settings.user_agent.clone()));
        }
        if !settings.session_cookie.is_empty() {
            items.push(ReviewItem::field("Session cookie", mask_secret(&settings.session_cookie)));
        }
        if !settings.bearer_token.is_empty() {
            items.push(ReviewItem::field("Bearer token", mask_secret(&settings.bearer_token)));
        }
    }

    ReviewSection {
        title: "Additional Settings",
        edit_step: WizardStep::Settings,
        items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CrawlType;
    use pretty_assertions::assert_eq;

    fn has_heading(section: &ReviewSection, heading: &str) -> bool {
        section
            .items
            .iter()
            .any(|item| matches!(item, ReviewItem::Heading(h) if *h == heading))
    }

    #[test]
    fn test_sections_point_at_their_steps() {
        let sections = review_sections(&CrawlData::default());
        let steps: Vec<_> = sections.iter().map(|s| s.edit_step).collect();
        assert_eq!(steps, vec![WizardStep::CrawlType, WizardStep::Scope, WizardStep::Settings]);
    }

    #[test]
    fn test_specific_pages_listed_in_order() {
        let data = CrawlData {
            crawl_type: CrawlType::Discovery,
            scope: CrawlScope::Specific,
            specific_pages: vec!["https://b.com".to_string(), "https://a.com".to_string()],
            ..CrawlData::default()
        };

        let sections = review_sections(&data);
        assert_eq!(sections[0].items, vec![ReviewItem::field("Type", "Discover your site")]);
        assert_eq!(
            sections[1].items,
            vec![
                ReviewItem::field("Scope", "Specific pages"),
                ReviewItem::List {
                    label: "Specific pages",
                    items: vec!["https://b.com".to_string(), "https://a.com".to_string()],
                },
            ]
        );
    }

    #[test]
    fn test_excluded_pages_only_for_all_scope() {
        let data = CrawlData {
            excluded_pages: vec!["*.pdf".to_string()],
            ..CrawlData::default()
        };
        let sections = review_sections(&data);
        assert!(sections[1]
            .items
            .iter()
            .any(|item| matches!(item, ReviewItem::List { label: "Excluded pages", .. })));
    }

    #[test]
    fn test_subsections_follow_current_data() {
        let mut data = CrawlData::default();
        let sections = review_sections(&data);
        assert!(has_heading(&sections[2], "Collected Resources"));
        assert!(!has_heading(&sections[2], "Authentication"));

        data.additional_settings.collect_resources.html_pages = false;
        data.additional_settings.user_agent = "crawler/1.0".to_string();
        let sections = review_sections(&data);
        assert!(!has_heading(&sections[2], "Collected Resources"));
        assert!(has_heading(&sections[2], "Authentication"));
    }

    #[test]
    fn test_frequency_hidden_unless_recurring() {
        let mut data = CrawlData::default();
        let shows_frequency = |data: &CrawlData| {
            review_sections(data)[2]
                .items
                .iter()
                .any(|item| matches!(item, ReviewItem::Field { label: "Crawl frequency", .. }))
        };
        assert!(!shows_frequency(&data));

        data.additional_settings.enable_recurring_crawl = true;
        assert!(shows_frequency(&data));
    }

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret("abc"), "•••");
        assert_eq!(mask_secret("Bearer xyz"), "Bear••••");
    }
}
