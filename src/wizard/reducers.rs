// ABOUTME: Step reducers turning user edits into partial crawl data updates
// Each reducer reads the current data and returns the update to merge; none mutate

use std::path::Path;

use super::update::CrawlDataUpdate;
use crate::models::{
    parse_int, parse_list, AdditionalSettings, CrawlData, CrawlFrequency, CrawlScope, CrawlType,
    ListDelimiter, ResourceKind,
};

/// Boolean settings that flip without touching anything else
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingFlag {
    EnableRecurringCrawl,
    SkipContentTypeCheck,
    SkipExistingResources,
    UseEtags,
}

impl SettingFlag {
    pub fn label(&self) -> &'static str {
        match self {
            Self::EnableRecurringCrawl => "Enable Recurring Crawl",
            Self::SkipContentTypeCheck => "Skip Content-Type Check",
            Self::SkipExistingResources => "Skip Existing Resources",
            Self::UseEtags => "Use ETags",
        }
    }

    pub fn get(&self, settings: &AdditionalSettings) -> bool {
        match self {
            Self::EnableRecurringCrawl => settings.enable_recurring_crawl,
            Self::SkipContentTypeCheck => settings.skip_content_type_check,
            Self::SkipExistingResources => settings.skip_existing_resources,
            Self::UseEtags => settings.use_etags,
        }
    }
}

/// Free-text credential fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialField {
    UserAgent,
    SessionCookie,
    BearerToken,
}

impl CredentialField {
    pub fn all() -> &'static [CredentialField] {
        &[Self::UserAgent, Self::SessionCookie, Self::BearerToken]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::UserAgent => "Custom User Agent",
            Self::SessionCookie => "Session Cookie",
            Self::BearerToken => "Bearer Token",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::UserAgent => {
                "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/132.0.0.0 Safari/537.36"
            }
            Self::SessionCookie => "e.g PHPSESSID=xegpzebddfejxzuvqzpq",
            Self::BearerToken => "Bearer BQD0AGyylarlqiDrpzikCwS5",
        }
    }

    pub fn get<'a>(&self, settings: &'a AdditionalSettings) -> &'a str {
        match self {
            Self::UserAgent => &settings.user_agent,
            Self::SessionCookie => &settings.session_cookie,
            Self::BearerToken => &settings.bearer_token,
        }
    }
}

fn with_settings(data: &CrawlData, edit: impl FnOnce(&mut AdditionalSettings)) -> CrawlDataUpdate {
    let mut settings = data.additional_settings.clone();
    edit(&mut settings);
    CrawlDataUpdate::new().additional_settings(settings)
}

// Crawl type step

pub fn select_crawl_type(choice: CrawlType) -> CrawlDataUpdate {
    CrawlDataUpdate::new().crawl_type(choice)
}

// Scope step

/// Switching scope always empties the excluded pages
pub fn change_scope(scope: CrawlScope) -> CrawlDataUpdate {
    CrawlDataUpdate::new().scope(scope).excluded_pages(Vec::new())
}

pub fn set_check_new_pages(checked: bool) -> CrawlDataUpdate {
    CrawlDataUpdate::new().check_new_pages(checked)
}

/// One URL per line
pub fn specific_pages_from_text(text: &str) -> CrawlDataUpdate {
    CrawlDataUpdate::new().specific_pages(parse_list(text, ListDelimiter::Newline))
}

/// One URL or pattern per line
pub fn excluded_pages_from_text(text: &str) -> CrawlDataUpdate {
    CrawlDataUpdate::new().excluded_pages(parse_list(text, ListDelimiter::Newline))
}

/// Keep only the picked file's name. An empty pick clears the sitemap.
pub fn sitemap_selected(path: &str) -> CrawlDataUpdate {
    let trimmed = path.trim();
    let file_name = if trimmed.is_empty() {
        None
    } else {
        Path::new(trimmed)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
    };
    CrawlDataUpdate::new().sitemap_file(file_name)
}

/// URL prefixes, comma separated
pub fn limit_to_from_text(data: &CrawlData, text: &str) -> CrawlDataUpdate {
    let limit_to = parse_list(text, ListDelimiter::Comma);
    with_settings(data, |settings| settings.limit_to = limit_to)
}

/// Exclusion patterns, one per line
pub fn exclude_urls_from_text(data: &CrawlData, text: &str) -> CrawlDataUpdate {
    let exclude_urls = parse_list(text, ListDelimiter::Newline);
    with_settings(data, |settings| settings.exclude_urls = exclude_urls)
}

/// Stores the integer as given; range limits belong to the input widget
pub fn set_crawl_depth(data: &CrawlData, depth: i32) -> CrawlDataUpdate {
    with_settings(data, |settings| settings.crawl_depth = depth)
}

/// `None` when the text holds no integer, leaving the depth unchanged
pub fn crawl_depth_from_text(data: &CrawlData, text: &str) -> Option<CrawlDataUpdate> {
    parse_int(text).map(|depth| set_crawl_depth(data, depth))
}

// Settings step

pub fn toggle_flag(data: &CrawlData, flag: SettingFlag) -> CrawlDataUpdate {
    with_settings(data, |settings| {
        let value = match flag {
            SettingFlag::EnableRecurringCrawl => &mut settings.enable_recurring_crawl,
            SettingFlag::SkipContentTypeCheck => &mut settings.skip_content_type_check,
            SettingFlag::SkipExistingResources => &mut settings.skip_existing_resources,
            SettingFlag::UseEtags => &mut settings.use_etags,
        };
        *value = !*value;
    })
}

/// Does not enable recurring crawls by itself
pub fn set_crawl_frequency(data: &CrawlData, frequency: CrawlFrequency) -> CrawlDataUpdate {
    with_settings(data, |settings| settings.crawl_frequency = frequency)
}

/// Turning prerendering on also turns Crest on
pub fn toggle_prerender_pages(data: &CrawlData) -> CrawlDataUpdate {
    with_settings(data, |settings| {
        let prerender = !settings.prerender_pages;
        settings.prerender_pages = prerender;
        settings.use_crest = prerender || settings.use_crest;
    })
}

/// Turning Crest off also turns prerendering off; turning it on leaves prerendering alone
pub fn set_use_crest(data: &CrawlData, checked: bool) -> CrawlDataUpdate {
    with_settings(data, |settings| {
        settings.use_crest = checked;
        settings.prerender_pages = checked && settings.prerender_pages;
    })
}

pub fn toggle_use_crest(data: &CrawlData) -> CrawlDataUpdate {
    set_use_crest(data, !data.additional_settings.use_crest)
}

pub fn toggle_resource(data: &CrawlData, kind: ResourceKind) -> CrawlDataUpdate {
    with_settings(data, |settings| {
        settings.collect_resources = settings.collect_resources.toggled(kind);
    })
}

pub fn set_credential(data: &CrawlData, field: CredentialField, value: &str) -> CrawlDataUpdate {
    with_settings(data, |settings| {
        let target = match field {
            CredentialField::UserAgent => &mut settings.user_agent,
            CredentialField::SessionCookie => &mut settings.session_cookie,
            CredentialField::BearerToken => &mut settings.bearer_token,
        };
        *target = value.to_string();
    })
}

pub fn set_simultaneous_requests(data: &CrawlData, requests: i32) -> CrawlDataUpdate {
    with_settings(data, |settings| settings.simultaneous_requests = requests)
}

pub fn simultaneous_requests_from_text(data: &CrawlData, text: &str) -> Option<CrawlDataUpdate> {
    parse_int(text).map(|requests| set_simultaneous_requests(data, requests))
}
