// ABOUTME: Crawl configuration record assembled by the wizard
// Pure data: every edit produces a new value through the wizard's merge contract

use serde::{Deserialize, Serialize};

/// Widget range for crawl depth. The model itself stores any integer.
pub const CRAWL_DEPTH_RANGE: (i32, i32) = (0, 10);

/// Widget range for simultaneous requests. The model itself stores any integer.
pub const SIMULTANEOUS_REQUESTS_RANGE: (i32, i32) = (1, 8);

/// What kind of crawl the user wants to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CrawlType {
    /// Nothing picked yet (valid initial value)
    #[default]
    Unset,
    Discovery,
    ContentExtraction,
}

impl CrawlType {
    /// The two user-selectable crawl types, in display order
    pub fn choices() -> &'static [CrawlType] {
        &[Self::Discovery, Self::ContentExtraction]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Unset => "Not selected",
            Self::Discovery => "Discover your site",
            Self::ContentExtraction => "Extract content for translation",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::Discovery => "Maps site structure and counts words without storing content.",
            Self::ContentExtraction => {
                "Extracts and stores content for translation. Uses your subscription word quota."
            }
        }
    }

    /// Short badge shown next to the option
    pub fn badge(&self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::Discovery => "Free",
            Self::ContentExtraction => "Uses Quota",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::Discovery => "Recommended for initial site analysis and project planning",
            Self::ContentExtraction => "Extracts content based on your subscription quota",
        }
    }

    pub fn is_set(&self) -> bool {
        *self != Self::Unset
    }
}

/// Which pages the crawl covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CrawlScope {
    #[default]
    All,
    Specific,
}

impl CrawlScope {
    pub fn choices() -> &'static [CrawlScope] {
        &[Self::All, Self::Specific]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::All => "All discovered pages",
            Self::Specific => "Specific pages",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::All => {
                "Crawl all pages that were discovered in previous scans. This ensures your content stays up-to-date."
            }
            Self::Specific => {
                "Crawl only the pages you specify. Ideal for targeting specific sections of your website."
            }
        }
    }
}

/// How often a recurring crawl runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CrawlFrequency {
    Daily,
    #[default]
    Weekly,
    Monthly,
}

impl CrawlFrequency {
    pub fn all() -> &'static [CrawlFrequency] {
        &[Self::Daily, Self::Weekly, Self::Monthly]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
        }
    }
}

/// One of the independently toggled resource collection flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    HtmlPages,
    CodeStyleFiles,
    ImagesFiles,
    ErrorPages,
    RedirectionPages,
}

impl ResourceKind {
    pub fn all() -> &'static [ResourceKind] {
        &[
            Self::HtmlPages,
            Self::CodeStyleFiles,
            Self::ImagesFiles,
            Self::ErrorPages,
            Self::RedirectionPages,
        ]
    }

    /// Resources offered in the basic settings section
    pub fn basic() -> &'static [ResourceKind] {
        &[Self::HtmlPages, Self::CodeStyleFiles, Self::ImagesFiles]
    }

    /// Resources offered under advanced settings
    pub fn advanced() -> &'static [ResourceKind] {
        &[Self::ErrorPages, Self::RedirectionPages]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::HtmlPages => "HTML Pages",
            Self::CodeStyleFiles => "Code & Style Files",
            Self::ImagesFiles => "Images & Files",
            Self::ErrorPages => "Broken Pages (4XX Errors)",
            Self::RedirectionPages => "Redirected Pages (3XX Redirects)",
        }
    }

    pub fn tooltip(&self) -> &'static str {
        match self {
            Self::HtmlPages => "Collect the main web pages from your site.",
            Self::CodeStyleFiles => "Collect JavaScript, JSON, XML, and CSS files that contain text.",
            Self::ImagesFiles => "Collect images and other binary files that may need localization.",
            Self::ErrorPages => "Collect pages with errors (broken links).",
            Self::RedirectionPages => "Collect pages with redirects.",
        }
    }
}

/// Which resource types the crawl collects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectResources {
    pub html_pages: bool,
    pub code_style_files: bool,
    pub images_files: bool,
    pub error_pages: bool,
    pub redirection_pages: bool,
}

impl Default for CollectResources {
    fn default() -> Self {
        Self {
            html_pages: true,
            code_style_files: false,
            images_files: false,
            error_pages: false,
            redirection_pages: false,
        }
    }
}

impl CollectResources {
    pub fn get(&self, kind: ResourceKind) -> bool {
        match kind {
            ResourceKind::HtmlPages => self.html_pages,
            ResourceKind::CodeStyleFiles => self.code_style_files,
            ResourceKind::ImagesFiles => self.images_files,
            ResourceKind::ErrorPages => self.error_pages,
            ResourceKind::RedirectionPages => self.redirection_pages,
        }
    }

    /// Copy with one flag flipped
    pub fn toggled(&self, kind: ResourceKind) -> Self {
        let mut next = *self;
        let flag = match kind {
            ResourceKind::HtmlPages => &mut next.html_pages,
            ResourceKind::CodeStyleFiles => &mut next.code_style_files,
            ResourceKind::ImagesFiles => &mut next.images_files,
            ResourceKind::ErrorPages => &mut next.error_pages,
            ResourceKind::RedirectionPages => &mut next.redirection_pages,
        };
        *flag = !*flag;
        next
    }

    /// Whether any resource type is collected. Always computed from current flags.
    pub fn any_enabled(&self) -> bool {
        ResourceKind::all().iter().any(|kind| self.get(*kind))
    }

    /// Enabled resource kinds in display order
    pub fn enabled(&self) -> Vec<ResourceKind> {
        ResourceKind::all()
            .iter()
            .copied()
            .filter(|kind| self.get(*kind))
            .collect()
    }
}

/// Nested settings record. Replaced wholesale by callers of the merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalSettings {
    pub user_agent: String,
    pub session_cookie: String,
    pub bearer_token: String,
    pub enable_recurring_crawl: bool,
    /// Only meaningful while `enable_recurring_crawl` is set
    pub crawl_frequency: CrawlFrequency,
    pub use_crest: bool,
    /// Never true while `use_crest` is false
    pub prerender_pages: bool,
    pub limit_to: Vec<String>,
    pub exclude_urls: Vec<String>,
    pub crawl_depth: i32,
    pub skip_content_type_check: bool,
    pub skip_existing_resources: bool,
    pub use_etags: bool,
    pub simultaneous_requests: i32,
    pub collect_resources: CollectResources,
}

impl Default for AdditionalSettings {
    fn default() -> Self {
        Self {
            user_agent: String::new(),
            session_cookie: String::new(),
            bearer_token: String::new(),
            enable_recurring_crawl: false,
            crawl_frequency: CrawlFrequency::default(),
            use_crest: false,
            prerender_pages: false,
            limit_to: Vec::new(),
            exclude_urls: Vec::new(),
            crawl_depth: 0,
            skip_content_type_check: true,
            skip_existing_resources: false,
            use_etags: false,
            simultaneous_requests: 4,
            collect_resources: CollectResources::default(),
        }
    }
}

impl AdditionalSettings {
    /// Whether any credential is filled in. Always computed from current fields.
    pub fn has_auth_configured(&self) -> bool {
        !self.user_agent.is_empty() || !self.session_cookie.is_empty() || !self.bearer_token.is_empty()
    }
}

/// Root configuration record owned by the wizard
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawlData {
    pub crawl_type: CrawlType,
    pub scope: CrawlScope,
    /// Only meaningful while scope is `All`
    pub check_new_pages: bool,
    /// Only meaningful while scope is `Specific`
    pub specific_pages: Vec<String>,
    /// Emptied whenever the scope changes
    pub excluded_pages: Vec<String>,
    /// File name of the uploaded sitemap; contents are never read
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sitemap_file: Option<String>,
    pub additional_settings: AdditionalSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_wizard_opening_state() {
        let data = CrawlData::default();
        assert_eq!(data.crawl_type, CrawlType::Unset);
        assert_eq!(data.scope, CrawlScope::All);
        assert!(!data.check_new_pages);
        assert!(data.specific_pages.is_empty());
        assert!(data.excluded_pages.is_empty());
        assert!(data.sitemap_file.is_none());

        let settings = &data.additional_settings;
        assert_eq!(settings.crawl_frequency, CrawlFrequency::Weekly);
        assert!(!settings.use_crest);
        assert!(!settings.prerender_pages);
        assert_eq!(settings.crawl_depth, 0);
        assert!(settings.skip_content_type_check);
        assert_eq!(settings.simultaneous_requests, 4);
        assert!(settings.collect_resources.html_pages);
        assert!(!settings.collect_resources.error_pages);
    }

    #[test]
    fn test_collect_resources_toggle_is_independent() {
        let resources = CollectResources::default();
        let toggled = resources.toggled(ResourceKind::ImagesFiles);

        assert!(toggled.images_files);
        assert!(toggled.html_pages);
        assert!(!toggled.code_style_files);
        // Source value untouched
        assert!(!resources.images_files);
    }

    #[test]
    fn test_any_enabled_follows_flags() {
        let mut resources = CollectResources::default();
        assert!(resources.any_enabled());

        resources.html_pages = false;
        assert!(!resources.any_enabled());

        resources.redirection_pages = true;
        assert!(resources.any_enabled());
        assert_eq!(resources.enabled(), vec![ResourceKind::RedirectionPages]);
    }

    #[test]
    fn test_has_auth_configured() {
        let mut settings = AdditionalSettings::default();
        assert!(!settings.has_auth_configured());

        settings.session_cookie = "PHPSESSID=abc".to_string();
        assert!(settings.has_auth_configured());
    }

    #[test]
    fn test_serialized_shape_uses_camel_case_field_names() {
        let json = serde_json::to_value(CrawlData::default()).unwrap();
        assert_eq!(json["crawlType"], "unset");
        assert_eq!(json["scope"], "all");
        assert_eq!(json["additionalSettings"]["crawlFrequency"], "weekly");
        assert_eq!(json["additionalSettings"]["collectResources"]["htmlPages"], true);
        assert!(json.get("sitemapFile").is_none());

        let mut data = CrawlData::default();
        data.crawl_type = CrawlType::ContentExtraction;
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["crawlType"], "content-extraction");
    }
}
