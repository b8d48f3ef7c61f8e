// ABOUTME: Partial crawl data updates and the top-level shallow merge
// Nested records are replaced wholesale; callers rebuild them before merging

use crate::models::{AdditionalSettings, CrawlData, CrawlScope, CrawlType};

/// A partial `CrawlData`. Every `Some` field replaces the matching top-level field.
///
/// `additional_settings` is a whole record: the merge never looks inside it,
/// so callers start from the current settings and change what they need.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlDataUpdate {
    pub crawl_type: Option<CrawlType>,
    pub scope: Option<CrawlScope>,
    pub check_new_pages: Option<bool>,
    pub specific_pages: Option<Vec<String>>,
    pub excluded_pages: Option<Vec<String>>,
    /// `Some(None)` clears the sitemap
    pub sitemap_file: Option<Option<String>>,
    pub additional_settings: Option<AdditionalSettings>,
}

impl CrawlDataUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn crawl_type(mut self, crawl_type: CrawlType) -> Self {
        self.crawl_type = Some(crawl_type);
        self
    }

    pub fn scope(mut self, scope: CrawlScope) -> Self {
        self.scope = Some(scope);
        self
    }

    pub fn check_new_pages(mut self, check: bool) -> Self {
        self.check_new_pages = Some(check);
        self
    }

    pub fn specific_pages(mut self, pages: Vec<String>) -> Self {
        self.specific_pages = Some(pages);
        self
    }

    pub fn excluded_pages(mut self, pages: Vec<String>) -> Self {
        self.excluded_pages = Some(pages);
        self
    }

    pub fn sitemap_file(mut self, file_name: Option<String>) -> Self {
        self.sitemap_file = Some(file_name);
        self
    }

    pub fn additional_settings(mut self, settings: AdditionalSettings) -> Self {
        self.additional_settings = Some(settings);
        self
    }
}

impl CrawlData {
    /// Shallow-merge `update` into this value, producing the replacement value
    pub fn merged(&self, update: CrawlDataUpdate) -> Self {
        let current = self.clone();
        Self {
            crawl_type: update.crawl_type.unwrap_or(current.crawl_type),
            scope: update.scope.unwrap_or(current.scope),
            check_new_pages: update.check_new_pages.unwrap_or(current.check_new_pages),
            specific_pages: update.specific_pages.unwrap_or(current.specific_pages),
            excluded_pages: update.excluded_pages.unwrap_or(current.excluded_pages),
            sitemap_file: update.sitemap_file.unwrap_or(current.sitemap_file),
            additional_settings: update
                .additional_settings
                .unwrap_or(current.additional_settings),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_update_is_identity() {
        let data = CrawlData::default();
        assert_eq!(data.merged(CrawlDataUpdate::new()), data);
    }

    #[test]
    fn test_merge_replaces_only_named_fields() {
        let data = CrawlData {
            specific_pages: vec!["https://a.com".to_string()],
            ..CrawlData::default()
        };

        let next = data.merged(CrawlDataUpdate::new().crawl_type(CrawlType::Discovery));

        assert_eq!(next.crawl_type, CrawlType::Discovery);
        assert_eq!(next.specific_pages, data.specific_pages);
        assert_eq!(next.additional_settings, data.additional_settings);
    }

    #[test]
    fn test_nested_settings_are_replaced_not_merged() {
        let mut data = CrawlData::default();
        data.additional_settings.user_agent = "crawler/1.0".to_string();

        // A settings record built from defaults wipes the existing user agent
        let replacement = AdditionalSettings {
            use_etags: true,
            ..AdditionalSettings::default()
        };
        let next = data.merged(CrawlDataUpdate::new().additional_settings(replacement));

        assert!(next.additional_settings.use_etags);
        assert_eq!(next.additional_settings.user_agent, "");
    }

    #[test]
    fn test_sitemap_can_be_cleared() {
        let data = CrawlData::default()
            .merged(CrawlDataUpdate::new().sitemap_file(Some("sitemap.xml".to_string())));
        assert_eq!(data.sitemap_file.as_deref(), Some("sitemap.xml"));

        let cleared = data.merged(CrawlDataUpdate::new().sitemap_file(None));
        assert_eq!(cleared.sitemap_file, None);
    }
}
