// ABOUTME: Data model for the crawl configuration and its text-input helpers

pub mod crawl_data;
pub mod list_input;

pub use crawl_data::{
    AdditionalSettings, CollectResources, CrawlData, CrawlFrequency, CrawlScope, CrawlType,
    ResourceKind, CRAWL_DEPTH_RANGE, SIMULTANEOUS_REQUESTS_RANGE,
};
pub use list_input::{join_list, parse_int, parse_list, ListDelimiter};
