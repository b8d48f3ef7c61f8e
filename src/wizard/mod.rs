// ABOUTME: Crawl wizard core: step list, partial updates, step reducers and review
// No terminal code lives here; the app layer drives it from key events

pub mod controller;
pub mod reducers;
pub mod review;
pub mod step;
pub mod update;

pub use controller::CrawlWizard;
pub use reducers::{CredentialField, SettingFlag};
pub use review::{review_sections, ReviewItem, ReviewSection};
pub use step::WizardStep;
pub use update::CrawlDataUpdate;
