// ABOUTME: Wizard controller owning the current step and the crawl data
// The only mutable state in the wizard; steps hand it partial updates

use tracing::{debug, warn};

use super::step::WizardStep;
use super::update::CrawlDataUpdate;
use crate::models::CrawlData;

/// Crawl wizard state: where the user is and what they have configured so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlWizard {
    current_step: WizardStep,
    crawl_data: CrawlData,
}

impl CrawlWizard {
    /// Fresh wizard on the first step with default data
    pub fn new() -> Self {
        Self {
            current_step: WizardStep::first(),
            crawl_data: CrawlData::default(),
        }
    }

    pub fn current_step(&self) -> WizardStep {
        self.current_step
    }

    pub fn crawl_data(&self) -> &CrawlData {
        &self.crawl_data
    }

    /// Shallow-merge `update` and replace the crawl data with the result.
    ///
    /// Crest being off forces prerendering off before the new value is
    /// stored, whichever path produced it.
    pub fn update_crawl_data(&mut self, update: CrawlDataUpdate) {
        let mut next = self.crawl_data.merged(update);

        let settings = &mut next.additional_settings;
        if !settings.use_crest && settings.prerender_pages {
            debug!("Crest disabled, clearing prerender pages");
            settings.prerender_pages = false;
        }

        self.crawl_data = next;
    }

    /// Advance one step; stays put on the last step
    pub fn go_next(&mut self) {
        if let Some(next) = self.current_step.next() {
            debug!(from = self.current_step.number(), to = next.number(), "Wizard step forward");
            self.current_step = next;
        }
    }

    /// Go back one step; stays put on the first step
    pub fn go_prev(&mut self) {
        if let Some(prev) = self.current_step.previous() {
            debug!(from = self.current_step.number(), to = prev.number(), "Wizard step back");
            self.current_step = prev;
        }
    }

    /// Jump straight to `step`
    pub fn go_to_step(&mut self, step: WizardStep) {
        debug!(from = self.current_step.number(), to = step.number(), "Wizard jump");
        self.current_step = step;
    }

    /// Jump by 1-indexed step number. Numbers outside the step list are ignored.
    pub fn go_to_step_number(&mut self, number: usize) {
        match WizardStep::from_number(number) {
            Some(step) => self.go_to_step(step),
            None => warn!(number, "Ignoring jump to unknown wizard step"),
        }
    }

    pub fn is_first_step(&self) -> bool {
        self.current_step == WizardStep::first()
    }

    /// Check if we're on the final step
    pub fn is_final_step(&self) -> bool {
        self.current_step == WizardStep::last()
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        self.current_step.previous().is_some()
    }

    /// Label for the forward control
    pub fn forward_label(&self) -> &'static str {
        if self.is_final_step() {
            "Finish"
        } else {
            "Next"
        }
    }
}

impl Default for CrawlWizard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AdditionalSettings, CrawlType};

    #[test]
    fn test_wizard_initialization() {
        let wizard = CrawlWizard::new();
        assert_eq!(wizard.current_step(), WizardStep::CrawlType);
        assert_eq!(wizard.crawl_data(), &CrawlData::default());
        assert!(wizard.is_first_step());
        assert!(!wizard.can_go_back());
        assert_eq!(wizard.forward_label(), "Next");
    }

    #[test]
    fn test_navigation_saturates() {
        let mut wizard = CrawlWizard::new();
        wizard.go_prev();
        assert_eq!(wizard.current_step(), WizardStep::CrawlType);

        for _ in 0..10 {
            wizard.go_next();
        }
        assert_eq!(wizard.current_step(), WizardStep::Review);
        assert!(wizard.is_final_step());
        assert_eq!(wizard.forward_label(), "Finish");
    }

    #[test]
    fn test_advancing_is_never_gated() {
        let mut wizard = CrawlWizard::new();
        assert_eq!(wizard.crawl_data().crawl_type, CrawlType::Unset);
        wizard.go_next();
        assert_eq!(wizard.current_step(), WizardStep::Scope);
    }

    #[test]
    fn test_go_to_step_number_ignores_unknown_steps() {
        let mut wizard = CrawlWizard::new();
        wizard.go_to_step_number(3);
        assert_eq!(wizard.current_step(), WizardStep::Settings);

        wizard.go_to_step_number(0);
        wizard.go_to_step_number(9);
        assert_eq!(wizard.current_step(), WizardStep::Settings);
    }

    #[test]
    fn test_update_clears_prerender_without_crest() {
        let mut wizard = CrawlWizard::new();
        let settings = AdditionalSettings {
            prerender_pages: true,
            use_crest: false,
            ..AdditionalSettings::default()
        };

        wizard.update_crawl_data(CrawlDataUpdate::new().additional_settings(settings));

        assert!(!wizard.crawl_data().additional_settings.prerender_pages);
        assert!(!wizard.crawl_data().additional_settings.use_crest);
    }
}
