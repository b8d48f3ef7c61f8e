// ABOUTME: The wizard's fixed, ordered step list
// Each step carries the title and description shown in the sidebar and header

/// Steps in the crawl wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WizardStep {
    CrawlType,
    Scope,
    Settings,
    Review,
}

impl WizardStep {
    /// Get all steps in order
    pub fn all() -> &'static [WizardStep] {
        &[Self::CrawlType, Self::Scope, Self::Settings, Self::Review]
    }

    /// Get the step number (1-indexed for display)
    pub fn number(&self) -> usize {
        match self {
            Self::CrawlType => 1,
            Self::Scope => 2,
            Self::Settings => 3,
            Self::Review => 4,
        }
    }

    /// Step for a 1-indexed number, if it names one
    pub fn from_number(number: usize) -> Option<Self> {
        Self::all().get(number.checked_sub(1)?).copied()
    }

    /// Get the total number of steps
    pub fn total() -> usize {
        Self::all().len()
    }

    pub fn first() -> Self {
        Self::CrawlType
    }

    pub fn last() -> Self {
        Self::Review
    }

    /// Get display title for this step
    pub fn title(&self) -> &'static str {
        match self {
            Self::CrawlType => "Type",
            Self::Scope => "Scope",
            Self::Settings => "Settings",
            Self::Review => "Review",
        }
    }

    /// Get description for this step
    pub fn description(&self) -> &'static str {
        match self {
            Self::CrawlType => "Choose based on where you are in your translation process",
            Self::Scope => "Select which pages to crawl on your site",
            Self::Settings => "Configure additional crawl settings",
            Self::Review => "Review your crawl configuration",
        }
    }

    /// Get the next step, if any
    pub fn next(&self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    /// Get the previous step, if any
    pub fn previous(&self) -> Option<Self> {
        Self::from_number(self.number() - 1)
    }
}
