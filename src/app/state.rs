// ABOUTME: Application state for the crawl wizard TUI
// Hosts the wizard like a modal: opening creates fresh data, closing discards it

use tracing::{debug, info, warn};

use super::field_editor::FieldEditor;
use crate::models::{
    join_list, CrawlData, CrawlFrequency, CrawlScope, CrawlType, ListDelimiter, ResourceKind,
    CRAWL_DEPTH_RANGE, SIMULTANEOUS_REQUESTS_RANGE,
};
use crate::wizard::{reducers, CrawlDataUpdate, CrawlWizard, CredentialField, SettingFlag, WizardStep};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Landing screen with the "open wizard" prompt
    Launcher,
    /// The wizard modal
    Wizard,
}

/// Fields that take typed input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    SpecificPages,
    SitemapFile,
    ExcludedPages,
    LimitTo,
    CrawlDepth,
    ExcludeUrls,
    Credential(CredentialField),
    SimultaneousRequests,
}

impl TextField {
    pub fn label(&self) -> &'static str {
        match self {
            Self::SpecificPages => "Enter specific pages to crawl (one URL per line)",
            Self::SitemapFile => "Or upload a sitemap file (.xml, .txt)",
            Self::ExcludedPages => "Excluded pages (one URL or pattern per line)",
            Self::LimitTo => "Only Crawl URLs Starting With",
            Self::CrawlDepth => "Crawl Depth",
            Self::ExcludeUrls => "Exclude URLs",
            Self::Credential(field) => field.label(),
            Self::SimultaneousRequests => "Simultaneous Requests",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::SpecificPages => "https://example.com/page1",
            Self::SitemapFile => "path/to/sitemap.xml",
            Self::ExcludedPages => "https://example.com/exclude-this-page",
            Self::LimitTo => "/en/, /products/",
            Self::CrawlDepth | Self::SimultaneousRequests => "",
            Self::ExcludeUrls => "/blog/*",
            Self::Credential(field) => field.placeholder(),
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::SpecificPages | Self::ExcludedPages | Self::ExcludeUrls)
    }

    /// Widget range for numeric inputs
    pub fn numeric_range(&self) -> Option<(i32, i32)> {
        match self {
            Self::CrawlDepth => Some(CRAWL_DEPTH_RANGE),
            Self::SimultaneousRequests => Some(SIMULTANEOUS_REQUESTS_RANGE),
            _ => None,
        }
    }

    /// Text shown for the field, rebuilt from the stored value
    pub fn display_text(&self, data: &CrawlData) -> String {
        let settings = &data.additional_settings;
        match self {
            Self::SpecificPages => join_list(&data.specific_pages, ListDelimiter::Newline),
            Self::SitemapFile => data.sitemap_file.clone().unwrap_or_default(),
            Self::ExcludedPages => join_list(&data.excluded_pages, ListDelimiter::Newline),
            Self::LimitTo => join_list(&settings.limit_to, ListDelimiter::Comma),
            Self::CrawlDepth => settings.crawl_depth.to_string(),
            Self::ExcludeUrls => join_list(&settings.exclude_urls, ListDelimiter::Newline),
            Self::Credential(field) => field.get(settings).to_string(),
            Self::SimultaneousRequests => settings.simultaneous_requests.to_string(),
        }
    }

    fn numeric_value(&self, data: &CrawlData) -> Option<i32> {
        match self {
            Self::CrawlDepth => Some(data.additional_settings.crawl_depth),
            Self::SimultaneousRequests => Some(data.additional_settings.simultaneous_requests),
            _ => None,
        }
    }
}

/// Tabs inside the scope step's advanced settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LimitTab {
    #[default]
    LimitTo,
    Exclude,
}

impl LimitTab {
    pub fn label(&self) -> &'static str {
        match self {
            Self::LimitTo => "Limit To",
            Self::Exclude => "Exclude",
        }
    }
}

/// A focusable element in the current step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    CrawlType(CrawlType),
    Scope(CrawlScope),
    CheckNewPages,
    ToggleExcludedPages,
    ScopeAdvanced,
    LimitTab(LimitTab),
    Text(TextField),
    Flag(SettingFlag),
    Frequency(CrawlFrequency),
    Resource(ResourceKind),
    SettingsAdvanced,
    UseCrest,
    PrerenderPages,
    ReviewEdit(WizardStep),
}

/// Transient view toggles of the scope step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScopeViewState {
    pub show_excluded_pages: bool,
    pub advanced_open: bool,
    pub limit_tab: LimitTab,
}

/// Transient view toggles of the settings step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SettingsViewState {
    pub advanced_open: bool,
}

/// The field being typed into and its buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveEditor {
    pub field: TextField,
    pub editor: FieldEditor,
}

#[derive(Debug, Clone)]
pub struct ConfirmationDialog {
    pub title: String,
    pub message: String,
    pub confirm_action: ConfirmAction,
    pub selected_option: bool, // true = Yes, false = No
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    /// Close the wizard and drop everything entered
    DiscardWizard,
}

#[derive(Debug)]
pub struct AppState {
    pub current_view: View,
    /// Present only while the wizard is open
    pub wizard: Option<CrawlWizard>,
    /// Index into `fields()` for the current step
    pub focus: usize,
    pub editor: Option<ActiveEditor>,
    pub scope_view: ScopeViewState,
    pub settings_view: SettingsViewState,
    pub confirmation_dialog: Option<ConfirmationDialog>,
    /// Whether to show cursor (blinks on tick)
    pub show_cursor: bool,
    pub should_quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            current_view: View::Launcher,
            wizard: None,
            focus: 0,
            editor: None,
            scope_view: ScopeViewState::default(),
            settings_view: SettingsViewState::default(),
            confirmation_dialog: None,
            show_cursor: true,
            should_quit: false,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn is_wizard_open(&self) -> bool {
        self.wizard.is_some()
    }

    pub fn crawl_data(&self) -> Option<&CrawlData> {
        self.wizard.as_ref().map(CrawlWizard::crawl_data)
    }

    pub fn current_step(&self) -> Option<WizardStep> {
        self.wizard.as_ref().map(CrawlWizard::current_step)
    }

    // ------------------------------------------------------------------
    // Modal lifecycle
    // ------------------------------------------------------------------

    /// Open the wizard with fresh defaults
    pub fn open_wizard(&mut self) {
        info!("Opening crawl wizard");
        self.wizard = Some(CrawlWizard::new());
        self.current_view = View::Wizard;
        self.reset_step_view();
    }

    /// Close the wizard, discarding the configuration
    pub fn close_wizard(&mut self) {
        if let Some(wizard) = self.wizard.take() {
            match serde_json::to_string(wizard.crawl_data()) {
                Ok(json) => debug!(crawl_data = %json, "Discarding crawl configuration"),
                Err(e) => warn!("Failed to serialize crawl configuration: {}", e),
            }
            info!(step = wizard.current_step().number(), "Crawl wizard closed");
        }
        self.current_view = View::Launcher;
        self.confirmation_dialog = None;
        self.reset_step_view();
    }

    /// Ask before dismissing the wizard
    pub fn request_close(&mut self) {
        if !self.is_wizard_open() {
            return;
        }
        self.stop_editing();
        self.confirmation_dialog = Some(ConfirmationDialog {
            title: " Close Crawl Wizard ".to_string(),
            message: "Discard this crawl configuration? Everything entered so far will be lost."
                .to_string(),
            confirm_action: ConfirmAction::DiscardWizard,
            selected_option: false,
        });
    }

    pub fn confirmation_toggle(&mut self) {
        if let Some(dialog) = &mut self.confirmation_dialog {
            dialog.selected_option = !dialog.selected_option;
        }
    }

    pub fn confirmation_confirm(&mut self) {
        let Some(dialog) = self.confirmation_dialog.take() else {
            return;
        };
        if !dialog.selected_option {
            return;
        }
        match dialog.confirm_action {
            ConfirmAction::DiscardWizard => self.close_wizard(),
        }
    }

    pub fn confirmation_cancel(&mut self) {
        self.confirmation_dialog = None;
    }

    // ------------------------------------------------------------------
    // Step navigation
    // ------------------------------------------------------------------

    fn reset_step_view(&mut self) {
        self.focus = 0;
        self.editor = None;
        self.scope_view = ScopeViewState::default();
        self.settings_view = SettingsViewState::default();
    }

    fn change_step(&mut self, change: impl FnOnce(&mut CrawlWizard)) {
        self.stop_editing();
        let Some(wizard) = self.wizard.as_mut() else {
            return;
        };
        let before = wizard.current_step();
        change(wizard);
        if wizard.current_step() != before {
            self.reset_step_view();
        }
    }

    pub fn next_step(&mut self) {
        self.change_step(CrawlWizard::go_next);
    }

    pub fn previous_step(&mut self) {
        self.change_step(CrawlWizard::go_prev);
    }

    /// Review "Edit" jump
    pub fn edit_step(&mut self, step: WizardStep) {
        self.change_step(|wizard| wizard.go_to_step(step));
    }

    // ------------------------------------------------------------------
    // Focus
    // ------------------------------------------------------------------

    /// Focusable fields of the current step, in display order
    pub fn fields(&self) -> Vec<Field> {
        let Some(wizard) = &self.wizard else {
            return Vec::new();
        };
        let data = wizard.crawl_data();

        match wizard.current_step() {
            WizardStep::CrawlType => CrawlType::choices().iter().copied().map(Field::CrawlType).collect(),
            WizardStep::Scope => self.scope_fields(data),
            WizardStep::Settings => self.settings_fields(data),
            WizardStep::Review => [WizardStep::CrawlType, WizardStep::Scope, WizardStep::Settings]
                .into_iter()
                .map(Field::ReviewEdit)
                .collect(),
        }
    }

    fn scope_fields(&self, data: &CrawlData) -> Vec<Field> {
        let mut fields = vec![Field::Scope(CrawlScope::All), Field::CheckNewPages];
        fields.push(Field::Scope(CrawlScope::Specific));

        match data.scope {
            CrawlScope::Specific => {
                fields.push(Field::Text(TextField::SpecificPages));
                fields.push(Field::Text(TextField::SitemapFile));
            }
            CrawlScope::All => {
                fields.push(Field::ToggleExcludedPages);
                if self.scope_view.show_excluded_pages {
                    fields.push(Field::Text(TextField::ExcludedPages));
                }
            }
        }

        fields.push(Field::ScopeAdvanced);
        if self.scope_view.advanced_open {
            fields.push(Field::LimitTab(LimitTab::LimitTo));
            fields.push(Field::LimitTab(LimitTab::Exclude));
            match self.scope_view.limit_tab {
                LimitTab::LimitTo => {
                    fields.push(Field::Text(TextField::LimitTo));
                    fields.push(Field::Text(TextField::CrawlDepth));
                }
                LimitTab::Exclude => fields.push(Field::Text(TextField::ExcludeUrls)),
            }
        }
        fields
    }

    fn settings_fields(&self, data: &CrawlData) -> Vec<Field> {
        let mut fields = vec![Field::Flag(SettingFlag::EnableRecurringCrawl)];
        if data.additional_settings.enable_recurring_crawl {
            fields.extend(CrawlFrequency::all().iter().copied().map(Field::Frequency));
        }
        fields.extend(ResourceKind::basic().iter().copied().map(Field::Resource));

        fields.push(Field::SettingsAdvanced);
        if self.settings_view.advanced_open {
            fields.push(Field::UseCrest);
            fields.push(Field::PrerenderPages);
            fields.extend(
                CredentialField::all()
                    .iter()
                    .map(|field| Field::Text(TextField::Credential(*field))),
            );
            fields.extend(ResourceKind::advanced().iter().copied().map(Field::Resource));
            fields.push(Field::Flag(SettingFlag::SkipContentTypeCheck));
            fields.push(Field::Flag(SettingFlag::SkipExistingResources));
            fields.push(Field::Flag(SettingFlag::UseEtags));
            fields.push(Field::Text(TextField::SimultaneousRequests));
        }
        fields
    }

    pub fn focused_field(&self) -> Option<Field> {
        self.fields().get(self.focus).copied()
    }

    fn clamp_focus(&mut self) {
        let count = self.fields().len();
        if count == 0 {
            self.focus = 0;
        } else if self.focus >= count {
            self.focus = count - 1;
        }
    }

    pub fn focus_next(&mut self) {
        self.stop_editing();
        let count = self.fields().len();
        if count > 0 {
            self.focus = (self.focus + 1) % count;
        }
    }

    pub fn focus_previous(&mut self) {
        self.stop_editing();
        let count = self.fields().len();
        if count > 0 {
            self.focus = (self.focus + count - 1) % count;
        }
    }

    // ------------------------------------------------------------------
    // Field activation
    // ------------------------------------------------------------------

    fn apply(&mut self, update: CrawlDataUpdate) {
        if let Some(wizard) = self.wizard.as_mut() {
            wizard.update_crawl_data(update);
        }
    }

    fn apply_with(&mut self, reducer: impl FnOnce(&CrawlData) -> CrawlDataUpdate) {
        if let Some(wizard) = self.wizard.as_mut() {
            let update = reducer(wizard.crawl_data());
            wizard.update_crawl_data(update);
        }
    }

    /// Select, toggle or start editing the focused field
    pub fn activate(&mut self) {
        let Some(field) = self.focused_field() else {
            return;
        };
        debug!(?field, "Activating field");

        match field {
            Field::CrawlType(choice) => self.apply(reducers::select_crawl_type(choice)),
            Field::Scope(scope) => {
                self.apply(reducers::change_scope(scope));
                self.scope_view.show_excluded_pages = false;
            }
            Field::CheckNewPages => {
                self.apply_with(|data| reducers::set_check_new_pages(!data.check_new_pages));
            }
            Field::ToggleExcludedPages => {
                self.scope_view.show_excluded_pages = !self.scope_view.show_excluded_pages;
            }
            Field::ScopeAdvanced => self.scope_view.advanced_open = !self.scope_view.advanced_open,
            Field::LimitTab(tab) => self.scope_view.limit_tab = tab,
            Field::Text(text_field) => self.start_editing(text_field),
            Field::Flag(flag) => self.apply_with(|data| reducers::toggle_flag(data, flag)),
            Field::Frequency(frequency) => {
                self.apply_with(|data| reducers::set_crawl_frequency(data, frequency));
            }
            Field::Resource(kind) => self.apply_with(|data| reducers::toggle_resource(data, kind)),
            Field::SettingsAdvanced => {
                self.settings_view.advanced_open = !self.settings_view.advanced_open;
            }
            Field::UseCrest => self.apply_with(reducers::toggle_use_crest),
            Field::PrerenderPages => self.apply_with(reducers::toggle_prerender_pages),
            Field::ReviewEdit(step) => {
                self.edit_step(step);
                return;
            }
        }

        self.clamp_focus();
    }

    /// Step a numeric field by `delta`, kept inside the widget range
    pub fn adjust_number(&mut self, delta: i32) {
        let Some(Field::Text(field)) = self.focused_field() else {
            return;
        };
        let (Some((min, max)), Some(data)) = (field.numeric_range(), self.crawl_data()) else {
            return;
        };
        let Some(current) = field.numeric_value(data) else {
            return;
        };

        let next = current.saturating_add(delta).clamp(min, max);
        self.stop_editing();
        match field {
            TextField::CrawlDepth => self.apply_with(|data| reducers::set_crawl_depth(data, next)),
            TextField::SimultaneousRequests => {
                self.apply_with(|data| reducers::set_simultaneous_requests(data, next));
            }
            _ => {}
        }
    }

    // ------------------------------------------------------------------
    // Text editing
    // ------------------------------------------------------------------

    pub fn is_editing(&self) -> bool {
        self.editor.is_some()
    }

    pub fn start_editing(&mut self, field: TextField) {
        let Some(data) = self.crawl_data() else {
            return;
        };
        let text = field.display_text(data);
        self.editor = Some(ActiveEditor {
            field,
            editor: FieldEditor::from_string(&text, field.is_multiline()),
        });
        self.show_cursor = true;
    }

    /// Leave the editor. The sitemap pick is applied here; other fields are already live.
    pub fn stop_editing(&mut self) {
        let Some(active) = self.editor.take() else {
            return;
        };
        if active.field == TextField::SitemapFile {
            self.apply(reducers::sitemap_selected(&active.editor.text()));
        }
    }

    fn edit(&mut self, change: impl FnOnce(&mut FieldEditor)) {
        let Some(active) = self.editor.as_mut() else {
            return;
        };
        change(&mut active.editor);
        self.show_cursor = true;
        self.sync_editor_text();
    }

    /// Re-derive the field's stored value from the editor text
    fn sync_editor_text(&mut self) {
        let (Some(active), Some(wizard)) = (self.editor.as_ref(), self.wizard.as_mut()) else {
            return;
        };
        let text = active.editor.text();
        let data = wizard.crawl_data();

        let update = match active.field {
            TextField::SpecificPages => Some(reducers::specific_pages_from_text(&text)),
            TextField::ExcludedPages => Some(reducers::excluded_pages_from_text(&text)),
            TextField::SitemapFile => None,
            TextField::LimitTo => Some(reducers::limit_to_from_text(data, &text)),
            TextField::CrawlDepth => reducers::crawl_depth_from_text(data, &text),
            TextField::ExcludeUrls => Some(reducers::exclude_urls_from_text(data, &text)),
            TextField::Credential(field) => Some(reducers::set_credential(data, field, &text)),
            TextField::SimultaneousRequests => reducers::simultaneous_requests_from_text(data, &text),
        };

        if let Some(update) = update {
            wizard.update_crawl_data(update);
        }
    }

    pub fn editor_input_char(&mut self, ch: char) {
        self.edit(|editor| editor.insert_char(ch));
    }

    pub fn editor_insert_text(&mut self, text: &str) {
        self.edit(|editor| editor.insert_text(text));
    }

    pub fn editor_newline(&mut self) {
        self.edit(FieldEditor::insert_newline);
    }

    pub fn editor_backspace(&mut self) {
        self.edit(FieldEditor::backspace);
    }

    pub fn editor_delete(&mut self) {
        self.edit(FieldEditor::delete);
    }

    pub fn editor_cursor_left(&mut self) {
        self.edit(FieldEditor::move_cursor_left);
    }

    pub fn editor_cursor_right(&mut self) {
        self.edit(FieldEditor::move_cursor_right);
    }

    pub fn editor_cursor_up(&mut self) {
        self.edit(FieldEditor::move_cursor_up);
    }

    pub fn editor_cursor_down(&mut self) {
        self.edit(FieldEditor::move_cursor_down);
    }

    pub fn editor_line_start(&mut self) {
        self.edit(FieldEditor::move_to_line_start);
    }

    pub fn editor_line_end(&mut self) {
        self.edit(FieldEditor::move_to_line_end);
    }

    /// Toggle cursor visibility (for blinking)
    pub fn toggle_cursor(&mut self) {
        self.show_cursor = !self.show_cursor;
    }
}

pub struct App {
    pub state: AppState,
}

impl App {
    pub fn new() -> Self {
        Self {
            state: AppState::new(),
        }
    }

    /// Periodic housekeeping between input events
    pub fn tick(&mut self) {
        if self.state.is_editing() {
            self.state.toggle_cursor();
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
