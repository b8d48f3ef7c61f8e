// ABOUTME: UI components for the TUI: wizard shell, progress sidebar, navigation, step bodies and dialogs

pub mod confirmation_dialog;
pub mod layout;
pub mod progress_bar;
pub mod step_navigation;
pub mod steps;
pub mod theme;

pub use confirmation_dialog::ConfirmationDialogComponent;
pub use layout::LayoutComponent;
pub use progress_bar::ProgressBarComponent;
pub use step_navigation::StepNavigationComponent;
