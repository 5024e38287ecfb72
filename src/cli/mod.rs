// CLI module
// Command-line interface and the interactive terminal wizard

mod commands;
mod steps;
mod wizard_app;

pub use commands::{apply_overrides, run_generate, Cli, Commands, GenerateArgs};
pub use steps::{
    is_quit_key, view_for, FailedView, FieldStep, GeneratingView, ResultView, StepPosition,
    StepView, ViewContext, WizardIntent,
};
pub use wizard_app::{centered_rect, draw_wizard, run_wizard, run_wizard_with};
