// Wizard module
// Step state machine and the controller that owns one wizard session

mod controller;
mod step;

pub use controller::{GenerateTicket, WizardController, WizardError};
pub use step::WizardStep;
