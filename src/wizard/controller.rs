// WizardController - owns the step and the form for one wizard session
//
// Every transition goes through this type. Generation is split in two halves
// so the UI can run the network call on another task:
//
//   begin_generate()            Tone | GenerateFailed -> Generating, returns a ticket
//   complete_generate(id, ..)   Generating -> Result | GenerateFailed
//
// Only the ticket handed out last is accepted on completion. A second
// begin_generate() while one is outstanding is refused, and cancelling
// invalidates the outstanding ticket.

use thiserror::Error;

use super::step::WizardStep;
use crate::brand::{FormError, FormPatch, FormState, SummaryText};
use crate::client::{SummaryError, SummaryService};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("cannot {action} from the {from} step")]
    InvalidTransition {
        from: WizardStep,
        action: &'static str,
    },

    #[error("a summary is already being generated")]
    GenerationPending,

    #[error(transparent)]
    Validation(#[from] FormError),

    #[error(transparent)]
    Network(#[from] SummaryError),
}

impl WizardError {
    /// Whether the user can simply try again
    pub fn is_retryable(&self) -> bool {
        match self {
            WizardError::Network(e) => e.is_retryable(),
            _ => false,
        }
    }
}

/// Proof that a generate call was started, carrying the form snapshot to send
#[derive(Debug, Clone)]
pub struct GenerateTicket {
    id: u64,
    form: FormState,
}

impl GenerateTicket {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }
}

#[derive(Debug)]
pub struct WizardController {
    step: WizardStep,
    form: FormState,
    summary: Option<SummaryText>,
    last_error: Option<WizardError>,
    pending: Option<u64>,
    next_ticket: u64,
}

impl Default for WizardController {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardController {
    pub fn new() -> Self {
        Self {
            step: WizardStep::FIRST,
            form: FormState::new(),
            summary: None,
            last_error: None,
            pending: None,
            next_ticket: 1,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Summary of the last successful generate, if any
    pub fn summary(&self) -> Option<&SummaryText> {
        self.summary.as_ref()
    }

    /// Error that put the wizard in GenerateFailed
    pub fn last_error(&self) -> Option<&WizardError> {
        self.last_error.as_ref()
    }

    pub fn is_generating(&self) -> bool {
        self.pending.is_some()
    }

    /// Move to the next data-entry step. Returns false (and changes nothing)
    /// on Tone and on every non data-entry step.
    pub fn advance(&mut self) -> bool {
        match self.step.next() {
            Some(next) => {
                tracing::debug!(from = %self.step, to = %next, "advance");
                self.step = next;
                true
            }
            None => false,
        }
    }

    /// Move back one step. Returns false on the first step, while generating
    /// and on Result.
    pub fn retreat(&mut self) -> bool {
        match self.step.previous() {
            Some(previous) => {
                tracing::debug!(from = %self.step, to = %previous, "retreat");
                if self.step == WizardStep::GenerateFailed {
                    self.last_error = None;
                }
                self.step = previous;
                true
            }
            None => false,
        }
    }

    /// Merge `patch` into the form; fields not named by the patch are kept.
    pub fn update_field(&mut self, patch: FormPatch) -> Result<(), WizardError> {
        match self.step {
            WizardStep::Generating => return Err(WizardError::GenerationPending),
            WizardStep::Result => {
                return Err(WizardError::InvalidTransition {
                    from: self.step,
                    action: "edit fields",
                })
            }
            _ => {}
        }

        patch.validate()?;
        self.form.merge(&patch);
        Ok(())
    }

    /// Start a generate call from Tone (or retry from GenerateFailed).
    pub fn begin_generate(&mut self) -> Result<GenerateTicket, WizardError> {
        match self.step {
            WizardStep::Tone | WizardStep::GenerateFailed => {}
            WizardStep::Generating => return Err(WizardError::GenerationPending),
            from => {
                return Err(WizardError::InvalidTransition {
                    from,
                    action: "generate",
                })
            }
        }

        self.form.validate()?;

        let id = self.next_ticket;
        self.next_ticket += 1;
        self.pending = Some(id);
        self.last_error = None;
        self.step = WizardStep::Generating;

        tracing::info!(ticket = id, "Generating brand summary");

        Ok(GenerateTicket {
            id,
            form: self.form.clone(),
        })
    }

    /// Record the outcome of the call started by ticket `id`.
    ///
    /// Returns false if the ticket is no longer the outstanding one (the call
    /// was cancelled); the outcome is then dropped.
    pub fn complete_generate(
        &mut self,
        id: u64,
        outcome: Result<SummaryText, SummaryError>,
    ) -> bool {
        if self.pending != Some(id) {
            tracing::debug!(ticket = id, "Ignoring outcome of stale generate call");
            return false;
        }
        self.pending = None;

        match outcome {
            Ok(summary) => {
                tracing::info!(ticket = id, "Brand summary ready");
                self.summary = Some(summary);
                self.step = WizardStep::Result;
            }
            Err(e) => {
                tracing::warn!(ticket = id, error = %e, "Brand summary generation failed");
                self.last_error = Some(WizardError::Network(e));
                self.step = WizardStep::GenerateFailed;
            }
        }
        true
    }

    /// Abandon the outstanding generate call and return to Tone.
    pub fn cancel_generate(&mut self) -> bool {
        if self.step != WizardStep::Generating {
            return false;
        }
        tracing::info!(ticket = ?self.pending, "Generate cancelled");
        self.pending = None;
        self.step = WizardStep::Tone;
        true
    }

    /// Run one generate call against `service` and wait for it.
    ///
    /// Exactly one outbound call is made; failures are not retried.
    pub async fn generate(
        &mut self,
        service: &dyn SummaryService,
    ) -> Result<SummaryText, WizardError> {
        let ticket = self.begin_generate()?;
        let outcome = service.generate(ticket.form()).await;
        let result = outcome.clone().map_err(WizardError::Network);
        self.complete_generate(ticket.id(), outcome);
        result
    }

    /// From Result, start over with an empty form.
    pub fn reset(&mut self) -> Result<(), WizardError> {
        if self.step != WizardStep::Result {
            return Err(WizardError::InvalidTransition {
                from: self.step,
                action: "reset",
            });
        }
        tracing::debug!("Wizard reset");
        self.form = FormState::new();
        self.summary = None;
        self.last_error = None;
        self.step = WizardStep::FIRST;
        Ok(())
    }
}
