// Wizard steps
//
// BusinessName -> Audience -> Color -> Tone are the data-entry steps.
// Generating and GenerateFailed sit between Tone and Result while the
// summary call is outstanding or after it failed.

use std::fmt;

use crate::brand::FormField;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WizardStep {
    BusinessName,
    Audience,
    Color,
    Tone,
    Generating,
    GenerateFailed,
    Result,
}

impl WizardStep {
    /// First step of every session
    pub const FIRST: WizardStep = WizardStep::BusinessName;

    /// Data-entry steps in order
    pub const DATA_STEPS: [WizardStep; 4] = [
        WizardStep::BusinessName,
        WizardStep::Audience,
        WizardStep::Color,
        WizardStep::Tone,
    ];

    /// Field collected on this step, if it is a data-entry step
    pub fn field(self) -> Option<FormField> {
        match self {
            WizardStep::BusinessName => Some(FormField::BusinessName),
            WizardStep::Audience => Some(FormField::Audience),
            WizardStep::Color => Some(FormField::Color),
            WizardStep::Tone => Some(FormField::Tone),
            _ => None,
        }
    }

    /// 1-based position among the data-entry steps
    pub fn number(self) -> Option<usize> {
        Self::DATA_STEPS.iter().position(|s| *s == self).map(|i| i + 1)
    }

    /// Step reached by a plain advance. Tone has none: leaving it takes a
    /// generate.
    pub(crate) fn next(self) -> Option<WizardStep> {
        match self {
            WizardStep::BusinessName => Some(WizardStep::Audience),
            WizardStep::Audience => Some(WizardStep::Color),
            WizardStep::Color => Some(WizardStep::Tone),
            _ => None,
        }
    }

    pub(crate) fn previous(self) -> Option<WizardStep> {
        match self {
            WizardStep::Audience => Some(WizardStep::BusinessName),
            WizardStep::Color => Some(WizardStep::Audience),
            WizardStep::Tone => Some(WizardStep::Color),
            WizardStep::GenerateFailed => Some(WizardStep::Tone),
            _ => None,
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WizardStep::BusinessName => "business name",
            WizardStep::Audience => "audience",
            WizardStep::Color => "color",
            WizardStep::Tone => "tone",
            WizardStep::Generating => "generating",
            WizardStep::GenerateFailed => "generate failed",
            WizardStep::Result => "result",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_numbers() {
        assert_eq!(WizardStep::BusinessName.number(), Some(1));
        assert_eq!(WizardStep::Tone.number(), Some(4));
        assert_eq!(WizardStep::Result.number(), None);
    }

    #[test]
    fn test_next_and_previous_are_inverse_on_data_steps() {
        for pair in WizardStep::DATA_STEPS.windows(2) {
            assert_eq!(pair[0].next(), Some(pair[1]));
            assert_eq!(pair[1].previous(), Some(pair[0]));
        }
        assert_eq!(WizardStep::Tone.next(), None);
        assert_eq!(WizardStep::BusinessName.previous(), None);
    }

    #[test]
    fn test_fields_follow_step_order() {
        let fields: Vec<_> = WizardStep::DATA_STEPS
            .iter()
            .filter_map(|s| s.field())
            .collect();
        assert_eq!(fields, FormField::ALL.to_vec());
    }
}
