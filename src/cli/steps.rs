// Step views - one renderer per wizard step
//
// A view draws its step from a read-only ViewContext and turns key presses
// into WizardIntents. It never mutates the wizard itself; WizardApp applies
// the intents to the controller.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::brand::{FormField, FormPatch, FormState, SummaryText};
use crate::wizard::{WizardController, WizardError, WizardStep};

/// What a view is allowed to see
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    pub step: WizardStep,
    pub form: &'a FormState,
    pub summary: Option<&'a SummaryText>,
    pub error: Option<&'a WizardError>,
}

impl<'a> ViewContext<'a> {
    pub fn from_controller(wizard: &'a WizardController) -> Self {
        Self {
            step: wizard.step(),
            form: wizard.form(),
            summary: wizard.summary(),
            error: wizard.last_error(),
        }
    }
}

/// Requests a view emits in response to input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardIntent {
    /// Change only the fields named by the patch
    Edit(FormPatch),
    Advance,
    Retreat,
    Generate,
    CancelGenerate,
    Reset,
    Quit,
}

pub trait StepView {
    fn title(&self) -> String;

    fn render(&self, f: &mut Frame, area: Rect, ctx: &ViewContext);

    fn handle_key(&self, key: KeyEvent, ctx: &ViewContext) -> Option<WizardIntent>;
}

/// Where a data-entry step sits in the flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepPosition {
    /// Forward only
    First,
    /// Forward and back
    Middle,
    /// Forward triggers generation instead of a plain advance
    Last,
}

/// A data-entry step with a single text input
#[derive(Debug, Clone, Copy)]
pub struct FieldStep {
    pub field: FormField,
    pub number: usize,
    pub position: StepPosition,
}

pub struct GeneratingView;

pub struct FailedView;

pub struct ResultView;

/// Renderer for `step`
pub fn view_for(step: WizardStep) -> Box<dyn StepView> {
    match step {
        WizardStep::Generating => Box::new(GeneratingView),
        WizardStep::GenerateFailed => Box::new(FailedView),
        WizardStep::Result => Box::new(ResultView),
        data_step => {
            let field = data_step.field().unwrap_or(FormField::BusinessName);
            let number = data_step.number().unwrap_or(1);
            let position = if number == 1 {
                StepPosition::First
            } else if number == WizardStep::DATA_STEPS.len() {
                StepPosition::Last
            } else {
                StepPosition::Middle
            };
            Box::new(FieldStep {
                field,
                number,
                position,
            })
        }
    }
}

/// Ctrl+C quits from anywhere
pub fn is_quit_key(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c'))
}

impl StepView for FieldStep {
    fn title(&self) -> String {
        format!(
            "Step {} of {}: {}",
            self.number,
            WizardStep::DATA_STEPS.len(),
            self.field.label()
        )
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &ViewContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Prompt
                Constraint::Length(3), // Input
                Constraint::Min(0),
                Constraint::Length(2), // Help
            ])
            .split(area);

        let title = Paragraph::new(self.title())
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        f.render_widget(title, chunks[0]);

        let prompt = Paragraph::new(self.field.prompt())
            .style(Style::default().fg(Color::Reset))
            .wrap(Wrap { trim: false });
        f.render_widget(prompt, chunks[1]);

        let value = ctx.form.get(self.field);
        let input = Paragraph::new(Line::from(vec![
            Span::styled(
                value,
                Style::default()
                    .fg(Color::LightGreen)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("▏", Style::default().fg(Color::Gray)),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(self.field.label()),
        );
        f.render_widget(input, chunks[2]);

        let help = match self.position {
            StepPosition::First => "Enter: Continue  Esc: Quit",
            StepPosition::Middle => "Enter: Continue  Esc: Back",
            StepPosition::Last => "Enter: Generate brand  Esc: Back",
        };
        let help = Paragraph::new(help)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        f.render_widget(help, chunks[4]);
    }

    fn handle_key(&self, key: KeyEvent, ctx: &ViewContext) -> Option<WizardIntent> {
        let current = ctx.form.get(self.field);
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let mut value = current.to_string();
                value.push(c);
                Some(WizardIntent::Edit(FormPatch::single(self.field, value)))
            }
            KeyCode::Backspace => {
                if current.is_empty() {
                    return None;
                }
                let mut value = current.to_string();
                value.pop();
                Some(WizardIntent::Edit(FormPatch::single(self.field, value)))
            }
            KeyCode::Enter => match self.position {
                StepPosition::Last => Some(WizardIntent::Generate),
                _ => Some(WizardIntent::Advance),
            },
            KeyCode::Esc => match self.position {
                StepPosition::First => Some(WizardIntent::Quit),
                _ => Some(WizardIntent::Retreat),
            },
            _ => None,
        }
    }
}

impl StepView for GeneratingView {
    fn title(&self) -> String {
        "Generating your brand".to_string()
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &ViewContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(3),    // Message
                Constraint::Length(2), // Help
            ])
            .split(area);

        let title = Paragraph::new(self.title())
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        f.render_widget(title, chunks[0]);

        let name = ctx.form.get(FormField::BusinessName);
        let message = if name.is_empty() {
            "Putting your brand summary together...".to_string()
        } else {
            format!("Putting the summary for {name} together...")
        };
        let message = Paragraph::new(message)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false });
        f.render_widget(message, chunks[1]);

        let help = Paragraph::new("Esc: Cancel")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        f.render_widget(help, chunks[2]);
    }

    fn handle_key(&self, key: KeyEvent, _ctx: &ViewContext) -> Option<WizardIntent> {
        match key.code {
            KeyCode::Esc => Some(WizardIntent::CancelGenerate),
            // Forwarded so the controller can refuse a duplicate request
            KeyCode::Enter => Some(WizardIntent::Generate),
            _ => None,
        }
    }
}

impl StepView for FailedView {
    fn title(&self) -> String {
        "Could not generate your brand".to_string()
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &ViewContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(4),    // Error
                Constraint::Length(2), // Help
            ])
            .split(area);

        let title = Paragraph::new(self.title())
            .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        f.render_widget(title, chunks[0]);

        let (detail, hint) = match ctx.error {
            Some(e) if e.is_retryable() => (e.to_string(), "The service may be down. Try again?"),
            Some(e) => (e.to_string(), "Trying again will probably fail the same way."),
            None => (String::from("Unknown error"), ""),
        };
        let body = Paragraph::new(vec![
            Line::from(Span::styled(detail, Style::default().fg(Color::Red))),
            Line::from(""),
            Line::from(hint),
        ])
        .wrap(Wrap { trim: false });
        f.render_widget(body, chunks[1]);

        let help = Paragraph::new("Enter: Try again  Esc: Back")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        f.render_widget(help, chunks[2]);
    }

    fn handle_key(&self, key: KeyEvent, _ctx: &ViewContext) -> Option<WizardIntent> {
        match key.code {
            KeyCode::Enter | KeyCode::Char('r') => Some(WizardIntent::Generate),
            KeyCode::Esc => Some(WizardIntent::Retreat),
            _ => None,
        }
    }
}

impl StepView for ResultView {
    fn title(&self) -> String {
        "✓ Your brand".to_string()
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &ViewContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(5),    // Summary
                Constraint::Length(2), // Help
            ])
            .split(area);

        let title = Paragraph::new(self.title())
            .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        f.render_widget(title, chunks[0]);

        let summary = Paragraph::new(ctx.summary.map(|s| s.as_str()).unwrap_or_default())
            .block(Block::default().borders(Borders::ALL))
            .wrap(Wrap { trim: false });
        f.render_widget(summary, chunks[1]);

        let help = Paragraph::new("Enter: Create another  q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        f.render_widget(help, chunks[2]);
    }

    fn handle_key(&self, key: KeyEvent, _ctx: &ViewContext) -> Option<WizardIntent> {
        match key.code {
            KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('n') => Some(WizardIntent::Reset),
            KeyCode::Char('q') | KeyCode::Esc => Some(WizardIntent::Quit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx_with<'a>(step: WizardStep, form: &'a FormState) -> ViewContext<'a> {
        ViewContext {
            step,
            form,
            summary: None,
            error: None,
        }
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn test_view_positions() {
        let first = FieldStep {
            field: FormField::BusinessName,
            number: 1,
            position: StepPosition::First,
        };
        assert_eq!(first.title(), "Step 1 of 4: Business name");
        assert_eq!(view_for(WizardStep::Tone).title(), "Step 4 of 4: Communication tone");
        assert_eq!(view_for(WizardStep::Color).title(), "Step 3 of 4: Primary color");
    }

    #[test]
    fn test_typing_edits_only_own_field() {
        let form = FormState::new()
            .with(FormField::BusinessName, "Acme")
            .with(FormField::Audience, "dev");
        let ctx = ctx_with(WizardStep::Audience, &form);
        let view = view_for(WizardStep::Audience);

        let intent = view.handle_key(press(KeyCode::Char('s')), &ctx);

        assert_eq!(
            intent,
            Some(WizardIntent::Edit(FormPatch::single(FormField::Audience, "devs")))
        );
    }

    #[test]
    fn test_backspace_removes_last_char() {
        let form = FormState::new().with(FormField::Color, "reds");
        let ctx = ctx_with(WizardStep::Color, &form);

        let intent = view_for(WizardStep::Color).handle_key(press(KeyCode::Backspace), &ctx);

        assert_eq!(
            intent,
            Some(WizardIntent::Edit(FormPatch::single(FormField::Color, "red")))
        );
    }

    #[test]
    fn test_backspace_on_empty_field_does_nothing() {
        let form = FormState::new();
        let ctx = ctx_with(WizardStep::Color, &form);
        assert_eq!(
            view_for(WizardStep::Color).handle_key(press(KeyCode::Backspace), &ctx),
            None
        );
    }

    #[test]
    fn test_enter_advances_or_generates() {
        let form = FormState::new();
        for step in [WizardStep::BusinessName, WizardStep::Audience, WizardStep::Color] {
            let ctx = ctx_with(step, &form);
            assert_eq!(
                view_for(step).handle_key(press(KeyCode::Enter), &ctx),
                Some(WizardIntent::Advance),
                "{step}"
            );
        }
        let ctx = ctx_with(WizardStep::Tone, &form);
        assert_eq!(
            view_for(WizardStep::Tone).handle_key(press(KeyCode::Enter), &ctx),
            Some(WizardIntent::Generate)
        );
    }

    #[test]
    fn test_esc_goes_back_except_on_first_step() {
        let form = FormState::new();
        let ctx = ctx_with(WizardStep::BusinessName, &form);
        assert_eq!(
            view_for(WizardStep::BusinessName).handle_key(press(KeyCode::Esc), &ctx),
            Some(WizardIntent::Quit)
        );

        let ctx = ctx_with(WizardStep::Tone, &form);
        assert_eq!(
            view_for(WizardStep::Tone).handle_key(press(KeyCode::Esc), &ctx),
            Some(WizardIntent::Retreat)
        );
    }

    #[test]
    fn test_ctrl_c_is_not_typed() {
        let form = FormState::new();
        let ctx = ctx_with(WizardStep::BusinessName, &form);
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);

        assert!(is_quit_key(&key));
        assert_eq!(view_for(WizardStep::BusinessName).handle_key(key, &ctx), None);
    }

    #[test]
    fn test_generating_view_cancels_or_repeats_generate() {
        let form = FormState::new();
        let ctx = ctx_with(WizardStep::Generating, &form);
        let view = view_for(WizardStep::Generating);

        assert_eq!(
            view.handle_key(press(KeyCode::Enter), &ctx),
            Some(WizardIntent::Generate)
        );
        assert_eq!(view.handle_key(press(KeyCode::Char('x')), &ctx), None);
        assert_eq!(
            view.handle_key(press(KeyCode::Esc), &ctx),
            Some(WizardIntent::CancelGenerate)
        );
    }

    #[test]
    fn test_failed_view_retries_or_goes_back() {
        let form = FormState::new();
        let ctx = ctx_with(WizardStep::GenerateFailed, &form);
        let view = view_for(WizardStep::GenerateFailed);

        assert_eq!(
            view.handle_key(press(KeyCode::Enter), &ctx),
            Some(WizardIntent::Generate)
        );
        assert_eq!(
            view.handle_key(press(KeyCode::Esc), &ctx),
            Some(WizardIntent::Retreat)
        );
    }

    #[test]
    fn test_result_view_resets_or_quits() {
        let form = FormState::new();
        let ctx = ctx_with(WizardStep::Result, &form);
        let view = view_for(WizardStep::Result);

        assert_eq!(
            view.handle_key(press(KeyCode::Enter), &ctx),
            Some(WizardIntent::Reset)
        );
        assert_eq!(
            view.handle_key(press(KeyCode::Char('q')), &ctx),
            Some(WizardIntent::Quit)
        );
        // Result is read-only: typing does not edit anything
        assert_eq!(view.handle_key(press(KeyCode::Char('x')), &ctx), None);
    }
}
