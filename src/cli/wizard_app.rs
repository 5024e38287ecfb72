// Wizard app - interactive terminal wizard
//
// Runs in the alternate screen. The event loop polls the keyboard with a short
// timeout so outcomes of the generate task (delivered over an mpsc channel)
// are picked up between key presses.

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Margin, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::steps::{is_quit_key, view_for, ViewContext, WizardIntent};
use crate::brand::SummaryText;
use crate::client::{HttpSummaryClient, SummaryError, SummaryService};
use crate::config::Config;
use crate::wizard::{GenerateTicket, WizardController, WizardError};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

type Outcome = (u64, Result<SummaryText, SummaryError>);

/// Restores the terminal on exit, including on panic
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Quit,
}

pub(crate) struct WizardApp {
    wizard: WizardController,
    service: Arc<dyn SummaryService>,
    outcomes_tx: mpsc::UnboundedSender<Outcome>,
    outcomes_rx: mpsc::UnboundedReceiver<Outcome>,
    /// Task running the outstanding generate call
    in_flight: Option<JoinHandle<()>>,
    /// One-line message shown under the current step (validation errors etc.)
    notice: Option<String>,
    /// Most recent summary, kept across resets
    last_summary: Option<SummaryText>,
}

impl WizardApp {
    pub(crate) fn new(service: Arc<dyn SummaryService>) -> Self {
        let (outcomes_tx, outcomes_rx) = mpsc::unbounded_channel();
        Self {
            wizard: WizardController::new(),
            service,
            outcomes_tx,
            outcomes_rx,
            in_flight: None,
            notice: None,
            last_summary: None,
        }
    }

    pub(crate) fn wizard(&self) -> &WizardController {
        &self.wizard
    }

    pub(crate) fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Flow {
        if is_quit_key(&key) {
            return Flow::Quit;
        }
        let ctx = ViewContext::from_controller(&self.wizard);
        match view_for(ctx.step).handle_key(key, &ctx) {
            Some(intent) => self.apply(intent),
            None => Flow::Continue,
        }
    }

    pub(crate) fn apply(&mut self, intent: WizardIntent) -> Flow {
        let result = match intent {
            WizardIntent::Edit(patch) => self.wizard.update_field(patch),
            WizardIntent::Advance => {
                self.wizard.advance();
                Ok(())
            }
            WizardIntent::Retreat => {
                self.wizard.retreat();
                Ok(())
            }
            WizardIntent::Generate => match self.wizard.begin_generate() {
                Ok(ticket) => {
                    self.spawn_generate(ticket);
                    Ok(())
                }
                Err(e) => Err(e),
            },
            WizardIntent::CancelGenerate => {
                if self.wizard.cancel_generate() {
                    if let Some(task) = self.in_flight.take() {
                        task.abort();
                    }
                }
                Ok(())
            }
            WizardIntent::Reset => self.wizard.reset(),
            WizardIntent::Quit => return Flow::Quit,
        };

        self.notice = match result {
            Ok(()) => None,
            Err(WizardError::GenerationPending) => {
                Some("Still generating, please wait...".to_string())
            }
            Err(e) => Some(e.to_string()),
        };
        Flow::Continue
    }

    fn spawn_generate(&mut self, ticket: GenerateTicket) {
        let service = Arc::clone(&self.service);
        let tx = self.outcomes_tx.clone();
        self.in_flight = Some(tokio::spawn(async move {
            let outcome = service.generate(ticket.form()).await;
            // Receiver only goes away when the wizard has exited
            let _ = tx.send((ticket.id(), outcome));
        }));
    }

    fn record(&mut self, (id, outcome): Outcome) {
        if self.wizard.complete_generate(id, outcome) {
            self.in_flight = None;
            if let Some(summary) = self.wizard.summary() {
                self.last_summary = Some(summary.clone());
            }
        }
    }

    /// Apply every generate outcome that has arrived so far
    pub(crate) fn drain_outcomes(&mut self) {
        while let Ok(outcome) = self.outcomes_rx.try_recv() {
            self.record(outcome);
        }
    }

    /// Wait for the next generate outcome and apply it
    #[cfg(test)]
    pub(crate) async fn settle(&mut self) {
        if let Some(outcome) = self.outcomes_rx.recv().await {
            self.record(outcome);
        }
    }
}

/// Run the interactive wizard against the configured summary service.
///
/// Returns the last generated summary, if any, once the user quits.
pub async fn run_wizard(config: &Config) -> Result<Option<SummaryText>> {
    let client = HttpSummaryClient::from_config(&config.client)?;
    tracing::info!(endpoint = client.endpoint(), "Starting brand wizard");
    run_wizard_with(Arc::new(client)).await
}

pub async fn run_wizard_with(service: Arc<dyn SummaryService>) -> Result<Option<SummaryText>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    let mut app = WizardApp::new(service);

    loop {
        app.drain_outcomes();

        terminal.draw(|f| {
            let ctx = ViewContext::from_controller(app.wizard());
            draw_wizard(f, &ctx, app.notice());
        })?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.handle_key(key) == Flow::Quit {
                break;
            }
        }
    }

    Ok(app.last_summary)
}

/// Draw the wizard frame and the active step
pub fn draw_wizard(f: &mut Frame, ctx: &ViewContext, notice: Option<&str>) {
    let dialog_area = centered_rect(70, 70, f.area());

    let view = view_for(ctx.step);
    let border = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title("Sparkup Brand Generator");
    f.render_widget(border, dialog_area);

    let inner = dialog_area.inner(Margin {
        horizontal: 2,
        vertical: 1,
    });
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Step
            Constraint::Length(1), // Notice
        ])
        .split(inner);

    view.render(f, chunks[0], ctx);

    if let Some(notice) = notice {
        let notice = Paragraph::new(notice)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center);
        f.render_widget(notice, chunks[1]);
    }
}

/// Rect of `percent_x` by `percent_y` of `area`, centered in it
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let [band] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [dialog] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(band);
    dialog
}
