//! Application module
//!
//! Owns the event loop: terminal key events and apply completions are
//! processed one at a time on the UI thread. The apply action runs on a
//! worker thread and reports back with a single message on an mpsc channel.
//!
//! # Module Structure
//! - `state` - Application state types (AppState, Screen)
//! - Main module - App struct and event loop

mod state;

// Re-export state types for external use
pub use state::{AppState, Screen};

use crate::command_args::{ApplyArgs, CommandArgs};
use crate::command_runner;
use crate::components::keybindings::{KeyAction, KeybindingContext};
use crate::config::RandrConfig;
use crate::error;
use crate::model::Display;
use crate::ui::UiRenderer;
use crate::wizard::{ApplyReport, ApplyRequest, WizardInput, WizardOutcome};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Message sent from the apply thread to the UI thread
#[derive(Debug)]
pub struct ApplyCompletion {
    pub result: error::Result<ApplyReport>,
}

/// How the run ended, for the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Quit or finished normally
    Completed,
    /// The report could not be acquired
    AcquisitionFailed,
}

/// Main application struct
pub struct App {
    state: AppState,
    config: RandrConfig,
    dry_run: bool,
    ui_renderer: UiRenderer,
    /// Keybinding context for input mapping and navigation hints
    keybinding_context: KeybindingContext,
    /// Channel sender for apply completion (cloned to the worker thread)
    apply_tx: Sender<ApplyCompletion>,
    /// Channel receiver for apply completion (polled in main loop)
    apply_rx: Receiver<ApplyCompletion>,
}

impl App {
    /// Create a new application instance from the acquisition result
    pub fn new(
        displays: error::Result<Vec<Display>>,
        config: RandrConfig,
        dry_run: bool,
    ) -> Self {
        info!("Creating new App instance (dry_run: {})", dry_run);
        let (apply_tx, apply_rx) = mpsc::channel();

        Self {
            state: AppState::from_report(displays),
            config,
            dry_run,
            ui_renderer: UiRenderer::new(),
            keybinding_context: KeybindingContext::new(),
            apply_tx,
            apply_rx,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run the main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> error::Result<RunOutcome> {
        info!("Starting main application loop");

        loop {
            terminal.draw(|f| {
                self.ui_renderer
                    .render(f, &mut self.state, &self.keybinding_context)
            })?;

            self.poll_apply_completions();

            if crossterm::event::poll(Duration::from_millis(50))? {
                // Resize needs no handling: the next draw uses the new area
                if let Event::Key(key_event) = crossterm::event::read()? {
                    if self.handle_key(key_event) {
                        break;
                    }
                }
            }
        }

        Ok(if self.state.is_failed() {
            RunOutcome::AcquisitionFailed
        } else {
            RunOutcome::Completed
        })
    }

    /// Process all pending apply completions without blocking
    pub fn poll_apply_completions(&mut self) {
        while let Ok(completion) = self.apply_rx.try_recv() {
            match self.state.wizard_mut() {
                Some(wizard) => wizard.apply_completed(completion.result),
                None => warn!("Apply completion without a wizard"),
            }
        }
    }

    /// Handle one key event. Returns true when the run should end.
    pub fn handle_key(&mut self, key_event: KeyEvent) -> bool {
        if key_event.kind != KeyEventKind::Press {
            return false;
        }

        let Some(stage) = self.state.stage() else {
            debug!("Key pressed on failure screen, exiting");
            return true;
        };

        // Applying and Done accept nothing but exit
        if stage.is_terminal() {
            return true;
        }

        let action = self.keybinding_context.resolve(stage, &key_event);

        if self.state.help_visible {
            match action {
                Some(KeyAction::Quit) => return true,
                Some(KeyAction::Help) => self.state.help_visible = false,
                _ if key_event.code == KeyCode::Esc => self.state.help_visible = false,
                _ => {}
            }
            return false;
        }

        let input = match action {
            Some(KeyAction::Help) => {
                self.state.help_visible = true;
                return false;
            }
            Some(action) => action.to_wizard_input(),
            None => None,
        };
        let Some(input) = input else {
            return false;
        };

        self.dispatch(input)
    }

    /// Feed a logical input to the wizard. Returns true when the run should end.
    pub fn dispatch(&mut self, input: WizardInput) -> bool {
        let Some(wizard) = self.state.wizard_mut() else {
            return true;
        };

        match wizard.handle_input(input) {
            WizardOutcome::Continue => false,
            WizardOutcome::Exit => true,
            WizardOutcome::Apply(request) => {
                self.spawn_apply(request);
                false
            }
        }
    }

    /// Run the apply action off the UI thread.
    ///
    /// The worker posts exactly one `ApplyCompletion`. There is no timeout:
    /// a hanging command keeps the wizard in `Applying` until the user quits.
    fn spawn_apply(&self, request: ApplyRequest) {
        let args = ApplyArgs::new(&self.config, request.output, request.mode);
        let tx = self.apply_tx.clone();

        if self.dry_run {
            info!("Dry run, not executing: {}", args.command_line());
            let result = Ok(ApplyReport::DryRun(args.command_line()));
            if tx.send(ApplyCompletion { result }).is_err() {
                debug!("Apply receiver dropped");
            }
            return;
        }

        thread::spawn(move || {
            let result = command_runner::apply_mode(&args).map(|()| ApplyReport::Applied);
            if tx.send(ApplyCompletion { result }).is_err() {
                debug!("Apply receiver dropped, run already ended");
            }
        });
    }
}
