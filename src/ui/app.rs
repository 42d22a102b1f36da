use tokio::sync::mpsc;

use crate::boundary::{BoundaryState, Guarded, RecoveryBoundary};
use crate::config::Config;
use crate::lookup::{
    CurrentName, LookupEffect, LookupError, LookupState, LookupView, Settlement,
    StatusController,
};
use crate::pokemon::Pokemon;
use crate::ui::form::InputForm;

/// Requests from the UI loop to the async side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    Fetch { name: String, generation: u64 },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// What the body area shows this frame, already resolved through the
/// recovery boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyView {
    Prompt,
    Loading { name: String },
    Data(Pokemon),
    Fallback { error: LookupError },
}

impl From<LookupView<'_>> for BodyView {
    fn from(view: LookupView<'_>) -> Self {
        match view {
            LookupView::Prompt => BodyView::Prompt,
            LookupView::Loading { name } => BodyView::Loading {
                name: name.to_string(),
            },
            LookupView::Data(pokemon) => BodyView::Data(pokemon.clone()),
        }
    }
}

/// The shell: owns the current name and the input form, and wraps the
/// lookup controller in a recovery boundary keyed on that name.
pub struct App {
    should_quit: bool,
    name: CurrentName,
    form: InputForm,
    controller: StatusController,
    boundary: RecoveryBoundary<CurrentName, LookupError>,
    command_sender: Option<UiCommandSender>,
    last_command_error: Option<String>,
    animation_tick: u8,
    endpoint: String,
}

impl App {
    pub fn new(config: &Config, initial_name: &str) -> Self {
        let name = CurrentName::new(initial_name);
        Self {
            should_quit: false,
            form: InputForm::new(initial_name, config.ui.suggestions.clone()),
            controller: StatusController::new(&name, config.lookup.stale_completions),
            boundary: RecoveryBoundary::new(name.clone()),
            name,
            command_sender: None,
            last_command_error: None,
            animation_tick: 0,
            endpoint: config.api.endpoint.clone(),
        }
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    /// Runs the lookup effect for the initial name. Call once the command
    /// sender is attached.
    pub fn start(&mut self) {
        self.sync_lookup();
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn current_name(&self) -> &CurrentName {
        &self.name
    }

    pub fn form(&self) -> &InputForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut InputForm {
        &mut self.form
    }

    pub fn lookup_state(&self) -> &LookupState {
        self.controller.state()
    }

    pub fn boundary_state(&self) -> &BoundaryState<LookupError> {
        self.boundary.state()
    }

    pub fn animation_tick(&self) -> u8 {
        self.animation_tick
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn last_command_error(&self) -> Option<&str> {
        self.last_command_error.as_deref()
    }

    /// Replaces the current name and re-runs the lookup.
    pub fn submit(&mut self, new_name: impl Into<String>) {
        self.name.replace(new_name);
        tracing::debug!(name = self.name.as_str(), "Name submitted");
        self.form.set(self.name.as_str());
        self.sync_lookup();
    }

    /// Clears the current name.
    pub fn reset(&mut self) {
        self.name.clear();
        self.form.set("");
        self.sync_lookup();
    }

    /// Submits whatever is in the input form.
    pub fn submit_form(&mut self) {
        let value = self.form.submission();
        self.submit(value);
    }

    /// "Try again" on the fallback: clears the boundary and, through its
    /// reset hook, the current name. Returns `false` when nothing was caught.
    pub fn try_again(&mut self) -> bool {
        let name = &mut self.name;
        if !self.boundary.reset(|| name.clear()) {
            return false;
        }
        tracing::info!("Recovery boundary reset");
        self.form.set("");
        self.sync_lookup();
        true
    }

    pub fn on_lookup_settled(
        &mut self,
        generation: u64,
        outcome: Result<Pokemon, LookupError>,
    ) -> Settlement {
        self.controller.settle(generation, outcome)
    }

    pub fn on_tick(&mut self) {
        if self.controller.state().is_pending() {
            self.animation_tick = self.animation_tick.wrapping_add(1);
        }
    }

    pub fn on_paste(&mut self, text: &str) {
        self.form.insert_str(text);
    }

    /// Renders the lookup through the recovery boundary.
    ///
    /// Takes `&mut self` because a rejected lookup flips the boundary into
    /// its caught state.
    pub fn body(&mut self) -> BodyView {
        let controller = &self.controller;
        match self
            .boundary
            .render(&self.name, || controller.view().map(BodyView::from))
        {
            Guarded::Rendered(view) => view,
            Guarded::Fallback(error) => BodyView::Fallback { error },
        }
    }

    fn sync_lookup(&mut self) {
        if let Some(LookupEffect::Fetch { name, generation }) = self.controller.observe(&self.name)
        {
            self.animation_tick = 0;
            self.send_command(UiCommand::Fetch { name, generation });
        }
    }

    fn send_command(&mut self, command: UiCommand) {
        let Some(sender) = &self.command_sender else {
            tracing::warn!(?command, "No command channel attached, dropping command");
            self.last_command_error = Some("Lookup worker is not running".to_string());
            return;
        };

        match sender.try_send(command) {
            Ok(()) => self.last_command_error = None,
            Err(err) => {
                tracing::error!(error = %err, "Failed to send command to lookup worker");
                self.last_command_error = Some(format!("Lookup worker unavailable: {}", err));
            }
        }
    }
}
