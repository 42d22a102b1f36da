use serde::{Deserialize, Serialize};

use crate::pokemon::Pokemon;
use crate::ui::mvi::dispatch_mvi;

use super::error::LookupError;
use super::intent::LookupIntent;
use super::name::CurrentName;
use super::reducer::LookupReducer;
use super::state::LookupState;

/// Shown when no name has been submitted.
pub const IDLE_PROMPT: &str = "Submit a pokemon";

/// What to do with a fetch that completes after a newer one was issued.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum StalePolicy {
    /// Drop completions from superseded fetches; the latest name wins.
    #[default]
    Discard,
    /// Apply every completion as it arrives, so a slow earlier fetch can
    /// overwrite the state of a newer one.
    Apply,
}

/// Side effect requested by the controller. The runtime performs it and
/// reports back through [`StatusController::settle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupEffect {
    Fetch { name: String, generation: u64 },
}

/// Outcome of [`StatusController::settle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    Applied,
    Discarded,
}

/// Render output of the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LookupView<'a> {
    /// Invitation to submit a name.
    Prompt,
    /// Loading placeholder for `name`.
    Loading { name: &'a str },
    /// The fetched record.
    Data(&'a Pokemon),
}

/// Owns the lookup state for one name and reacts when that name changes.
pub struct StatusController {
    state: LookupState,
    observed_revision: Option<u64>,
    generation: u64,
    policy: StalePolicy,
}

impl StatusController {
    /// Starts `Pending` for a non-empty name, `Idle` otherwise. No fetch is
    /// issued until the first [`observe`](Self::observe).
    pub fn new(initial: &CurrentName, policy: StalePolicy) -> Self {
        Self {
            state: LookupState::for_name(initial.as_str()),
            observed_revision: None,
            generation: 0,
            policy,
        }
    }

    pub fn state(&self) -> &LookupState {
        &self.state
    }

    /// Generation of the most recently issued fetch.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Re-runs the lookup effect if `current` differs from the last observed
    /// name.
    ///
    /// The state moves to `Pending` (or `Idle`) before the fetch effect is
    /// returned. Each run starts a new generation, which makes any fetch
    /// still in flight stale.
    pub fn observe(&mut self, current: &CurrentName) -> Option<LookupEffect> {
        if self.observed_revision == Some(current.revision()) {
            return None;
        }
        self.observed_revision = Some(current.revision());
        self.generation += 1;

        let name = current.as_str().to_string();
        self.dispatch(LookupIntent::NameChanged { name: name.clone() });

        if name.is_empty() {
            tracing::debug!(generation = self.generation, "Lookup idle");
            return None;
        }

        tracing::debug!(%name, generation = self.generation, "Lookup pending");
        Some(LookupEffect::Fetch {
            name,
            generation: self.generation,
        })
    }

    /// Records the completion of the fetch issued as `generation`.
    pub fn settle(
        &mut self,
        generation: u64,
        outcome: Result<Pokemon, LookupError>,
    ) -> Settlement {
        if generation != self.generation {
            match self.policy {
                StalePolicy::Discard => {
                    tracing::debug!(
                        generation,
                        current = self.generation,
                        "Discarding stale lookup completion"
                    );
                    return Settlement::Discarded;
                }
                StalePolicy::Apply => {
                    tracing::warn!(
                        generation,
                        current = self.generation,
                        "Applying stale lookup completion"
                    );
                }
            }
        }

        match outcome {
            Ok(data) => {
                tracing::info!(name = %data.name, generation, "Lookup resolved");
                self.dispatch(LookupIntent::Resolved { data });
            }
            Err(error) => {
                tracing::info!(error = %error, generation, "Lookup rejected");
                self.dispatch(LookupIntent::Rejected { error });
            }
        }
        Settlement::Applied
    }

    /// Pure render of the current state.
    ///
    /// A rejected lookup is not displayed here: the error is returned so
    /// that the enclosing recovery boundary can take over.
    pub fn view(&self) -> Result<LookupView<'_>, LookupError> {
        match &self.state {
            LookupState::Idle => Ok(LookupView::Prompt),
            LookupState::Pending { name } => Ok(LookupView::Loading { name }),
            LookupState::Resolved { data } => Ok(LookupView::Data(data)),
            LookupState::Rejected { error } => Err(error.clone()),
        }
    }

    fn dispatch(&mut self, intent: LookupIntent) {
        dispatch_mvi!(self, state, LookupReducer, intent);
    }
}
