//! Intents for the lookup state machine.

use crate::pokemon::Pokemon;
use crate::ui::mvi::Intent;

use super::error::LookupError;

#[derive(Debug, Clone)]
pub enum LookupIntent {
    /// The observed name changed. Empty means "no selection".
    NameChanged { name: String },

    /// A fetch completed successfully.
    Resolved { data: Pokemon },

    /// A fetch failed.
    Rejected { error: LookupError },
}

impl Intent for LookupIntent {}
