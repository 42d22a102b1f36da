//! Lookup state.

use crate::pokemon::Pokemon;
use crate::ui::mvi::UiState;

use super::error::LookupError;

/// Where a lookup stands. Exactly one variant is active at a time, and a new
/// name always replaces the whole value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LookupState {
    /// No name supplied.
    #[default]
    Idle,

    /// A fetch for `name` is in flight.
    Pending { name: String },

    /// The fetch succeeded.
    Resolved { data: Pokemon },

    /// The fetch failed.
    Rejected { error: LookupError },
}

impl UiState for LookupState {}

impl LookupState {
    /// Initial state for a name: `Idle` when empty, `Pending` otherwise.
    pub fn for_name(name: &str) -> Self {
        if name.is_empty() {
            Self::Idle
        } else {
            Self::Pending {
                name: name.to_string(),
            }
        }
    }

    /// Lowercase status label, as shown in the header and logs.
    pub fn status(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Pending { .. } => "pending",
            Self::Resolved { .. } => "resolved",
            Self::Rejected { .. } => "rejected",
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }
}
