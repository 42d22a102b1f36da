//! Reducer for the lookup state machine.

use crate::ui::mvi::Reducer;

use super::intent::LookupIntent;
use super::state::LookupState;

/// Lookup state transitions.
///
/// Completions are applied whatever the current state is; deciding whether
/// a completion is still wanted is the controller's job.
pub struct LookupReducer;

impl Reducer for LookupReducer {
    type State = LookupState;
    type Intent = LookupIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LookupIntent::NameChanged { name } => LookupState::for_name(&name),
            LookupIntent::Resolved { data } => LookupState::Resolved { data },
            LookupIntent::Rejected { error } => LookupState::Rejected { error },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::LookupError;
    use crate::pokemon::{Attacks, Pokemon};

    fn pikachu() -> Pokemon {
        Pokemon {
            id: "UG9rZW1vbjowMjU=".into(),
            number: "025".into(),
            name: "Pikachu".into(),
            image: "https://img.pokemondb.net/artwork/pikachu.jpg".into(),
            attacks: Attacks::default(),
            fetched_at: "12:00:00.000".into(),
        }
    }

    #[test]
    fn empty_name_goes_idle() {
        let state = LookupState::Pending {
            name: "pikachu".into(),
        };
        let new_state =
            LookupReducer::reduce(state, LookupIntent::NameChanged { name: String::new() });
        assert_eq!(new_state, LookupState::Idle);
    }

    #[test]
    fn name_goes_pending() {
        let new_state = LookupReducer::reduce(
            LookupState::Idle,
            LookupIntent::NameChanged {
                name: "pikachu".into(),
            },
        );
        assert_eq!(
            new_state,
            LookupState::Pending {
                name: "pikachu".into()
            }
        );
    }

    #[test]
    fn new_name_drops_previous_data() {
        let state = LookupState::Resolved { data: pikachu() };
        let new_state = LookupReducer::reduce(
            state,
            LookupIntent::NameChanged {
                name: "mew".into(),
            },
        );
        assert_eq!(new_state, LookupState::Pending { name: "mew".into() });
    }

    #[test]
    fn new_name_drops_previous_error() {
        let state = LookupState::Rejected {
            error: LookupError::new("boom"),
        };
        let new_state = LookupReducer::reduce(
            state,
            LookupIntent::NameChanged {
                name: "mew".into(),
            },
        );
        assert_eq!(new_state, LookupState::Pending { name: "mew".into() });
    }

    #[test]
    fn success_stores_data() {
        let state = LookupState::Pending {
            name: "pikachu".into(),
        };
        let new_state = LookupReducer::reduce(state, LookupIntent::Resolved { data: pikachu() });
        assert_eq!(new_state, LookupState::Resolved { data: pikachu() });
    }

    #[test]
    fn failure_stores_error() {
        let state = LookupState::Pending {
            name: "doesnotexist".into(),
        };
        let new_state = LookupReducer::reduce(
            state,
            LookupIntent::Rejected {
                error: LookupError::new("Pokemon not found"),
            },
        );
        match new_state {
            LookupState::Rejected { error } => assert_eq!(error.message(), "Pokemon not found"),
            other => panic!("Expected Rejected, got {:?}", other),
        }
    }
}
