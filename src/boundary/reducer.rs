//! Reducer for the recovery boundary.

use std::marker::PhantomData;

use crate::ui::mvi::Reducer;

use super::intent::BoundaryIntent;
use super::state::BoundaryState;

/// `Clear → Caught → Clear`.
pub struct BoundaryReducer<E>(PhantomData<E>);

impl<E: Clone + PartialEq + Send + 'static> Reducer for BoundaryReducer<E> {
    type State = BoundaryState<E>;
    type Intent = BoundaryIntent<E>;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            BoundaryIntent::Catch { error } => match state {
                BoundaryState::Clear => BoundaryState::Caught { error },
                // Children are not rendered while caught; keep the first error.
                caught @ BoundaryState::Caught { .. } => caught,
            },
            BoundaryIntent::Reset | BoundaryIntent::KeysChanged => BoundaryState::Clear,
        }
    }
}
