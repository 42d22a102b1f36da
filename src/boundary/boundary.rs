use std::fmt::Display;

use crate::ui::mvi::dispatch_mvi;

use super::intent::BoundaryIntent;
use super::reducer::BoundaryReducer;
use super::state::BoundaryState;

/// Result of rendering through a boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum Guarded<T, E> {
    /// The child rendered normally.
    Rendered(T),
    /// The child raised; show the fallback for this error.
    Fallback(E),
}

/// Intercepts errors raised while rendering a subtree and substitutes a
/// fallback until reset.
///
/// `K` is the invalidation key: whenever the key passed to
/// [`render`](Self::render) differs from the previous one, a caught error is
/// forgotten and the child is rendered again.
pub struct RecoveryBoundary<K, E> {
    state: BoundaryState<E>,
    keys: K,
}

impl<K, E> RecoveryBoundary<K, E>
where
    K: Clone + PartialEq,
    E: Clone + PartialEq + Display + Send + 'static,
{
    pub fn new(keys: K) -> Self {
        Self {
            state: BoundaryState::Clear,
            keys,
        }
    }

    pub fn state(&self) -> &BoundaryState<E> {
        &self.state
    }

    pub fn is_caught(&self) -> bool {
        self.state.is_caught()
    }

    /// Renders `child` unless an error is already caught.
    pub fn render<T>(
        &mut self,
        keys: &K,
        child: impl FnOnce() -> Result<T, E>,
    ) -> Guarded<T, E> {
        if *keys != self.keys {
            self.keys = keys.clone();
            if self.state.is_caught() {
                tracing::debug!("Invalidation key changed, clearing caught error");
                self.dispatch(BoundaryIntent::KeysChanged);
            }
        }

        if let BoundaryState::Caught { error } = &self.state {
            return Guarded::Fallback(error.clone());
        }

        match child() {
            Ok(rendered) => Guarded::Rendered(rendered),
            Err(error) => {
                tracing::warn!(error = %error, "Render failed, showing fallback");
                self.dispatch(BoundaryIntent::Catch {
                    error: error.clone(),
                });
                Guarded::Fallback(error)
            }
        }
    }

    /// Clears a caught error and runs `on_reset`.
    ///
    /// Returns `false` and does nothing when no error is caught.
    pub fn reset(&mut self, on_reset: impl FnOnce()) -> bool {
        if !self.state.is_caught() {
            return false;
        }
        self.dispatch(BoundaryIntent::Reset);
        on_reset();
        true
    }

    fn dispatch(&mut self, intent: BoundaryIntent<E>) {
        dispatch_mvi!(self, state, BoundaryReducer<E>, intent);
    }
}
