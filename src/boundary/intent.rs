//! Intents for the recovery boundary.

use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum BoundaryIntent<E> {
    /// A child raised an error during render.
    Catch { error: E },

    /// The user asked to try again.
    Reset,

    /// An invalidation key differs from the one seen on the previous render.
    KeysChanged,
}

impl<E: Send + 'static> Intent for BoundaryIntent<E> {}
