//! Recovery boundary state.

use crate::ui::mvi::UiState;

/// Whether the boundary is currently showing its fallback.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryState<E> {
    /// Children render normally.
    Clear,

    /// A child raised `error` while rendering; the fallback is shown until
    /// a reset or an invalidation-key change.
    Caught { error: E },
}

impl<E> Default for BoundaryState<E> {
    fn default() -> Self {
        Self::Clear
    }
}

impl<E: Clone + PartialEq + Send + 'static> UiState for BoundaryState<E> {}

impl<E> BoundaryState<E> {
    pub fn is_caught(&self) -> bool {
        matches!(self, Self::Caught { .. })
    }

    pub fn error(&self) -> Option<&E> {
        match self {
            Self::Caught { error } => Some(error),
            Self::Clear => None,
        }
    }
}
