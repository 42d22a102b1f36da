//! Marker trait for reducer-owned state.

/// State owned by a reducer.
///
/// `Default` is the state a fresh owner starts from and what
/// `std::mem::take` leaves behind during a dispatch.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
