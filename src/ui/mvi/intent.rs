//! Marker trait for intents.

/// Something that happened: a submitted name, a finished fetch, a reset.
///
/// Intents carry everything the reducer needs; reducers never reach out
/// for more.
pub trait Intent: Send + 'static {}
