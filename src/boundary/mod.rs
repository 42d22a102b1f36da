//! Recovery boundary around a render step that can fail.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Clear / Caught
//! - `intent.rs` - Catch, Reset, KeysChanged
//! - `reducer.rs` - State transitions
//! - `boundary.rs` - Key tracking, render interception, reset hook

#[allow(clippy::module_inception)]
mod boundary;
mod intent;
mod reducer;
mod state;

pub use boundary::{Guarded, RecoveryBoundary};
pub use intent::BoundaryIntent;
pub use reducer::BoundaryReducer;
pub use state::BoundaryState;
