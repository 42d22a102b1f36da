//! Status controller: the lookup state machine for a single name.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Lookup state enum (Idle / Pending / Resolved / Rejected)
//! - `intent.rs` - Name changes and fetch completions
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `controller.rs` - Watches the name, emits fetch effects, renders
//!
//! ```text
//! observe(name) ──→ Pending ──→ LookupEffect::Fetch ──→ runtime
//!                                                        │
//! view() ←── Resolved / Rejected ←── settle(generation) ←┘
//! ```

mod controller;
mod error;
mod intent;
mod name;
mod reducer;
mod state;

pub use controller::{
    LookupEffect, LookupView, Settlement, StalePolicy, StatusController, IDLE_PROMPT,
};
pub use error::LookupError;
pub use intent::LookupIntent;
pub use name::CurrentName;
pub use reducer::LookupReducer;
pub use state::LookupState;
