//! Terminal Pokémon lookup.
//!
//! A single name drives a four-state lookup machine
//! (`Idle → Pending → Resolved | Rejected`). Rendering a rejected lookup
//! returns the error instead of a view, and a recovery boundary around the
//! lookup turns that into a fallback with a "Try again" control.

pub mod boundary;
pub mod cli;
pub mod config;
pub mod logging;
pub mod lookup;
pub mod pokemon;
pub mod shutdown;
pub mod ui;
