pub mod app;
pub mod events;
pub mod fallback;
pub mod footer;
pub mod form;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod views;

pub use runtime::{run, spawn_fetch_worker};
