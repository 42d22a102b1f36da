//! Pokémon data and the collaborator that fetches it.

mod client;
mod error;
mod types;

use async_trait::async_trait;

pub use client::PokemonClient;
pub use error::FetchError;
pub use types::{Attack, Attacks, Pokemon};

/// Asynchronous lookup of a Pokémon by name.
///
/// The lookup controller never calls this directly; it emits a fetch effect
/// and the runtime drives the source.
#[async_trait]
pub trait PokemonSource: Send + Sync {
    async fn fetch(&self, name: &str) -> Result<Pokemon, FetchError>;
}
