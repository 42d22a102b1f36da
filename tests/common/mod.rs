//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use pokemon_info::config::Config;
use pokemon_info::lookup::StalePolicy;
use pokemon_info::pokemon::{Attack, Attacks, FetchError, Pokemon, PokemonSource};
use pokemon_info::ui::app::{App, UiCommand};
use tokio::sync::mpsc;

pub fn pokemon(name: &str, number: &str) -> Pokemon {
    Pokemon {
        id: format!("id-{}", name.to_lowercase()),
        number: number.to_string(),
        name: name.to_string(),
        image: format!("https://img.pokemondb.net/artwork/{}.jpg", name.to_lowercase()),
        attacks: Attacks {
            special: vec![Attack {
                name: "Thunderbolt".to_string(),
                kind: "Electric".to_string(),
                damage: 55,
            }],
        },
        fetched_at: "12:00:00.000".to_string(),
    }
}

pub fn pikachu() -> Pokemon {
    pokemon("Pikachu", "025")
}

/// App wired to a command channel the test reads from.
pub fn make_app(name: &str) -> (App, mpsc::Receiver<UiCommand>) {
    make_app_with(&Config::default(), name)
}

pub fn make_app_with_policy(
    name: &str,
    policy: StalePolicy,
) -> (App, mpsc::Receiver<UiCommand>) {
    let mut config = Config::default();
    config.lookup.stale_completions = policy;
    make_app_with(&config, name)
}

pub fn make_app_with(config: &Config, name: &str) -> (App, mpsc::Receiver<UiCommand>) {
    let (tx, rx) = mpsc::channel(16);
    let mut app = App::new(config, name);
    app.set_command_sender(tx);
    app.start();
    (app, rx)
}

/// Every command currently queued on `rx`.
pub fn drain(rx: &mut mpsc::Receiver<UiCommand>) -> Vec<UiCommand> {
    let mut commands = Vec::new();
    while let Ok(command) = rx.try_recv() {
        commands.push(command);
    }
    commands
}

/// Scripted reply of a [`MockSource`].
#[derive(Debug, Clone)]
pub enum MockReply {
    Found(Pokemon),
    NotFound,
    ApiError(String),
}

/// In-memory [`PokemonSource`] with per-name replies and delays.
#[derive(Default)]
pub struct MockSource {
    replies: Mutex<HashMap<String, (MockReply, Duration)>>,
    calls: Mutex<Vec<String>>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, name: &str, reply: MockReply) -> Self {
        self.reply_after(name, reply, Duration::ZERO)
    }

    pub fn reply_after(self, name: &str, reply: MockReply, delay: Duration) -> Self {
        self.replies
            .lock()
            .insert(name.to_lowercase(), (reply, delay));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl PokemonSource for MockSource {
    async fn fetch(&self, name: &str) -> Result<Pokemon, FetchError> {
        self.calls.lock().push(name.to_string());
        let scripted = self.replies.lock().get(&name.to_lowercase()).cloned();
        let (reply, delay) = scripted.unwrap_or((MockReply::NotFound, Duration::ZERO));

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        match reply {
            MockReply::Found(pokemon) => Ok(pokemon),
            MockReply::NotFound => Err(FetchError::NotFound {
                name: name.to_string(),
            }),
            MockReply::ApiError(message) => Err(FetchError::Api {
                status: 500,
                message,
            }),
        }
    }
}
