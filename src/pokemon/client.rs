use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use serde_json::json;
use time::macros::format_description;
use time::OffsetDateTime;
use tokio::time::timeout;

use crate::config::ApiConfig;
use crate::pokemon::error::FetchError;
use crate::pokemon::types::{GraphQlResponse, Pokemon};
use crate::pokemon::PokemonSource;

const POKEMON_QUERY: &str = r#"
query PokemonInfo($name: String) {
  pokemon(name: $name) {
    id
    number
    name
    image
    attacks {
      special {
        name
        type
        damage
      }
    }
  }
}
"#;

/// GraphQL client for the Pokémon API.
pub struct PokemonClient {
    client: Client,
    endpoint: Url,
    request_timeout: Duration,
}

impl PokemonClient {
    /// `endpoint` comes from [`ApiConfig::endpoint_url`], which already
    /// rejected anything that is not http(s).
    pub fn new(endpoint: Url, config: &ApiConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds.into()))
            .build()?;

        Ok(Self {
            client,
            endpoint,
            request_timeout: Duration::from_secs(config.timeout_seconds.into()),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn do_fetch(&self, name: &str) -> Result<Pokemon, FetchError> {
        let body = json!({
            "query": POKEMON_QUERY,
            "variables": { "name": name.to_lowercase() },
        });

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json;charset=UTF-8")
            .json(&body)
            .send()
            .await
            .map_err(|source| FetchError::Connection { source })?;

        let status = response.status();
        if !status.is_success() {
            // Gateways answer with HTML; only a GraphQL body carries messages
            let body = response.text().await.unwrap_or_default();
            let mut message = serde_json::from_str::<GraphQlResponse>(&body)
                .map(|payload| payload.error_message())
                .unwrap_or_default();
            if message.is_empty() {
                message = format!("Request failed with status {}", status.as_u16());
            }
            return Err(FetchError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let payload: GraphQlResponse = response
            .json()
            .await
            .map_err(|source| FetchError::Decode { source })?;

        match payload.data.and_then(|data| data.pokemon) {
            Some(mut pokemon) => {
                pokemon.fetched_at = fetched_at_now();
                Ok(pokemon)
            }
            None => Err(FetchError::NotFound {
                name: name.to_string(),
            }),
        }
    }
}

#[async_trait]
impl PokemonSource for PokemonClient {
    async fn fetch(&self, name: &str) -> Result<Pokemon, FetchError> {
        tracing::debug!(name, endpoint = %self.endpoint, "Fetching pokemon");

        match timeout(self.request_timeout, self.do_fetch(name)).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout {
                duration: self.request_timeout.as_secs(),
            }),
        }
    }
}

fn fetched_at_now() -> String {
    let format = format_description!("[hour]:[minute]:[second].[subsecond digits:3]");
    OffsetDateTime::now_utc().format(format).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetched_at_has_millisecond_precision() {
        let stamp = fetched_at_now();
        assert_eq!(stamp.len(), "12:34:56.789".len());
        assert_eq!(stamp.as_bytes()[2], b':');
        assert_eq!(stamp.as_bytes()[8], b'.');
    }

    #[test]
    fn query_requests_special_attacks() {
        assert!(POKEMON_QUERY.contains("pokemon(name: $name)"));
        assert!(POKEMON_QUERY.contains("special"));
    }
}
