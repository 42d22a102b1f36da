use serde::{Deserialize, Serialize};

/// A Pokémon record as returned by the GraphQL API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pokemon {
    pub id: String,
    pub number: String,
    pub name: String,
    /// Sprite URL.
    pub image: String,
    #[serde(default)]
    pub attacks: Attacks,
    /// UTC time the record was received, `HH:MM:SS.mmm`. Stamped by the
    /// client; never sent by the API.
    #[serde(default)]
    pub fetched_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attacks {
    #[serde(default)]
    pub special: Vec<Attack>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attack {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub damage: u32,
}

/// GraphQL envelope: `{ "data": { "pokemon": ... }, "errors": [...] }`.
#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<PokemonData>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PokemonData {
    #[serde(default)]
    pub pokemon: Option<Pokemon>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlError {
    pub message: String,
}

impl GraphQlResponse {
    /// All error messages joined by newlines; empty when the API sent none.
    pub(crate) fn error_message(&self) -> String {
        self.errors
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_graphql_payload() {
        let body = r#"{
            "data": {
                "pokemon": {
                    "id": "UG9rZW1vbjowMjU=",
                    "number": "025",
                    "name": "Pikachu",
                    "image": "https://img.pokemondb.net/artwork/pikachu.jpg",
                    "attacks": {
                        "special": [
                            {"name": "Discharge", "type": "Electric", "damage": 35},
                            {"name": "Thunder", "type": "Electric", "damage": 100}
                        ]
                    }
                }
            }
        }"#;

        let response: GraphQlResponse = serde_json::from_str(body).unwrap();
        let pokemon = response.data.unwrap().pokemon.unwrap();
        assert_eq!(pokemon.name, "Pikachu");
        assert_eq!(pokemon.number, "025");
        assert_eq!(pokemon.attacks.special.len(), 2);
        assert_eq!(pokemon.attacks.special[1].kind, "Electric");
        assert_eq!(pokemon.attacks.special[1].damage, 100);
        assert!(pokemon.fetched_at.is_empty());
    }

    #[test]
    fn null_pokemon_decodes_as_none() {
        let response: GraphQlResponse =
            serde_json::from_str(r#"{"data": {"pokemon": null}}"#).unwrap();
        assert!(response.data.unwrap().pokemon.is_none());
    }

    #[test]
    fn error_messages_are_joined_by_newline() {
        let response: GraphQlResponse = serde_json::from_str(
            r#"{"errors": [{"message": "first"}, {"message": "second"}]}"#,
        )
        .unwrap();
        assert_eq!(response.error_message(), "first\nsecond");
    }

    #[test]
    fn missing_errors_yield_empty_message() {
        let response: GraphQlResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.error_message(), "");
    }
}
