mod classify;
mod defaults;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

pub use classify::{classify_token, type_of_token, GroupedTokens, TokenItem, TokenType, TOKEN_SORTS};
pub use defaults::default_tokens;

pub type TokenName = String;

/// Flat token-name → value mapping. Ordered so every derived listing is stable.
pub type TokenMap = BTreeMap<TokenName, TokenValue>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl TokenValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Parse user input, keeping the kind of `self` when the input allows it.
    pub fn reparse(&self, input: &str) -> TokenValue {
        let trimmed = input.trim();
        match self {
            Self::Number(_) => trimmed
                .parse::<f64>()
                .map(Self::Number)
                .unwrap_or_else(|_| Self::Text(input.to_string())),
            Self::Bool(_) => match trimmed {
                "true" => Self::Bool(true),
                "false" => Self::Bool(false),
                _ => Self::Text(input.to_string()),
            },
            Self::Text(_) => Self::Text(input.to_string()),
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<&str> for TokenValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<f64> for TokenValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for TokenValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reparse_keeps_numeric_kind_when_input_is_numeric() {
        let current = TokenValue::Number(14.0);
        assert_eq!(current.reparse(" 16 "), TokenValue::Number(16.0));
        assert_eq!(current.reparse("16px"), TokenValue::text("16px"));
    }

    #[test]
    fn reparse_keeps_boolean_kind() {
        let current = TokenValue::Bool(false);
        assert_eq!(current.reparse("true"), TokenValue::Bool(true));
        assert_eq!(current.reparse("yes"), TokenValue::text("yes"));
    }

    #[test]
    fn token_values_deserialize_untagged() {
        let map: TokenMap =
            serde_json::from_str(r##"{"colorPrimary":"#1677ff","fontSize":14,"wireframe":false}"##)
                .expect("token map should parse");
        assert_eq!(map["colorPrimary"], TokenValue::text("#1677ff"));
        assert_eq!(map["fontSize"], TokenValue::Number(14.0));
        assert_eq!(map["wireframe"], TokenValue::Bool(false));
        assert_eq!(map["fontSize"].to_string(), "14");
    }
}
