use blackjack::Paytable;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::Error;

/// Table configuration shared by the stores
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct TableConfig {
    /// Starting (and reset) chip balance
    pub initial_balance: i64,

    /// Maximum wager shown for Perfect Pairs, 21+3 and Lucky Ladies.
    /// Insurance starts at 0 until the UI offers it.
    pub side_bet_max_bet: i64,

    /// Side-bet history entries kept, newest first
    pub history_limit: usize,

    pub paytable: Paytable,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            initial_balance: 1000,
            side_bet_max_bet: 100,
            history_limit: 50,
            paytable: Paytable::default(),
        }
    }
}

impl TableConfig {
    /// Parses a config, filling anything missing from the defaults.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json_wasm::from_str(json).map_err(|e| Error::Config(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, Error> {
        serde_json_wasm::to_string(self).map_err(|e| Error::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TableConfig::default();
        assert_eq!(config.initial_balance, 1000);
        assert_eq!(config.side_bet_max_bet, 100);
        assert_eq!(config.history_limit, 50);
        assert_eq!(config.paytable, Paytable::default());
    }

    #[test]
    fn test_config_round_trip() {
        let mut config = TableConfig {
            initial_balance: 500,
            ..TableConfig::default()
        };
        config.paytable.lucky_ladies.any_twenty = 3;
        let json = config.to_json().unwrap();
        assert_eq!(TableConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config =
            TableConfig::from_json(r#"{"historyLimit":10,"paytable":{"poker":{"flush":6}}}"#)
                .unwrap();
        assert_eq!(config.history_limit, 10);
        assert_eq!(config.initial_balance, 1000);
        assert_eq!(config.paytable.poker.flush, 6);
        assert_eq!(config.paytable.poker.straight, 10);
        assert_eq!(config.paytable.insurance, 2);
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            TableConfig::from_json("{\"initialBalance\":\"lots\"}"),
            Err(Error::Config(_))
        ));
    }
}
