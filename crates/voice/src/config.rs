//! Interpreter configuration.

use serde::{Deserialize, Serialize};

use pantry_core::{DomainError, DomainResult};
use pantry_inventory::NewItemDefaults;

use crate::resolve::MATCH_THRESHOLD;

/// Words dropped from an item phrase before resolution.
pub const DEFAULT_FILLER_WORDS: [&str; 6] = ["the", "a", "an", "some", "my", "our"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterpreterConfig {
    /// Minimum fuzzy score for a phrase to resolve to an existing item.
    pub match_threshold: f64,
    pub filler_words: Vec<String>,
    pub new_item: NewItemDefaults,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            match_threshold: MATCH_THRESHOLD,
            filler_words: DEFAULT_FILLER_WORDS.iter().map(|w| w.to_string()).collect(),
            new_item: NewItemDefaults::default(),
        }
    }
}

impl InterpreterConfig {
    /// Load from JSON; missing fields keep their defaults.
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| DomainError::validation(format!("interpreter config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> DomainResult<()> {
        if !(0.0..=1.0).contains(&self.match_threshold) {
            return Err(DomainError::validation("match_threshold must be within [0, 1]"));
        }
        if self.new_item.category.trim().is_empty() {
            return Err(DomainError::validation("new item category cannot be empty"));
        }
        Ok(())
    }

    pub(crate) fn is_filler(&self, word: &str) -> bool {
        self.filler_words.iter().any(|f| f == word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pantry_inventory::CanonicalUnit;

    #[test]
    fn defaults_match_documented_values() {
        let config = InterpreterConfig::default();
        assert_eq!(config.match_threshold, 0.45);
        assert_eq!(config.new_item.category, "Snacks");
        assert_eq!(config.new_item.unit, CanonicalUnit::Pcs);
        assert!(config.is_filler("some"));
        assert!(!config.is_filler("tomato"));
    }

    #[test]
    fn from_json_overrides_selected_fields() {
        let config = InterpreterConfig::from_json(
            r#"{"filler_words": ["the", "please"], "new_item": {"category": "Pantry"}}"#,
        )
        .unwrap();
        assert_eq!(config.match_threshold, 0.45);
        assert!(config.is_filler("please"));
        assert_eq!(config.new_item.category, "Pantry");
        assert_eq!(config.new_item.bulk_low_stock_threshold, 0.25);
    }

    #[test]
    fn from_json_rejects_out_of_range_threshold() {
        let err = InterpreterConfig::from_json(r#"{"match_threshold": 1.5}"#).unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains("match_threshold")),
            _ => panic!("Expected Validation error for bad threshold"),
        }
    }

    #[test]
    fn from_json_rejects_malformed_input() {
        assert!(InterpreterConfig::from_json("{not json").is_err());
    }
}
