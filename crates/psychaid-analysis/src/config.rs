use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Which source produces the overall narrative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    /// Fixed-rule text only.
    #[default]
    RuleTable,
    /// Bedrock Converse, falling back to the rule table.
    Bedrock,
}

/// Narrative selector configuration, passed in at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NarrativeConfig {
    #[serde(default)]
    pub provider: ProviderKind,

    /// Inference profile ID, e.g. `us.anthropic.claude-sonnet-4-20250514-v1:0`.
    #[serde(default = "default_model_id")]
    pub model_id: String,

    /// AWS region override; the SDK default chain is used when absent.
    #[serde(default)]
    pub region: Option<String>,

    /// Upper bound on a single provider call. Exceeding it counts as an
    /// unusable response.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl NarrativeConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for NarrativeConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::default(),
            model_id: default_model_id(),
            region: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_model_id() -> String {
    "us.anthropic.claude-sonnet-4-20250514-v1:0".to_string()
}

fn default_timeout_secs() -> u64 {
    20
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_rule_table() {
        let config: NarrativeConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.provider, ProviderKind::RuleTable);
        assert_eq!(config.timeout(), Duration::from_secs(20));
        assert!(config.model_id.contains("claude"));
    }

    #[test]
    fn bedrock_kind_parses() {
        let config: NarrativeConfig =
            serde_json::from_str(r#"{"provider":"bedrock","timeout_secs":5}"#).unwrap();
        assert_eq!(config.provider, ProviderKind::Bedrock);
        assert_eq!(config.timeout_secs, 5);
    }
}
