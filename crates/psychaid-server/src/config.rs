use std::env;
use std::path::PathBuf;

use psychaid_analysis::config::{NarrativeConfig, ProviderKind};
use psychaid_export::styles::DocumentStyles;

/// Everything the server reads from its environment at startup.
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
    pub narrative: NarrativeConfig,
    pub styles: DocumentStyles,
}

impl ServerConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup. Unset or blank keys keep their
    /// defaults; malformed values are an error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = ServerConfig::default();

        if let Some(provider) = get("PSYCHAID_NARRATIVE_PROVIDER") {
            config.narrative.provider = match provider.trim() {
                "rule_table" => ProviderKind::RuleTable,
                "bedrock" => ProviderKind::Bedrock,
                other => eyre::bail!(
                    "PSYCHAID_NARRATIVE_PROVIDER must be `rule_table` or `bedrock`, got `{other}`"
                ),
            };
        }
        if let Some(model_id) = get("PSYCHAID_BEDROCK_MODEL_ID") {
            config.narrative.model_id = model_id;
        }
        if let Some(timeout) = get("PSYCHAID_PROVIDER_TIMEOUT_SECS") {
            config.narrative.timeout_secs = timeout.trim().parse().map_err(|e| {
                eyre::eyre!("PSYCHAID_PROVIDER_TIMEOUT_SECS is not a number of seconds: {e}")
            })?;
        }
        config.narrative.region = get("AWS_REGION");

        if let Some(name) = get("PSYCHAID_SIGNATORY_NAME") {
            config.styles.signatory_name = Some(name);
        }
        if let Some(organisation) = get("PSYCHAID_ORGANISATION") {
            config.styles.organisation = organisation;
        }
        config.styles.pdf_font = get("PSYCHAID_PDF_FONT").map(PathBuf::from);
        config.styles.pdf_bold_font = get("PSYCHAID_PDF_BOLD_FONT").map(PathBuf::from);

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_to_rule_table() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.narrative.provider, ProviderKind::RuleTable);
        assert_eq!(config.narrative.timeout_secs, 20);
        assert_eq!(config.narrative.region, None);
        assert_eq!(config.styles.signatory_name, None);
        assert_eq!(config.styles.pdf_font, None);
    }

    #[test]
    fn reads_bedrock_settings() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("PSYCHAID_NARRATIVE_PROVIDER", "bedrock"),
            ("PSYCHAID_BEDROCK_MODEL_ID", "us.example-model-v1:0"),
            ("PSYCHAID_PROVIDER_TIMEOUT_SECS", "7"),
            ("AWS_REGION", "eu-west-1"),
            ("PSYCHAID_SIGNATORY_NAME", "Dr. A. Jones"),
            ("PSYCHAID_PDF_FONT", "/opt/fonts/NotoSerifCJK-Regular.ttf"),
        ]))
        .unwrap();
        assert_eq!(config.narrative.provider, ProviderKind::Bedrock);
        assert_eq!(config.narrative.model_id, "us.example-model-v1:0");
        assert_eq!(config.narrative.timeout_secs, 7);
        assert_eq!(config.narrative.region.as_deref(), Some("eu-west-1"));
        assert_eq!(config.styles.signatory_name.as_deref(), Some("Dr. A. Jones"));
        assert_eq!(
            config.styles.pdf_font,
            Some(PathBuf::from("/opt/fonts/NotoSerifCJK-Regular.ttf"))
        );
        assert_eq!(config.styles.pdf_bold_font, None);
    }

    #[test]
    fn blank_values_keep_defaults() {
        let config =
            ServerConfig::from_lookup(lookup(&[("PSYCHAID_NARRATIVE_PROVIDER", "  ")])).unwrap();
        assert_eq!(config.narrative.provider, ProviderKind::RuleTable);
    }

    #[test]
    fn rejects_malformed_values() {
        assert!(
            ServerConfig::from_lookup(lookup(&[("PSYCHAID_NARRATIVE_PROVIDER", "openai")]))
                .is_err()
        );
        assert!(
            ServerConfig::from_lookup(lookup(&[("PSYCHAID_PROVIDER_TIMEOUT_SECS", "soon")]))
                .is_err()
        );
    }
}
