//! Narrative sources and the selector that chooses between them.
//!
//! Any source of narrative text implements [`NarrativeProvider`]. A provider
//! that cannot produce usable text returns `None`; the selector then uses the
//! rule table. Provider failures are never reported to the caller.

use std::future::Future;
use std::time::Duration;

use psychaid_core::models::narrative::{Narrative, NarrativeSource};
use psychaid_core::models::result::AssessmentResult;
use psychaid_core::models::user::UserInfo;
use tracing::{info, warn};

use crate::bedrock::BedrockProvider;
use crate::config::{NarrativeConfig, ProviderKind};
use crate::rules;

/// Structured input handed to a narrative provider.
#[derive(Debug, Clone, Copy)]
pub struct NarrativeRequest<'a> {
    pub user_info: &'a UserInfo,
    pub results: &'a [AssessmentResult],
    pub overall_score: u32,
}

/// A source of diagnosis / analysis / recommendations text.
pub trait NarrativeProvider: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Produce a narrative, or `None` when no usable text is available.
    fn generate(
        &self,
        request: &NarrativeRequest<'_>,
    ) -> impl Future<Output = Option<Narrative>> + Send;
}

/// The fixed-rule narrative table. Always produces a narrative.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleTable;

impl RuleTable {
    pub fn narrative(&self, request: &NarrativeRequest<'_>) -> Narrative {
        rules::select_overall_narrative(request.user_info, request.results, request.overall_score)
    }
}

impl NarrativeProvider for RuleTable {
    fn name(&self) -> &str {
        "rule_table"
    }

    async fn generate(&self, request: &NarrativeRequest<'_>) -> Option<Narrative> {
        Some(self.narrative(request))
    }
}

/// A narrative together with the source that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedNarrative {
    pub narrative: Narrative,
    pub source: NarrativeSource,
}

/// Chooses the narrative for an assessment: one bounded attempt at the
/// external provider, if configured, then the rule table.
pub struct NarrativeSelector<P> {
    provider: Option<P>,
    timeout: Duration,
    rules: RuleTable,
}

impl NarrativeSelector<RuleTable> {
    /// A selector with no external provider.
    pub fn rule_table_only() -> Self {
        Self {
            provider: None,
            timeout: NarrativeConfig::default().timeout(),
            rules: RuleTable,
        }
    }
}

impl NarrativeSelector<BedrockProvider> {
    /// Build the selector described by `config`, connecting to Bedrock when
    /// it is the configured provider.
    pub async fn from_config(config: &NarrativeConfig) -> Self {
        let provider = match config.provider {
            ProviderKind::RuleTable => None,
            ProviderKind::Bedrock => Some(BedrockProvider::from_config(config).await),
        };
        info!(
            provider = ?config.provider,
            timeout_secs = config.timeout_secs,
            "narrative selector configured"
        );
        Self::new(provider, config.timeout())
    }
}

impl<P: NarrativeProvider> NarrativeSelector<P> {
    pub fn new(provider: Option<P>, timeout: Duration) -> Self {
        Self {
            provider,
            timeout,
            rules: RuleTable,
        }
    }

    pub fn has_external_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// Select the narrative for a scored assessment.
    pub async fn select(&self, request: &NarrativeRequest<'_>) -> SelectedNarrative {
        if let Some(narrative) = self.try_external(request).await {
            return SelectedNarrative {
                narrative,
                source: NarrativeSource::Provider,
            };
        }

        SelectedNarrative {
            narrative: self.rules.narrative(request),
            source: NarrativeSource::RuleTable,
        }
    }

    async fn try_external(&self, request: &NarrativeRequest<'_>) -> Option<Narrative> {
        let provider = self.provider.as_ref()?;

        match tokio::time::timeout(self.timeout, provider.generate(request)).await {
            Ok(Some(narrative)) => {
                info!(provider = provider.name(), "narrative from external provider");
                Some(narrative)
            }
            Ok(None) => {
                warn!(
                    provider = provider.name(),
                    "external provider gave no usable narrative, using rule table"
                );
                None
            }
            Err(_) => {
                warn!(
                    provider = provider.name(),
                    timeout_ms = self.timeout.as_millis() as u64,
                    "external provider timed out, using rule table"
                );
                None
            }
        }
    }
}
