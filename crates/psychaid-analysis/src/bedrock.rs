//! Bedrock-backed narrative provider.
//!
//! Sends the structured assessment block to a Claude model through the
//! Converse API and expects the narrative back as JSON. Any failure along the
//! way is logged and reported to the selector as "no usable narrative".

use aws_sdk_bedrockruntime::types::{ContentBlock, ConversationRole, Message, SystemContentBlock};
use aws_sdk_bedrockruntime::Client;
use psychaid_core::models::narrative::Narrative;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::NarrativeConfig;
use crate::error::ProviderError;
use crate::prompt;
use crate::provider::{NarrativeProvider, NarrativeRequest};

#[derive(Debug, Clone)]
pub struct BedrockProvider {
    client: Client,
    model_id: String,
}

impl BedrockProvider {
    pub fn new(client: Client, model_id: impl Into<String>) -> Self {
        Self {
            client,
            model_id: model_id.into(),
        }
    }

    /// Load AWS configuration from the default chain, honouring the region
    /// override in `config`.
    pub async fn from_config(config: &NarrativeConfig) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(region) = &config.region {
            loader = loader.region(aws_config::Region::new(region.clone()));
        }
        let sdk_config = loader.load().await;
        Self::new(Client::new(&sdk_config), config.model_id.clone())
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    /// One request/response round trip, with every failure as an error.
    pub async fn request_narrative(
        &self,
        request: &NarrativeRequest<'_>,
    ) -> Result<Narrative, ProviderError> {
        let request_id = Uuid::new_v4();
        info!(request_id = %request_id, model = %self.model_id, "requesting narrative");

        let user_message = prompt::build_assessment_block(request);
        let response_text =
            invoke_converse(&self.client, &self.model_id, prompt::SYSTEM_PROMPT, &user_message)
                .await?;
        let narrative = prompt::parse_narrative(&response_text)?;

        info!(
            request_id = %request_id,
            recommendations = narrative.recommendations.len(),
            "narrative received"
        );
        Ok(narrative)
    }
}

impl NarrativeProvider for BedrockProvider {
    fn name(&self) -> &str {
        "bedrock"
    }

    async fn generate(&self, request: &NarrativeRequest<'_>) -> Option<Narrative> {
        match self.request_narrative(request).await {
            Ok(narrative) => Some(narrative),
            Err(e) => {
                warn!(model = %self.model_id, error = %e, "bedrock narrative unusable");
                None
            }
        }
    }
}

/// Single-turn Converse call. Returns the concatenated text blocks of the
/// reply.
async fn invoke_converse(
    client: &Client,
    model_id: &str,
    system_prompt: &str,
    user_message: &str,
) -> Result<String, ProviderError> {
    let response = client
        .converse()
        .model_id(model_id)
        .system(SystemContentBlock::Text(system_prompt.to_string()))
        .messages(
            Message::builder()
                .role(ConversationRole::User)
                .content(ContentBlock::Text(user_message.to_string()))
                .build()
                .map_err(|e| ProviderError::Invocation(e.to_string()))?,
        )
        .send()
        .await
        .map_err(|e| ProviderError::Invocation(e.into_service_error().to_string()))?;

    let output_message = response
        .output()
        .and_then(|o| o.as_message().ok())
        .ok_or_else(|| ProviderError::ResponseParse("no message in response".to_string()))?;

    let response_text = output_message
        .content()
        .iter()
        .filter_map(|block| {
            if let ContentBlock::Text(text) = block {
                Some(text.as_str())
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("");

    Ok(response_text)
}
