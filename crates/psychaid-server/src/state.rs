use std::sync::Arc;

use psychaid_analysis::NarrativeSelector;
use psychaid_analysis::bedrock::BedrockProvider;
use psychaid_export::styles::DocumentStyles;

/// Shared application state, injected into all route handlers via Axum state.
///
/// Nothing here is mutated after startup; requests share no assessment data.
#[derive(Clone)]
pub struct AppState {
    pub selector: Arc<NarrativeSelector<BedrockProvider>>,
    pub styles: Arc<DocumentStyles>,
}
