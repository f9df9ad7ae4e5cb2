//! Model value objects: which backends are consulted and how to reach them

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// The three explainer backends, in canonical display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelId {
    Gpt,
    Mistral,
    Grok,
}

impl ModelId {
    /// All models in display order
    pub const ALL: [ModelId; 3] = [ModelId::Gpt, ModelId::Mistral, ModelId::Grok];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelId::Gpt => "gpt",
            ModelId::Mistral => "mistral",
            ModelId::Grok => "grok",
        }
    }
}

impl std::fmt::Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ModelId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gpt" => Ok(ModelId::Gpt),
            "mistral" => Ok(ModelId::Mistral),
            "grok" => Ok(ModelId::Grok),
            other => Err(DomainError::UnknownModel(other.to_string())),
        }
    }
}

/// How a model endpoint is called
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transport {
    /// Plain JSON POST to a fully qualified chat-completions URL
    RestJson,
    /// Structured chat-completions client against an inference base endpoint
    ChatCompletionsClient,
}

impl Transport {
    pub fn as_str(&self) -> &'static str {
        match self {
            Transport::RestJson => "rest_json",
            Transport::ChatCompletionsClient => "chat_completions_client",
        }
    }
}

/// Static description of one backend (Value Object)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSpec {
    pub id: ModelId,
    pub display_name: String,
    /// Model identifier sent in the request body
    pub model: String,
    pub transport: Transport,
    pub endpoint: String,
    /// Upper bound on generated tokens, when the provider call sets one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Nucleus sampling value, when the provider call sets one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
}

/// Shared inference endpoint for the structured client models
pub const GITHUB_INFERENCE_ENDPOINT: &str = "https://models.github.ai/inference";

/// Deployment URL for the REST model
pub const GITHUB_GPT_ENDPOINT: &str =
    "https://models.inference.ai.azure.com/openai/deployments/gpt-4.1/chat/completions";

const CLIENT_MAX_TOKENS: u32 = 500;
const CLIENT_TOP_P: f32 = 1.0;

impl ModelSpec {
    /// Built-in settings for a model
    pub fn default_for(id: ModelId) -> Self {
        match id {
            ModelId::Gpt => Self {
                id,
                display_name: "GitHub Models GPT-4.1".to_string(),
                model: "gpt-4.1".to_string(),
                transport: Transport::RestJson,
                endpoint: GITHUB_GPT_ENDPOINT.to_string(),
                max_tokens: None,
                top_p: None,
            },
            ModelId::Mistral => Self {
                id,
                display_name: "GitHub Models Mistral Small 3.1".to_string(),
                model: "mistral-ai/mistral-small-2503".to_string(),
                transport: Transport::ChatCompletionsClient,
                endpoint: GITHUB_INFERENCE_ENDPOINT.to_string(),
                max_tokens: Some(CLIENT_MAX_TOKENS),
                top_p: Some(CLIENT_TOP_P),
            },
            ModelId::Grok => Self {
                id,
                display_name: "xAI Grok-3".to_string(),
                model: "xai/grok-3".to_string(),
                transport: Transport::ChatCompletionsClient,
                endpoint: GITHUB_INFERENCE_ENDPOINT.to_string(),
                max_tokens: Some(CLIENT_MAX_TOKENS),
                top_p: Some(CLIENT_TOP_P),
            },
        }
    }
}

/// Ordered, read-only set of configured models.
///
/// Built once at startup and shared by reference; order is the display
/// order and is always the canonical [`ModelId`] order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelCatalog {
    specs: Vec<ModelSpec>,
}

impl ModelCatalog {
    /// Build a catalog from specs. Specs are sorted into canonical order and
    /// duplicate ids keep the first occurrence.
    pub fn new(specs: Vec<ModelSpec>) -> Result<Self, DomainError> {
        let mut deduped: Vec<ModelSpec> = Vec::with_capacity(specs.len());
        for spec in specs {
            if !deduped.iter().any(|s| s.id == spec.id) {
                deduped.push(spec);
            }
        }
        if deduped.is_empty() {
            return Err(DomainError::NoModels);
        }
        deduped.sort_by_key(|s| s.id);
        Ok(Self { specs: deduped })
    }

    pub fn specs(&self) -> &[ModelSpec] {
        &self.specs
    }

    pub fn get(&self, id: ModelId) -> Option<&ModelSpec> {
        self.specs.iter().find(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl Default for ModelCatalog {
    fn default() -> Self {
        Self {
            specs: ModelId::ALL.iter().map(|id| ModelSpec::default_for(*id)).collect(),
        }
    }
}
