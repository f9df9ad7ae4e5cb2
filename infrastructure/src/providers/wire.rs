//! Chat-completions wire format shared by both transports

use jargon_application::TransportError;
use jargon_domain::{
    CONNECTIVITY_MAX_TOKENS, Credential, ExplainRequest, ModelSpec, PromptTemplate, RequestPurpose,
};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tracing::debug;

/// Longest error body excerpt carried into a failure message
const MAX_ERROR_EXCERPT: usize = 200;

#[derive(Debug, Serialize)]
pub(crate) struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: Cow<'a, str>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl<'a> ChatRequest<'a> {
    /// System prompt, user prompt, and the shared sampling settings
    pub fn build(spec: &'a ModelSpec, request: &ExplainRequest) -> Self {
        let (system, user, max_tokens): (&'static str, Cow<'a, str>, Option<u32>) =
            match request.purpose {
                RequestPurpose::Explain => (
                    PromptTemplate::explainer_system(),
                    Cow::Owned(PromptTemplate::explain_term(&request.term)),
                    spec.max_tokens,
                ),
                RequestPurpose::ConnectivityCheck => (
                    PromptTemplate::connectivity_system(),
                    Cow::Borrowed(PromptTemplate::connectivity_check()),
                    Some(CONNECTIVITY_MAX_TOKENS),
                ),
            };
        Self {
            model: &spec.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system.into(),
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature: request.temperature.value(),
            top_p: spec.top_p,
            max_tokens,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Extract the first choice's content from a success body
pub(crate) fn parse_completion(body: &str) -> Result<String, TransportError> {
    let response: ChatResponse = serde_json::from_str(body)
        .map_err(|e| TransportError::MalformedResponse(e.to_string()))?;

    let content = response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or_else(|| TransportError::MalformedResponse("no content in response".to_string()))?;

    let text = content.trim();
    if text.is_empty() {
        return Err(TransportError::MalformedResponse(
            "empty content in response".to_string(),
        ));
    }
    Ok(text.to_string())
}

/// Human-readable reason from an error body: the provider's `error.message`
/// when present, otherwise a short excerpt of the raw body
pub(crate) fn error_message(body: &str) -> String {
    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
        return envelope.error.message;
    }
    let body = body.trim();
    if body.is_empty() {
        return "empty response body".to_string();
    }
    match body.char_indices().nth(MAX_ERROR_EXCERPT) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

fn map_send_error(e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout
    } else {
        TransportError::Connection(e.to_string())
    }
}

/// POST a chat-completions body and return the explanation text
pub(crate) async fn post_chat(
    client: &reqwest::Client,
    url: &str,
    credential: &Credential,
    body: &ChatRequest<'_>,
) -> Result<String, TransportError> {
    let response = client
        .post(url)
        .header(reqwest::header::AUTHORIZATION, credential.bearer_header())
        .header(reqwest::header::ACCEPT, "application/json")
        .json(body)
        .send()
        .await
        .map_err(map_send_error)?;

    let status = response.status();
    let text = response.text().await.map_err(map_send_error)?;
    debug!(url, status = status.as_u16(), bytes = text.len(), "Chat completion response");

    if !status.is_success() {
        return Err(TransportError::from_status(
            status.as_u16(),
            error_message(&text),
        ));
    }

    parse_completion(&text)
}
