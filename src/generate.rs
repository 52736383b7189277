//! The generate module turns a user's request and a prompt mode into a single
//! LLM call and normalizes its outcome into a display-ready string.

use anyhow::{Context, Result};
use async_trait::async_trait;
use llm::builder::{LLMBackend, LLMBuilder};
use llm::chat::{ChatMessage, ChatProvider};
use llm::error::LLMError;
use log::{debug, error, info};
use std::str::FromStr;
use url::Url;

use crate::PromptMode;
use crate::constants::{
    CONNECTION_FAILURE_MESSAGE, EMPTY_RESPONSE_MESSAGE, REQUEST_PREFIX, REQUEST_SUFFIX,
    TEMPERATURE,
};
use crate::instruction::system_instruction;

/// A fully specified outbound generation request.
#[derive(Clone, Debug, PartialEq)]
pub struct PromptRequest {
    /// Mode the instruction was resolved from
    pub mode: PromptMode,
    /// System-level directive sent to the model
    pub system_instruction: String,
    /// The user message wrapping the raw request
    pub contents: String,
    /// Sampling temperature
    pub temperature: f32,
}

impl PromptRequest {
    /// Composes a request from raw user input and a mode.
    ///
    /// Returns `None` when the input is empty or whitespace-only, in which case
    /// nothing should be sent. The input is embedded as is, without trimming.
    #[must_use]
    pub fn new(user_input: &str, mode: PromptMode) -> Option<Self> {
        if user_input.trim().is_empty() {
            return None;
        }

        Some(Self {
            mode,
            system_instruction: system_instruction(mode),
            contents: format!("{REQUEST_PREFIX}{user_input}{REQUEST_SUFFIX}"),
            temperature: TEMPERATURE,
        })
    }
}

/// Failure kinds of a single generation call.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// The provider could not be built (unknown backend, missing API key, ...)
    #[error("Failed to build LLM model: {0}")]
    Connect(#[source] LLMError),
    /// The provider call itself failed
    #[error("LLM error: {0}")]
    Provider(#[source] LLMError),
    /// The call succeeded but carried no text
    #[error("LLM returned an empty response")]
    EmptyResponse,
}

impl GenerateError {
    /// Flattens the error into the fixed message shown to users.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::EmptyResponse => EMPTY_RESPONSE_MESSAGE,
            Self::Connect(_) | Self::Provider(_) => CONNECTION_FAILURE_MESSAGE,
        }
    }
}

/// Sends one [`PromptRequest`] to a generation provider.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issues exactly one outbound call and returns the text of the response, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider cannot be reached or rejects the request.
    async fn send(&self, request: &PromptRequest) -> Result<Option<String>, GenerateError>;
}

/// Transport backed by the `llm` crate.
///
/// A fresh provider is built for every request because the system instruction
/// and temperature are provider-level settings.
#[derive(Clone)]
pub struct LlmTransport {
    backend: LLMBackend,
    model: String,
    api_key: Option<String>,
}

impl LlmTransport {
    /// Creates a transport for an explicit backend and model.
    #[must_use]
    pub fn new(backend: LLMBackend, model: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            backend,
            model: model.into(),
            api_key,
        }
    }

    /// Creates a transport from a model URL such as `google://gemini-2.5-flash`.
    ///
    /// The URL scheme selects the backend and the host names the model. A user
    /// part, if present, is joined to the model name with `:` so that
    /// `ollama://8b@llama3` addresses `llama3:8b`.
    ///
    /// # Arguments
    ///
    /// * `model_url` - The model URL
    /// * `api_key` - Credential passed to the provider on every request
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// * The URL cannot be parsed
    /// * The scheme is not a known LLM backend
    /// * The URL has no host to use as model name
    pub fn from_model_url(model_url: &str, api_key: Option<String>) -> Result<Self> {
        let url = Url::parse(model_url).map_err(|e| anyhow::anyhow!("Invalid model URL: {e}"))?;
        let backend = LLMBackend::from_str(url.scheme())
            .map_err(|e| anyhow::anyhow!("Invalid LLM backend: {e}"))?;
        let model = [
            url.host_str().context("Specify model name as host URL.")?,
            url.username(),
        ]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(":");

        Ok(Self::new(backend, model, api_key))
    }

    /// Returns the model name requests are sent to.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl Transport for LlmTransport {
    async fn send(&self, request: &PromptRequest) -> Result<Option<String>, GenerateError> {
        let builder = LLMBuilder::new()
            .backend(self.backend.clone())
            .model(self.model.clone())
            .system(request.system_instruction.clone())
            .temperature(request.temperature);
        let builder = match &self.api_key {
            Some(api_key) => builder.api_key(api_key.clone()),
            None => builder,
        };

        let provider = builder.build().map_err(GenerateError::Connect)?;

        chat_once(provider.as_ref(), request).await
    }
}

/// Sends the request contents as a single user message to a built provider.
///
/// # Arguments
///
/// * `model` - The provider, already configured with the system instruction
/// * `request` - The request to send
///
/// # Returns
///
/// The response text, or `None` if the provider returned no text
///
/// # Errors
///
/// Returns [`GenerateError::Provider`] if the chat call fails
pub async fn chat_once(
    model: &dyn ChatProvider,
    request: &PromptRequest,
) -> Result<Option<String>, GenerateError> {
    let messages = [ChatMessage::user()
        .content(request.contents.clone())
        .build()];

    let response = model
        .chat(&messages)
        .await
        .map_err(GenerateError::Provider)?;

    Ok(response.text())
}

/// Generates a structured prompt, keeping the failure kind.
///
/// Blank input short-circuits to an empty string without calling the transport.
///
/// # Arguments
///
/// * `transport` - The transport issuing the call
/// * `user_input` - Raw user request
/// * `mode` - Prompt mode selecting the system instruction
///
/// # Errors
///
/// Returns an error if:
/// * The transport fails
/// * The provider returns a missing or empty text
pub async fn request_prompt(
    transport: &dyn Transport,
    user_input: &str,
    mode: PromptMode,
) -> Result<String, GenerateError> {
    let Some(request) = PromptRequest::new(user_input, mode) else {
        debug!("Skipping blank request");
        return Ok(String::new());
    };

    info!("Generating {mode} prompt...");
    debug!(
        "Request of {} characters, instruction of {} characters",
        user_input.chars().count(),
        request.system_instruction.chars().count()
    );

    match transport.send(&request).await? {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(GenerateError::EmptyResponse),
    }
}

/// Generates a structured prompt and always resolves to a display-ready string.
///
/// Failures are logged and replaced by fixed messages, blank input yields an
/// empty string.
pub async fn generate_structured_prompt(
    transport: &dyn Transport,
    user_input: &str,
    mode: PromptMode,
) -> String {
    match request_prompt(transport, user_input, mode).await {
        Ok(text) => text,
        Err(err) => {
            error!("Error generating prompt: {err}");
            err.user_message().to_owned()
        }
    }
}
