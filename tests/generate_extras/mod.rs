use std::sync::Mutex;

use async_trait::async_trait;
use llm::{
    chat::{ChatMessage, ChatProvider, ChatResponse, Tool},
    error::LLMError,
};
use prompt_architect::{GenerateError, PromptRequest, Transport};

#[macro_export]
macro_rules! assert_outcomes {
    (
        $(
            $test_name:ident : reply => $reply:expr, input => $input:expr, mode => $mode:expr, result => $result:expr
        ),+ $(,)?
    ) => {
        $(
            #[tokio::test]
            async fn $test_name() {
                let transport = StubTransport::new($reply);
                let result = prompt_architect::generate_structured_prompt(
                    &transport,
                    $input,
                    $mode,
                )
                .await;

                assert_that(&result).is_equal_to($result.to_owned());
            }
        )+
    }
}

/// What a stub provider answers with.
#[derive(Clone, Debug)]
pub(crate) enum StubReply {
    Text(&'static str),
    NoText,
    Fail,
}

/// Transport that records every request and answers with a fixed reply.
pub(crate) struct StubTransport {
    reply: StubReply,
    requests: Mutex<Vec<PromptRequest>>,
}

impl StubTransport {
    pub fn new(reply: StubReply) -> Self {
        StubTransport {
            reply,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<PromptRequest> {
        self.requests
            .lock()
            .expect("Stub transport mutex poisoned")
            .clone()
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn send(&self, request: &PromptRequest) -> Result<Option<String>, GenerateError> {
        self.requests
            .lock()
            .expect("Stub transport mutex poisoned")
            .push(request.clone());

        match &self.reply {
            StubReply::Text(text) => Ok(Some((*text).to_owned())),
            StubReply::NoText => Ok(None),
            StubReply::Fail => Err(GenerateError::Provider(LLMError::HttpError(
                "connection refused".to_owned(),
            ))),
        }
    }
}

/// Chat provider that records the messages it receives.
pub(crate) struct StubLlmProvider {
    response_content: Option<String>,
    received: Mutex<Vec<String>>,
}

impl StubLlmProvider {
    pub fn new(response_content: Option<String>) -> Self {
        StubLlmProvider {
            response_content,
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn received(&self) -> Vec<String> {
        self.received
            .lock()
            .expect("Stub provider mutex poisoned")
            .clone()
    }
}

#[derive(Debug)]
struct StringResponse(Option<String>);

impl ChatResponse for StringResponse {
    fn text(&self) -> Option<String> {
        self.0.clone()
    }

    fn tool_calls(&self) -> Option<Vec<llm::ToolCall>> {
        None
    }

    fn thinking(&self) -> Option<String> {
        None
    }

    fn usage(&self) -> Option<llm::chat::Usage> {
        None
    }
}

impl std::fmt::Display for StringResponse {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0.as_deref().unwrap_or_default())
    }
}

#[async_trait]
impl ChatProvider for StubLlmProvider {
    async fn chat(&self, messages: &[ChatMessage]) -> Result<Box<dyn ChatResponse>, LLMError> {
        self.received
            .lock()
            .expect("Stub provider mutex poisoned")
            .extend(messages.iter().map(|message| message.content.clone()));

        Ok(Box::new(StringResponse(self.response_content.clone())) as Box<dyn ChatResponse>)
    }

    async fn chat_with_tools(
        &self,
        _messages: &[ChatMessage],
        _tools: Option<&[Tool]>,
    ) -> Result<Box<dyn ChatResponse>, LLMError> {
        panic!()
    }
}
