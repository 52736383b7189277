//! The prompt-architect library turns a plain user request into a structured,
//! ready-to-use LLM prompt by asking a hosted model to rewrite it.

pub mod config;
pub mod constants;
pub mod generate;
pub mod instruction;

use std::fmt;

/// Enum representing the prompt styling strategy.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum PromptMode {
    /// Standard role/objective/steps breakdown
    #[default]
    Structured,
    /// More open-ended, varied output
    Creative,
    /// Code-specific best practices, documentation and tests
    Coding,
}

impl PromptMode {
    /// All modes in presentation order.
    pub const ALL: [PromptMode; 3] = [Self::Structured, Self::Creative, Self::Coding];
}

impl std::str::FromStr for PromptMode {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_lowercase().as_str() {
            "structured" => Ok(PromptMode::Structured),
            "creative" => Ok(PromptMode::Creative),
            "coding" => Ok(PromptMode::Coding),
            _ => Err(format!("Invalid prompt mode: {input}")),
        }
    }
}

impl fmt::Display for PromptMode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PromptMode::Structured => "Structured",
            PromptMode::Creative => "Creative",
            PromptMode::Coding => "Coding",
        };
        formatter.write_str(label)
    }
}

pub use generate::{
    GenerateError, LlmTransport, PromptRequest, Transport, generate_structured_prompt,
    request_prompt,
};
pub use instruction::system_instruction;
