//! The instruction module maps a prompt mode to the system instruction sent
//! along with every request.

use crate::PromptMode;
use crate::constants::{BASE_INSTRUCTION, CODING_GUIDANCE, CREATIVE_GUIDANCE};

/// Returns the guidance appended to the base instruction for the given mode.
///
/// `Structured` uses the base instruction as is and has no guidance.
#[must_use]
pub fn mode_guidance(mode: PromptMode) -> Option<&'static str> {
    match mode {
        PromptMode::Structured => None,
        PromptMode::Creative => Some(CREATIVE_GUIDANCE),
        PromptMode::Coding => Some(CODING_GUIDANCE),
    }
}

/// Builds the system instruction for the given mode.
///
/// Every instruction starts with the shared base block. Modes with guidance
/// get it appended after a blank line.
///
/// # Arguments
///
/// * `mode` - The prompt mode selected by the caller
///
/// # Returns
///
/// The full system instruction text
#[must_use]
pub fn system_instruction(mode: PromptMode) -> String {
    match mode_guidance(mode) {
        Some(guidance) => format!("{BASE_INSTRUCTION}\n{guidance}"),
        None => BASE_INSTRUCTION.to_owned(),
    }
}
