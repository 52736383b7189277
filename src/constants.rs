pub const MODEL_API_KEY_ENV_NAME: &str = "PROMPT_ARCHITECT_API_KEY";

/// Checked when [`MODEL_API_KEY_ENV_NAME`] is not set.
pub const FALLBACK_API_KEY_ENV_NAME: &str = "API_KEY";

pub const DEFAULT_MODEL_URL: &str = "google://gemini-2.5-flash";

pub const TEMPERATURE: f32 = 0.7;

pub const EMPTY_RESPONSE_MESSAGE: &str = "Failed to generate prompt. Please try again.";

pub const CONNECTION_FAILURE_MESSAGE: &str =
    "Error: Failed to connect to Gemini API. Please check your connection or API key.";

pub(crate) const REQUEST_PREFIX: &str = "User Request: \"";

pub(crate) const REQUEST_SUFFIX: &str =
    "\"\n\nPlease convert this into a ready-to-use, structured Gemini prompt.";

pub(crate) const BASE_INSTRUCTION: &str = r#"You are an expert Prompt Engineer for Google's Gemini models.

Your goal is to transform the user's simple request into a highly optimized, structured prompt that unlocks the full potential of Gemini.

### Instructions
1. Analyze the User's Request.
2. Create a comprehensive prompt using the structure below.
3. Output ONLY the generated prompt content. Do not include markdown code blocks (like ```markdown) unless the prompt *content* itself requires code. Do not include intro/outro text.

### Target Structure
**Role**: [Assign a specific expert persona]
**Objective**: [Clear, action-oriented goal]
**Context**: [Necessary background or constraints]
**Steps**:
1. [Step 1]
2. [Step 2]
...
**Format**: [Desired output format, e.g., Markdown, Table, JSON]
"#;

pub(crate) const CREATIVE_GUIDANCE: &str = r"Since this is a CREATIVE task:
- Encourage unique angles, vivid language, and high variability.
- Allow for more expansive and less rigid output structures where appropriate.";

pub(crate) const CODING_GUIDANCE: &str = r"Since this is a CODING task:
- Emphasize modern best practices, clean syntax, and error handling.
- Request comments and documentation.
- If applicable, ask for test cases.";
