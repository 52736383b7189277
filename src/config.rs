//! The config module reads process-wide settings the CLI injects into the
//! library: the API credential and the request text.

use log::{debug, info};

use crate::constants::{FALLBACK_API_KEY_ENV_NAME, MODEL_API_KEY_ENV_NAME};

/// Reads the API key from the environment.
///
/// [`MODEL_API_KEY_ENV_NAME`] is checked first, then [`FALLBACK_API_KEY_ENV_NAME`].
#[must_use]
pub fn read_api_key() -> Option<String> {
    resolve_api_key(|name| std::env::var(name).ok())
}

/// Picks the first non-empty API key returned by `lookup` for the known
/// variable names. A variable set to an empty string counts as unset.
pub fn resolve_api_key<F>(lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    for name in [MODEL_API_KEY_ENV_NAME, FALLBACK_API_KEY_ENV_NAME] {
        match lookup(name) {
            Some(key) if !key.is_empty() => {
                info!("API key is provided by {name}");
                return Some(key);
            }
            Some(_) => debug!("{name} is set but empty"),
            None => debug!("{name} is not set"),
        }
    }

    info!("No API key provided");
    None
}

/// Strips one trailing line ending (`\n` or `\r\n`) left by piped input.
#[must_use]
pub fn strip_line_ending(text: &str) -> &str {
    text.strip_suffix('\n')
        .map(|rest| rest.strip_suffix('\r').unwrap_or(rest))
        .unwrap_or(text)
}
