//! Parser configuration.
//!
//! Limits are driven by environment variables so services embedding the parser
//! can tighten them without a rebuild.

use std::env;

use tracing::warn;

/// Default maximum nesting of calls and parenthesized groups.
const DEFAULT_MAX_DEPTH: usize = 256;

/// Default maximum input length in characters (1 MiB).
const DEFAULT_MAX_INPUT_LEN: usize = 1024 * 1024;

/// Resource limits applied while parsing.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParserConfig {
    /// Maximum nesting of calls and parenthesized groups.
    pub max_depth: usize,
    /// Maximum input length in characters.
    pub max_input_len: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_input_len: DEFAULT_MAX_INPUT_LEN,
        }
    }
}

impl ParserConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `FILTEREXPR_MAX_DEPTH` | `256` |
    /// | `FILTEREXPR_MAX_INPUT_LEN` | `1048576` |
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(v) = env_usize(&lookup, "FILTEREXPR_MAX_DEPTH") {
            config.max_depth = v;
        }
        if let Some(v) = env_usize(&lookup, "FILTEREXPR_MAX_INPUT_LEN") {
            config.max_input_len = v;
        }

        config
    }
}

fn env_usize(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<usize> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(e) => {
            warn!(key, value = %raw, error = %e, "ignoring invalid parser limit");
            None
        }
    }
}
