//! Session configuration.

use std::time::Duration;

/// Environment variable overriding the diagnostics debounce, in milliseconds.
pub const DEBOUNCE_ENV: &str = "HLSL_DEBOUNCE_MS";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Quiet period after an edit before call sites are re-resolved.
    pub debounce: Duration,
    /// Cap on completion results.
    pub max_completion_items: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            debounce: Duration::from_millis(250),
            max_completion_items: 100,
        }
    }
}

impl SessionConfig {
    /// Defaults, with `HLSL_DEBOUNCE_MS` applied if set.
    pub fn from_env() -> Self {
        SessionConfig::default().with_env_debounce(std::env::var(DEBOUNCE_ENV).ok())
    }

    #[must_use]
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    #[must_use]
    pub fn with_max_completion_items(mut self, max: usize) -> Self {
        self.max_completion_items = max;
        self
    }

    fn with_env_debounce(self, value: Option<String>) -> Self {
        let Some(value) = value else {
            return self;
        };
        match value.trim().parse::<u64>() {
            Ok(millis) => self.with_debounce(Duration::from_millis(millis)),
            Err(error) => {
                tracing::warn!(
                    variable = DEBOUNCE_ENV,
                    %value,
                    %error,
                    "ignoring invalid debounce delay"
                );
                self
            }
        }
    }
}
