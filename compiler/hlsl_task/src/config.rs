//! Scheduler configuration.

use std::borrow::Cow;

/// Environment variable overriding the worker thread count.
pub const WORKER_THREADS_ENV: &str = "HLSL_WORKER_THREADS";

/// Worker pool settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchedulerConfig {
    /// Number of worker threads. `0` lets rayon pick (one per core).
    pub worker_threads: usize,
    /// Stack size for worker threads, in bytes.
    pub stack_size: usize,
    /// Worker threads are named `{prefix}-{index}`.
    pub thread_name_prefix: Cow<'static, str>,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        SchedulerConfig {
            worker_threads: 0,
            // 8 MiB: resolution is shallow, analysis bodies may not be
            stack_size: 8 * 1024 * 1024,
            thread_name_prefix: Cow::Borrowed("hlsl-worker"),
        }
    }
}

impl SchedulerConfig {
    /// Defaults, with `HLSL_WORKER_THREADS` applied if set.
    pub fn from_env() -> Self {
        SchedulerConfig::default().with_env_worker_threads(std::env::var(WORKER_THREADS_ENV).ok())
    }

    #[must_use]
    pub fn with_worker_threads(mut self, worker_threads: usize) -> Self {
        self.worker_threads = worker_threads;
        self
    }

    #[must_use]
    pub fn with_stack_size(mut self, stack_size: usize) -> Self {
        self.stack_size = stack_size;
        self
    }

    #[must_use]
    pub fn with_thread_name_prefix(mut self, prefix: impl Into<Cow<'static, str>>) -> Self {
        self.thread_name_prefix = prefix.into();
        self
    }

    fn with_env_worker_threads(self, value: Option<String>) -> Self {
        let Some(value) = value else {
            return self;
        };
        match value.trim().parse::<usize>() {
            Ok(worker_threads) => self.with_worker_threads(worker_threads),
            Err(error) => {
                tracing::warn!(
                    variable = WORKER_THREADS_ENV,
                    %value,
                    %error,
                    "ignoring invalid worker thread count"
                );
                self
            }
        }
    }
}

#[cfg(test)]
mod tests;
