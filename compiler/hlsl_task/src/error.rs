//! Scheduler errors.

use crate::fault::Fault;

/// Failure to start the scheduler's threads.
#[derive(Debug, thiserror::Error)]
pub enum SchedulerError {
    #[error("failed to build worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),

    #[error("failed to spawn timer thread: {0}")]
    Timer(#[source] std::io::Error),
}

/// Why a blocking wait returned without a value.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WaitError {
    /// The awaited task was cancelled, or the wait itself was.
    #[error("operation was cancelled")]
    Cancelled,

    #[error(transparent)]
    Faulted(#[from] Fault),
}
