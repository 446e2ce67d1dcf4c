//! Unexpected failures inside scheduled work.
//!
//! A panic that is not cooperative cancellation means the analysis engine is
//! in an unknown state. The scheduler reports it to a [`FaultSink`] once, at
//! the continuation that raised it; downstream continuations inherit the
//! fault without reporting it again.

use std::any::Any;
use std::panic::Location;

use parking_lot::Mutex;

/// A panic raised by a scheduled body.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("continuation `{continuation}` scheduled at {location} panicked: {message}")]
pub struct Fault {
    continuation: &'static str,
    location: &'static Location<'static>,
    message: String,
}

impl Fault {
    pub(crate) fn new(
        continuation: &'static str,
        location: &'static Location<'static>,
        message: String,
    ) -> Self {
        Fault {
            continuation,
            location,
            message,
        }
    }

    /// Build a fault from a caught panic payload.
    pub(crate) fn from_panic(
        continuation: &'static str,
        location: &'static Location<'static>,
        payload: &(dyn Any + Send),
    ) -> Self {
        Fault::new(continuation, location, panic_message(payload))
    }

    /// Type name of the body that panicked.
    pub fn continuation(&self) -> &'static str {
        self.continuation
    }

    /// Where the body was scheduled.
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

/// Destination for unexpected faults.
pub trait FaultSink: Send + Sync {
    fn report(&self, fault: &Fault);
}

/// Logs the fault and terminates the process.
///
/// The default sink: continuing after an unexpected fault could serve stale
/// or inconsistent semantic results.
#[derive(Copy, Clone, Debug, Default)]
pub struct AbortOnFault;

impl FaultSink for AbortOnFault {
    fn report(&self, fault: &Fault) {
        tracing::error!(
            continuation = fault.continuation(),
            location = %fault.location(),
            message = fault.message(),
            "unexpected fault in scheduled work, terminating"
        );
        std::process::abort();
    }
}

/// Records faults instead of terminating.
///
/// For tests and for embedders that surface faults through their own channel.
#[derive(Debug, Default)]
pub struct FaultLog {
    faults: Mutex<Vec<Fault>>,
}

impl FaultLog {
    pub fn new() -> Self {
        FaultLog::default()
    }

    /// Faults reported so far, oldest first.
    pub fn faults(&self) -> Vec<Fault> {
        self.faults.lock().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.faults.lock().is_empty()
    }
}

impl FaultSink for FaultLog {
    fn report(&self, fault: &Fault) {
        tracing::warn!(%fault, "fault recorded");
        self.faults.lock().push(fault.clone());
    }
}
