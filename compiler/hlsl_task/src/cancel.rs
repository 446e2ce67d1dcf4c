//! Cooperative cancellation.
//!
//! A [`CancellationToken`] is a cheap, clonable handle to a shared flag.
//! Cancelling is one-way and idempotent; callbacks registered with
//! [`CancellationToken::on_cancel`] run exactly once, on the thread that
//! cancels, outside any internal lock.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

type Callback = Box<dyn FnOnce() + Send>;

/// Marker error for work that stopped because its token was cancelled.
///
/// Bodies return `Err(Cancelled)` (usually via [`CancellationToken::check`]
/// and `?`) to finish as cancelled rather than faulted.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, thiserror::Error)]
#[error("operation was cancelled")]
pub struct Cancelled;

#[derive(Default)]
struct Callbacks {
    next_id: u64,
    entries: Vec<(u64, Callback)>,
}

#[derive(Default)]
struct TokenState {
    cancelled: AtomicBool,
    callbacks: Mutex<Callbacks>,
    /// Link to the parent token; dropping it deregisters this child.
    parent: Mutex<Option<CancellationRegistration>>,
}

impl TokenState {
    fn cancel(&self) -> bool {
        if self.cancelled.swap(true, Ordering::AcqRel) {
            return false;
        }
        let entries = std::mem::take(&mut self.callbacks.lock().entries);
        for (_, callback) in entries {
            callback();
        }
        true
    }
}

/// Shared cancellation signal.
///
/// `CancellationToken::none()` (also the `Default`) can never be cancelled
/// and allocates nothing.
#[derive(Clone, Default)]
pub struct CancellationToken {
    state: Option<Arc<TokenState>>,
}

impl CancellationToken {
    /// A fresh, uncancelled token.
    pub fn new() -> Self {
        CancellationToken {
            state: Some(Arc::default()),
        }
    }

    /// A token that is never cancelled.
    pub const fn none() -> Self {
        CancellationToken { state: None }
    }

    /// Request cancellation. Returns `true` for the call that flipped the flag.
    pub fn cancel(&self) -> bool {
        match &self.state {
            Some(state) => {
                let flipped = state.cancel();
                if flipped {
                    tracing::trace!("cancellation requested");
                }
                flipped
            }
            None => false,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.state
            .as_ref()
            .is_some_and(|state| state.cancelled.load(Ordering::Acquire))
    }

    /// Whether this token can ever be cancelled.
    pub fn can_be_cancelled(&self) -> bool {
        self.state.is_some()
    }

    /// `Err(Cancelled)` once cancellation has been requested.
    pub fn check(&self) -> Result<(), Cancelled> {
        if self.is_cancelled() {
            Err(Cancelled)
        } else {
            Ok(())
        }
    }

    /// Run `callback` when the token is cancelled.
    ///
    /// Runs immediately if the token is already cancelled. The callback is
    /// dropped without running if the returned registration is dropped first.
    pub fn on_cancel<F>(&self, callback: F) -> CancellationRegistration
    where
        F: FnOnce() + Send + 'static,
    {
        let Some(state) = &self.state else {
            return CancellationRegistration::empty();
        };

        let mut callbacks = state.callbacks.lock();
        if state.cancelled.load(Ordering::Acquire) {
            drop(callbacks);
            callback();
            return CancellationRegistration::empty();
        }

        let id = callbacks.next_id;
        callbacks.next_id += 1;
        callbacks.entries.push((id, Box::new(callback)));
        CancellationRegistration {
            state: Arc::downgrade(state),
            id,
        }
    }

    /// A token cancelled whenever `self` is, and also cancellable on its own.
    ///
    /// Cancelling the child never affects the parent.
    pub fn child(&self) -> CancellationToken {
        let child = CancellationToken::new();
        let Some(child_state) = &child.state else {
            return child;
        };

        let weak = Arc::downgrade(child_state);
        let registration = self.on_cancel(move || {
            if let Some(state) = weak.upgrade() {
                state.cancel();
            }
        });
        *child_state.parent.lock() = Some(registration);
        child
    }
}

impl fmt::Debug for CancellationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            None => f.write_str("CancellationToken(none)"),
            Some(_) => write!(f, "CancellationToken(cancelled: {})", self.is_cancelled()),
        }
    }
}

/// Handle for a callback registered with [`CancellationToken::on_cancel`].
///
/// Dropping it deregisters the callback if it has not run yet.
#[must_use = "dropping the registration removes the callback"]
pub struct CancellationRegistration {
    state: Weak<TokenState>,
    id: u64,
}

impl CancellationRegistration {
    fn empty() -> Self {
        CancellationRegistration {
            state: Weak::new(),
            id: 0,
        }
    }
}

impl Drop for CancellationRegistration {
    fn drop(&mut self) {
        if let Some(state) = self.state.upgrade() {
            state
                .callbacks
                .lock()
                .entries
                .retain(|(id, _)| *id != self.id);
        }
    }
}

impl fmt::Debug for CancellationRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CancellationRegistration")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}
