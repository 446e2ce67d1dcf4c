//! Tasks: shared handles to a result that becomes available once.

use std::fmt;
use std::sync::Arc;

use parking_lot::{Condvar, Mutex};

use crate::fault::Fault;

/// Final state of a task.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome<T> {
    Completed(T),
    Cancelled,
    Faulted(Fault),
}

impl<T> Outcome<T> {
    pub fn is_completed(&self) -> bool {
        matches!(self, Outcome::Completed(_))
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Outcome::Cancelled)
    }

    pub fn is_faulted(&self) -> bool {
        matches!(self, Outcome::Faulted(_))
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Outcome::Completed(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Outcome::Completed(value) => Some(value),
            _ => None,
        }
    }

    /// Carry a non-completed outcome over to another result type.
    ///
    /// Returns `Err(value)` for `Completed`.
    pub(crate) fn propagate<U>(self) -> Result<Outcome<U>, T> {
        match self {
            Outcome::Completed(value) => Err(value),
            Outcome::Cancelled => Ok(Outcome::Cancelled),
            Outcome::Faulted(fault) => Ok(Outcome::Faulted(fault)),
        }
    }
}

type Continuation<T> = Box<dyn FnOnce(&Outcome<T>) + Send>;

enum State<T> {
    Pending(Vec<Continuation<T>>),
    Finished(Outcome<T>),
}

struct Shared<T> {
    state: Mutex<State<T>>,
    finished: Condvar,
}

/// Handle to a result that is produced once.
///
/// Clones refer to the same task. The first completion wins; later attempts
/// are ignored.
pub struct Task<T> {
    shared: Arc<Shared<T>>,
}

impl<T> Clone for Task<T> {
    fn clone(&self) -> Self {
        Task {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T: Clone + Send + 'static> Task<T> {
    fn pending() -> Self {
        Task {
            shared: Arc::new(Shared {
                state: Mutex::new(State::Pending(Vec::new())),
                finished: Condvar::new(),
            }),
        }
    }

    /// A task that has already finished with `outcome`.
    pub fn from_outcome(outcome: Outcome<T>) -> Self {
        Task {
            shared: Arc::new(Shared {
                state: Mutex::new(State::Finished(outcome)),
                finished: Condvar::new(),
            }),
        }
    }

    pub fn completed(value: T) -> Self {
        Task::from_outcome(Outcome::Completed(value))
    }

    pub fn cancelled() -> Self {
        Task::from_outcome(Outcome::Cancelled)
    }

    pub fn is_finished(&self) -> bool {
        matches!(*self.shared.state.lock(), State::Finished(_))
    }

    /// The outcome, if the task has finished.
    pub fn outcome(&self) -> Option<Outcome<T>> {
        match &*self.shared.state.lock() {
            State::Finished(outcome) => Some(outcome.clone()),
            State::Pending(_) => None,
        }
    }

    /// Run `callback` with the outcome once the task finishes.
    ///
    /// Runs immediately on the calling thread if the task already finished;
    /// otherwise on the thread that completes it.
    pub fn on_complete<F>(&self, callback: F)
    where
        F: FnOnce(&Outcome<T>) + Send + 'static,
    {
        let mut state = self.shared.state.lock();
        match &mut *state {
            State::Pending(callbacks) => callbacks.push(Box::new(callback)),
            State::Finished(outcome) => {
                let outcome = outcome.clone();
                drop(state);
                callback(&outcome);
            }
        }
    }

    /// Block the calling thread until the task finishes.
    ///
    /// Meant for worker threads that have no other choice. Coordinator code
    /// must use `Scheduler::blocking_wait`, which keeps the coordinator
    /// queue moving.
    pub fn wait_on_background(&self) -> Outcome<T> {
        let mut state = self.shared.state.lock();
        loop {
            if let State::Finished(outcome) = &*state {
                return outcome.clone();
            }
            self.shared.finished.wait(&mut state);
        }
    }

    fn complete(&self, outcome: Outcome<T>) -> bool {
        let callbacks = {
            let mut state = self.shared.state.lock();
            match &mut *state {
                State::Finished(_) => return false,
                State::Pending(callbacks) => {
                    let callbacks = std::mem::take(callbacks);
                    *state = State::Finished(outcome.clone());
                    callbacks
                }
            }
        };
        self.shared.finished.notify_all();
        for callback in callbacks {
            callback(&outcome);
        }
        true
    }
}

impl<T> fmt::Debug for Task<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = match &*self.shared.state.lock() {
            State::Pending(_) => "pending",
            State::Finished(Outcome::Completed(_)) => "completed",
            State::Finished(Outcome::Cancelled) => "cancelled",
            State::Finished(Outcome::Faulted(_)) => "faulted",
        };
        write!(f, "Task({status})")
    }
}

/// Producer side of a [`Task`], for results delivered by external events.
pub struct TaskSource<T> {
    task: Task<T>,
}

impl<T> Clone for TaskSource<T> {
    fn clone(&self) -> Self {
        TaskSource {
            task: self.task.clone(),
        }
    }
}

impl<T: Clone + Send + 'static> TaskSource<T> {
    pub fn new() -> Self {
        TaskSource {
            task: Task::pending(),
        }
    }

    /// The consumer handle.
    pub fn task(&self) -> Task<T> {
        self.task.clone()
    }

    /// Finish the task. Returns `false` if it had already finished.
    pub fn complete(&self, outcome: Outcome<T>) -> bool {
        self.task.complete(outcome)
    }

    pub fn set_result(&self, value: T) -> bool {
        self.complete(Outcome::Completed(value))
    }

    pub fn cancel(&self) -> bool {
        self.complete(Outcome::Cancelled)
    }

    pub fn fault(&self, fault: Fault) -> bool {
        self.complete(Outcome::Faulted(fault))
    }
}

impl<T: Clone + Send + 'static> Default for TaskSource<T> {
    fn default() -> Self {
        TaskSource::new()
    }
}

impl<T> fmt::Debug for TaskSource<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TaskSource({:?})", self.task)
    }
}

#[cfg(test)]
mod tests;
