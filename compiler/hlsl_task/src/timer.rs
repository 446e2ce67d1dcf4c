//! Deadline thread for delays and timeouts.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::thread;
use std::time::Instant;

use crossbeam::channel::{self, Receiver, RecvTimeoutError, Sender};

use crate::error::SchedulerError;
use crate::scheduler::Job;

struct Entry {
    deadline: Instant,
    seq: u64,
    job: Job,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Reversed so the max-heap pops the earliest deadline, FIFO among equals.
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .deadline
            .cmp(&self.deadline)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Handle to the timer thread.
///
/// The thread exits once the handle is dropped; entries still pending are
/// discarded.
pub(crate) struct Timer {
    tx: Sender<(Instant, Job)>,
}

impl Timer {
    pub(crate) fn spawn(name: String) -> Result<Self, SchedulerError> {
        let (tx, rx) = channel::unbounded();
        thread::Builder::new()
            .name(name)
            .spawn(move || run(&rx))
            .map_err(SchedulerError::Timer)?;
        Ok(Timer { tx })
    }

    /// Run `job` on the timer thread at or after `deadline`.
    ///
    /// Jobs must be short; they delay every later deadline.
    pub(crate) fn schedule(&self, deadline: Instant, job: Job) {
        if self.tx.send((deadline, job)).is_err() {
            tracing::warn!("timer thread is gone, dropping scheduled job");
        }
    }
}

fn run(rx: &Receiver<(Instant, Job)>) {
    let mut heap = BinaryHeap::new();
    let mut seq = 0_u64;

    loop {
        let received = match heap.peek() {
            None => rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
            Some(Entry { deadline, .. }) => {
                rx.recv_timeout(deadline.saturating_duration_since(Instant::now()))
            }
        };

        match received {
            Ok((deadline, job)) => {
                heap.push(Entry { deadline, seq, job });
                seq += 1;
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                tracing::trace!(pending = heap.len(), "timer shutting down");
                return;
            }
        }

        let now = Instant::now();
        while heap.peek().is_some_and(|entry| entry.deadline <= now) {
            if let Some(entry) = heap.pop() {
                (entry.job)();
            }
        }
    }
}
