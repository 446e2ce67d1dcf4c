use super::*;
use pretty_assertions::assert_eq;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crate::fault::FaultLog;

use super::ExecutionContext::{Coordinator, Worker};

fn scheduler() -> (Scheduler, Arc<FaultLog>) {
    let log = Arc::new(FaultLog::new());
    let config = SchedulerConfig::default()
        .with_worker_threads(2)
        .with_thread_name_prefix("test-worker");
    let scheduler = Scheduler::with_fault_sink(&config, log.clone()).unwrap();
    (scheduler, log)
}

fn none() -> CancellationToken {
    CancellationToken::none()
}

#[test]
fn test_run_on_worker() {
    let (s, _) = scheduler();
    let task = s.run(|_| Ok(21 * 2), Worker, &none());
    assert_eq!(s.blocking_wait(&task, &none()), Ok(42));
}

#[test]
fn test_worker_threads_are_named() {
    let (s, _) = scheduler();
    assert_eq!(s.worker_threads(), 2);
    let task = s.run(
        |_| Ok(thread::current().name().map(str::to_string)),
        Worker,
        &none(),
    );
    let name = s.blocking_wait(&task, &none()).unwrap().unwrap();
    assert!(name.starts_with("test-worker-"), "{name}");
}

#[test]
fn test_coordinator_jobs_wait_for_pump() {
    let (s, _) = scheduler();
    let task = s.run(|_| Ok(thread::current().id()), Coordinator, &none());
    assert!(!task.is_finished());
    assert!(s.pump() >= 1);
    assert_eq!(task.outcome(), Some(Outcome::Completed(thread::current().id())));
}

#[test]
fn test_cancelled_root_never_runs() {
    let (s, _) = scheduler();
    let token = CancellationToken::new();
    token.cancel();
    let ran = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&ran);
    let task = s.run(
        move |_| {
            flag.store(true, Ordering::SeqCst);
            Ok(())
        },
        Coordinator,
        &token,
    );
    s.pump();
    assert_eq!(task.outcome(), Some(Outcome::Cancelled));
    assert!(!ran.load(Ordering::SeqCst));
}

#[test]
fn test_run_after_passes_value() {
    let (s, _) = scheduler();
    let a = s.run(|_| Ok(String::from("float")), Worker, &none());
    let b = s.run_after(&a, |ty, _| Ok(format!("{ty}3")), Worker, &none());
    assert_eq!(s.blocking_wait(&b, &none()), Ok("float3".to_string()));
}

#[test]
fn test_continuation_on_coordinator_runs_on_waiting_thread() {
    let (s, _) = scheduler();
    let a = s.run(|_| Ok(()), Worker, &none());
    let b = s.run_after(&a, |(), _| Ok(thread::current().id()), Coordinator, &none());
    assert_eq!(s.blocking_wait(&b, &none()), Ok(thread::current().id()));
}

#[test]
fn test_lazy_cancellation_waits_for_antecedent() {
    let (s, _) = scheduler();
    let ran = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&ran);

    let a = s.run(|_| Ok(1), Coordinator, &none());
    let token = CancellationToken::new();
    let b = s.run_after(
        &a,
        move |value, _| {
            flag.store(true, Ordering::SeqCst);
            Ok(value + 1)
        },
        Worker,
        &token,
    );

    token.cancel();
    assert!(!a.is_finished());
    assert!(!b.is_finished(), "continuation finished before its antecedent");

    s.pump();
    assert_eq!(a.outcome(), Some(Outcome::Completed(1)));
    assert_eq!(b.outcome(), Some(Outcome::Cancelled));
    assert!(!ran.load(Ordering::SeqCst));
}

#[test]
fn test_cancelled_antecedent_cancels_continuation() {
    let (s, _) = scheduler();
    let source = TaskSource::<u32>::new();
    let b = s.run_after(&source.task(), |v, _| Ok(v), Worker, &none());
    source.cancel();
    assert_eq!(s.blocking_wait(&b, &none()), Err(WaitError::Cancelled));
}

#[test]
fn test_err_cancelled_is_not_a_fault() {
    let (s, log) = scheduler();
    let task = s.run(|_| Err::<(), _>(Cancelled), Worker, &none());
    assert_eq!(s.blocking_wait(&task, &none()), Err(WaitError::Cancelled));
    assert!(log.is_empty());
}

#[test]
fn test_cancellation_panic_after_own_token_fired() {
    let (s, log) = scheduler();
    let token = CancellationToken::new();
    let own = token.clone();
    let task = s.run(
        move |_| -> Result<(), Cancelled> {
            own.cancel();
            std::panic::panic_any(Cancelled)
        },
        Worker,
        &token,
    );
    assert_eq!(task.wait_on_background(), Outcome::Cancelled);
    assert!(log.is_empty());
}

#[test]
fn test_cancellation_panic_without_cancellation_is_a_fault() {
    let (s, log) = scheduler();
    let task = s.run(
        |_| -> Result<(), Cancelled> { std::panic::panic_any(Cancelled) },
        Worker,
        &CancellationToken::new(),
    );
    assert!(task.wait_on_background().is_faulted());
    assert_eq!(log.faults().len(), 1);
    assert_eq!(log.faults()[0].message(), "non-string panic payload");
}

#[test]
fn test_fault_is_reported_once_and_propagates() {
    let (s, log) = scheduler();
    let a = s.run(
        |_| -> Result<u32, Cancelled> { panic!("index {} out of range", 7) },
        Worker,
        &none(),
    );
    let b = s.run_after(&a, |v, _| Ok(v + 1), Worker, &none());
    let c = s.run_after(&b, |v, _| Ok(v + 1), Coordinator, &none());

    let Err(WaitError::Faulted(fault)) = s.blocking_wait(&c, &none()) else {
        panic!("expected a fault");
    };
    assert_eq!(fault.message(), "index 7 out of range");
    assert!(fault.location().file().ends_with("tests.rs"));
    assert!(fault.continuation().contains("test_fault_is_reported_once_and_propagates"));
    assert_eq!(log.faults(), vec![fault]);
}

#[test]
fn test_delay() {
    let (s, _) = scheduler();
    let start = Instant::now();
    let delay = s.delay(Duration::from_millis(15), &none());
    assert_eq!(s.blocking_wait(&delay, &none()), Ok(()));
    assert!(start.elapsed() >= Duration::from_millis(15));
}

#[test]
fn test_delay_cancels_immediately() {
    let (s, _) = scheduler();
    let token = CancellationToken::new();
    let delay = s.delay(Duration::from_secs(60), &token);
    assert!(!delay.is_finished());
    token.cancel();
    assert_eq!(delay.outcome(), Some(Outcome::Cancelled));
}

#[test]
fn test_run_after_delay() {
    let (s, _) = scheduler();
    let start = Instant::now();
    let b = s.run_after_delay(
        &Task::completed(2),
        |v, _| Ok(v * 10),
        Duration::from_millis(15),
        Worker,
        &none(),
    );
    assert_eq!(s.blocking_wait(&b, &none()), Ok(20));
    assert!(start.elapsed() >= Duration::from_millis(15));
}

#[test]
fn test_run_after_delay_cancelled_during_delay() {
    let (s, _) = scheduler();
    let token = CancellationToken::new();
    let b = s.run_after_delay(
        &Task::completed(1),
        |v, _| Ok(v),
        Duration::from_secs(60),
        Worker,
        &token,
    );
    token.cancel();
    assert_eq!(s.blocking_wait(&b, &none()), Err(WaitError::Cancelled));
}

#[test]
fn test_run_after_task_flattens() {
    let (s, _) = scheduler();
    let inner = s.clone();
    let b = s.run_after_task(
        &Task::completed(3),
        move |v, token| Ok(inner.run(move |_| Ok(v * 2), Worker, token)),
        Coordinator,
        &none(),
    );
    assert_eq!(s.blocking_wait(&b, &none()), Ok(6));
}

#[test]
fn test_with_timeout_cancels_slow_operation() {
    let (s, _) = scheduler();
    let polls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&polls);
    let task = s.with_timeout(Duration::from_millis(20), &none(), |token| {
        s.run(
            move |token| -> Result<(), Cancelled> {
                loop {
                    token.check()?;
                    counter.fetch_add(1, Ordering::SeqCst);
                    thread::sleep(Duration::from_millis(1));
                }
            },
            Worker,
            token,
        )
    });
    assert_eq!(s.blocking_wait(&task, &none()), Err(WaitError::Cancelled));
    assert!(polls.load(Ordering::SeqCst) > 0);
}

#[test]
fn test_with_timeout_fast_operation_completes() {
    let (s, _) = scheduler();
    let parent = CancellationToken::new();
    let task = s.with_timeout(Duration::from_secs(60), &parent, |token| {
        s.run(|_| Ok("done"), Worker, token)
    });
    assert_eq!(s.blocking_wait(&task, &none()), Ok("done"));
    assert!(!parent.is_cancelled());
}

#[test]
fn test_blocking_wait_gives_up_on_cancel() {
    let (s, _) = scheduler();
    let source = TaskSource::<u8>::new();
    let token = CancellationToken::new();
    let canceller = token.clone();
    let _timer = s.run(
        move |_| {
            thread::sleep(Duration::from_millis(10));
            canceller.cancel();
            Ok(())
        },
        Worker,
        &none(),
    );
    assert_eq!(
        s.blocking_wait(&source.task(), &token),
        Err(WaitError::Cancelled)
    );
    assert!(!source.task().is_finished());
}

#[cfg(debug_assertions)]
#[test]
fn test_blocking_wait_off_coordinator_asserts() {
    let (s, _) = scheduler();
    let handle = thread::spawn(move || s.blocking_wait(&Task::completed(1), &none()));
    assert!(handle.join().is_err());
}

#[test]
fn test_dropping_last_handle_releases_queued_work() {
    let (s, _) = scheduler();
    let gate = TaskSource::<u32>::new();
    let queued = s.run(|_| Ok(1), Coordinator, &none());
    let _chained = s.run_after(&queued, |value, _| Ok(value + 1), Worker, &none());
    let delayed = s.run_after_delay(
        &gate.task(),
        |value, _| Ok(value),
        Duration::from_secs(60),
        Coordinator,
        &none(),
    );
    let _sleeping = s.delay(Duration::from_secs(60), &none());

    let weak = s.downgrade();
    drop(s);
    assert!(weak.upgrade().is_none());
    assert_eq!(format!("{weak:?}"), "WeakScheduler(stopped)");

    // The queued coordinator job was discarded, not run.
    assert!(!queued.is_finished());
    gate.set_result(7);
    assert_eq!(delayed.outcome(), Some(Outcome::Cancelled));
}

#[test]
fn test_weak_handle_upgrades_while_running() {
    let (s, _) = scheduler();
    let weak = s.downgrade();
    let again = weak.upgrade().unwrap();
    let task = again.run(|_| Ok(5), Worker, &none());
    assert_eq!(s.blocking_wait(&task, &none()), Ok(5));
}
