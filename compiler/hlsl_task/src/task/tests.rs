use super::*;
use pretty_assertions::assert_eq;
use std::panic::Location;
use std::thread;
use std::time::Duration;

fn fault() -> Fault {
    Fault::new("test::body", Location::caller(), "boom".to_string())
}

#[test]
fn test_first_completion_wins() {
    let source = TaskSource::new();
    let task = source.task();
    assert!(!task.is_finished());
    assert!(source.set_result(1));
    assert!(!source.set_result(2));
    assert!(!source.cancel());
    assert_eq!(task.outcome(), Some(Outcome::Completed(1)));
}

#[test]
fn test_callbacks_run_on_completion() {
    let source = TaskSource::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    for tag in ["a", "b"] {
        let seen = Arc::clone(&seen);
        source.task().on_complete(move |outcome: &Outcome<u32>| {
            seen.lock().push((tag, outcome.clone()));
        });
    }
    assert!(seen.lock().is_empty());

    source.set_result(7);
    assert_eq!(
        *seen.lock(),
        vec![("a", Outcome::Completed(7)), ("b", Outcome::Completed(7))]
    );
}

#[test]
fn test_callback_after_completion_runs_immediately() {
    let task = Task::completed("done");
    let seen = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&seen);
    task.on_complete(move |outcome| *sink.lock() = outcome.value().copied());
    assert_eq!(*seen.lock(), Some("done"));
}

#[test]
fn test_callback_may_reenter_task() {
    let source = TaskSource::<u8>::new();
    let task = source.task();
    let inner = task.clone();
    let seen = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&seen);
    task.on_complete(move |_| *sink.lock() = inner.outcome());
    source.cancel();
    assert_eq!(*seen.lock(), Some(Outcome::Cancelled));
}

#[test]
fn test_wait_on_background() {
    let source = TaskSource::<u32>::new();
    let task = source.task();
    let waiter = thread::spawn(move || task.wait_on_background());
    thread::sleep(Duration::from_millis(10));
    source.fault(fault());
    let outcome = waiter.join().unwrap();
    assert!(outcome.is_faulted());
}

#[test]
fn test_outcome_accessors() {
    let completed: Outcome<i32> = Outcome::Completed(3);
    assert!(completed.is_completed());
    assert_eq!(completed.value(), Some(&3));
    assert_eq!(completed.into_value(), Some(3));

    let cancelled: Outcome<i32> = Outcome::Cancelled;
    assert!(cancelled.is_cancelled());
    assert_eq!(cancelled.propagate::<String>(), Ok(Outcome::Cancelled));

    let faulted: Outcome<i32> = Outcome::Faulted(fault());
    assert!(faulted.is_faulted());
    assert_eq!(faulted.into_value(), None);
}

#[test]
fn test_debug() {
    let source = TaskSource::<()>::new();
    assert_eq!(format!("{:?}", source.task()), "Task(pending)");
    source.cancel();
    assert_eq!(format!("{source:?}"), "TaskSource(Task(cancelled))");
}
