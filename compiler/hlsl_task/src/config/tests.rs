use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_defaults() {
    let config = SchedulerConfig::default();
    assert_eq!(config.worker_threads, 0);
    assert_eq!(config.thread_name_prefix, "hlsl-worker");
}

#[test]
fn test_builders() {
    let config = SchedulerConfig::default()
        .with_worker_threads(3)
        .with_stack_size(1024 * 1024)
        .with_thread_name_prefix(format!("analysis-{}", 1));
    assert_eq!(config.worker_threads, 3);
    assert_eq!(config.stack_size, 1024 * 1024);
    assert_eq!(config.thread_name_prefix, "analysis-1");
}

#[test]
fn test_env_value() {
    let base = SchedulerConfig::default();
    assert_eq!(
        base.clone()
            .with_env_worker_threads(Some(" 6 ".to_string()))
            .worker_threads,
        6
    );
    assert_eq!(base.clone().with_env_worker_threads(None), base);
    assert_eq!(
        base.clone().with_env_worker_threads(Some("many".to_string())),
        base
    );
}
