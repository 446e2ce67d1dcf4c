use super::*;
use pretty_assertions::assert_eq;

fn driver() -> Driver {
    Driver::new(
        &SchedulerConfig::default().with_worker_threads(1),
        SessionConfig::default().with_debounce(Duration::ZERO),
    )
    .unwrap()
}

#[test]
fn test_parse_argument() {
    assert_eq!(parse_argument("float3"), Ok(Argument::input(Type::FLOAT3)));
    assert_eq!(parse_argument("out:uint"), Ok(Argument::output(Type::UINT)));
    assert!(parse_argument("float5").is_err());
    assert!(parse_argument("out:").is_err());
}

#[test]
fn test_resolve_prints_chosen_overload() {
    let mut driver = driver();
    let report = driver
        .resolve("max", &["float".to_string(), "int".to_string()])
        .unwrap();
    assert!(!report.failed);
    assert!(report
        .text
        .starts_with("float max(float x, float y)\n\nSelects the greater of x and y."));
}

#[test]
fn test_resolve_output_argument() {
    let mut driver = driver();
    let types = ["int", "int", "out:int"].map(String::from);
    let report = driver.resolve("InterlockedAdd", &types).unwrap();
    assert!(report
        .text
        .starts_with("void InterlockedAdd(int dest, int value, out int originalValue)"));
}

#[test]
fn test_resolve_unknown_function_suggests() {
    let mut driver = driver();
    let report = driver.resolve("sqrtt", &["float".to_string()]).unwrap();
    assert!(report.failed);
    assert!(report.text.contains("[E2001]"));
    assert!(report.text.contains("help: did you mean `sqrt`?"));
}

#[test]
fn test_resolve_rejects_bad_type() {
    let mut driver = driver();
    let result = driver.resolve("abs", &["vec3".to_string()]);
    assert!(matches!(result, Err(CommandError::Type(_))));
}

#[test]
fn test_signatures() {
    let mut driver = driver();
    let report = driver.signatures("InterlockedAdd").unwrap();
    let lines: Vec<&str> = report.text.lines().collect();
    assert_eq!(lines[0], "void InterlockedAdd(int dest, int value)");
    assert_eq!(lines[3], "void InterlockedAdd(uint dest, uint value, out uint originalValue)");
    assert_eq!(lines[4], "");

    let unknown = driver.signatures("nope").unwrap();
    assert!(unknown.failed);
}

#[test]
fn test_list_by_prefix() {
    let driver = driver();
    let report = driver.list("interlockedc").unwrap();
    let names: Vec<&str> = report
        .text
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .collect();
    assert_eq!(
        names,
        vec!["InterlockedCompareExchange", "InterlockedCompareStore"]
    );
}

#[test]
fn test_symbols() {
    let driver = driver();
    let report = driver.symbols("MAX").unwrap();
    let max = report
        .text
        .lines()
        .find(|line| line.starts_with("max "))
        .unwrap();
    assert_eq!(max.split_whitespace().collect::<Vec<_>>(), vec!["max", "8", "overloads"]);
    assert_eq!(report.text.lines().count(), 5);
}
