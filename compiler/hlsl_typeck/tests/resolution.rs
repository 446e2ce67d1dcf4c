//! Resolution against the full intrinsic catalog.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::OnceLock;

use hlsl_diagnostic::{ErrorCode, Span};
use hlsl_intrinsics::{Catalog, Direction};
use hlsl_typeck::{resolve, Argument, NoMatch, Resolution};
use hlsl_types::{PrimitiveKind, Type};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn catalog() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(|| Catalog::intrinsics().expect("intrinsic table is valid"))
}

fn signature(resolution: &Resolution<'_>) -> String {
    resolution
        .resolved()
        .map(|candidate| candidate.overload.to_string())
        .unwrap_or_else(|| panic!("unresolved: {resolution:?}"))
}

#[test]
fn max_of_two_floats() {
    let args = [Argument::input(Type::FLOAT), Argument::input(Type::FLOAT)];
    let resolution = resolve(catalog(), "max", &args);
    assert_eq!(signature(&resolution), "float max(float x, float y)");
    assert_eq!(resolution.resolved().unwrap().cost, 0);
}

#[test]
fn max_widens_int_argument_to_float() {
    let args = [Argument::input(Type::FLOAT), Argument::input(Type::INT)];
    let resolution = resolve(catalog(), "max", &args);
    assert_eq!(signature(&resolution), "float max(float x, float y)");
    assert_eq!(resolution.resolved().unwrap().cost, 2);
}

#[test]
fn interlocked_add_prefers_exact_int() {
    let args = [Argument::input(Type::INT), Argument::input(Type::INT)];
    let resolution = resolve(catalog(), "InterlockedAdd", &args);
    assert_eq!(
        signature(&resolution),
        "void InterlockedAdd(int dest, int value)"
    );
}

#[test]
fn interlocked_add_with_original_value() {
    let args = [
        Argument::input(Type::INT),
        Argument::input(Type::INT),
        Argument::output(Type::INT),
    ];
    let resolution = resolve(catalog(), "InterlockedAdd", &args);
    let candidate = resolution.resolved().unwrap();
    assert_eq!(candidate.cost, 0);
    assert_eq!(candidate.overload.parameters()[2].direction, Direction::Out);
}

#[test]
fn interlocked_add_rejects_plain_third_argument() {
    let args = [
        Argument::input(Type::INT),
        Argument::input(Type::INT),
        Argument::input(Type::INT),
    ];
    assert!(matches!(
        resolve(catalog(), "InterlockedAdd", &args),
        Resolution::NoMatch(NoMatch::NoApplicable { considered: 2 })
    ));
}

#[test]
fn unknown_function_reports_e2001() {
    let args = [Argument::input(Type::FLOAT)];
    let resolution = resolve(catalog(), "sqrtt", &args);
    assert_eq!(resolution, Resolution::NoMatch(NoMatch::UnknownFunction));

    let diag = resolution
        .diagnostic(catalog(), "sqrtt", &args, Span::new(10, 15))
        .unwrap();
    assert_eq!(diag.code, ErrorCode::E2001);
    assert_eq!(diag.suggestions, vec!["did you mean `sqrt`?".to_string()]);
}

#[test]
fn nullary_call_resolves() {
    let resolution = resolve(catalog(), "GroupMemoryBarrier", &[]);
    assert_eq!(signature(&resolution), "void GroupMemoryBarrier()");
}

/// Every overload is the unique zero-cost match for its own parameter types.
#[test]
fn every_overload_resolves_to_itself() {
    let catalog = catalog();
    for (id, overload) in catalog.iter() {
        let args: Vec<Argument> = overload
            .parameters()
            .iter()
            .map(|param| Argument {
                ty: param.ty,
                is_output: param.direction.is_out(),
            })
            .collect();

        match resolve(catalog, overload.name(), &args) {
            Resolution::Resolved(candidate) => {
                assert_eq!(candidate.id, id, "{overload}");
                assert_eq!(candidate.cost, 0, "{overload}");
            }
            other => panic!("{overload} did not resolve to itself: {other:?}"),
        }
    }
}

fn type_strategy() -> impl Strategy<Value = Type> {
    let kinds = prop_oneof![
        Just(PrimitiveKind::Bool),
        Just(PrimitiveKind::Int),
        Just(PrimitiveKind::Uint),
        Just(PrimitiveKind::Float),
        Just(PrimitiveKind::Double),
    ];
    (kinds, 1u8..=4, 1u8..=4, any::<bool>()).prop_map(|(kind, rows, cols, is_matrix)| {
        if is_matrix {
            Type::matrix(kind, rows, cols).unwrap()
        } else {
            Type::vector(kind, cols).unwrap()
        }
    })
}

fn argument_strategy() -> impl Strategy<Value = Argument> {
    (type_strategy(), any::<bool>()).prop_map(|(ty, is_output)| Argument { ty, is_output })
}

proptest! {
    #[test]
    fn resolution_is_deterministic(
        name_index in any::<prop::sample::Index>(),
        args in prop::collection::vec(argument_strategy(), 0..=4),
    ) {
        let catalog = catalog();
        let names: Vec<&str> = catalog.names().collect();
        let name = names[name_index.index(names.len())];

        let first = resolve(catalog, name, &args);
        let second = resolve(catalog, name, &args);
        prop_assert_eq!(&first, &second);

        if let Resolution::Resolved(candidate) = first {
            prop_assert_eq!(candidate.overload.arity(), args.len());
            prop_assert_eq!(candidate.overload.name(), name);
        }
    }
}
