use super::*;
use hlsl_intrinsics::{CatalogBuilder, Template};
use hlsl_typeck::Argument;
use hlsl_types::{Type, TypeFamily};
use pretty_assertions::assert_eq;

#[test]
fn test_resolved_call() {
    let catalog = Catalog::intrinsics().unwrap();
    let call = CallSite::new(
        "lerp",
        Span::new(3, 20),
        vec![Argument::input(Type::FLOAT3); 3],
    );
    let hover = hover(&catalog, &call).unwrap();
    assert_eq!(hover.span, Span::new(3, 20));
    assert!(hover
        .contents
        .starts_with("float3 lerp(float3 x, float3 y, float3 s)\n\n"));
    assert!(hover.contents.contains("\n- `s`: "));
}

#[test]
fn test_ambiguous_call_lists_candidates() {
    let mut builder = CatalogBuilder::new();
    builder
        .expand(
            &Template::new("pick", "", TypeFamily::single(Type::INT))
                .param("a", "")
                .param("b", "")
                .param_type(1, Type::FLOAT),
        )
        .unwrap()
        .expand(
            &Template::new("pick", "", TypeFamily::single(Type::FLOAT))
                .param("a", "")
                .param("b", "")
                .param_type(1, Type::INT),
        )
        .unwrap();
    let catalog = builder.build();

    let call = CallSite::new(
        "pick",
        Span::new(0, 10),
        vec![Argument::input(Type::INT), Argument::input(Type::INT)],
    );
    assert_eq!(
        hover(&catalog, &call).unwrap().contents,
        "ambiguous call to `pick`; candidates:\n\
         int pick(int a, float b)\n\
         float pick(float a, int b)"
    );
}

#[test]
fn test_no_match() {
    let catalog = Catalog::intrinsics().unwrap();
    let call = CallSite::new("sqrt", Span::new(0, 4), Vec::new());
    assert_eq!(hover(&catalog, &call), None);
}
