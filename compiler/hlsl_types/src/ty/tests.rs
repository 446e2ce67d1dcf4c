use super::*;
use pretty_assertions::assert_eq;

#[test]
fn constants_match_constructors() {
    assert_eq!(Type::vector(PrimitiveKind::Float, 3), Some(Type::FLOAT3));
    assert_eq!(Type::matrix(PrimitiveKind::Int, 4, 4), Some(Type::INT4X4));
    assert_eq!(Type::scalar(PrimitiveKind::Uint), Type::UINT);
}

#[test]
fn constructors_reject_out_of_range_dimensions() {
    assert_eq!(Type::vector(PrimitiveKind::Float, 0), None);
    assert_eq!(Type::vector(PrimitiveKind::Float, 5), None);
    assert_eq!(Type::matrix(PrimitiveKind::Float, 4, 5), None);
    assert_eq!(Type::matrix(PrimitiveKind::Float, 0, 2), None);
}

#[test]
fn display_uses_shader_spelling() {
    assert_eq!(Type::VOID.to_string(), "void");
    assert_eq!(Type::UINT.to_string(), "uint");
    assert_eq!(Type::DOUBLE2.to_string(), "double2");
    assert_eq!(Type::FLOAT4X4.to_string(), "float4x4");
    assert_eq!(format!("{:?}", Type::BOOL3), "Type(bool3)");
}

#[test]
fn parse_round_trips_display() {
    for text in ["void", "bool", "int3", "uint", "uint4", "float2x2", "double4", "int1x3"] {
        let ty: Type = text.parse().expect("valid type name");
        assert_eq!(ty.to_string(), text);
    }
}

#[test]
fn parse_prefers_uint_over_int() {
    let ty: Type = "uint2".parse().expect("valid type name");
    assert_eq!(ty.kind(), Some(PrimitiveKind::Uint));
}

#[test]
fn parse_rejects_garbage() {
    for text in ["", "half", "float5", "float0", "float2x", "int12", "float4x4x4", "Float"] {
        let err = text.parse::<Type>().expect_err("should not parse");
        assert_eq!(err.input, text);
    }
}

#[test]
fn identical_types_cost_nothing() {
    assert_eq!(Type::FLOAT3.conversion_cost(Type::FLOAT3), Some(0));
    assert_eq!(Type::VOID.conversion_cost(Type::VOID), Some(0));
}

#[test]
fn widening_costs_one_per_rank_step() {
    assert_eq!(Type::BOOL.conversion_cost(Type::INT), Some(1));
    assert_eq!(Type::INT.conversion_cost(Type::UINT), Some(1));
    assert_eq!(Type::INT.conversion_cost(Type::FLOAT), Some(2));
    assert_eq!(Type::INT2.conversion_cost(Type::DOUBLE2), Some(3));
    assert_eq!(Type::BOOL4.conversion_cost(Type::DOUBLE4), Some(4));
}

#[test]
fn narrowing_is_not_implicit() {
    assert_eq!(Type::FLOAT.conversion_cost(Type::INT), None);
    assert_eq!(Type::UINT3.conversion_cost(Type::INT3), None);
    assert!(!Type::DOUBLE.converts_to(Type::FLOAT));
}

#[test]
fn shape_changes_are_never_implicit() {
    // No scalar broadcast and no truncation.
    assert_eq!(Type::FLOAT.conversion_cost(Type::FLOAT3), None);
    assert_eq!(Type::FLOAT4.conversion_cost(Type::FLOAT), None);
    assert_eq!(Type::FLOAT2X2.conversion_cost(Type::FLOAT4), None);
}

#[test]
fn void_never_converts_to_values() {
    assert!(!Type::VOID.converts_to(Type::FLOAT));
    assert!(!Type::FLOAT.converts_to(Type::VOID));
}

#[test]
fn components_follow_shape() {
    assert_eq!(Type::FLOAT.shape().map(Shape::components), Some(1));
    assert_eq!(Type::UINT3.shape().map(Shape::components), Some(3));
    assert_eq!(Type::FLOAT4X4.shape().map(Shape::components), Some(16));
    assert_eq!(Type::VOID.shape(), None);
}
