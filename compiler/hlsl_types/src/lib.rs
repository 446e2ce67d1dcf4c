//! Type vocabulary for HLSL intrinsic tooling.
//!
//! The set of types is closed: every value type is a (`PrimitiveKind`, `Shape`)
//! pair, plus `void` for functions that return nothing. Types are `Copy` values,
//! so the same logical type compares equal everywhere without an interner.
//!
//! # Type Families
//!
//! A [`TypeFamily`] is a named, ordered, duplicate-free list of types used to
//! parameterize overload generation. The fixed families (`ALL_FLOAT_TYPES`,
//! `ALL_INT_VECTOR_TYPES`, ...) are process-wide constants; composite families
//! are built with [`TypeFamily::union`] and [`TypeFamily::with`].
//!
//! # Conversions
//!
//! Implicit conversion only widens the primitive kind along
//! `bool < int < uint < float < double` and never changes the shape.
//! [`Type::conversion_cost`] returns the number of rank steps.

mod family;
mod kind;
mod ty;

pub use family::{
    TypeFamily, ALL_BOOL_TYPES, ALL_BOOL_VECTOR_TYPES, ALL_DOUBLE_TYPES, ALL_FLOAT_MATRIX_TYPES,
    ALL_FLOAT_TYPES, ALL_FLOAT_VECTOR_TYPES, ALL_INT_MATRIX_TYPES, ALL_INT_TYPES,
    ALL_INT_VECTOR_TYPES, ALL_NUMERIC_TYPES, ALL_UINT_TYPES, ALL_UINT_VECTOR_TYPES,
};
pub use kind::{PrimitiveKind, Shape};
pub use ty::{Type, TypeParseError};
