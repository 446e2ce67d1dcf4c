//! The `Type` value and its well-known constants.
//!
//! `Type` is `Copy` and compares structurally, which for a closed vocabulary
//! is the same as identity: `Type::FLOAT3 == Type::vector(Float, 3)` always.

use std::fmt;
use std::str::FromStr;

use crate::kind::{PrimitiveKind, Shape};

/// A concrete HLSL type used by intrinsic signatures.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// Return type of functions that produce nothing. Never an argument type.
    Void,
    /// A scalar, vector or matrix of a primitive kind.
    Value { kind: PrimitiveKind, shape: Shape },
}

/// Error returned when a type name cannot be parsed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown type `{input}`")]
pub struct TypeParseError {
    pub input: String,
}

impl Type {
    // === Scalars ===

    pub const VOID: Self = Type::Void;
    pub const BOOL: Self = Self::scalar(PrimitiveKind::Bool);
    pub const INT: Self = Self::scalar(PrimitiveKind::Int);
    pub const UINT: Self = Self::scalar(PrimitiveKind::Uint);
    pub const FLOAT: Self = Self::scalar(PrimitiveKind::Float);
    pub const DOUBLE: Self = Self::scalar(PrimitiveKind::Double);

    // === Vectors ===

    pub const BOOL2: Self = Self::vec(PrimitiveKind::Bool, 2);
    pub const BOOL3: Self = Self::vec(PrimitiveKind::Bool, 3);
    pub const BOOL4: Self = Self::vec(PrimitiveKind::Bool, 4);
    pub const INT2: Self = Self::vec(PrimitiveKind::Int, 2);
    pub const INT3: Self = Self::vec(PrimitiveKind::Int, 3);
    pub const INT4: Self = Self::vec(PrimitiveKind::Int, 4);
    pub const UINT2: Self = Self::vec(PrimitiveKind::Uint, 2);
    pub const UINT3: Self = Self::vec(PrimitiveKind::Uint, 3);
    pub const UINT4: Self = Self::vec(PrimitiveKind::Uint, 4);
    pub const FLOAT2: Self = Self::vec(PrimitiveKind::Float, 2);
    pub const FLOAT3: Self = Self::vec(PrimitiveKind::Float, 3);
    pub const FLOAT4: Self = Self::vec(PrimitiveKind::Float, 4);
    pub const DOUBLE2: Self = Self::vec(PrimitiveKind::Double, 2);
    pub const DOUBLE3: Self = Self::vec(PrimitiveKind::Double, 3);
    pub const DOUBLE4: Self = Self::vec(PrimitiveKind::Double, 4);

    // === Square matrices ===

    pub const FLOAT2X2: Self = Self::mat(PrimitiveKind::Float, 2, 2);
    pub const FLOAT3X3: Self = Self::mat(PrimitiveKind::Float, 3, 3);
    pub const FLOAT4X4: Self = Self::mat(PrimitiveKind::Float, 4, 4);
    pub const INT2X2: Self = Self::mat(PrimitiveKind::Int, 2, 2);
    pub const INT3X3: Self = Self::mat(PrimitiveKind::Int, 3, 3);
    pub const INT4X4: Self = Self::mat(PrimitiveKind::Int, 4, 4);

    /// A scalar of the given kind.
    #[inline]
    pub const fn scalar(kind: PrimitiveKind) -> Self {
        Type::Value {
            kind,
            shape: Shape::Scalar,
        }
    }

    /// A vector of `width` components, or `None` if `width` is outside `1..=4`.
    pub const fn vector(kind: PrimitiveKind, width: u8) -> Option<Self> {
        if Shape::dimension_in_range(width) {
            Some(Self::vec(kind, width))
        } else {
            None
        }
    }

    /// A `rows` x `cols` matrix, or `None` if either dimension is outside `1..=4`.
    pub const fn matrix(kind: PrimitiveKind, rows: u8, cols: u8) -> Option<Self> {
        if Shape::dimension_in_range(rows) && Shape::dimension_in_range(cols) {
            Some(Self::mat(kind, rows, cols))
        } else {
            None
        }
    }

    const fn vec(kind: PrimitiveKind, width: u8) -> Self {
        Type::Value {
            kind,
            shape: Shape::Vector(width),
        }
    }

    const fn mat(kind: PrimitiveKind, rows: u8, cols: u8) -> Self {
        Type::Value {
            kind,
            shape: Shape::Matrix { rows, cols },
        }
    }

    /// Primitive kind, or `None` for `void`.
    #[inline]
    pub const fn kind(self) -> Option<PrimitiveKind> {
        match self {
            Type::Void => None,
            Type::Value { kind, .. } => Some(kind),
        }
    }

    /// Shape, or `None` for `void`.
    #[inline]
    pub const fn shape(self) -> Option<Shape> {
        match self {
            Type::Void => None,
            Type::Value { shape, .. } => Some(shape),
        }
    }

    #[inline]
    pub const fn is_void(self) -> bool {
        matches!(self, Type::Void)
    }

    /// Cost of implicitly converting a value of type `self` into `target`.
    ///
    /// - identical types cost 0
    /// - same shape with a wider kind costs one per rank step
    /// - anything else (narrowing, shape change, `void`) is not convertible
    pub fn conversion_cost(self, target: Type) -> Option<u32> {
        match (self, target) {
            (Type::Void, Type::Void) => Some(0),
            (
                Type::Value { kind, shape },
                Type::Value {
                    kind: target_kind,
                    shape: target_shape,
                },
            ) if shape == target_shape => kind.widening_steps(target_kind),
            _ => None,
        }
    }

    /// Whether `self` converts implicitly (or trivially) into `target`.
    #[inline]
    pub fn converts_to(self, target: Type) -> bool {
        self.conversion_cost(target).is_some()
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Type::Void => f.write_str("void"),
            Type::Value { kind, shape } => match shape {
                Shape::Scalar => write!(f, "{kind}"),
                Shape::Vector(width) => write!(f, "{kind}{width}"),
                Shape::Matrix { rows, cols } => write!(f, "{kind}{rows}x{cols}"),
            },
        }
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Type({self})")
    }
}

impl FromStr for Type {
    type Err = TypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let error = || TypeParseError {
            input: s.to_string(),
        };

        if s == "void" {
            return Ok(Type::Void);
        }

        // `uint` must be tried before `int`.
        let (kind, dims) = [
            PrimitiveKind::Double,
            PrimitiveKind::Float,
            PrimitiveKind::Uint,
            PrimitiveKind::Int,
            PrimitiveKind::Bool,
        ]
        .into_iter()
        .find_map(|kind| s.strip_prefix(kind.name()).map(|rest| (kind, rest)))
        .ok_or_else(error)?;

        if dims.is_empty() {
            return Ok(Type::scalar(kind));
        }

        let parse_dim = |d: &str| -> Option<u8> {
            if d.len() == 1 {
                d.parse().ok()
            } else {
                None
            }
        };

        let ty = match dims.split_once('x') {
            None => parse_dim(dims).and_then(|width| Type::vector(kind, width)),
            Some((rows, cols)) => parse_dim(rows)
                .zip(parse_dim(cols))
                .and_then(|(rows, cols)| Type::matrix(kind, rows, cols)),
        };

        ty.ok_or_else(error)
    }
}

#[cfg(test)]
mod tests;
