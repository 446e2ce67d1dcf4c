//! Scalar kinds and shapes.

use std::fmt;

/// Scalar element kind of a value type.
///
/// Variants are declared in widening order; the discriminant is the rank.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrimitiveKind {
    Bool,
    Int,
    Uint,
    Float,
    Double,
}

impl PrimitiveKind {
    /// All kinds in rank order.
    pub const ALL: [Self; 5] = [
        PrimitiveKind::Bool,
        PrimitiveKind::Int,
        PrimitiveKind::Uint,
        PrimitiveKind::Float,
        PrimitiveKind::Double,
    ];

    /// Implicit-widening rank (`bool` = 0 .. `double` = 4).
    #[inline]
    pub const fn rank(self) -> u32 {
        self as u32
    }

    /// Keyword spelling of the kind.
    pub const fn name(self) -> &'static str {
        match self {
            PrimitiveKind::Bool => "bool",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Uint => "uint",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
        }
    }

    /// Number of rank steps needed to widen `self` into `target`.
    ///
    /// Returns `None` when the conversion would narrow.
    #[inline]
    pub const fn widening_steps(self, target: PrimitiveKind) -> Option<u32> {
        if target.rank() >= self.rank() {
            Some(target.rank() - self.rank())
        } else {
            None
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Dimensionality of a value type.
///
/// Widths, rows and columns are always in `1..=4`; the constructors on
/// [`Type`](crate::Type) enforce this.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    Scalar,
    Vector(u8),
    Matrix { rows: u8, cols: u8 },
}

impl Shape {
    /// Largest vector width or matrix dimension.
    pub const MAX_DIMENSION: u8 = 4;

    /// Number of scalar components.
    pub const fn components(self) -> u32 {
        match self {
            Shape::Scalar => 1,
            Shape::Vector(width) => width as u32,
            Shape::Matrix { rows, cols } => rows as u32 * cols as u32,
        }
    }

    pub const fn is_scalar(self) -> bool {
        matches!(self, Shape::Scalar)
    }

    pub const fn is_vector(self) -> bool {
        matches!(self, Shape::Vector(_))
    }

    pub const fn is_matrix(self) -> bool {
        matches!(self, Shape::Matrix { .. })
    }

    pub(crate) const fn dimension_in_range(value: u8) -> bool {
        value >= 1 && value <= Self::MAX_DIMENSION
    }
}
