//! Concrete overload signatures.

use std::borrow::Cow;
use std::fmt;

use hlsl_types::Type;
use smallvec::SmallVec;

/// Largest arity any intrinsic takes.
pub const MAX_PARAMETERS: usize = 4;

/// Whether a parameter is read by the call or written by it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    In,
    /// Write-only output. The argument must be an lvalue.
    Out,
}

impl Direction {
    #[inline]
    pub fn is_out(self) -> bool {
        matches!(self, Direction::Out)
    }
}

/// One parameter of an overload.
///
/// Parameters carry no reference back to their overload; use
/// [`Catalog::parameter`](crate::Catalog::parameter) to go from an
/// [`OverloadId`] and slot to a parameter.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParameterSignature {
    pub name: Cow<'static, str>,
    pub documentation: Cow<'static, str>,
    pub ty: Type,
    pub direction: Direction,
}

impl ParameterSignature {
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        documentation: impl Into<Cow<'static, str>>,
        ty: Type,
    ) -> Self {
        ParameterSignature {
            name: name.into(),
            documentation: documentation.into(),
            ty,
            direction: Direction::In,
        }
    }

    /// Mark this parameter as an output.
    #[must_use]
    pub fn out(mut self) -> Self {
        self.direction = Direction::Out;
        self
    }
}

impl fmt::Display for ParameterSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.direction.is_out() {
            f.write_str("out ")?;
        }
        write!(f, "{} {}", self.ty, self.name)
    }
}

/// Index of an overload inside its [`Catalog`](crate::Catalog).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OverloadId(u32);

impl OverloadId {
    #[inline]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "catalog size is far below u32::MAX"
    )]
    pub(crate) fn from_index(index: usize) -> Self {
        OverloadId(index as u32)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A concrete intrinsic signature.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Overload {
    name: Cow<'static, str>,
    documentation: Cow<'static, str>,
    return_type: Type,
    parameters: SmallVec<[ParameterSignature; MAX_PARAMETERS]>,
}

impl Overload {
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        documentation: impl Into<Cow<'static, str>>,
        return_type: Type,
        parameters: impl IntoIterator<Item = ParameterSignature>,
    ) -> Self {
        Overload {
            name: name.into(),
            documentation: documentation.into(),
            return_type,
            parameters: parameters.into_iter().collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn name_cow(&self) -> &Cow<'static, str> {
        &self.name
    }

    pub fn documentation(&self) -> &str {
        &self.documentation
    }

    pub fn return_type(&self) -> Type {
        self.return_type
    }

    pub fn parameters(&self) -> &[ParameterSignature] {
        &self.parameters
    }

    pub fn arity(&self) -> usize {
        self.parameters.len()
    }

    /// Parameter types in declared order.
    pub fn parameter_types(&self) -> impl Iterator<Item = Type> + '_ {
        self.parameters.iter().map(|p| p.ty)
    }

    /// Two overloads of one name collide when their parameter types match.
    pub fn same_parameter_types(&self, other: &Overload) -> bool {
        self.arity() == other.arity() && self.parameter_types().eq(other.parameter_types())
    }
}

/// Renders as `float max(float x, float y)`.
impl fmt::Display for Overload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}(", self.return_type, self.name)?;
        for (i, param) in self.parameters.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{param}")?;
        }
        f.write_str(")")
    }
}
