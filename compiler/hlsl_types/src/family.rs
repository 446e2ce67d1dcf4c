//! Named type families used to drive overload generation.

use std::borrow::Cow;
use std::fmt;

use crate::ty::Type;

/// A named, ordered, duplicate-free sequence of types.
///
/// Fixed families are `const` and borrow a static slice. Composite families
/// produced by [`union`](Self::union) or [`with`](Self::with) own their
/// members and keep first-occurrence order.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TypeFamily {
    name: Cow<'static, str>,
    members: Cow<'static, [Type]>,
}

impl TypeFamily {
    /// A fixed family over a static member list.
    ///
    /// The list must not contain duplicates; the fixed families below are
    /// checked by this crate's tests.
    pub const fn fixed(name: &'static str, members: &'static [Type]) -> Self {
        TypeFamily {
            name: Cow::Borrowed(name),
            members: Cow::Borrowed(members),
        }
    }

    /// A family with exactly one member, named after that member.
    pub fn single(ty: Type) -> Self {
        TypeFamily {
            name: Cow::Owned(ty.to_string()),
            members: Cow::Owned(vec![ty]),
        }
    }

    /// Build a family from arbitrary types, dropping repeats.
    pub fn from_types(name: impl Into<String>, types: impl IntoIterator<Item = Type>) -> Self {
        let mut members: Vec<Type> = Vec::new();
        for ty in types {
            if !members.contains(&ty) {
                members.push(ty);
            }
        }
        TypeFamily {
            name: Cow::Owned(name.into()),
            members: Cow::Owned(members),
        }
    }

    /// Stable set union: members of `self`, then members of `other` not
    /// already present.
    #[must_use]
    pub fn union(&self, other: &TypeFamily) -> TypeFamily {
        TypeFamily::from_types(
            format!("{} | {}", self.name, other.name),
            self.iter().chain(other.iter()),
        )
    }

    /// Append a single type unless it is already a member.
    #[must_use]
    pub fn with(&self, ty: Type) -> TypeFamily {
        if self.contains(ty) {
            return self.clone();
        }
        TypeFamily::from_types(format!("{} | {ty}", self.name), self.iter().chain([ty]))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn members(&self) -> &[Type] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, ty: Type) -> bool {
        self.members.contains(&ty)
    }

    /// Members in family order.
    pub fn iter(&self) -> impl Iterator<Item = Type> + '_ {
        self.members.iter().copied()
    }
}

impl fmt::Debug for TypeFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.name)?;
        f.debug_list().entries(self.members.iter()).finish()
    }
}

// === Fixed families ===

pub const ALL_BOOL_TYPES: TypeFamily = TypeFamily::fixed(
    "AllBoolTypes",
    &[Type::BOOL, Type::BOOL2, Type::BOOL3, Type::BOOL4],
);

pub const ALL_INT_TYPES: TypeFamily = TypeFamily::fixed(
    "AllIntTypes",
    &[Type::INT, Type::INT2, Type::INT3, Type::INT4],
);

pub const ALL_UINT_TYPES: TypeFamily = TypeFamily::fixed(
    "AllUintTypes",
    &[Type::UINT, Type::UINT2, Type::UINT3, Type::UINT4],
);

pub const ALL_FLOAT_TYPES: TypeFamily = TypeFamily::fixed(
    "AllFloatTypes",
    &[Type::FLOAT, Type::FLOAT2, Type::FLOAT3, Type::FLOAT4],
);

pub const ALL_DOUBLE_TYPES: TypeFamily = TypeFamily::fixed(
    "AllDoubleTypes",
    &[Type::DOUBLE, Type::DOUBLE2, Type::DOUBLE3, Type::DOUBLE4],
);

pub const ALL_BOOL_VECTOR_TYPES: TypeFamily = TypeFamily::fixed(
    "AllBoolVectorTypes",
    &[Type::BOOL2, Type::BOOL3, Type::BOOL4],
);

pub const ALL_INT_VECTOR_TYPES: TypeFamily = TypeFamily::fixed(
    "AllIntVectorTypes",
    &[Type::INT2, Type::INT3, Type::INT4],
);

pub const ALL_UINT_VECTOR_TYPES: TypeFamily = TypeFamily::fixed(
    "AllUintVectorTypes",
    &[Type::UINT2, Type::UINT3, Type::UINT4],
);

pub const ALL_FLOAT_VECTOR_TYPES: TypeFamily = TypeFamily::fixed(
    "AllFloatVectorTypes",
    &[Type::FLOAT2, Type::FLOAT3, Type::FLOAT4],
);

pub const ALL_FLOAT_MATRIX_TYPES: TypeFamily = TypeFamily::fixed(
    "AllFloatMatrixTypes",
    &[Type::FLOAT2X2, Type::FLOAT3X3, Type::FLOAT4X4],
);

pub const ALL_INT_MATRIX_TYPES: TypeFamily = TypeFamily::fixed(
    "AllIntMatrixTypes",
    &[Type::INT2X2, Type::INT3X3, Type::INT4X4],
);

/// `AllIntTypes | AllUintTypes | AllFloatTypes | AllDoubleTypes`, spelled out
/// so it can be a constant.
pub const ALL_NUMERIC_TYPES: TypeFamily = TypeFamily::fixed(
    "AllNumericTypes",
    &[
        Type::INT,
        Type::INT2,
        Type::INT3,
        Type::INT4,
        Type::UINT,
        Type::UINT2,
        Type::UINT3,
        Type::UINT4,
        Type::FLOAT,
        Type::FLOAT2,
        Type::FLOAT3,
        Type::FLOAT4,
        Type::DOUBLE,
        Type::DOUBLE2,
        Type::DOUBLE3,
        Type::DOUBLE4,
    ],
);
