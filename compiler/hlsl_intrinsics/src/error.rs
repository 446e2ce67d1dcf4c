//! Catalog construction errors.
//!
//! Every variant is fatal for the catalog being built: there is no usable
//! partial catalog.

use std::borrow::Cow;

/// Error raised while expanding templates or declaring overloads.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("`{function}`: driving type family `{family}` is empty")]
    EmptyFamily {
        function: Cow<'static, str>,
        family: String,
    },

    #[error("`{function}`: {count} parameters declared, at most {max} supported")]
    TooManyParameters {
        function: Cow<'static, str>,
        count: usize,
        max: usize,
    },

    #[error("`{function}`: override for parameter slot {slot}, but the function takes {arity}")]
    OverrideSlotOutOfRange {
        function: Cow<'static, str>,
        slot: usize,
        arity: usize,
    },

    #[error("`{function}`: {found} per-member return types for a family of {expected}")]
    ReturnLengthMismatch {
        function: Cow<'static, str>,
        expected: usize,
        found: usize,
    },

    #[error("`{function}`: parameter `{parameter}` declared twice")]
    DuplicateParameter {
        function: Cow<'static, str>,
        parameter: Cow<'static, str>,
    },

    #[error("`{function}`: overload `{signature}` declared twice")]
    DuplicateOverload {
        function: Cow<'static, str>,
        signature: String,
    },

    #[error("`{function}`: a template without a type family needs a fixed return type")]
    MissingReturnType { function: Cow<'static, str> },

    #[error("`{function}`: parameters declared without a driving type family")]
    ParametersWithoutFamily { function: Cow<'static, str> },
}
