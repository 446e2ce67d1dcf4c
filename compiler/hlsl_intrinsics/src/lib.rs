//! Intrinsic function catalog.
//!
//! The catalog is built from a declarative list of [`Template`]s. Each
//! template names a function, documents it, and picks a driving
//! [`TypeFamily`](hlsl_types::TypeFamily); expansion produces one concrete
//! [`Overload`] per family member, with optional per-slot type and direction
//! overrides and a fixed or per-member return type.
//!
//! # Lifecycle
//!
//! ```text
//! CatalogBuilder::new()
//!     .expand(template)?   // zero or more
//!     .declare(overload)?  // fixed signatures
//!     .build()             // -> Catalog, immutable from here on
//! ```
//!
//! A built [`Catalog`] is never mutated. Share it across threads with
//! [`SharedCatalog`].

mod catalog;
mod error;
mod overload;
mod table;
mod template;

pub use catalog::{Catalog, CatalogBuilder, SharedCatalog};
pub use error::CatalogError;
pub use overload::{Direction, Overload, OverloadId, ParameterSignature, MAX_PARAMETERS};
pub use template::{Overrides, ParamDecl, ReturnOverride, Template};
