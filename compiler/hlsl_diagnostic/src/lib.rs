//! Diagnostic values for call-site resolution failures.
//!
//! Resolution failures are ordinary values: the resolver reports them, the
//! editor layer displays them. Every diagnostic carries an [`ErrorCode`] for
//! searchability, a message, and labelled spans into the document.

mod diagnostic;
mod error_code;
mod span;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
pub use span::Span;
