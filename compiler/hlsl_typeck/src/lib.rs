//! Overload resolution for intrinsic calls.
//!
//! [`resolve`] picks the single best overload for a call site:
//!
//! 1. keep overloads whose arity matches the argument count
//! 2. drop overloads with any parameter the argument cannot bind to
//! 3. score survivors by summed conversion cost
//! 4. a unique minimum wins; a tie is [`Resolution::Ambiguous`]
//!
//! Resolution is a pure function of the catalog and the call site. Failures
//! are values and convert into diagnostics with [`Resolution::diagnostic`].

mod report;
mod resolve;
mod suggest;

pub use resolve::{resolve, Argument, Candidate, NoMatch, Resolution};
pub use suggest::suggest_function;
