//! Editor features backed by the intrinsic catalog.
//!
//! The feature functions ([`complete`], [`signature_help`], [`hover`],
//! [`workspace_symbols`], [`document_highlights`], [`diagnose`]) are pure
//! queries over a [`Catalog`](hlsl_intrinsics::Catalog) and a
//! [`DocumentSnapshot`]. [`Session`] wraps them in scheduled task chains and
//! owns the workspace state.
//!
//! Source text is never parsed here: documents arrive as already-extracted
//! [`CallSite`]s.

mod completion;
mod config;
mod diagnostics;
mod document;
mod hover;
mod session;
mod signature;
mod symbols;

pub use completion::{complete, CompletionItem};
pub use config::{SessionConfig, DEBOUNCE_ENV};
pub use diagnostics::diagnose;
pub use document::{CallSite, DocumentSnapshot, Workspace};
pub use hover::{hover, Hover};
pub use session::Session;
pub use signature::{signature_help, ParameterInformation, SignatureHelp, SignatureInformation};
pub use symbols::{document_highlights, workspace_symbols, SymbolInformation, SymbolKind};
