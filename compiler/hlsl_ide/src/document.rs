//! Document snapshots and the workspace that holds them.
//!
//! Parsing is done elsewhere; a snapshot carries the intrinsic call sites
//! already extracted from one version of a document.

use std::sync::Arc;

use hlsl_diagnostic::{Diagnostic, Span};
use hlsl_task::CancellationToken;
use hlsl_typeck::Argument;
use rustc_hash::FxHashMap;

/// One call of a function in a document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallSite {
    pub name: String,
    /// Span of the whole call expression.
    pub span: Span,
    pub arguments: Vec<Argument>,
}

impl CallSite {
    pub fn new(name: impl Into<String>, span: Span, arguments: Vec<Argument>) -> Self {
        CallSite {
            name: name.into(),
            span,
            arguments,
        }
    }
}

/// Call sites of one version of a document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentSnapshot {
    pub uri: String,
    pub version: u32,
    pub call_sites: Vec<CallSite>,
}

impl DocumentSnapshot {
    pub fn new(uri: impl Into<String>, version: u32, call_sites: Vec<CallSite>) -> Self {
        DocumentSnapshot {
            uri: uri.into(),
            version,
            call_sites,
        }
    }

    /// The innermost call site whose span contains `offset`.
    pub fn call_site_at(&self, offset: u32) -> Option<&CallSite> {
        self.call_sites
            .iter()
            .filter(|site| site.span.contains(offset))
            .min_by_key(|site| site.span.len())
    }
}

#[derive(Debug)]
struct DocumentState {
    snapshot: Arc<DocumentSnapshot>,
    diagnostics: Vec<Diagnostic>,
    /// Cancels the analysis started for the previous version.
    analysis: CancellationToken,
}

/// Open documents, keyed by URI.
///
/// Only the coordinator writes; workers read snapshots.
#[derive(Debug, Default)]
pub struct Workspace {
    documents: FxHashMap<String, DocumentState>,
}

impl Workspace {
    pub fn new() -> Self {
        Workspace::default()
    }

    /// Latest snapshot of `uri`.
    pub fn snapshot(&self, uri: &str) -> Option<Arc<DocumentSnapshot>> {
        self.documents
            .get(uri)
            .map(|document| Arc::clone(&document.snapshot))
    }

    pub fn version(&self, uri: &str) -> Option<u32> {
        self.documents.get(uri).map(|document| document.snapshot.version)
    }

    /// Diagnostics last published for `uri`.
    pub fn diagnostics(&self, uri: &str) -> &[Diagnostic] {
        match self.documents.get(uri) {
            Some(document) => &document.diagnostics,
            None => &[],
        }
    }

    /// Record a new version and return the token for its analysis.
    ///
    /// Analysis of the version it replaces is cancelled. Diagnostics of the
    /// old version stay published until the new ones are applied. A version
    /// that is not newer than the current one is ignored and yields `None`.
    pub fn update(
        &mut self,
        snapshot: DocumentSnapshot,
        session: &CancellationToken,
    ) -> Option<CancellationToken> {
        let analysis = session.child();
        let snapshot = Arc::new(snapshot);
        match self.documents.get_mut(&snapshot.uri) {
            Some(document) if document.snapshot.version >= snapshot.version => {
                tracing::debug!(
                    uri = %snapshot.uri,
                    current = document.snapshot.version,
                    received = snapshot.version,
                    "ignoring stale document version"
                );
                return None;
            }
            Some(document) => {
                document.analysis.cancel();
                document.snapshot = snapshot;
                document.analysis = analysis.clone();
            }
            None => {
                self.documents.insert(
                    snapshot.uri.clone(),
                    DocumentState {
                        snapshot,
                        diagnostics: Vec::new(),
                        analysis: analysis.clone(),
                    },
                );
            }
        }
        Some(analysis)
    }

    /// Store `diagnostics` if `version` is still the current one.
    pub fn publish(&mut self, uri: &str, version: u32, diagnostics: Vec<Diagnostic>) -> bool {
        match self.documents.get_mut(uri) {
            Some(document) if document.snapshot.version == version => {
                document.diagnostics = diagnostics;
                true
            }
            _ => false,
        }
    }

    /// Forget `uri`, cancelling its pending analysis.
    pub fn close(&mut self, uri: &str) -> bool {
        match self.documents.remove(uri) {
            Some(document) => {
                document.analysis.cancel();
                true
            }
            None => false,
        }
    }

    /// Open document URIs, in no particular order.
    pub fn uris(&self) -> impl Iterator<Item = &str> {
        self.documents.keys().map(String::as_str)
    }
}
