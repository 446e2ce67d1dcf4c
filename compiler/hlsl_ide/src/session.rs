//! Editor session: request handlers built as scheduled task chains.
//!
//! Each handler follows the same shape: read the current document on the
//! coordinator, run the query on a worker, hand back a task. Workspace
//! writes happen only in coordinator jobs.

use std::sync::Arc;

use hlsl_diagnostic::{Diagnostic, Span};
use hlsl_intrinsics::{Catalog, SharedCatalog};
use hlsl_task::{CancellationToken, Cancelled, ExecutionContext, Scheduler, Task};
use parking_lot::RwLock;

use crate::completion::{complete, CompletionItem};
use crate::config::SessionConfig;
use crate::diagnostics::diagnose;
use crate::document::{DocumentSnapshot, Workspace};
use crate::hover::{hover, Hover};
use crate::signature::{signature_help, SignatureHelp};
use crate::symbols::{document_highlights, workspace_symbols, SymbolInformation};

pub struct Session {
    scheduler: Scheduler,
    catalog: SharedCatalog,
    workspace: Arc<RwLock<Workspace>>,
    config: SessionConfig,
    /// Parent of every per-document analysis token.
    shutdown: CancellationToken,
}

impl Session {
    pub fn new(scheduler: Scheduler, catalog: SharedCatalog, config: SessionConfig) -> Self {
        Session {
            scheduler,
            catalog,
            workspace: Arc::new(RwLock::new(Workspace::new())),
            config,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Latest snapshot of `uri`.
    pub fn snapshot(&self, uri: &str) -> Option<Arc<DocumentSnapshot>> {
        self.workspace.read().snapshot(uri)
    }

    /// Diagnostics currently published for `uri`.
    pub fn diagnostics(&self, uri: &str) -> Vec<Diagnostic> {
        self.workspace.read().diagnostics(uri).to_vec()
    }

    /// Read the document on the coordinator, then run `query` on a worker.
    fn with_document<R, F>(&self, uri: &str, token: &CancellationToken, query: F) -> Task<Option<R>>
    where
        R: Clone + Send + 'static,
        F: FnOnce(&Catalog, &DocumentSnapshot) -> Option<R> + Send + 'static,
    {
        let workspace = Arc::clone(&self.workspace);
        let uri = uri.to_string();
        let document = self.scheduler.run(
            move |_| Ok(workspace.read().snapshot(&uri)),
            ExecutionContext::Coordinator,
            token,
        );

        let catalog = self.catalog.clone();
        self.scheduler.run_after(
            &document,
            move |document, token| {
                token.check()?;
                Ok(document.and_then(|document| query(&catalog, &document)))
            },
            ExecutionContext::Worker,
            token,
        )
    }

    /// Completion items for names starting with `prefix`.
    pub fn completion(&self, prefix: &str, token: &CancellationToken) -> Task<Vec<CompletionItem>> {
        let catalog = self.catalog.clone();
        let prefix = prefix.to_string();
        let limit = self.config.max_completion_items;
        self.scheduler.run(
            move |_| Ok(complete(&catalog, &prefix, limit)),
            ExecutionContext::Worker,
            token,
        )
    }

    pub fn signature_help(
        &self,
        uri: &str,
        offset: u32,
        token: &CancellationToken,
    ) -> Task<Option<SignatureHelp>> {
        self.with_document(uri, token, move |catalog, document| {
            signature_help(catalog, document.call_site_at(offset)?)
        })
    }

    pub fn hover(&self, uri: &str, offset: u32, token: &CancellationToken) -> Task<Option<Hover>> {
        self.with_document(uri, token, move |catalog, document| {
            hover(catalog, document.call_site_at(offset)?)
        })
    }

    pub fn workspace_symbols(
        &self,
        query: &str,
        token: &CancellationToken,
    ) -> Task<Vec<SymbolInformation>> {
        let catalog = self.catalog.clone();
        let query = query.to_string();
        self.scheduler.run(
            move |_| Ok(workspace_symbols(&catalog, &query)),
            ExecutionContext::Worker,
            token,
        )
    }

    /// Spans to highlight for the call at `offset`. Empty for unknown documents.
    pub fn document_highlights(
        &self,
        uri: &str,
        offset: u32,
        token: &CancellationToken,
    ) -> Task<Vec<Span>> {
        let highlights = self.with_document(uri, token, move |_, document| {
            Some(document_highlights(document, offset))
        });
        self.scheduler.run_after(
            &highlights,
            |spans, _| Ok(spans.unwrap_or_default()),
            ExecutionContext::Worker,
            token,
        )
    }

    /// Record a new document version and schedule its diagnostics.
    ///
    /// After the debounce delay, call sites are resolved on a worker and the
    /// result is published on the coordinator, but only if no newer version
    /// arrived meanwhile. A newer version cancels this analysis; the task
    /// then finishes as cancelled. So does a version that is not newer than
    /// the one already recorded, which leaves the document untouched.
    pub fn document_changed(&self, snapshot: DocumentSnapshot) -> Task<Vec<Diagnostic>> {
        let uri = snapshot.uri.clone();
        let version = snapshot.version;
        tracing::debug!(%uri, version, "document changed");

        let workspace = Arc::clone(&self.workspace);
        let shutdown = self.shutdown.clone();
        let recorded_uri = uri.clone();
        let recorded = self.scheduler.run(
            move |_| {
                let mut workspace = workspace.write();
                let analysis = workspace.update(snapshot, &shutdown).ok_or(Cancelled)?;
                Ok((workspace.snapshot(&recorded_uri), analysis))
            },
            ExecutionContext::Coordinator,
            &self.shutdown,
        );

        let catalog = self.catalog.clone();
        let scheduler = self.scheduler.downgrade();
        let debounce = self.config.debounce;
        let workspace = Arc::clone(&self.workspace);
        self.scheduler.run_after_task(
            &recorded,
            move |(snapshot, analysis), _| {
                let (Some(snapshot), Some(scheduler)) = (snapshot, scheduler.upgrade()) else {
                    return Err(Cancelled);
                };
                let analyzed = scheduler.run_after_delay(
                    &Task::completed(snapshot),
                    move |snapshot, token| diagnose(&catalog, &snapshot, token),
                    debounce,
                    ExecutionContext::Worker,
                    &analysis,
                );
                Ok(scheduler.run_after(
                    &analyzed,
                    move |diagnostics: Vec<Diagnostic>, _| {
                        let published = workspace
                            .write()
                            .publish(&uri, version, diagnostics.clone());
                        if published {
                            tracing::debug!(
                                %uri,
                                version,
                                count = diagnostics.len(),
                                "diagnostics published"
                            );
                            Ok(diagnostics)
                        } else {
                            tracing::trace!(%uri, version, "stale diagnostics dropped");
                            Err(Cancelled)
                        }
                    },
                    ExecutionContext::Coordinator,
                    &analysis,
                ))
            },
            ExecutionContext::Coordinator,
            &self.shutdown,
        )
    }

    /// Forget `uri` and cancel its pending analysis.
    pub fn close_document(&self, uri: &str, token: &CancellationToken) -> Task<bool> {
        let workspace = Arc::clone(&self.workspace);
        let uri = uri.to_string();
        self.scheduler.run(
            move |_| Ok(workspace.write().close(&uri)),
            ExecutionContext::Coordinator,
            token,
        )
    }

    /// Cancel every pending analysis. Requests already running finish.
    pub fn shutdown(&self) {
        self.shutdown.cancel();
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("catalog", &self.catalog)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
