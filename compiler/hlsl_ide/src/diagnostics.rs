//! Call-site diagnostics for a document.

use hlsl_diagnostic::Diagnostic;
use hlsl_intrinsics::Catalog;
use hlsl_task::{CancellationToken, Cancelled};
use hlsl_typeck::resolve;

use crate::document::DocumentSnapshot;

/// Resolve every call site of `document` and collect the failures, in
/// document order. Checks `token` between call sites.
pub fn diagnose(
    catalog: &Catalog,
    document: &DocumentSnapshot,
    token: &CancellationToken,
) -> Result<Vec<Diagnostic>, Cancelled> {
    let mut diagnostics = Vec::new();
    for call in &document.call_sites {
        token.check()?;
        let resolution = resolve(catalog, &call.name, &call.arguments);
        if let Some(diagnostic) =
            resolution.diagnostic(catalog, &call.name, &call.arguments, call.span)
        {
            diagnostics.push(diagnostic);
        }
    }
    tracing::debug!(
        uri = %document.uri,
        version = document.version,
        calls = document.call_sites.len(),
        errors = diagnostics.len(),
        "document diagnosed"
    );
    Ok(diagnostics)
}
