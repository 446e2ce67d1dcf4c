//! Name completion over the intrinsic catalog.

use hlsl_intrinsics::Catalog;

/// One completion entry per function name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionItem {
    pub label: String,
    /// Signature of the first overload.
    pub detail: String,
    pub documentation: String,
    pub overloads: usize,
}

/// Names starting with `prefix` (ignoring ASCII case), in catalog order,
/// at most `limit` of them.
pub fn complete(catalog: &Catalog, prefix: &str, limit: usize) -> Vec<CompletionItem> {
    catalog
        .names_with_prefix(prefix)
        .filter_map(|name| {
            let mut overloads = catalog.overloads_for(name);
            let first = overloads.next()?;
            Some(CompletionItem {
                label: name.to_string(),
                detail: first.to_string(),
                documentation: first.documentation().to_string(),
                overloads: 1 + overloads.count(),
            })
        })
        .take(limit)
        .collect()
}
