//! Workspace symbol search and in-document highlights.

use hlsl_diagnostic::Span;
use hlsl_intrinsics::Catalog;

use crate::document::DocumentSnapshot;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Function,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolInformation {
    pub name: String,
    pub kind: SymbolKind,
    /// e.g. `8 overloads`.
    pub detail: String,
}

/// Catalog names containing `query`, ignoring case, in catalog order.
pub fn workspace_symbols(catalog: &Catalog, query: &str) -> Vec<SymbolInformation> {
    let query = query.to_lowercase();
    catalog
        .names()
        .filter(|name| name.to_lowercase().contains(&query))
        .map(|name| {
            let count = catalog.ids_for(name).len();
            SymbolInformation {
                name: name.to_string(),
                kind: SymbolKind::Function,
                detail: if count == 1 {
                    "1 overload".to_string()
                } else {
                    format!("{count} overloads")
                },
            }
        })
        .collect()
}

/// Spans of every call to the function called at `offset`.
pub fn document_highlights(document: &DocumentSnapshot, offset: u32) -> Vec<Span> {
    let Some(target) = document.call_site_at(offset) else {
        return Vec::new();
    };
    document
        .call_sites
        .iter()
        .filter(|site| site.name == target.name)
        .map(|site| site.span)
        .collect()
}

#[cfg(test)]
mod tests;
