//! Hover text for a call site.

use std::fmt::Write as _;

use hlsl_diagnostic::Span;
use hlsl_intrinsics::{Catalog, Overload};
use hlsl_typeck::{resolve, Resolution};

use crate::document::CallSite;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hover {
    pub contents: String,
    pub span: Span,
}

fn describe(overload: &Overload) -> String {
    let mut text = format!("{overload}\n\n{}", overload.documentation());
    for param in overload.parameters() {
        let _ = write!(text, "\n- `{}`: {}", param.name, param.documentation);
    }
    text
}

/// Hover for `call`: the resolved overload with its documentation, or the
/// tied candidates of an ambiguous call. `None` when nothing matches.
pub fn hover(catalog: &Catalog, call: &CallSite) -> Option<Hover> {
    let contents = match resolve(catalog, &call.name, &call.arguments) {
        Resolution::Resolved(candidate) => describe(candidate.overload),
        Resolution::Ambiguous(candidates) => {
            let mut text = format!("ambiguous call to `{}`; candidates:", call.name);
            for candidate in &candidates {
                let _ = write!(text, "\n{}", candidate.overload);
            }
            text
        }
        Resolution::NoMatch(_) => return None,
    };
    Some(Hover {
        contents,
        span: call.span,
    })
}

#[cfg(test)]
mod tests;
