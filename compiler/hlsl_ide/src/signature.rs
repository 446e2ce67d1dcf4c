//! Signature help for the call under the cursor.

use hlsl_intrinsics::{Catalog, Overload};
use hlsl_typeck::resolve;

use crate::document::CallSite;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParameterInformation {
    /// Rendered as in the signature, e.g. `out float exp`.
    pub label: String,
    pub documentation: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignatureInformation {
    pub label: String,
    pub documentation: String,
    pub parameters: Vec<ParameterInformation>,
}

impl SignatureInformation {
    fn from_overload(overload: &Overload) -> Self {
        SignatureInformation {
            label: overload.to_string(),
            documentation: overload.documentation().to_string(),
            parameters: overload
                .parameters()
                .iter()
                .map(|param| ParameterInformation {
                    label: param.to_string(),
                    documentation: param.documentation.to_string(),
                })
                .collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignatureHelp {
    /// Every overload of the function, in catalog order.
    pub signatures: Vec<SignatureInformation>,
    /// Index of the overload the call resolves to, if it resolves.
    pub active_signature: Option<usize>,
}

/// Signature help for `call`, or `None` if the function is unknown.
pub fn signature_help(catalog: &Catalog, call: &CallSite) -> Option<SignatureHelp> {
    let ids = catalog.ids_for(&call.name);
    if ids.is_empty() {
        return None;
    }

    let active_signature = resolve(catalog, &call.name, &call.arguments)
        .resolved()
        .and_then(|candidate| ids.iter().position(|&id| id == candidate.id));

    Some(SignatureHelp {
        signatures: catalog
            .overloads_for(&call.name)
            .map(SignatureInformation::from_overload)
            .collect(),
        active_signature,
    })
}
