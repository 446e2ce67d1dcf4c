//! Conversion of failed resolutions into diagnostics.

use hlsl_diagnostic::{Diagnostic, ErrorCode, Span};
use hlsl_intrinsics::Catalog;

use crate::resolve::{Argument, NoMatch, Resolution};
use crate::suggest::suggest_function;

/// Candidate notes beyond this count are summarized.
const MAX_CANDIDATE_NOTES: usize = 8;

fn argument_list(arguments: &[Argument]) -> String {
    let parts: Vec<String> = arguments.iter().map(ToString::to_string).collect();
    format!("({})", parts.join(", "))
}

fn join_arities(arities: &[usize]) -> String {
    match arities {
        [] => String::new(),
        [only] => only.to_string(),
        [init @ .., last] => {
            let init: Vec<String> = init.iter().map(ToString::to_string).collect();
            format!("{} or {last}", init.join(", "))
        }
    }
}

fn with_candidate_notes(mut diag: Diagnostic, signatures: Vec<String>) -> Diagnostic {
    let total = signatures.len();
    for signature in signatures.into_iter().take(MAX_CANDIDATE_NOTES) {
        diag = diag.with_note(format!("candidate: {signature}"));
    }
    if total > MAX_CANDIDATE_NOTES {
        diag = diag.with_note(format!(
            "and {} more candidates",
            total - MAX_CANDIDATE_NOTES
        ));
    }
    diag
}

impl Resolution<'_> {
    /// Diagnostic for a failed resolution of `name(arguments)` at `span`.
    ///
    /// Returns `None` when the call resolved.
    pub fn diagnostic(
        &self,
        catalog: &Catalog,
        name: &str,
        arguments: &[Argument],
        span: Span,
    ) -> Option<Diagnostic> {
        let diag = match self {
            Resolution::Resolved(_) => return None,

            Resolution::NoMatch(NoMatch::UnknownFunction) => {
                let diag = Diagnostic::error(ErrorCode::E2001)
                    .with_message(format!("unknown function `{name}`"))
                    .with_label(span, "not an intrinsic function");
                match suggest_function(catalog, name) {
                    Some(similar) => diag.with_suggestion(format!("did you mean `{similar}`?")),
                    None => diag,
                }
            }

            Resolution::NoMatch(NoMatch::ArityMismatch { expected, found }) => {
                let plural = if expected.as_slice() == [1] { "" } else { "s" };
                let diag = Diagnostic::error(ErrorCode::E2002)
                    .with_message(format!(
                        "`{name}` takes {} argument{plural} but {found} supplied",
                        join_arities(expected),
                    ))
                    .with_label(span, format!("called with {}", argument_list(arguments)));
                let signatures: Vec<String> = catalog
                    .overloads_for(name)
                    .map(ToString::to_string)
                    .collect();
                with_candidate_notes(diag, signatures)
            }

            Resolution::NoMatch(NoMatch::NoApplicable { .. }) => {
                let diag = Diagnostic::error(ErrorCode::E2002)
                    .with_message(format!(
                        "no overload of `{name}` accepts {}",
                        argument_list(arguments)
                    ))
                    .with_label(span, "no matching overload");
                let signatures: Vec<String> = catalog
                    .overloads_for(name)
                    .filter(|overload| overload.arity() == arguments.len())
                    .map(ToString::to_string)
                    .collect();
                with_candidate_notes(diag, signatures)
            }

            Resolution::Ambiguous(candidates) => {
                let diag = Diagnostic::error(ErrorCode::E2003)
                    .with_message(format!(
                        "call to `{name}` with {} is ambiguous",
                        argument_list(arguments)
                    ))
                    .with_label(
                        span,
                        format!("{} overloads match equally well", candidates.len()),
                    )
                    .with_suggestion("convert the arguments explicitly to pick one overload");
                let signatures: Vec<String> = candidates
                    .iter()
                    .map(|candidate| candidate.overload.to_string())
                    .collect();
                with_candidate_notes(diag, signatures)
            }
        };
        Some(diag)
    }
}

#[cfg(test)]
mod tests;
