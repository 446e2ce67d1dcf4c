//! Call-site overload resolution.

use std::fmt;

use hlsl_intrinsics::{Catalog, Direction, Overload, OverloadId, ParameterSignature};
use hlsl_types::Type;
use smallvec::SmallVec;

/// One argument at a call site.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Argument {
    pub ty: Type,
    /// The argument is an assignable lvalue passed in output position.
    pub is_output: bool,
}

impl Argument {
    pub const fn input(ty: Type) -> Self {
        Argument {
            ty,
            is_output: false,
        }
    }

    pub const fn output(ty: Type) -> Self {
        Argument {
            ty,
            is_output: true,
        }
    }

    /// Cost of binding this argument to `param`, or `None` if it cannot bind.
    ///
    /// `In` parameters convert argument to parameter. `Out` parameters need an
    /// output argument and convert parameter to argument.
    pub fn binding_cost(self, param: &ParameterSignature) -> Option<u32> {
        match param.direction {
            Direction::In => self.ty.conversion_cost(param.ty),
            Direction::Out if self.is_output => param.ty.conversion_cost(self.ty),
            Direction::Out => None,
        }
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_output {
            f.write_str("out ")?;
        }
        write!(f, "{}", self.ty)
    }
}

/// An applicable overload and its total conversion cost.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub id: OverloadId,
    pub overload: &'a Overload,
    pub cost: u32,
}

/// Why no overload was selected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NoMatch {
    /// The catalog has no function of that name.
    UnknownFunction,
    /// The function exists, but no overload takes `found` arguments.
    ArityMismatch {
        /// Distinct arities the function accepts, ascending.
        expected: SmallVec<[usize; 4]>,
        found: usize,
    },
    /// Overloads of the right arity exist, but none accepts the arguments.
    NoApplicable { considered: usize },
}

/// Outcome of resolving one call site.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution<'a> {
    Resolved(Candidate<'a>),
    /// Several candidates share the minimum cost, in catalog order.
    Ambiguous(Vec<Candidate<'a>>),
    NoMatch(NoMatch),
}

impl<'a> Resolution<'a> {
    pub fn resolved(&self) -> Option<&Candidate<'a>> {
        match self {
            Resolution::Resolved(candidate) => Some(candidate),
            _ => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }
}

/// Total cost of calling `overload` with `arguments`, if every argument binds.
fn total_cost(overload: &Overload, arguments: &[Argument]) -> Option<u32> {
    overload
        .parameters()
        .iter()
        .zip(arguments)
        .map(|(param, arg)| arg.binding_cost(param))
        .sum()
}

/// Select the best overload of `name` for `arguments`.
#[tracing::instrument(level = "trace", skip(catalog, arguments), fields(arity = arguments.len()))]
pub fn resolve<'a>(catalog: &'a Catalog, name: &str, arguments: &[Argument]) -> Resolution<'a> {
    let ids = catalog.ids_for(name);
    if ids.is_empty() {
        return Resolution::NoMatch(NoMatch::UnknownFunction);
    }

    let same_arity: SmallVec<[(OverloadId, &Overload); 16]> = ids
        .iter()
        .filter_map(|&id| catalog.overload(id).map(|overload| (id, overload)))
        .filter(|(_, overload)| overload.arity() == arguments.len())
        .collect();

    if same_arity.is_empty() {
        let mut expected: SmallVec<[usize; 4]> =
            catalog.overloads_for(name).map(Overload::arity).collect();
        expected.sort_unstable();
        expected.dedup();
        return Resolution::NoMatch(NoMatch::ArityMismatch {
            expected,
            found: arguments.len(),
        });
    }

    let applicable: Vec<Candidate<'a>> = same_arity
        .iter()
        .filter_map(|&(id, overload)| {
            total_cost(overload, arguments).map(|cost| Candidate { id, overload, cost })
        })
        .collect();

    let Some(best) = applicable.iter().map(|c| c.cost).min() else {
        tracing::trace!(considered = same_arity.len(), "no applicable overload");
        return Resolution::NoMatch(NoMatch::NoApplicable {
            considered: same_arity.len(),
        });
    };

    let mut tied: Vec<Candidate<'a>> = applicable.into_iter().filter(|c| c.cost == best).collect();
    if tied.len() == 1 {
        let winner = tied.swap_remove(0);
        tracing::trace!(overload = %winner.overload, cost = winner.cost, "resolved");
        Resolution::Resolved(winner)
    } else {
        tracing::trace!(candidates = tied.len(), cost = best, "ambiguous");
        Resolution::Ambiguous(tied)
    }
}
