//! Overload templates and their expansion.
//!
//! A template describes a whole overload group at once: every member of the
//! driving family yields one [`Overload`] whose parameters take that member's
//! type unless the slot is overridden.

use std::borrow::Cow;

use hlsl_types::{Type, TypeFamily};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::overload::{Direction, Overload, ParameterSignature, MAX_PARAMETERS};
use crate::CatalogError;

/// Name and documentation of a template parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParamDecl {
    pub name: Cow<'static, str>,
    pub documentation: Cow<'static, str>,
}

/// Return type of the produced overloads.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ReturnOverride {
    /// Each overload returns its driving family member.
    #[default]
    None,
    /// Every overload returns this type.
    Fixed(Type),
    /// The i-th overload returns the i-th type. Length must match the family.
    PerMember(Vec<Type>),
}

/// Per-slot overrides applied during expansion. Slots are zero-based.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Overrides {
    pub parameter_types: FxHashMap<usize, Type>,
    pub directions: FxHashMap<usize, Direction>,
    pub return_type: ReturnOverride,
}

impl Overrides {
    fn slots(&self) -> impl Iterator<Item = usize> + '_ {
        self.parameter_types
            .keys()
            .chain(self.directions.keys())
            .copied()
    }
}

/// Declarative description of an overload group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    name: Cow<'static, str>,
    documentation: Cow<'static, str>,
    family: Option<TypeFamily>,
    params: SmallVec<[ParamDecl; MAX_PARAMETERS]>,
    overrides: Overrides,
}

impl Template {
    /// A template producing one overload per member of `family`.
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        documentation: impl Into<Cow<'static, str>>,
        family: TypeFamily,
    ) -> Self {
        Template {
            name: name.into(),
            documentation: documentation.into(),
            family: Some(family),
            params: SmallVec::new(),
            overrides: Overrides::default(),
        }
    }

    /// A parameterless function with a fixed return type.
    pub fn nullary(
        name: impl Into<Cow<'static, str>>,
        documentation: impl Into<Cow<'static, str>>,
        return_type: Type,
    ) -> Self {
        Template {
            name: name.into(),
            documentation: documentation.into(),
            family: None,
            params: SmallVec::new(),
            overrides: Overrides {
                return_type: ReturnOverride::Fixed(return_type),
                ..Overrides::default()
            },
        }
    }

    /// Append a parameter.
    #[must_use]
    pub fn param(
        mut self,
        name: impl Into<Cow<'static, str>>,
        documentation: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push(ParamDecl {
            name: name.into(),
            documentation: documentation.into(),
        });
        self
    }

    /// Fix the type of parameter `slot` regardless of the family member.
    #[must_use]
    pub fn param_type(mut self, slot: usize, ty: Type) -> Self {
        self.overrides.parameter_types.insert(slot, ty);
        self
    }

    #[must_use]
    pub fn param_direction(mut self, slot: usize, direction: Direction) -> Self {
        self.overrides.directions.insert(slot, direction);
        self
    }

    /// Every overload returns `ty`.
    #[must_use]
    pub fn returns(mut self, ty: Type) -> Self {
        self.overrides.return_type = ReturnOverride::Fixed(ty);
        self
    }

    /// The i-th overload returns `types[i]`.
    #[must_use]
    pub fn returns_each(mut self, types: impl IntoIterator<Item = Type>) -> Self {
        self.overrides.return_type = ReturnOverride::PerMember(types.into_iter().collect());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn family(&self) -> Option<&TypeFamily> {
        self.family.as_ref()
    }

    pub fn params(&self) -> &[ParamDecl] {
        &self.params
    }

    pub fn overrides(&self) -> &Overrides {
        &self.overrides
    }

    /// Check the template's shape without producing anything.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let arity = self.params.len();
        if arity > MAX_PARAMETERS {
            return Err(CatalogError::TooManyParameters {
                function: self.name.clone(),
                count: arity,
                max: MAX_PARAMETERS,
            });
        }

        if let Some(slot) = self.overrides.slots().filter(|&slot| slot >= arity).min() {
            return Err(CatalogError::OverrideSlotOutOfRange {
                function: self.name.clone(),
                slot,
                arity,
            });
        }

        for (i, param) in self.params.iter().enumerate() {
            if self.params[..i].iter().any(|p| p.name == param.name) {
                return Err(CatalogError::DuplicateParameter {
                    function: self.name.clone(),
                    parameter: param.name.clone(),
                });
            }
        }

        match &self.family {
            None if arity > 0 => Err(CatalogError::ParametersWithoutFamily {
                function: self.name.clone(),
            }),
            None => match self.overrides.return_type {
                ReturnOverride::Fixed(_) => Ok(()),
                _ => Err(CatalogError::MissingReturnType {
                    function: self.name.clone(),
                }),
            },
            Some(family) if family.is_empty() => Err(CatalogError::EmptyFamily {
                function: self.name.clone(),
                family: family.name().to_string(),
            }),
            Some(family) => match &self.overrides.return_type {
                ReturnOverride::PerMember(types) if types.len() != family.len() => {
                    Err(CatalogError::ReturnLengthMismatch {
                        function: self.name.clone(),
                        expected: family.len(),
                        found: types.len(),
                    })
                }
                _ => Ok(()),
            },
        }
    }

    /// Produce one overload per driving family member, in family order.
    ///
    /// A template without a family produces exactly one overload with no
    /// parameters.
    pub fn expand(&self) -> Result<Vec<Overload>, CatalogError> {
        self.validate()?;

        let Some(family) = &self.family else {
            let return_type = match self.overrides.return_type {
                ReturnOverride::Fixed(ty) => ty,
                // validate() rejects the other cases
                _ => Type::VOID,
            };
            return Ok(vec![Overload::new(
                self.name.clone(),
                self.documentation.clone(),
                return_type,
                [],
            )]);
        };

        let overloads = family
            .iter()
            .enumerate()
            .map(|(index, member)| {
                Overload::new(
                    self.name.clone(),
                    self.documentation.clone(),
                    self.return_type_for(index, member),
                    self.parameters_for(member),
                )
            })
            .collect();
        Ok(overloads)
    }

    fn return_type_for(&self, index: usize, member: Type) -> Type {
        match &self.overrides.return_type {
            ReturnOverride::None => member,
            ReturnOverride::Fixed(ty) => *ty,
            ReturnOverride::PerMember(types) => types.get(index).copied().unwrap_or(member),
        }
    }

    fn parameters_for(&self, member: Type) -> impl Iterator<Item = ParameterSignature> + '_ {
        self.params.iter().enumerate().map(move |(slot, decl)| ParameterSignature {
            name: decl.name.clone(),
            documentation: decl.documentation.clone(),
            ty: self
                .overrides
                .parameter_types
                .get(&slot)
                .copied()
                .unwrap_or(member),
            direction: self
                .overrides
                .directions
                .get(&slot)
                .copied()
                .unwrap_or_default(),
        })
    }
}
