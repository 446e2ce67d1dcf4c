//! The immutable intrinsic catalog.
//!
//! # Design
//!
//! - Overloads live in one `Vec`, addressed by [`OverloadId`]
//! - Buckets group overload ids by function name, in first-declaration order
//! - `FxHashMap` from name to bucket for O(1) lookup

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::overload::{Overload, OverloadId, ParameterSignature};
use crate::template::Template;
use crate::CatalogError;

#[derive(Clone, Debug)]
struct Bucket {
    name: Cow<'static, str>,
    ids: SmallVec<[OverloadId; 4]>,
}

/// Name-keyed table of expanded overloads.
///
/// Built once through [`CatalogBuilder`]; read-only afterwards.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    overloads: Vec<Overload>,
    buckets: Vec<Bucket>,
    by_name: FxHashMap<Cow<'static, str>, usize>,
}

impl Catalog {
    /// Build the full intrinsic function table.
    pub fn intrinsics() -> Result<Catalog, CatalogError> {
        let mut builder = CatalogBuilder::new();
        crate::table::register(&mut builder)?;
        let catalog = builder.build();
        tracing::debug!(
            names = catalog.name_count(),
            overloads = catalog.len(),
            "intrinsic catalog built"
        );
        Ok(catalog)
    }

    fn bucket(&self, name: &str) -> Option<&Bucket> {
        self.by_name.get(name).map(|&index| &self.buckets[index])
    }

    /// Overload ids for `name` in declaration order. Empty for unknown names.
    pub fn ids_for(&self, name: &str) -> &[OverloadId] {
        match self.bucket(name) {
            Some(bucket) => &bucket.ids,
            None => &[],
        }
    }

    /// Overloads for `name` in declaration order. Empty for unknown names.
    pub fn overloads_for<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a Overload> + 'a {
        self.ids_for(name)
            .iter()
            .map(move |&id| &self.overloads[id.index()])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// All function names in first-declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.buckets.iter().map(|bucket| &*bucket.name)
    }

    /// Names starting with `prefix`, ignoring ASCII case.
    pub fn names_with_prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.names().filter(move |name| {
            name.get(..prefix.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
        })
    }

    pub fn overload(&self, id: OverloadId) -> Option<&Overload> {
        self.overloads.get(id.index())
    }

    /// Parameter `slot` of overload `id`.
    pub fn parameter(&self, id: OverloadId, slot: usize) -> Option<&ParameterSignature> {
        self.overload(id)?.parameters().get(slot)
    }

    /// Every overload with its id, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (OverloadId, &Overload)> {
        self.overloads
            .iter()
            .enumerate()
            .map(|(index, overload)| (OverloadId::from_index(index), overload))
    }

    /// Total number of overloads.
    pub fn len(&self) -> usize {
        self.overloads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overloads.is_empty()
    }

    /// Number of distinct function names.
    pub fn name_count(&self) -> usize {
        self.buckets.len()
    }
}

/// Accumulates overloads into a [`Catalog`].
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    catalog: Catalog,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        CatalogBuilder::default()
    }

    /// Expand `template` and add every produced overload.
    pub fn expand(&mut self, template: &Template) -> Result<&mut Self, CatalogError> {
        for overload in template.expand()? {
            self.push(overload)?;
        }
        Ok(self)
    }

    /// Add one explicitly written overload.
    ///
    /// Explicit declarations are not bound by the template arity limit.
    pub fn declare(&mut self, overload: Overload) -> Result<&mut Self, CatalogError> {
        let params = overload.parameters();
        for (i, param) in params.iter().enumerate() {
            if params[..i].iter().any(|p| p.name == param.name) {
                return Err(CatalogError::DuplicateParameter {
                    function: overload.name_cow().clone(),
                    parameter: param.name.clone(),
                });
            }
        }
        self.push(overload)?;
        Ok(self)
    }

    fn push(&mut self, overload: Overload) -> Result<(), CatalogError> {
        let catalog = &mut self.catalog;
        let bucket_index = match catalog.by_name.get(overload.name()) {
            Some(&index) => index,
            None => {
                let index = catalog.buckets.len();
                catalog.buckets.push(Bucket {
                    name: overload.name_cow().clone(),
                    ids: SmallVec::new(),
                });
                catalog.by_name.insert(overload.name_cow().clone(), index);
                index
            }
        };

        let bucket = &mut catalog.buckets[bucket_index];
        let duplicate = bucket
            .ids
            .iter()
            .any(|&id| catalog.overloads[id.index()].same_parameter_types(&overload));
        if duplicate {
            return Err(CatalogError::DuplicateOverload {
                function: overload.name_cow().clone(),
                signature: overload.to_string(),
            });
        }

        let id = OverloadId::from_index(catalog.overloads.len());
        bucket.ids.push(id);
        catalog.overloads.push(overload);
        Ok(())
    }

    pub fn build(self) -> Catalog {
        self.catalog
    }
}

/// Cheaply clonable, thread-safe handle to a built catalog.
pub struct SharedCatalog(Arc<Catalog>);

impl SharedCatalog {
    pub fn new(catalog: Catalog) -> Self {
        SharedCatalog(Arc::new(catalog))
    }
}

impl Clone for SharedCatalog {
    fn clone(&self) -> Self {
        SharedCatalog(Arc::clone(&self.0))
    }
}

impl std::ops::Deref for SharedCatalog {
    type Target = Catalog;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Debug for SharedCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SharedCatalog({} names, {} overloads)",
            self.name_count(),
            self.len()
        )
    }
}
