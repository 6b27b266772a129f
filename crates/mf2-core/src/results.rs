//! The outcome of one parse and its query surface.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;

use crate::object::MicroformatObject;

/// Every object found during one parse, in three views.
///
/// - `all`: document order, nested objects included
/// - `standalone`: objects not serving as another object's property value
/// - `by_id`: objects whose root element carried an `id`
///
/// Serializes as `{ "items": [...standalone], "rels": {...} }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Results {
    #[serde(skip)]
    all: Vec<Arc<MicroformatObject>>,
    #[serde(rename = "items")]
    standalone: Vec<Arc<MicroformatObject>>,
    #[serde(skip)]
    by_id: BTreeMap<String, Arc<MicroformatObject>>,
    rels: BTreeMap<String, Vec<String>>,
}

impl Results {
    /// Assemble results from already-ordered views.
    #[must_use]
    pub const fn from_parts(
        all: Vec<Arc<MicroformatObject>>,
        standalone: Vec<Arc<MicroformatObject>>,
        by_id: BTreeMap<String, Arc<MicroformatObject>>,
        rels: BTreeMap<String, Vec<String>>,
    ) -> Self {
        Self {
            all,
            standalone,
            by_id,
            rels,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.all.is_empty() && self.rels.is_empty()
    }

    /// Every object, nested ones included, in document order.
    #[must_use]
    pub fn all_objects(&self) -> &[Arc<MicroformatObject>] {
        &self.all
    }

    /// Top-level objects only.
    #[must_use]
    pub fn standalone_objects(&self) -> &[Arc<MicroformatObject>] {
        &self.standalone
    }

    #[must_use]
    pub fn object_by_id(&self, id: &str) -> Option<&Arc<MicroformatObject>> {
        self.by_id.get(id)
    }

    /// Objects whose types contain `ty`, from `all` when `include_nested`,
    /// otherwise from `standalone`. Ordering is preserved.
    #[must_use]
    pub fn objects_by_microformat(
        &self,
        ty: &str,
        include_nested: bool,
    ) -> Vec<&Arc<MicroformatObject>> {
        let source = if include_nested {
            &self.all
        } else {
            &self.standalone
        };
        source.iter().filter(|object| object.has_type(ty)).collect()
    }

    /// Relationship targets found outside any object, keyed by `rel` token.
    #[must_use]
    pub const fn rels(&self) -> &BTreeMap<String, Vec<String>> {
        &self.rels
    }
}
