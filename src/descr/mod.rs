//! Descriptors: immutable, kind-partitioned type values.
//!
//! A [`Descr`] is the union of its present kind values: a bitmap of
//! indivisible kinds, an optional atom set, an optional map BDD, and an
//! optional nested `dynamic` descriptor marking the type as gradual. A
//! kind value that denotes the empty set of its kind is never stored; the
//! all-absent descriptor is the empty type.
//!
//! Descriptors are values: every operation returns a fresh descriptor and
//! nothing is ever mutated in place.

mod ops;
mod queries;
mod relations;

use std::collections::BTreeSet;

use crate::base::Sym;
use crate::bdd::Bdd;
use crate::kind::{AtomSet, Bitmap};
use crate::map::{MapBdd, MapLiteral};
use crate::node::Node;

pub use crate::syntax::MapTag;

/// A set-theoretic type descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Descr {
    pub(crate) bitmap: Bitmap,
    pub(crate) atoms: Option<AtomSet>,
    pub(crate) maps: Option<MapBdd>,
    pub(crate) dynamic: Option<Box<Descr>>,
}

/// A declared field of a [`Descr::map`] constructor call.
#[derive(Debug, Clone)]
pub struct MapField {
    pub(crate) node: Node,
    pub(crate) optional: bool,
}

impl MapField {
    /// The key must be present with a value of the given type.
    pub fn required(node: impl Into<Node>) -> Self {
        MapField { node: node.into(), optional: false }
    }

    /// The key may be absent; when present, the value has the given type.
    pub fn optional(node: impl Into<Node>) -> Self {
        MapField { node: node.into(), optional: true }
    }
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl Descr {
    /// The empty type.
    pub fn none() -> Self {
        Descr::default()
    }

    /// The top type: every value.
    pub fn term() -> Self {
        Descr {
            bitmap: Bitmap::TOP,
            atoms: Some(AtomSet::top()),
            maps: Some(Bdd::True),
            dynamic: None,
        }
    }

    /// The gradual top: unknown statically, anything at runtime.
    pub fn dynamic() -> Self {
        Self::dynamic_of(Descr::term())
    }

    /// A purely dynamic type with the given runtime upper bound.
    pub fn dynamic_of(upper: Descr) -> Self {
        Descr::none().with_dynamic(upper.static_part())
    }

    fn bits(bitmap: Bitmap) -> Self {
        Descr { bitmap, ..Descr::none() }
    }

    pub fn binary() -> Self {
        Self::bits(Bitmap::BINARY)
    }

    pub fn empty_list() -> Self {
        Self::bits(Bitmap::EMPTY_LIST)
    }

    pub fn integer() -> Self {
        Self::bits(Bitmap::INTEGER)
    }

    pub fn float() -> Self {
        Self::bits(Bitmap::FLOAT)
    }

    pub fn pid() -> Self {
        Self::bits(Bitmap::PID)
    }

    pub fn port() -> Self {
        Self::bits(Bitmap::PORT)
    }

    pub fn reference() -> Self {
        Self::bits(Bitmap::REFERENCE)
    }

    pub fn non_empty_list() -> Self {
        Self::bits(Bitmap::NON_EMPTY_LIST)
    }

    pub fn tuple() -> Self {
        Self::bits(Bitmap::TUPLE)
    }

    pub fn fun() -> Self {
        Self::bits(Bitmap::FUN)
    }

    /// Every atom.
    pub fn atom() -> Self {
        Descr { atoms: Some(AtomSet::top()), ..Descr::none() }
    }

    /// Exactly the atoms in the given set; the empty set yields [`Descr::none`].
    pub fn atoms<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Sym>,
    {
        let set: BTreeSet<Sym> = names.into_iter().map(Into::into).collect();
        if set.is_empty() {
            Descr::none()
        } else {
            Descr { atoms: Some(AtomSet::Union(set)), ..Descr::none() }
        }
    }

    /// The two boolean atoms.
    pub fn boolean() -> Self {
        Self::atoms(["true", "false"])
    }

    /// A map type over the declared fields.
    pub fn map<I, K>(fields: I, tag: MapTag) -> Self
    where
        I: IntoIterator<Item = (K, MapField)>,
        K: Into<Sym>,
    {
        let fields = fields
            .into_iter()
            .map(|(key, field)| {
                let node = if field.optional { field.node.or_absent() } else { field.node };
                (key.into(), node)
            })
            .collect();
        Self::from_map_literal(MapLiteral { tag, fields })
    }

    /// The marker type for "this map key is absent". Internal: it must
    /// never appear in a descriptor returned to users.
    pub(crate) fn not_set() -> Self {
        Self::bits(Bitmap::NOT_SET)
    }

    /// Any value, or absence. The value type of an unconstrained key in an
    /// open map literal.
    pub(crate) fn term_or_not_set() -> Self {
        let mut descr = Descr::term();
        descr.bitmap = descr.bitmap.union(Bitmap::NOT_SET);
        descr
    }

    pub(crate) fn from_map_literal(literal: MapLiteral) -> Self {
        Descr { maps: Some(Bdd::literal(literal)), ..Descr::none() }
    }
}

// ============================================================================
// GRADUAL DECOMPOSITION
// ============================================================================

impl Descr {
    /// Whether the descriptor carries a dynamic component.
    pub fn is_gradual(&self) -> bool {
        self.dynamic.is_some()
    }

    /// The static component: the descriptor without its dynamic entry.
    pub fn static_part(&self) -> Descr {
        Descr {
            bitmap: self.bitmap,
            atoms: self.atoms.clone(),
            maps: self.maps.clone(),
            dynamic: None,
        }
    }

    /// The dynamic component: the runtime upper bound. Defaults to the
    /// descriptor itself when no dynamic entry is present.
    pub fn dynamic_part(&self) -> Descr {
        match &self.dynamic {
            Some(dynamic) => (**dynamic).clone(),
            None => self.static_part(),
        }
    }

    /// Reattach a dynamic component, eliding it when empty-of-all-kinds.
    pub(crate) fn with_dynamic(self, dynamic: Descr) -> Descr {
        if dynamic.has_no_kinds() {
            self.static_part()
        } else {
            Descr { dynamic: Some(Box::new(dynamic)), ..self.static_part() }
        }
    }

    /// No kind value present at all (the syntactic empty type).
    pub(crate) fn has_no_kinds(&self) -> bool {
        self.bitmap.is_empty() && self.atoms.is_none() && self.maps.is_none() && self.dynamic.is_none()
    }

    /// Only the map kind may be present among the static kinds.
    pub(crate) fn is_map_only(&self) -> bool {
        self.bitmap.is_empty() && self.atoms.is_none()
    }

    /// Strip the `not_set` marker everywhere; the flag reports whether it
    /// was present. Applied at every public boundary returning a field
    /// value type.
    pub(crate) fn without_not_set(&self) -> (Descr, bool) {
        let mut descr = self.clone();
        let mut present = false;
        if descr.bitmap.contains(Bitmap::NOT_SET) {
            descr.bitmap = descr.bitmap.difference(Bitmap::NOT_SET);
            present = true;
        }
        if let Some(dynamic) = descr.dynamic.take() {
            let (inner, inner_present) = dynamic.without_not_set();
            descr = descr.with_dynamic(inner);
            present |= inner_present;
        }
        (descr, present)
    }
}
