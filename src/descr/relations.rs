//! Emptiness, subtyping, equivalence and gradual compatibility.

use std::collections::BTreeSet;

use crate::base::Sym;
use crate::map::map_not_empty;
use crate::node::Seen;

use super::Descr;

impl Descr {
    /// Whether the denoted set is empty.
    ///
    /// For a gradual descriptor this asks about the runtime upper bound:
    /// a purely dynamic type is empty only if nothing could inhabit it at
    /// runtime.
    pub fn is_empty(&self) -> bool {
        self.is_empty_with(&mut Seen::default())
    }

    pub(crate) fn is_empty_with(&self, seen: &mut Seen) -> bool {
        if let Some(dynamic) = &self.dynamic {
            return dynamic.is_empty_with(seen);
        }
        self.bitmap.is_empty()
            && self.atoms.is_none()
            && match &self.maps {
                None => true,
                Some(bdd) => !map_not_empty(bdd, seen),
            }
    }

    /// Set-theoretic subtyping, gradual-aware.
    ///
    /// Both components must be included: the static lower bounds and the
    /// dynamic upper bounds. For one-sided gradual operands this reduces
    /// to `L_d ⊆ R` (left gradual) or `L ⊆ R_s` (right gradual).
    pub fn is_subtype_of(&self, other: &Descr) -> bool {
        if !self.is_gradual() && !other.is_gradual() {
            return self.subtype_static(other);
        }
        self.static_part().subtype_static(&other.static_part())
            && self.dynamic_part().subtype_static(&other.dynamic_part())
    }

    pub(crate) fn subtype_static(&self, other: &Descr) -> bool {
        self.difference_static(other).is_empty()
    }

    /// Semantic equivalence: mutual subtyping.
    pub fn equal(&self, other: &Descr) -> bool {
        self.is_subtype_of(other) && other.is_subtype_of(self)
    }

    /// Whether the two types share at least one value.
    pub fn intersects(&self, other: &Descr) -> bool {
        !self.intersection(other).is_empty()
    }

    /// Gradual compatibility of an inferred type with an expected type.
    ///
    /// A non-empty static part must fit below the expected upper bound;
    /// a purely dynamic type is compatible whenever the upper bounds
    /// overlap at all.
    pub fn compatible_with(&self, expected: &Descr) -> bool {
        let stat = self.static_part();
        if !stat.is_empty() {
            stat.subtype_static(&expected.dynamic_part())
        } else {
            !self
                .dynamic_part()
                .intersection_static(&expected.dynamic_part())
                .is_empty()
        }
    }

    /// Whether this is the top type.
    pub fn is_term(&self) -> bool {
        Descr::term().is_subtype_of(self)
    }

    /// The finite set of atoms, when the (upper bound of the) type is
    /// exactly a finite atom union. Used for finite-case dispatch.
    pub fn atom_fetch(&self) -> Option<BTreeSet<Sym>> {
        let target = self.dynamic_part();
        if !target.bitmap.is_empty() || target.maps.is_some() {
            return None;
        }
        target.atoms.as_ref()?.finite().cloned()
    }
}
