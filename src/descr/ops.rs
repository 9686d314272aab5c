//! Set operations on descriptors.
//!
//! Static operations work pointwise per kind, treating an absent kind as
//! the empty set of that kind and dropping kinds that come out empty.
//! When exactly one operand is gradual, the static one is lifted to a
//! trivially-gradual descriptor (its own upper bound) before combining.
//! Difference combines the components asymmetrically — the dynamic part
//! keeps as much as possible, the static part as little — which is what
//! preserves the `static ⊆ dynamic` invariant.

use crate::bdd::Bdd;
use crate::map::MapBdd;

use super::Descr;

impl Descr {
    pub fn union(&self, other: &Descr) -> Descr {
        if !self.is_gradual() && !other.is_gradual() {
            return self.union_static(other);
        }
        let dynamic = self.dynamic_part().union_static(&other.dynamic_part());
        let stat = self.static_part().union_static(&other.static_part());
        stat.with_dynamic(dynamic)
    }

    pub fn intersection(&self, other: &Descr) -> Descr {
        if !self.is_gradual() && !other.is_gradual() {
            return self.intersection_static(other);
        }
        let dynamic = self.dynamic_part().intersection_static(&other.dynamic_part());
        let stat = self.static_part().intersection_static(&other.static_part());
        stat.with_dynamic(dynamic)
    }

    pub fn difference(&self, other: &Descr) -> Descr {
        if !self.is_gradual() && !other.is_gradual() {
            return self.difference_static(other);
        }
        let dynamic = self.dynamic_part().difference_static(&other.static_part());
        let stat = self.static_part().difference_static(&other.dynamic_part());
        stat.with_dynamic(dynamic)
    }

    pub fn negation(&self) -> Descr {
        Descr::term().difference(self)
    }

    pub(crate) fn union_static(&self, other: &Descr) -> Descr {
        Descr {
            bitmap: self.bitmap.union(other.bitmap),
            atoms: match (&self.atoms, &other.atoms) {
                (Some(a), Some(b)) => Some(a.union(b)),
                (Some(a), None) => Some(a.clone()),
                (None, b) => b.clone(),
            },
            maps: match (&self.maps, &other.maps) {
                (Some(a), Some(b)) => non_false(a.union(b)),
                (Some(a), None) => Some(a.clone()),
                (None, b) => b.clone(),
            },
            dynamic: None,
        }
    }

    pub(crate) fn intersection_static(&self, other: &Descr) -> Descr {
        Descr {
            bitmap: self.bitmap.intersection(other.bitmap),
            atoms: match (&self.atoms, &other.atoms) {
                (Some(a), Some(b)) => a.intersection(b),
                _ => None,
            },
            maps: match (&self.maps, &other.maps) {
                (Some(a), Some(b)) => non_false(a.intersection(b)),
                _ => None,
            },
            dynamic: None,
        }
    }

    pub(crate) fn difference_static(&self, other: &Descr) -> Descr {
        Descr {
            bitmap: self.bitmap.difference(other.bitmap),
            atoms: match (&self.atoms, &other.atoms) {
                (Some(a), Some(b)) => a.difference(b),
                (a, None) => a.clone(),
                (None, _) => None,
            },
            maps: match (&self.maps, &other.maps) {
                (Some(a), Some(b)) => non_false(a.difference(b)),
                (a, None) => a.clone(),
                (None, _) => None,
            },
            dynamic: None,
        }
    }
}

/// The syntactically-false BDD is the empty map kind; drop it.
fn non_false(bdd: MapBdd) -> Option<MapBdd> {
    match bdd {
        Bdd::False => None,
        bdd => Some(bdd),
    }
}
