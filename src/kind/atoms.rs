//! The atom kind: finite unions and cofinite negations of atom symbols.

use std::collections::BTreeSet;

use crate::base::Sym;

/// The atom kind value.
///
/// `Union(s)` means "exactly the atoms in `s`"; `Negation(s)` means "every
/// atom except those in `s`". The empty union denotes the empty set of
/// atoms and is always elided at the descriptor level, so operations here
/// return `Option<AtomSet>` with `None` standing for kind absence. The
/// empty negation is the atom top and is a perfectly ordinary value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AtomSet {
    Union(BTreeSet<Sym>),
    Negation(BTreeSet<Sym>),
}

impl AtomSet {
    /// Every atom.
    pub fn top() -> Self {
        AtomSet::Negation(BTreeSet::new())
    }

    /// Exactly one atom.
    pub fn singleton(name: impl Into<Sym>) -> Self {
        AtomSet::Union(BTreeSet::from([name.into()]))
    }

    /// Whether this is the atom top.
    pub fn is_top(&self) -> bool {
        matches!(self, AtomSet::Negation(s) if s.is_empty())
    }

    /// Whether the given atom is a member of the set.
    pub fn member(&self, name: &Sym) -> bool {
        match self {
            AtomSet::Union(s) => s.contains(name),
            AtomSet::Negation(s) => !s.contains(name),
        }
    }

    /// The finite set of atoms, when the representation is a finite union.
    pub fn finite(&self) -> Option<&BTreeSet<Sym>> {
        match self {
            AtomSet::Union(s) => Some(s),
            AtomSet::Negation(_) => None,
        }
    }

    pub fn union(&self, other: &AtomSet) -> AtomSet {
        use AtomSet::*;
        match (self, other) {
            (Union(s1), Union(s2)) => Union(s1 | s2),
            (Negation(s1), Negation(s2)) => Negation(s1 & s2),
            (Union(s1), Negation(s2)) => Negation(s2 - s1),
            (Negation(s1), Union(s2)) => Negation(s1 - s2),
        }
    }

    /// Intersection; `None` when the result is the empty set of atoms.
    pub fn intersection(&self, other: &AtomSet) -> Option<AtomSet> {
        use AtomSet::*;
        let result = match (self, other) {
            (Union(s1), Union(s2)) => Union(s1 & s2),
            (Negation(s1), Negation(s2)) => Negation(s1 | s2),
            (Union(s1), Negation(s2)) => Union(s1 - s2),
            (Negation(s1), Union(s2)) => Union(s2 - s1),
        };
        normalize(result)
    }

    /// Difference; `None` when the result is the empty set of atoms.
    pub fn difference(&self, other: &AtomSet) -> Option<AtomSet> {
        use AtomSet::*;
        let result = match (self, other) {
            (Union(s1), Union(s2)) => Union(s1 - s2),
            (Negation(s1), Negation(s2)) => Union(s2 - s1),
            (Union(s1), Negation(s2)) => Union(s1 & s2),
            (Negation(s1), Union(s2)) => Negation(s1 | s2),
        };
        normalize(result)
    }
}

/// The empty union collapses to kind absence.
fn normalize(set: AtomSet) -> Option<AtomSet> {
    match set {
        AtomSet::Union(s) if s.is_empty() => None,
        other => Some(other),
    }
}
