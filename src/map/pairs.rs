//! Pair-disjointness normalization.
//!
//! A DNF line over one key is a positive pair `(value, rest)` minus a set
//! of negated pairs. Negation elimination
//! `(F,S) ∖ ⋃(tᵢ,sᵢ) = ⋃(F∩tᵢ, S∖sᵢ) ∪ (F∖⋃tᵢ, S)` is only valid when the
//! negated first components are pairwise disjoint, so the negated pairs go
//! through disjoint insertion first.

use crate::descr::Descr;
use crate::node::Seen;

use super::{MapBdd, map_not_empty};

/// One `(value_at_key, rest_of_map)` pair.
#[derive(Debug, Clone)]
pub(crate) struct Pair {
    pub value: Descr,
    pub rest: MapBdd,
}

/// Rebuild `pairs` as an equivalent union with pairwise-disjoint value
/// components.
pub(crate) fn make_disjoint(pairs: Vec<Pair>, seen: &mut Seen) -> Vec<Pair> {
    let mut disjoint: Vec<Pair> = Vec::new();
    for pair in pairs {
        insert_disjoint(pair, &mut disjoint, seen);
    }
    disjoint
}

fn insert_disjoint(pair: Pair, disjoint: &mut Vec<Pair>, seen: &mut Seen) {
    let overlap = disjoint.iter().position(|entry| {
        !pair.value.intersection(&entry.value).is_empty_with(seen)
    });
    let Some(index) = overlap else {
        disjoint.push(pair);
        return;
    };
    let entry = disjoint.swap_remove(index);

    let common = Pair {
        value: pair.value.intersection(&entry.value),
        rest: pair.rest.union(&entry.rest),
    };
    let pair_only = pair.value.difference(&entry.value);
    let entry_only = entry.value.difference(&pair.value);

    if !entry_only.is_empty_with(seen) {
        disjoint.push(Pair { value: entry_only, rest: entry.rest });
    }
    disjoint.push(common);
    if !pair_only.is_empty_with(seen) {
        // The piece outside the removed entry may still overlap others.
        insert_disjoint(Pair { value: pair_only, rest: pair.rest }, disjoint, seen);
    }
}

/// Eliminate the negated pairs from a positive pair, yielding a union of
/// disjoint pairs with both components non-empty.
///
/// `negated` must already be disjoint on its value components.
pub(crate) fn eliminate_negations(
    positive: Pair,
    negated: &[Pair],
    seen: &mut Seen,
) -> Vec<Pair> {
    let mut out = Vec::new();
    let mut negated_values = Descr::none();

    for neg in negated {
        let value = positive.value.intersection(&neg.value);
        if !value.is_empty_with(seen) {
            let rest = positive.rest.difference(&neg.rest);
            if map_not_empty(&rest, seen) {
                out.push(Pair { value, rest });
            }
        }
        negated_values = negated_values.union(&neg.value);
    }

    let uncovered = positive.value.difference(&negated_values);
    if !uncovered.is_empty_with(seen) && map_not_empty(&positive.rest, seen) {
        out.push(Pair { value: uncovered, rest: positive.rest });
    }

    out
}
