//! Split-on-key normalization and map emptiness.

use std::collections::BTreeSet;

use indexmap::IndexMap;

use crate::base::Sym;
use crate::bdd::Bdd;
use crate::descr::Descr;
use crate::node::Seen;

use super::pairs::{Pair, eliminate_negations, make_disjoint};
use super::split::{SingleSplit, single_split};
use super::{MapBdd, MapLiteral};

/// Whether the map BDD denotes at least one map.
///
/// Works path by path over the accepting DNF, splitting on one key per
/// layer, and short-circuits on the first non-empty layer. Revisited BDDs
/// are assumed empty (the coinductive unit); see [`crate::node::Seen`].
pub(crate) fn map_not_empty(bdd: &MapBdd, seen: &mut Seen) -> bool {
    match bdd {
        Bdd::False => false,
        Bdd::True => true,
        Bdd::Branch { .. } => {
            if !seen.visit_map(bdd) {
                return false;
            }
            let not_empty = bdd
                .paths()
                .into_iter()
                .any(|(pos, neg)| path_not_empty(&pos, &neg, seen));
            if not_empty {
                seen.retract_map(bdd);
            }
            not_empty
        }
    }
}

fn path_not_empty(pos: &[&MapLiteral], neg: &[&MapLiteral], seen: &mut Seen) -> bool {
    match find_key(pos, neg) {
        None => {
            let (is_open, has_empty) = empty_cases(pos, neg);
            is_open || has_empty
        }
        Some(key) => !split_path(pos, neg, &key, seen).is_empty(),
    }
}

/// Split every literal of one accepting path on `key` and normalize the
/// resulting DNF line to disjoint pairs with both components non-empty.
pub(crate) fn split_path(
    pos: &[&MapLiteral],
    neg: &[&MapLiteral],
    key: &Sym,
    seen: &mut Seen,
) -> Vec<Pair> {
    // Componentwise intersection of the positive pairs. The empty
    // intersection is the universal pair: any value (or absence) at the
    // key, any rest.
    let mut value = Descr::term_or_not_set();
    let mut rest = MapBdd::True;
    for literal in pos {
        match single_split(literal, key) {
            // The universal open map constrains nothing; drop it.
            SingleSplit::NoSplit => {}
            SingleSplit::Split { value: v, rest: r } => {
                value = value.intersection(&v);
                rest = rest.intersection(&Bdd::literal(r));
            }
        }
    }
    if value.is_empty_with(seen) {
        return Vec::new();
    }

    let mut negated = Vec::new();
    for literal in neg {
        match single_split(literal, key) {
            // Subtracting the universal open map leaves nothing of the path.
            SingleSplit::NoSplit => return Vec::new(),
            SingleSplit::Split { value: v, rest: r } => {
                negated.push(Pair { value: v, rest: Bdd::literal(r) });
            }
        }
    }

    let negated = make_disjoint(negated, seen);
    eliminate_negations(Pair { value, rest }, &negated, seen)
}

/// A key declared by any literal of the path.
///
/// Taking the minimum keeps the split order (and with it renderings)
/// deterministic.
fn find_key(pos: &[&MapLiteral], neg: &[&MapLiteral]) -> Option<Sym> {
    pos.iter()
        .chain(neg.iter())
        .flat_map(|literal| literal.fields.keys())
        .min()
        .cloned()
}

/// `(is_open, has_empty)` of a path whose literals are all fieldless.
///
/// Over fieldless literals a path denotes one of four sets: all maps, the
/// empty map alone, all non-empty maps, or nothing. Two booleans —
/// "contains a non-empty map" and "contains the empty map" — capture them.
fn empty_cases(pos: &[&MapLiteral], neg: &[&MapLiteral]) -> (bool, bool) {
    use crate::syntax::MapTag;

    assert!(
        pos.iter().chain(neg.iter()).all(|l| l.is_fieldless()),
        "empty_cases applied to a literal with named fields"
    );

    let mut is_open = true;
    let mut has_empty = true;
    for literal in pos {
        if literal.tag == MapTag::Closed {
            is_open = false;
        }
    }
    for literal in neg {
        match literal.tag {
            // Subtracting every map leaves nothing.
            MapTag::Open => return (false, false),
            MapTag::Closed => has_empty = false,
        }
    }
    (is_open, has_empty)
}

/// One disjunct of a fully normalized map type: value types for the split
/// keys plus the `(is_open, has_empty)` classification of the residue.
#[derive(Debug, Clone)]
pub(crate) struct MapView {
    pub fields: IndexMap<Sym, Descr>,
    pub is_open: bool,
    pub has_empty: bool,
}

/// Normalize a map BDD into a union of disjoint [`MapView`]s.
///
/// Empty disjuncts are dropped, so `vec![]` means the map type is empty.
pub(crate) fn normalize(bdd: &MapBdd, seen: &mut Seen) -> Vec<MapView> {
    match bdd {
        Bdd::False => Vec::new(),
        Bdd::True => vec![MapView {
            fields: IndexMap::new(),
            is_open: true,
            has_empty: true,
        }],
        Bdd::Branch { .. } => {
            let paths = bdd.paths();
            tracing::trace!(paths = paths.len(), "normalizing map bdd");
            paths
                .into_iter()
                .flat_map(|(pos, neg)| path_views(&pos, &neg, seen))
                .collect()
        }
    }
}

fn path_views(pos: &[&MapLiteral], neg: &[&MapLiteral], seen: &mut Seen) -> Vec<MapView> {
    let Some(key) = find_key(pos, neg) else {
        let (is_open, has_empty) = empty_cases(pos, neg);
        if is_open || has_empty {
            return vec![MapView {
                fields: IndexMap::new(),
                is_open,
                has_empty,
            }];
        }
        return Vec::new();
    };

    let mut views = Vec::new();
    for pair in split_path(pos, neg, &key, seen) {
        for residue in normalize(&pair.rest, seen) {
            let mut fields = IndexMap::new();
            fields.insert(key.clone(), pair.value.clone());
            fields.extend(residue.fields);
            views.push(MapView {
                fields,
                is_open: residue.is_open,
                has_empty: residue.has_empty,
            });
        }
    }
    views
}

/// The union of value types at `key` across every non-empty disjunct.
///
/// The result may carry the `not_set` marker; public callers strip it.
pub(crate) fn fetch_value(bdd: &MapBdd, key: &Sym, seen: &mut Seen) -> Descr {
    let mut acc = Descr::none();
    for (pos, neg) in bdd.paths() {
        for pair in split_path(&pos, &neg, key, seen) {
            acc = acc.union(&pair.value);
        }
    }
    acc
}

/// Every key declared anywhere in the BDD.
pub(crate) fn all_keys(bdd: &MapBdd) -> BTreeSet<Sym> {
    let mut keys = BTreeSet::new();
    collect_keys(bdd, &mut keys);
    keys
}

fn collect_keys(bdd: &MapBdd, keys: &mut BTreeSet<Sym>) {
    if let Bdd::Branch { literal, high, low } = bdd {
        keys.extend(literal.fields.keys().cloned());
        collect_keys(high, keys);
        collect_keys(low, keys);
    }
}
