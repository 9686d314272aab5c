//! Set-theoretic semantics of map types: openness, disjointness,
//! optional keys.

use rstest::rstest;
use settype::{Descr, MapField, MapTag};

use crate::helpers::{closed_map, open_map};

#[test]
fn test_closed_maps_with_incompatible_values_are_disjoint() {
    let ints = closed_map(&[("a", Descr::integer())]);
    let atoms = closed_map(&[("a", Descr::atom())]);
    assert!(ints.intersection(&atoms).is_empty());
}

#[test]
fn test_closed_map_is_subtype_of_open_map() {
    let closed = closed_map(&[("a", Descr::integer()), ("b", Descr::float())]);
    let open = open_map(&[("a", Descr::integer())]);
    assert!(closed.is_subtype_of(&open));
    assert!(!open.is_subtype_of(&closed));
}

#[test]
fn test_open_map_requires_its_declared_keys() {
    let with_a = open_map(&[("a", Descr::integer())]);
    let with_b = open_map(&[("b", Descr::float())]);
    assert!(!with_a.is_subtype_of(&with_b));
    // But both admit a map carrying both keys.
    let both = closed_map(&[("a", Descr::integer()), ("b", Descr::float())]);
    assert!(both.is_subtype_of(&with_a));
    assert!(both.is_subtype_of(&with_b));
}

#[test]
fn test_value_subtyping_lifts_to_map_subtyping() {
    let bools = closed_map(&[("a", Descr::boolean())]);
    let atoms = closed_map(&[("a", Descr::atom())]);
    assert!(bools.is_subtype_of(&atoms));
    assert!(!atoms.is_subtype_of(&bools));
}

#[test]
fn test_empty_valued_field_empties_the_map() {
    let broken = closed_map(&[("a", Descr::none())]);
    assert!(broken.is_empty());

    // An optional empty-valued key is fine: the key is simply never there.
    let optional = Descr::map(
        [("a", MapField::optional(Descr::none()))],
        MapTag::Closed,
    );
    assert!(!optional.is_empty());
    assert!(optional.equal(&closed_map(&[])));
}

#[test]
fn test_empty_closed_map_vs_open_map() {
    let empty_map = closed_map(&[]);
    let any_map = open_map(&[]);
    assert!(empty_map.is_subtype_of(&any_map));
    assert!(!any_map.is_subtype_of(&empty_map));
    assert!(!any_map.difference(&empty_map).is_empty());
}

#[test]
fn test_optional_key_widens_the_required_form() {
    let required = Descr::map(
        [("a", MapField::required(Descr::integer()))],
        MapTag::Closed,
    );
    let optional = Descr::map(
        [("a", MapField::optional(Descr::integer()))],
        MapTag::Closed,
    );
    assert!(required.is_subtype_of(&optional));
    assert!(!optional.is_subtype_of(&required));
    // The optional form also covers the empty map.
    assert!(closed_map(&[]).is_subtype_of(&optional));
}

#[rstest]
#[case(MapTag::Closed)]
#[case(MapTag::Open)]
fn test_map_minus_itself_is_empty(#[case] tag: MapTag) {
    let map = Descr::map([("a", MapField::required(Descr::integer()))], tag);
    assert!(map.difference(&map).is_empty());
}

#[test]
fn test_union_of_closed_maps_stays_below_open_cover() {
    let a = closed_map(&[("a", Descr::integer())]);
    let b = closed_map(&[("a", Descr::float())]);
    let cover = open_map(&[("a", Descr::integer().union(&Descr::float()))]);
    assert!(a.union(&b).is_subtype_of(&cover));
}

#[test]
fn test_maps_are_disjoint_from_other_kinds() {
    let map = open_map(&[]);
    assert!(map.intersection(&Descr::integer()).is_empty());
    assert!(map.intersection(&Descr::atom()).is_empty());
}
