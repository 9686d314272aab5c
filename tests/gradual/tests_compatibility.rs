//! Gradual compatibility checks.

use settype::Descr;

use crate::helpers::closed_map;

#[test]
fn test_dynamic_is_compatible_with_anything_inhabited() {
    assert!(Descr::dynamic().compatible_with(&Descr::integer()));
    assert!(Descr::dynamic().compatible_with(&Descr::atom()));
    assert!(Descr::dynamic().compatible_with(&closed_map(&[("a", Descr::integer())])));
}

#[test]
fn test_static_part_outside_the_expected_type_is_incompatible() {
    let inferred = Descr::dynamic().union(&Descr::atom());
    assert!(!inferred.compatible_with(&Descr::integer()));
    assert!(inferred.compatible_with(&Descr::atom()));
}

#[test]
fn test_static_types_are_compatible_when_included() {
    assert!(Descr::integer().compatible_with(&Descr::integer().union(&Descr::float())));
    assert!(!Descr::integer().compatible_with(&Descr::float()));
}

#[test]
fn test_compatibility_against_gradual_expected_type() {
    // The expected side contributes its runtime upper bound.
    assert!(Descr::integer().compatible_with(&Descr::dynamic()));
    assert!(Descr::integer().compatible_with(&Descr::dynamic_of(Descr::integer())));
    assert!(!Descr::integer().compatible_with(&Descr::dynamic_of(Descr::float())));
}

#[test]
fn test_bounded_dynamic_narrows_compatibility() {
    let dyn_number = Descr::dynamic_of(Descr::integer().union(&Descr::float()));
    assert!(dyn_number.compatible_with(&Descr::integer()));
    assert!(!dyn_number.compatible_with(&Descr::atom()));
}

#[test]
fn test_compatibility_is_not_subtyping() {
    // Compatible but not a subtype: the upper bounds merely overlap.
    let dyn_number = Descr::dynamic_of(Descr::integer().union(&Descr::float()));
    assert!(dyn_number.compatible_with(&Descr::integer()));
    assert!(!dyn_number.is_subtype_of(&Descr::integer()));
}
