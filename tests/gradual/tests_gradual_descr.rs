//! Gradual descriptors: the static/dynamic decomposition and its
//! invariant.

use settype::Descr;

use crate::helpers::{gradual_samples, open_map, samples};

#[test]
fn test_static_part_stays_below_dynamic_part() {
    // The constructor pipeline and every operation maintain the gradual
    // invariant: the static lower bound fits under the runtime upper bound.
    for t in samples() {
        assert!(
            t.static_part().is_subtype_of(&t.dynamic_part()),
            "gradual invariant violated for {t:?}"
        );
    }
}

#[test]
fn test_operations_preserve_the_invariant() {
    let all = samples();
    for a in &all {
        for b in &all {
            for combined in [a.union(b), a.intersection(b), a.difference(b)] {
                assert!(
                    combined.static_part().is_subtype_of(&combined.dynamic_part()),
                    "invariant broken combining {a:?} and {b:?}"
                );
            }
        }
    }
}

#[test]
fn test_purely_static_types_decompose_trivially() {
    let t = Descr::integer();
    assert!(t.static_part().equal(&t));
    assert!(t.dynamic_part().equal(&t));
}

#[test]
fn test_dynamic_upper_bound_controls_emptiness() {
    assert!(!Descr::dynamic().is_empty());
    assert!(Descr::dynamic_of(Descr::none()).is_empty());
    assert!(!Descr::dynamic_of(open_map(&[])).is_empty());
}

#[test]
fn test_gradual_of_gradual_samples_is_stable() {
    for t in gradual_samples() {
        assert!(t.is_gradual());
        // Re-uniting the decomposition loses nothing.
        let rebuilt = Descr::dynamic_of(t.dynamic_part()).union(&t.static_part());
        assert!(rebuilt.equal(&t));
    }
}

#[test]
fn test_dynamic_intersection_narrows() {
    let dyn_int = Descr::dynamic().intersection(&Descr::integer());
    assert!(dyn_int.is_gradual());
    assert!(dyn_int.is_subtype_of(&Descr::integer()));
    assert!(!Descr::dynamic().is_subtype_of(&Descr::integer()));
}

#[test]
fn test_difference_against_dynamic() {
    let gradual = Descr::dynamic().union(&Descr::integer());
    // Subtracting the full dynamic type removes the static certainty too.
    let nothing_static = gradual.difference(&Descr::dynamic());
    assert!(nothing_static.static_part().is_empty());
}
