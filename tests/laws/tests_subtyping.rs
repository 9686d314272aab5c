//! Subtype relation laws.

use settype::Descr;

use crate::helpers::{samples, static_samples};

#[test]
fn test_subtype_is_reflexive() {
    for a in samples() {
        assert!(a.is_subtype_of(&a), "{a:?} not a subtype of itself");
    }
}

#[test]
fn test_subtype_is_transitive() {
    let all = samples();
    for a in &all {
        for b in &all {
            for c in &all {
                if a.is_subtype_of(b) && b.is_subtype_of(c) {
                    assert!(
                        a.is_subtype_of(c),
                        "transitivity violated for {a:?} <= {b:?} <= {c:?}"
                    );
                }
            }
        }
    }
}

#[test]
fn test_equal_is_mutual_subtyping() {
    let all = samples();
    for a in &all {
        for b in &all {
            assert_eq!(
                a.equal(b),
                a.is_subtype_of(b) && b.is_subtype_of(a)
            );
        }
    }
}

#[test]
fn test_none_is_bottom_and_term_is_top() {
    for a in static_samples() {
        assert!(Descr::none().is_subtype_of(&a));
        assert!(a.is_subtype_of(&Descr::term()));
    }
}

#[test]
fn test_subtype_orders_unions_and_intersections() {
    let all = static_samples();
    for a in &all {
        for b in &all {
            assert!(a.intersection(b).is_subtype_of(a));
            assert!(a.is_subtype_of(&a.union(b)));
            assert!(a.difference(b).is_subtype_of(a));
        }
    }
}

#[test]
fn test_intersects_iff_nonempty_intersection() {
    let all = samples();
    for a in &all {
        for b in &all {
            assert_eq!(a.intersects(b), !a.intersection(b).is_empty());
        }
    }
}
