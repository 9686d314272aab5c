//! Algebraic laws of the descriptor operations.

use settype::Descr;

use crate::helpers::{samples, static_samples};

#[test]
fn test_union_and_intersection_are_idempotent() {
    for a in samples() {
        assert!(a.union(&a).equal(&a), "union({a:?}) not idempotent");
        assert!(
            a.intersection(&a).equal(&a),
            "intersection({a:?}) not idempotent"
        );
    }
}

#[test]
fn test_union_and_intersection_are_commutative() {
    let all = samples();
    for a in &all {
        for b in &all {
            assert!(a.union(b).equal(&b.union(a)));
            assert!(a.intersection(b).equal(&b.intersection(a)));
        }
    }
}

#[test]
fn test_union_is_associative() {
    let all = static_samples();
    for a in &all {
        for b in &all {
            for c in &all {
                let left = a.union(b).union(c);
                let right = a.union(&b.union(c));
                assert!(left.equal(&right));
            }
        }
    }
}

#[test]
fn test_intersection_is_associative() {
    let all = static_samples();
    for a in &all {
        for b in &all {
            for c in &all {
                let left = a.intersection(b).intersection(c);
                let right = a.intersection(&b.intersection(c));
                assert!(left.equal(&right));
            }
        }
    }
}

#[test]
fn test_intersection_distributes_over_union() {
    let all = static_samples();
    for a in &all {
        for b in &all {
            for c in &all {
                let left = a.intersection(&b.union(c));
                let right = a.intersection(b).union(&a.intersection(c));
                assert!(left.equal(&right));
            }
        }
    }
}

#[test]
fn test_complementation() {
    for a in static_samples() {
        assert!(a.union(&a.negation()).is_term(), "union with complement of {a:?}");
        assert!(
            a.intersection(&a.negation()).is_empty(),
            "intersection with complement of {a:?}"
        );
    }
}

#[test]
fn test_double_negation() {
    for a in static_samples() {
        assert!(a.negation().negation().equal(&a));
    }
}

#[test]
fn test_de_morgan() {
    let all = static_samples();
    for a in &all {
        for b in &all {
            let left = a.union(b).negation();
            let right = a.negation().intersection(&b.negation());
            assert!(left.equal(&right));

            let left = a.intersection(b).negation();
            let right = a.negation().union(&b.negation());
            assert!(left.equal(&right));
        }
    }
}

#[test]
fn test_difference_via_complement() {
    let all = static_samples();
    for a in &all {
        for b in &all {
            assert!(a.difference(b).equal(&a.intersection(&b.negation())));
        }
    }
}

#[test]
fn test_none_and_term_are_units() {
    for a in samples() {
        assert!(a.union(&Descr::none()).equal(&a));
        assert!(a.intersection(&Descr::term()).equal(&a));
        assert!(a.intersection(&Descr::none()).is_empty());
    }
}

#[test]
fn test_integer_and_nil_are_disjoint() {
    let nil = Descr::atoms(["nil"]);
    assert!(Descr::integer().intersection(&nil).is_empty());
    assert!(Descr::integer().is_subtype_of(&Descr::integer().union(&nil)));
}
