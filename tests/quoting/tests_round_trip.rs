//! Quoting: rendered forms and the evaluation round trip.

#![allow(clippy::unwrap_used)]

use rstest::rstest;
use settype::{Descr, MapField, MapTag, TypeExpr, eval_expr};

use crate::helpers::{closed_map, open_map, samples};

#[test]
fn test_quoting_round_trips_through_evaluation() {
    for t in samples() {
        let quoted = t.to_quoted();
        let rebuilt = eval_expr(&quoted)
            .unwrap_or_else(|e| panic!("quoted form of {t:?} failed to evaluate: {e}"));
        assert!(
            rebuilt.equal(&t),
            "round trip changed {t:?}: quoted as {quoted}, rebuilt {rebuilt:?}"
        );
    }
}

#[rstest]
#[case(Descr::integer(), "integer()")]
#[case(Descr::none(), "none()")]
#[case(Descr::atom(), "atom()")]
#[case(Descr::atoms(["ok"]), ":ok")]
#[case(Descr::atoms(["error", "ok"]), ":error or :ok")]
#[case(Descr::dynamic(), "dynamic()")]
#[case(Descr::integer().union(&Descr::float()), "integer() or float()")]
fn test_rendered_strings(#[case] descr: Descr, #[case] expected: &str) {
    assert_eq!(descr.to_quoted_string(), expected);
}

#[test]
fn test_rendered_map_strings() {
    assert_eq!(
        closed_map(&[("a", Descr::integer())]).to_quoted_string(),
        "%{a: integer()}"
    );
    assert_eq!(
        open_map(&[("a", Descr::integer())]).to_quoted_string(),
        "%{a: integer(), ..}"
    );
    assert_eq!(
        Descr::map([("a", MapField::optional(Descr::integer()))], MapTag::Closed)
            .to_quoted_string(),
        "%{a: if_set(integer())}"
    );
}

#[test]
fn test_cofinite_atoms_render_as_a_negation() {
    let almost_all = Descr::atom().difference(&Descr::atoms(["ok", "error"]));
    assert_eq!(
        almost_all.to_quoted_string(),
        "atom() and not (:error or :ok)"
    );
}

#[test]
fn test_open_map_without_the_empty_residue() {
    // Open over "a" minus exactly-"a": some extra key is required.
    let strict = open_map(&[("a", Descr::integer())])
        .difference(&closed_map(&[("a", Descr::integer())]));
    let quoted = strict.to_quoted();
    // Renders as the open literal minus the closed literal.
    match &quoted {
        TypeExpr::Inter(parts) => {
            assert_eq!(parts.len(), 2);
            assert!(matches!(parts[0], TypeExpr::Map { tag: MapTag::Open, .. }));
            assert!(matches!(parts[1], TypeExpr::Not(_)));
        }
        other => panic!("expected an intersection, got {other}"),
    }
    // And still round trips.
    assert!(eval_expr(&quoted).unwrap().equal(&strict));
}

#[test]
fn test_gradual_types_render_with_their_bound() {
    assert_eq!(
        Descr::dynamic_of(Descr::integer()).to_quoted_string(),
        "dynamic() and integer()"
    );
    assert_eq!(
        Descr::dynamic().union(&Descr::integer()).to_quoted_string(),
        "dynamic() or integer()"
    );
}

#[test]
fn test_recursive_types_render_finitely() {
    let list = crate::helpers::int_list();
    let rendered = list.to_quoted_string();
    // The cycle renders as a synthesized variable instead of unfolding.
    assert!(rendered.contains("%{"), "unexpected rendering: {rendered}");
    assert!(rendered.contains(":nil"), "unexpected rendering: {rendered}");
}

#[test]
fn test_term_round_trips() {
    let quoted = Descr::term().to_quoted();
    assert!(eval_expr(&quoted).unwrap().is_term());
}
