//! Shared fixtures for the integration tests.

use indexmap::IndexMap;
use settype::{Descr, FieldExpr, MapField, MapTag, Node, Sym, TypeExpr, build_recursive};

/// A closed map with the given required fields.
pub fn closed_map(fields: &[(&str, Descr)]) -> Descr {
    Descr::map(
        fields.iter().map(|(k, v)| (*k, MapField::required(v.clone()))),
        MapTag::Closed,
    )
}

/// An open map with the given required fields.
pub fn open_map(fields: &[(&str, Descr)]) -> Descr {
    Descr::map(
        fields.iter().map(|(k, v)| (*k, MapField::required(v.clone()))),
        MapTag::Open,
    )
}

/// A representative spread of descriptors: basic kinds, atom sets, maps,
/// unions, and gradual types.
pub fn samples() -> Vec<Descr> {
    let mut all = static_samples();
    all.extend(gradual_samples());
    all
}

/// Non-gradual descriptors only. Complementation laws are stated for
/// these: a gradual type and its negation do not rebuild `term()` because
/// the static lower bounds stay apart.
pub fn static_samples() -> Vec<Descr> {
    vec![
        Descr::none(),
        Descr::term(),
        Descr::integer(),
        Descr::float(),
        Descr::binary(),
        Descr::atom(),
        Descr::atoms(["ok", "error"]),
        Descr::boolean(),
        Descr::tuple().union(&Descr::fun()),
        Descr::integer().union(&Descr::float()),
        Descr::atom().difference(&Descr::atoms(["ok"])),
        closed_map(&[("a", Descr::integer())]),
        open_map(&[("a", Descr::integer())]),
        closed_map(&[("a", Descr::integer()), ("b", Descr::float())]),
        Descr::map(
            [("a", MapField::optional(Descr::integer()))],
            MapTag::Closed,
        ),
    ]
}

pub fn gradual_samples() -> Vec<Descr> {
    vec![
        Descr::dynamic(),
        Descr::dynamic_of(Descr::integer()),
        Descr::dynamic().union(&Descr::integer()),
        Descr::dynamic_of(Descr::atom()).union(&Descr::boolean()),
    ]
}

/// Build a single-equation recursive system and return its node.
pub fn recursive_node(name: &str, body: TypeExpr) -> Node {
    let mut equations = IndexMap::new();
    equations.insert(Sym::from(name), body);
    build_recursive(equations)
        .expect("equation system should build")
        .swap_remove(name)
        .expect("node for the defined equation")
}

/// The recursive integer list `x = %{head: integer(), tail: x} or :nil`.
pub fn int_list() -> Node {
    let cell = TypeExpr::Map {
        fields: vec![
            ("head".into(), FieldExpr::required(TypeExpr::Integer)),
            ("tail".into(), FieldExpr::required(TypeExpr::var("x"))),
        ],
        tag: MapTag::Closed,
    };
    recursive_node("x", cell.or(TypeExpr::atom("nil")))
}
