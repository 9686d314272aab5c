//! Evaluation of type expressions against a recursion state.

use crate::descr::Descr;
use crate::map::MapLiteral;
use crate::syntax::TypeExpr;

use super::RecState;

/// Evaluate `expr` to a descriptor.
///
/// Map-field values are not evaluated here: they become replacement nodes
/// drawn from the state, which is how recursion variables survive inside
/// map literals without being expanded. A recursion variable in any other
/// position is expanded in place; the builder has already rejected systems
/// where that expansion would not terminate.
///
/// # Panics
///
/// Panics on an unbound recursion variable: such a node is malformed, and
/// the builder never produces one.
pub(crate) fn eval(expr: &TypeExpr, state: &RecState) -> Descr {
    match expr {
        TypeExpr::Term => Descr::term(),
        TypeExpr::None => Descr::none(),
        TypeExpr::Dynamic => Descr::dynamic(),

        TypeExpr::Binary => Descr::binary(),
        TypeExpr::EmptyList => Descr::empty_list(),
        TypeExpr::Integer => Descr::integer(),
        TypeExpr::Float => Descr::float(),
        TypeExpr::Pid => Descr::pid(),
        TypeExpr::Port => Descr::port(),
        TypeExpr::Reference => Descr::reference(),
        TypeExpr::NonEmptyList => Descr::non_empty_list(),
        TypeExpr::Tuple => Descr::tuple(),
        TypeExpr::Fun => Descr::fun(),

        TypeExpr::AtomTop => Descr::atom(),
        TypeExpr::Atom(names) => Descr::atoms(names.iter().cloned()),

        TypeExpr::Map { fields, tag } => {
            let fields = fields
                .iter()
                .map(|(key, field)| {
                    (key.clone(), state.replacement(&field.value, field.presence))
                })
                .collect();
            Descr::from_map_literal(MapLiteral { tag: *tag, fields })
        }

        TypeExpr::Union(items) => items
            .iter()
            .fold(Descr::none(), |acc, item| acc.union(&eval(item, state))),

        TypeExpr::Inter(items) => items
            .iter()
            .fold(Descr::term(), |acc, item| {
                acc.intersection(&eval(item, state))
            }),

        TypeExpr::Not(inner) => eval(inner, state).negation(),

        TypeExpr::Var(name) => match state.generator(name) {
            Some(generator) => generator.apply(state),
            None => panic!("malformed node: unbound recursion variable {name}"),
        },
    }
}
