//! The recursive builder: systems of equations over type expressions.

use std::sync::Arc;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;

use crate::base::{Sym, TypeError};
use crate::descr::Descr;

use super::eval::eval;
use super::{Gen, Node, RecState};
use crate::syntax::TypeExpr;

/// Build a system of (mutually) recursive equations into nodes.
///
/// Construction is the four-step scheme: each body becomes a generator
/// expression, the family of generators is collected into one shared
/// state, and each top-level node pairs a fresh id with its generator over
/// that state. Stepping any returned node replaces recursion variables with
/// nodes carrying the same state, so cycles such as
/// `x = %{head: integer(), tail: x, ..} or :nil` never expand eagerly.
///
/// Bodies are validated first: every variable must be defined by the
/// system, and recursion must be guarded by a map field.
pub fn build_recursive(
    equations: IndexMap<Sym, TypeExpr>,
) -> Result<IndexMap<Sym, Node>, TypeError> {
    for body in equations.values() {
        let mut unknown = None;
        body.visit_vars(&mut |var, _| {
            if unknown.is_none() && !equations.contains_key(var) {
                unknown = Some(var.clone());
            }
        });
        if let Some(var) = unknown {
            return Err(TypeError::UnknownVariable(var));
        }
    }
    check_guardedness(&equations)?;

    tracing::debug!(equations = equations.len(), "building recursive type system");

    let gens: IndexMap<Sym, Gen> = equations
        .iter()
        .map(|(name, body)| (name.clone(), Gen::Expr(Arc::new(body.clone()))))
        .collect();
    let state = RecState::new(gens);

    Ok(equations
        .into_iter()
        .map(|(name, body)| {
            let node = Node::make(state.clone(), Gen::Expr(Arc::new(body)));
            (name, node)
        })
        .collect())
}

/// Evaluate a closed type expression to a descriptor.
///
/// Rejects every recursion variable: a free variable has no meaning
/// outside [`build_recursive`].
pub fn eval_expr(expr: &TypeExpr) -> Result<Descr, TypeError> {
    let mut free = None;
    expr.visit_vars(&mut |var, _| {
        if free.is_none() {
            free = Some(var.clone());
        }
    });
    if let Some(var) = free {
        return Err(TypeError::UnknownVariable(var));
    }
    Ok(eval(expr, &RecState::empty()))
}

#[derive(Clone, Copy, PartialEq)]
enum Mark {
    InProgress,
    Done,
}

/// Reject variables that reach themselves without crossing a map field.
///
/// Unguarded equations (`x = x or integer()`) would expand forever during
/// stepping; guarded ones always bottom out in a map literal.
fn check_guardedness(equations: &IndexMap<Sym, TypeExpr>) -> Result<(), TypeError> {
    let mut unguarded: FxHashMap<&Sym, Vec<Sym>> = FxHashMap::default();
    for (name, body) in equations {
        let edges = unguarded.entry(name).or_default();
        body.visit_vars(&mut |var, guarded| {
            if !guarded {
                edges.push(var.clone());
            }
        });
    }

    let mut marks: FxHashMap<Sym, Mark> = FxHashMap::default();
    for name in equations.keys() {
        visit(name, &unguarded, &mut marks)?;
    }
    Ok(())
}

fn visit(
    name: &Sym,
    unguarded: &FxHashMap<&Sym, Vec<Sym>>,
    marks: &mut FxHashMap<Sym, Mark>,
) -> Result<(), TypeError> {
    match marks.get(name) {
        Some(Mark::Done) => return Ok(()),
        Some(Mark::InProgress) => return Err(TypeError::UnguardedRecursion(name.clone())),
        None => {}
    }
    marks.insert(name.clone(), Mark::InProgress);
    if let Some(edges) = unguarded.get(name) {
        for next in edges {
            visit(next, unguarded, marks)?;
        }
    }
    marks.insert(name.clone(), Mark::Done);
    Ok(())
}
