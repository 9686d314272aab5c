//! Generic binary decision diagrams over totally ordered literals.
//!
//! A BDD is `True`, `False`, or a branch `(literal, high, low)` where the
//! literal holds on the `high` edge and fails on the `low` edge. Along every
//! root-to-leaf path the literal labels strictly increase; the recursive
//! merges below rely on that order to stay commutative. The engine is
//! opaque to literal semantics: any `Clone + Ord` label works, and the
//! order only has to be stable within a run.

use std::cmp::Ordering;
use std::sync::Arc;

/// A binary decision diagram.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Bdd<L> {
    True,
    False,
    Branch {
        literal: L,
        high: Arc<Bdd<L>>,
        low: Arc<Bdd<L>>,
    },
}

impl<L: Clone + Ord> Bdd<L> {
    /// The BDD accepting exactly where `literal` holds.
    pub fn literal(literal: L) -> Self {
        Bdd::Branch {
            literal,
            high: Arc::new(Bdd::True),
            low: Arc::new(Bdd::False),
        }
    }

    /// The BDD accepting exactly where `literal` fails.
    pub fn negated_literal(literal: L) -> Self {
        Bdd::Branch {
            literal,
            high: Arc::new(Bdd::False),
            low: Arc::new(Bdd::True),
        }
    }

    fn branch(literal: &L, high: Bdd<L>, low: Bdd<L>) -> Self {
        // Redundant test elimination: both edges agree, the literal is
        // irrelevant. Merges only ever build reduced diagrams, so
        // structural equality can stand in for a semantic revisit check.
        if high == low {
            return high;
        }
        debug_assert!(
            high.root_literal().is_none_or(|l| *literal < *l)
                && low.root_literal().is_none_or(|l| *literal < *l),
            "ill-ordered BDD branch"
        );
        Bdd::Branch {
            literal: literal.clone(),
            high: Arc::new(high),
            low: Arc::new(low),
        }
    }

    fn root_literal(&self) -> Option<&L> {
        match self {
            Bdd::Branch { literal, .. } => Some(literal),
            _ => None,
        }
    }

    pub fn union(&self, other: &Bdd<L>) -> Bdd<L> {
        match (self, other) {
            (Bdd::True, _) | (_, Bdd::True) => Bdd::True,
            (Bdd::False, b) | (b, Bdd::False) => b.clone(),
            (
                Bdd::Branch { literal: l1, high: h1, low: lo1 },
                Bdd::Branch { literal: l2, high: h2, low: lo2 },
            ) => match l1.cmp(l2) {
                Ordering::Equal => Self::branch(l1, h1.union(h2), lo1.union(lo2)),
                Ordering::Less => Self::branch(l1, h1.union(other), lo1.union(other)),
                Ordering::Greater => Self::branch(l2, self.union(h2), self.union(lo2)),
            },
        }
    }

    pub fn intersection(&self, other: &Bdd<L>) -> Bdd<L> {
        match (self, other) {
            (Bdd::False, _) | (_, Bdd::False) => Bdd::False,
            (Bdd::True, b) | (b, Bdd::True) => b.clone(),
            (
                Bdd::Branch { literal: l1, high: h1, low: lo1 },
                Bdd::Branch { literal: l2, high: h2, low: lo2 },
            ) => match l1.cmp(l2) {
                Ordering::Equal => Self::branch(l1, h1.intersection(h2), lo1.intersection(lo2)),
                Ordering::Less => {
                    Self::branch(l1, h1.intersection(other), lo1.intersection(other))
                }
                Ordering::Greater => {
                    Self::branch(l2, self.intersection(h2), self.intersection(lo2))
                }
            },
        }
    }

    pub fn difference(&self, other: &Bdd<L>) -> Bdd<L> {
        match (self, other) {
            (_, Bdd::True) | (Bdd::False, _) => Bdd::False,
            (b, Bdd::False) => b.clone(),
            (Bdd::True, Bdd::Branch { literal, high, low }) => Self::branch(
                literal,
                Bdd::True.difference(high),
                Bdd::True.difference(low),
            ),
            (
                Bdd::Branch { literal: l1, high: h1, low: lo1 },
                Bdd::Branch { literal: l2, high: h2, low: lo2 },
            ) => match l1.cmp(l2) {
                Ordering::Equal => Self::branch(l1, h1.difference(h2), lo1.difference(lo2)),
                Ordering::Less => {
                    Self::branch(l1, h1.difference(other), lo1.difference(other))
                }
                Ordering::Greater => {
                    Self::branch(l2, self.difference(h2), self.difference(lo2))
                }
            },
        }
    }

    /// All root-to-leaf paths ending in `True`, as
    /// `(positive_literals, negative_literals)` — the accepting DNF.
    pub fn paths(&self) -> Vec<(Vec<&L>, Vec<&L>)> {
        let mut out = Vec::new();
        let mut pos = Vec::new();
        let mut neg = Vec::new();
        self.collect_paths(&mut pos, &mut neg, &mut out);
        out
    }

    fn collect_paths<'a>(
        &'a self,
        pos: &mut Vec<&'a L>,
        neg: &mut Vec<&'a L>,
        out: &mut Vec<(Vec<&'a L>, Vec<&'a L>)>,
    ) {
        match self {
            Bdd::False => {}
            Bdd::True => out.push((pos.clone(), neg.clone())),
            Bdd::Branch { literal, high, low } => {
                pos.push(literal);
                high.collect_paths(pos, neg, out);
                pos.pop();

                neg.push(literal);
                low.collect_paths(pos, neg, out);
                neg.pop();
            }
        }
    }
}
