//! Nodes: reference-identified lazy wrappers around descriptors.
//!
//! A [`Node`] is a triple `(id, state, generator)`. The id is globally unique and
//! is the only thing ever compared; the state maps recursion-variable
//! symbols to generators; the generator produces one descriptor layer when
//! the node is stepped. Cyclic definitions work because stepping replaces
//! recursion variables with nodes that share the same state instead of
//! expanding them.
//!
//! A node, once constructed, carries all state needed to be stepped again.
//! Replacement nodes are cached per state so that stepping the same state
//! twice embeds identity-equal nodes; the memoized traversals in [`memo`]
//! rely on that stability to terminate on cyclic types.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use crate::base::{NodeId, Sym};
use crate::descr::Descr;
use crate::syntax::{Presence, TypeExpr};

mod builder;
mod eval;
mod memo;

pub use builder::{build_recursive, eval_expr};
pub(crate) use memo::Seen;

/// A generator: one descriptor layer, produced on demand from the state.
///
/// Generators are tagged variants rather than closures so that nodes can be
/// cloned, debugged and hashed freely.
#[derive(Debug, Clone)]
pub enum Gen {
    /// A constant descriptor; ignores the state.
    Const(Arc<Descr>),
    /// A type expression evaluated against the state.
    Expr(Arc<TypeExpr>),
    /// The inner generator's result, widened with the `not_set` marker.
    /// Used for optional map fields.
    OrAbsent(Box<Gen>),
}

impl Gen {
    pub(crate) fn apply(&self, state: &RecState) -> Descr {
        match self {
            Gen::Const(descr) => (**descr).clone(),
            Gen::Expr(expr) => eval::eval(expr, state),
            Gen::OrAbsent(inner) => inner.apply(state).union(&Descr::not_set()),
        }
    }
}

/// Shared state of a system of recursive equations.
///
/// Immutable except for the replacement-node cache, which exists so that
/// every stepping of the same state embeds the same node for the same
/// expression. The cache is the only lock in the library and is
/// uncontended in single-threaded use.
#[derive(Clone)]
pub struct RecState(Arc<StateInner>);

struct StateInner {
    gens: IndexMap<Sym, Gen>,
    replacements: Mutex<FxHashMap<(TypeExpr, Presence), Node>>,
}

impl RecState {
    /// The state of a closed (non-recursive) node.
    pub fn empty() -> Self {
        Self::new(IndexMap::new())
    }

    pub(crate) fn new(gens: IndexMap<Sym, Gen>) -> Self {
        RecState(Arc::new(StateInner {
            gens,
            replacements: Mutex::new(FxHashMap::default()),
        }))
    }

    pub(crate) fn generator(&self, name: &Sym) -> Option<&Gen> {
        self.0.gens.get(name)
    }

    /// The node standing in for `expr` wherever this state embeds it as a
    /// map-field value. Cached: the same `(expr, presence)` always yields
    /// the identical node.
    pub(crate) fn replacement(&self, expr: &TypeExpr, presence: Presence) -> Node {
        let key = (expr.clone(), presence);
        let mut cache = self.0.replacements.lock();
        if let Some(node) = cache.get(&key) {
            return node.clone();
        }
        let generator = match presence {
            Presence::Required => Gen::Expr(Arc::new(expr.clone())),
            Presence::Optional => Gen::OrAbsent(Box::new(Gen::Expr(Arc::new(expr.clone())))),
            Presence::Absent => Gen::Const(Arc::new(Descr::not_set())),
        };
        let node = Node {
            id: NodeId::fresh(),
            state: self.clone(),
            generator,
        };
        cache.insert(key, node.clone());
        node
    }
}

impl fmt::Debug for RecState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RecState")
            .field(&self.0.gens.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// A lazily-stepped type.
#[derive(Debug, Clone)]
pub struct Node {
    id: NodeId,
    state: RecState,
    generator: Gen,
}

impl Node {
    /// Wrap a generator over a state into a fresh node.
    pub fn make(state: RecState, generator: Gen) -> Self {
        Node {
            id: NodeId::fresh(),
            state,
            generator,
        }
    }

    /// Wrap a descriptor into a constant node.
    pub fn fresh(descr: Descr) -> Self {
        Self::make(RecState::empty(), Gen::Const(Arc::new(descr)))
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Evaluate one layer: the generator applied to the state. Embedded
    /// recursion points come back as self-contained nodes.
    pub fn step(&self) -> Descr {
        self.generator.apply(&self.state)
    }

    /// The node for this node's value widened with `not_set`.
    pub(crate) fn or_absent(&self) -> Node {
        Self::make(self.state.clone(), Gen::OrAbsent(Box::new(self.generator.clone())))
    }

    pub fn union(&self, other: &Node) -> Node {
        Node::fresh(self.step().union(&other.step()))
    }

    pub fn intersection(&self, other: &Node) -> Node {
        Node::fresh(self.step().intersection(&other.step()))
    }

    pub fn difference(&self, other: &Node) -> Node {
        Node::fresh(self.step().difference(&other.step()))
    }

    pub fn negation(&self) -> Node {
        Node::fresh(self.step().negation())
    }

    /// Whether the denoted set is empty. Terminates on cyclic definitions:
    /// revisited nodes are assumed empty unless contradicted, realizing the
    /// greatest-fixed-point semantics.
    pub fn is_empty(&self) -> bool {
        memo::node_empty(self, &mut Seen::default())
    }

    pub fn is_subtype_of(&self, other: &Node) -> bool {
        self.step().is_subtype_of(&other.step())
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl std::hash::Hash for Node {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.id.cmp(&other.id)
    }
}

impl From<Descr> for Node {
    fn from(descr: Descr) -> Self {
        Node::fresh(descr)
    }
}

impl From<&Descr> for Node {
    fn from(descr: &Descr) -> Self {
        Node::fresh(descr.clone())
    }
}
