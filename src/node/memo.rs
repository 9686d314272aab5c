//! Memoization for coinductive traversals.
//!
//! Emptiness over cyclic types is decided against a per-call set of
//! assumptions: a node id or map BDD that is revisited while its own check
//! is in flight is assumed empty (the coinductive unit). Assumptions that
//! survive are kept as proven-empty facts; an assumption contradicted by a
//! concrete witness is retracted so later queries recompute it.

use rustc_hash::FxHashSet;

use crate::base::NodeId;
use crate::map::MapBdd;

use super::Node;

/// The seen-set threaded through one top-level emptiness check.
#[derive(Default)]
pub(crate) struct Seen {
    nodes: FxHashSet<NodeId>,
    maps: FxHashSet<MapBdd>,
}

impl Seen {
    /// Begin checking a node. Returns `false` when the node is already
    /// assumed (or known) empty.
    pub(crate) fn visit_node(&mut self, id: NodeId) -> bool {
        self.nodes.insert(id)
    }

    pub(crate) fn retract_node(&mut self, id: NodeId) {
        self.nodes.remove(&id);
    }

    /// Begin checking a map BDD, keyed by structural identity. Returns
    /// `false` when the BDD is already assumed (or known) empty.
    pub(crate) fn visit_map(&mut self, bdd: &MapBdd) -> bool {
        if self.maps.contains(bdd) {
            return false;
        }
        self.maps.insert(bdd.clone());
        true
    }

    pub(crate) fn retract_map(&mut self, bdd: &MapBdd) {
        self.maps.remove(bdd);
    }
}

/// Emptiness of a node under the current assumptions.
pub(crate) fn node_empty(node: &Node, seen: &mut Seen) -> bool {
    if !seen.visit_node(node.id()) {
        return true;
    }
    let empty = node.step().is_empty_with(seen);
    if !empty {
        seen.retract_node(node.id());
    }
    empty
}
