//! Globally unique node identities.

use std::fmt;

use uuid::Uuid;

/// Identity of a [`crate::node::Node`].
///
/// Ids are drawn from a process-wide source whose only contract is
/// uniqueness: equality is O(1), hashing is uniform, and an id is never
/// recycled. Nodes are compared exclusively by id, never structurally.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(Uuid);

impl NodeId {
    /// Allocate a fresh, never-before-seen id.
    ///
    /// Safe for concurrent allocation; no two calls return the same id.
    pub fn fresh() -> Self {
        NodeId(Uuid::new_v4())
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Full UUIDs drown debug output; the first group is enough to tell
        // nodes apart in a trace.
        let s = self.0.as_simple().to_string();
        write!(f, "NodeId({})", &s[..8])
    }
}
