//! Map types: literals, split-on-key normalization, and emptiness.
//!
//! A map type is a BDD over [`MapLiteral`] labels. Deciding anything about
//! it — emptiness, the value type at a key, a rendering — goes through the
//! split-on-key normal form: a union of pairs `(value_at_key, rest_of_map)`
//! with pairwise-disjoint value components, computed per accepting path of
//! the BDD. Each split removes one key, so the recursion terminates; the
//! memoization in [`crate::node`] handles the cycles introduced by
//! recursive field nodes.

mod literal;
mod normalize;
mod pairs;
mod split;

pub use literal::MapLiteral;
pub(crate) use normalize::{all_keys, fetch_value, map_not_empty, normalize};

use crate::bdd::Bdd;

/// A map type: a BDD whose literals are map literals.
pub type MapBdd = Bdd<MapLiteral>;
