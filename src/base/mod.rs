//! Foundation types for the settype engine.
//!
//! This module provides fundamental types used throughout the library:
//! - [`NodeId`] - Unique node identities
//! - [`Sym`] - Atom, map-key and recursion-variable symbols
//! - [`TypeError`] - Typed errors for domain misuse
//!
//! This module has NO dependencies on other settype modules.

mod error;
mod node_id;

pub use error::TypeError;
pub use node_id::NodeId;

/// An atom, map key, or recursion-variable symbol.
///
/// `SmolStr` keeps short symbols inline and clones in O(1), which matters
/// because symbols are copied into every map literal they occur in.
pub type Sym = smol_str::SmolStr;
