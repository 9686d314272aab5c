//! # settype-base
//!
//! Core library for set-theoretic type representation, gradual typing, and
//! subtyping over recursive types.
//!
//! Types of a dynamically-typed language are modeled as set-theoretic
//! expressions (unions, intersections, differences, complements) over basic
//! kinds and map constructors. A descriptor may carry an explicit `dynamic`
//! component for gradual typing, and cyclic definitions such as
//! `list = %{head: integer(), tail: list, ..} or :nil` are supported through
//! lazily-stepped nodes with coinductive, memoized traversals.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! quote     → rendering descriptors to TypeExpr / strings
//!   ↓
//! node      → Node identity, recursive builder, memoized traversals
//!   ↓
//! descr     → Descr, set operations, gradual rules, map queries
//!   ↓
//! map       → map literals, split-on-key, pair normalization, emptiness
//!   ↓
//! bdd       → generic binary decision diagrams
//!   ↓
//! kind      → Bitmap and AtomSet algebra
//!   ↓
//! syntax    → TypeExpr, the neutral type-expression AST
//!   ↓
//! base      → Primitives (NodeId, Sym, TypeError)
//! ```

// ============================================================================
// MODULES (dependency order: base → syntax → kind → bdd → map → descr → node → quote)
// ============================================================================

/// Foundation types: NodeId, Sym, TypeError
pub mod base;

/// Neutral type-expression AST shared by the builder and quoting
pub mod syntax;

/// Kind algebra: bitmap and atom kind values
pub mod kind;

/// Generic BDD engine over totally ordered literals
pub mod bdd;

/// Map literals, split-on-key normalization, map emptiness
pub mod map;

/// Descriptors: constructors, set operations, gradual rules, map queries
pub mod descr;

/// Nodes: lazy recursive wrappers, the recursive builder, traversals
pub mod node;

/// Quoting: rendering descriptors back to `TypeExpr`
pub mod quote;

// Re-export foundation types
pub use base::{NodeId, Sym, TypeError};

// Re-export the main working set
pub use descr::{Descr, MapField, MapTag};
pub use node::{Node, build_recursive, eval_expr};
pub use syntax::{FieldExpr, Presence, TypeExpr};
