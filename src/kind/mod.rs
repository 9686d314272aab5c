//! Kind algebra: per-kind representations with pointwise set operations.
//!
//! Indivisible kinds live in a fixed-width [`Bitmap`]; atoms get the
//! finite-union / cofinite-negation representation of [`AtomSet`]. Both are
//! closed under union, intersection and difference, and both collapse to
//! "kind absent" when an operation produces the empty set of the kind.

mod atoms;
mod bitmap;

pub use atoms::AtomSet;
pub use bitmap::{BasicKind, Bitmap};
