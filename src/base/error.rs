//! Error types for descriptor and node operations.

use thiserror::Error;

use super::Sym;

/// Errors raised for domain misuse of the public surface.
///
/// These are programmer errors: none of them is retried, and operations are
/// total on well-typed inputs. Internal invariant violations (ill-ordered
/// BDD nodes, fieldless-literal analysis applied to a literal with named
/// fields) panic instead; they indicate a bug in the library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    /// A map query was applied to a descriptor that is not a map type.
    #[error("expected a map type, got {0}")]
    BadMap(String),

    /// A type expression referenced a recursion variable that is not
    /// defined by the enclosing equation system.
    #[error("unknown recursion variable: {0}")]
    UnknownVariable(Sym),

    /// A recursion variable reaches itself without crossing a map field.
    /// Unguarded equations such as `x = x or integer()` have no coinductive
    /// reading and are rejected at build time.
    #[error("recursion variable {0} is not guarded by a map field")]
    UnguardedRecursion(Sym),
}

impl TypeError {
    /// Create a [`TypeError::BadMap`] from a rendered type.
    pub fn bad_map(rendered: impl Into<String>) -> Self {
        Self::BadMap(rendered.into())
    }
}
