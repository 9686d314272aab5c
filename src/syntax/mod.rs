//! The neutral type-expression AST.
//!
//! [`TypeExpr`] is the exchange format at both ends of the engine: the
//! recursive builder consumes it (bodies of equation systems), and quoting
//! produces it (rendering of normalized descriptors). It carries no node
//! identities and no BDD structure, so it can be compared, hashed, printed
//! and re-evaluated freely.

use std::collections::BTreeSet;
use std::fmt;

use crate::base::Sym;

/// Whether a map type accepts keys beyond the declared ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MapTag {
    /// Additional keys are allowed (`%{a: integer(), ..}`).
    Open,
    /// Exactly the declared keys (`%{a: integer()}`).
    Closed,
}

/// Presence of a declared map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Presence {
    /// The key must be present.
    Required,
    /// The key may be absent (`if_set` in the quoted form).
    Optional,
    /// The key must be absent (`not_set` in the quoted form).
    Absent,
}

/// A declared map field: value expression plus presence marker.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldExpr {
    pub value: TypeExpr,
    pub presence: Presence,
}

impl FieldExpr {
    pub fn required(value: TypeExpr) -> Self {
        FieldExpr { value, presence: Presence::Required }
    }

    pub fn optional(value: TypeExpr) -> Self {
        FieldExpr { value, presence: Presence::Optional }
    }

    pub fn absent() -> Self {
        FieldExpr { value: TypeExpr::None, presence: Presence::Absent }
    }
}

/// A type expression.
///
/// Unions and intersections are n-ary; the builder flattens nothing and the
/// evaluator folds left-to-right, so `Union(vec![])` means `none()` and
/// `Inter(vec![])` means `term()`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeExpr {
    /// The top type: every value.
    Term,
    /// The bottom type: no value.
    None,
    /// The gradual top: `dynamic()`.
    Dynamic,

    // Indivisible basic kinds.
    Binary,
    EmptyList,
    Integer,
    Float,
    Pid,
    Port,
    Reference,
    NonEmptyList,
    Tuple,
    Fun,

    /// Every atom.
    AtomTop,
    /// Exactly the atoms in the set.
    Atom(BTreeSet<Sym>),

    /// A map type over the declared fields.
    Map { fields: Vec<(Sym, FieldExpr)>, tag: MapTag },

    Union(Vec<TypeExpr>),
    Inter(Vec<TypeExpr>),
    Not(Box<TypeExpr>),

    /// A recursion variable, bound by the enclosing equation system.
    Var(Sym),
}

impl TypeExpr {
    /// A single-atom type.
    pub fn atom(name: impl Into<Sym>) -> Self {
        TypeExpr::Atom(BTreeSet::from([name.into()]))
    }

    /// A finite atom union.
    pub fn atoms<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Sym>,
    {
        TypeExpr::Atom(names.into_iter().map(Into::into).collect())
    }

    /// Binary union, flattening nothing.
    pub fn or(self, other: TypeExpr) -> Self {
        TypeExpr::Union(vec![self, other])
    }

    /// Binary intersection.
    pub fn and(self, other: TypeExpr) -> Self {
        TypeExpr::Inter(vec![self, other])
    }

    /// Complement.
    pub fn negated(self) -> Self {
        TypeExpr::Not(Box::new(self))
    }

    /// A recursion variable reference.
    pub fn var(name: impl Into<Sym>) -> Self {
        TypeExpr::Var(name.into())
    }

    /// Iterate over every recursion variable mentioned in this expression.
    pub fn visit_vars(&self, f: &mut impl FnMut(&Sym, bool)) {
        self.visit_vars_inner(f, false);
    }

    // The `guarded` flag records whether a map field lies between the root
    // and the current position.
    fn visit_vars_inner(&self, f: &mut impl FnMut(&Sym, bool), guarded: bool) {
        match self {
            TypeExpr::Var(name) => f(name, guarded),
            TypeExpr::Map { fields, .. } => {
                for (_, field) in fields {
                    field.value.visit_vars_inner(f, true);
                }
            }
            TypeExpr::Union(items) | TypeExpr::Inter(items) => {
                for item in items {
                    item.visit_vars_inner(f, guarded);
                }
            }
            TypeExpr::Not(inner) => inner.visit_vars_inner(f, guarded),
            _ => {}
        }
    }
}

// ============================================================================
// DISPLAY
// ============================================================================

// Precedence levels: union < intersection < negation < everything else.
const PREC_UNION: u8 = 1;
const PREC_INTER: u8 = 2;
const PREC_NOT: u8 = 3;
const PREC_ATOMIC: u8 = 4;

impl TypeExpr {
    fn precedence(&self) -> u8 {
        match self {
            TypeExpr::Union(items) if items.len() > 1 => PREC_UNION,
            TypeExpr::Atom(names) if names.len() > 1 => PREC_UNION,
            TypeExpr::Inter(items) if items.len() > 1 => PREC_INTER,
            TypeExpr::Not(_) => PREC_NOT,
            _ => PREC_ATOMIC,
        }
    }

    fn fmt_prec(&self, f: &mut fmt::Formatter<'_>, min: u8) -> fmt::Result {
        let prec = self.precedence();
        let parens = prec < min;
        if parens {
            write!(f, "(")?;
        }
        match self {
            TypeExpr::Term => write!(f, "term()")?,
            TypeExpr::None => write!(f, "none()")?,
            TypeExpr::Dynamic => write!(f, "dynamic()")?,
            TypeExpr::Binary => write!(f, "binary()")?,
            TypeExpr::EmptyList => write!(f, "empty_list()")?,
            TypeExpr::Integer => write!(f, "integer()")?,
            TypeExpr::Float => write!(f, "float()")?,
            TypeExpr::Pid => write!(f, "pid()")?,
            TypeExpr::Port => write!(f, "port()")?,
            TypeExpr::Reference => write!(f, "reference()")?,
            TypeExpr::NonEmptyList => write!(f, "non_empty_list()")?,
            TypeExpr::Tuple => write!(f, "tuple()")?,
            TypeExpr::Fun => write!(f, "fun()")?,
            TypeExpr::AtomTop => write!(f, "atom()")?,
            TypeExpr::Atom(names) => {
                if names.is_empty() {
                    write!(f, "none()")?;
                } else {
                    for (i, name) in names.iter().enumerate() {
                        if i > 0 {
                            write!(f, " or ")?;
                        }
                        write!(f, ":{name}")?;
                    }
                }
            }
            TypeExpr::Map { fields, tag } => {
                write!(f, "%{{")?;
                for (i, (key, field)) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    match field.presence {
                        Presence::Required => write!(f, "{key}: {}", field.value)?,
                        Presence::Optional => write!(f, "{key}: if_set({})", field.value)?,
                        Presence::Absent => write!(f, "{key}: not_set()")?,
                    }
                }
                if *tag == MapTag::Open {
                    if !fields.is_empty() {
                        write!(f, ", ")?;
                    }
                    write!(f, "..")?;
                }
                write!(f, "}}")?;
            }
            TypeExpr::Union(items) => match items.as_slice() {
                [] => write!(f, "none()")?,
                [single] => single.fmt_prec(f, min)?,
                items => {
                    for (i, item) in items.iter().enumerate() {
                        if i > 0 {
                            write!(f, " or ")?;
                        }
                        item.fmt_prec(f, PREC_UNION + 1)?;
                    }
                }
            },
            TypeExpr::Inter(items) => match items.as_slice() {
                [] => write!(f, "term()")?,
                [single] => single.fmt_prec(f, min)?,
                items => {
                    for (i, item) in items.iter().enumerate() {
                        if i > 0 {
                            write!(f, " and ")?;
                        }
                        item.fmt_prec(f, PREC_INTER + 1)?;
                    }
                }
            },
            TypeExpr::Not(inner) => {
                write!(f, "not ")?;
                inner.fmt_prec(f, PREC_NOT + 1)?;
            }
            TypeExpr::Var(name) => write!(f, "{name}")?,
        }
        if parens {
            write!(f, ")")?;
        }
        Ok(())
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_prec(f, 0)
    }
}
