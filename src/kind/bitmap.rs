//! The bitmap kind: a fixed-width bitset over indivisible basic kinds.

use std::fmt;
use std::ops::{BitAnd, BitOr};

/// One indivisible basic kind.
///
/// `NotSet` is second-class: it encodes "this map key may be absent" inside
/// map-field value types and must never escape into a user-visible type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasicKind {
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
    NotSet,
}

impl BasicKind {
    /// Every basic kind, in rendering order.
    pub const ALL: [BasicKind; 11] = [
        BasicKind::Binary,
        BasicKind::EmptyList,
        BasicKind::Integer,
        BasicKind::Float,
        BasicKind::Pid,
        BasicKind::Port,
        BasicKind::Reference,
        BasicKind::NonEmptyList,
        BasicKind::Tuple,
        BasicKind::Fun,
        BasicKind::NotSet,
    ];

    fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

/// A set of indivisible basic kinds.
///
/// Union is bitwise or, intersection is bitwise and, difference is
/// `a & !b`. The empty bitmap denotes kind absence at the descriptor level.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Bitmap(u16);

impl Bitmap {
    pub const EMPTY: Bitmap = Bitmap(0);

    pub const BINARY: Bitmap = Bitmap(1 << BasicKind::Binary as u16);
    pub const EMPTY_LIST: Bitmap = Bitmap(1 << BasicKind::EmptyList as u16);
    pub const INTEGER: Bitmap = Bitmap(1 << BasicKind::Integer as u16);
    pub const FLOAT: Bitmap = Bitmap(1 << BasicKind::Float as u16);
    pub const PID: Bitmap = Bitmap(1 << BasicKind::Pid as u16);
    pub const PORT: Bitmap = Bitmap(1 << BasicKind::Port as u16);
    pub const REFERENCE: Bitmap = Bitmap(1 << BasicKind::Reference as u16);
    pub const NON_EMPTY_LIST: Bitmap = Bitmap(1 << BasicKind::NonEmptyList as u16);
    pub const TUPLE: Bitmap = Bitmap(1 << BasicKind::Tuple as u16);
    pub const FUN: Bitmap = Bitmap(1 << BasicKind::Fun as u16);

    /// Map-field marker for "key may be absent". Excluded from [`Bitmap::TOP`].
    pub const NOT_SET: Bitmap = Bitmap(1 << BasicKind::NotSet as u16);

    /// Every user-visible basic kind.
    pub const TOP: Bitmap = Bitmap(
        Bitmap::BINARY.0
            | Bitmap::EMPTY_LIST.0
            | Bitmap::INTEGER.0
            | Bitmap::FLOAT.0
            | Bitmap::PID.0
            | Bitmap::PORT.0
            | Bitmap::REFERENCE.0
            | Bitmap::NON_EMPTY_LIST.0
            | Bitmap::TUPLE.0
            | Bitmap::FUN.0,
    );

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn contains(self, other: Bitmap) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn union(self, other: Bitmap) -> Bitmap {
        Bitmap(self.0 | other.0)
    }

    pub fn intersection(self, other: Bitmap) -> Bitmap {
        Bitmap(self.0 & other.0)
    }

    pub fn difference(self, other: Bitmap) -> Bitmap {
        Bitmap(self.0 & !other.0)
    }

    /// The set bits, in the fixed rendering order.
    pub fn iter(self) -> impl Iterator<Item = BasicKind> {
        BasicKind::ALL
            .into_iter()
            .filter(move |kind| self.0 & kind.bit() != 0)
    }
}

impl BitOr for Bitmap {
    type Output = Bitmap;

    fn bitor(self, rhs: Bitmap) -> Bitmap {
        self.union(rhs)
    }
}

impl BitAnd for Bitmap {
    type Output = Bitmap;

    fn bitand(self, rhs: Bitmap) -> Bitmap {
        self.intersection(rhs)
    }
}

impl fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
