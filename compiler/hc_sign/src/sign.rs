//! The closed set of hint signs.

use std::fmt;

/// Canonical identity of a category of hints.
///
/// Discriminants are dense so a sign can index a dispatch array directly.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Sign {
    // === Instance checks ===
    /// Plain isinstanceable class (`int`, `pkg.Thing`).
    Class = 0,
    /// The `None` singleton.
    NoneType = 1,
    /// `Type[X]`: subclass check.
    Type = 2,

    // === Sequences ===
    List = 3,
    Sequence = 4,
    MutableSequence = 5,
    Tuple = 6,

    // === Other containers (shallow) ===
    Dict = 7,
    Mapping = 8,
    MutableMapping = 9,
    Set = 10,
    FrozenSet = 11,
    AbstractSet = 12,
    MutableSet = 13,
    Iterable = 14,
    Collection = 15,
    Container = 16,

    // === Combinators ===
    Union = 17,
    Optional = 18,
    Annotated = 19,
    Literal = 20,

    // === Special ===
    Any = 21,
    ForwardRef = 22,
    Generic = 23,
    NoReturn = 24,
}

impl Sign {
    /// Number of signs.
    pub const COUNT: usize = 25;

    /// All signs, in discriminant order.
    pub const ALL: [Sign; Self::COUNT] = [
        Sign::Class,
        Sign::NoneType,
        Sign::Type,
        Sign::List,
        Sign::Sequence,
        Sign::MutableSequence,
        Sign::Tuple,
        Sign::Dict,
        Sign::Mapping,
        Sign::MutableMapping,
        Sign::Set,
        Sign::FrozenSet,
        Sign::AbstractSet,
        Sign::MutableSet,
        Sign::Iterable,
        Sign::Collection,
        Sign::Container,
        Sign::Union,
        Sign::Optional,
        Sign::Annotated,
        Sign::Literal,
        Sign::Any,
        Sign::ForwardRef,
        Sign::Generic,
        Sign::NoReturn,
    ];

    /// Dense index in `0..COUNT`.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Get the name of this sign as a static string.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Class => "Class",
            Self::NoneType => "NoneType",
            Self::Type => "Type",
            Self::List => "List",
            Self::Sequence => "Sequence",
            Self::MutableSequence => "MutableSequence",
            Self::Tuple => "Tuple",
            Self::Dict => "Dict",
            Self::Mapping => "Mapping",
            Self::MutableMapping => "MutableMapping",
            Self::Set => "Set",
            Self::FrozenSet => "FrozenSet",
            Self::AbstractSet => "AbstractSet",
            Self::MutableSet => "MutableSet",
            Self::Iterable => "Iterable",
            Self::Collection => "Collection",
            Self::Container => "Container",
            Self::Union => "Union",
            Self::Optional => "Optional",
            Self::Annotated => "Annotated",
            Self::Literal => "Literal",
            Self::Any => "Any",
            Self::ForwardRef => "ForwardRef",
            Self::Generic => "Generic",
            Self::NoReturn => "NoReturn",
        }
    }

    /// Look up a sign by its name.
    pub fn from_name(name: &str) -> Option<Sign> {
        Self::ALL.into_iter().find(|sign| sign.name() == name)
    }
}

impl fmt::Debug for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sign::{}", self.name())
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// A sign must stay one byte.
const _: () = assert!(std::mem::size_of::<Sign>() == 1);
