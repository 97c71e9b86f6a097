//! Sign-sets shared with the check compiler.
//!
//! The compiler generates one code shape per set; the dispatch table must
//! assign the matching diagnoser to every member so both sides agree on
//! which hints are checked how.

use crate::Sign;

/// Read-only sign groupings supplied by the check compiler.
#[derive(Clone, Copy, Debug)]
pub struct SignSets {
    /// Signs whose hints are checked (at least) by `isinstance` against an
    /// origin class.
    pub origin_isinstanceable: &'static [Sign],
    /// Sequences subscripted by exactly one item hint.
    pub sequence_args_1: &'static [Sign],
    /// Unions of branch hints.
    pub union: &'static [Sign],
}

impl SignSets {
    /// The sets used by the standard check compiler.
    pub const fn standard() -> Self {
        SignSets {
            origin_isinstanceable: &[
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
            ],
            sequence_args_1: &[Sign::List, Sign::Sequence, Sign::MutableSequence],
            union: &[Sign::Union, Sign::Optional],
        }
    }
}

impl Default for SignSets {
    fn default() -> Self {
        Self::standard()
    }
}
