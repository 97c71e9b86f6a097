//! Sign → diagnoser dispatch.
//!
//! The table is filled in two phases:
//!
//! 1. Every sign in a generic sign-set gets that set's generic diagnoser
//!    (origin-instance first, then the sequence and union sets).
//! 2. Explicit overrides for signs that need specific handling replace
//!    whatever phase 1 assigned.
//!
//! Phase 2 must run after phase 1: `Tuple` and `Type` sit in the
//! isinstanceable set but have their own diagnosers.

use hc_sign::{Sign, SignSets};
use thiserror::Error;
use tracing::debug;

use crate::context::{DiagnoseResult, DiagnosisContext};
use crate::diagnosers::{
    annotated, forward_ref, generic, instance, literal, no_return, sequence, subclass, tuple,
    union,
};

/// A diagnosis strategy for one family of signs.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Diagnoser {
    OriginInstance,
    Sequence,
    Union,
    Annotated,
    ForwardRef,
    Generic,
    Literal,
    NoReturn,
    Tuple,
    Subclass,
    Ignorable,
}

impl Diagnoser {
    /// Run this diagnoser against `ctx`.
    pub fn diagnose(self, ctx: &DiagnosisContext<'_>) -> DiagnoseResult {
        match self {
            Diagnoser::OriginInstance => instance::diagnose_origin_instance(ctx),
            Diagnoser::Sequence => sequence::diagnose_sequence(ctx),
            Diagnoser::Union => union::diagnose_union(ctx),
            Diagnoser::Annotated => annotated::diagnose_annotated(ctx),
            Diagnoser::ForwardRef => forward_ref::diagnose_forward_ref(ctx),
            Diagnoser::Generic => generic::diagnose_generic(ctx),
            Diagnoser::Literal => literal::diagnose_literal(ctx),
            Diagnoser::NoReturn => no_return::diagnose_no_return(ctx),
            Diagnoser::Tuple => tuple::diagnose_tuple(ctx),
            Diagnoser::Subclass => subclass::diagnose_subclass(ctx),
            Diagnoser::Ignorable => Ok(None),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Diagnoser::OriginInstance => "origin-instance",
            Diagnoser::Sequence => "sequence",
            Diagnoser::Union => "union",
            Diagnoser::Annotated => "annotated",
            Diagnoser::ForwardRef => "forward-ref",
            Diagnoser::Generic => "generic",
            Diagnoser::Literal => "literal",
            Diagnoser::NoReturn => "no-return",
            Diagnoser::Tuple => "tuple",
            Diagnoser::Subclass => "subclass",
            Diagnoser::Ignorable => "ignorable",
        }
    }
}

/// Signs whose diagnoser is fixed regardless of sign-set membership.
const OVERRIDES: &[(Sign, Diagnoser)] = &[
    (Sign::Annotated, Diagnoser::Annotated),
    (Sign::ForwardRef, Diagnoser::ForwardRef),
    (Sign::Generic, Diagnoser::Generic),
    (Sign::Literal, Diagnoser::Literal),
    (Sign::NoReturn, Diagnoser::NoReturn),
    (Sign::Tuple, Diagnoser::Tuple),
    (Sign::Type, Diagnoser::Subclass),
    (Sign::Any, Diagnoser::Ignorable),
];

/// Sign-sets were inconsistent when building a [`DispatchTable`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("hint sign {sign} is in both the {first} and {second} sign-sets")]
    Conflict {
        sign: Sign,
        first: &'static str,
        second: &'static str,
    },
}

/// Immutable sign → diagnoser mapping.
#[derive(Clone, Debug)]
pub struct DispatchTable {
    entries: [Option<Diagnoser>; Sign::COUNT],
}

impl DispatchTable {
    /// Build the table from `sets` plus the fixed overrides.
    pub fn build(sets: &SignSets) -> Result<Self, TableError> {
        let mut entries = [None; Sign::COUNT];

        // Phase 1a
        for &sign in sets.origin_isinstanceable {
            entries[sign.index()] = Some(Diagnoser::OriginInstance);
        }

        // Phase 1b
        let mut claimed: [Option<&'static str>; Sign::COUNT] = [None; Sign::COUNT];
        let specialised = [
            ("sequence", sets.sequence_args_1, Diagnoser::Sequence),
            ("union", sets.union, Diagnoser::Union),
        ];
        for (set_name, signs, diagnoser) in specialised {
            for &sign in signs {
                if let Some(first) = claimed[sign.index()] {
                    if first != set_name {
                        return Err(TableError::Conflict {
                            sign,
                            first,
                            second: set_name,
                        });
                    }
                }
                claimed[sign.index()] = Some(set_name);
                entries[sign.index()] = Some(diagnoser);
            }
        }

        // Phase 2
        for &(sign, diagnoser) in OVERRIDES {
            entries[sign.index()] = Some(diagnoser);
        }

        let table = DispatchTable { entries };
        debug!(covered = table.signs().count(), "dispatch table built");
        Ok(table)
    }

    /// Diagnoser registered for `sign`.
    pub fn get(&self, sign: Sign) -> Option<Diagnoser> {
        self.entries[sign.index()]
    }

    /// Signs with a diagnoser, in sign order.
    pub fn signs(&self) -> impl Iterator<Item = Sign> + '_ {
        Sign::ALL
            .into_iter()
            .filter(|&sign| self.entries[sign.index()].is_some())
    }
}

#[cfg(test)]
mod tests;
