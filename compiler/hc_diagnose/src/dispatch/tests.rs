#![allow(
    clippy::unwrap_used,
    reason = "test code uses unwrap for concise assertions"
)]

use hc_sign::{Sign, SignSets};
use pretty_assertions::assert_eq;

use super::{Diagnoser, DispatchTable, TableError};

fn standard() -> DispatchTable {
    DispatchTable::build(&SignSets::standard()).unwrap()
}

#[test]
fn every_sign_set_member_has_a_diagnoser() {
    let sets = SignSets::standard();
    let table = standard();
    let members = sets
        .origin_isinstanceable
        .iter()
        .chain(sets.sequence_args_1)
        .chain(sets.union);
    for &sign in members {
        assert!(table.get(sign).is_some(), "{sign:?} has no diagnoser");
    }
}

#[test]
fn standard_table_covers_all_signs() {
    assert_eq!(standard().signs().collect::<Vec<_>>(), Sign::ALL.to_vec());
}

#[test]
fn specialised_sets_replace_origin_instance() {
    let table = standard();
    assert_eq!(table.get(Sign::List), Some(Diagnoser::Sequence));
    assert_eq!(table.get(Sign::MutableSequence), Some(Diagnoser::Sequence));
    assert_eq!(table.get(Sign::Optional), Some(Diagnoser::Union));
    assert_eq!(table.get(Sign::Dict), Some(Diagnoser::OriginInstance));
    assert_eq!(table.get(Sign::Class), Some(Diagnoser::OriginInstance));
}

#[test]
fn overrides_win_over_sign_sets() {
    let table = standard();
    assert_eq!(table.get(Sign::Tuple), Some(Diagnoser::Tuple));
    assert_eq!(table.get(Sign::Type), Some(Diagnoser::Subclass));
    assert_eq!(table.get(Sign::Any), Some(Diagnoser::Ignorable));
    assert_eq!(table.get(Sign::Generic), Some(Diagnoser::Generic));
}

#[test]
fn overrides_apply_even_without_sign_sets() {
    let empty = SignSets {
        origin_isinstanceable: &[],
        sequence_args_1: &[],
        union: &[],
    };
    let table = DispatchTable::build(&empty).unwrap();
    assert_eq!(table.get(Sign::Class), None);
    assert_eq!(table.get(Sign::List), None);
    assert_eq!(table.get(Sign::Literal), Some(Diagnoser::Literal));
    assert_eq!(table.signs().count(), 8);
}

#[test]
fn sign_in_two_specialised_sets_is_rejected() {
    let conflicting = SignSets {
        origin_isinstanceable: &[],
        sequence_args_1: &[Sign::List, Sign::Union],
        union: &[Sign::Union],
    };
    assert_eq!(
        DispatchTable::build(&conflicting).unwrap_err(),
        TableError::Conflict {
            sign: Sign::Union,
            first: "sequence",
            second: "union",
        }
    );
}

#[test]
fn diagnoser_names_are_distinct() {
    let names: std::collections::HashSet<_> = [
        Diagnoser::OriginInstance,
        Diagnoser::Sequence,
        Diagnoser::Union,
        Diagnoser::Annotated,
        Diagnoser::ForwardRef,
        Diagnoser::Generic,
        Diagnoser::Literal,
        Diagnoser::NoReturn,
        Diagnoser::Tuple,
        Diagnoser::Subclass,
        Diagnoser::Ignorable,
    ]
    .into_iter()
    .map(Diagnoser::name)
    .collect();
    assert_eq!(names.len(), 11);
}
