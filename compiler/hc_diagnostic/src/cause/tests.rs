use pretty_assertions::assert_eq;

use super::*;

fn not_int(pith: &str) -> Cause {
    Cause::new(CauseKind::NotInstance {
        pith: pith.to_owned(),
        expected: vec!["int".to_owned()],
    })
}

#[test]
fn leaf_renders_alone() {
    assert_eq!(not_int("str 'x'").render(), "str 'x' not instance of int");
}

#[test]
fn path_renders_outermost_first() {
    let cause = not_int("str 'x'")
        .within(PathSegment::Index {
            container: "list".to_owned(),
            index: 2,
        })
        .within(PathSegment::GenericBase {
            base: "typing.List[typing.List[int]]".to_owned(),
        })
        .within(PathSegment::Index {
            container: "tuple".to_owned(),
            index: 0,
        });

    assert_eq!(
        cause.render(),
        "tuple index 0 item generic base typing.List[typing.List[int]] \
         list index 2 item str 'x' not instance of int"
    );
    assert_eq!(cause.indices(), [0, 2]);
}

#[test]
fn long_unwind_keeps_outermost_first() {
    let cause = (0..500).fold(not_int("str 'x'"), |cause, index| {
        cause.within(PathSegment::Index {
            container: "list".to_owned(),
            index,
        })
    });

    let expected: Vec<usize> = (0..500).rev().collect();
    assert_eq!(cause.indices(), expected);
    assert_eq!(cause.path().len(), 500);
    assert!(cause.render().starts_with("list index 499 item list index 498 item "));
}

#[test]
fn literal_mismatch_is_a_plain_disjunction() {
    let cause = Cause::new(CauseKind::LiteralMismatch {
        pith: "3".to_owned(),
        literals: vec!["1".to_owned(), "2".to_owned()],
    });
    assert_eq!(cause.to_string(), "3 != 1 or 2");
}

#[test]
fn tuple_length_names_both_lengths() {
    let cause = Cause::new(CauseKind::TupleLength {
        pith: "tuple (1,)".to_owned(),
        found: 1,
        expected: 2,
    });
    assert_eq!(cause.render(), "tuple (1,) length 1 != 2");
}

#[test]
fn union_mismatch_uses_serial_disjunction() {
    let render = |expected: &[&str]| {
        Cause::new(CauseKind::UnionMismatch {
            pith: "float 1.5".to_owned(),
            expected: expected.iter().map(|s| (*s).to_owned()).collect(),
        })
        .render()
    };
    assert_eq!(render(&["int"]), "float 1.5 not int");
    assert_eq!(render(&["int", "str"]), "float 1.5 not int or str");
    assert_eq!(
        render(&["int", "str", "bytes"]),
        "float 1.5 not int, str, or bytes"
    );
}

#[test]
fn validator_diagnosis_follows_on_new_line() {
    let cause = Cause::new(CauseKind::ValidatorRejected {
        pith: "int -1".to_owned(),
        validator: "Is[x > 0]".to_owned(),
        diagnosis: "    False == Is[x > 0].".to_owned(),
    });
    assert_eq!(
        cause.render(),
        "int -1 violates validator Is[x > 0]:\n    False == Is[x > 0]."
    );
}
