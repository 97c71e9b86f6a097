#![allow(
    clippy::unwrap_used,
    reason = "test code uses unwrap for concise assertions"
)]

use std::sync::Arc;

use hc_diagnostic::{CauseKind, FatalError, ForwardRefError, InternalError, PathSegment};
use hc_ir::{builtins, Class, Hint, HintArg, Is, IsAll, Object, Validator, Value};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::sample_index;
use crate::test_helpers::{cause, diagnose, diagnose_sampled, fixtures, int, s};

fn int_hint() -> Hint {
    Hint::class(&builtins().int)
}

fn str_hint() -> Hint {
    Hint::class(&builtins().str_)
}

fn positive() -> Arc<dyn Validator> {
    Arc::new(Is::new("x > 0", |v| matches!(v, Value::Int(n) if *n > 0)))
}

fn even() -> Arc<dyn Validator> {
    Arc::new(Is::new("x % 2 == 0", |v| matches!(v, Value::Int(n) if n % 2 == 0)))
}

// === Origin instance ===

#[test]
fn builtin_class_mismatch() {
    assert_eq!(cause(int_hint(), &s("a")).render(), "str 'a' not instance of int");
}

#[test]
fn user_class_mismatch_and_subclass_match() {
    let f = fixtures();
    assert_eq!(
        cause(Hint::class(&f.widget), &int(1)).render(),
        "int 1 not instance of app.Widget"
    );
    let gadget = Value::Object(Object::new(&f.gadget));
    assert_eq!(diagnose(Hint::class(&f.widget), &gadget).unwrap(), None);
}

#[test]
fn none_hint_requires_none() {
    assert_eq!(
        cause(Hint::None, &int(1)).render(),
        "int 1 not instance of NoneType"
    );
    assert_eq!(diagnose(Hint::None, &Value::None).unwrap(), None);
}

#[test]
fn abstract_class_hints_check_instance_hood() {
    let b = builtins();
    assert_eq!(
        cause(Hint::class(&b.sequence), &int(1)).render(),
        "int 1 not instance of collections.abc.Sequence"
    );
    assert_eq!(diagnose(Hint::class(&b.sized), &s("abc")).unwrap(), None);
}

#[test]
fn bool_is_an_int_instance() {
    assert_eq!(diagnose(int_hint(), &Value::Bool(true)).unwrap(), None);
}

#[test]
fn dict_hint_checks_only_the_container() {
    let hint = Hint::dict(str_hint(), int_hint());
    assert_eq!(
        cause(hint.clone(), &Value::list([])).render(),
        "list [] not instance of dict"
    );
    let pith = Value::Dict(vec![(s("k"), s("not an int"))]);
    assert_eq!(diagnose(hint, &pith).unwrap(), None);
}

// === Sequences ===

#[test]
fn list_blames_first_failing_item() {
    let pith = Value::list([int(1), s("x"), int(3), s("y")]);
    let cause = cause(Hint::list(int_hint()), &pith);
    assert_eq!(cause.indices(), vec![1]);
    assert_eq!(
        cause.render(),
        "list index 1 item str 'x' not instance of int"
    );
}

#[test]
fn list_blames_sampled_item() {
    let pith = Value::list([int(1), s("x"), int(3), s("y")]);
    let hint = Hint::list(int_hint());

    let sampled = diagnose_sampled(hint.clone(), &pith, Some(7)).unwrap().unwrap();
    assert_eq!(sampled.indices(), vec![3]);

    // The compiled check sampled a valid item, so nothing is found.
    assert_eq!(diagnose_sampled(hint, &pith, Some(2)).unwrap(), None);
}

#[test]
fn string_items_are_one_character_strings() {
    let cause = cause(Hint::sequence(int_hint()), &s("ab"));
    assert_eq!(cause.render(), "str index 0 item str 'a' not instance of int");
}

#[test]
fn sequence_edge_cases_succeed() {
    let hint = Hint::list(int_hint());
    assert_eq!(diagnose(hint, &Value::list([])).unwrap(), None);
    let anything = Value::list([s("x"), Value::None]);
    assert_eq!(diagnose(Hint::list(Hint::any()), &anything).unwrap(), None);
    let bare = Hint::class(&builtins().list);
    assert_eq!(diagnose(bare, &anything).unwrap(), None);
}

#[test]
fn sequence_checks_origin_before_items() {
    let pith = Value::tuple([s("x")]);
    assert_eq!(
        cause(Hint::list(int_hint()), &pith).render(),
        "tuple ('x',) not instance of list"
    );
}

#[test]
fn nested_sequences_report_full_path() {
    let pith = Value::list([Value::list([int(1)]), Value::list([int(2), s("z")])]);
    let cause = cause(Hint::list(Hint::list(int_hint())), &pith);
    assert_eq!(cause.indices(), vec![1, 1]);
    assert_eq!(
        cause.render(),
        "list index 1 item list index 1 item str 'z' not instance of int"
    );
}

proptest! {
    #[test]
    fn sampled_index_matches_compiled_formula(random_int in any::<u64>(), len in 1usize..64) {
        let pith = Value::list((0..len).map(|i| s(&i.to_string())));
        let cause = diagnose_sampled(Hint::list(int_hint()), &pith, Some(random_int))
            .unwrap()
            .unwrap();
        prop_assert_eq!(cause.indices(), vec![sample_index(random_int, len)]);
        prop_assert_eq!(sample_index(random_int, len), usize::try_from(random_int % len as u64).unwrap());
    }

    #[test]
    fn unsampled_scan_blames_first_failure(prefix in 0usize..16, suffix in 0usize..16) {
        let items = (0..prefix)
            .map(|i| int(i64::try_from(i).unwrap()))
            .chain([s("bad")])
            .chain((0..suffix).map(|_| s("also bad")));
        let pith = Value::list(items);
        let cause = diagnose(Hint::list(int_hint()), &pith).unwrap().unwrap();
        prop_assert_eq!(cause.indices(), vec![prefix]);
    }
}

// === Tuples ===

#[test]
fn fixed_tuple_length_mismatch() {
    let hint = Hint::tuple([int_hint(), str_hint()]);
    let cause = cause(hint, &Value::tuple([int(1)]));
    assert_eq!(
        cause.kind(),
        &CauseKind::TupleLength {
            pith: "tuple (1,)".to_owned(),
            found: 1,
            expected: 2,
        }
    );
    assert!(cause.render().contains("1 != 2"));
}

#[test]
fn fixed_tuple_blames_position() {
    let hint = Hint::tuple([int_hint(), str_hint()]);
    let cause = cause(hint, &Value::tuple([int(1), int(2)]));
    assert_eq!(cause.indices(), vec![1]);
    assert_eq!(cause.render(), "tuple index 1 item int 2 not instance of str");
}

#[test]
fn fixed_tuple_skips_ignorable_positions() {
    let hint = Hint::tuple([Hint::any(), int_hint()]);
    let cause = cause(hint, &Value::tuple([s("x"), s("y")]));
    assert_eq!(cause.indices(), vec![1]);
}

#[test]
fn variadic_tuple_behaves_like_a_sequence() {
    let hint = Hint::tuple_variadic(int_hint());
    let pith = Value::tuple([int(1), s("x"), int(3)]);
    assert_eq!(cause(hint.clone(), &pith).indices(), vec![1]);
    let sampled = diagnose_sampled(hint, &pith, Some(4)).unwrap().unwrap();
    assert_eq!(sampled.indices(), vec![1]);
}

#[test]
fn empty_tuple_hint() {
    let hint = Hint::tuple_empty();
    assert_eq!(diagnose(hint.clone(), &Value::tuple([])).unwrap(), None);
    assert_eq!(
        cause(hint, &Value::tuple([int(1)])).render(),
        "tuple (1,) non-empty"
    );
}

#[test]
fn tuple_hint_requires_a_tuple() {
    let hint = Hint::tuple([int_hint()]);
    assert_eq!(
        cause(hint, &Value::list([int(1)])).render(),
        "list [1] not instance of tuple"
    );
}

// === Literals ===

#[test]
fn literal_mismatch_lists_alternatives() {
    let hint = Hint::literal([int(1), int(2)]);
    assert_eq!(cause(hint.clone(), &int(3)).render(), "3 != 1 or 2");
    assert_eq!(diagnose(hint, &int(2)).unwrap(), None);
}

#[test]
fn literal_requires_matching_type_not_just_equality() {
    let hint = Hint::literal([int(1)]);
    assert_eq!(cause(hint, &Value::Bool(true)).render(), "True != 1");
}

#[test]
fn literal_of_wrong_type_is_an_instance_failure() {
    let hint = Hint::literal([int(1), s("a")]);
    assert_eq!(
        cause(hint, &Value::Float(1.5)).render(),
        "float 1.5 not instance of int or str"
    );
}

// === Annotated ===

#[test]
fn annotated_checks_base_first() {
    let hint = Hint::annotated(int_hint(), [positive()]);
    assert_eq!(cause(hint, &s("a")).render(), "str 'a' not instance of int");
}

#[test]
fn annotated_reports_first_failing_validator() {
    let hint = Hint::annotated(int_hint(), [positive(), even()]);
    assert_eq!(diagnose(hint.clone(), &int(4)).unwrap(), None);

    assert_eq!(
        cause(hint.clone(), &int(-1)).render(),
        "int -1 violates validator Is[x > 0]:\n    False == Is[x > 0]."
    );
    let CauseKind::ValidatorRejected { validator, .. } = cause(hint, &int(3)).kind().clone()
    else {
        panic!("expected a validator cause");
    };
    assert_eq!(validator, "Is[x % 2 == 0]");
}

#[test]
fn annotated_validator_diagnosis_is_multiline() {
    let both: Arc<dyn Validator> = Arc::new(IsAll::new([positive(), even()]));
    let hint = Hint::annotated(int_hint(), [both]);
    let CauseKind::ValidatorRejected { diagnosis, .. } = cause(hint, &int(-3)).kind().clone()
    else {
        panic!("expected a validator cause");
    };
    assert_eq!(
        diagnosis,
        "    False == (\n        False == Is[x > 0].\n        False == Is[x % 2 == 0].\n    )."
    );
}

#[test]
fn annotated_with_non_validator_metadata_is_fatal() {
    let hint = Hint::alias(
        "typing.Annotated",
        [HintArg::Hint(int_hint()), HintArg::Value(s("doc"))],
    );
    let err = diagnose(hint, &int(1)).unwrap_err();
    assert!(matches!(
        err,
        FatalError::Internal(InternalError::NonConformingValidator { ref metadata, .. })
            if metadata == "'doc'"
    ));
}

// === Unions ===

#[test]
fn union_mismatch_lists_branches() {
    let hint = Hint::union([int_hint(), str_hint()]);
    assert_eq!(cause(hint.clone(), &Value::Float(1.5)).render(), "float 1.5 not int or str");
    assert_eq!(diagnose(hint, &s("ok")).unwrap(), None);
}

#[test]
fn union_prefers_branch_sharing_the_pith_shape() {
    let hint = Hint::union([Hint::list(int_hint()), str_hint()]);
    let cause = cause(hint, &Value::list([int(1), s("x")]));
    assert_eq!(cause.render(), "list index 1 item str 'x' not instance of int");
}

#[test]
fn union_prefers_annotated_branch_of_matching_base() {
    let hint = Hint::union([Hint::annotated(int_hint(), [positive()]), str_hint()]);
    let cause = cause(hint, &int(-2));
    assert!(matches!(cause.kind(), CauseKind::ValidatorRejected { .. }));
}

#[test]
fn optional_admits_none() {
    let hint = Hint::optional(int_hint());
    assert_eq!(diagnose(hint.clone(), &Value::None).unwrap(), None);
    assert_eq!(cause(hint, &s("a")).render(), "str 'a' not int or None");
}

#[test]
fn union_with_ignorable_branch_always_succeeds() {
    let hint = Hint::union([int_hint(), Hint::any()]);
    assert_eq!(diagnose(hint, &s("a")).unwrap(), None);
}

#[test]
fn union_with_three_branches_uses_serial_comma() {
    let hint = Hint::union([int_hint(), str_hint(), Hint::None]);
    assert_eq!(
        cause(hint, &Value::Float(0.5)).render(),
        "float 0.5 not int, str, or None"
    );
}

// === Generics ===

fn generic_fixture() -> (Class, Class) {
    let boxed = Class::builder("app", "Box").orig_base(Hint::generic()).build();
    let other = Class::builder("app", "Other").orig_base(Hint::generic()).build();
    let pair = Class::builder("app", "Pair")
        .base(&boxed)
        .orig_base(Hint::subscript(&boxed, [int_hint()]))
        .orig_base(Hint::subscript(&other, [str_hint()]))
        .build();
    (pair, boxed)
}

#[test]
fn generic_names_the_violated_base() {
    let (pair, _) = generic_fixture();
    let pith = Value::Object(Object::new(&pair));
    let cause = cause(Hint::class(&pair), &pith);
    assert_eq!(
        cause.path().cloned().collect::<Vec<_>>(),
        [PathSegment::GenericBase {
            base: "app.Other[str]".to_owned()
        }]
    );
    assert!(cause.render().starts_with("generic base app.Other[str] "));
}

#[test]
fn generic_checks_origin_first() {
    let (pair, _) = generic_fixture();
    assert_eq!(
        cause(Hint::subscript(&pair, [int_hint()]), &int(1)).render(),
        "int 1 not instance of app.Pair"
    );
}

#[test]
fn generic_with_only_erased_bases_checks_instance_hood() {
    let (_, boxed) = generic_fixture();
    let pith = Value::Object(Object::new(&boxed));
    assert_eq!(diagnose(Hint::subscript(&boxed, [int_hint()]), &pith).unwrap(), None);
}

// === Forward references ===

#[test]
fn forward_ref_resolves_in_owner_module() {
    let f = fixtures();
    let widget = Value::Object(Object::new(&f.widget));
    assert_eq!(diagnose(Hint::forward_ref("Widget"), &widget).unwrap(), None);
    assert_eq!(
        cause(Hint::forward_ref("Widget"), &int(1)).render(),
        "int 1 not instance of app.Widget"
    );
}

#[test]
fn forward_ref_resolves_dotted_names_and_builtins() {
    let f = fixtures();
    let circle = Value::Object(Object::new(&f.circle));
    assert_eq!(diagnose(Hint::forward_ref("shapes.Circle"), &circle).unwrap(), None);
    assert_eq!(
        cause(Hint::forward_ref("int"), &s("x")).render(),
        "str 'x' not instance of int"
    );
}

#[test]
fn unresolvable_forward_ref_is_fatal() {
    let err = diagnose(Hint::forward_ref("Missing"), &int(1)).unwrap_err();
    assert!(matches!(
        err,
        FatalError::ForwardRef(ForwardRefError::Unresolved { ref name, ref module, .. })
            if name == "Missing" && module == "app"
    ));
}

#[test]
fn forward_ref_to_module_is_fatal() {
    let err = diagnose(Hint::forward_ref("shapes"), &int(1)).unwrap_err();
    assert!(matches!(
        err,
        FatalError::ForwardRef(ForwardRefError::NotClass { ref name, .. }) if name == "shapes"
    ));
}

// === Subclass ===

#[test]
fn type_hint_requires_a_class() {
    let f = fixtures();
    assert_eq!(
        cause(Hint::type_of(Hint::class(&f.widget)), &int(1)).render(),
        "int 1 not class"
    );
}

#[test]
fn type_hint_checks_subclass() {
    let f = fixtures();
    let hint = Hint::type_of(Hint::class(&f.widget));
    assert_eq!(diagnose(hint.clone(), &Value::Class(f.gadget.clone())).unwrap(), None);
    assert_eq!(
        cause(hint, &Value::Class(builtins().int.clone())).render(),
        "<class 'int'> not subclass of app.Widget"
    );
}

#[test]
fn type_hint_accepts_union_and_forward_ref_superclasses() {
    let b = builtins();
    let union = Hint::type_of(Hint::union([int_hint(), str_hint()]));
    assert_eq!(diagnose(union.clone(), &Value::Class(b.bool_.clone())).unwrap(), None);
    assert_eq!(
        cause(union, &Value::Class(b.float.clone())).render(),
        "<class 'float'> not subclass of int or str"
    );

    let forward = Hint::type_of(Hint::forward_ref("Widget"));
    let gadget = Value::Class(fixtures().gadget.clone());
    assert_eq!(diagnose(forward, &gadget).unwrap(), None);
}

#[test]
fn type_of_any_accepts_every_class() {
    let pith = Value::Class(builtins().float.clone());
    assert_eq!(diagnose(Hint::type_of(Hint::any()), &pith).unwrap(), None);
    let bare = Hint::class(&builtins().type_);
    assert_eq!(diagnose(bare, &pith).unwrap(), None);
}

// === NoReturn and ignorable ===

#[test]
fn no_return_always_fails() {
    let cause = cause(Hint::NoReturn, &Value::None);
    assert_eq!(
        cause.render(),
        "NoneType None returned from callable annotated as never returning"
    );
}

#[test]
fn any_never_fails() {
    assert_eq!(diagnose(Hint::any(), &s("x")).unwrap(), None);
}
