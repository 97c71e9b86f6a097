use pretty_assertions::assert_eq;

use super::*;
use crate::{builtins, Is};

fn int() -> Hint {
    Hint::class(&builtins().int)
}

fn str_() -> Hint {
    Hint::class(&builtins().str_)
}

#[test]
fn display_renders_canonical_representation() {
    assert_eq!(Hint::list(int()).to_string(), "typing.List[int]");
    assert_eq!(
        Hint::tuple_variadic(int()).to_string(),
        "typing.Tuple[int, ...]"
    );
    assert_eq!(Hint::tuple_empty().to_string(), "typing.Tuple[()]");
    assert_eq!(
        Hint::literal([Value::Int(1), Value::str("a")]).to_string(),
        "typing.Literal[1, 'a']"
    );
    assert_eq!(
        Hint::optional(Hint::union([int(), str_()])).to_string(),
        "typing.Optional[typing.Union[int, str]]"
    );
    assert_eq!(Hint::forward_ref("Thing").to_string(), "ForwardRef('Thing')");
    assert_eq!(Hint::any().to_string(), "typing.Any");
}

#[test]
fn validators_render_inside_annotated() {
    let positive: Arc<dyn Validator> = Arc::new(Is::new("x > 0", |_| true));
    assert_eq!(
        Hint::annotated(int(), [positive]).to_string(),
        "typing.Annotated[int, Is[x > 0]]"
    );
}

#[test]
fn repr_stripped_drops_arguments() {
    assert_eq!(Hint::list(int()).repr_stripped(), "typing.List");
    assert_eq!(Hint::any().repr_stripped(), "typing.Any");
    assert_eq!(int().repr_stripped(), "int");
    assert_eq!(Hint::NoReturn.repr_stripped(), "typing.NoReturn");
}

#[test]
fn args_and_subscription() {
    assert!(Hint::list(int()).is_subscripted());
    assert!(!Hint::any().is_subscripted());
    assert!(!int().is_subscripted());
    assert_eq!(Hint::dict(int(), str_()).args().len(), 2);
    assert!(Hint::any().args().is_empty());
    assert!(Hint::tuple([]).is_subscripted());
}

#[test]
fn subscripted_user_generic_keeps_origin() {
    let boxed = Class::builder("pkg", "Box").orig_base(Hint::generic()).build();
    let hint = Hint::subscript(&boxed, [int()]);
    let Hint::Alias(alias) = &hint else {
        panic!("expected alias, got {hint:?}");
    };
    assert_eq!(alias.origin.as_ref(), Some(&boxed));
    assert_eq!(hint.to_string(), "pkg.Box[int]");
}
