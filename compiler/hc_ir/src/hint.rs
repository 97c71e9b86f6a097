//! Structural type hints.
//!
//! Hints arrive here already normalized: type variables are reduced to their
//! bounds, `None` is the `None` singleton, and aliases carry the dotted path
//! of the object that created them.
//!
//! # Representation families
//!
//! - `Class`: a plain class used directly as a hint (`int`, `pkg.Thing`).
//! - `Alias`: a typing-style alias (`typing.List[int]`,
//!   `typing_extensions.Literal['a']`, `pkg.Box[int]`), with or without
//!   subscription arguments.
//! - `ForwardRef`: a textual reference resolved against the owning callable.
//! - `None` and `NoReturn`: singletons, recognised by identity.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::{Class, Validator, Value};

/// A structural type hint.
#[derive(Clone, Debug)]
pub enum Hint {
    Class(Class),
    Alias(Arc<Alias>),
    ForwardRef(Arc<str>),
    /// The "no value" singleton.
    None,
    /// The "never returns" singleton.
    NoReturn,
}

/// A typing-style alias.
#[derive(Clone, Debug)]
pub struct Alias {
    /// Dotted path of the object that was subscripted, e.g. `typing.List`.
    pub path: String,
    /// Subscription arguments; `None` when the alias is unsubscripted.
    pub args: Option<Vec<HintArg>>,
    /// Origin class for subscripted user generics (`pkg.Box[int]` → `Box`).
    pub origin: Option<Class>,
}

/// One subscription argument of an alias.
#[derive(Clone, Debug)]
pub enum HintArg {
    Hint(Hint),
    /// A literal value, or arbitrary metadata attached to `Annotated`.
    Value(Value),
    /// `...` in `Tuple[X, ...]`.
    Ellipsis,
    /// `()` in `Tuple[()]`.
    EmptyTuple,
    Validator(Arc<dyn Validator>),
}

impl HintArg {
    pub fn as_hint(&self) -> Option<&Hint> {
        match self {
            HintArg::Hint(hint) => Some(hint),
            _ => None,
        }
    }
}

impl From<Hint> for HintArg {
    fn from(hint: Hint) -> Self {
        HintArg::Hint(hint)
    }
}

impl From<Value> for HintArg {
    fn from(value: Value) -> Self {
        HintArg::Value(value)
    }
}

impl From<&Class> for Hint {
    fn from(class: &Class) -> Self {
        Hint::Class(class.clone())
    }
}

impl Hint {
    pub fn class(class: &Class) -> Self {
        Hint::Class(class.clone())
    }

    /// Subscripted alias `path[args]`.
    pub fn alias(path: impl Into<String>, args: impl IntoIterator<Item = HintArg>) -> Self {
        Hint::Alias(Arc::new(Alias {
            path: path.into(),
            args: Some(args.into_iter().collect()),
            origin: None,
        }))
    }

    /// Unsubscripted alias, e.g. `typing.Any`.
    pub fn bare(path: impl Into<String>) -> Self {
        Hint::Alias(Arc::new(Alias {
            path: path.into(),
            args: None,
            origin: None,
        }))
    }

    /// Subscripted user generic, e.g. `pkg.Box[int]`.
    pub fn subscript(origin: &Class, args: impl IntoIterator<Item = Hint>) -> Self {
        Hint::Alias(Arc::new(Alias {
            path: origin.display_name(),
            args: Some(args.into_iter().map(HintArg::Hint).collect()),
            origin: Some(origin.clone()),
        }))
    }

    pub fn forward_ref(name: impl AsRef<str>) -> Self {
        Hint::ForwardRef(Arc::from(name.as_ref()))
    }

    pub fn any() -> Self {
        Hint::bare("typing.Any")
    }

    pub fn list(item: Hint) -> Self {
        Hint::alias("typing.List", [item.into()])
    }

    pub fn sequence(item: Hint) -> Self {
        Hint::alias("typing.Sequence", [item.into()])
    }

    pub fn mutable_sequence(item: Hint) -> Self {
        Hint::alias("typing.MutableSequence", [item.into()])
    }

    pub fn dict(key: Hint, value: Hint) -> Self {
        Hint::alias("typing.Dict", [key.into(), value.into()])
    }

    pub fn set(item: Hint) -> Self {
        Hint::alias("typing.Set", [item.into()])
    }

    /// Fixed-length tuple `Tuple[a, b, ...]`.
    pub fn tuple(items: impl IntoIterator<Item = Hint>) -> Self {
        Hint::alias("typing.Tuple", items.into_iter().map(HintArg::Hint))
    }

    /// Variadic tuple `Tuple[item, ...]`.
    pub fn tuple_variadic(item: Hint) -> Self {
        Hint::alias("typing.Tuple", [item.into(), HintArg::Ellipsis])
    }

    /// Empty tuple `Tuple[()]`.
    pub fn tuple_empty() -> Self {
        Hint::alias("typing.Tuple", [HintArg::EmptyTuple])
    }

    pub fn literal(values: impl IntoIterator<Item = Value>) -> Self {
        Hint::alias("typing.Literal", values.into_iter().map(HintArg::Value))
    }

    pub fn union(branches: impl IntoIterator<Item = Hint>) -> Self {
        Hint::alias("typing.Union", branches.into_iter().map(HintArg::Hint))
    }

    pub fn optional(hint: Hint) -> Self {
        Hint::alias("typing.Optional", [hint.into()])
    }

    /// `Annotated[hint, v1, v2, ...]`.
    pub fn annotated(hint: Hint, validators: impl IntoIterator<Item = Arc<dyn Validator>>) -> Self {
        Hint::alias(
            "typing.Annotated",
            std::iter::once(HintArg::Hint(hint)).chain(validators.into_iter().map(HintArg::Validator)),
        )
    }

    /// `Type[hint]`: the pith must be a subclass of `hint`.
    pub fn type_of(hint: Hint) -> Self {
        Hint::alias("typing.Type", [hint.into()])
    }

    /// Unsubscripted `typing.Generic`, the root of erased generic bases.
    pub fn generic() -> Self {
        Hint::bare("typing.Generic")
    }

    /// Subscription arguments (empty for unsubscripted hints).
    pub fn args(&self) -> &[HintArg] {
        match self {
            Hint::Alias(alias) => alias.args.as_deref().unwrap_or(&[]),
            _ => &[],
        }
    }

    pub fn is_subscripted(&self) -> bool {
        matches!(self, Hint::Alias(alias) if alias.args.is_some())
    }

    /// Representation with subscription arguments stripped.
    pub fn repr_stripped(&self) -> Cow<'_, str> {
        match self {
            Hint::Class(class) => Cow::Owned(class.display_name()),
            Hint::Alias(alias) => Cow::Borrowed(&alias.path),
            Hint::ForwardRef(_) => Cow::Borrowed("ForwardRef"),
            Hint::None => Cow::Borrowed("None"),
            Hint::NoReturn => Cow::Borrowed("typing.NoReturn"),
        }
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hint::Class(class) => write!(f, "{class}"),
            Hint::Alias(alias) => {
                f.write_str(&alias.path)?;
                if let Some(args) = &alias.args {
                    f.write_str("[")?;
                    for (i, arg) in args.iter().enumerate() {
                        if i > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{arg}")?;
                    }
                    f.write_str("]")?;
                }
                Ok(())
            }
            Hint::ForwardRef(name) => write!(f, "ForwardRef('{name}')"),
            Hint::None => f.write_str("None"),
            Hint::NoReturn => f.write_str("typing.NoReturn"),
        }
    }
}

impl fmt::Display for HintArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HintArg::Hint(hint) => write!(f, "{hint}"),
            HintArg::Value(value) => f.write_str(&value.repr()),
            HintArg::Ellipsis => f.write_str("..."),
            HintArg::EmptyTuple => f.write_str("()"),
            HintArg::Validator(validator) => write!(f, "{validator}"),
        }
    }
}

#[cfg(test)]
mod tests;
