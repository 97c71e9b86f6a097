//! Read-only view of one hint node.

use hc_ir::{builtins, Class, Hint, HintArg};

use crate::{Sign, SignRegistry};

/// What diagnosis needs to know about a hint node, independent of how the
/// hint is represented.
pub trait HintView {
    /// Resolved sign, or `None` if unsupported.
    fn sign(&self, registry: &SignRegistry) -> Option<Sign>;

    /// Ordered child arguments.
    fn children(&self) -> &[HintArg];

    /// Class that instances of this hint must be instances of, if any.
    fn origin_type(&self, registry: &SignRegistry) -> Option<Class>;
}

impl HintView for Hint {
    fn sign(&self, registry: &SignRegistry) -> Option<Sign> {
        registry.resolve_sign(self)
    }

    fn children(&self) -> &[HintArg] {
        self.args()
    }

    fn origin_type(&self, registry: &SignRegistry) -> Option<Class> {
        match self {
            Hint::Class(class) => Some(class.clone()),
            Hint::None => Some(builtins().none_type.clone()),
            Hint::Alias(alias) => match &alias.origin {
                Some(origin) => Some(origin.clone()),
                None => registry
                    .resolve_sign(self)
                    .and_then(|sign| registry.origin_class(sign))
                    .cloned(),
            },
            Hint::ForwardRef(_) | Hint::NoReturn => None,
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "test code uses unwrap for concise assertions"
)]
mod tests {
    use super::*;
    use crate::build_registry;

    #[test]
    fn origin_types() {
        let registry = build_registry().unwrap();
        let b = builtins();
        let int = Hint::class(&b.int);

        assert_eq!(int.origin_type(&registry), Some(b.int.clone()));
        assert_eq!(Hint::None.origin_type(&registry), Some(b.none_type.clone()));
        assert_eq!(
            Hint::list(int.clone()).origin_type(&registry),
            Some(b.list.clone())
        );
        assert_eq!(
            Hint::sequence(int.clone()).origin_type(&registry),
            Some(b.sequence.clone())
        );
        assert_eq!(Hint::literal([]).origin_type(&registry), None);
        assert_eq!(Hint::forward_ref("X").origin_type(&registry), None);

        let boxed = Class::builder("pkg", "Box").orig_base(Hint::generic()).build();
        assert_eq!(
            Hint::subscript(&boxed, [int]).origin_type(&registry),
            Some(boxed)
        );
    }

    #[test]
    fn children_are_subscription_args() {
        let registry = build_registry().unwrap();
        let hint = Hint::dict(Hint::any(), Hint::any());
        assert_eq!(hint.children().len(), 2);
        assert_eq!(hint.sign(&registry), Some(Sign::Dict));
    }
}
