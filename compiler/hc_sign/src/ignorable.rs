//! Hints every pith satisfies.

use hc_ir::{builtins, Hint, HintArg};

use crate::{Sign, SignRegistry};

/// Whether `hint` is satisfied by every pith.
///
/// `Any`, `object`, bare `Generic`/`Protocol` (and their subscriptions), and
/// any union with an ignorable branch.
pub fn is_hint_ignorable(hint: &Hint, registry: &SignRegistry) -> bool {
    match hint {
        Hint::Class(class) => *class == builtins().object,
        Hint::Alias(alias) => match registry.resolve_sign(hint) {
            Some(Sign::Any) => true,
            Some(Sign::Generic) => alias.origin.is_none(),
            Some(Sign::Union | Sign::Optional) => hint
                .args()
                .iter()
                .filter_map(HintArg::as_hint)
                .any(|branch| is_hint_ignorable(branch, registry)),
            _ => false,
        },
        Hint::ForwardRef(_) | Hint::None | Hint::NoReturn => false,
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
    fn ignorable_hints() {
        let registry = build_registry().unwrap();
        let b = builtins();
        let int = Hint::class(&b.int);

        assert!(is_hint_ignorable(&Hint::any(), &registry));
        assert!(is_hint_ignorable(&Hint::class(&b.object), &registry));
        assert!(is_hint_ignorable(&Hint::generic(), &registry));
        assert!(is_hint_ignorable(&Hint::bare("typing.Protocol"), &registry));
        assert!(is_hint_ignorable(
            &Hint::union([int.clone(), Hint::any()]),
            &registry
        ));
        assert!(is_hint_ignorable(&Hint::optional(Hint::any()), &registry));
    }

    #[test]
    fn ordinary_hints_are_not_ignorable() {
        let registry = build_registry().unwrap();
        let int = Hint::class(&builtins().int);

        assert!(!is_hint_ignorable(&int, &registry));
        assert!(!is_hint_ignorable(&Hint::list(Hint::any()), &registry));
        assert!(!is_hint_ignorable(&Hint::optional(int.clone()), &registry));
        assert!(!is_hint_ignorable(&Hint::None, &registry));

        let boxed = hc_ir::Class::builder("pkg", "Box")
            .orig_base(Hint::generic())
            .build();
        assert!(!is_hint_ignorable(&Hint::subscript(&boxed, [int]), &registry));
    }
}
