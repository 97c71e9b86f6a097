//! `Type[X]`: the pith must be a class, and a subclass of `X`.

use hc_diagnostic::{Cause, CauseKind, FatalError, InternalError};
use hc_ir::{builtins, Class, Hint, HintArg};
use hc_sign::{HintView, Sign};

use super::forward_ref::resolve_forward_ref;
use crate::context::{DiagnoseResult, DiagnosisContext};

pub(crate) fn diagnose_subclass(ctx: &DiagnosisContext<'_>) -> DiagnoseResult {
    let Some(class) = ctx.pith().as_class() else {
        return Ok(Some(Cause::new(CauseKind::NotClass {
            pith: ctx.pith_label(),
        })));
    };
    let Some(superclass_hint) = ctx.first_child_hint() else {
        return Ok(None);
    };
    let Some(allowed) = superclasses(ctx, superclass_hint)? else {
        return Ok(None);
    };
    if allowed.iter().any(|superclass| class.is_subclass_of(superclass)) {
        return Ok(None);
    }
    Ok(Some(Cause::new(CauseKind::NotSubclass {
        pith: ctx.pith_repr(),
        expected: allowed.iter().map(Class::display_name).collect(),
    })))
}

/// Classes the pith may subclass, or `None` if any class will do.
fn superclasses(
    ctx: &DiagnosisContext<'_>,
    hint: &Hint,
) -> Result<Option<Vec<Class>>, FatalError> {
    if ctx.is_ignorable(hint) {
        return Ok(None);
    }
    let registry = ctx.registry();
    match hint {
        Hint::Class(class) => Ok(Some(vec![class.clone()])),
        Hint::None => Ok(Some(vec![builtins().none_type.clone()])),
        Hint::ForwardRef(name) => Ok(Some(vec![resolve_forward_ref(ctx, name)?])),
        _ if matches!(
            registry.resolve_sign(hint),
            Some(Sign::Union | Sign::Optional)
        ) =>
        {
            let mut classes = Vec::new();
            for branch in hint.args().iter().filter_map(HintArg::as_hint) {
                match superclasses(ctx, branch)? {
                    Some(branch_classes) => classes.extend(branch_classes),
                    None => return Ok(None),
                }
            }
            Ok(Some(classes))
        }
        _ => match hint.origin_type(registry) {
            Some(origin) => Ok(Some(vec![origin])),
            None => Err(InternalError::UnsupportedHint {
                hint: hint.to_string(),
            }
            .into()),
        },
    }
}
