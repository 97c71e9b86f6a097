//! User generics: origin instance check, then each pseudo-superclass.

use hc_diagnostic::{InternalError, PathSegment};
use hc_ir::Hint;
use hc_sign::HintView;

use super::instance::instance_cause;
use crate::context::{DiagnoseResult, DiagnosisContext};

pub(crate) fn diagnose_generic(ctx: &DiagnosisContext<'_>) -> DiagnoseResult {
    let Some(origin) = ctx.hint().origin_type(ctx.registry()) else {
        return Err(InternalError::UnsupportedHint {
            hint: ctx.hint().to_string(),
        }
        .into());
    };
    if let Some(cause) = instance_cause(ctx, std::slice::from_ref(&origin)) {
        return Ok(Some(cause));
    }

    // Plain class bases are already covered by the instance check above.
    for base in origin.orig_bases() {
        if matches!(base, Hint::Class(_)) || ctx.is_ignorable(base) {
            continue;
        }
        if let Some(cause) = ctx.permute_hint(base.clone()).get_cause_or_none()? {
            return Ok(Some(cause.within(PathSegment::GenericBase {
                base: base.to_string(),
            })));
        }
    }
    Ok(None)
}
