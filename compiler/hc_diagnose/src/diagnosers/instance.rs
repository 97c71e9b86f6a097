//! Instance checks against origin classes.

use hc_diagnostic::{Cause, CauseKind, InternalError};
use hc_ir::Class;
use hc_sign::HintView;

use crate::context::{DiagnoseResult, DiagnosisContext};

/// The pith must be an instance of the hint's origin class.
pub(crate) fn diagnose_origin_instance(ctx: &DiagnosisContext<'_>) -> DiagnoseResult {
    let Some(origin) = ctx.hint().origin_type(ctx.registry()) else {
        return Err(InternalError::UnsupportedHint {
            hint: ctx.hint().to_string(),
        }
        .into());
    };
    Ok(instance_cause(ctx, std::slice::from_ref(&origin)))
}

/// Cause if the pith is an instance of none of `classes`.
pub(crate) fn instance_cause(ctx: &DiagnosisContext<'_>, classes: &[Class]) -> Option<Cause> {
    if ctx.pith().is_instance_any(classes) {
        return None;
    }
    Some(Cause::new(CauseKind::NotInstance {
        pith: ctx.pith_label(),
        expected: classes.iter().map(Class::display_name).collect(),
    }))
}
