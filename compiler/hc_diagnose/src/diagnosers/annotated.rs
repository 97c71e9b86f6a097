//! `Annotated[base, validator, ...]`.

use hc_diagnostic::{Cause, CauseKind, InternalError};
use hc_ir::HintArg;
use tracing::error;

use crate::context::{DiagnoseResult, DiagnosisContext};

pub(crate) fn diagnose_annotated(ctx: &DiagnosisContext<'_>) -> DiagnoseResult {
    let Some((HintArg::Hint(base), metadata)) = ctx.hint_childs().split_first() else {
        return Err(InternalError::UnsupportedHint {
            hint: ctx.hint().to_string(),
        }
        .into());
    };
    if let Some(cause) = ctx.permute_hint(base.clone()).get_cause_or_none()? {
        return Ok(Some(cause));
    }

    for meta in metadata {
        let HintArg::Validator(validator) = meta else {
            error!(hint = %ctx.hint(), metadata = %meta, "non-validator metadata");
            return Err(InternalError::NonConformingValidator {
                hint: ctx.hint().to_string(),
                metadata: meta.to_string(),
            }
            .into());
        };
        if !validator.is_valid(ctx.pith()) {
            return Ok(Some(Cause::new(CauseKind::ValidatorRejected {
                pith: ctx.pith_label(),
                validator: validator.to_string(),
                diagnosis: validator.get_diagnosis(ctx.pith(), ctx.cause_indent()),
            })));
        }
    }
    Ok(None)
}
