//! `NoReturn`: any returned value is a violation.

use hc_diagnostic::{Cause, CauseKind};

use crate::context::{DiagnoseResult, DiagnosisContext};

pub(crate) fn diagnose_no_return(ctx: &DiagnosisContext<'_>) -> DiagnoseResult {
    Ok(Some(Cause::new(CauseKind::NoReturn {
        pith: ctx.pith_label(),
    })))
}
