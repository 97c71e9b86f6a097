//! `Union[...]` and `Optional[...]`.
//!
//! A pith satisfying any branch satisfies the union. Otherwise the cause is
//! the first failing branch whose shape the pith already has (a `list`
//! failing `List[int]` is blamed on its items), falling back to a summary of
//! every branch.

use hc_diagnostic::{Cause, CauseKind};
use hc_ir::{Hint, HintArg};
use hc_sign::{HintView, Sign};

use crate::context::{DiagnoseResult, DiagnosisContext};

pub(crate) fn diagnose_union(ctx: &DiagnosisContext<'_>) -> DiagnoseResult {
    let mut failures: Vec<(&Hint, Cause)> = Vec::new();
    for branch in branches(ctx) {
        if ctx.is_ignorable(branch) {
            return Ok(None);
        }
        match ctx.permute_hint(branch.clone()).get_cause_or_none()? {
            None => return Ok(None),
            Some(cause) => failures.push((branch, cause)),
        }
    }

    if let Some((_, cause)) = failures
        .iter()
        .find(|(branch, _)| shares_shape(ctx, branch))
    {
        return Ok(Some(cause.clone()));
    }
    Ok(Some(Cause::new(CauseKind::UnionMismatch {
        pith: ctx.pith_label(),
        expected: failures
            .iter()
            .map(|(branch, _)| branch.to_string())
            .collect(),
    })))
}

/// Declared branches; `Optional[X]` also admits `None`.
fn branches<'c>(ctx: &'c DiagnosisContext<'_>) -> Vec<&'c Hint> {
    let mut branches: Vec<&Hint> = ctx
        .hint_childs()
        .iter()
        .filter_map(HintArg::as_hint)
        .collect();
    let optional = ctx.hint_sign() == Some(Sign::Optional);
    if optional && !branches.iter().any(|branch| matches!(branch, Hint::None)) {
        branches.push(&NONE);
    }
    branches
}

static NONE: Hint = Hint::None;

/// Whether the pith passes the shallow part of `branch`, so the branch's
/// own cause is about something deeper.
fn shares_shape(ctx: &DiagnosisContext<'_>, branch: &Hint) -> bool {
    let registry = ctx.registry();
    match registry.resolve_sign(branch) {
        Some(Sign::Annotated) => branch
            .args()
            .first()
            .and_then(HintArg::as_hint)
            .is_some_and(|base| shares_shape(ctx, base)),
        Some(Sign::Literal) => {
            let pith_class = ctx.pith().class();
            branch.args().iter().any(|arg| match arg {
                HintArg::Value(value) => value.class() == pith_class,
                _ => false,
            })
        }
        Some(Sign::Union | Sign::Optional | Sign::ForwardRef | Sign::NoReturn | Sign::Any)
        | None => false,
        Some(_) => branch
            .origin_type(registry)
            .is_some_and(|origin| ctx.pith().is_instance(&origin)),
    }
}
