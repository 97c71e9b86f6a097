//! `Tuple[()]`, `Tuple[X, ...]` and fixed-length `Tuple[X, Y]`.

use hc_diagnostic::{Cause, CauseKind, PathSegment};
use hc_ir::{builtins, HintArg};

use super::instance::instance_cause;
use super::sequence::diagnose_items;
use crate::context::{DiagnoseResult, DiagnosisContext};

pub(crate) fn diagnose_tuple(ctx: &DiagnosisContext<'_>) -> DiagnoseResult {
    if let Some(cause) = instance_cause(ctx, std::slice::from_ref(&builtins().tuple)) {
        return Ok(Some(cause));
    }
    match ctx.hint_childs() {
        [] => Ok(None),
        [HintArg::Hint(item_hint), HintArg::Ellipsis] => diagnose_items(ctx, item_hint),
        [HintArg::EmptyTuple] => Ok(diagnose_empty(ctx)),
        childs => diagnose_fixed(ctx, childs),
    }
}

fn diagnose_empty(ctx: &DiagnosisContext<'_>) -> Option<Cause> {
    match ctx.pith().len() {
        Some(0) => None,
        _ => Some(Cause::new(CauseKind::TupleNonEmpty {
            pith: ctx.pith_label(),
        })),
    }
}

fn diagnose_fixed(ctx: &DiagnosisContext<'_>, childs: &[HintArg]) -> DiagnoseResult {
    let Some(items) = ctx.pith().sequence_items() else {
        return Ok(None);
    };
    if items.len() != childs.len() {
        return Ok(Some(Cause::new(CauseKind::TupleLength {
            pith: ctx.pith_label(),
            found: items.len(),
            expected: childs.len(),
        })));
    }

    for (index, (child, item)) in childs.iter().zip(items.iter()).enumerate() {
        let Some(child_hint) = child.as_hint() else {
            continue;
        };
        if ctx.is_ignorable(child_hint) {
            continue;
        }
        if let Some(cause) = ctx
            .permute_item(child_hint.clone(), item)
            .get_cause_or_none()?
        {
            return Ok(Some(cause.within(PathSegment::Index {
                container: ctx.pith().type_name(),
                index,
            })));
        }
    }
    Ok(None)
}
