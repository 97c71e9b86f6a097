//! Sequences subscripted by one item hint.

use hc_diagnostic::PathSegment;
use hc_ir::{Hint, Value};

use super::instance::diagnose_origin_instance;
use super::sample_index;
use crate::context::{DiagnoseResult, DiagnosisContext};

pub(crate) fn diagnose_sequence(ctx: &DiagnosisContext<'_>) -> DiagnoseResult {
    if let Some(cause) = diagnose_origin_instance(ctx)? {
        return Ok(Some(cause));
    }
    match ctx.first_child_hint() {
        Some(item_hint) => diagnose_items(ctx, item_hint),
        None => Ok(None),
    }
}

/// Check the pith's items against `item_hint`.
///
/// With a `random_int`, only the item the compiled check sampled is
/// inspected; otherwise items are scanned in ascending index order.
pub(crate) fn diagnose_items(ctx: &DiagnosisContext<'_>, item_hint: &Hint) -> DiagnoseResult {
    if ctx.is_ignorable(item_hint) {
        return Ok(None);
    }
    let Some(items) = ctx.pith().sequence_items() else {
        return Ok(None);
    };
    if items.is_empty() {
        return Ok(None);
    }

    if let Some(random_int) = ctx.random_int() {
        let index = sample_index(random_int, items.len());
        return item_cause(ctx, item_hint, &items[index], index);
    }
    for (index, item) in items.iter().enumerate() {
        if let Some(cause) = item_cause(ctx, item_hint, item, index)? {
            return Ok(Some(cause));
        }
    }
    Ok(None)
}

fn item_cause(
    ctx: &DiagnosisContext<'_>,
    item_hint: &Hint,
    item: &Value,
    index: usize,
) -> DiagnoseResult {
    let cause = ctx
        .permute_item(item_hint.clone(), item)
        .get_cause_or_none()?;
    Ok(cause.map(|cause| {
        cause.within(PathSegment::Index {
            container: ctx.pith().type_name(),
            index,
        })
    }))
}
