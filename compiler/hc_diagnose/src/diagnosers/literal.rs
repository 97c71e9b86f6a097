//! `Literal[v1, v2, ...]`.

use hc_diagnostic::repr::represent;
use hc_diagnostic::{Cause, CauseKind};
use hc_ir::{Class, HintArg, Value};

use super::instance::instance_cause;
use crate::context::{DiagnoseResult, DiagnosisContext};

pub(crate) fn diagnose_literal(ctx: &DiagnosisContext<'_>) -> DiagnoseResult {
    let literals: Vec<&Value> = ctx
        .hint_childs()
        .iter()
        .filter_map(|arg| match arg {
            HintArg::Value(value) => Some(value),
            _ => None,
        })
        .collect();

    // Equality alone is too loose: `True == 1` but `True` is not `Literal[1]`.
    let pith = ctx.pith();
    let pith_class = pith.class();
    if literals
        .iter()
        .any(|literal| literal.class() == pith_class && literal.py_eq(pith))
    {
        return Ok(None);
    }

    let mut types: Vec<Class> = Vec::new();
    for literal in &literals {
        let class = literal.class();
        if !types.contains(&class) {
            types.push(class);
        }
    }
    if let Some(cause) = instance_cause(ctx, &types) {
        return Ok(Some(cause));
    }

    let max_len = ctx.config().repr_max_len;
    Ok(Some(Cause::new(CauseKind::LiteralMismatch {
        pith: ctx.pith_repr(),
        literals: literals
            .iter()
            .map(|literal| represent(literal, max_len))
            .collect(),
    })))
}
