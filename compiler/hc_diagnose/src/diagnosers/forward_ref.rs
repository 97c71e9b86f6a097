//! Forward references, resolved against the owner's module.

use hc_diagnostic::{FatalError, ForwardRefError, InternalError};
use hc_ir::{builtins, Class, Global, Hint};
use tracing::debug;

use super::instance::diagnose_origin_instance;
use crate::context::{DiagnoseResult, DiagnosisContext};

pub(crate) fn diagnose_forward_ref(ctx: &DiagnosisContext<'_>) -> DiagnoseResult {
    let Hint::ForwardRef(name) = ctx.hint() else {
        return Err(InternalError::UnsupportedHint {
            hint: ctx.hint().to_string(),
        }
        .into());
    };
    let class = resolve_forward_ref(ctx, name)?;
    diagnose_origin_instance(&ctx.permute_hint(Hint::Class(class)))
}

/// Resolve `name` in the owner's module globals, then among builtins.
pub(crate) fn resolve_forward_ref(
    ctx: &DiagnosisContext<'_>,
    name: &str,
) -> Result<Class, FatalError> {
    let module = ctx.owner().module();
    match module.lookup(name) {
        Some(Global::Class(class)) => Ok(class.clone()),
        Some(Global::Module(_)) => Err(ForwardRefError::NotClass {
            prefix: ctx.exception_prefix().to_owned(),
            name: name.to_owned(),
        }
        .into()),
        None => {
            if let Some(class) = builtins().lookup(name) {
                return Ok(class.clone());
            }
            debug!(name, module = module.name(), "unresolvable forward reference");
            Err(ForwardRefError::Unresolved {
                prefix: ctx.exception_prefix().to_owned(),
                name: name.to_owned(),
                module: module.name().to_owned(),
            }
            .into())
        }
    }
}
