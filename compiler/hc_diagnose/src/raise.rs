//! Turning a rejected pith into a human-readable error.

use hc_diagnostic::repr::represent;
use hc_diagnostic::{CheckError, DesyncError, InternalError, PithKind, Violation};
use hc_ir::{Callable, Value, RETURN_NAME};
use tracing::{debug, error};

use crate::{DiagnosisContext, Engine, RaiseConfig};

impl Engine {
    /// Explain why `pith_value` violates the hint annotating `pith_name` on
    /// `owner`, using the default [`RaiseConfig`].
    ///
    /// Only call this after a compiled check rejected the pith; pass the
    /// same `random_int` that check used to sample container items.
    pub fn raise_violation(
        &self,
        owner: &Callable,
        pith_name: &str,
        pith_value: &Value,
        random_int: Option<u64>,
    ) -> CheckError {
        self.raise_violation_with(
            &RaiseConfig::default(),
            owner,
            pith_name,
            pith_value,
            random_int,
        )
    }

    /// [`Engine::raise_violation`] with explicit rendering configuration.
    ///
    /// Always returns an error. A pith that turns out to satisfy its hint
    /// means the compiled check and this diagnosis disagree, which is
    /// reported as a [`DesyncError`].
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(callable = %owner.full_name(), pith = pith_name)
    )]
    pub fn raise_violation_with(
        &self,
        config: &RaiseConfig,
        owner: &Callable,
        pith_name: &str,
        pith_value: &Value,
        random_int: Option<u64>,
    ) -> CheckError {
        let kind = if pith_name == RETURN_NAME {
            PithKind::Return
        } else {
            PithKind::Param
        };
        let pith_repr = represent(pith_value, config.repr_max_len);
        let prefix = exception_prefix(owner, kind, pith_name, &pith_repr);

        let Some(hint) = owner.hint_for(pith_name) else {
            error!("pith has no type hint");
            return InternalError::Unannotated {
                callable: owner.full_name(),
                pith_name: pith_name.to_owned(),
            }
            .into();
        };

        let found = {
            let ctx = DiagnosisContext::root(
                self,
                config,
                owner,
                hint.clone(),
                pith_value,
                &prefix,
                random_int,
            );
            ctx.get_cause_or_none()
        };

        let err: CheckError = match found {
            Ok(Some(cause)) => Violation {
                kind,
                prefix,
                hint: hint.to_string(),
                cause,
            }
            .into(),
            Ok(None) => {
                error!(hint = %hint, pith = %pith_repr, "compiled check and diagnosis disagree");
                DesyncError {
                    prefix,
                    hint: hint.to_string(),
                    pith: pith_repr,
                }
                .into()
            }
            Err(fatal) => fatal.into(),
        };
        debug!(code = %err.code(), "violation raised");
        err
    }
}

/// `Function app.f() parameter x='a' ` or `Function app.f() return 'a' `.
fn exception_prefix(owner: &Callable, kind: PithKind, pith_name: &str, pith_repr: &str) -> String {
    match kind {
        PithKind::Param => format!(
            "Function {}() parameter {pith_name}={pith_repr} ",
            owner.full_name()
        ),
        PithKind::Return => format!("Function {}() return {pith_repr} ", owner.full_name()),
    }
}
