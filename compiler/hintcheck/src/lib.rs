//! hintcheck: explains why a value violates its type hint.
//!
//! A compiled check decides *whether* a parameter or return value satisfies
//! its hint. When it does not, [`raise_violation`] walks the hint again and
//! produces a [`CheckError`] naming the precise component that failed.
//!
//! ```
//! use std::sync::Arc;
//!
//! use hintcheck::{builtins, Callable, Hint, Module, Value};
//!
//! let module = Arc::new(Module::new("app"));
//! let scale = Callable::new(module, "scale")
//!     .param("factors", Hint::list(Hint::class(&builtins().int)));
//! let pith = Value::list([Value::Int(2), Value::str("3")]);
//!
//! let err = hintcheck::raise_violation(&scale, "factors", &pith, None);
//! assert_eq!(
//!     err.to_string(),
//!     "Function app.scale() parameter factors=[2, '3'] violates type hint \
//!      typing.List[int], as list index 1 item str '3' not instance of int.",
//! );
//! ```
//!
//! Set `RUST_LOG=hc_diagnose=trace` and call [`init_tracing`] to see every
//! dispatch step.

use std::sync::{Once, OnceLock};

pub use hc_diagnose::{
    sample_index, DiagnoseResult, Diagnoser, DiagnosisContext, DispatchTable, Engine,
    EngineError, Permutation, RaiseConfig, TableError,
};
pub use hc_diagnostic::{
    repr, Cause, CauseKind, CheckError, DesyncError, ErrorCode, FatalError, ForwardRefError,
    InternalError, PathSegment, PithKind, Violation, BUG_REPORT_NUDGE,
};
pub use hc_ir::{
    builtins, Alias, Builtins, Callable, Class, ClassBuilder, Global, Hint, HintArg, Is, IsAll,
    Module, Object, Validator, Value, RETURN_NAME,
};
pub use hc_sign::{
    build_registry, is_hint_ignorable, HintView, Sign, SignError, SignRegistry, SignSets,
};

static ENGINE: OnceLock<Result<Engine, EngineError>> = OnceLock::new();

/// The process-wide engine over the standard sign-sets, built on first use.
pub fn engine() -> Result<&'static Engine, EngineError> {
    ENGINE
        .get_or_init(|| {
            let built = Engine::build();
            if let Err(err) = &built {
                tracing::error!(%err, "failed to build diagnosis engine");
            }
            built
        })
        .as_ref()
        .map_err(Clone::clone)
}

/// Explain why `pith_value` violates the hint annotating `pith_name`
/// (`"return"` for the return value) on `owner`.
///
/// Always returns an error: a [`CheckError::Violation`] when the pith is
/// diagnosed, a [`CheckError::Desync`] when it turns out to satisfy its hint.
pub fn raise_violation(
    owner: &Callable,
    pith_name: &str,
    pith_value: &Value,
    random_int: Option<u64>,
) -> CheckError {
    raise_violation_with(
        &RaiseConfig::default(),
        owner,
        pith_name,
        pith_value,
        random_int,
    )
}

/// [`raise_violation`] with explicit rendering configuration.
pub fn raise_violation_with(
    config: &RaiseConfig,
    owner: &Callable,
    pith_name: &str,
    pith_value: &Value,
    random_int: Option<u64>,
) -> CheckError {
    match engine() {
        Ok(engine) => engine.raise_violation_with(config, owner, pith_name, pith_value, random_int),
        Err(err) => InternalError::EngineUnavailable {
            reason: err.to_string(),
        }
        .into(),
    }
}

static TRACING_INIT: Once = Once::new();

/// Install a hierarchical tracing subscriber filtered by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set, and only ever runs once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(EnvFilter::from_default_env())
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .init();
        }
    });
}
