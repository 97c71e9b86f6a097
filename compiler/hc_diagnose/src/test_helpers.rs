//! Shared fixtures for unit tests.

#![allow(
    clippy::unwrap_used,
    reason = "fixtures fail loudly when the engine cannot be built"
)]

use std::sync::{Arc, OnceLock};

use hc_diagnostic::Cause;
use hc_ir::{Callable, Class, Hint, Module, Value};

use crate::{DiagnoseResult, DiagnosisContext, Engine, RaiseConfig};

pub(crate) fn engine() -> &'static Engine {
    static ENGINE: OnceLock<Engine> = OnceLock::new();
    ENGINE.get_or_init(|| Engine::build().unwrap())
}

/// Classes and the module they live in.
pub(crate) struct Fixtures {
    pub widget: Class,
    /// Subclass of `widget`.
    pub gadget: Class,
    /// Lives in `app.shapes`, reachable as `shapes.Circle`.
    pub circle: Class,
    pub module: Arc<Module>,
}

pub(crate) fn fixtures() -> &'static Fixtures {
    static FIXTURES: OnceLock<Fixtures> = OnceLock::new();
    FIXTURES.get_or_init(|| {
        let widget = Class::new("app", "Widget");
        let gadget = Class::builder("app", "Gadget").base(&widget).build();
        let circle = Class::new("app.shapes", "Circle");
        let shapes = Arc::new(Module::new("app.shapes").with_class(&circle));
        let module = Arc::new(
            Module::new("app")
                .with_class(&widget)
                .with_class(&gadget)
                .with_module("shapes", shapes),
        );
        Fixtures {
            widget,
            gadget,
            circle,
            module,
        }
    })
}

/// A callable in the fixture module with no annotations.
pub(crate) fn owner() -> Callable {
    Callable::new(Arc::clone(&fixtures().module), "f")
}

pub(crate) fn diagnose(hint: Hint, pith: &Value) -> DiagnoseResult {
    diagnose_sampled(hint, pith, None)
}

pub(crate) fn diagnose_sampled(hint: Hint, pith: &Value, random_int: Option<u64>) -> DiagnoseResult {
    let config = RaiseConfig::default();
    let owner = owner();
    DiagnosisContext::root(engine(), &config, &owner, hint, pith, "", random_int)
        .get_cause_or_none()
}

/// The cause of a pith that must violate `hint`.
pub(crate) fn cause(hint: Hint, pith: &Value) -> Cause {
    diagnose(hint, pith).unwrap().unwrap()
}

pub(crate) fn int(i: i64) -> Value {
    Value::Int(i)
}

pub(crate) fn s(text: &str) -> Value {
    Value::str(text)
}
