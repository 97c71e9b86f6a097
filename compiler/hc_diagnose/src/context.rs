//! Diagnosis context: one hint node paired with one pith.
//!
//! A context is immutable. Recursing into a child hint or item produces a new
//! context via [`DiagnosisContext::permute`]; the sign and children are always
//! recomputed from the hint, so they can never drift apart.

use hc_diagnostic::repr::{label_pith, represent};
use hc_diagnostic::{Cause, FatalError, InternalError};
use hc_ir::{Callable, Hint, HintArg, Value};
use hc_sign::{is_hint_ignorable, Sign, SignRegistry};
use hc_stack::ensure_sufficient_stack;
use tracing::{error, trace};

use crate::{Engine, RaiseConfig};

/// `Ok(None)` when the pith satisfies the hint, `Ok(Some(cause))` when it
/// does not, `Err` when diagnosis itself cannot proceed.
pub type DiagnoseResult = Result<Option<Cause>, FatalError>;

/// Overrides applied by [`DiagnosisContext::permute`]; `None` keeps the
/// parent's value.
#[derive(Clone, Debug, Default)]
pub struct Permutation<'a> {
    pub hint: Option<Hint>,
    pub pith: Option<&'a Value>,
    pub cause_indent: Option<String>,
    pub random_int: Option<Option<u64>>,
}

/// Everything a diagnoser needs to judge one pith against one hint.
#[derive(Clone, Debug)]
pub struct DiagnosisContext<'a> {
    engine: &'a Engine,
    config: &'a RaiseConfig,
    hint: Hint,
    hint_sign: Option<Sign>,
    hint_childs: Vec<HintArg>,
    pith: &'a Value,
    owner: &'a Callable,
    exception_prefix: &'a str,
    cause_indent: String,
    random_int: Option<u64>,
}

impl<'a> DiagnosisContext<'a> {
    /// Context for the root hint of `owner`'s pith.
    pub fn root(
        engine: &'a Engine,
        config: &'a RaiseConfig,
        owner: &'a Callable,
        hint: Hint,
        pith: &'a Value,
        exception_prefix: &'a str,
        random_int: Option<u64>,
    ) -> Self {
        let hint_sign = engine.registry().resolve_sign(&hint);
        let hint_childs = hint.args().to_vec();
        DiagnosisContext {
            engine,
            config,
            hint,
            hint_sign,
            hint_childs,
            pith,
            owner,
            exception_prefix,
            cause_indent: config.cause_indent.clone(),
            random_int,
        }
    }

    /// A copy of this context with the given fields replaced.
    pub fn permute<'b>(&'b self, changes: Permutation<'b>) -> DiagnosisContext<'b> {
        let (hint, hint_sign, hint_childs) = match changes.hint {
            Some(hint) => {
                let sign = self.registry().resolve_sign(&hint);
                let childs = hint.args().to_vec();
                (hint, sign, childs)
            }
            None => (
                self.hint.clone(),
                self.hint_sign,
                self.hint_childs.clone(),
            ),
        };
        DiagnosisContext {
            engine: self.engine,
            config: self.config,
            hint,
            hint_sign,
            hint_childs,
            pith: changes.pith.unwrap_or(self.pith),
            owner: self.owner,
            exception_prefix: self.exception_prefix,
            cause_indent: changes
                .cause_indent
                .unwrap_or_else(|| self.cause_indent.clone()),
            random_int: changes.random_int.unwrap_or(self.random_int),
        }
    }

    /// Same pith, different hint.
    pub fn permute_hint(&self, hint: Hint) -> DiagnosisContext<'_> {
        self.permute(Permutation {
            hint: Some(hint),
            ..Permutation::default()
        })
    }

    /// A child hint applied to a child pith.
    pub fn permute_item<'b>(&'b self, hint: Hint, pith: &'b Value) -> DiagnosisContext<'b> {
        self.permute(Permutation {
            hint: Some(hint),
            pith: Some(pith),
            ..Permutation::default()
        })
    }

    /// Diagnose this context through the dispatch table.
    ///
    /// Pure: the same context always yields an equal result.
    pub fn get_cause_or_none(&self) -> DiagnoseResult {
        let Some(sign) = self.hint_sign else {
            error!(hint = %self.hint, "no sign for hint");
            return Err(InternalError::UnsupportedHint {
                hint: self.hint.to_string(),
            }
            .into());
        };
        let Some(diagnoser) = self.engine.table().get(sign) else {
            error!(%sign, hint = %self.hint, "no diagnoser for sign");
            return Err(InternalError::NoDiagnoser {
                sign: sign.to_string(),
            }
            .into());
        };
        trace!(%sign, diagnoser = diagnoser.name(), hint = %self.hint, "diagnosing");
        ensure_sufficient_stack(|| diagnoser.diagnose(self))
    }

    pub fn hint(&self) -> &Hint {
        &self.hint
    }

    pub fn hint_sign(&self) -> Option<Sign> {
        self.hint_sign
    }

    pub fn hint_childs(&self) -> &[HintArg] {
        &self.hint_childs
    }

    /// First child, when it is a hint.
    pub fn first_child_hint(&self) -> Option<&Hint> {
        self.hint_childs.first().and_then(HintArg::as_hint)
    }

    pub fn pith(&self) -> &'a Value {
        self.pith
    }

    pub fn owner(&self) -> &'a Callable {
        self.owner
    }

    pub fn exception_prefix(&self) -> &'a str {
        self.exception_prefix
    }

    pub fn cause_indent(&self) -> &str {
        &self.cause_indent
    }

    pub fn random_int(&self) -> Option<u64> {
        self.random_int
    }

    pub fn registry(&self) -> &'a SignRegistry {
        self.engine.registry()
    }

    pub fn config(&self) -> &'a RaiseConfig {
        self.config
    }

    /// Whether `hint` is satisfied by every pith.
    pub fn is_ignorable(&self, hint: &Hint) -> bool {
        is_hint_ignorable(hint, self.registry())
    }

    /// Capped representation of the pith, e.g. `'abc'`.
    pub fn pith_repr(&self) -> String {
        represent(self.pith, self.config.repr_max_len)
    }

    /// Type-prefixed pith label, e.g. `str 'abc'`.
    pub fn pith_label(&self) -> String {
        label_pith(self.pith, self.config.repr_max_len)
    }
}
