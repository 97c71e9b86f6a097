//! Violation diagnosis.
//!
//! Runs only after a compiled check has already rejected a pith. Diagnosis
//! walks the hint tree again, slowly, to find *why* the pith failed and turns
//! that into a [`CheckError`](hc_diagnostic::CheckError).
//!
//! # Architecture
//!
//! ```text
//! Engine::raise_violation(owner, pith_name, pith, random_int)
//!     └── DiagnosisContext (root hint, pith, exception prefix)
//!         └── get_cause_or_none
//!             ├── sign = registry.resolve_sign(hint)
//!             ├── diagnoser = DispatchTable[sign]
//!             └── diagnoser(ctx) ── recurses via ctx.permute(..)
//! ```
//!
//! The [`Engine`] bundles the sign registry and the dispatch table. Both are
//! built once and are read-only afterwards, so a single engine can be shared
//! across threads.

mod config;
mod context;
mod diagnosers;
mod dispatch;
mod engine;
mod raise;

#[cfg(test)]
mod test_helpers;

pub use config::RaiseConfig;
pub use context::{DiagnoseResult, DiagnosisContext, Permutation};
pub use diagnosers::sample_index;
pub use dispatch::{Diagnoser, DispatchTable, TableError};
pub use engine::{Engine, EngineError};
