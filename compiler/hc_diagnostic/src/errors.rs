//! Error taxonomy.
//!
//! | kind            | whose fault | code  |
//! |-----------------|-------------|-------|
//! | `Violation`     | caller data | V1xxx |
//! | `ForwardRefError` | annotation  | E2xxx |
//! | `InternalError` | hintcheck   | E9001-E9004, E9006 |
//! | `DesyncError`   | hintcheck   | E9005 |

use thiserror::Error;

use crate::{Cause, ErrorCode};

/// Appended to every error that indicates a bug in hintcheck itself.
pub const BUG_REPORT_NUDGE: &str =
    "This is a bug in hintcheck; please report it with this message attached.";

/// Whether the checked value was a parameter or a return value.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum PithKind {
    Param,
    Return,
}

/// A pith violates the hint annotating it.
#[derive(Clone, Debug, Error)]
#[error("{prefix}violates type hint {hint}, as {cause}.")]
pub struct Violation {
    pub kind: PithKind,
    /// Human label, e.g. `Function app.f() parameter x='a' `.
    pub prefix: String,
    /// Representation of the violated root hint.
    pub hint: String,
    pub cause: Cause,
}

impl Violation {
    pub fn code(&self) -> ErrorCode {
        match self.kind {
            PithKind::Param => ErrorCode::V1001,
            PithKind::Return => ErrorCode::V1002,
        }
    }
}

/// A forward reference could not be turned into a class.
#[derive(Clone, Debug, Error)]
pub enum ForwardRefError {
    #[error("{prefix}forward reference '{name}' unresolvable in module '{module}'.")]
    Unresolved {
        prefix: String,
        name: String,
        module: String,
    },
    #[error("{prefix}forward reference '{name}' refers to a module rather than a class.")]
    NotClass { prefix: String, name: String },
}

impl ForwardRefError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ForwardRefError::Unresolved { .. } => ErrorCode::E2001,
            ForwardRefError::NotClass { .. } => ErrorCode::E2002,
        }
    }
}

/// A contract between hintcheck's stages was broken.
#[derive(Clone, Debug, Error)]
pub enum InternalError {
    #[error("{callable}() pith '{pith_name}' has no type hint. {nudge}", nudge = BUG_REPORT_NUDGE)]
    Unannotated { callable: String, pith_name: String },
    #[error(
        "type hint {hint} metadata {metadata} is not a validator. {nudge}",
        nudge = BUG_REPORT_NUDGE
    )]
    NonConformingValidator { hint: String, metadata: String },
    #[error("type hint {hint} is unsupported. {nudge}", nudge = BUG_REPORT_NUDGE)]
    UnsupportedHint { hint: String },
    #[error("hint sign {sign} has no diagnoser. {nudge}", nudge = BUG_REPORT_NUDGE)]
    NoDiagnoser { sign: String },
    #[error("diagnosis engine failed to build: {reason}. {nudge}", nudge = BUG_REPORT_NUDGE)]
    EngineUnavailable { reason: String },
}

impl InternalError {
    pub fn code(&self) -> ErrorCode {
        match self {
            InternalError::Unannotated { .. } => ErrorCode::E9001,
            InternalError::NonConformingValidator { .. } => ErrorCode::E9002,
            InternalError::UnsupportedHint { .. } => ErrorCode::E9003,
            InternalError::NoDiagnoser { .. } => ErrorCode::E9004,
            InternalError::EngineUnavailable { .. } => ErrorCode::E9006,
        }
    }
}

/// The compiled check rejected a pith that diagnosis finds satisfactory.
#[derive(Clone, Debug, Error)]
#[error(
    "{prefix}violates type hint {hint}, but no violation could be diagnosed for {pith}. \
     The compiled check and its diagnosis disagree. {nudge}",
    nudge = BUG_REPORT_NUDGE
)]
pub struct DesyncError {
    pub prefix: String,
    pub hint: String,
    /// Length-capped representation of the pith, for reproduction.
    pub pith: String,
}

/// Errors that abort diagnosis and propagate unchanged to the raiser.
#[derive(Clone, Debug, Error)]
pub enum FatalError {
    #[error(transparent)]
    ForwardRef(#[from] ForwardRefError),
    #[error(transparent)]
    Internal(#[from] InternalError),
}

/// Everything the raiser produces.
#[derive(Clone, Debug, Error)]
pub enum CheckError {
    #[error(transparent)]
    Violation(#[from] Violation),
    #[error(transparent)]
    ForwardRef(#[from] ForwardRefError),
    #[error(transparent)]
    Internal(#[from] InternalError),
    #[error(transparent)]
    Desync(#[from] DesyncError),
}

impl From<FatalError> for CheckError {
    fn from(err: FatalError) -> Self {
        match err {
            FatalError::ForwardRef(err) => CheckError::ForwardRef(err),
            FatalError::Internal(err) => CheckError::Internal(err),
        }
    }
}

impl CheckError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CheckError::Violation(err) => err.code(),
            CheckError::ForwardRef(err) => err.code(),
            CheckError::Internal(err) => err.code(),
            CheckError::Desync(_) => ErrorCode::E9005,
        }
    }

    pub fn as_violation(&self) -> Option<&Violation> {
        match self {
            CheckError::Violation(violation) => Some(violation),
            _ => None,
        }
    }

    /// Whether this error blames hintcheck rather than the checked data.
    pub fn is_bug(&self) -> bool {
        matches!(self, CheckError::Internal(_) | CheckError::Desync(_))
    }
}
