//! Violation causes and the error taxonomy.
//!
//! - [`Cause`]: a structured explanation of *why* a pith violates a hint,
//!   built bottom-up while diagnosis unwinds and rendered by one function.
//! - [`CheckError`]: everything the raiser can produce. Violations are the
//!   user's problem; every other kind is ours and asks for a bug report.
//! - [`ErrorCode`]: stable codes for searchability.
//!
//! # Propagation
//!
//! Diagnosers report success or failure through `Option<Cause>`. Only the
//! fatal kinds ([`FatalError`]) travel through `Result`, unchanged, until the
//! raiser turns them into a [`CheckError`].

mod cause;
mod error_code;
pub mod errors;
pub mod repr;

pub use cause::{Cause, CauseKind, PathSegment};
pub use error_code::ErrorCode;
pub use errors::{
    CheckError, DesyncError, FatalError, ForwardRefError, InternalError, PithKind, Violation,
    BUG_REPORT_NUDGE,
};
