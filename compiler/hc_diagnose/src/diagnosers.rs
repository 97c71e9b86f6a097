//! Per-sign diagnosers.
//!
//! Each diagnoser decides whether its context's pith violates its hint and,
//! if so, returns the innermost [`Cause`](hc_diagnostic::Cause) wrapped with
//! one path segment per container it descended through. Recursion always goes
//! back through [`DiagnosisContext::get_cause_or_none`](crate::DiagnosisContext::get_cause_or_none)
//! so nested hints are dispatched by their own sign.

pub(crate) mod annotated;
pub(crate) mod forward_ref;
pub(crate) mod generic;
pub(crate) mod instance;
pub(crate) mod literal;
pub(crate) mod no_return;
pub(crate) mod sequence;
pub(crate) mod subclass;
pub(crate) mod tuple;
pub(crate) mod union;

/// Index of the single item a compiled check samples from a sequence of
/// `len` items, given the same `random_int`.
///
/// `len` must be non-zero.
#[allow(
    clippy::cast_possible_truncation,
    reason = "the remainder is below `len`, which is a usize"
)]
pub fn sample_index(random_int: u64, len: usize) -> usize {
    (random_int % len as u64) as usize
}

#[cfg(test)]
mod tests;
