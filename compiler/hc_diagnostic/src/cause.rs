//! Structured violation causes.
//!
//! A `Cause` is the leaf reason a pith fails (`CauseKind`) plus the path of
//! containers and bases leading to it. Diagnosers build the leaf and wrap it
//! with one [`PathSegment`] per level while recursion unwinds. Segments are
//! stored innermost-first and read back outermost-first. [`Cause::render`] is the only place that turns the
//! structure into text.

use std::fmt;

use smallvec::SmallVec;

/// One step from a container or generic down to the failing component.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum PathSegment {
    /// Item `index` of a `container` (`list`, `tuple`, `str`, ...).
    Index { container: String, index: usize },
    /// A pseudo-superclass of a generic.
    GenericBase { base: String },
}

/// The innermost reason a pith violates a hint.
///
/// `pith` fields hold a ready-made (capped) pith label or representation.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum CauseKind {
    /// Pith is not an instance of any of `expected`.
    NotInstance { pith: String, expected: Vec<String> },
    /// Pith is not a class at all.
    NotClass { pith: String },
    /// Pith is a class but not a subclass of any of `expected`.
    NotSubclass { pith: String, expected: Vec<String> },
    /// Fixed-length tuple of the wrong length.
    TupleLength {
        pith: String,
        found: usize,
        expected: usize,
    },
    /// `Tuple[()]` given a non-empty tuple.
    TupleNonEmpty { pith: String },
    /// Pith equals none of the literal values.
    LiteralMismatch { pith: String, literals: Vec<String> },
    /// An `Annotated` validator rejected the pith.
    ValidatorRejected {
        pith: String,
        validator: String,
        diagnosis: String,
    },
    /// Pith matches no branch of a union.
    UnionMismatch { pith: String, expected: Vec<String> },
    /// A never-returning callable returned.
    NoReturn { pith: String },
}

/// A structured explanation of a violation.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Cause {
    /// Innermost segment first.
    path: SmallVec<[PathSegment; 4]>,
    kind: CauseKind,
}

impl Cause {
    pub fn new(kind: CauseKind) -> Self {
        Cause {
            path: SmallVec::new(),
            kind,
        }
    }

    /// Prefix this cause with the segment leading into it.
    #[must_use]
    pub fn within(mut self, segment: PathSegment) -> Self {
        self.path.push(segment);
        self
    }

    /// Path from the outermost hint to the failing component.
    pub fn path(&self) -> impl ExactSizeIterator<Item = &PathSegment> + '_ {
        self.path.iter().rev()
    }

    pub fn kind(&self) -> &CauseKind {
        &self.kind
    }

    /// Indices along the path, outermost first.
    pub fn indices(&self) -> Vec<usize> {
        self.path()
            .filter_map(|segment| match segment {
                PathSegment::Index { index, .. } => Some(*index),
                PathSegment::GenericBase { .. } => None,
            })
            .collect()
    }

    /// Render as message text (without a trailing period).
    pub fn render(&self) -> String {
        let mut out = String::new();
        for segment in self.path() {
            match segment {
                PathSegment::Index { container, index } => {
                    out.push_str(&format!("{container} index {index} item "));
                }
                PathSegment::GenericBase { base } => {
                    out.push_str(&format!("generic base {base} "));
                }
            }
        }
        out.push_str(&self.kind.render());
        out
    }
}

impl CauseKind {
    fn render(&self) -> String {
        match self {
            CauseKind::NotInstance { pith, expected } => {
                format!("{pith} not instance of {}", expected.join(" or "))
            }
            CauseKind::NotClass { pith } => format!("{pith} not class"),
            CauseKind::NotSubclass { pith, expected } => {
                format!("{pith} not subclass of {}", expected.join(" or "))
            }
            CauseKind::TupleLength {
                pith,
                found,
                expected,
            } => format!("{pith} length {found} != {expected}"),
            CauseKind::TupleNonEmpty { pith } => format!("{pith} non-empty"),
            CauseKind::LiteralMismatch { pith, literals } => {
                format!("{pith} != {}", literals.join(" or "))
            }
            CauseKind::ValidatorRejected {
                pith,
                validator,
                diagnosis,
            } => format!("{pith} violates validator {validator}:\n{diagnosis}"),
            CauseKind::UnionMismatch { pith, expected } => {
                format!("{pith} not {}", join_disjunction(expected))
            }
            CauseKind::NoReturn { pith } => {
                format!("{pith} returned from callable annotated as never returning")
            }
        }
    }
}

/// `a`, `a or b`, `a, b, or c`.
fn join_disjunction(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} or {second}"),
        [init @ .., last] => format!("{}, or {last}", init.join(", ")),
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests;
