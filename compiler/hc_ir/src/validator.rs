//! Validator metadata attached to `Annotated` hints.
//!
//! Validators are consulted strictly in declaration order. Each one answers
//! whether a pith is valid and, when asked, explains its verdict as
//! (possibly multi-line) text indented by the caller.

use std::fmt;
use std::sync::Arc;

use crate::Value;

/// Contract for objects usable as `Annotated` metadata.
pub trait Validator: fmt::Debug + fmt::Display + Send + Sync {
    /// Whether `pith` satisfies this validator.
    fn is_valid(&self, pith: &Value) -> bool;

    /// Explain the verdict for `pith`, each line prefixed by `indent`.
    fn get_diagnosis(&self, pith: &Value, indent: &str) -> String;
}

type Predicate = dyn Fn(&Value) -> bool + Send + Sync;

/// Validator backed by a named predicate, rendered as `Is[name]`.
#[derive(Clone)]
pub struct Is {
    name: String,
    predicate: Arc<Predicate>,
}

impl Is {
    pub fn new(
        name: impl Into<String>,
        predicate: impl Fn(&Value) -> bool + Send + Sync + 'static,
    ) -> Self {
        Is {
            name: name.into(),
            predicate: Arc::new(predicate),
        }
    }
}

impl fmt::Debug for Is {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Is").field("name", &self.name).finish_non_exhaustive()
    }
}

impl fmt::Display for Is {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Is[{}]", self.name)
    }
}

impl Validator for Is {
    fn is_valid(&self, pith: &Value) -> bool {
        (self.predicate)(pith)
    }

    fn get_diagnosis(&self, pith: &Value, indent: &str) -> String {
        format!("{indent}{} == {self}.", verdict(self.is_valid(pith)))
    }
}

/// Conjunction of validators, rendered as `v1 & v2 & ...`.
#[derive(Clone, Debug)]
pub struct IsAll {
    members: Vec<Arc<dyn Validator>>,
}

impl IsAll {
    pub fn new(members: impl IntoIterator<Item = Arc<dyn Validator>>) -> Self {
        IsAll {
            members: members.into_iter().collect(),
        }
    }
}

impl fmt::Display for IsAll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, member) in self.members.iter().enumerate() {
            if i > 0 {
                f.write_str(" & ")?;
            }
            write!(f, "{member}")?;
        }
        Ok(())
    }
}

impl Validator for IsAll {
    fn is_valid(&self, pith: &Value) -> bool {
        self.members.iter().all(|member| member.is_valid(pith))
    }

    fn get_diagnosis(&self, pith: &Value, indent: &str) -> String {
        let inner = format!("{indent}    ");
        let mut lines = vec![format!("{indent}{} == (", verdict(self.is_valid(pith)))];
        lines.extend(
            self.members
                .iter()
                .map(|member| member.get_diagnosis(pith, &inner)),
        );
        lines.push(format!("{indent})."));
        lines.join("\n")
    }
}

fn verdict(valid: bool) -> &'static str {
    if valid {
        "True"
    } else {
        "False"
    }
}
