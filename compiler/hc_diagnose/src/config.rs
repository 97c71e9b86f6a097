//! Knobs for how violations are rendered.

use hc_diagnostic::repr::DEFAULT_REPR_MAX_LEN;

/// Rendering configuration for [`Engine::raise_violation_with`](crate::Engine::raise_violation_with).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct RaiseConfig {
    /// Maximum characters of any pith representation.
    pub repr_max_len: usize,
    /// Prefix for each line of a validator's diagnosis.
    pub cause_indent: String,
}

impl Default for RaiseConfig {
    fn default() -> Self {
        RaiseConfig {
            repr_max_len: DEFAULT_REPR_MAX_LEN,
            cause_indent: "    ".to_owned(),
        }
    }
}
