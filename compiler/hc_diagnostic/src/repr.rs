//! Length-capped representations for messages.

use hc_ir::Value;

/// Cap used when no configuration says otherwise.
pub const DEFAULT_REPR_MAX_LEN: usize = 96;

const ELLIPSIS: &str = "...";

/// Cut `repr` to at most `max_len` characters, marking the cut with `...`.
pub fn cap_repr(repr: String, max_len: usize) -> String {
    if repr.chars().count() <= max_len {
        return repr;
    }
    let keep = max_len.saturating_sub(ELLIPSIS.len());
    let mut capped: String = repr.chars().take(keep).collect();
    capped.push_str(ELLIPSIS);
    capped
}

/// Capped representation of `value`.
pub fn represent(value: &Value, max_len: usize) -> String {
    cap_repr(value.repr(), max_len)
}

/// Type-prefixed representation, e.g. `str 'abc'`.
pub fn label_pith(value: &Value, max_len: usize) -> String {
    format!("{} {}", value.type_name(), represent(value, max_len))
}
