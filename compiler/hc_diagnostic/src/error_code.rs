use std::fmt;

/// Error codes for every error hintcheck raises.
///
/// Format: a letter and four digits, where the first digit is the family:
/// - V1xxx: Type-hint violations (the checked data is wrong)
/// - E2xxx: Forward reference resolution failures
/// - E9xxx: Internal errors (hintcheck is wrong)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorCode {
    // Violations (V1xxx)
    /// Parameter violates its hint
    V1001,
    /// Return value violates its hint
    V1002,

    // Forward references (E2xxx)
    /// Forward reference does not resolve
    E2001,
    /// Forward reference resolves to something other than a class
    E2002,

    // Internal errors (E9xxx)
    /// Pith has no annotation on its callable
    E9001,
    /// `Annotated` metadata is not a validator
    E9002,
    /// Hint has no sign
    E9003,
    /// Sign has no diagnoser
    E9004,
    /// Compiled check and diagnosis disagree
    E9005,
    /// Diagnosis engine failed to build
    E9006,
}

impl ErrorCode {
    /// All codes, in numeric order.
    pub const ALL: [ErrorCode; 10] = [
        ErrorCode::V1001,
        ErrorCode::V1002,
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E9001,
        ErrorCode::E9002,
        ErrorCode::E9003,
        ErrorCode::E9004,
        ErrorCode::E9005,
        ErrorCode::E9006,
    ];

    /// Get the code as a string (e.g., "V1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::V1001 => "V1001",
            ErrorCode::V1002 => "V1002",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E9001 => "E9001",
            ErrorCode::E9002 => "E9002",
            ErrorCode::E9003 => "E9003",
            ErrorCode::E9004 => "E9004",
            ErrorCode::E9005 => "E9005",
            ErrorCode::E9006 => "E9006",
        }
    }

    /// One-line description of the error family member.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::V1001 => "parameter violates its type hint",
            ErrorCode::V1002 => "return value violates its type hint",
            ErrorCode::E2001 => "forward reference does not resolve",
            ErrorCode::E2002 => "forward reference does not name a class",
            ErrorCode::E9001 => "checked value has no type hint",
            ErrorCode::E9002 => "annotated metadata is not a validator",
            ErrorCode::E9003 => "type hint is unsupported",
            ErrorCode::E9004 => "hint sign has no diagnoser",
            ErrorCode::E9005 => "compiled check and diagnosis disagree",
            ErrorCode::E9006 => "diagnosis engine failed to build",
        }
    }

    /// Check if this is a violation (V1xxx range).
    pub fn is_violation(&self) -> bool {
        self.as_str().starts_with('V')
    }

    /// Check if this is a forward reference failure (E2xxx range).
    pub fn is_forward_ref(&self) -> bool {
        self.as_str().starts_with("E2")
    }

    /// Check if this is an internal error (E9xxx range).
    pub fn is_internal(&self) -> bool {
        self.as_str().starts_with("E9")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
