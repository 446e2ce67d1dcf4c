use std::fmt;

/// Error codes for call-site diagnostics.
///
/// Format: E#### where the first digit is the phase. Only the type phase
/// (E2xxx) produces diagnostics here.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Unknown function
    E2001,
    /// No applicable overload (including wrong argument count)
    E2002,
    /// Ambiguous call
    E2003,
}

impl ErrorCode {
    /// The code as written in output (e.g., "E2001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
