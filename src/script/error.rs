use std::fmt;

// ============================================================================
// Generation errors
// ============================================================================

/// "No test cases generated" conditions, tagged so the caller can choose
/// a precise user message.
///
/// Data-shape degradations (unrenderable operations, screen names that
/// normalize to nothing) never raise — they degrade to placeholder
/// comments or a `_` identifier instead.
#[derive(Debug, PartialEq, Eq)]
pub enum GenerateError {
    /// Graph/path construction produced no coverable screen transition
    NoSection,

    /// Simple mode found no usable operation after filtering
    NoOperation,
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::NoSection => {
                write!(f, "no screen transition sections were found in the trace")
            }
            GenerateError::NoOperation => {
                write!(f, "no testable operations remained after filtering")
            }
        }
    }
}

impl std::error::Error for GenerateError {}
