use thiserror::Error;

/// Error types for `IndexedVec` and `FixedBuffer` operations
///
/// Everything else that can "fail" (popping an empty vector, reading past the
/// logical size, a search without a match) is reported as `None`, not as an error.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum IndexedVecError {
    /// A type-erased value handed to `IndexedVec::from_any` is not a slot buffer
    #[error("Type mismatch: expected {expected}")]
    TypeMismatch {
        /// Name of the type that was expected
        expected: &'static str,
    },
    /// Slot index is beyond the buffer length
    #[error("Index out of bounds: index {index} is beyond buffer length {length}")]
    IndexOutOfBounds {
        /// Index that was accessed
        index: usize,
        /// Length of the buffer
        length: usize,
    },
    /// Input that cannot describe a vector
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of why the input was rejected
        reason: &'static str,
    },
}
