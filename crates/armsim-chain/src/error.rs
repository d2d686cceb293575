//! Error types for chain mutation.

use thiserror::Error;

use crate::component::ComponentKind;

/// Caller-contract violations of the positional-index addressing scheme.
///
/// Both variants are fail-fast: silently ignoring a mismatched mutation
/// would leave the chain in a physically inconsistent state that still
/// looks valid from the outside.
///
/// `Copy` + static messages for cheap propagation in hot paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChainError {
    /// Index at or past the end of the chain.
    #[error("component index out of range: {index} >= {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// The slot at `index` holds a different component kind.
    #[error("component kind mismatch at index {index}: expected {expected}, found {found}")]
    KindMismatch {
        index: usize,
        expected: ComponentKind,
        found: ComponentKind,
    },
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
