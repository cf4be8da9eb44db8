use thiserror::Error;

/// Unified error type for the trip-ledger-core library.
/// Every fallible public function returns `Result<T, LedgerError>`.
///
/// Corrupt persisted state is deliberately absent here: loading always
/// falls back to the default trip instead of erroring. Invalid user
/// input (a non-positive amount, an unknown expense id) is a silent
/// no-op, not an error.
#[derive(Debug, Error)]
pub enum LedgerError {
    // ── Snapshot import ─────────────────────────────────────────────
    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    // ── Persistence ─────────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for LedgerError {
    fn from(e: std::io::Error) -> Self {
        LedgerError::Storage(e.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(e: serde_json::Error) -> Self {
        LedgerError::Serialization(e.to_string())
    }
}
