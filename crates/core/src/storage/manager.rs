use crate::errors::LedgerError;
use crate::models::trip::Trip;

use super::store::StateStore;

/// Fixed key the trip state lives under in the backing store.
pub const STORAGE_KEY: &str = "trip_ledger_v1";

/// High-level persistence: the trip's JSON round-trip through a
/// [`StateStore`].
pub struct StorageManager;

impl StorageManager {
    /// Load the persisted trip. A missing key, an unreadable store,
    /// corrupt JSON, and schema-invalid data all fall back to the
    /// default trip. Loading never fails and never surfaces corruption
    /// to the caller.
    #[must_use]
    pub fn load(store: &dyn StateStore) -> Trip {
        let bytes = match store.read(STORAGE_KEY) {
            Ok(Some(bytes)) => bytes,
            Ok(None) | Err(_) => return Trip::default(),
        };
        serde_json::from_slice(&bytes).unwrap_or_default()
    }

    /// Serialize the trip (compact JSON) and write it under
    /// [`STORAGE_KEY`]. Store failures surface to the caller; they are
    /// fatal to the one operation, never to the ledger.
    pub fn save(store: &mut dyn StateStore, trip: &Trip) -> Result<(), LedgerError> {
        let bytes = serde_json::to_vec(trip)?;
        store.write(STORAGE_KEY, &bytes)
    }
}
