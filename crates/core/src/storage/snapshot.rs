use serde_json::Value;

use crate::errors::LedgerError;
use crate::models::trip::Trip;

/// Default filename for exported snapshots.
pub const EXPORT_FILE_NAME: &str = "trip-ledger-export.json";

/// Serialize the full trip as a pretty-printed (2-space indent)
/// snapshot, ready to write to a file.
pub fn to_json(trip: &Trip) -> Result<String, LedgerError> {
    serde_json::to_string_pretty(trip)
        .map_err(|e| LedgerError::Serialization(format!("Failed to serialize trip: {e}")))
}

/// Parse and validate snapshot text.
///
/// Validation is shape-only: the text must be a JSON object whose
/// `people` and `expenses` fields are arrays, and every record must fit
/// the typed model. Amounts, ids, dates, and payer names are imported
/// as-is with no semantic checks. Each stage reports its own failure so
/// the user learns what was wrong with the file.
pub fn from_json(text: &str) -> Result<Trip, LedgerError> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| LedgerError::InvalidSnapshot(format!("not valid JSON: {e}")))?;

    let object = value
        .as_object()
        .ok_or_else(|| LedgerError::InvalidSnapshot("expected a JSON object".into()))?;
    if !matches!(object.get("people"), Some(Value::Array(_))) {
        return Err(LedgerError::InvalidSnapshot(
            "'people' must be an array".into(),
        ));
    }
    if !matches!(object.get("expenses"), Some(Value::Array(_))) {
        return Err(LedgerError::InvalidSnapshot(
            "'expenses' must be an array".into(),
        ));
    }

    serde_json::from_value(value)
        .map_err(|e| LedgerError::InvalidSnapshot(format!("malformed trip data: {e}")))
}
