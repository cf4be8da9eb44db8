use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category used when the caller doesn't pick one.
pub const DEFAULT_CATEGORY: &str = "Other";

/// A single logged expense.
///
/// **Important**: the id is an opaque string, not a parsed UUID. Freshly
/// created expenses get a v4 UUID, but ids arriving through snapshot
/// import are kept verbatim whatever their shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Unique identifier, never reused within a trip
    pub id: String,

    /// Date of the expense (no time component, daily granularity)
    pub date: NaiveDate,

    /// Spending category, e.g. "Food" or "Transport"
    #[serde(default)]
    pub category: String,

    /// Free-text note on what the money went to. May be empty.
    #[serde(default, rename = "desc")]
    pub description: String,

    /// Display name of whoever paid. Should match an entry in the trip's
    /// people list, but that is not enforced anywhere.
    #[serde(default)]
    pub paid_by: String,

    /// Amount spent, stored rounded to cents
    #[serde(default)]
    pub amount: f64,
}

/// Caller-supplied fields for a new expense. Everything except the
/// amount is optional; [`ExpenseDraft::resolve`] is the single place
/// where the gaps get filled in.
#[derive(Debug, Clone, Default)]
pub struct ExpenseDraft {
    pub date: Option<NaiveDate>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub paid_by: Option<String>,
    pub amount: f64,
}

impl ExpenseDraft {
    /// Turn the draft into a fully-populated expense: missing date →
    /// `today`, missing or empty category → [`DEFAULT_CATEGORY`], missing
    /// or empty payer → `fallback_payer`, description trimmed, amount
    /// rounded to cents, fresh v4 UUID id.
    ///
    /// The amount is taken as-is apart from rounding; callers gate on
    /// positivity before resolving.
    #[must_use]
    pub fn resolve(self, fallback_payer: &str, today: NaiveDate) -> Expense {
        let category = match self.category {
            Some(c) if !c.is_empty() => c,
            _ => DEFAULT_CATEGORY.to_string(),
        };
        let paid_by = match self.paid_by {
            Some(p) if !p.is_empty() => p,
            _ => fallback_payer.to_string(),
        };
        Expense {
            id: Uuid::new_v4().to_string(),
            date: self.date.unwrap_or(today),
            category,
            description: self.description.unwrap_or_default().trim().to_string(),
            paid_by,
            amount: round_to_cents(self.amount),
        }
    }
}

/// Round to 2 fraction digits: scale by 100, round half away from zero,
/// scale back.
///
/// The scaling happens in f64, so decimals without an exact binary
/// representation round on their f64 value: `19.995 * 100.0` lands just
/// under 1999.5 and stores as `19.99`, while the exactly-representable
/// `0.125` rounds away from zero to `0.13`.
#[must_use]
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
