use serde::{Deserialize, Serialize};

/// Everything the stats view shows, computed in one pass over the trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripSummary {
    /// Per-person budget times the number of configured people
    pub total_budget: f64,

    /// Sum of all expense amounts
    pub total_spent: f64,

    /// total_budget - total_spent. Negative when the group is over budget.
    pub remaining: f64,

    /// One row per configured person, in list order. A duplicated name
    /// produces duplicate rows, each showing that name's full spend.
    pub people: Vec<PersonSummary>,
}

/// Spend-versus-budget row for one configured person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonSummary {
    /// Display name as configured
    pub name: String,

    /// The per-person budget (same for everyone)
    pub budget: f64,

    /// Total of expenses this person paid
    pub spent: f64,

    /// budget - spent
    pub remaining: f64,
}
