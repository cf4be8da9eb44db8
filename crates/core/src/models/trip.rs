use serde::{Deserialize, Serialize};

use super::expense::Expense;

/// Budget assigned to each person on a fresh trip.
pub const DEFAULT_BUDGET_PER_PERSON: f64 = 1000.0;

/// The lone participant of a fresh trip, and the fallback when people
/// input normalizes to nothing.
pub const DEFAULT_PERSON: &str = "Me";

/// The main data container. Everything in here gets serialized as one
/// JSON document: to the backing store on every mutation, and to
/// snapshot files on export.
///
/// Wire field names are fixed (`budgetPerPerson`, `people`, `expenses`)
/// so snapshots keep round-tripping with files exported by older
/// builds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    /// Budget each person gets for the whole trip. Older snapshots may
    /// omit it; that reads back as 0.
    #[serde(default)]
    pub budget_per_person: f64,

    /// Participants in display order. Duplicate names are kept exactly
    /// as entered; each occurrence counts toward the total budget.
    pub people: Vec<String>,

    /// Logged expenses in insertion order. Display sorting works on a
    /// copy and never reorders this list.
    pub expenses: Vec<Expense>,
}

impl Default for Trip {
    fn default() -> Self {
        Self {
            budget_per_person: DEFAULT_BUDGET_PER_PERSON,
            people: vec![DEFAULT_PERSON.to_string()],
            expenses: Vec::new(),
        }
    }
}
