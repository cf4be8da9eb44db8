use chrono::NaiveDate;

use crate::models::expense::ExpenseDraft;
use crate::models::trip::{Trip, DEFAULT_PERSON};

/// Applies user mutations to a [`Trip`]: setup changes, adding and
/// removing expenses.
///
/// Pure business logic with no I/O. Easy to test.
pub struct TripService;

impl TripService {
    pub fn new() -> Self {
        Self
    }

    /// Parse a user-supplied budget string. Anything that doesn't parse
    /// as a number counts as 0.
    #[must_use]
    pub fn parse_budget(&self, input: &str) -> f64 {
        input.trim().parse().unwrap_or(0.0)
    }

    /// Normalize a comma-separated people list: trim entries, drop
    /// empties, keep duplicates exactly as entered. Falls back to
    /// `["Me"]` so the list is never left empty.
    #[must_use]
    pub fn normalize_people(&self, input: &str) -> Vec<String> {
        let people: Vec<String> = input
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();
        if people.is_empty() {
            vec![DEFAULT_PERSON.to_string()]
        } else {
            people
        }
    }

    /// Replace the trip setup: budget and normalized people list.
    /// Existing expenses keep their `paid_by` values even when the payer
    /// is no longer listed.
    pub fn configure(&self, trip: &mut Trip, budget_per_person: f64, people_input: &str) {
        trip.budget_per_person = budget_per_person;
        trip.people = self.normalize_people(people_input);
    }

    /// Append an expense built from `draft`, with `today` anchoring the
    /// date default. Returns the new expense id, or `None` (trip left
    /// untouched) when the amount is not strictly positive. NaN is
    /// rejected the same way.
    pub fn add_expense(
        &self,
        trip: &mut Trip,
        draft: ExpenseDraft,
        today: NaiveDate,
    ) -> Option<String> {
        if draft.amount <= 0.0 || draft.amount.is_nan() {
            return None;
        }
        let fallback_payer = trip
            .people
            .first()
            .map(String::as_str)
            .unwrap_or(DEFAULT_PERSON);
        let expense = draft.resolve(fallback_payer, today);
        let id = expense.id.clone();
        trip.expenses.push(expense);
        Some(id)
    }

    /// Remove the expense with the given id. Returns `false` when
    /// nothing matched; deleting the same id twice is a harmless no-op.
    pub fn delete_expense(&self, trip: &mut Trip, id: &str) -> bool {
        let before = trip.expenses.len();
        trip.expenses.retain(|e| e.id != id);
        trip.expenses.len() < before
    }
}

impl Default for TripService {
    fn default() -> Self {
        Self::new()
    }
}
