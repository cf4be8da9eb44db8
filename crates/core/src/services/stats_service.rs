use std::collections::HashMap;

use crate::models::expense::Expense;
use crate::models::summary::{PersonSummary, TripSummary};
use crate::models::trip::Trip;

/// Bucket name for expenses whose payer field is empty.
pub const UNKNOWN_PAYER: &str = "Unknown";

/// Computes the derived views: totals, per-person spend, display
/// ordering. Nothing is cached; every value is recomputed from the trip
/// on each call, so the views can never drift from the stored state.
pub struct StatsService;

impl StatsService {
    pub fn new() -> Self {
        Self
    }

    /// Total budget for the whole group: per-person budget times the
    /// number of configured people (duplicates included).
    #[must_use]
    pub fn total_budget(&self, trip: &Trip) -> f64 {
        trip.budget_per_person * trip.people.len() as f64
    }

    /// Sum of all expense amounts.
    #[must_use]
    pub fn total_spent(&self, trip: &Trip) -> f64 {
        trip.expenses.iter().map(|e| e.amount).sum()
    }

    /// Money left: total budget minus total spent. Negative when the
    /// group is over budget.
    #[must_use]
    pub fn remaining(&self, trip: &Trip) -> f64 {
        self.total_budget(trip) - self.total_spent(trip)
    }

    /// How much each payer has spent. Every configured person appears,
    /// at 0.0 if they paid nothing; payers missing from the configured
    /// list still accumulate under their own name; expenses with an
    /// empty payer are bucketed under [`UNKNOWN_PAYER`]. The values
    /// always sum to [`Self::total_spent`].
    #[must_use]
    pub fn per_person_spent(&self, trip: &Trip) -> HashMap<String, f64> {
        let mut totals: HashMap<String, f64> =
            trip.people.iter().map(|p| (p.clone(), 0.0)).collect();

        for expense in &trip.expenses {
            let name = if expense.paid_by.is_empty() {
                UNKNOWN_PAYER
            } else {
                expense.paid_by.as_str()
            };
            *totals.entry(name.to_string()).or_insert(0.0) += expense.amount;
        }

        totals
    }

    /// Expenses in display order: ascending by date, stable, so same-day
    /// expenses keep their insertion order. Sorts a vector of references;
    /// the stored order is untouched.
    #[must_use]
    pub fn expenses_by_date<'a>(&self, trip: &'a Trip) -> Vec<&'a Expense> {
        let mut expenses: Vec<&Expense> = trip.expenses.iter().collect();
        expenses.sort_by_key(|e| e.date);
        expenses
    }

    /// Build the full stats model: group totals plus a spend-vs-budget
    /// row for every configured person, in list order.
    #[must_use]
    pub fn summarize(&self, trip: &Trip) -> TripSummary {
        let totals = self.per_person_spent(trip);
        let people = trip
            .people
            .iter()
            .map(|name| {
                let spent = totals.get(name).copied().unwrap_or(0.0);
                PersonSummary {
                    name: name.clone(),
                    budget: trip.budget_per_person,
                    spent,
                    remaining: trip.budget_per_person - spent,
                }
            })
            .collect();

        let total_budget = self.total_budget(trip);
        let total_spent = self.total_spent(trip);
        TripSummary {
            total_budget,
            total_spent,
            remaining: total_budget - total_spent,
            people,
        }
    }
}

impl Default for StatsService {
    fn default() -> Self {
        Self::new()
    }
}
