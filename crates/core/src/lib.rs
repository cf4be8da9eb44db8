pub mod errors;
pub mod models;
pub mod services;
pub mod storage;

use std::collections::HashMap;

use chrono::NaiveDate;

use errors::LedgerError;
use models::expense::{Expense, ExpenseDraft};
use models::summary::TripSummary;
use models::trip::Trip;
use services::stats_service::StatsService;
use services::trip_service::TripService;
use storage::manager::StorageManager;
use storage::snapshot;
use storage::store::{MemoryStore, StateStore};

/// Main entry point for the Trip Ledger core library.
/// Holds the trip state, the store it persists through, and the
/// services that operate on it. Every mutation writes straight through
/// to the store; there is no separate save step to forget.
#[must_use]
pub struct TripLedger {
    trip: Trip,
    store: Box<dyn StateStore>,
    trip_service: TripService,
    stats_service: StatsService,
}

impl std::fmt::Debug for TripLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TripLedger")
            .field("budget_per_person", &self.trip.budget_per_person)
            .field("people", &self.trip.people.len())
            .field("expenses", &self.trip.expenses.len())
            .finish()
    }
}

impl TripLedger {
    /// Open a ledger over `store`, picking up whatever trip it holds.
    /// Missing, corrupt, or schema-invalid data silently degrades to the
    /// default trip (budget 1000, people `["Me"]`, no expenses), so
    /// opening never fails. Nothing is written back until the first
    /// mutation.
    pub fn open(store: Box<dyn StateStore>) -> Self {
        let trip = StorageManager::load(store.as_ref());
        Self {
            trip,
            store,
            trip_service: TripService::new(),
            stats_service: StatsService::new(),
        }
    }

    /// Open a ledger over a fresh in-memory store. Nothing outlives the
    /// value; meant for tests and throwaway sessions.
    pub fn in_memory() -> Self {
        Self::open(Box::new(MemoryStore::new()))
    }

    // ── Setup ───────────────────────────────────────────────────────

    /// Replace the trip setup: the per-person budget and the
    /// comma-separated people list (trimmed, empties dropped, duplicates
    /// kept, an empty result falls back to `["Me"]`). Expenses are left
    /// alone, including `paid_by` values naming people no longer listed.
    pub fn configure(
        &mut self,
        budget_per_person: f64,
        people_input: &str,
    ) -> Result<(), LedgerError> {
        self.trip_service
            .configure(&mut self.trip, budget_per_person, people_input);
        self.persist()
    }

    /// [`Self::configure`] over raw user input: the budget string goes
    /// through the non-numeric-counts-as-0 parse first.
    pub fn configure_from_input(
        &mut self,
        budget_input: &str,
        people_input: &str,
    ) -> Result<(), LedgerError> {
        let budget = self.trip_service.parse_budget(budget_input);
        self.configure(budget, people_input)
    }

    /// Throw the whole trip away and persist the default one.
    pub fn reset(&mut self) -> Result<(), LedgerError> {
        self.trip = Trip::default();
        self.persist()
    }

    // ── Expenses ────────────────────────────────────────────────────

    /// Add an expense from caller-supplied fields, filling in defaults
    /// (today's local date, "Other" category, first configured person as
    /// payer) and rounding the amount to cents. Returns `Ok(None)`
    /// without touching anything when the amount is not strictly
    /// positive; otherwise the fresh expense id.
    pub fn add_expense(&mut self, draft: ExpenseDraft) -> Result<Option<String>, LedgerError> {
        let today = chrono::Local::now().date_naive();
        self.add_expense_on(draft, today)
    }

    /// Same as [`Self::add_expense`] with the date-defaulting anchor
    /// supplied by the caller.
    pub fn add_expense_on(
        &mut self,
        draft: ExpenseDraft,
        today: NaiveDate,
    ) -> Result<Option<String>, LedgerError> {
        match self.trip_service.add_expense(&mut self.trip, draft, today) {
            Some(id) => {
                self.persist()?;
                Ok(Some(id))
            }
            None => Ok(None),
        }
    }

    /// Delete the expense with the given id. Unknown ids are a no-op
    /// (`Ok(false)`); deleting the same id twice is safe.
    pub fn delete_expense(&mut self, id: &str) -> Result<bool, LedgerError> {
        if self.trip_service.delete_expense(&mut self.trip, id) {
            self.persist()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    // ── Derived Views ───────────────────────────────────────────────

    /// Total budget for the whole group: per-person budget times the
    /// number of configured people. Recomputed on every call.
    #[must_use]
    pub fn total_budget(&self) -> f64 {
        self.stats_service.total_budget(&self.trip)
    }

    /// Sum of all expense amounts.
    #[must_use]
    pub fn total_spent(&self) -> f64 {
        self.stats_service.total_spent(&self.trip)
    }

    /// Money left for the whole group. Negative when over budget.
    #[must_use]
    pub fn remaining(&self) -> f64 {
        self.stats_service.remaining(&self.trip)
    }

    /// Spend per payer: every configured person at 0.0 or more, plus
    /// any payer named on an expense but missing from the people list.
    #[must_use]
    pub fn per_person_spent(&self) -> HashMap<String, f64> {
        self.stats_service.per_person_spent(&self.trip)
    }

    /// Expenses in display order: ascending by date, insertion order for
    /// ties. The stored order is never touched.
    #[must_use]
    pub fn expenses_by_date(&self) -> Vec<&Expense> {
        self.stats_service.expenses_by_date(&self.trip)
    }

    /// The full stats model in one call: group totals plus a row per
    /// configured person.
    #[must_use]
    pub fn summary(&self) -> TripSummary {
        self.stats_service.summarize(&self.trip)
    }

    /// The underlying trip state.
    #[must_use]
    pub fn trip(&self) -> &Trip {
        &self.trip
    }

    /// Number of logged expenses.
    #[must_use]
    pub fn expense_count(&self) -> usize {
        self.trip.expenses.len()
    }

    // ── Export / Import ─────────────────────────────────────────────

    /// Pretty-printed snapshot of the full trip. The caller writes it to
    /// a file ([`snapshot::EXPORT_FILE_NAME`] is the conventional name).
    pub fn export_snapshot(&self) -> Result<String, LedgerError> {
        snapshot::to_json(&self.trip)
    }

    /// Replace the whole trip with the parsed snapshot and persist it.
    /// Validation is shape-only (`people` and `expenses` must be arrays,
    /// records must fit the model); on any failure the current state is
    /// left untouched.
    pub fn import_snapshot(&mut self, text: &str) -> Result<(), LedgerError> {
        let trip = snapshot::from_json(text)?;
        self.trip = trip;
        self.persist()
    }

    // ── Internal ────────────────────────────────────────────────────

    /// Write-through: every successful mutation ends here.
    fn persist(&mut self) -> Result<(), LedgerError> {
        StorageManager::save(self.store.as_mut(), &self.trip)
    }
}
