use chrono::NaiveDate;
use trip_ledger_core::models::expense::{
    round_to_cents, Expense, ExpenseDraft, DEFAULT_CATEGORY,
};
use trip_ledger_core::models::trip::{Trip, DEFAULT_BUDGET_PER_PERSON, DEFAULT_PERSON};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

// ═══════════════════════════════════════════════════════════════════
//  Trip
// ═══════════════════════════════════════════════════════════════════

mod trip {
    use super::*;

    #[test]
    fn default_budget_is_1000() {
        assert_eq!(Trip::default().budget_per_person, DEFAULT_BUDGET_PER_PERSON);
        assert_eq!(Trip::default().budget_per_person, 1000.0);
    }

    #[test]
    fn default_people_is_me() {
        assert_eq!(Trip::default().people, vec![DEFAULT_PERSON.to_string()]);
    }

    #[test]
    fn default_has_no_expenses() {
        assert!(Trip::default().expenses.is_empty());
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let trip = Trip::default();
        let value = serde_json::to_value(&trip).unwrap();
        let object = value.as_object().unwrap();
        assert!(object.contains_key("budgetPerPerson"));
        assert!(object.contains_key("people"));
        assert!(object.contains_key("expenses"));
        assert!(!object.contains_key("budget_per_person"));
    }

    #[test]
    fn missing_budget_reads_back_as_zero() {
        let trip: Trip = serde_json::from_str(r#"{"people":["Me"],"expenses":[]}"#).unwrap();
        assert_eq!(trip.budget_per_person, 0.0);
    }

    #[test]
    fn missing_people_fails_to_parse() {
        let result = serde_json::from_str::<Trip>(r#"{"budgetPerPerson":5,"expenses":[]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn missing_expenses_fails_to_parse() {
        let result = serde_json::from_str::<Trip>(r#"{"budgetPerPerson":5,"people":[]}"#);
        assert!(result.is_err());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Expense wire format
// ═══════════════════════════════════════════════════════════════════

mod expense_wire_format {
    use super::*;

    fn sample() -> Expense {
        Expense {
            id: "e1".to_string(),
            date: d(2024, 3, 15),
            category: "Food".to_string(),
            description: "tacos".to_string(),
            paid_by: "Ana".to_string(),
            amount: 19.99,
        }
    }

    #[test]
    fn description_serializes_as_desc() {
        let value = serde_json::to_value(sample()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object["desc"], "tacos");
        assert!(!object.contains_key("description"));
    }

    #[test]
    fn paid_by_serializes_camel_case() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value.as_object().unwrap()["paidBy"], "Ana");
    }

    #[test]
    fn date_serializes_as_iso_8601() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value.as_object().unwrap()["date"], "2024-03-15");
    }

    #[test]
    fn parses_records_exported_by_older_builds() {
        // Non-UUID id, all fields present, in the historical field names.
        let json = r#"{
            "id": "abc123",
            "date": "2023-11-02",
            "category": "Transport",
            "desc": "bus to the coast",
            "paidBy": "Ben",
            "amount": 12.5
        }"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.id, "abc123");
        assert_eq!(expense.date, d(2023, 11, 2));
        assert_eq!(expense.description, "bus to the coast");
        assert_eq!(expense.paid_by, "Ben");
        assert_eq!(expense.amount, 12.5);
    }

    #[test]
    fn optional_fields_default_when_absent() {
        let json = r#"{"id":"x","date":"2024-01-01"}"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.category, "");
        assert_eq!(expense.description, "");
        assert_eq!(expense.paid_by, "");
        assert_eq!(expense.amount, 0.0);
    }

    #[test]
    fn missing_date_fails_to_parse() {
        let result = serde_json::from_str::<Expense>(r#"{"id":"x","amount":5}"#);
        assert!(result.is_err());
    }

    #[test]
    fn round_trips_through_json() {
        let expense = sample();
        let json = serde_json::to_string(&expense).unwrap();
        let back: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(expense, back);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  ExpenseDraft resolution (the defaulting policy)
// ═══════════════════════════════════════════════════════════════════

mod draft_resolution {
    use super::*;

    #[test]
    fn fills_every_default() {
        let draft = ExpenseDraft {
            amount: 10.0,
            ..Default::default()
        };
        let expense = draft.resolve("Ana", d(2024, 5, 1));
        assert_eq!(expense.date, d(2024, 5, 1));
        assert_eq!(expense.category, DEFAULT_CATEGORY);
        assert_eq!(expense.description, "");
        assert_eq!(expense.paid_by, "Ana");
        assert_eq!(expense.amount, 10.0);
    }

    #[test]
    fn keeps_supplied_fields() {
        let draft = ExpenseDraft {
            date: Some(d(2024, 2, 29)),
            category: Some("Food".to_string()),
            description: Some("breakfast".to_string()),
            paid_by: Some("Ben".to_string()),
            amount: 7.25,
        };
        let expense = draft.resolve("Ana", d(2024, 5, 1));
        assert_eq!(expense.date, d(2024, 2, 29));
        assert_eq!(expense.category, "Food");
        assert_eq!(expense.description, "breakfast");
        assert_eq!(expense.paid_by, "Ben");
        assert_eq!(expense.amount, 7.25);
    }

    #[test]
    fn empty_category_becomes_other() {
        let draft = ExpenseDraft {
            category: Some(String::new()),
            amount: 1.0,
            ..Default::default()
        };
        let expense = draft.resolve("Ana", d(2024, 5, 1));
        assert_eq!(expense.category, "Other");
    }

    #[test]
    fn empty_payer_falls_back() {
        let draft = ExpenseDraft {
            paid_by: Some(String::new()),
            amount: 1.0,
            ..Default::default()
        };
        let expense = draft.resolve("Ana", d(2024, 5, 1));
        assert_eq!(expense.paid_by, "Ana");
    }

    #[test]
    fn description_is_trimmed() {
        let draft = ExpenseDraft {
            description: Some("  shared cab  ".to_string()),
            amount: 1.0,
            ..Default::default()
        };
        let expense = draft.resolve("Ana", d(2024, 5, 1));
        assert_eq!(expense.description, "shared cab");
    }

    #[test]
    fn whitespace_description_becomes_empty() {
        let draft = ExpenseDraft {
            description: Some("   ".to_string()),
            amount: 1.0,
            ..Default::default()
        };
        let expense = draft.resolve("Ana", d(2024, 5, 1));
        assert_eq!(expense.description, "");
    }

    #[test]
    fn rounds_the_amount() {
        let draft = ExpenseDraft {
            amount: 10.0 / 3.0,
            ..Default::default()
        };
        let expense = draft.resolve("Ana", d(2024, 5, 1));
        assert_eq!(expense.amount, 3.33);
    }

    #[test]
    fn every_resolution_gets_a_fresh_id() {
        let a = ExpenseDraft {
            amount: 1.0,
            ..Default::default()
        }
        .resolve("Ana", d(2024, 5, 1));
        let b = ExpenseDraft {
            amount: 1.0,
            ..Default::default()
        }
        .resolve("Ana", d(2024, 5, 1));
        assert_ne!(a.id, b.id);
        assert!(!a.id.is_empty());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Cent rounding
// ═══════════════════════════════════════════════════════════════════

mod rounding {
    use super::*;

    #[test]
    fn exact_half_rounds_away_from_zero() {
        // 0.125 is exactly representable; 0.125 * 100 is exactly 12.5.
        assert_eq!(round_to_cents(0.125), 0.13);
    }

    #[test]
    fn scaling_happens_in_f64() {
        // 19.995 * 100.0 lands just below 1999.5, so it rounds down.
        assert_eq!(round_to_cents(19.995), 19.99);
        // Same effect for the textbook 2.675 case.
        assert_eq!(round_to_cents(2.675), 2.67);
    }

    #[test]
    fn truncates_long_fractions() {
        assert_eq!(round_to_cents(10.0 / 3.0), 3.33);
    }

    #[test]
    fn leaves_already_rounded_values_alone() {
        assert_eq!(round_to_cents(7.0), 7.0);
        assert_eq!(round_to_cents(19.99), 19.99);
        assert_eq!(round_to_cents(0.25), 0.25);
    }
}
