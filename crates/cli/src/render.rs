use trip_ledger_core::TripLedger;

/// Print the whole trip view: setup, group totals, per-person rows, and
/// the expense table in date order. Runs after every mutation so the
/// user always sees the full picture, never a partial update.
pub fn render(ledger: &TripLedger) {
    let trip = ledger.trip();
    let summary = ledger.summary();

    println!();
    println!(
        "Per-person budget: {}   People: {}",
        format_amount(trip.budget_per_person),
        trip.people.join(", ")
    );
    println!(
        "Total budget: {}   Total spent: {}   Money left: {}",
        format_amount(summary.total_budget),
        format_amount(summary.total_spent),
        format_amount(summary.remaining)
    );

    println!();
    for person in &summary.people {
        println!(
            "  {:<20} spent {:>12}   left {:>12}",
            person.name,
            format_amount(person.spent),
            format_amount(person.remaining)
        );
    }

    let expenses = ledger.expenses_by_date();
    if expenses.is_empty() {
        println!();
        println!("No expenses yet.");
        return;
    }

    println!();
    println!(
        "{:<12} {:<12} {:<28} {:<16} {:>12}  {}",
        "Date", "Category", "Description", "Paid by", "Amount", "Id"
    );
    for expense in expenses {
        println!(
            "{:<12} {:<12} {:<28} {:<16} {:>12}  {}",
            expense.date.to_string(),
            expense.category,
            expense.description,
            expense.paid_by,
            format_amount(expense.amount),
            expense.id
        );
    }
}

/// Format an amount with thousands separators and exactly two fraction
/// digits, e.g. `1,234.50`.
pub fn format_amount(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as i64;
    let units = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(units.len() + units.len() / 3);
    for (i, digit) in units.chars().enumerate() {
        if i > 0 && (units.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped}.{fraction:02}")
}
