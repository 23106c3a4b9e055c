use crate::dates::normalize_day;
use crate::schema::Payment;
use chrono::{Datelike, NaiveDate};

/// Month-over-month growth of collected payments, as a percentage.
///
/// Payments are bucketed by the calendar month of their normalized date;
/// unparseable dates fall out of both buckets rather than polluting either.
/// A zero previous-month baseline reports 0.0 even when the current month
/// has activity: there is nothing comparable to grow from, and the
/// dashboard must not show an infinite or undefined figure.
pub fn collection_growth(payments: &[Payment], reference: NaiveDate) -> f64 {
    let current = (reference.year(), reference.month());
    let previous = previous_month(reference);

    let mut current_total = 0.0;
    let mut previous_total = 0.0;

    for payment in payments {
        let Some(date) = normalize_day(Some(&payment.date)) else {
            continue;
        };
        let bucket = (date.year(), date.month());
        if bucket == current {
            current_total += payment.amount;
        } else if bucket == previous {
            previous_total += payment.amount;
        }
    }

    if previous_total > 0.0 {
        (current_total - previous_total) / previous_total * 100.0
    } else {
        0.0
    }
}

/// Calendar month preceding the reference, wrapping January to December
/// of the prior year.
fn previous_month(reference: NaiveDate) -> (i32, u32) {
    if reference.month() == 1 {
        (reference.year() - 1, 12)
    } else {
        (reference.year(), reference.month() - 1)
    }
}
