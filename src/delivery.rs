use crate::dates::{days_until, normalize_day, NO_DEADLINE_DAYS};
use crate::schema::{Order, OrderStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Per-order delivery risk annotation consumed by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeliveryRisk {
    /// Earliest active delivery date, when one could be determined.
    pub target_date: Option<NaiveDate>,
    /// Whole days until `target_date`, or [`NO_DEADLINE_DAYS`] when no
    /// deadline applies. Negative once the date has passed.
    pub days_remaining: i64,
    pub is_urgent: bool,
    /// 0-3 days remain and the order is still open.
    pub is_nearing_deadline: bool,
}

/// Derives the delivery risk for one order at day granularity.
///
/// Cancelled line items contribute neither dates nor urgency. The target
/// date is the earliest date among active items; an order-level delivery
/// date is the fallback when no active item carries one. Orders with no
/// determinable deadline get the far-future sentinel so they never surface
/// as at-risk.
pub fn evaluate(order: &Order, today: NaiveDate) -> DeliveryRisk {
    let active: Vec<_> = order
        .items
        .iter()
        .filter(|item| item.status != OrderStatus::Cancelled)
        .collect();

    let is_urgent = order.status != OrderStatus::Cancelled
        && (order.urgency.is_elevated() || active.iter().any(|item| item.urgency.is_elevated()));

    let item_target = active
        .iter()
        .filter_map(|item| normalize_day(item.delivery_date.as_deref()))
        .min();

    let target_date = item_target.or_else(|| normalize_day(order.delivery_date.as_deref()));

    let days_remaining = match target_date {
        Some(target) => days_until(target, today),
        None => NO_DEADLINE_DAYS,
    };

    let is_nearing_deadline = (0..=3).contains(&days_remaining)
        && !matches!(order.status, OrderStatus::Completed | OrderStatus::Cancelled);

    DeliveryRisk {
        target_date,
        days_remaining,
        is_urgent,
        is_nearing_deadline,
    }
}
