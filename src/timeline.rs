use crate::dates::normalize;
use crate::schema::{Order, Payment};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub const DEFAULT_FEED_LIMIT: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityKind {
    OrderCreated,
    PaymentReceived,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub kind: ActivityKind,
    pub title: String,
    pub subtitle: String,
    pub timestamp: NaiveDateTime,
}

/// Merges order-creation and payment-received events into one feed,
/// most recent first, capped at `limit`.
///
/// Order entries take their timestamp from `date` with `created_at` as
/// fallback; records where neither parses are left out of the feed rather
/// than pinned to a fabricated instant. The payment subtitle resolves the
/// paying customer against the order snapshot and reads "Unknown" for
/// orphans. Ties keep insertion order (orders ahead of payments), so the
/// feed is deterministic for a fixed snapshot.
pub fn build(orders: &[Order], payments: &[Payment], limit: usize) -> Vec<ActivityEntry> {
    let mut feed: Vec<ActivityEntry> = Vec::with_capacity(orders.len() + payments.len());

    for order in orders {
        let timestamp = normalize(Some(&order.date))
            .or_else(|| normalize(order.created_at.as_deref()));
        let Some(timestamp) = timestamp else {
            continue;
        };
        feed.push(ActivityEntry {
            kind: ActivityKind::OrderCreated,
            title: format!("Order {}", order.bill_no),
            subtitle: order.customer_name.clone(),
            timestamp,
        });
    }

    for payment in payments {
        let Some(timestamp) = normalize(Some(&payment.date)) else {
            continue;
        };
        let customer = orders
            .iter()
            .find(|o| o.id == payment.order_id)
            .map(|o| o.customer_name.as_str())
            .unwrap_or("Unknown");
        feed.push(ActivityEntry {
            kind: ActivityKind::PaymentReceived,
            title: format!("Payment of {:.2}", payment.amount),
            subtitle: customer.to_string(),
            timestamp,
        });
    }

    // Stable sort keeps insertion order for equal timestamps.
    feed.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    feed.truncate(limit);
    feed
}
