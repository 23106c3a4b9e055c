use crate::schema::{Order, Payment};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Aggregate money position across one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancialTotals {
    pub total_revenue: f64,
    pub total_collected: f64,
    /// `total_revenue - total_collected`, exactly. Negative when collections
    /// exceed billed totals (over-collection); no floor is applied.
    pub pending_amount: f64,
}

/// Sums revenue, collected and pending amounts for a snapshot.
///
/// Revenue counts every order regardless of status, Cancelled included:
/// the work historically occurred and the stored ledger reflects it.
/// Collected counts only payments whose `order_id` resolves against the
/// snapshot; orphaned payments stay visible to direct queries but never
/// enter aggregate math.
pub fn aggregate(orders: &[Order], payments: &[Payment]) -> FinancialTotals {
    let valid_ids: HashSet<&str> = orders.iter().map(|o| o.id.as_str()).collect();

    let total_revenue: f64 = orders.iter().map(|o| o.total).sum();
    let total_collected: f64 = payments
        .iter()
        .filter(|p| valid_ids.contains(p.order_id.as_str()))
        .map(|p| p.amount)
        .sum();

    FinancialTotals {
        total_revenue,
        total_collected,
        pending_amount: total_revenue - total_collected,
    }
}

/// Which reading of an order's outstanding amount to trust.
///
/// The data layer maintains `balance` independently of the payment ledger,
/// so the two can drift. Both readings are exposed; [`reconcile_balances`]
/// reports where they disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BalanceSource {
    /// Read the stored `balance` field as-is.
    Stored,
    /// Recompute `total - Σ payments` from the ledger (orphans excluded by
    /// construction since the order is present).
    Derived,
}

pub fn order_balance(order: &Order, payments: &[Payment], source: BalanceSource) -> f64 {
    match source {
        BalanceSource::Stored => order.balance,
        BalanceSource::Derived => {
            let paid: f64 = payments
                .iter()
                .filter(|p| p.order_id == order.id)
                .map(|p| p.amount)
                .sum();
            order.total - paid
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceDrift {
    pub order_id: String,
    pub bill_no: String,
    pub stored: f64,
    pub derived: f64,
    pub difference: f64,
}

/// Flags orders whose stored balance diverges from the ledger-derived one
/// by more than `tolerance`. Divergence is reported, never corrected.
pub fn reconcile_balances(
    orders: &[Order],
    payments: &[Payment],
    tolerance: f64,
) -> Vec<BalanceDrift> {
    orders
        .iter()
        .filter_map(|order| {
            let stored = order_balance(order, payments, BalanceSource::Stored);
            let derived = order_balance(order, payments, BalanceSource::Derived);
            let difference = stored - derived;
            if difference.abs() > tolerance {
                Some(BalanceDrift {
                    order_id: order.id.clone(),
                    bill_no: order.bill_no.clone(),
                    stored,
                    derived,
                    difference,
                })
            } else {
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{OrderStatus, Urgency};

    fn order(id: &str, total: f64, balance: f64) -> Order {
        Order {
            id: id.to_string(),
            bill_no: format!("B-{id}"),
            customer_name: "Test".to_string(),
            date: "2026-08-01".to_string(),
            created_at: None,
            delivery_date: None,
            status: OrderStatus::Pending,
            total,
            balance,
            urgency: Urgency::None,
            items: vec![],
        }
    }

    fn payment(id: &str, order_id: &str, amount: f64) -> Payment {
        Payment {
            id: id.to_string(),
            order_id: order_id.to_string(),
            amount,
            date: "2026-08-10".to_string(),
        }
    }

    #[test]
    fn test_empty_inputs_yield_zeros() {
        let totals = aggregate(&[], &[]);
        assert_eq!(totals.total_revenue, 0.0);
        assert_eq!(totals.total_collected, 0.0);
        assert_eq!(totals.pending_amount, 0.0);
    }

    #[test]
    fn test_orphaned_payment_excluded() {
        let orders = vec![order("1", 1000.0, 600.0)];
        let payments = vec![payment("a", "1", 400.0), payment("b", "99", 999.0)];

        let totals = aggregate(&orders, &payments);
        assert_eq!(totals.total_revenue, 1000.0);
        assert_eq!(totals.total_collected, 400.0);
        assert_eq!(totals.pending_amount, 600.0);
    }

    #[test]
    fn test_removing_order_orphans_its_payments() {
        let orders = vec![order("1", 1000.0, 0.0), order("2", 500.0, 0.0)];
        let payments = vec![payment("a", "1", 400.0), payment("b", "2", 500.0)];

        let with_both = aggregate(&orders, &payments);
        assert_eq!(with_both.total_collected, 900.0);

        let without_second = aggregate(&orders[..1], &payments);
        assert_eq!(without_second.total_collected, 400.0);
        assert_eq!(without_second.total_revenue, 1000.0);
    }

    #[test]
    fn test_cancelled_orders_still_count_in_revenue() {
        let mut cancelled = order("1", 750.0, 750.0);
        cancelled.status = OrderStatus::Cancelled;
        let totals = aggregate(&[cancelled], &[]);
        assert_eq!(totals.total_revenue, 750.0);
    }

    #[test]
    fn test_negative_pending_representable() {
        let orders = vec![order("1", 100.0, 0.0)];
        let payments = vec![payment("a", "1", 250.0)];
        let totals = aggregate(&orders, &payments);
        assert_eq!(totals.pending_amount, -150.0);
    }

    #[test]
    fn test_balance_sources_and_reconciliation() {
        let o = order("1", 1000.0, 500.0);
        let payments = vec![payment("a", "1", 400.0)];

        assert_eq!(order_balance(&o, &payments, BalanceSource::Stored), 500.0);
        assert_eq!(order_balance(&o, &payments, BalanceSource::Derived), 600.0);

        let drifts = reconcile_balances(std::slice::from_ref(&o), &payments, 0.01);
        assert_eq!(drifts.len(), 1);
        assert_eq!(drifts[0].difference, -100.0);

        let tolerant = reconcile_balances(std::slice::from_ref(&o), &payments, 150.0);
        assert!(tolerant.is_empty());
    }
}
