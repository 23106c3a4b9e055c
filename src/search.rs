use crate::schema::{Customer, Order};
use serde::{Deserialize, Serialize};

pub const DEFAULT_RESULT_CAP: usize = 5;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResults {
    pub orders: Vec<Order>,
    pub customers: Vec<Customer>,
}

/// Case-insensitive substring lookup over orders and customers.
///
/// Queries of one character or less return nothing: a single keystroke
/// would match most of the store. Orders match on bill number or customer
/// name; customers on name, or on mobile as a raw substring since numbers
/// have no case. Each list is capped independently, keeping snapshot order
/// among matches with no relevance ranking.
pub fn search(
    query: &str,
    orders: &[Order],
    customers: &[Customer],
    limit_each: usize,
) -> SearchResults {
    let trimmed = query.trim();
    if trimmed.chars().count() <= 1 {
        return SearchResults::default();
    }
    let needle = trimmed.to_lowercase();

    let orders = orders
        .iter()
        .filter(|o| {
            o.bill_no.to_lowercase().contains(&needle)
                || o.customer_name.to_lowercase().contains(&needle)
        })
        .take(limit_each)
        .cloned()
        .collect();

    let customers = customers
        .iter()
        .filter(|c| c.name.to_lowercase().contains(&needle) || c.mobile.contains(trimmed))
        .take(limit_each)
        .cloned()
        .collect();

    SearchResults { orders, customers }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{OrderStatus, Urgency};

    fn order(bill_no: &str, customer: &str) -> Order {
        Order {
            id: bill_no.to_string(),
            bill_no: bill_no.to_string(),
            customer_name: customer.to_string(),
            date: "2026-08-01".to_string(),
            created_at: None,
            delivery_date: None,
            status: OrderStatus::Pending,
            total: 100.0,
            balance: 100.0,
            urgency: Urgency::None,
            items: vec![],
        }
    }

    fn customer(name: &str, mobile: &str) -> Customer {
        Customer {
            id: name.to_string(),
            name: name.to_string(),
            mobile: mobile.to_string(),
        }
    }

    #[test]
    fn test_short_query_returns_nothing() {
        let orders = vec![order("B-1", "Asha")];
        let customers = vec![customer("Asha", "9876543210")];

        for q in ["", "a", " a "] {
            let results = search(q, &orders, &customers, DEFAULT_RESULT_CAP);
            assert!(results.orders.is_empty());
            assert!(results.customers.is_empty());
        }
    }

    #[test]
    fn test_case_insensitive_name_match() {
        let orders = vec![order("B-1", "Asha Rao"), order("B-2", "Mira")];
        let results = search("ASHA", &orders, &[], DEFAULT_RESULT_CAP);
        assert_eq!(results.orders.len(), 1);
        assert_eq!(results.orders[0].bill_no, "B-1");
    }

    #[test]
    fn test_bill_no_match() {
        let orders = vec![order("B-17", "Asha"), order("B-170", "Mira")];
        let results = search("b-17", &orders, &[], DEFAULT_RESULT_CAP);
        assert_eq!(results.orders.len(), 2);
    }

    #[test]
    fn test_mobile_raw_substring() {
        let customers = vec![customer("Asha", "9876543210"), customer("Mira", "9123450000")];
        let results = search("6543", &[], &customers, DEFAULT_RESULT_CAP);
        assert_eq!(results.customers.len(), 1);
        assert_eq!(results.customers[0].name, "Asha");
    }

    #[test]
    fn test_cap_preserves_snapshot_order() {
        let customers: Vec<Customer> = (0..7)
            .map(|i| customer(&format!("Priya {i}"), &format!("900000000{i}")))
            .collect();

        let results = search("priya", &[], &customers, DEFAULT_RESULT_CAP);
        assert_eq!(results.customers.len(), 5);
        let names: Vec<_> = results.customers.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            ["Priya 0", "Priya 1", "Priya 2", "Priya 3", "Priya 4"]
        );
    }

    #[test]
    fn test_caps_are_independent() {
        let orders: Vec<Order> = (0..6).map(|i| order(&format!("B-{i}"), "Anita")).collect();
        let customers = vec![customer("Anita", "9000000001")];

        let results = search("anita", &orders, &customers, DEFAULT_RESULT_CAP);
        assert_eq!(results.orders.len(), 5);
        assert_eq!(results.customers.len(), 1);
    }
}
