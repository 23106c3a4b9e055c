use crate::error::{MetricsError, Result};
use crate::schema::{
    BoutiqueSnapshot, Customer, Order, OrderItem, OrderStatus, Payment, Urgency,
};
use serde::{Deserialize, Serialize};

/// Order record as the data layer actually stores it: status and urgency
/// are free strings. [`convert_raw_snapshot`] maps them into the closed
/// enums and rejects anything unrecognized, so raw strings never reach
/// the aggregation core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawOrder {
    pub id: String,
    pub bill_no: String,
    pub customer_name: String,
    pub date: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub delivery_date: Option<String>,
    pub status: String,
    pub total: f64,
    pub balance: f64,
    #[serde(default)]
    pub urgency: Option<String>,
    #[serde(default)]
    pub items: Option<Vec<RawOrderItem>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawOrderItem {
    pub status: String,
    #[serde(default)]
    pub urgency: Option<String>,
    #[serde(default)]
    pub delivery_date: Option<String>,
}

pub fn convert_raw_snapshot(
    orders: &[RawOrder],
    payments: &[Payment],
    customers: &[Customer],
) -> Result<BoutiqueSnapshot> {
    let orders = orders
        .iter()
        .map(convert_raw_order)
        .collect::<Result<Vec<_>>>()?;

    Ok(BoutiqueSnapshot {
        orders,
        payments: payments.to_vec(),
        customers: customers.to_vec(),
    })
}

pub fn convert_raw_order(raw: &RawOrder) -> Result<Order> {
    let status = parse_status(&raw.status).ok_or_else(|| MetricsError::UnknownStatus {
        order_id: raw.id.clone(),
        value: raw.status.clone(),
    })?;

    let urgency = match raw.urgency.as_deref() {
        None => Urgency::None,
        Some(value) => parse_urgency(value).ok_or_else(|| MetricsError::UnknownUrgency {
            order_id: raw.id.clone(),
            value: value.to_string(),
        })?,
    };

    let items = raw
        .items
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|item| convert_raw_item(&raw.id, item))
        .collect::<Result<Vec<_>>>()?;

    Ok(Order {
        id: raw.id.clone(),
        bill_no: raw.bill_no.clone(),
        customer_name: raw.customer_name.clone(),
        date: raw.date.clone(),
        created_at: raw.created_at.clone(),
        delivery_date: raw.delivery_date.clone(),
        status,
        total: raw.total,
        balance: raw.balance,
        urgency,
        items,
    })
}

fn convert_raw_item(order_id: &str, raw: &RawOrderItem) -> Result<OrderItem> {
    let status = parse_status(&raw.status).ok_or_else(|| MetricsError::UnknownStatus {
        order_id: order_id.to_string(),
        value: raw.status.clone(),
    })?;

    let urgency = match raw.urgency.as_deref() {
        None => Urgency::None,
        Some(value) => parse_urgency(value).ok_or_else(|| MetricsError::UnknownUrgency {
            order_id: order_id.to_string(),
            value: value.to_string(),
        })?,
    };

    Ok(OrderItem {
        status,
        urgency,
        delivery_date: raw.delivery_date.clone(),
    })
}

/// Entry screens have stored "In Progress" with and without the space.
fn parse_status(value: &str) -> Option<OrderStatus> {
    match value.trim().to_lowercase().as_str() {
        "pending" => Some(OrderStatus::Pending),
        "inprogress" | "in progress" | "in-progress" => Some(OrderStatus::InProgress),
        "trial" => Some(OrderStatus::Trial),
        "completed" => Some(OrderStatus::Completed),
        "overdue" => Some(OrderStatus::Overdue),
        "cancelled" | "canceled" => Some(OrderStatus::Cancelled),
        _ => None,
    }
}

fn parse_urgency(value: &str) -> Option<Urgency> {
    match value.trim().to_lowercase().as_str() {
        "" | "none" => Some(Urgency::None),
        "high" => Some(Urgency::High),
        "urgent" => Some(Urgency::Urgent),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_order(status: &str, urgency: Option<&str>) -> RawOrder {
        RawOrder {
            id: "o1".to_string(),
            bill_no: "B-1".to_string(),
            customer_name: "Asha".to_string(),
            date: "2026-08-01".to_string(),
            created_at: None,
            delivery_date: None,
            status: status.to_string(),
            total: 100.0,
            balance: 100.0,
            urgency: urgency.map(str::to_string),
            items: None,
        }
    }

    #[test]
    fn test_status_spellings() {
        let order = convert_raw_order(&raw_order("In Progress", None)).unwrap();
        assert_eq!(order.status, OrderStatus::InProgress);

        let order = convert_raw_order(&raw_order("canceled", None)).unwrap();
        assert_eq!(order.status, OrderStatus::Cancelled);
    }

    #[test]
    fn test_unknown_status_rejected() {
        let err = convert_raw_order(&raw_order("Archived", None)).unwrap_err();
        assert!(matches!(err, MetricsError::UnknownStatus { .. }));
    }

    #[test]
    fn test_unknown_urgency_rejected() {
        let err = convert_raw_order(&raw_order("Pending", Some("critical"))).unwrap_err();
        assert!(matches!(err, MetricsError::UnknownUrgency { .. }));
    }

    #[test]
    fn test_missing_urgency_defaults_to_none() {
        let order = convert_raw_order(&raw_order("Pending", None)).unwrap();
        assert_eq!(order.urgency, Urgency::None);
        assert!(order.items.is_empty());
    }

    #[test]
    fn test_item_errors_carry_parent_order_id() {
        let mut raw = raw_order("Pending", None);
        raw.items = Some(vec![RawOrderItem {
            status: "Mystery".to_string(),
            urgency: None,
            delivery_date: None,
        }]);

        match convert_raw_order(&raw).unwrap_err() {
            MetricsError::UnknownStatus { order_id, value } => {
                assert_eq!(order_id, "o1");
                assert_eq!(value, "Mystery");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
