//! # Boutique Metrics
//!
//! A stateless aggregation library that turns boutique order, payment, and
//! customer snapshots into the numbers a dashboard renders: KPI totals,
//! month-over-month growth, per-order delivery risk, a merged activity
//! feed, and substring search.
//!
//! ## Core Concepts
//!
//! - **Snapshot**: the full in-memory collection of orders, payments, and
//!   customers visible at one computation instant. Every call re-derives
//!   its result from the snapshot it is handed; nothing is cached.
//! - **Orphaned payment**: a payment whose `order_id` matches no order in
//!   the snapshot. Excluded from aggregate totals, still visible directly.
//! - **Sentinel dates**: malformed or absent dates never abort a
//!   computation; they resolve to "unknown" (999 days for risk math,
//!   excluded for month bucketing).
//! - **Closed enums at the boundary**: the data layer's string-typed
//!   status/urgency fields are mapped to closed enums during ingestion;
//!   unknown values are rejected there, never propagated.
//!
//! ## Example
//!
//! ```rust,ignore
//! use boutique_metrics::*;
//! use chrono::NaiveDate;
//!
//! let snapshot = BoutiqueSnapshot {
//!     orders: vec![/* from the data layer */],
//!     payments: vec![],
//!     customers: vec![],
//! };
//!
//! let today = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
//! let kpis = compute_dashboard_kpis(&snapshot, today);
//! let feed = timeline::build(&snapshot.orders, &snapshot.payments, 20);
//! for order in &snapshot.orders {
//!     let risk = delivery::evaluate(order, today);
//! }
//! ```

pub mod config;
pub mod dates;
pub mod delivery;
pub mod error;
pub mod financials;
pub mod growth;
pub mod ingestion;
pub mod schema;
pub mod search;
pub mod timeline;

pub use config::Environment;
pub use dates::{days_until, normalize, normalize_day, NO_DEADLINE_DAYS};
pub use delivery::{evaluate as evaluate_delivery_risk, DeliveryRisk};
pub use error::{MetricsError, Result};
pub use financials::{
    aggregate, order_balance, reconcile_balances, BalanceDrift, BalanceSource, FinancialTotals,
};
pub use growth::collection_growth;
pub use ingestion::*;
pub use schema::*;
pub use search::{search, SearchResults, DEFAULT_RESULT_CAP};
pub use timeline::{ActivityEntry, ActivityKind, DEFAULT_FEED_LIMIT};

use chrono::NaiveDate;
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// The KPI set rendered at the top of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashboardKpis {
    pub total_orders: usize,
    pub total_revenue: f64,
    pub total_collected: f64,
    pub pending_amount: f64,
    pub growth_percent: f64,
}

pub struct DashboardProcessor;

impl DashboardProcessor {
    /// Computes the full KPI set from one snapshot. `reference_date`
    /// anchors the growth comparison (normally today).
    pub fn compute(snapshot: &BoutiqueSnapshot, reference_date: NaiveDate) -> DashboardKpis {
        info!(
            "Computing dashboard KPIs from snapshot of {} orders, {} payments",
            snapshot.orders.len(),
            snapshot.payments.len()
        );

        let totals = financials::aggregate(&snapshot.orders, &snapshot.payments);
        let growth_percent = growth::collection_growth(&snapshot.payments, reference_date);

        debug!(
            "Totals: revenue {:.2}, collected {:.2}, pending {:.2}, growth {:.1}%",
            totals.total_revenue, totals.total_collected, totals.pending_amount, growth_percent
        );

        DashboardKpis {
            total_orders: snapshot.orders.len(),
            total_revenue: totals.total_revenue,
            total_collected: totals.total_collected,
            pending_amount: totals.pending_amount,
            growth_percent,
        }
    }
}

pub fn compute_dashboard_kpis(
    snapshot: &BoutiqueSnapshot,
    reference_date: NaiveDate,
) -> DashboardKpis {
    DashboardProcessor::compute(snapshot, reference_date)
}
