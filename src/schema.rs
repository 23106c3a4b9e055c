use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub enum OrderStatus {
    #[schemars(description = "Order accepted but work has not started")]
    Pending,

    #[schemars(description = "Work on the order is underway")]
    InProgress,

    #[schemars(description = "Garment is ready for a customer trial/fitting")]
    Trial,

    #[schemars(description = "Order delivered; no further work or risk tracking applies")]
    Completed,

    #[schemars(description = "Order passed its delivery date without completion")]
    Overdue,

    #[schemars(
        description = "Order cancelled; excluded from urgency and deadline classification but still counted in historical revenue"
    )]
    Cancelled,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema, Default)]
#[serde(rename_all = "PascalCase")]
pub enum Urgency {
    #[default]
    #[schemars(description = "No special urgency")]
    None,

    #[schemars(description = "Elevated priority; counts toward the urgent classification")]
    High,

    #[schemars(description = "Highest priority; counts toward the urgent classification")]
    Urgent,
}

impl Urgency {
    /// High and Urgent both raise the order's urgent flag.
    pub fn is_elevated(self) -> bool {
        matches!(self, Urgency::High | Urgency::Urgent)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct OrderItem {
    #[schemars(description = "Line-item status; Cancelled items are ignored by risk and urgency logic")]
    pub status: OrderStatus,

    #[serde(default)]
    #[schemars(description = "Line-item urgency; an elevated item raises the whole order's urgent flag")]
    pub urgency: Urgency,

    #[serde(default)]
    #[schemars(
        description = "Optional per-item delivery date as stored (ISO-8601 or DD/MM/YYYY); the earliest active item date becomes the order's target"
    )]
    pub delivery_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Order {
    #[schemars(description = "Stable identifier assigned by the data layer")]
    pub id: String,

    #[schemars(description = "Human-facing bill number, matched by search")]
    pub bill_no: String,

    #[schemars(description = "Customer display name as captured on the order")]
    pub customer_name: String,

    #[schemars(description = "Creation date as stored (ISO-8601 or DD/MM/YYYY)")]
    pub date: String,

    #[serde(default)]
    #[schemars(description = "Creation timestamp fallback used when `date` does not parse")]
    pub created_at: Option<String>,

    #[serde(default)]
    #[schemars(description = "Order-level delivery date, used when no active item carries one")]
    pub delivery_date: Option<String>,

    pub status: OrderStatus,

    #[schemars(description = "Total billed amount; summed into revenue regardless of status")]
    pub total: f64,

    #[schemars(
        description = "Outstanding balance as stored by the data layer; maintained independently of the payment ledger"
    )]
    pub balance: f64,

    #[serde(default)]
    pub urgency: Urgency,

    #[serde(default)]
    #[schemars(description = "Line items; may be absent for legacy orders")]
    pub items: Vec<OrderItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Payment {
    pub id: String,

    #[schemars(
        description = "Weak reference to an order; the referenced order may no longer exist in the snapshot, in which case the payment is an orphan and excluded from aggregate totals"
    )]
    pub order_id: String,

    #[schemars(description = "Amount received; non-negative")]
    pub amount: f64,

    #[schemars(description = "Receipt date as stored (ISO-8601 or DD/MM/YYYY)")]
    pub date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub mobile: String,
}

/// One full snapshot of the store as handed over by the data layer.
///
/// The engine never mutates a snapshot; every computation re-derives its
/// result from whichever snapshot it is given.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BoutiqueSnapshot {
    #[serde(default)]
    pub orders: Vec<Order>,

    #[serde(default)]
    pub payments: Vec<Payment>,

    #[serde(default)]
    pub customers: Vec<Customer>,
}

impl BoutiqueSnapshot {
    pub fn generate_json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(BoutiqueSnapshot)
    }

    pub fn schema_as_json() -> Result<String, serde_json::Error> {
        let schema = Self::generate_json_schema();
        serde_json::to_string_pretty(&schema)
    }
}
