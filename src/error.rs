use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetricsError {
    #[error("Unknown order status '{value}' for order {order_id}")]
    UnknownStatus { order_id: String, value: String },

    #[error("Unknown urgency level '{value}' for order {order_id}")]
    UnknownUrgency { order_id: String, value: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MetricsError>;
