use thiserror::Error;

/// Reasons an instance is rejected before any solving starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KnapsackError {
    /// An item cannot take part in a solve (non-positive weight, negative
    /// value, index 0, an index used twice, or a value that pushes the total
    /// past `i64::MAX`).
    #[error("Invalid item {index}: {reason}")]
    InvalidItem { index: usize, reason: String },

    /// Capacity is negative.
    #[error("Invalid capacity: {0} (must be >= 0)")]
    InvalidCapacity(i64),

    /// The request is larger than the configured limits allow.
    #[error("Resource limit exceeded: {what} is {actual}, limit is {limit}")]
    ResourceExceeded {
        what: &'static str,
        actual: u64,
        limit: u64,
    },

    /// A proposed 0/1 selection does not fit the instance.
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),
}

impl KnapsackError {
    /// Short machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            KnapsackError::InvalidItem { .. } => "invalid_item",
            KnapsackError::InvalidCapacity(_) => "invalid_capacity",
            KnapsackError::ResourceExceeded { .. } => "resource_exceeded",
            KnapsackError::InvalidSelection(_) => "invalid_selection",
        }
    }

    pub(crate) fn invalid_item(index: usize, reason: impl Into<String>) -> Self {
        KnapsackError::InvalidItem {
            index,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, KnapsackError>;
