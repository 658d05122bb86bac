use crate::{KnapsackError, Result};
use serde::{Deserialize, Serialize};

/// Upper bounds a caller places on a solve. The 0/1 solver keeps a table of
/// `(items + 1) * (capacity + 1)` cells, so memory grows with both inputs.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct Limits {
    pub max_capacity: i64,
    pub max_items: usize,
    pub max_table_cells: u64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_capacity: 1_000_000,
            max_items: 10_000,
            max_table_cells: 50_000_000,
        }
    }
}

impl Limits {
    /// Number of cells in the tabulation for `num_items` items and `capacity`.
    pub fn table_cells(num_items: usize, capacity: i64) -> u64 {
        let rows = num_items as u64 + 1;
        let cols = capacity.max(0) as u64 + 1;
        rows.saturating_mul(cols)
    }

    pub fn check(&self, num_items: usize, capacity: i64) -> Result<()> {
        if num_items > self.max_items {
            return Err(KnapsackError::ResourceExceeded {
                what: "item count",
                actual: num_items as u64,
                limit: self.max_items as u64,
            });
        }
        if capacity > self.max_capacity {
            return Err(KnapsackError::ResourceExceeded {
                what: "capacity",
                actual: capacity as u64,
                limit: self.max_capacity.max(0) as u64,
            });
        }
        let cells = Self::table_cells(num_items, capacity);
        if cells > self.max_table_cells {
            return Err(KnapsackError::ResourceExceeded {
                what: "table cells",
                actual: cells,
                limit: self.max_table_cells,
            });
        }
        Ok(())
    }
}
