//! Dynamic programming solver for the 0/1 knapsack.
//!
//! The whole `(n + 1) x (capacity + 1)` table is kept so the chosen items can
//! be recovered by walking it backwards. Table size is bounded up front by
//! [`Limits`].

use kp_problems::{validate, Item, Limits, Result, ZeroOneResult};
use std::cmp::max;

/// Row-major tabulation; row `i` holds the best value using the first `i`
/// items under every weight bound `0..=capacity`.
struct Table {
    width: usize,
    cells: Vec<i64>,
}

impl Table {
    fn build(items: &[Item], capacity: usize) -> Self {
        let width = capacity + 1;
        let mut cells = vec![0i64; (items.len() + 1) * width];

        for (i, item) in items.iter().enumerate() {
            let (prev, rest) = cells.split_at_mut((i + 1) * width);
            let prev = &prev[i * width..];
            let row = &mut rest[..width];
            for w in 0..width {
                // validated item values sum to at most i64::MAX
                row[w] = if item.weight <= w as i64 {
                    max(prev[w], item.value + prev[w - item.weight as usize])
                } else {
                    prev[w]
                };
            }
        }

        Self { width, cells }
    }

    fn get(&self, i: usize, w: usize) -> i64 {
        self.cells[i * self.width + w]
    }
}

pub fn solve(items: &[Item], capacity: i64, limits: &Limits) -> Result<ZeroOneResult> {
    validate(items, capacity)?;
    limits.check(items.len(), capacity)?;

    let n = items.len();
    let capacity = capacity as usize;
    let table = Table::build(items, capacity);
    let max_value = table.get(n, capacity);

    // Recover selected items. When skipping the item gives the same value the
    // item is left out.
    let mut selected = Vec::new();
    let mut total_weight = 0;
    let mut w = capacity;
    let mut i = n;
    while i > 0 && w > 0 {
        if table.get(i, w) != table.get(i - 1, w) {
            let item = &items[i - 1];
            selected.push(item.index);
            total_weight += item.weight;
            w -= item.weight as usize;
        }
        i -= 1;
    }

    Ok(ZeroOneResult {
        max_value,
        total_weight,
        selected,
    })
}
