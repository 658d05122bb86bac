//! Greedy solver for the fractional knapsack.
//!
//! Items are taken in descending value/weight order; the first item that no
//! longer fits is split and the walk ends there.

use kp_problems::{validate, Contribution, FractionalResult, Item, Result};
use std::cmp::Ordering;

const LARGEST_BELOW_ONE: f64 = 1.0 - f64::EPSILON / 2.0;

/// Compares `a.value / a.weight` with `b.value / b.weight` without
/// floating point. Weights are positive after validation.
pub fn compare_ratio(a: &Item, b: &Item) -> Ordering {
    let lhs = a.value as i128 * b.weight as i128;
    let rhs = b.value as i128 * a.weight as i128;
    lhs.cmp(&rhs)
}

/// Items in the order the greedy walk visits them. Equal ratios keep their
/// input order.
pub fn greedy_order(items: &[Item]) -> Vec<&Item> {
    let mut sorted_items: Vec<&Item> = items.iter().collect();
    // `sort_by` is stable
    sorted_items.sort_by(|a, b| compare_ratio(b, a));
    sorted_items
}

pub fn solve(items: &[Item], capacity: i64) -> Result<FractionalResult> {
    validate(items, capacity)?;

    let mut total_value = 0.0;
    let mut remaining = capacity;
    let mut contributions = Vec::new();

    for item in greedy_order(items) {
        if remaining <= 0 {
            break;
        }
        if item.weight <= remaining {
            total_value += item.value as f64;
            remaining -= item.weight;
            contributions.push(Contribution {
                index: item.index,
                fraction: 1.0,
            });
        } else {
            // remaining < weight, but the quotient can still round up to 1.0
            let fraction = (remaining as f64 / item.weight as f64).min(LARGEST_BELOW_ONE);
            total_value += fraction * item.value as f64;
            contributions.push(Contribution {
                index: item.index,
                fraction,
            });
            // capacity is used up
            break;
        }
    }

    Ok(FractionalResult {
        total_value,
        contributions,
    })
}
