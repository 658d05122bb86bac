//! Knapsack solvers.
//!
//! Both solvers are pure functions of their input and keep no state between
//! calls.

pub mod fractional;
pub mod zero_one;

use kp_problems::{validate, Instance, Limits, Result, Solution};

/// Solves `instance` under both the divisible and the indivisible item model.
pub fn solve(instance: &Instance, limits: &Limits) -> Result<Solution> {
    validate(&instance.items, instance.capacity)?;
    limits.check(instance.num_items(), instance.capacity)?;

    Ok(Solution {
        fractional: fractional::solve(&instance.items, instance.capacity)?,
        zero_one: zero_one::solve(&instance.items, instance.capacity, limits)?,
    })
}
