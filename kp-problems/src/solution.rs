use serde::{Deserialize, Serialize};
use std::fmt;

/// Part of an item placed in the knapsack by the fractional solver.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Contribution {
    pub index: usize,
    /// In `(0, 1]`; `1.0` means the whole item.
    pub fraction: f64,
}

impl Contribution {
    pub fn is_whole(&self) -> bool {
        self.fraction >= 1.0
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct FractionalResult {
    pub total_value: f64,
    /// In the order taken. Only the last entry may be partial.
    pub contributions: Vec<Contribution>,
}

impl FractionalResult {
    /// The single item that was split, if any.
    pub fn cut_item(&self) -> Option<&Contribution> {
        self.contributions.iter().find(|c| !c.is_whole())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ZeroOneResult {
    pub max_value: i64,
    pub total_weight: i64,
    /// Item indices in traceback order (last item considered first).
    pub selected: Vec<usize>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Solution {
    pub fractional: FractionalResult,
    pub zero_one: ZeroOneResult,
}

fn write_joined<T, F>(f: &mut fmt::Formatter<'_>, parts: &[T], mut write_part: F) -> fmt::Result
where
    F: FnMut(&mut fmt::Formatter<'_>, &T) -> fmt::Result,
{
    if parts.is_empty() {
        return write!(f, "none");
    }
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            write!(f, " and ")?;
        }
        write_part(f, part)?;
    }
    Ok(())
}

impl fmt::Display for FractionalResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(f, &self.contributions, |f, c| {
            if c.is_whole() {
                write!(f, "Item {} fully", c.index)
            } else {
                write!(f, "{:.2} of Item {}", c.fraction, c.index)
            }
        })
    }
}

impl fmt::Display for ZeroOneResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(f, &self.selected, |f, index| write!(f, "Item {}", index))
    }
}
