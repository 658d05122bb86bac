use crate::{KnapsackError, Result};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fmt, str::FromStr};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    /// 1-based position, unique within an instance.
    pub index: usize,
    pub value: i64,
    pub weight: i64,
}

impl Item {
    pub fn new(index: usize, weight: i64, value: i64) -> Self {
        Self {
            index,
            value,
            weight,
        }
    }
}

/// Checks every item and the capacity. Runs before any solver touches the
/// input, so a malformed instance never produces a partial result.
///
/// The values of all items together must fit in an `i64`, which keeps every
/// sum of a selection exact.
pub fn validate(items: &[Item], capacity: i64) -> Result<()> {
    if capacity < 0 {
        return Err(KnapsackError::InvalidCapacity(capacity));
    }
    let mut seen = HashSet::with_capacity(items.len());
    let mut total_value: i64 = 0;
    for item in items {
        if item.index == 0 {
            return Err(KnapsackError::invalid_item(0, "index must start at 1"));
        }
        if item.weight <= 0 {
            return Err(KnapsackError::invalid_item(
                item.index,
                format!("weight must be > 0, got {}", item.weight),
            ));
        }
        if item.value < 0 {
            return Err(KnapsackError::invalid_item(
                item.index,
                format!("value must be >= 0, got {}", item.value),
            ));
        }
        if !seen.insert(item.index) {
            return Err(KnapsackError::invalid_item(item.index, "duplicate index"));
        }
        total_value = total_value.checked_add(item.value).ok_or_else(|| {
            KnapsackError::invalid_item(item.index, "total value of all items overflows i64")
        })?;
    }
    Ok(())
}

/// Parameters for a randomly generated instance.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Track {
    pub n_items: usize,
    /// Capacity as a percentage of the total item weight.
    pub budget: u32,
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n_items={},budget={}", self.n_items, self.budget)
    }
}

impl FromStr for Track {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut n_items = None;
        let mut budget = None;
        for pair in s.split(',') {
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| format!("Expected key=value, got '{}'", pair))?;
            match key.trim() {
                "n_items" => {
                    n_items = Some(value.trim().parse::<usize>().map_err(|e| e.to_string())?)
                }
                "budget" => budget = Some(value.trim().parse::<u32>().map_err(|e| e.to_string())?),
                other => return Err(format!("Unknown track key '{}'", other)),
            }
        }
        Ok(Track {
            n_items: n_items.ok_or("Missing 'n_items'")?,
            budget: budget.ok_or("Missing 'budget'")?,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    pub capacity: i64,
    pub items: Vec<Item>,
}

impl Instance {
    pub fn new(capacity: i64, items: Vec<Item>) -> Result<Self> {
        validate(&items, capacity)?;
        Ok(Self { capacity, items })
    }

    /// Builds an instance from `(weight, value)` pairs, numbering items from 1
    /// in the order given.
    pub fn from_pairs(capacity: i64, pairs: &[(i64, i64)]) -> Result<Self> {
        let items = pairs
            .iter()
            .enumerate()
            .map(|(i, &(weight, value))| Item::new(i + 1, weight, value))
            .collect();
        Self::new(capacity, items)
    }

    pub fn num_items(&self) -> usize {
        self.items.len()
    }

    pub fn item(&self, index: usize) -> Option<&Item> {
        self.items.iter().find(|item| item.index == index)
    }

    pub fn generate_instance(seed: &[u8; 32], track: &Track) -> Result<Self> {
        let mut rng = SmallRng::from_seed(seed.clone());

        // Weights in [1, 50], values in [0, 100]
        let items: Vec<Item> = (0..track.n_items)
            .map(|i| {
                let weight = rng.gen_range(1..=50);
                let value = rng.gen_range(0..=100);
                Item::new(i + 1, weight, value)
            })
            .collect();

        let total_weight: i64 = items.iter().map(|item| item.weight).sum();
        let capacity = (track.budget as f64 / 100.0 * total_weight as f64) as i64;

        Self::new(capacity, items)
    }

    /// Total value and weight of a 0/1 selection, given as item indices.
    pub fn evaluate_selection(&self, selection: &[usize]) -> Result<(i64, i64)> {
        let selected: HashSet<usize> = selection.iter().cloned().collect();
        if selected.len() != selection.len() {
            return Err(KnapsackError::InvalidSelection(
                "Duplicate items selected.".to_string(),
            ));
        }

        let mut total_value: i64 = 0;
        let mut total_weight: i64 = 0;
        for &index in selection {
            let item = self.item(index).ok_or_else(|| {
                KnapsackError::InvalidSelection(format!("Item ({}) does not exist", index))
            })?;
            let overflow = || KnapsackError::InvalidSelection("Totals overflow i64".to_string());
            total_value = total_value.checked_add(item.value).ok_or_else(overflow)?;
            total_weight = total_weight.checked_add(item.weight).ok_or_else(overflow)?;
        }

        if total_weight > self.capacity {
            return Err(KnapsackError::InvalidSelection(format!(
                "Total weight ({}) exceeded capacity ({})",
                total_weight, self.capacity
            )));
        }
        Ok((total_value, total_weight))
    }
}
