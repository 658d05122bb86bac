use crate::serializable_struct_with_getters;
use kp_problems::{
    Contribution, FractionalResult, Instance, Item, KnapsackError, Result, Solution, ZeroOneResult,
};
use serde::{Deserialize, Serialize};

serializable_struct_with_getters! {
    ItemData {
        /// Defaults to the item's 1-based position in the request.
        index: Option<usize>,
        value: i64,
        weight: i64,
    }
}

serializable_struct_with_getters! {
    SolveRequest {
        capacity: i64,
        items: Vec<ItemData>,
    }
}

impl SolveRequest {
    pub fn into_instance(self) -> Result<Instance> {
        let items = self
            .items
            .into_iter()
            .enumerate()
            .map(|(i, item)| Item {
                index: item.index.unwrap_or(i + 1),
                value: item.value,
                weight: item.weight,
            })
            .collect();
        Instance::new(self.capacity, items)
    }
}

impl From<&Instance> for SolveRequest {
    fn from(instance: &Instance) -> Self {
        Self {
            capacity: instance.capacity,
            items: instance
                .items
                .iter()
                .map(|item| ItemData {
                    index: Some(item.index),
                    value: item.value,
                    weight: item.weight,
                })
                .collect(),
        }
    }
}

serializable_struct_with_getters! {
    FractionalData {
        total_value: f64,
        selected: String,
        contributions: Vec<Contribution>,
    }
}

serializable_struct_with_getters! {
    ZeroOneData {
        max_value: i64,
        total_weight: i64,
        selected: String,
        items: Vec<usize>,
    }
}

serializable_struct_with_getters! {
    SolveResponse {
        fractional: FractionalData,
        zero_one: ZeroOneData,
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl From<&FractionalResult> for FractionalData {
    fn from(result: &FractionalResult) -> Self {
        Self {
            total_value: round_cents(result.total_value),
            selected: result.to_string(),
            contributions: result.contributions.clone(),
        }
    }
}

impl From<&ZeroOneResult> for ZeroOneData {
    fn from(result: &ZeroOneResult) -> Self {
        Self {
            max_value: result.max_value,
            total_weight: result.total_weight,
            selected: result.to_string(),
            items: result.selected.clone(),
        }
    }
}

impl From<&Solution> for SolveResponse {
    fn from(solution: &Solution) -> Self {
        Self {
            fractional: (&solution.fractional).into(),
            zero_one: (&solution.zero_one).into(),
        }
    }
}

serializable_struct_with_getters! {
    ErrorResponse {
        error: String,
        kind: String,
    }
}

impl From<&KnapsackError> for ErrorResponse {
    fn from(err: &KnapsackError) -> Self {
        Self {
            error: err.to_string(),
            kind: err.kind().to_string(),
        }
    }
}
