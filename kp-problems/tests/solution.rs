use kp_problems::*;

#[test]
fn test_fractional_description() {
    let result = FractionalResult {
        total_value: 240.0,
        contributions: vec![
            Contribution {
                index: 1,
                fraction: 1.0,
            },
            Contribution {
                index: 2,
                fraction: 1.0,
            },
            Contribution {
                index: 3,
                fraction: 2.0 / 3.0,
            },
        ],
    };
    assert_eq!(
        result.to_string(),
        "Item 1 fully and Item 2 fully and 0.67 of Item 3"
    );
    assert_eq!(result.cut_item().map(|c| c.index), Some(3));
}

#[test]
fn test_zero_one_description() {
    let result = ZeroOneResult {
        max_value: 220,
        total_weight: 50,
        selected: vec![3, 2],
    };
    assert_eq!(result.to_string(), "Item 3 and Item 2");
}

#[test]
fn test_empty_selections_read_none() {
    assert_eq!(FractionalResult::default().to_string(), "none");
    assert_eq!(ZeroOneResult::default().to_string(), "none");
    assert!(FractionalResult::default().cut_item().is_none());
}

#[test]
fn test_solution_serializes_both_records() {
    let solution = Solution {
        fractional: FractionalResult {
            total_value: 6.0,
            contributions: vec![Contribution {
                index: 1,
                fraction: 0.6,
            }],
        },
        zero_one: ZeroOneResult::default(),
    };
    let value = serde_json::to_value(&solution).unwrap();
    assert_eq!(value["fractional"]["total_value"], 6.0);
    assert_eq!(value["fractional"]["contributions"][0]["index"], 1);
    assert_eq!(value["zero_one"]["max_value"], 0);
    assert_eq!(value["zero_one"]["selected"], serde_json::json!([]));
}
