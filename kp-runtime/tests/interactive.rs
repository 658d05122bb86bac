use kp_problems::Limits;
use kp_runtime::*;
use std::io::Cursor;

fn run(input: &str) -> (anyhow::Result<kp_problems::Solution>, String) {
    let mut output = Vec::new();
    let result = run_interactive(Cursor::new(input.to_string()), &mut output, &Limits::default());
    (result, String::from_utf8(output).unwrap())
}

#[test]
fn test_classic_transcript() {
    let (result, output) = run("50\n3\n10 60\n20 100\n30 120\n");
    let solution = result.unwrap();
    assert_eq!(solution.zero_one.max_value, 220);

    assert!(output.starts_with("Knapsack capacity (W): Number of items (n): Please enter weight and value"));
    assert!(output.contains("Capacity = 50, Number of items = 3\n"));
    assert!(output.contains("Item 2: weight = 20, value = 100\n"));
    assert!(output.contains(
        "Fractional Knapsack (Greedy): Total value = 240.00\nSelected: Item 1 fully and Item 2 fully and 0.67 of Item 3\n"
    ));
    assert!(output.contains(
        "0/1 Knapsack (Dynamic Programming): Maximum value = 220\nTotal weight used = 50\nSelected items: Item 3 and Item 2\n"
    ));
    assert!(output.contains("Answers to theoretical questions:\n1. Why is the greedy"));
    assert!(output.contains("6. When are the solutions of both methods equal?"));
}

#[test]
fn test_item_that_never_fits() {
    let (result, output) = run("3\n1\n5 10\n");
    assert!(result.is_ok());
    assert!(output.contains("Total value = 6.00\nSelected: 0.60 of Item 1\n"));
    assert!(output.contains("Maximum value = 0\nTotal weight used = 0\nSelected items: none\n"));
}

#[test]
fn test_tolerates_extra_whitespace() {
    let (result, _) = run("  7 \n2\n 3   4\n4 5  \n");
    assert_eq!(result.unwrap().zero_one.max_value, 9);
}

#[test]
fn test_malformed_lines_are_reported() {
    let (result, _) = run("ten\n");
    assert!(result.unwrap_err().to_string().contains("Line 1: invalid capacity"));

    let (result, _) = run("10\n2\n1 2\n3\n");
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("Line 4: expected 'weight value'"));

    let (result, _) = run("10\n1\n1 x\n");
    assert!(result.unwrap_err().to_string().contains("invalid value 'x'"));

    let (result, _) = run("10\n2\n1 2\n");
    assert!(result.unwrap_err().to_string().contains("Unexpected end of input"));
}

#[test]
fn test_zero_weight_is_rejected() {
    let (result, output) = run("10\n2\n0 5\n1 1\n");
    assert!(result.unwrap_err().to_string().contains("Invalid item 1"));
    assert!(!output.contains("Received input"));
}

#[test]
fn test_too_many_items() {
    let mut output = Vec::new();
    let limits = Limits {
        max_items: 2,
        ..Limits::default()
    };
    let result = run_interactive(Cursor::new("10\n3\n"), &mut output, &limits);
    assert!(result.unwrap_err().to_string().contains("exceeds the limit"));
}
