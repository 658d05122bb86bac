use kp_problems::{Instance, Solution};
use std::io::{Result, Write};

pub const EXPLANATIONS: &[(&str, &str)] = &[
    (
        "Why is the greedy algorithm optimal for the fractional knapsack problem?",
        "It possesses the greedy choice property and optimal substructure: selecting the highest value/weight ratio at each step always leads to an optimal solution.",
    ),
    (
        "Why can the greedy algorithm not be applied to the 0/1 knapsack problem?",
        "The 0/1 variant lacks the greedy choice property; a locally optimal choice may lead to a suboptimal global solution.",
    ),
    (
        "What is the main difference between the two problem models?",
        "In the fractional model, fractions of items are allowed; in the 0/1 model, each item must be taken entirely or not at all.",
    ),
    (
        "Is the fractional knapsack solution always ≥ the 0/1 solution?",
        "Yes, because the fractional version has fewer constraints and includes all feasible solutions of the 0/1 version as special cases.",
    ),
    (
        "Time complexity comparison:",
        "Greedy (fractional): O(n log n) due to sorting\n   Dynamic Programming (0/1): O(n × W)",
    ),
    (
        "When are the solutions of both methods equal?",
        "When the optimal solution does not require any fractional items, i.e., the capacity is fully utilized with whole items.",
    ),
];

pub fn write_instance<W: Write>(out: &mut W, instance: &Instance) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "Received input:")?;
    writeln!(
        out,
        "Capacity = {}, Number of items = {}",
        instance.capacity,
        instance.num_items()
    )?;
    for item in &instance.items {
        writeln!(
            out,
            "Item {}: weight = {}, value = {}",
            item.index, item.weight, item.value
        )?;
    }
    writeln!(out)
}

pub fn write_solution<W: Write>(out: &mut W, solution: &Solution) -> Result<()> {
    writeln!(
        out,
        "Fractional Knapsack (Greedy): Total value = {:.2}",
        solution.fractional.total_value
    )?;
    writeln!(out, "Selected: {}", solution.fractional)?;
    writeln!(out)?;
    writeln!(
        out,
        "0/1 Knapsack (Dynamic Programming): Maximum value = {}",
        solution.zero_one.max_value
    )?;
    writeln!(out, "Total weight used = {}", solution.zero_one.total_weight)?;
    writeln!(out, "Selected items: {}", solution.zero_one)?;
    writeln!(out)
}

pub fn write_explanations<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Answers to theoretical questions:")?;
    for (i, (question, answer)) in EXPLANATIONS.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, question)?;
        writeln!(out, "   {}", answer)?;
        if i + 1 < EXPLANATIONS.len() {
            writeln!(out)?;
        }
    }
    Ok(())
}
