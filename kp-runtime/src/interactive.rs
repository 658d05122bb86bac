use anyhow::{anyhow, Result};
use kp_algorithms::solve;
use kp_problems::{Instance, Limits, Solution};
use std::io::{BufRead, Write};
use tracing::{debug, info};

use crate::{write_explanations, write_instance, write_solution};

struct Prompter<R, W> {
    input: R,
    output: W,
    line_no: usize,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        if !prompt.is_empty() {
            write!(self.output, "{}", prompt)?;
            self.output.flush()?;
        }
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(anyhow!(
                "Unexpected end of input after line {}",
                self.line_no
            ));
        }
        self.line_no += 1;
        Ok(line.trim().to_string())
    }

    fn ask_number<T>(&mut self, prompt: &str, what: &str) -> Result<T>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        let line = self.ask(prompt)?;
        line.parse::<T>()
            .map_err(|e| anyhow!("Line {}: invalid {} '{}': {}", self.line_no, what, line, e))
    }

    fn ask_pair(&mut self) -> Result<(i64, i64)> {
        let line = self.ask("")?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 2 {
            return Err(anyhow!(
                "Line {}: expected 'weight value', got '{}'",
                self.line_no,
                line
            ));
        }
        let parse = |field: &str, what: &str| {
            field
                .parse::<i64>()
                .map_err(|e| anyhow!("Line {}: invalid {} '{}': {}", self.line_no, what, field, e))
        };
        Ok((parse(fields[0], "weight")?, parse(fields[1], "value")?))
    }
}

/// Prompts for capacity, item count and one `weight value` line per item,
/// then reports both solutions followed by the explanatory notes.
pub fn run_interactive<R: BufRead, W: Write>(
    input: R,
    output: W,
    limits: &Limits,
) -> Result<Solution> {
    let mut prompter = Prompter {
        input,
        output,
        line_no: 0,
    };

    let capacity: i64 = prompter.ask_number("Knapsack capacity (W): ", "capacity")?;
    let num_items: usize = prompter.ask_number("Number of items (n): ", "number of items")?;
    if num_items > limits.max_items {
        return Err(anyhow!(
            "Number of items {} exceeds the limit of {}",
            num_items,
            limits.max_items
        ));
    }

    writeln!(
        prompter.output,
        "Please enter weight and value for each item on a separate line (weight first, then value):"
    )?;
    let mut pairs = Vec::with_capacity(num_items);
    for _ in 0..num_items {
        pairs.push(prompter.ask_pair()?);
    }
    debug!(capacity, items = num_items, "read instance");

    let instance = Instance::from_pairs(capacity, &pairs)?;
    write_instance(&mut prompter.output, &instance)?;

    let solution = solve(&instance, limits)?;
    info!(
        fractional = solution.fractional.total_value,
        zero_one = solution.zero_one.max_value,
        "solved"
    );
    write_solution(&mut prompter.output, &solution)?;
    write_explanations(&mut prompter.output)?;
    Ok(solution)
}
