use kp_algorithms::{fractional, solve, zero_one};
use kp_problems::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn random_instances(count: usize, max_items: usize) -> Vec<Instance> {
    let mut rng = SmallRng::from_seed([42; 32]);
    (0..count)
        .map(|_| {
            let track = Track {
                n_items: rng.gen_range(0..=max_items),
                budget: rng.gen_range(0..=100),
            };
            Instance::generate_instance(&rng.gen(), &track).unwrap()
        })
        .collect()
}

fn brute_force(instance: &Instance) -> i64 {
    let n = instance.num_items();
    (0u32..1 << n)
        .filter_map(|mask| {
            let chosen: Vec<&Item> = (0..n)
                .filter(|&i| mask & (1 << i) != 0)
                .map(|i| &instance.items[i])
                .collect();
            let weight: i64 = chosen.iter().map(|item| item.weight).sum();
            let value: i64 = chosen.iter().map(|item| item.value).sum();
            (weight <= instance.capacity).then_some(value)
        })
        .max()
        .unwrap_or(0)
}

#[test]
fn test_fractional_dominates_zero_one() {
    for instance in random_instances(200, 30) {
        let solution = solve(&instance, &Limits::default()).unwrap();
        assert!(
            solution.fractional.total_value + 1e-9 >= solution.zero_one.max_value as f64,
            "{:?}",
            instance
        );
    }
}

#[test]
fn test_zero_one_selection_is_consistent() {
    for instance in random_instances(200, 30) {
        let result =
            zero_one::solve(&instance.items, instance.capacity, &Limits::default()).unwrap();
        assert!(result.total_weight <= instance.capacity);
        assert_eq!(
            instance.evaluate_selection(&result.selected),
            Ok((result.max_value, result.total_weight))
        );
    }
}

#[test]
fn test_zero_one_matches_brute_force() {
    for instance in random_instances(100, 12) {
        let result =
            zero_one::solve(&instance.items, instance.capacity, &Limits::default()).unwrap();
        assert_eq!(result.max_value, brute_force(&instance), "{:?}", instance);
    }
}

#[test]
fn test_at_most_one_cut_item() {
    for instance in random_instances(200, 30) {
        let result = fractional::solve(&instance.items, instance.capacity).unwrap();
        let partial: Vec<&Contribution> = result
            .contributions
            .iter()
            .filter(|c| c.fraction < 1.0)
            .collect();
        assert!(partial.len() <= 1);
        if let Some(cut) = partial.first() {
            assert!(cut.fraction > 0.0);
            assert_eq!(result.contributions.last(), Some(*cut));
        }
        let used: f64 = result
            .contributions
            .iter()
            .map(|c| c.fraction * instance.item(c.index).unwrap().weight as f64)
            .sum();
        assert!(used <= instance.capacity as f64 + 1e-9);
    }
}

#[test]
fn test_monotone_in_capacity() {
    for instance in random_instances(20, 12) {
        let mut last_fractional = 0.0;
        let mut last_zero_one = 0;
        for capacity in (0..=instance.capacity + 10).step_by(3) {
            let fractional = fractional::solve(&instance.items, capacity).unwrap();
            let zero_one = zero_one::solve(&instance.items, capacity, &Limits::default()).unwrap();
            assert!(fractional.total_value + 1e-9 >= last_fractional);
            assert!(zero_one.max_value >= last_zero_one);
            last_fractional = fractional.total_value;
            last_zero_one = zero_one.max_value;
        }
    }
}

#[test]
fn test_early_exit_matches_full_walk() {
    // Keeps walking after the cut item with nothing left to fill.
    fn full_walk(items: &[Item], capacity: i64) -> (f64, Vec<usize>) {
        let mut total_value = 0.0;
        let mut remaining = capacity;
        let mut taken = Vec::new();
        for item in fractional::greedy_order(items) {
            if remaining <= 0 {
                continue;
            }
            if item.weight <= remaining {
                total_value += item.value as f64;
                remaining -= item.weight;
            } else {
                total_value += remaining as f64 / item.weight as f64 * item.value as f64;
                remaining = 0;
            }
            taken.push(item.index);
        }
        (total_value, taken)
    }

    for instance in random_instances(200, 30) {
        let result = fractional::solve(&instance.items, instance.capacity).unwrap();
        let (total_value, taken) = full_walk(&instance.items, instance.capacity);
        assert_eq!(result.total_value.to_bits(), total_value.to_bits());
        let indices: Vec<usize> = result.contributions.iter().map(|c| c.index).collect();
        assert_eq!(indices, taken);
    }
}

#[test]
fn test_repeated_solves_are_identical() {
    for instance in random_instances(50, 30) {
        let a = solve(&instance, &Limits::default()).unwrap();
        let b = solve(&instance, &Limits::default()).unwrap();
        assert_eq!(a.zero_one, b.zero_one);
        assert_eq!(
            a.fractional.total_value.to_bits(),
            b.fractional.total_value.to_bits()
        );
        assert_eq!(a.fractional.contributions, b.fractional.contributions);
    }
}

#[test]
fn test_empty_inputs_give_empty_solutions() {
    let instance = Instance::from_pairs(0, &[(3, 4), (1, 1)]).unwrap();
    let solution = solve(&instance, &Limits::default()).unwrap();
    assert_eq!(solution.fractional.total_value, 0.0);
    assert!(solution.fractional.contributions.is_empty());
    assert_eq!(solution.zero_one, ZeroOneResult::default());

    let instance = Instance::from_pairs(25, &[]).unwrap();
    assert_eq!(
        solve(&instance, &Limits::default()).unwrap(),
        Solution::default()
    );
}

#[test]
fn test_solve_rejects_invalid_and_oversized_instances() {
    let instance = Instance {
        capacity: 10,
        items: vec![Item::new(1, 0, 5)],
    };
    assert!(matches!(
        solve(&instance, &Limits::default()),
        Err(KnapsackError::InvalidItem { index: 1, .. })
    ));

    let instance = Instance::from_pairs(500, &[(1, 1), (2, 2), (3, 3)]).unwrap();
    let limits = Limits {
        max_items: 2,
        ..Limits::default()
    };
    assert!(matches!(
        solve(&instance, &limits),
        Err(KnapsackError::ResourceExceeded {
            what: "item count",
            ..
        })
    ));
}

#[test]
fn test_classic_instance_both_models() {
    let instance = Instance::from_pairs(50, &[(10, 60), (20, 100), (30, 120)]).unwrap();
    let solution = solve(&instance, &Limits::default()).unwrap();
    assert_eq!(format!("{:.2}", solution.fractional.total_value), "240.00");
    assert_eq!(solution.zero_one.max_value, 220);

    let instance = Instance::from_pairs(3, &[(5, 10)]).unwrap();
    let solution = solve(&instance, &Limits::default()).unwrap();
    assert_eq!(format!("{:.2}", solution.fractional.total_value), "6.00");
    assert_eq!(solution.zero_one.max_value, 0);
}
