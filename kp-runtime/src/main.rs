use anyhow::{anyhow, Result};
use clap::{arg, ArgMatches, Command};
use kp_algorithms::solve;
use kp_problems::{Instance, Limits, Track};
use kp_runtime::run_interactive;
use kp_structs::{
    api::{SolveRequest, SolveResponse},
    config::LoggingConfig,
};
use kp_utils::{jsonify, jsonify_pretty, load_json, u8s_from_str};
use tracing::info;

// Defaults mirror `Limits::default()`
fn limit_args(command: Command) -> Command {
    command
        .arg(
            arg!(--"max-capacity" [MAX_CAPACITY] "Largest capacity accepted")
                .default_value("1000000")
                .value_parser(clap::value_parser!(i64)),
        )
        .arg(
            arg!(--"max-items" [MAX_ITEMS] "Largest number of items accepted")
                .default_value("10000")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            arg!(--"max-table-cells" [MAX_TABLE_CELLS] "Largest dynamic programming table allowed")
                .default_value("50000000")
                .value_parser(clap::value_parser!(u64)),
        )
}

fn cli() -> Command {
    Command::new("kp-runtime")
        .about("Solves fractional and 0/1 knapsack instances")
        .arg_required_else_help(true)
        .arg(
            arg!(--"log-level" [LEVEL] "Log level written to stderr (overridden by RUST_LOG)")
                .global(true)
                .default_value("warn")
                .value_parser(clap::value_parser!(String)),
        )
        .subcommand(limit_args(
            Command::new("interactive")
                .about("Reads capacity and items from stdin and prints both solutions"),
        ))
        .subcommand(limit_args(
            Command::new("solve")
                .about("Solves an instance and prints the result as json")
                .arg(
                    arg!(<INSTANCE> "Instance json string, path to json file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(arg!(--pretty "Pretty-print the json output")),
        ))
        .subcommand(
            Command::new("verify")
                .about("Checks a 0/1 selection against an instance")
                .arg(
                    arg!(<INSTANCE> "Instance json string, path to json file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(<SELECTION> "Json array of item indices or path to json file")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
        .subcommand(
            Command::new("generate")
                .about("Prints a random instance generated from a seed")
                .arg(arg!(<SEED> "Any string").value_parser(clap::value_parser!(String)))
                .arg(
                    arg!(--track [TRACK] "Generation parameters")
                        .default_value("n_items=20,budget=50")
                        .value_parser(clap::value_parser!(Track)),
                ),
        )
}

fn main() {
    let matches = cli().get_matches();

    LoggingConfig {
        level: matches.get_one::<String>("log-level").unwrap().clone(),
        format: "pretty".to_string(),
    }
    .init();

    if let Err(e) = match matches.subcommand() {
        Some(("interactive", sub_m)) => interactive(read_limits(sub_m)),
        Some(("solve", sub_m)) => solve_instance(
            sub_m.get_one::<String>("INSTANCE").unwrap(),
            read_limits(sub_m),
            sub_m.get_flag("pretty"),
        ),
        Some(("verify", sub_m)) => verify_selection(
            sub_m.get_one::<String>("INSTANCE").unwrap(),
            sub_m.get_one::<String>("SELECTION").unwrap(),
        ),
        Some(("generate", sub_m)) => generate_instance(
            sub_m.get_one::<String>("SEED").unwrap(),
            sub_m.get_one::<Track>("track").unwrap(),
        ),
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn read_limits(sub_m: &ArgMatches) -> Limits {
    Limits {
        max_capacity: *sub_m.get_one::<i64>("max-capacity").unwrap(),
        max_items: *sub_m.get_one::<usize>("max-items").unwrap(),
        max_table_cells: *sub_m.get_one::<u64>("max-table-cells").unwrap(),
    }
}

fn interactive(limits: Limits) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_interactive(stdin.lock(), stdout.lock(), &limits)?;
    Ok(())
}

fn solve_instance(instance: &str, limits: Limits, pretty: bool) -> Result<()> {
    let instance = load_json::<SolveRequest>(instance)?.into_instance()?;
    info!(
        items = instance.num_items(),
        capacity = instance.capacity,
        "solving instance"
    );
    let solution = solve(&instance, &limits)?;
    let response = SolveResponse::from(&solution);
    if pretty {
        println!("{}", jsonify_pretty(&response));
    } else {
        println!("{}", jsonify(&response));
    }
    Ok(())
}

fn verify_selection(instance: &str, selection: &str) -> Result<()> {
    if instance == "-" && selection == "-" {
        return Err(anyhow!("Only one of INSTANCE and SELECTION can be read from stdin"));
    }
    let instance = load_json::<SolveRequest>(instance)?.into_instance()?;
    let selection = load_json::<Vec<usize>>(selection)?;
    let (value, weight) = instance.evaluate_selection(&selection)?;
    println!(
        "Selection is valid: value = {}, weight = {} (capacity {})",
        value, weight, instance.capacity
    );
    Ok(())
}

fn generate_instance(seed: &str, track: &Track) -> Result<()> {
    let instance = Instance::generate_instance(&u8s_from_str(seed), track)?;
    info!(%track, capacity = instance.capacity, "generated instance");
    println!("{}", jsonify(&SolveRequest::from(&instance)));
    Ok(())
}
