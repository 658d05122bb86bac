use anyhow::Result;
use clap::{arg, ArgMatches, Command};
use kp_server::routes;
use kp_structs::config::ServerConfig;
use std::sync::Arc;
use tracing::info;

fn cli() -> Command {
    Command::new("kp-server")
        .about("Serves the knapsack solvers over HTTP")
        .arg(
            arg!(--config [CONFIG] "Config json string or path to json file")
                .value_parser(clap::value_parser!(String)),
        )
        .arg(
            arg!(--port [PORT] "(Optional) Override port to listen on")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            arg!(--"max-capacity" [MAX_CAPACITY] "(Optional) Override largest capacity accepted")
                .value_parser(clap::value_parser!(i64)),
        )
        .arg(
            arg!(--"max-items" [MAX_ITEMS] "(Optional) Override largest number of items accepted")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            arg!(--"max-table-cells" [MAX_TABLE_CELLS] "(Optional) Override largest dynamic programming table allowed")
                .value_parser(clap::value_parser!(u64)),
        )
}

fn load_config(matches: &ArgMatches) -> Result<ServerConfig> {
    let mut config = match matches.get_one::<String>("config") {
        Some(config) => ServerConfig::load(config)?,
        None => ServerConfig::default(),
    };
    if let Some(port) = matches.get_one::<u16>("port") {
        config.port = *port;
    }
    if let Some(max_capacity) = matches.get_one::<i64>("max-capacity") {
        config.limits.max_capacity = *max_capacity;
    }
    if let Some(max_items) = matches.get_one::<usize>("max-items") {
        config.limits.max_items = *max_items;
    }
    if let Some(max_table_cells) = matches.get_one::<u64>("max-table-cells") {
        config.limits.max_table_cells = *max_table_cells;
    }
    Ok(config)
}

#[tokio::main]
async fn main() {
    let matches = cli().get_matches();
    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    config.logging.init();

    info!(
        port = config.port,
        limits = ?config.limits,
        "starting webserver"
    );
    let port = config.port;
    warp::serve(routes(Arc::new(config)))
        .run(([0, 0, 0, 0], port))
        .await;
}
