/*

    Feed a list of positions through HistoryBounds and
    report the bounds of the recent history.

    Usage: history-bounds <filename>.json
    (see json_parser.rs for the file format)

    @date: 18 Oct, 2026
    @author: bartu

*/

use std::{self, env, time::Instant};
use tracing::{info, error, debug};
use tracing_subscriber;

use minmax_bounds::{HistoryBounds, MinMaxBounds};
use minmax_bounds::json_parser::parse_history_input;

fn main() -> Result<(), Box<dyn std::error::Error>> {

    // Logging on console
    tracing_subscriber::fmt::init();

    // Parse args
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        error!("Usage: {} <filename>.json", args.first().map_or("history-bounds", String::as_str));
        std::process::exit(1);
    }
    let json_path = &args[1];

    info!("Loading positions from {}...", json_path);
    let input = parse_history_input(json_path).map_err(|e| {
        error!("Failed to load positions: {}", e);
        e
    })?;

    let mut history = HistoryBounds::new(input.settings)?;

    let start = Instant::now();
    for (i, p) in input.positions.iter().enumerate() {
        history.insert(MinMaxBounds::from_point(p.0));
        if let Some(total) = history.total() {
            debug!("[{}] {} -> total {}", i, p.0, total);
        }
    }
    info!("Inserted {} positions in {:?}", input.positions.len(), start.elapsed());

    match history.total() {
        Some(total) => println!("{}", total),
        None => info!("No positions given, history is empty."),
    }
    info!("Finished execution.");
    Ok(())
}
