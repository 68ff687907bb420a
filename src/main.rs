#![warn(clippy::all, rust_2018_idioms)]

use anyhow::Result;
use classbench::{cli, driver};

fn main() -> Result<()> {
    let matches = cli::command().get_matches();

    env_logger::Builder::new()
        .filter_level(cli::log_level(&matches))
        .init();

    let config = cli::build_config(&matches)?;
    log::debug!("Benchmark config: {config:?}");

    let report = driver::run(&config)?;
    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("\n{report}\n");
    }

    Ok(())
}
