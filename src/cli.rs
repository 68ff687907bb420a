use std::path::PathBuf;

use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};

use crate::config::BenchConfig;

pub fn command() -> Command {
    Command::new("classbench")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compare a list-based and a dict-based duplicate counter")
        .arg(
            Arg::new("size")
                .long("size")
                .short('n')
                .value_parser(value_parser!(usize))
                .help("Number of random integers to generate"),
        )
        .arg(
            Arg::new("min")
                .long("min")
                .allow_negative_numbers(true)
                .value_parser(value_parser!(i64))
                .help("Smallest generated value"),
        )
        .arg(
            Arg::new("max")
                .long("max")
                .allow_negative_numbers(true)
                .value_parser(value_parser!(i64))
                .help("Largest generated value"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .short('s')
                .value_parser(value_parser!(u64))
                .help("Seed for a reproducible dataset"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_parser(value_parser!(PathBuf))
                .help("Load settings from a TOML file (flags take precedence)"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print the report as JSON"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::Count)
                .help("Set verbose output level"),
        )
}

pub fn log_level(matches: &ArgMatches) -> log::LevelFilter {
    match matches.get_count("verbose") {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

/// Defaults, then the `--config` file, then individual flags.
pub fn build_config(matches: &ArgMatches) -> Result<BenchConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => BenchConfig::from_toml_file(path)?,
        None => BenchConfig::default(),
    };
    if let Some(&size) = matches.get_one::<usize>("size") {
        config.size = size;
    }
    if let Some(&min) = matches.get_one::<i64>("min") {
        config.min = min;
    }
    if let Some(&max) = matches.get_one::<i64>("max") {
        config.max = max;
    }
    if let Some(&seed) = matches.get_one::<u64>("seed") {
        config.seed = Some(seed);
    }
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BenchError;

    fn write_config(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "classbench-cli-{name}-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, content).unwrap();
        path
    }

    fn config_from(args: &[&str]) -> Result<BenchConfig> {
        let matches = command().try_get_matches_from(args)?;
        build_config(&matches)
    }

    #[test]
    fn no_flags_gives_defaults() {
        let config = config_from(&["classbench"]).unwrap();
        assert_eq!(config, BenchConfig::default());
    }

    #[test]
    fn flags_without_file() {
        let config = config_from(&["classbench", "-n", "50", "--min", "-10", "--max", "10", "-s", "3"])
            .unwrap();
        assert_eq!(
            config,
            BenchConfig {
                size: 50,
                min: -10,
                max: 10,
                seed: Some(3),
            }
        );
    }

    #[test]
    fn file_overrides_defaults() {
        let path = write_config("file-only", "size = 300\nmin = 5\nmax = 50\nseed = 8\n");
        let config = config_from(&["classbench", "-c", path.to_str().unwrap()]);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(
            config.unwrap(),
            BenchConfig {
                size: 300,
                min: 5,
                max: 50,
                seed: Some(8),
            }
        );
    }

    #[test]
    fn flags_override_file() {
        let path = write_config("file-and-flags", "size = 300\nmin = 5\nmax = 50\nseed = 8\n");
        let config = config_from(&[
            "classbench",
            "--config",
            path.to_str().unwrap(),
            "--size",
            "40",
        ]);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(
            config.unwrap(),
            BenchConfig {
                size: 40,
                min: 5,
                max: 50,
                seed: Some(8),
            }
        );
    }

    #[test]
    fn flag_can_invert_file_range() {
        let path = write_config("inverted", "min = 5\nmax = 50\n");
        let config = config_from(&["classbench", "-c", path.to_str().unwrap(), "--min", "60"]);
        std::fs::remove_file(&path).unwrap();

        let err = config.unwrap_err();
        assert_eq!(
            err.downcast_ref::<BenchError>(),
            Some(&BenchError::InvalidRange { min: 60, max: 50 })
        );
    }

    #[test]
    fn verbosity_levels() {
        let level = |args: &[&str]| log_level(&command().try_get_matches_from(args).unwrap());
        assert_eq!(level(&["classbench"]), log::LevelFilter::Info);
        assert_eq!(level(&["classbench", "-v"]), log::LevelFilter::Debug);
        assert_eq!(level(&["classbench", "-vvv"]), log::LevelFilter::Trace);
    }

    #[test]
    fn json_flag() {
        let matches = command().try_get_matches_from(["classbench", "--json"]).unwrap();
        assert!(matches.get_flag("json"));
    }
}
