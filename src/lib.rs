//! Duplicate-counting benchmark: a quadratic `Vec` scan against a linear
//! `HashMap` tally over the same random dataset.

pub mod bench;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod driver;
pub mod error;

pub use bench::{DuplicateCounter, Strategy, count_duplicates_dict, count_duplicates_list};
pub use config::BenchConfig;
pub use driver::{BenchReport, Measurement};
pub use error::BenchError;
