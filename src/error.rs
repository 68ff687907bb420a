#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BenchError {
    #[error("Invalid value range: min {min} is greater than max {max}")]
    InvalidRange { min: i64, max: i64 },
}
