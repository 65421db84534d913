// File: crates/plot-core/src/error.rs
// Summary: Typed errors for contract violations a host must see.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("duplicate label in series: {0}")]
    DuplicateLabel(String),
    #[error("pair series labels must be distinct")]
    PairLabelsNotDistinct,
    #[error("pair series values must be non-negative")]
    NegativePairValue,
    #[error("dataset kind does not match the chart kind")]
    DataKindMismatch,
    #[error("view size must be finite and positive")]
    InvalidViewSize,
}
