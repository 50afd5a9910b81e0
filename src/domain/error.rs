use thiserror::Error;

/// Rejections raised at the input boundary. Computations never return these;
/// they only come out of constructors, ledger mutations and table loading.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    #[error("invalid value for {field}: {value}")]
    InvalidInput { field: &'static str, value: f64 },
    #[error("missing selection: {0}")]
    MissingSelection(String),
    #[error("invalid rate table: {0}")]
    InvalidRateTable(String),
}

pub type PricingResult<T> = Result<T, PricingError>;

/// Accepts finite, non-negative amounts and percentages.
pub fn non_negative(field: &'static str, value: f64) -> PricingResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(PricingError::InvalidInput { field, value })
    }
}
