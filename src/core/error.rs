use thiserror::Error;

/// Numeric failure inside the compounding formula. Always recovered by the
/// engine; never returned from a public operation.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ArithmeticAnomaly {
    #[error("non-finite input: {name} = {value}")]
    NonFiniteInput { name: &'static str, value: f64 },
    #[error("growth factor (1 + {monthly_rate})^{months} is not finite")]
    GrowthOverflow { monthly_rate: f64, months: f64 },
    #[error("future value {0} is not finite")]
    NonFiniteResult(f64),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{name} must be a finite number, got {value}")]
    NotFinite { name: &'static str, value: f64 },
}
