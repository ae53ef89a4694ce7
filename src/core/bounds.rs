use serde::Serialize;

use super::error::InputError;
use super::format::{Grouping, format_rupees};
use super::types::CalculatorInputs;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InputBounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl InputBounds {
    /// `min(max(value, min), max)`; callers reject non-finite values first.
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }

    /// Rounds to the nearest slider step, then clamps.
    pub fn snap(&self, value: f64) -> f64 {
        self.clamp((value / self.step).round() * self.step)
    }
}

pub const MONTHLY_INVESTMENT_BOUNDS: InputBounds = InputBounds {
    min: 500.0,
    max: 100_000.0,
    step: 500.0,
};

pub const EXPECTED_RETURN_BOUNDS: InputBounds = InputBounds {
    min: 1.0,
    max: 30.0,
    step: 0.5,
};

pub const TIME_PERIOD_BOUNDS: InputBounds = InputBounds {
    min: 1.0,
    max: 30.0,
    step: 1.0,
};

/// Unclamped values as they arrive from a slider, form field or CLI flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawInputs {
    pub monthly_investment: f64,
    pub expected_return: f64,
    pub time_period: f64,
}

pub fn clamp_inputs(raw: RawInputs) -> Result<CalculatorInputs, InputError> {
    let monthly_investment = require_finite("monthlyInvestment", raw.monthly_investment)?;
    let expected_return = require_finite("expectedReturn", raw.expected_return)?;
    let time_period = require_finite("timePeriod", raw.time_period)?;

    Ok(CalculatorInputs {
        monthly_contribution: MONTHLY_INVESTMENT_BOUNDS.snap(monthly_investment),
        annual_rate_percent: EXPECTED_RETURN_BOUNDS.snap(expected_return),
        // Bounded to [1, 30] so the cast cannot truncate.
        years: TIME_PERIOD_BOUNDS.snap(time_period) as u32,
    })
}

/// `(min, max)` labels shown at the ends of each slider.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderLabels {
    pub monthly_investment: (String, String),
    pub expected_return: (String, String),
    pub time_period: (String, String),
}

pub fn slider_labels() -> SliderLabels {
    let years = |n: f64| {
        if n == 1.0 {
            "1 Year".to_string()
        } else {
            format!("{n} Years")
        }
    };
    SliderLabels {
        monthly_investment: (
            format_rupees(MONTHLY_INVESTMENT_BOUNDS.min, Grouping::Indian),
            format_rupees(MONTHLY_INVESTMENT_BOUNDS.max, Grouping::Indian),
        ),
        expected_return: (
            format!("{}%", EXPECTED_RETURN_BOUNDS.min),
            format!("{}%", EXPECTED_RETURN_BOUNDS.max),
        ),
        time_period: (years(TIME_PERIOD_BOUNDS.min), years(TIME_PERIOD_BOUNDS.max)),
    }
}

fn require_finite(name: &'static str, value: f64) -> Result<f64, InputError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InputError::NotFinite { name, value })
    }
}
