use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorInputs {
    pub monthly_contribution: f64,
    pub annual_rate_percent: f64,
    pub years: u32,
}

impl CalculatorInputs {
    pub fn months(&self) -> f64 {
        f64::from(self.years) * 12.0
    }

    /// Principal paid in over `years` whole years of contributions.
    pub fn invested_after(&self, years: u32) -> f64 {
        self.monthly_contribution * f64::from(years) * 12.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationResult {
    pub total_invested: f64,
    pub projected_value: f64,
    pub estimated_returns: f64,
}

impl ValuationResult {
    /// Linear projection used when the compounding formula cannot be evaluated.
    pub fn principal_only(total_invested: f64) -> Self {
        Self {
            total_invested,
            projected_value: total_invested,
            estimated_returns: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthPoint {
    pub year_offset: u32,
    pub cumulative_invested: f64,
    pub projected_value: f64,
}

pub type GrowthSeries = Vec<GrowthPoint>;
