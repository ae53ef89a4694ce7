use serde::Serialize;

use super::chart::{ChartData, Distribution, build_chart_data, build_distribution};
use super::engine::{compute_growth_series, compute_valuation};
use super::format::format_currency;
use super::types::{CalculatorInputs, GrowthSeries, ValuationResult};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryCards {
    pub total_investment: String,
    pub estimated_returns: String,
    pub total_value: String,
}

impl SummaryCards {
    pub fn from_valuation(valuation: &ValuationResult) -> Self {
        Self {
            total_investment: format_currency(valuation.total_invested),
            estimated_returns: format_currency(valuation.estimated_returns),
            total_value: format_currency(valuation.projected_value),
        }
    }
}

/// Everything the rendering layer needs after an input change.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SipSummary {
    pub inputs: CalculatorInputs,
    pub valuation: ValuationResult,
    pub cards: SummaryCards,
    pub growth: GrowthSeries,
    pub chart: ChartData,
    pub distribution: Distribution,
}

pub fn summarize(inputs: &CalculatorInputs) -> SipSummary {
    let valuation = compute_valuation(inputs);
    let growth = compute_growth_series(inputs);
    SipSummary {
        inputs: *inputs,
        cards: SummaryCards::from_valuation(&valuation),
        chart: build_chart_data(&growth),
        distribution: build_distribution(&valuation),
        valuation,
        growth,
    }
}
