use serde::Serialize;

use super::format::format_axis_tick;
use super::types::{GrowthPoint, ValuationResult};

pub const INVESTMENT_VALUE_LABEL: &str = "Investment Value";
pub const AMOUNT_INVESTED_LABEL: &str = "Amount Invested";
pub const INVESTED_AMOUNT_LABEL: &str = "Invested Amount";
pub const EST_RETURNS_LABEL: &str = "Est. Returns";
const Y_AXIS_INTERVALS: u32 = 4;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: &'static str,
    pub data: Vec<f64>,
}

/// Line chart: one label per year offset, projected value against principal.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub labels: Vec<u32>,
    pub datasets: [Dataset; 2],
    pub y_axis_ticks: Vec<String>,
}

impl ChartData {
    pub fn investment_value(&self) -> &[f64] {
        &self.datasets[0].data
    }

    pub fn amount_invested(&self) -> &[f64] {
        &self.datasets[1].data
    }
}

pub fn build_chart_data(series: &[GrowthPoint]) -> ChartData {
    let peak = series
        .iter()
        .map(|p| p.projected_value.max(p.cumulative_invested))
        .fold(0.0, f64::max);
    ChartData {
        labels: series.iter().map(|p| p.year_offset).collect(),
        datasets: [
            Dataset {
                label: INVESTMENT_VALUE_LABEL,
                data: series.iter().map(|p| p.projected_value).collect(),
            },
            Dataset {
                label: AMOUNT_INVESTED_LABEL,
                data: series.iter().map(|p| p.cumulative_invested).collect(),
            },
        ],
        y_axis_ticks: (0..=Y_AXIS_INTERVALS)
            .map(|k| format_axis_tick(peak * f64::from(k) / f64::from(Y_AXIS_INTERVALS)))
            .collect(),
    }
}

/// Donut chart split between principal and returns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Distribution {
    pub invested: f64,
    pub returns: f64,
    pub invested_share: f64,
    pub returns_share: f64,
}

impl Distribution {
    pub fn labels() -> [&'static str; 2] {
        [INVESTED_AMOUNT_LABEL, EST_RETURNS_LABEL]
    }
}

pub fn build_distribution(valuation: &ValuationResult) -> Distribution {
    let invested = valuation.total_invested;
    let returns = valuation.estimated_returns;
    let total = invested + returns;
    let (invested_share, returns_share) = if total > 0.0 && total.is_finite() {
        (invested / total, returns / total)
    } else {
        (0.0, 0.0)
    };
    Distribution {
        invested,
        returns,
        invested_share,
        returns_share,
    }
}
