mod bounds;
mod chart;
mod engine;
mod error;
mod format;
mod summary;
mod types;

pub use bounds::{
    EXPECTED_RETURN_BOUNDS, InputBounds, MONTHLY_INVESTMENT_BOUNDS, RawInputs, SliderLabels,
    TIME_PERIOD_BOUNDS, clamp_inputs, slider_labels,
};
pub use chart::{ChartData, Dataset, Distribution, build_chart_data, build_distribution};
pub use engine::{compute_growth_series, compute_valuation};
pub use error::{ArithmeticAnomaly, InputError};
pub use format::{Grouping, format_axis_tick, format_currency, format_grouped, format_rupees};
pub use summary::{SipSummary, SummaryCards, summarize};
pub use types::{CalculatorInputs, GrowthPoint, GrowthSeries, ValuationResult};
