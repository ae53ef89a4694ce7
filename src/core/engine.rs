use tracing::{debug, warn};

use super::error::ArithmeticAnomaly;
use super::types::{CalculatorInputs, GrowthPoint, GrowthSeries, ValuationResult};

const MONTHS_PER_YEAR: f64 = 12.0;

pub fn compute_valuation(inputs: &CalculatorInputs) -> ValuationResult {
    let total_invested = finite_or_zero(inputs.invested_after(inputs.years));

    match future_value(
        inputs.monthly_contribution,
        inputs.annual_rate_percent,
        inputs.months(),
    ) {
        Ok(value) => {
            let projected_value = total_invested.max(round_half_up(value));
            ValuationResult {
                total_invested,
                projected_value,
                estimated_returns: (projected_value - total_invested).max(0.0),
            }
        }
        Err(anomaly) => {
            warn!(
                %anomaly,
                monthly_contribution = inputs.monthly_contribution,
                annual_rate_percent = inputs.annual_rate_percent,
                years = inputs.years,
                "valuation fell back to principal-only projection"
            );
            ValuationResult::principal_only(total_invested)
        }
    }
}

/// One point per whole year, `0..=years`. Offset zero is always `(0, 0)`.
pub fn compute_growth_series(inputs: &CalculatorInputs) -> GrowthSeries {
    let mut fallbacks = 0u32;
    let series: GrowthSeries = (0..=inputs.years)
        .map(|year_offset| {
            let cumulative_invested = finite_or_zero(inputs.invested_after(year_offset));
            let projected_value = if year_offset == 0 {
                0.0
            } else {
                let months = f64::from(year_offset) * MONTHS_PER_YEAR;
                match future_value(
                    inputs.monthly_contribution,
                    inputs.annual_rate_percent,
                    months,
                ) {
                    Ok(value) => round_half_up(value),
                    Err(anomaly) => {
                        debug!(%anomaly, year_offset, "growth point fell back to principal");
                        fallbacks += 1;
                        cumulative_invested
                    }
                }
            };
            GrowthPoint {
                year_offset,
                cumulative_invested,
                projected_value,
            }
        })
        .collect();

    if fallbacks > 0 {
        warn!(
            fallbacks,
            points = series.len(),
            annual_rate_percent = inputs.annual_rate_percent,
            "growth series used principal-only values"
        );
    }
    series
}

/// Future value of `months` monthly contributions paid at the start of each
/// period (annuity-due). A zero rate degenerates to plain principal.
fn future_value(
    monthly_contribution: f64,
    annual_rate_percent: f64,
    months: f64,
) -> Result<f64, ArithmeticAnomaly> {
    if !monthly_contribution.is_finite() {
        return Err(ArithmeticAnomaly::NonFiniteInput {
            name: "monthly_contribution",
            value: monthly_contribution,
        });
    }
    if !annual_rate_percent.is_finite() {
        return Err(ArithmeticAnomaly::NonFiniteInput {
            name: "annual_rate_percent",
            value: annual_rate_percent,
        });
    }
    if months == 0.0 {
        return Ok(0.0);
    }

    let monthly_rate = annual_rate_percent / (MONTHS_PER_YEAR * 100.0);
    if monthly_rate == 0.0 {
        return Ok(monthly_contribution * months);
    }

    let growth = (1.0 + monthly_rate).powf(months);
    if !growth.is_finite() {
        return Err(ArithmeticAnomaly::GrowthOverflow {
            monthly_rate,
            months,
        });
    }

    let value = monthly_contribution * ((growth - 1.0) / monthly_rate) * (1.0 + monthly_rate);
    if !value.is_finite() {
        return Err(ArithmeticAnomaly::NonFiniteResult(value));
    }
    Ok(value)
}

/// Rounds to the nearest integer with ties going towards positive infinity.
fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{prop_assert, prop_assert_eq, proptest};

    const EPS: f64 = 1e-6;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    fn inputs(monthly_contribution: f64, annual_rate_percent: f64, years: u32) -> CalculatorInputs {
        CalculatorInputs {
            monthly_contribution,
            annual_rate_percent,
            years,
        }
    }

    #[test]
    fn default_widget_scenario_matches_known_values() {
        let result = compute_valuation(&inputs(5_000.0, 12.0, 10));
        assert_approx(result.total_invested, 600_000.0);
        assert_approx(result.projected_value, 1_161_695.0);
        assert_approx(result.estimated_returns, 561_695.0);
    }

    #[test]
    fn smallest_slider_scenario_is_marginally_above_principal() {
        let result = compute_valuation(&inputs(500.0, 1.0, 1));
        assert_approx(result.total_invested, 6_000.0);
        assert_approx(result.projected_value, 6_033.0);
        assert_approx(result.estimated_returns, 33.0);
    }

    #[test]
    fn largest_slider_scenario_stays_finite() {
        let result = compute_valuation(&inputs(100_000.0, 30.0, 30));
        assert_approx(result.total_invested, 36_000_000.0);
        assert_approx(result.projected_value, 29_738_258_066.0);
    }

    #[test]
    fn slider_grid_rounding_tie_matches_closed_form() {
        // fv is 3_360_555_065.49999, just under the tie.
        let result = compute_valuation(&inputs(85_500.0, 23.0, 29));
        assert_approx(result.total_invested, 29_754_000.0);
        assert_approx(result.projected_value, 3_360_555_065.0);
        assert_approx(result.estimated_returns, 3_330_801_065.0);

        let series = compute_growth_series(&inputs(85_500.0, 23.0, 29));
        assert_approx(series[29].projected_value, 3_360_555_065.0);
    }

    #[test]
    fn zero_rate_degenerates_to_principal() {
        let result = compute_valuation(&inputs(2_500.0, 0.0, 4));
        assert_approx(result.total_invested, 120_000.0);
        assert_approx(result.projected_value, 120_000.0);
        assert_approx(result.estimated_returns, 0.0);
    }

    #[test]
    fn vanishing_rate_converges_to_principal() {
        let result = compute_valuation(&inputs(1_000.0, 1e-12, 5));
        assert_approx(result.projected_value, result.total_invested);
        assert_approx(result.estimated_returns, 0.0);
    }

    #[test]
    fn negative_rate_is_clamped_to_principal() {
        let result = compute_valuation(&inputs(1_000.0, -8.0, 5));
        assert_approx(result.total_invested, 60_000.0);
        assert_approx(result.projected_value, 60_000.0);
        assert_approx(result.estimated_returns, 0.0);
    }

    #[test]
    fn overflowing_rate_falls_back_to_principal() {
        let result = compute_valuation(&inputs(5_000.0, 1e6, 30));
        assert_approx(result.total_invested, 1_800_000.0);
        assert_approx(result.projected_value, 1_800_000.0);
        assert_approx(result.estimated_returns, 0.0);
        assert!(!result.projected_value.is_nan());
    }

    #[test]
    fn non_finite_rate_falls_back_to_principal() {
        for rate in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let result = compute_valuation(&inputs(1_000.0, rate, 2));
            assert_approx(result.total_invested, 24_000.0);
            assert_approx(result.projected_value, 24_000.0);
            assert_approx(result.estimated_returns, 0.0);
        }
    }

    #[test]
    fn non_finite_contribution_yields_zero_result() {
        let result = compute_valuation(&inputs(f64::NAN, 12.0, 3));
        assert_eq!(result, ValuationResult::principal_only(0.0));
    }

    #[test]
    fn zero_years_is_all_zero() {
        let result = compute_valuation(&inputs(5_000.0, 12.0, 0));
        assert_eq!(result, ValuationResult::principal_only(0.0));
        let series = compute_growth_series(&inputs(5_000.0, 12.0, 0));
        assert_eq!(series.len(), 1);
        assert_approx(series[0].projected_value, 0.0);
    }

    #[test]
    fn growth_series_first_years_match_known_values() {
        let series = compute_growth_series(&inputs(5_000.0, 12.0, 3));
        let values: Vec<f64> = series.iter().map(|p| p.projected_value).collect();
        assert_eq!(values, vec![0.0, 64_047.0, 136_216.0, 217_538.0]);
        let invested: Vec<f64> = series.iter().map(|p| p.cumulative_invested).collect();
        assert_eq!(invested, vec![0.0, 60_000.0, 120_000.0, 180_000.0]);
        let offsets: Vec<u32> = series.iter().map(|p| p.year_offset).collect();
        assert_eq!(offsets, vec![0, 1, 2, 3]);
    }

    #[test]
    fn growth_series_overflow_falls_back_per_point() {
        let series = compute_growth_series(&inputs(1_000.0, 1e6, 30));
        for point in &series {
            assert!(point.projected_value.is_finite());
        }
        let last = series.last().expect("non-empty series");
        assert_approx(last.projected_value, last.cumulative_invested);
        assert_approx(series[0].projected_value, 0.0);
    }

    #[test]
    fn round_half_up_breaks_ties_upwards() {
        assert_approx(round_half_up(2.5), 3.0);
        assert_approx(round_half_up(2.4999), 2.0);
        assert_approx(round_half_up(-2.5), -2.0);
        assert_approx(round_half_up(-2.6), -3.0);
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]

        #[test]
        fn prop_valuation_invariants_hold(
            contribution_steps in 1u32..=200,
            rate_half_points in 2u32..=60,
            years in 1u32..=30
        ) {
            let monthly_contribution = f64::from(contribution_steps) * 500.0;
            let annual_rate_percent = f64::from(rate_half_points) * 0.5;
            let result = compute_valuation(&inputs(monthly_contribution, annual_rate_percent, years));

            prop_assert_eq!(result.total_invested, monthly_contribution * f64::from(years) * 12.0);
            prop_assert!(result.estimated_returns >= 0.0);
            prop_assert!(result.projected_value >= result.total_invested);
            prop_assert_eq!(
                result.estimated_returns,
                (result.projected_value - result.total_invested).max(0.0)
            );
        }

        #[test]
        fn prop_series_ends_at_valuation(
            contribution_steps in 1u32..=200,
            rate_half_points in 2u32..=60,
            years in 1u32..=30
        ) {
            let calc = inputs(f64::from(contribution_steps) * 500.0, f64::from(rate_half_points) * 0.5, years);
            let series = compute_growth_series(&calc);
            let valuation = compute_valuation(&calc);

            prop_assert_eq!(series.len(), years as usize + 1);
            prop_assert_eq!(series[0].cumulative_invested, 0.0);
            prop_assert_eq!(series[0].projected_value, 0.0);
            let last = series[series.len() - 1];
            prop_assert_eq!(last.projected_value, valuation.projected_value);
            prop_assert_eq!(last.cumulative_invested, valuation.total_invested);
        }

        #[test]
        fn prop_outputs_never_nan(
            monthly_contribution in -1e12f64..1e12,
            annual_rate_percent in -1e9f64..1e9,
            years in 0u32..200
        ) {
            let calc = inputs(monthly_contribution, annual_rate_percent, years);
            let result = compute_valuation(&calc);
            prop_assert!(result.total_invested.is_finite());
            prop_assert!(result.projected_value.is_finite());
            prop_assert!(result.estimated_returns >= 0.0);
            prop_assert!(result.projected_value >= result.total_invested);
            for point in compute_growth_series(&calc) {
                prop_assert!(point.projected_value.is_finite());
            }
        }
    }
}
