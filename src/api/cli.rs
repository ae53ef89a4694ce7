use clap::{Args, Parser, Subcommand};

use super::DEFAULT_PORT;
use crate::core::{Distribution, Grouping, RawInputs, SipSummary, format_currency, format_rupees};

#[derive(Parser, Debug)]
#[command(
    name = "sip",
    about = "Systematic Investment Plan calculator (monthly annuity-due compounding)"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Enable debug logging")]
    pub debug: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the projection for one set of inputs
    Calc(CalcArgs),
    /// Serve the calculator as a JSON API
    Serve {
        #[arg(default_value_t = DEFAULT_PORT)]
        port: u16,
    },
}

#[derive(Args, Debug, Clone)]
pub struct CalcArgs {
    #[arg(
        long,
        default_value_t = 5000.0,
        allow_negative_numbers = true,
        help = "Monthly investment in rupees, clamped to 500..=100000"
    )]
    pub monthly_investment: f64,
    #[arg(
        long,
        default_value_t = 12.0,
        allow_negative_numbers = true,
        help = "Expected annual return in percent, clamped to 1..=30"
    )]
    pub expected_return: f64,
    #[arg(
        long,
        default_value_t = 10.0,
        allow_negative_numbers = true,
        help = "Investment horizon in years, clamped to 1..=30"
    )]
    pub time_period: f64,
    #[arg(long, help = "Print the full summary as JSON")]
    pub json: bool,
}

impl Default for CalcArgs {
    fn default() -> Self {
        Self {
            monthly_investment: 5_000.0,
            expected_return: 12.0,
            time_period: 10.0,
            json: false,
        }
    }
}

impl CalcArgs {
    pub fn raw_inputs(&self) -> RawInputs {
        RawInputs {
            monthly_investment: self.monthly_investment,
            expected_return: self.expected_return,
            time_period: self.time_period,
        }
    }
}

pub fn render_text(summary: &SipSummary) -> String {
    let inputs = &summary.inputs;
    let cards = &summary.cards;
    let split = &summary.distribution;
    let chart = &summary.chart;
    let [invested_label, returns_label] = Distribution::labels();

    let mut out = format!(
        "SIP of {}/month at {}% p.a. for {} {}\n\n",
        format_rupees(inputs.monthly_contribution, Grouping::Indian),
        inputs.annual_rate_percent,
        inputs.years,
        if inputs.years == 1 { "year" } else { "years" },
    );
    out.push_str(&format!("{:<18}{}\n", "Total Investment", cards.total_investment));
    out.push_str(&format!("{:<18}{}\n", "Est. Returns", cards.estimated_returns));
    out.push_str(&format!("{:<18}{}\n", "Total Value", cards.total_value));
    out.push_str(&format!(
        "{invested_label} {:.1}% | {returns_label} {:.1}%\n\n",
        split.invested_share * 100.0,
        split.returns_share * 100.0,
    ));

    out.push_str(&format!(
        "{:>4}  {:>16}  {:>16}\n",
        "Year", chart.datasets[1].label, chart.datasets[0].label
    ));
    let rows = chart
        .labels
        .iter()
        .zip(chart.amount_invested())
        .zip(chart.investment_value());
    for ((year, invested), value) in rows {
        out.push_str(&format!(
            "{year:>4}  {:>16}  {:>16}\n",
            format_currency(*invested),
            format_currency(*value),
        ));
    }
    out
}
