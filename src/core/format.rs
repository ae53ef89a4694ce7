//! Rupee formatting for summary cards, chart axes and slider labels.

const RUPEE: char = '₹';
const CRORE: f64 = 10_000_000.0;
const LAKH: f64 = 100_000.0;
const MAX_FRACTION_DIGITS: usize = 3;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum Grouping {
    /// `1,000,000`
    #[default]
    International,
    /// `10,00,000`
    Indian,
}

/// Summary-card form: crore and lakh with two decimals, smaller amounts with
/// thousands separators.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("{RUPEE}0");
    }
    if amount >= CRORE {
        return format!("{RUPEE}{:.2} Cr", amount / CRORE);
    }
    if amount >= LAKH {
        return format!("{RUPEE}{:.2} L", amount / LAKH);
    }
    format!("{RUPEE}{}", format_grouped(amount, Grouping::International))
}

/// Compact form for chart axis ticks: one decimal and no space before the unit.
pub fn format_axis_tick(value: f64) -> String {
    if !value.is_finite() {
        return format!("{RUPEE}0");
    }
    if value >= CRORE {
        return format!("{RUPEE}{:.1}Cr", value / CRORE);
    }
    if value >= LAKH {
        return format!("{RUPEE}{:.1}L", value / LAKH);
    }
    format!("{RUPEE}{}", format_grouped(value, Grouping::International))
}

pub fn format_rupees(amount: f64, grouping: Grouping) -> String {
    if !amount.is_finite() {
        return format!("{RUPEE}0");
    }
    format!("{RUPEE}{}", format_grouped(amount, grouping))
}

/// Digit-grouped number with up to three fraction digits, trailing zeros
/// dropped. Non-finite values render as `0`.
pub fn format_grouped(amount: f64, grouping: Grouping) -> String {
    if !amount.is_finite() {
        return "0".to_string();
    }

    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, amount.abs());
    let (int_digits, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + int_digits.len() / 2 + 1);
    let is_zero = int_digits.bytes().all(|b| b == b'0') && fraction.is_empty();
    if amount < 0.0 && !is_zero {
        out.push('-');
    }
    out.push_str(&group_integer_digits(int_digits, grouping));
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

fn group_integer_digits(digits: &str, grouping: Grouping) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 2);
    for (idx, ch) in digits.chars().enumerate() {
        let remaining = len - idx;
        if idx > 0 && is_group_boundary(remaining, grouping) {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn is_group_boundary(remaining: usize, grouping: Grouping) -> bool {
    match grouping {
        Grouping::International => remaining % 3 == 0,
        Grouping::Indian => remaining == 3 || (remaining > 3 && (remaining - 3) % 2 == 0),
    }
}
