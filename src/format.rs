//! Display helpers for amounts, percentages, and the month header.
//!
//! Number formatting follows a single convention: comma thousands separator,
//! period decimal separator, exactly two decimals.

use chrono::{Datelike, NaiveDate};

use crate::ledger::{round_to_cents, ItemKind, Percentage};

/// Placeholder shown wherever a percentage is undefined or not positive.
pub const PERCENTAGE_PLACEHOLDER: &str = "---";

const GROUPING_SEPARATOR: char = ',';

/// Formats `value` as `"+ 1,234.50"` (income) or `"- 1,234.50"` (expense).
///
/// The sign comes from `kind` alone; the magnitude is always `value.abs()`,
/// rounded half away from zero like percentages.
pub fn format_amount(value: f64, kind: ItemKind) -> String {
    let body = format!("{:.2}", round_to_cents(value.abs()));
    let (int_part, dec_part) = body.split_once('.').unwrap_or((body.as_str(), "00"));
    let sign = match kind {
        ItemKind::Income => '+',
        ItemKind::Expense => '-',
    };
    format!(
        "{sign} {}.{dec_part}",
        group_digits(int_part, GROUPING_SEPARATOR)
    )
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (count, ch) in digits.chars().enumerate() {
        if count != 0 && (digits.len() - count) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

/// Sign used when rendering the net budget: only a strictly positive budget counts as income.
pub fn budget_kind(budget: f64) -> ItemKind {
    if budget > 0.0 {
        ItemKind::Income
    } else {
        ItemKind::Expense
    }
}

/// `"30.00%"` for a positive percentage, the placeholder otherwise.
pub fn format_percentage(percentage: Percentage) -> String {
    match percentage {
        Percentage::Value(value) if value > 0.0 => format!("{value:.2}%"),
        _ => PERCENTAGE_PLACEHOLDER.to_string(),
    }
}

/// `"October 2026"`.
pub fn format_month(date: NaiveDate) -> String {
    format!("{} {}", month_name(date.month()), date.year())
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_amounts_with_sign_and_grouping() {
        assert_eq!(format_amount(1234.5, ItemKind::Expense), "- 1,234.50");
        assert_eq!(format_amount(50.0, ItemKind::Income), "+ 50.00");
        assert_eq!(format_amount(1_000_000.0, ItemKind::Expense), "- 1,000,000.00");
        assert_eq!(format_amount(999.999, ItemKind::Income), "+ 1,000.00");
        assert_eq!(format_amount(123456.0, ItemKind::Income), "+ 123,456.00");
        assert_eq!(format_amount(0.0, ItemKind::Income), "+ 0.00");
    }

    #[test]
    fn ties_round_away_from_zero() {
        assert_eq!(format_amount(0.125, ItemKind::Expense), "- 0.13");
        assert_eq!(format_amount(0.375, ItemKind::Income), "+ 0.38");
        assert_eq!(format_amount(1234.625, ItemKind::Income), "+ 1,234.63");
        assert_eq!(format_amount(-0.125, ItemKind::Income), "+ 0.13");
        assert_eq!(format_percentage(Percentage::of(1.0, 800.0)), "0.13%");
    }

    #[test]
    fn sign_follows_kind_not_value() {
        assert_eq!(format_amount(-600.0, ItemKind::Income), "+ 600.00");
        assert_eq!(format_amount(-12.3, ItemKind::Expense), "- 12.30");
    }

    #[test]
    fn zero_budget_renders_as_expense() {
        assert_eq!(budget_kind(0.0), ItemKind::Expense);
        assert_eq!(budget_kind(-1.0), ItemKind::Expense);
        assert_eq!(budget_kind(0.01), ItemKind::Income);
        assert_eq!(format_amount(0.0, budget_kind(0.0)), "- 0.00");
    }

    #[test]
    fn formats_percentages() {
        assert_eq!(format_percentage(Percentage::Value(30.0)), "30.00%");
        assert_eq!(format_percentage(Percentage::Value(12.3)), "12.30%");
        assert_eq!(format_percentage(Percentage::Value(0.0)), "---");
        assert_eq!(format_percentage(Percentage::Undefined), "---");
    }

    #[test]
    fn formats_month_label() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        assert_eq!(format_month(date), "October 2026");
    }
}
