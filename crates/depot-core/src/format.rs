//! Locale-aware rendering of dates, currency and plain numbers.
//!
//! Driven by `LocaleConfig`. Only the locale families the backend's tenants
//! actually run with get a table; anything else falls back to the English
//! conventions.

use chrono::{Datelike, NaiveDate};

use crate::config::LocaleConfig;

struct LocaleSpec {
    decimal_sep: char,
    group_sep: char,
    months: [&'static str; 12],
    /// Long date pattern: day-first ("12 de marzo de 2026") vs month-first.
    day_first: bool,
}

const SPANISH: LocaleSpec = LocaleSpec {
    decimal_sep: ',',
    group_sep: '.',
    months: [
        "enero",
        "febrero",
        "marzo",
        "abril",
        "mayo",
        "junio",
        "julio",
        "agosto",
        "septiembre",
        "octubre",
        "noviembre",
        "diciembre",
    ],
    day_first: true,
};

const ENGLISH: LocaleSpec = LocaleSpec {
    decimal_sep: '.',
    group_sep: ',',
    months: [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ],
    day_first: false,
};

fn spec_for(tag: &str) -> &'static LocaleSpec {
    if tag.starts_with("es") {
        &SPANISH
    } else {
        &ENGLISH
    }
}

fn currency_symbol(code: &str) -> &str {
    match code {
        "ARS" => "$",
        "USD" => "US$",
        "EUR" => "\u{20ac}",
        other => other,
    }
}

/// Long-form date. Absent dates render as "N/A"; strings that are not
/// `YYYY-MM-DD` pass through untouched rather than disappearing.
pub fn format_date(config: &LocaleConfig, value: Option<&str>) -> String {
    let Some(raw) = value else {
        return "N/A".to_string();
    };
    let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") else {
        return raw.to_string();
    };

    let spec = spec_for(&config.locale);
    let month = spec.months[date.month0() as usize];
    if spec.day_first {
        format!("{} de {} de {}", date.day(), month, date.year())
    } else {
        format!("{} {}, {}", month, date.day(), date.year())
    }
}

/// Currency amount with symbol, grouping and two decimals.
pub fn format_currency(config: &LocaleConfig, amount: f64) -> String {
    let spec = spec_for(&config.locale);
    let symbol = currency_symbol(&config.currency);
    format!("{symbol} {}", group_digits(amount, 2, spec))
}

/// Plain number with digit grouping; up to two decimals, trailing zeros
/// dropped for whole numbers.
pub fn format_number(config: &LocaleConfig, value: f64) -> String {
    let spec = spec_for(&config.locale);
    let decimals = if (value - value.trunc()).abs() < f64::EPSILON {
        0
    } else {
        2
    };
    group_digits(value, decimals, spec)
}

fn group_digits(value: f64, decimals: usize, spec: &LocaleSpec) -> String {
    let negative = value < 0.0;
    let rendered = format!("{:.decimals$}", value.abs());
    let (int_part, frac_part) = match rendered.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rendered.as_str(), None),
    };

    let mut grouped = String::new();
    let digits: Vec<char> = int_part.chars().collect();
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(spec.group_sep);
        }
        grouped.push(*c);
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(frac) = frac_part {
        out.push(spec.decimal_sep);
        out.push_str(frac);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn es() -> LocaleConfig {
        LocaleConfig::default()
    }

    fn en() -> LocaleConfig {
        LocaleConfig {
            locale: "en-US".to_string(),
            currency: "USD".to_string(),
        }
    }

    #[test]
    fn spanish_long_date() {
        assert_eq!(
            format_date(&es(), Some("2026-03-04")),
            "4 de marzo de 2026"
        );
    }

    #[test]
    fn english_long_date() {
        assert_eq!(format_date(&en(), Some("2026-03-04")), "March 4, 2026");
    }

    #[test]
    fn missing_date_is_na() {
        assert_eq!(format_date(&es(), None), "N/A");
    }

    #[test]
    fn unparseable_date_passes_through() {
        assert_eq!(format_date(&es(), Some("soon")), "soon");
    }

    #[test]
    fn spanish_currency_grouping() {
        assert_eq!(format_currency(&es(), 1234.5), "$ 1.234,50");
        assert_eq!(format_currency(&es(), 0.99), "$ 0,99");
        assert_eq!(format_currency(&es(), 1_000_000.0), "$ 1.000.000,00");
    }

    #[test]
    fn english_currency_grouping() {
        assert_eq!(format_currency(&en(), 1234.5), "US$ 1,234.50");
    }

    #[test]
    fn plain_numbers() {
        assert_eq!(format_number(&es(), 1234.0), "1.234");
        assert_eq!(format_number(&es(), 1234.56), "1.234,56");
        assert_eq!(format_number(&en(), 1234.56), "1,234.56");
        assert_eq!(format_number(&es(), -1234.0), "-1.234");
    }
}
