//! Interest rate rules.
//!
//! The annual rate depends only on whether both dates fall in the same calendar
//! year: Dec 31 -> Jan 1 gets the higher rate, an 11-month range inside one year
//! does not.

use rust_decimal::{Decimal, RoundingStrategy};
use time::Date;

use super::repo_types::PaymentTerm;

/// Column scale of `rate_applied`.
const RATE_SCALE: u32 = 4;

pub fn same_year_rate() -> Decimal {
    Decimal::new(12, 2)
}

pub fn cross_year_rate() -> Decimal {
    Decimal::new(15, 2)
}

pub fn annual_rate(start: Date, end: Date) -> Decimal {
    if start.year() == end.year() {
        same_year_rate()
    } else {
        cross_year_rate()
    }
}

pub fn effective_rate(term: PaymentTerm, annual: Decimal) -> Decimal {
    let rate = match term {
        PaymentTerm::Monthly => annual / Decimal::from(12),
        PaymentTerm::Annual => annual,
    };
    rate.round_dp_with_strategy(RATE_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn pct(hundredths: i64) -> Decimal {
        Decimal::new(hundredths, 2)
    }

    #[test]
    fn same_year_ranges_get_twelve_percent() {
        let ranges = [
            (date!(2024 - 03 - 01), date!(2024 - 03 - 01)),
            (date!(2024 - 01 - 01), date!(2024 - 12 - 31)),
            (date!(2024 - 01 - 15), date!(2024 - 12 - 15)),
        ];
        for (start, end) in ranges {
            assert_eq!(annual_rate(start, end), pct(12));
        }
    }

    #[test]
    fn cross_year_ranges_get_fifteen_percent() {
        assert_eq!(annual_rate(date!(2023 - 12 - 31), date!(2024 - 01 - 01)), pct(15));
        assert_eq!(annual_rate(date!(2020 - 06 - 01), date!(2025 - 06 - 01)), pct(15));
    }

    #[test]
    fn reversed_dates_in_different_years_still_cross_year() {
        assert_eq!(annual_rate(date!(2025 - 01 - 01), date!(2024 - 01 - 01)), pct(15));
    }

    #[test]
    fn monthly_term_divides_by_twelve() {
        assert_eq!(effective_rate(PaymentTerm::Monthly, pct(12)), pct(1));
        assert_eq!(effective_rate(PaymentTerm::Monthly, pct(15)), Decimal::new(125, 4));
    }

    #[test]
    fn annual_term_keeps_rate() {
        assert_eq!(effective_rate(PaymentTerm::Annual, pct(12)), pct(12));
        assert_eq!(effective_rate(PaymentTerm::Annual, pct(15)), pct(15));
    }

    #[test]
    fn monthly_rate_rounds_to_four_places() {
        let rate = effective_rate(PaymentTerm::Monthly, Decimal::new(1, 1));
        assert_eq!(rate, Decimal::new(83, 4));
        assert!(rate.scale() <= RATE_SCALE);
    }

    #[test]
    fn rate_midpoint_rounds_away_from_zero() {
        // 0.1206 / 12 = 0.01005
        let rate = effective_rate(PaymentTerm::Monthly, Decimal::new(1206, 4));
        assert_eq!(rate, Decimal::new(101, 4));
    }
}
