use crate::models::{DayOverflow, Frequency};
use chrono::{Datelike, Duration, NaiveDate};

pub fn next_payment_date(
    last_payment: NaiveDate,
    frequency: Frequency,
    billing_day: u32,
    overflow: DayOverflow,
) -> NaiveDate {
    let (year, month) = add_months(last_payment.year(), last_payment.month(), frequency.months());
    let day = billing_day.clamp(1, 31);

    let resolved = match overflow {
        DayOverflow::Clamp => NaiveDate::from_ymd_opt(year, month, day.min(days_in_month(year, month))),
        DayOverflow::RollForward => {
            // The cycle itself rolls first: Jan 31 plus one month is Mar 3,
            // so the billing day is then placed in March.
            roll_day(year, month, last_payment.day())
                .and_then(|advanced| roll_day(advanced.year(), advanced.month(), day))
        }
    };

    // Only unreachable at the very end of chrono's calendar range.
    resolved.unwrap_or(NaiveDate::MAX)
}

/// `day` of the given month, with days past the month's end carried into the next.
fn roll_day(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)?.checked_add_signed(Duration::days(i64::from(day) - 1))
}

/// Whole days from `today` to `date`; negative once `date` has passed.
pub fn days_until(today: NaiveDate, date: NaiveDate) -> i64 {
    (date - today).num_days()
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if NaiveDate::from_ymd_opt(year, 2, 29).is_some() => 29,
        2 => 28,
        _ => 31,
    }
}

fn add_months(year: i32, month: u32, months: u32) -> (i32, u32) {
    let zero_based = month - 1 + months;
    (year + (zero_based / 12) as i32, zero_based % 12 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn monthly_advances_one_month_onto_billing_day() {
        let next = next_payment_date(date(2025, 4, 15), Frequency::Monthly, 15, DayOverflow::Clamp);
        assert_eq!(next, date(2025, 5, 15));
    }

    #[test]
    fn quarterly_advances_three_months() {
        let next = next_payment_date(date(2025, 3, 1), Frequency::Quarterly, 1, DayOverflow::Clamp);
        assert_eq!(next, date(2025, 6, 1));
    }

    #[test]
    fn billing_day_replaces_day_of_last_payment() {
        let next = next_payment_date(date(2025, 4, 3), Frequency::Monthly, 20, DayOverflow::Clamp);
        assert_eq!(next, date(2025, 5, 20));
    }

    #[test]
    fn crosses_year_boundary() {
        let monthly = next_payment_date(date(2025, 12, 10), Frequency::Monthly, 10, DayOverflow::Clamp);
        assert_eq!(monthly, date(2026, 1, 10));

        let quarterly = next_payment_date(date(2025, 11, 5), Frequency::Quarterly, 5, DayOverflow::Clamp);
        assert_eq!(quarterly, date(2026, 2, 5));
    }

    #[test]
    fn clamp_uses_last_day_of_short_month() {
        let feb = next_payment_date(date(2025, 1, 31), Frequency::Monthly, 31, DayOverflow::Clamp);
        assert_eq!(feb, date(2025, 2, 28));

        let leap = next_payment_date(date(2024, 1, 31), Frequency::Monthly, 31, DayOverflow::Clamp);
        assert_eq!(leap, date(2024, 2, 29));

        let april = next_payment_date(date(2025, 3, 31), Frequency::Monthly, 31, DayOverflow::Clamp);
        assert_eq!(april, date(2025, 4, 30));
    }

    #[test]
    fn roll_forward_spills_into_next_month() {
        let april = next_payment_date(date(2025, 3, 15), Frequency::Monthly, 31, DayOverflow::RollForward);
        assert_eq!(april, date(2025, 5, 1));

        let february = next_payment_date(date(2025, 1, 10), Frequency::Monthly, 30, DayOverflow::RollForward);
        assert_eq!(february, date(2025, 3, 2));
    }

    #[test]
    fn roll_forward_carries_long_last_payment_day_before_placing_billing_day() {
        let from_jan_31 = next_payment_date(date(2025, 1, 31), Frequency::Monthly, 31, DayOverflow::RollForward);
        assert_eq!(from_jan_31, date(2025, 3, 31));

        let from_mar_31 = next_payment_date(date(2025, 3, 31), Frequency::Monthly, 15, DayOverflow::RollForward);
        assert_eq!(from_mar_31, date(2025, 5, 15));

        let quarterly = next_payment_date(date(2025, 11, 30), Frequency::Quarterly, 1, DayOverflow::RollForward);
        assert_eq!(quarterly, date(2026, 3, 1));
    }

    #[test]
    fn policies_agree_when_day_fits() {
        for day in 1..=28 {
            let clamp = next_payment_date(date(2025, 1, 10), Frequency::Monthly, day, DayOverflow::Clamp);
            let roll = next_payment_date(date(2025, 1, 10), Frequency::Monthly, day, DayOverflow::RollForward);
            assert_eq!(clamp, roll);
            assert_eq!(clamp, date(2025, 2, day));
        }
    }

    #[test]
    fn days_until_is_signed() {
        let today = date(2025, 5, 10);
        assert_eq!(days_until(today, date(2025, 5, 17)), 7);
        assert_eq!(days_until(today, today), 0);
        assert_eq!(days_until(today, date(2025, 4, 28)), -12);
    }

    #[test]
    fn february_length_tracks_leap_years() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2025, 11), 30);
        assert_eq!(days_in_month(2025, 12), 31);
    }
}
