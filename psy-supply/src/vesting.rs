//! Linear monthly vesting of the PSY DAO grant.
//!
//! The grant releases in equal monthly slices between two fixed calendar
//! dates. A month counts as elapsed once its day-of-month has been reached,
//! so the slice for the current month unlocks on the start date's day.

use crate::constants::{DAO_GRANT_TOTAL_NATIVE, DAO_GRANT_VESTING_END, DAO_GRANT_VESTING_START};
use chrono::{Datelike, NaiveDate};

fn date((year, month, day): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Whole months from `from` to `to`, counting only year and month fields.
fn months_between(from: NaiveDate, to: NaiveDate) -> i64 {
    i64::from(to.year() - from.year()) * 12 + i64::from(to.month() as i32 - from.month() as i32)
}

/// Native amount of the DAO grant that has not vested yet as of `today`.
pub fn unvested_amount(today: NaiveDate) -> u128 {
    unvested(
        DAO_GRANT_TOTAL_NATIVE,
        date(DAO_GRANT_VESTING_START),
        date(DAO_GRANT_VESTING_END),
        today,
    )
}

/// Remaining = total - total * elapsed_months / total_months, with floor
/// division. Elapsed months clamp to [0, total_months], so dates before the
/// start leave the grant whole and dates past the end leave nothing.
fn unvested(total: u128, start: NaiveDate, end: NaiveDate, today: NaiveDate) -> u128 {
    let total_months = months_between(start, end);
    if total_months <= 0 {
        // Degenerate schedule with no monthly slices: everything unlocks at
        // the end date.
        return if today < end { total } else { 0 };
    }
    let mut elapsed = months_between(start, today);
    if today.day() < start.day() {
        // The current month's slice has not been reached yet.
        elapsed -= 1;
    }
    let elapsed = elapsed.clamp(0, total_months) as u128;
    total - total * elapsed / total_months as u128
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestUnvested {
        expected_unvested: u128,
        today: (i32, u32, u32),
    }

    // A 1200-unit grant vesting over 12 months starting on the 15th.
    fn run_test_unvested(t: TestUnvested) {
        let start = date((2022, 3, 15));
        let end = date((2023, 3, 15));
        let remaining = unvested(1200, start, end, date(t.today));
        assert_eq!(remaining, t.expected_unvested);
    }

    #[test]
    fn unvested_at_start() {
        run_test_unvested(TestUnvested {
            expected_unvested: 1200,
            today: (2022, 3, 15),
        })
    }

    #[test]
    fn unvested_day_before_first_slice() {
        run_test_unvested(TestUnvested {
            expected_unvested: 1200,
            today: (2022, 4, 14),
        })
    }

    #[test]
    fn unvested_on_first_slice_day() {
        run_test_unvested(TestUnvested {
            expected_unvested: 1100,
            today: (2022, 4, 15),
        })
    }

    #[test]
    fn unvested_day_after_first_slice() {
        run_test_unvested(TestUnvested {
            expected_unvested: 1100,
            today: (2022, 4, 16),
        })
    }

    #[test]
    fn unvested_mid_schedule_before_slice_day() {
        // Naive month count says 6, day-of-month has not been reached.
        run_test_unvested(TestUnvested {
            expected_unvested: 700,
            today: (2022, 9, 14),
        })
    }

    #[test]
    fn unvested_at_end() {
        run_test_unvested(TestUnvested {
            expected_unvested: 0,
            today: (2023, 3, 15),
        })
    }

    #[test]
    fn unvested_before_start_clamps_to_total() {
        run_test_unvested(TestUnvested {
            expected_unvested: 1200,
            today: (2021, 7, 1),
        })
    }

    #[test]
    fn unvested_after_end_clamps_to_zero() {
        run_test_unvested(TestUnvested {
            expected_unvested: 0,
            today: (2024, 1, 1),
        })
    }

    #[test]
    fn unvested_floor_division() {
        // 1000 over 12 months: after one month 1000 - 1000*1/12 = 917.
        let start = date((2022, 3, 1));
        let end = date((2023, 3, 1));
        assert_eq!(unvested(1000, start, end, date((2022, 4, 1))), 917);
    }

    #[test]
    fn degenerate_schedule_vests_at_end() {
        let day = date((2022, 3, 15));
        assert_eq!(unvested(1200, day, day, date((2022, 3, 14))), 1200);
        assert_eq!(unvested(1200, day, day, day), 0);
        assert_eq!(unvested(1200, day, day, date((2022, 3, 16))), 0);
    }

    #[test]
    fn grant_constants_cover_whole_months() {
        let start = date(DAO_GRANT_VESTING_START);
        let end = date(DAO_GRANT_VESTING_END);
        assert_eq!(start.day(), end.day());
        assert_eq!(months_between(start, end), 36);
    }

    #[test]
    fn grant_fully_unvested_before_schedule() {
        assert_eq!(unvested_amount(date((2021, 12, 31))), DAO_GRANT_TOTAL_NATIVE);
    }

    #[test]
    fn grant_fully_vested_after_schedule() {
        assert_eq!(unvested_amount(date((2025, 1, 1))), 0);
    }
}
