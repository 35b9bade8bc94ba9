use chrono::{Datelike, NaiveDate};

/// Length of the fixed analysis season. A water year spans October 1
/// through September 30; leap years would produce a 366th day, which is
/// dropped so every season covers exactly [1, 365].
pub const SEASON_LENGTH_DAYS: i64 = 365;

/// Water year for a date, labeled by its ending calendar year.
///
/// October-December belong to the following year's water year, so
/// e.g. 1995-11-02 -> 1996 and 1995-03-26 -> 1995.
pub fn water_year_for_date(date: &NaiveDate) -> i32 {
    let month = date.month();
    let year = date.year();
    if month >= 10 {
        year + 1
    } else {
        year
    }
}

/// October 1 preceding the given water year: the first day of its season.
pub fn season_start(water_year: i32) -> NaiveDate {
    // Oct 1 exists in every year
    NaiveDate::from_ymd_opt(water_year - 1, 10, 1).unwrap()
}

/// Day offset of a date within its water year season, with Oct 1 = day 1.
///
/// The result lands in [1, 365] for every date except the 366th day of a
/// leap-affected season; callers drop out-of-range days via
/// [`in_season`].
pub fn day_of_season(date: &NaiveDate) -> i64 {
    let anchor = season_start(water_year_for_date(date));
    (*date - anchor).num_days() + 1
}

/// Whether a day offset falls inside the fixed 365-day season.
pub fn in_season(day: i64) -> bool {
    (1..=SEASON_LENGTH_DAYS).contains(&day)
}

#[cfg(test)]
mod tests {
    use super::{day_of_season, in_season, season_start, water_year_for_date};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_water_year_labels_by_ending_year() {
        // March sits in the water year that ends that same calendar year
        assert_eq!(water_year_for_date(&date(1995, 3, 26)), 1995);
        // November sits in the water year ending the following year
        assert_eq!(water_year_for_date(&date(1995, 11, 2)), 1996);
        assert_eq!(water_year_for_date(&date(2070, 10, 1)), 2071);
        assert_eq!(water_year_for_date(&date(2070, 9, 30)), 2070);
    }

    #[test]
    fn test_season_start() {
        assert_eq!(season_start(1996), date(1995, 10, 1));
        assert_eq!(season_start(2041), date(2040, 10, 1));
    }

    #[test]
    fn test_day_of_season_anchors_at_oct_1() {
        assert_eq!(day_of_season(&date(1995, 10, 1)), 1);
        assert_eq!(day_of_season(&date(1995, 10, 31)), 31);
        // Oct(31) + Nov(30) + Dec(31) = 92, so Jan 1 is day 93
        assert_eq!(day_of_season(&date(1996, 1, 1)), 93);
    }

    #[test]
    fn test_non_leap_season_ends_on_day_365() {
        // Water year 1995: 1994-10-01 through 1995-09-30, no Feb 29
        assert_eq!(day_of_season(&date(1995, 9, 30)), 365);
        assert!(in_season(day_of_season(&date(1995, 9, 30))));
    }

    #[test]
    fn test_leap_season_day_366_is_out_of_range() {
        // Water year 1996 contains 1996-02-29, pushing Sep 30 to day 366
        assert_eq!(day_of_season(&date(1996, 9, 30)), 366);
        assert!(!in_season(day_of_season(&date(1996, 9, 30))));
        // Days before the leap day are unaffected
        assert_eq!(day_of_season(&date(1996, 2, 28)), 151);
        assert!(in_season(day_of_season(&date(1996, 2, 28))));
    }

    #[test]
    fn test_in_season_bounds() {
        assert!(!in_season(0));
        assert!(in_season(1));
        assert!(in_season(365));
        assert!(!in_season(366));
    }
}
