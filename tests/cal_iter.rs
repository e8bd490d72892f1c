extern crate jalali;
pub use jalali::iter::{YearMonth, Year};
pub use jalali::JalaliDate;

mod months {
    use super::*;
    use jalali::Month::*;

    #[test]
    fn range_full() {
        let year = Year(1402);
        let months: Vec<_> = year.months(..).collect();
        assert_eq!(months, vec![
            year.month(Farvardin),
            year.month(Ordibehesht),
            year.month(Khordad),
            year.month(Tir),
            year.month(Mordad),
            year.month(Shahrivar),
            year.month(Mehr),
            year.month(Aban),
            year.month(Azar),
            year.month(Dey),
            year.month(Bahman),
            year.month(Esfand),
        ]);
    }

    #[test]
    fn range_to() {
        let year = Year(1402);
        let months: Vec<YearMonth> = year.months(..Khordad).collect();
        assert_eq!(months, vec![
            year.month(Farvardin),
            year.month(Ordibehesht),
        ]);
    }

    #[test]
    fn range() {
        let year = Year(1402);
        let months: Vec<_> = year.months(Tir..Mehr).collect();
        assert_eq!(months, vec![
            year.month(Tir),
            year.month(Mordad),
            year.month(Shahrivar),
        ]);
    }

    #[test]
    fn day_counts() {
        let counts: Vec<_> = Year(1402).months(..).map(|m| m.day_count()).collect();
        assert_eq!(counts, vec![ 31, 31, 31, 31, 31, 31, 30, 30, 30, 30, 30, 29 ]);
    }
}

mod days {
    use super::*;
    use jalali::Month::*;

    #[test]
    fn range_full() {
        let days: Vec<_> = Year(1403).month(Esfand).days(..).collect();
        let results: Vec<_> = (1..31).map(|d| JalaliDate::ymd(1403, Esfand, d).unwrap()).collect();
        assert_eq!(days, results);
    }

    #[test]
    fn range_from() {
        let days: Vec<_> = Year(1402).month(Aban).days(28..).collect();
        assert_eq!(days, vec![
            JalaliDate::ymd(1402, Aban, 28).unwrap(),
            JalaliDate::ymd(1402, Aban, 29).unwrap(),
            JalaliDate::ymd(1402, Aban, 30).unwrap(),
        ]);
    }

    #[test]
    fn just_for_one_day() {
        let day = Year(1357).month(Bahman).day(22);
        assert_eq!(day, JalaliDate::ymd(1357, Bahman, 22));
    }

    #[test]
    fn day_that_doesnt_exist() {
        assert!(Year(1402).month(Esfand).day(30).is_err());
    }
}

#[test]
fn entire_year() {
    let count = Year(1404).months(..)
                          .flat_map(|m| m.days(..))
                          .count();

    assert_eq!(count, 365);
}

#[test]
fn entire_leap_year() {
    let count = Year(1408).months(..)
                          .flat_map(|m| m.days(..))
                          .count();

    assert_eq!(count, 366);
}

#[test]
fn consecutive_days() {
    let days: Vec<_> = Year(1402).months(..).flat_map(|m| m.days(..)).collect();

    for pair in days.windows(2) {
        assert_eq!(pair[0].plus_days(1), pair[1]);
    }
}
