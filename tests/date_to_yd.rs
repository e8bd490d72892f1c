extern crate jalali;
use jalali::{JalaliDate, Month};
use jalali::DatePiece;


#[test]
fn start_of_year_day() {
    let date = JalaliDate::ymd(1402, Month::Farvardin, 1).unwrap();
    assert_eq!(date.yearday(), 1);
}


#[test]
fn end_of_year_day() {
    let date = JalaliDate::ymd(1402, Month::Esfand, 29).unwrap();
    assert_eq!(date.yearday(), 365);
}


#[test]
fn end_of_leap_year_day() {
    let date = JalaliDate::ymd(1403, Month::Esfand, 30).unwrap();
    assert_eq!(date.yearday(), 366);
}


#[test]
fn start_of_second_half() {
    let date = JalaliDate::ymd(1402, Month::Mehr, 1).unwrap();
    assert_eq!(date.yearday(), 187);
}


#[test]
fn yearday() {
    for year in 1..2058 {
        assert_eq!(JalaliDate::ymd(year, Month::Farvardin, 31).unwrap().yearday() + 1,
                   JalaliDate::ymd(year, Month::Ordibehesht, 1).unwrap().yearday());

        assert_eq!(JalaliDate::ymd(year, Month::Shahrivar, 31).unwrap().yearday() + 1,
                   JalaliDate::ymd(year, Month::Mehr, 1).unwrap().yearday());

        assert_eq!(JalaliDate::ymd(year, Month::Bahman, 30).unwrap().yearday() + 1,
                   JalaliDate::ymd(year, Month::Esfand, 1).unwrap().yearday());
    }
}
