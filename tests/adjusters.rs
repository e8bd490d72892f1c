extern crate jalali;
use jalali::{JalaliDate, Weekday};
use jalali::DatePiece;


fn date(year: i32, month: i8, day: i8) -> JalaliDate {
    JalaliDate::of(year, month, day).unwrap()
}


#[test]
fn iranian_week() {
    let day = date(1404, 8, 19);
    let saturday = day.start_of_week(Weekday::Saturday);
    let friday = day.end_of_week(Weekday::Saturday);

    assert_eq!(saturday.weekday(), Weekday::Saturday);
    assert_eq!(friday.weekday(), Weekday::Friday);
    assert!(saturday <= day && day <= friday);
    assert_eq!(saturday.days_until(friday), 6);
}

#[test]
fn month_edges() {
    let day = date(1403, 12, 15);
    assert_eq!(day.first_day_of_month(), date(1403, 12, 1));
    assert_eq!(day.last_day_of_month(), date(1403, 12, 30));
    assert_eq!(day.first_day_of_next_month(), date(1404, 1, 1));
    assert_eq!(date(1404, 1, 1).last_day_of_previous_month(), date(1403, 12, 30));
}

#[test]
fn every_friday_of_mehr() {
    let day = date(1403, 7, 1);
    let fridays: Vec<_> = (1 ..= 6).filter_map(|n| day.nth_in_month(Weekday::Friday, n)).collect();

    assert_eq!(fridays.first(), Some(&day.first_in_month(Weekday::Friday)));
    assert_eq!(fridays.last(), Some(&day.last_in_month(Weekday::Friday)));
    assert!(fridays.len() == 4 || fridays.len() == 5);
    for friday in &fridays {
        assert_eq!(friday.weekday(), Weekday::Friday);
        assert_eq!(friday.month(), jalali::Month::Mehr);
    }
}
