extern crate jalali;
use jalali::{JalaliDate, JalaliDateTime, TimeOfDay, Duration};
use jalali::{DatePiece, TimePiece};


fn date(year: i32, month: i8, day: i8) -> JalaliDate {
    JalaliDate::of(year, month, day).unwrap()
}


#[test]
fn addition() {
    let date = JalaliDateTime::at(10000);
    assert_eq!(JalaliDateTime::at(10001), date + Duration::of(1))
}

#[test]
fn subtraction() {
    let date = JalaliDateTime::at(100000000);
    assert_eq!(JalaliDateTime::at(99999999), date - Duration::of(1))
}

#[test]
fn difference() {
    let earlier = JalaliDateTime::at_ns(86_400, 500);
    let later = JalaliDateTime::at(86_400 * 3);
    assert_eq!(later - earlier, Duration::of_ns(172_799, 999_999_500));
    assert_eq!(earlier - later, -Duration::of_ns(172_799, 999_999_500));
}

#[test]
fn next_day() {
    let day = date(1402, 6, 31);
    assert_eq!(day.plus_days(1), date(1402, 7, 1));
    assert_eq!(day.plus_days(1).to_julian_day(), day.to_julian_day() + 1);
}

#[test]
fn over_the_leap_day() {
    assert_eq!(date(1403, 12, 29).plus_days(1), date(1403, 12, 30));
    assert_eq!(date(1403, 12, 30).plus_days(1), date(1404, 1, 1));
    assert_eq!(date(1404, 12, 29).plus_days(1), date(1405, 1, 1));
    assert_eq!(date(1404, 1, 1).minus_days(1), date(1403, 12, 30));
}

#[test]
fn a_century() {
    assert_eq!(date(1403, 1, 1).plus_days(36525), date(1503, 1, 1));
    assert_eq!(date(1403, 1, 1).minus_days(100_000), date(1129, 3, 15));
}

#[test]
fn months_clamp() {
    assert_eq!(date(1402, 1, 31).plus_months(7), date(1402, 8, 30));
    assert_eq!(date(1402, 6, 31).plus_months(6), date(1402, 12, 29));
    assert_eq!(date(1403, 6, 31).plus_months(6), date(1403, 12, 30));
    assert_eq!(date(1402, 3, 15).minus_months(15), date(1400, 12, 15));
    assert_eq!(date(1402, 3, 15).plus_months(0), date(1402, 3, 15));
}

#[test]
fn years_clamp() {
    assert_eq!(date(1403, 12, 30).plus_years(1), date(1404, 12, 29));
    assert_eq!(date(1403, 12, 30).minus_years(4), date(1399, 12, 30));
    assert_eq!(date(1403, 7, 1).plus_years(-1403), date(0, 7, 1));
}

#[test]
fn nanos_carry_into_days() {
    let day = date(1403, 1, 1);
    let midnight = JalaliDateTime::of_nano_of_day(day, 0).unwrap();

    let before = midnight.plus_nanos(-1);
    assert_eq!(before, JalaliDateTime::of_nano_of_day(day.minus_days(1), 86_400_000_000_000 - 1).unwrap());

    let later = midnight.plus_hours(50).plus_minutes(-30);
    assert_eq!(later.date(), date(1403, 1, 3));
    assert_eq!((later.hour(), later.minute()), (1, 30));
}

#[test]
fn days_keep_the_time() {
    let then = JalaliDateTime::of(date(1403, 12, 30), 23, 59, 59, 999_999_999).unwrap();
    let next = then.plus_days(1);
    assert_eq!(next.date(), date(1404, 1, 1));
    assert_eq!(next.time(), then.time());
    assert_eq!(then.plus_nanos(1).date(), date(1404, 1, 1));
    assert_eq!(then.plus_nanos(1).nano_of_day(), 0);
    assert_eq!(then.minus_seconds(60).minute(), 58);
}

#[test]
fn days_until() {
    assert_eq!(date(1403, 1, 1).days_until(date(1404, 1, 1)), 366);
    assert_eq!(date(1404, 1, 1).days_until(date(1403, 1, 1)), -366);
}

#[test]
fn difference_across_four_centuries() {
    let later = JalaliDateTime::new(date(1403, 1, 1), TimeOfDay::midnight());
    let earlier = JalaliDateTime::new(date(1000, 1, 1), TimeOfDay::midnight());

    assert_eq!(later - earlier, Duration::of(147_192 * 86_400));
    assert_eq!(earlier - later, -Duration::of(147_192 * 86_400));
    assert_eq!(earlier + (later - earlier), later);
}

#[test]
fn hours_across_centuries() {
    let nowruz = JalaliDateTime::new(date(1403, 1, 1), TimeOfDay::midnight());

    assert_eq!(nowruz.plus_hours(3_000_000), JalaliDateTime::new(date(1745, 3, 26), TimeOfDay::midnight()));
    assert_eq!(nowruz.minus_hours(3_000_000), JalaliDateTime::new(date(1060, 10, 3), TimeOfDay::midnight()));
    assert_eq!(nowruz.plus_minutes(180_000_000), nowruz.plus_hours(3_000_000));
}

#[test]
fn long_durations() {
    let nowruz = JalaliDateTime::new(date(1403, 1, 1), TimeOfDay::midnight());
    let then = nowruz + Duration::of(10_000_000_000);

    assert_eq!(then.date(), date(1719, 11, 18));
    assert_eq!(then.time(), TimeOfDay::hms(17, 46, 40).unwrap());
    assert_eq!(then - Duration::of(10_000_000_000), nowruz);
}
