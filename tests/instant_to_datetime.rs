extern crate jalali;
use jalali::{JalaliDateTime, Instant, Month};
use jalali::{DatePiece, TimePiece};


#[test]
fn a_long_time_ago() {
    let date = JalaliDateTime::at(-1_000_000_000);

    assert_eq!(date.year(),   1317);
    assert_eq!(date.month(),  Month::Ordibehesht);
    assert_eq!(date.day(),    4);
    assert_eq!(date.hour(),   22);
    assert_eq!(date.minute(), 13);
    assert_eq!(date.second(), 20);
}


#[test]
fn unix_epoch() {
    let date = JalaliDateTime::at(0);

    assert_eq!(date.year(),   1348);
    assert_eq!(date.month(),  Month::Dey);
    assert_eq!(date.day(),    11);
    assert_eq!(date.hour(),   00);
    assert_eq!(date.minute(), 00);
    assert_eq!(date.second(), 00);
}


#[test]
fn billennium() {
    let date = JalaliDateTime::at(1_000_000_000);

    assert_eq!(date.year(),   1380);
    assert_eq!(date.month(),  Month::Shahrivar);
    assert_eq!(date.day(),    18);
    assert_eq!(date.hour(),   01);
    assert_eq!(date.minute(), 46);
    assert_eq!(date.second(), 40);
}


#[test]
fn numbers() {
    let date = JalaliDateTime::at(1_234_567_890);

    assert_eq!(date.year(),   1387);
    assert_eq!(date.month(),  Month::Bahman);
    assert_eq!(date.day(),    25);
    assert_eq!(date.hour(),   23);
    assert_eq!(date.minute(), 31);
    assert_eq!(date.second(), 30);
}


#[test]
fn year_2033() {
    let date = JalaliDateTime::from_instant(Instant::at_ns(2_000_000_000, 123_456_789));

    assert_eq!(date.year(),       1412);
    assert_eq!(date.month(),      Month::Ordibehesht);
    assert_eq!(date.day(),        29);
    assert_eq!(date.hour(),       03);
    assert_eq!(date.minute(),     33);
    assert_eq!(date.second(),     20);
    assert_eq!(date.nanosecond(), 123_456_789);
}
