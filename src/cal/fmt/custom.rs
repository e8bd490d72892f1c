//! Date-to-string routines driven by a pattern of brace-delimited fields.
//!
//! A pattern such as `"{:Y}/{02:N}/{02:D}"` gets compiled into a list of
//! fields once, then applied to as many dates as needed. Inside the braces,
//! an optional alignment (`<`, `^`, or `>`), a `0` for zero-padding, a
//! width, and a `_` for long names may come before the colon and the field
//! letter. Doubled braces produce literal ones.
//!
//! Month and weekday names are always written in Persian. Digits are
//! written in Latin or Persian script depending on the `Numerals` given.
//!
//! The same compiled pattern reads text back with `parse_date` and
//! `parse_datetime`. Digits may be Latin, Persian, or Arabic-Indic, and
//! month names may be long or short. Weekday names are skipped over.

use std::convert::TryFrom;
use std::fmt::{self, Display};
use std::str::CharIndices;

use log::debug;
use num_traits::PrimInt;
use pad::{PadStr, Alignment};

use crate::cal::{DatePiece, TimePiece};
use crate::cal::datetime::{JalaliDate, JalaliDateTime, TimeOfDay, Error as DateTimeError};


static LONG_MONTH_NAMES: [&str; 12] = [
    "فروردین", "اردیبهشت", "خرداد", "تیر", "مرداد", "شهریور",
    "مهر", "آبان", "آذر", "دی", "بهمن", "اسفند",
];

static SHORT_MONTH_NAMES: [&str; 12] = [
    "فرو", "ارد", "خرد", "تیر", "مرد", "شهر",
    "مهر", "آبا", "آذر", "دی", "بهم", "اسف",
];

// Monday first, following the weekday numbering.
static LONG_WEEKDAY_NAMES: [&str; 7] = [
    "دوشنبه", "سه\u{200c}شنبه", "چهارشنبه", "پنج\u{200c}شنبه", "جمعه", "شنبه", "یک\u{200c}شنبه",
];

static SHORT_WEEKDAY_NAMES: [&str; 7] = [
    "د", "س", "چ", "پ", "ج", "ش", "ی",
];

const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];
const ARABIC_INDIC_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];


/// The script that numbers get written in.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum Numerals {

    /// `0123456789`
    Latin,

    /// `۰۱۲۳۴۵۶۷۸۹`
    Persian,
}

impl Numerals {
    fn apply(self, digits: String) -> String {
        match self {
            Numerals::Latin    => digits,
            Numerals::Persian  => to_persian_digits(&digits),
        }
    }
}

/// Replaces every Latin digit in the input with its Persian counterpart.
///
/// ```rust
/// use jalali::format::to_persian_digits;
/// assert_eq!(to_persian_digits("1403/01/01"), "۱۴۰۳/۰۱/۰۱");
/// ```
pub fn to_persian_digits(input: &str) -> String {
    input.chars()
         .map(|c| match c.to_digit(10) {
             Some(n) if c.is_ascii_digit() => PERSIAN_DIGITS[n as usize],
             _                             => c,
         })
         .collect()
}

/// Replaces every Persian or Arabic-Indic digit in the input with its
/// Latin counterpart.
///
/// ```rust
/// use jalali::format::to_latin_digits;
/// assert_eq!(to_latin_digits("۱۴۰۳-٠١-01"), "1403-01-01");
/// ```
pub fn to_latin_digits(input: &str) -> String {
    input.chars()
         .map(|c| {
             let index = PERSIAN_DIGITS.iter().position(|d| *d == c)
                 .or_else(|| ARABIC_INDIC_DIGITS.iter().position(|d| *d == c));

             match index {
                 Some(n) => (b'0' + n as u8) as char,
                 None    => c,
             }
         })
         .collect()
}


#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Field<'a> {
    Literal(&'a str),

    Year(NumArguments),
    YearOfCentury(NumArguments),

    MonthName(bool, TextArguments),
    MonthNumber(NumArguments),

    Day(NumArguments),
    WeekdayName(bool, TextArguments),

    Hour(NumArguments),
    Minute(NumArguments),
    Second(NumArguments),
    Nanosecond(NumArguments),
}

impl<'a> Field<'a> {

    /// Returns whether this field needs a time of day to be written.
    fn is_time(&self) -> bool {
        match *self {
            Field::Hour(_) | Field::Minute(_) | Field::Second(_) | Field::Nanosecond(_) => true,
            _ => false,
        }
    }

    fn format<D>(&self, date: &D, time: Option<&dyn TimePiece>, w: &mut String, numerals: Numerals)
    where D: DatePiece + ?Sized
    {
        let weekday = date.weekday().days_from_monday_as_one() as usize - 1;
        let month = date.month().months_from_farvardin();

        match (*self, time) {
            (Field::Literal(s), _)              => w.push_str(s),
            (Field::Year(a), _)                 => a.format(w, date.year(), numerals),
            (Field::YearOfCentury(a), _)        => a.format(w, date.year_of_century(), numerals),
            (Field::MonthName(true, a), _)      => a.format(w, LONG_MONTH_NAMES[month]),
            (Field::MonthName(false, a), _)     => a.format(w, SHORT_MONTH_NAMES[month]),
            (Field::MonthNumber(a), _)          => a.format(w, date.month() as i8, numerals),
            (Field::Day(a), _)                  => a.format(w, date.day(), numerals),
            (Field::WeekdayName(true, a), _)    => a.format(w, LONG_WEEKDAY_NAMES[weekday]),
            (Field::WeekdayName(false, a), _)   => a.format(w, SHORT_WEEKDAY_NAMES[weekday]),
            (Field::Hour(a), Some(t))           => a.format(w, t.hour(), numerals),
            (Field::Minute(a), Some(t))         => a.format(w, t.minute(), numerals),
            (Field::Second(a), Some(t))         => a.format(w, t.second(), numerals),
            (Field::Nanosecond(a), Some(t))     => a.format(w, t.nanosecond(), numerals),
            (_, None)                           => {},
        }
    }
}


/// A compiled pattern, ready to format dates with.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct DateFormat<'a> {
    pub fields: Vec<Field<'a>>,
}


#[derive(PartialEq, Eq, Clone, Debug, Copy)]
pub enum FormatError {
    InvalidChar { c: char, colon: bool, pos: Pos },
    OpenCurlyBrace { open_pos: Pos },
    CloseCurlyBrace { close_pos: Pos },
    MissingField { open_pos: Pos, close_pos: Pos },
    DoubleAlignment { open_pos: Pos, current_alignment: Alignment },
    DoubleWidth { open_pos: Pos, current_width: Width },

    /// A pattern with hour, minute, second, or nanosecond fields was used
    /// on a value without a time of day.
    TimeFieldOnDate,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            FormatError::InvalidChar { c, colon: true, pos }    => write!(f, "invalid field {:?} at position {}", c, pos),
            FormatError::InvalidChar { c, colon: false, pos }   => write!(f, "invalid character {:?} at position {}", c, pos),
            FormatError::OpenCurlyBrace { open_pos }            => write!(f, "unclosed brace at position {}", open_pos),
            FormatError::CloseCurlyBrace { close_pos }          => write!(f, "unopened brace at position {}", close_pos),
            FormatError::MissingField { open_pos, .. }          => write!(f, "no field letter in braces at position {}", open_pos),
            FormatError::DoubleAlignment { open_pos, .. }       => write!(f, "alignment given twice at position {}", open_pos),
            FormatError::DoubleWidth { open_pos, .. }           => write!(f, "width given twice at position {}", open_pos),
            FormatError::TimeFieldOnDate                        => write!(f, "pattern has time fields but there is no time"),
        }
    }
}

impl std::error::Error for FormatError {
}

pub type Width = usize;
pub type Pos = usize;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Arguments {
    pub alignment: Option<Alignment>,
    pub width:     Option<Width>,
    pub pad_char:  Option<char>,
}

impl Arguments {
    pub fn empty() -> Self {
        Self {
            alignment: None,
            width:     None,
            pad_char:  None,
        }
    }

    pub fn set_width(&mut self, width: Width) -> Self {
        self.width = Some(width);
        *self
    }

    pub fn set_alignment(&mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        *self
    }

    pub fn set_pad_char(&mut self, pad_char: char) -> Self {
        self.pad_char = Some(pad_char);
        *self
    }

    pub fn update_width(&mut self, width: Width, open_pos: Pos) -> Result<(), FormatError> {
        match self.width {
            None => { self.width = Some(width); Ok(())},
            Some(existing) => Err(FormatError::DoubleWidth { open_pos, current_width: existing }),
        }
    }

    pub fn update_alignment(&mut self, alignment: Alignment, open_pos: Pos) -> Result<(), FormatError> {
        match self.alignment {
            None => { self.alignment = Some(alignment); Ok(())},
            Some(existing) => Err(FormatError::DoubleAlignment { open_pos, current_alignment: existing }),
        }
    }

    fn pad(self, string: &str, default_alignment: Alignment) -> String {
        let width     = self.width.unwrap_or(0);
        let pad_char  = self.pad_char.unwrap_or(' ');
        let alignment = self.alignment.unwrap_or(default_alignment);
        string.pad(width, pad_char, alignment, false)
    }

    pub fn is_empty(&self) -> bool {
        self.alignment.is_none() && self.width.is_none() && self.pad_char.is_none()
    }
}


/// Arguments for a field that gets written as a name. Names line up on
/// the left unless told otherwise.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct TextArguments(Arguments);

impl TextArguments {
    #[cfg(test)]
    fn empty() -> Self {
        TextArguments(Arguments::empty())
    }

    fn format(self, w: &mut String, string: &str) {
        w.push_str(&self.0.pad(string, Alignment::Left));
    }
}


/// Arguments for a field that gets written as a number. Numbers line up
/// on the right unless told otherwise, and zero-padding goes after the
/// sign of a negative number.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct NumArguments(Arguments);

impl NumArguments {
    #[cfg(test)]
    fn empty() -> Self {
        NumArguments(Arguments::empty())
    }

    fn format<N: PrimInt + Display>(self, w: &mut String, number: N, numerals: Numerals) {
        let args = self.0;
        let zero_padded = args.pad_char == Some('0') && args.alignment.unwrap_or(Alignment::Right) == Alignment::Right;

        let string = if number < N::zero() && zero_padded {
            let digits = number.to_string();
            let width = args.width.unwrap_or(0).saturating_sub(1);
            format!("-{}", digits.trim_start_matches('-').pad(width, '0', Alignment::Right, false))
        }
        else {
            args.pad(&number.to_string(), Alignment::Right)
        };

        w.push_str(&numerals.apply(string));
    }
}

impl<'a> DateFormat<'a> {

    /// Formats a value with both a date and a time, such as a
    /// `JalaliDateTime`.
    pub fn format<T>(&self, when: &T, numerals: Numerals) -> String
    where T: DatePiece + TimePiece
    {
        let mut buf = String::new();

        for field in &self.fields {
            field.format(when, Some(when as &dyn TimePiece), &mut buf, numerals);
        }

        buf
    }

    /// Formats a value that only has a date. Fails if the pattern asks for
    /// any part of a time.
    ///
    /// ```rust
    /// use jalali::JalaliDate;
    /// use jalali::format::{DateFormat, FormatError, Numerals};
    ///
    /// let date = JalaliDate::of(1403, 1, 1).unwrap();
    ///
    /// let format = DateFormat::parse("{_:E} {:D} {_:M} {:Y}").unwrap();
    /// assert_eq!(format.format_date(&date, Numerals::Persian).unwrap(), "چهارشنبه ۱ فروردین ۱۴۰۳");
    ///
    /// let format = DateFormat::parse("{:Y} {:h}").unwrap();
    /// assert_eq!(format.format_date(&date, Numerals::Latin), Err(FormatError::TimeFieldOnDate));
    /// ```
    pub fn format_date<D>(&self, date: &D, numerals: Numerals) -> Result<String, FormatError>
    where D: DatePiece
    {
        if self.fields.iter().any(Field::is_time) {
            return Err(FormatError::TimeFieldOnDate);
        }

        let mut buf = String::new();

        for field in &self.fields {
            field.format(date, None, &mut buf, numerals);
        }

        Ok(buf)
    }

    /// Reads a date written in this pattern. Fails if the pattern asks for
    /// any part of a time, or lacks a year, month, or day.
    ///
    /// ```rust
    /// use jalali::JalaliDate;
    /// use jalali::format::DateFormat;
    ///
    /// let format = DateFormat::parse("{:D} {_:M} {:Y}").unwrap();
    /// assert_eq!(format.parse_date("۱ فروردین ۱۴۰۳"), Ok(JalaliDate::of(1403, 1, 1).unwrap()));
    /// ```
    pub fn parse_date(&self, input: &str) -> Result<JalaliDate, ReadError> {
        if self.fields.iter().any(Field::is_time) {
            return Err(ReadError::TimeFieldOnDate);
        }

        self.read(input).and_then(Parts::date)
    }

    /// Reads a date and time written in this pattern. Any time fields the
    /// pattern leaves out are taken as zero.
    pub fn parse_datetime(&self, input: &str) -> Result<JalaliDateTime, ReadError> {
        let parts = self.read(input)?;
        let time = parts.time()?;
        Ok(JalaliDateTime::new(parts.date()?, time))
    }

    fn read(&self, input: &str) -> Result<Parts, ReadError> {
        let text = to_latin_digits(input.trim());
        let mut reader = TextReader { text: &text, pos: 0 };
        let mut parts = Parts::default();

        for field in &self.fields {
            if let Err(e) = field.read(&mut reader, &mut parts) {
                debug!("Failed to read {:?}: {}", input, e);
                return Err(e);
            }
        }

        if reader.pos < text.len() {
            debug!("Unread text in {:?} at position {}", input, reader.pos);
            return Err(ReadError::TrailingText { pos: reader.pos });
        }

        Ok(parts)
    }

    /// Compiles a pattern, failing with the position of the first problem
    /// in it.
    pub fn parse(input: &'a str) -> Result<DateFormat<'a>, FormatError> {
        let mut parser = FormatParser::new(input);

        if let Err(e) = parser.parse_format_string() {
            debug!("Invalid date format {:?}: {}", input, e);
            return Err(e);
        }

        Ok(DateFormat { fields: parser.fields })
    }
}


impl<'a> Field<'a> {
    fn read(&self, reader: &mut TextReader<'_>, parts: &mut Parts) -> Result<(), ReadError> {
        match *self {
            Field::Literal(s)           => reader.expect(s),
            Field::Year(a)              => { parts.year = Some(a.read(reader, None, true)?); Ok(()) },
            Field::YearOfCentury(a)     => {
                let yy = a.read(reader, Some(2), false)?;
                parts.year = Some(if yy <= 68 { 1400 + yy } else { 1300 + yy });
                Ok(())
            },
            Field::MonthName(_, _)      => { parts.month = Some(reader.month_name()?); Ok(()) },
            Field::MonthNumber(a)       => { parts.month = Some(a.read(reader, Some(2), false)?); Ok(()) },
            Field::Day(a)               => { parts.day = Some(a.read(reader, Some(2), false)?); Ok(()) },
            Field::WeekdayName(_, _)    => reader.word(),
            Field::Hour(a)              => { parts.hour = a.read(reader, Some(2), false)?; Ok(()) },
            Field::Minute(a)            => { parts.minute = a.read(reader, Some(2), false)?; Ok(()) },
            Field::Second(a)            => { parts.second = a.read(reader, Some(2), false)?; Ok(()) },
            Field::Nanosecond(a)        => { parts.nanosecond = a.read(reader, Some(9), false)?; Ok(()) },
        }
    }
}

impl NumArguments {
    fn read(self, reader: &mut TextReader<'_>, max_digits: Option<usize>, signed: bool) -> Result<i64, ReadError> {
        if self.0.width.is_some() && self.0.pad_char != Some('0') {
            reader.skip_spaces();
        }

        reader.number(self.0.width.or(max_digits), signed)
    }
}


/// The fields read out of some text so far.
#[derive(Default, Debug)]
struct Parts {
    year:       Option<i64>,
    month:      Option<i64>,
    day:        Option<i64>,
    hour:       i64,
    minute:     i64,
    second:     i64,
    nanosecond: i64,
}

impl Parts {
    fn date(self) -> Result<JalaliDate, ReadError> {
        let year  = self.year.ok_or(ReadError::MissingField("year"))?;
        let month = self.month.ok_or(ReadError::MissingField("month"))?;
        let day   = self.day.ok_or(ReadError::MissingField("day"))?;

        let invalid = |_| ReadError::Date(DateTimeError::InvalidDate);
        let date = JalaliDate::of(i32::try_from(year).map_err(invalid)?,
                                  i8::try_from(month).map_err(invalid)?,
                                  i8::try_from(day).map_err(invalid)?)?;
        Ok(date)
    }

    fn time(&self) -> Result<TimeOfDay, ReadError> {
        let invalid = |_| ReadError::Date(DateTimeError::InvalidTime);
        let time = TimeOfDay::hms_nano(i8::try_from(self.hour).map_err(invalid)?,
                                       i8::try_from(self.minute).map_err(invalid)?,
                                       i8::try_from(self.second).map_err(invalid)?,
                                       i32::try_from(self.nanosecond).map_err(invalid)?)?;
        Ok(time)
    }
}


/// A cursor over text that has had its digits made Latin.
struct TextReader<'t> {
    text: &'t str,
    pos:  Pos,
}

impl<'t> TextReader<'t> {
    fn rest(&self) -> &'t str {
        &self.text[self.pos ..]
    }

    fn expect(&mut self, literal: &str) -> Result<(), ReadError> {
        if self.rest().starts_with(literal) {
            self.pos += literal.len();
            Ok(())
        }
        else {
            Err(ReadError::Expected { what: "literal text", pos: self.pos })
        }
    }

    fn skip_spaces(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start_matches(' ').len();
    }

    fn number(&mut self, max_digits: Option<usize>, signed: bool) -> Result<i64, ReadError> {
        let start = self.pos;
        let negative = signed && self.rest().starts_with('-');
        if negative {
            self.pos += 1;
        }

        let rest = self.rest();
        let digits = rest.bytes()
                         .take(max_digits.unwrap_or(usize::MAX))
                         .take_while(u8::is_ascii_digit)
                         .count();

        let value: i64 = match rest[.. digits].parse() {
            Ok(v) if digits > 0 => v,
            _ => {
                self.pos = start;
                return Err(ReadError::Expected { what: "a number", pos: start });
            }
        };

        self.pos += digits;
        Ok(if negative { -value } else { value })
    }

    /// Reads the longest month name, long or short, at the cursor.
    fn month_name(&mut self) -> Result<i64, ReadError> {
        let rest = self.rest();
        let found = LONG_MONTH_NAMES.iter().zip(1 ..)
            .chain(SHORT_MONTH_NAMES.iter().zip(1 ..))
            .filter(|(name, _)| rest.starts_with(**name))
            .max_by_key(|(name, _)| name.len());

        match found {
            Some((name, number)) => {
                self.pos += name.len();
                Ok(number)
            },
            None => Err(ReadError::Expected { what: "a month name", pos: self.pos }),
        }
    }

    /// Skips a word, such as a weekday name, up to the next space or
    /// punctuation mark.
    fn word(&mut self) -> Result<(), ReadError> {
        let rest = self.rest();
        let len = rest.find(|c: char| c.is_whitespace() || "/-,،T".contains(c))
                      .unwrap_or_else(|| rest.len());

        if len == 0 {
            return Err(ReadError::Expected { what: "a word", pos: self.pos });
        }

        self.pos += len;
        Ok(())
    }
}


/// An error from reading a date or time out of text with a pattern.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ReadError {

    /// The text didn’t have what the pattern asked for at this position.
    Expected { what: &'static str, pos: Pos },

    /// The pattern was used up before the text was.
    TrailingText { pos: Pos },

    /// The pattern has no field for this part of a date.
    MissingField(&'static str),

    /// A date was asked for, but the pattern has time fields.
    TimeFieldOnDate,

    /// The fields were read, but don’t make a real date or time.
    Date(DateTimeError),
}

impl From<DateTimeError> for ReadError {
    fn from(error: DateTimeError) -> Self {
        ReadError::Date(error)
    }
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ReadError::Expected { what, pos }   => write!(f, "expected {} at position {}", what, pos),
            ReadError::TrailingText { pos }     => write!(f, "unexpected text at position {}", pos),
            ReadError::MissingField(field)      => write!(f, "pattern has no {} field", field),
            ReadError::TimeFieldOnDate          => write!(f, "pattern has time fields but a date was asked for"),
            ReadError::Date(ref error)          => write!(f, "text has an invalid date: {}", error),
        }
    }
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            ReadError::Date(ref error)  => Some(error),
            _                           => None,
        }
    }
}


struct FormatParser<'a> {
    iter:   CharIndices<'a>,
    fields: Vec<Field<'a>>,
    input:  &'a str,
    anchor: Option<Pos>,
    peekee: Option<Option<(Pos, char)>>,
}

impl<'a> FormatParser<'a> {
    fn new(input: &'a str) -> FormatParser<'a> {
        FormatParser {
            iter:   input.char_indices(),
            fields: Vec::new(),
            input,
            anchor: None,
            peekee: None,
        }
    }

    fn next(&mut self) -> Option<(Pos, char)> {
        match self.peekee.take() {
            Some(p) => p,
            None    => self.iter.next(),
        }
    }

    fn peek(&mut self) -> Option<(Pos, char)> {
        match self.peekee {
            Some(thing) => thing,
            None => {
                let thing = self.iter.next();
                self.peekee = Some(thing);
                thing
            }
        }
    }

    fn collect_up_to_anchor(&mut self, position: Option<Pos>) {
        if let Some(pos) = self.anchor.take() {
            let text = match position {
                Some(new_pos) => &self.input[pos..new_pos],
                None          => &self.input[pos..],
            };
            self.fields.push(Field::Literal(text));
        }
    }

    fn parse_format_string(&mut self) -> Result<(), FormatError> {
        loop {
            match self.next() {
                Some((new_pos, '{')) => {
                    self.collect_up_to_anchor(Some(new_pos));

                    let field = self.parse_a_thing(new_pos)?;
                    self.fields.push(field);
                },
                Some((new_pos, '}')) => {
                    if let Some((_, '}')) = self.next() {
                        self.collect_up_to_anchor(Some(new_pos));

                        let field = Field::Literal(&self.input[new_pos ..=new_pos]);
                        self.fields.push(field);
                    }
                    else {
                        return Err(FormatError::CloseCurlyBrace { close_pos: new_pos });
                    }
                },
                Some((pos, _)) => {
                    if self.anchor.is_none() {
                        self.anchor = Some(pos);
                    }
                }
                None => break,
            }
        }

        // Collect any literal characters after the last field.
        self.collect_up_to_anchor(None);
        Ok(())
    }

    // Literals are slices of the pattern, so escaped braces can't be merged
    // into the text around them. An escaped brace becomes its own one-char
    // Literal, sliced from the first brace of the pair.

    fn parse_number(&mut self, just_parsed_character: char) -> Width {
        let mut width = just_parsed_character.to_digit(10).map_or(0, |d| d as Width);

        while let Some((_, n)) = self.peek() {
            match n.to_digit(10) {
                Some(digit) => {
                    width = width.saturating_mul(10).saturating_add(digit as Width);
                    let _ = self.next();
                },
                None => break,
            }
        }

        width
    }

    fn parse_a_thing(&mut self, open_pos: Pos) -> Result<Field<'a>, FormatError> {
        let mut args = Arguments::empty();
        let mut bit = None;
        let close_pos;
        let mut first = true;
        let mut long = false;

        loop {
            match self.next() {
                Some((pos, '{')) if first => return Ok(Field::Literal(&self.input[pos ..=pos])),
                Some((_, '<')) => { args.update_alignment(Alignment::Left, open_pos)?; },
                Some((_, '^')) => { args.update_alignment(Alignment::Middle, open_pos)?; },
                Some((_, '>')) => { args.update_alignment(Alignment::Right, open_pos)?; },
                Some((_, '0')) => { args.pad_char = Some('0'); },
                Some((_, n)) if n.is_digit(10) => { args.update_width(self.parse_number(n), open_pos)?; },
                Some((_, '_')) => { long = true; },
                Some((_, ':')) => {
                    let bitlet = match self.next() {
                        Some((_, 'Y')) => Field::Year(NumArguments(args)),
                        Some((_, 'y')) => Field::YearOfCentury(NumArguments(args)),
                        Some((_, 'M')) => Field::MonthName(long, TextArguments(args)),
                        Some((_, 'N')) => Field::MonthNumber(NumArguments(args)),
                        Some((_, 'D')) => Field::Day(NumArguments(args)),
                        Some((_, 'E')) => Field::WeekdayName(long, TextArguments(args)),
                        Some((_, 'h')) => Field::Hour(NumArguments(args)),
                        Some((_, 'm')) => Field::Minute(NumArguments(args)),
                        Some((_, 's')) => Field::Second(NumArguments(args)),
                        Some((_, 'f')) => Field::Nanosecond(NumArguments(args)),
                        Some((pos, c)) => return Err(FormatError::InvalidChar { c, colon: true, pos }),
                        None => return Err(FormatError::OpenCurlyBrace { open_pos }),
                    };

                    bit = Some(bitlet);
                },
                Some((pos, '}')) => { close_pos = pos; break; },
                Some((pos, c)) => return Err(FormatError::InvalidChar { c, colon: false, pos }),
                None => return Err(FormatError::OpenCurlyBrace { open_pos }),
            };

            first = false;
        }

        match bit {
            Some(b) => Ok(b),
            None    => Err(FormatError::MissingField { open_pos, close_pos }),
        }
    }
}
