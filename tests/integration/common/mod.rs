use chrono::{NaiveDate, NaiveDateTime};
use chrono_tz::Tz;
use rstest::fixture;
use time_kind::TimeConverter;

#[fixture]
pub fn paris() -> TimeConverter<Tz> {
    TimeConverter::new(chrono_tz::Europe::Paris)
}

#[fixture]
pub fn sydney() -> TimeConverter<Tz> {
    TimeConverter::new(chrono_tz::Australia::Sydney)
}

pub fn wall_clock(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, s)
        .unwrap()
}
