use chrono_tz::Tz;
use pretty_assertions::assert_eq;
use rstest::rstest;
use time_kind::{
    JsTimestamp, TICKS_PER_MILLISECOND, TICKS_PER_SECOND, TimeConverter, UnixTimestamp, UtcTicks,
};

use crate::common::paris;

const EPOCH: i64 = UtcTicks::UNIX_EPOCH.0;

#[rstest]
#[case(UtcTicks(0))]
#[case(UtcTicks::UNIX_EPOCH)]
#[case(UtcTicks(EPOCH + 1))]
#[case(UtcTicks(EPOCH - 1))]
#[case(UtcTicks(638_000_000_001_234_567))]
#[case(UtcTicks(3_155_378_975_999_999_999))]
fn utc_ticks_survive_a_trip_through_utc_time(
    paris: TimeConverter<Tz>,
    #[case] ticks: UtcTicks,
) {
    let utc = ticks.to_utc_time().unwrap();
    assert_eq!(paris.utc_time_to_utc_ticks(utc).unwrap(), ticks);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(-1)]
#[case(1_700_000_000)]
#[case(-62_135_596_800)]
#[case(253_402_300_799)]
fn unix_timestamps_survive_a_trip_through_ticks(#[case] unix: i64) {
    let unix = UnixTimestamp(unix);
    assert_eq!(unix.to_utc_ticks().unwrap().to_unix_timestamp(), unix);
}

#[rstest]
#[case(EPOCH + 12_345_678)]
#[case(EPOCH - 12_345_678)]
#[case(638_000_000_009_999_999)]
fn unix_round_trip_drops_the_subsecond_part(#[case] raw: i64) {
    let ticks = UtcTicks(raw);
    let remainder = ticks.subsecond_ticks();

    let back = ticks.to_unix_timestamp().to_utc_ticks().unwrap();

    assert_ne!(remainder, 0);
    assert_ne!(back, ticks);
    assert_eq!(back, UtcTicks(raw - remainder));
}

#[rstest]
fn epoch_is_a_fixed_point() {
    assert_eq!(UnixTimestamp(0).to_utc_ticks().unwrap(), UtcTicks::UNIX_EPOCH);
    assert_eq!(UtcTicks::UNIX_EPOCH.to_js_timestamp(), JsTimestamp(0));
    assert_eq!(JsTimestamp(0).to_utc_ticks().unwrap(), UtcTicks::UNIX_EPOCH);
}

#[rstest]
fn twenty_years_after_the_epoch() {
    let offset = 20 * 365 * 86_400 * TICKS_PER_SECOND + 4_321 * TICKS_PER_MILLISECOND + 9;
    let ticks = UtcTicks(EPOCH + offset);

    assert_eq!(ticks.to_unix_timestamp(), UnixTimestamp(offset / TICKS_PER_SECOND));
    assert_eq!(ticks.to_js_timestamp(), JsTimestamp(offset / TICKS_PER_MILLISECOND));
    assert_eq!(ticks.to_unix_timestamp(), UnixTimestamp(630_720_004));
    assert_eq!(ticks.to_js_timestamp(), JsTimestamp(630_720_004_321));
}

#[rstest]
fn js_timestamp_is_seconds_plus_milliseconds() {
    let expected = UnixTimestamp(1).to_utc_ticks().unwrap().0 + 500 * TICKS_PER_MILLISECOND;
    assert_eq!(JsTimestamp(1_500).to_utc_ticks().unwrap(), UtcTicks(expected));
}

#[rstest]
#[case(0)]
#[case(1_500)]
#[case(-1_500)]
#[case(-1)]
#[case(1_704_067_200_999)]
fn js_shortcuts_agree_with_the_ticks_path(#[case] js: i64) {
    let js = JsTimestamp(js);
    let ticks = js.to_utc_ticks().unwrap();

    assert_eq!(js.to_unix_timestamp().unwrap(), ticks.to_unix_timestamp());
    assert_eq!(js.to_utc_time().unwrap(), ticks.to_utc_time().unwrap());
    assert_eq!(js.to_utc_time_offset().unwrap(), ticks.to_utc_time_offset().unwrap());
    assert_eq!(ticks.to_js_timestamp(), js);
}

#[rstest]
#[case(0)]
#[case(-86_401)]
#[case(1_700_000_000)]
fn unix_shortcuts_agree_with_the_ticks_path(paris: TimeConverter<Tz>, #[case] unix: i64) {
    let unix = UnixTimestamp(unix);
    let ticks = unix.to_utc_ticks().unwrap();

    assert_eq!(unix.to_js_timestamp().unwrap(), ticks.to_js_timestamp());
    assert_eq!(unix.to_utc_time().unwrap(), ticks.to_utc_time().unwrap());
    assert_eq!(
        paris.unix_timestamp_to_local_time(unix).unwrap(),
        paris.utc_ticks_to_local_time(ticks).unwrap()
    );
}

#[rstest]
#[case(UtcTicks(EPOCH + 7))]
#[case(UtcTicks(EPOCH - 123_456_789))]
#[case(UtcTicks(640_000_000_000_000_000))]
fn ticks_to_js_matches_rendering_as_utc_time(#[case] ticks: UtcTicks) {
    let through_time = ticks.to_utc_time().unwrap().to_js_timestamp().unwrap();
    assert_eq!(ticks.to_js_timestamp(), through_time);
}

#[rstest]
#[case(JsTimestamp(1_000_000_000_000_000))]
#[case(JsTimestamp(-1_000_000_000_000_000))]
#[case(JsTimestamp(253_402_300_799_999))]
fn local_renderings_of_a_js_timestamp_agree_at_the_range_edge(
    paris: TimeConverter<Tz>,
    #[case] js: JsTimestamp,
) {
    let as_value = paris.js_timestamp_to_local_time(js);
    let as_offset = paris.js_timestamp_to_local_time_offset(js);

    assert_eq!(as_value.is_ok(), as_offset.is_ok());
    assert_eq!(as_value.is_ok(), js.to_utc_ticks().is_ok());
    if let (Ok(value), Ok(offset)) = (as_value, as_offset) {
        assert_eq!(value.as_local_datetime(), Some(&offset));
    }
}

#[rstest]
fn unix_timestamps_past_the_tick_range_are_rejected(paris: TimeConverter<Tz>) {
    let unix = UnixTimestamp(1_000_000_000_000);

    assert!(unix.to_utc_ticks().is_err());
    assert!(unix.to_utc_time().is_err());
    assert!(paris.unix_timestamp_to_local_time(unix).is_err());
}
