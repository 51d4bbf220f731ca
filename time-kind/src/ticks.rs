use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ConversionError;
use crate::kind::TimeValue;

pub const TICKS_PER_MILLISECOND: i64 = 10_000;
pub const TICKS_PER_SECOND: i64 = 10_000_000;
pub const MILLIS_PER_SECOND: i64 = 1_000;

const NANOS_PER_TICK: i64 = 100;

/// Number of 100-nanosecond ticks, on the scale where
/// 0001-01-01T00:00:00Z is tick zero.
///
/// This is the lossless representation every other conversion routes
/// through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UtcTicks(pub i64);

/// The number of seconds since the Unix epoch (00:00:00 UTC on 1 Jan 1970).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnixTimestamp(pub i64);

/// The number of milliseconds since the Unix epoch, as returned by
/// `Date.now()` in JavaScript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JsTimestamp(pub i64);

impl UtcTicks {
    /// Tick value of 1970-01-01T00:00:00Z.
    pub const UNIX_EPOCH: Self = Self(621_355_968_000_000_000);

    pub fn from_utc_datetime(dt: &DateTime<Utc>) -> Result<Self, ConversionError> {
        let secs = dt.timestamp();
        let sub_ticks = i64::from(dt.timestamp_subsec_nanos()) / NANOS_PER_TICK;

        secs.checked_mul(TICKS_PER_SECOND)
            .and_then(|ticks| ticks.checked_add(sub_ticks))
            .and_then(|ticks| ticks.checked_add(Self::UNIX_EPOCH.0))
            .map(Self)
            .ok_or(ConversionError::out_of_range(secs, "seconds"))
    }

    /// Ticks elapsed since the Unix epoch. Widened so that it cannot overflow.
    fn since_unix_epoch(self) -> i128 {
        i128::from(self.0) - i128::from(Self::UNIX_EPOCH.0)
    }

    /// The part of this value below one whole second, signed like the value.
    pub fn subsecond_ticks(self) -> i64 {
        (self.since_unix_epoch() % i128::from(TICKS_PER_SECOND)) as i64
    }

    pub fn to_utc_datetime(self) -> Result<DateTime<Utc>, ConversionError> {
        let since_epoch = self.since_unix_epoch();
        let secs = since_epoch.div_euclid(i128::from(TICKS_PER_SECOND)) as i64;
        let nanos = since_epoch.rem_euclid(i128::from(TICKS_PER_SECOND)) as i64 * NANOS_PER_TICK;

        DateTime::from_timestamp(secs, nanos as u32)
            .ok_or(ConversionError::out_of_range(self.0, "ticks"))
    }

    pub fn to_utc_time(self) -> Result<TimeValue, ConversionError> {
        self.to_utc_datetime().map(TimeValue::Utc)
    }

    /// Same instant as [`Self::to_utc_time`], carried with an explicit `+00:00` offset.
    pub fn to_utc_time_offset(self) -> Result<DateTime<FixedOffset>, ConversionError> {
        self.to_utc_datetime().map(|dt| dt.fixed_offset())
    }

    /// Whole seconds since the epoch. The sub-second part is truncated toward zero.
    pub fn to_unix_timestamp(self) -> UnixTimestamp {
        UnixTimestamp((self.since_unix_epoch() / i128::from(TICKS_PER_SECOND)) as i64)
    }

    /// Whole milliseconds since the epoch, truncated toward zero.
    pub fn to_js_timestamp(self) -> JsTimestamp {
        JsTimestamp((self.since_unix_epoch() / i128::from(TICKS_PER_MILLISECOND)) as i64)
    }
}

impl UnixTimestamp {
    pub fn to_utc_ticks(self) -> Result<UtcTicks, ConversionError> {
        self.0
            .checked_mul(TICKS_PER_SECOND)
            .and_then(|ticks| ticks.checked_add(UtcTicks::UNIX_EPOCH.0))
            .map(UtcTicks)
            .ok_or(ConversionError::out_of_range(self.0, "seconds"))
    }

    /// Fails for values outside the `i64` tick range, like [`Self::to_utc_ticks`].
    pub fn to_utc_datetime(self) -> Result<DateTime<Utc>, ConversionError> {
        self.to_utc_ticks()?.to_utc_datetime()
    }

    pub fn to_utc_time(self) -> Result<TimeValue, ConversionError> {
        self.to_utc_datetime().map(TimeValue::Utc)
    }

    pub fn to_js_timestamp(self) -> Result<JsTimestamp, ConversionError> {
        self.to_utc_time()?.to_js_timestamp()
    }
}

impl JsTimestamp {
    pub fn to_utc_ticks(self) -> Result<UtcTicks, ConversionError> {
        // Floor split keeps the millisecond part in 0..1000 for pre-epoch values.
        let secs = self.0.div_euclid(MILLIS_PER_SECOND);
        let millis = self.0.rem_euclid(MILLIS_PER_SECOND);

        secs.checked_mul(TICKS_PER_SECOND)
            .and_then(|ticks| ticks.checked_add(millis * TICKS_PER_MILLISECOND))
            .and_then(|ticks| ticks.checked_add(UtcTicks::UNIX_EPOCH.0))
            .map(UtcTicks)
            .ok_or(ConversionError::out_of_range(self.0, "milliseconds"))
    }

    pub fn to_utc_datetime(self) -> Result<DateTime<Utc>, ConversionError> {
        self.to_utc_ticks()?.to_utc_datetime()
    }

    pub fn to_utc_time(self) -> Result<TimeValue, ConversionError> {
        self.to_utc_datetime().map(TimeValue::Utc)
    }

    pub fn to_utc_time_offset(self) -> Result<DateTime<FixedOffset>, ConversionError> {
        self.to_utc_ticks()?.to_utc_time_offset()
    }

    /// Whole seconds since the epoch, truncated toward zero like [`UtcTicks::to_unix_timestamp`].
    pub fn to_unix_timestamp(self) -> Result<UnixTimestamp, ConversionError> {
        self.to_utc_ticks().map(UtcTicks::to_unix_timestamp)
    }
}
