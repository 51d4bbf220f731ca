use chrono::{DateTime, FixedOffset, MappedLocalTime, NaiveDateTime, TimeDelta, TimeZone, Utc};

use crate::config::TimeZoneConfig;
use crate::errors::{ConfigError, ConversionError};
use crate::kind::{LOCAL_OR_UNSPECIFIED, TimeValue, UTC_OR_UNSPECIFIED};
use crate::ticks::{JsTimestamp, UnixTimestamp, UtcTicks};
use crate::zone::{LocalZone, OffsetSource};

/// Conversions that need to know what "local" means.
///
/// Holds the local zone explicitly instead of reading process-wide state,
/// so one converter can be built at startup and shared by reference.
/// Conversions that never look at the local zone live on
/// [`UtcTicks`], [`UnixTimestamp`], [`JsTimestamp`] and [`TimeValue`].
#[derive(Debug, Clone, Default)]
pub struct TimeConverter<Z = LocalZone> {
    zone: Z,
}

impl TimeConverter<LocalZone> {
    /// Uses the host's configured timezone.
    pub fn system() -> Self {
        Self::new(LocalZone::System)
    }

    pub fn from_config(config: &TimeZoneConfig) -> Result<Self, ConfigError> {
        let zone = config.zone()?;
        tracing::info!(%zone, "resolved local timezone");
        Ok(Self::new(zone))
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_config(&TimeZoneConfig::from_env()?)
    }
}

impl<Z> TimeConverter<Z> {
    pub const fn new(zone: Z) -> Self {
        Self { zone }
    }

    pub const fn zone(&self) -> &Z {
        &self.zone
    }
}

impl<Z: OffsetSource> TimeConverter<Z> {
    /// Normalizes any kind to a local time.
    ///
    /// An unspecified value is read as local wall-clock time: it is first
    /// resolved to an instant under the local zone's rules, then rendered
    /// back, so a time inside a DST gap comes out shifted past the gap.
    pub fn as_local(&self, time: TimeValue) -> Result<TimeValue, ConversionError> {
        self.local_datetime(&time).map(TimeValue::Local)
    }

    /// Normalizes any kind to UTC. Unspecified values are read as local
    /// wall-clock time.
    pub fn as_utc(&self, time: TimeValue) -> Result<TimeValue, ConversionError> {
        self.utc_datetime(&time).map(TimeValue::Utc)
    }

    pub fn local_time_to_unix_timestamp(
        &self,
        local_time: TimeValue,
    ) -> Result<UnixTimestamp, ConversionError> {
        self.local_time_to_utc_ticks(local_time)
            .map(UtcTicks::to_unix_timestamp)
    }

    pub fn utc_time_to_unix_timestamp(
        &self,
        utc_time: TimeValue,
    ) -> Result<UnixTimestamp, ConversionError> {
        self.utc_time_to_utc_ticks(utc_time)
            .map(UtcTicks::to_unix_timestamp)
    }

    pub fn unix_timestamp_to_local_time(
        &self,
        unix: UnixTimestamp,
    ) -> Result<TimeValue, ConversionError> {
        let utc = unix.to_utc_datetime()?;
        Ok(TimeValue::Local(self.render_local(&utc)))
    }

    pub fn local_time_to_js_timestamp(
        &self,
        local_time: TimeValue,
    ) -> Result<JsTimestamp, ConversionError> {
        local_time.ensure_kind("local_time", LOCAL_OR_UNSPECIFIED)?;
        let local = self.as_local(local_time)?;
        self.as_utc(local)?.to_js_timestamp()
    }

    pub fn utc_time_to_js_timestamp(
        &self,
        utc_time: TimeValue,
    ) -> Result<JsTimestamp, ConversionError> {
        utc_time.ensure_kind("utc_time", UTC_OR_UNSPECIFIED)?;
        self.as_utc(utc_time)?.to_js_timestamp()
    }

    pub fn js_timestamp_to_local_time(&self, js: JsTimestamp) -> Result<TimeValue, ConversionError> {
        let utc = js.to_utc_datetime()?;
        Ok(TimeValue::Local(self.render_local(&utc)))
    }

    pub fn js_timestamp_to_local_time_offset(
        &self,
        js: JsTimestamp,
    ) -> Result<DateTime<FixedOffset>, ConversionError> {
        self.utc_ticks_to_local_time_offset(js.to_utc_ticks()?)
    }

    pub fn utc_ticks_to_local_time(&self, ticks: UtcTicks) -> Result<TimeValue, ConversionError> {
        self.utc_ticks_to_local_time_offset(ticks)
            .map(TimeValue::Local)
    }

    pub fn utc_ticks_to_local_time_offset(
        &self,
        ticks: UtcTicks,
    ) -> Result<DateTime<FixedOffset>, ConversionError> {
        let utc = ticks.to_utc_datetime()?;
        Ok(self.render_local(&utc))
    }

    pub fn local_time_to_utc_ticks(
        &self,
        local_time: TimeValue,
    ) -> Result<UtcTicks, ConversionError> {
        local_time.ensure_kind("local_time", LOCAL_OR_UNSPECIFIED)?;
        let local = self.local_datetime(&local_time)?;
        UtcTicks::from_utc_datetime(&local.with_timezone(&Utc))
    }

    pub fn utc_time_to_utc_ticks(&self, utc_time: TimeValue) -> Result<UtcTicks, ConversionError> {
        utc_time.ensure_kind("utc_time", UTC_OR_UNSPECIFIED)?;
        UtcTicks::from_utc_datetime(&self.utc_datetime(&utc_time)?)
    }

    fn local_datetime(&self, time: &TimeValue) -> Result<DateTime<FixedOffset>, ConversionError> {
        match time {
            TimeValue::Local(dt) => Ok(*dt),
            TimeValue::Utc(dt) => Ok(self.render_local(dt)),
            TimeValue::Unspecified(wall) => {
                let utc = self.resolve_wall_clock(wall)?;
                Ok(self.render_local(&utc))
            }
        }
    }

    fn utc_datetime(&self, time: &TimeValue) -> Result<DateTime<Utc>, ConversionError> {
        match time {
            TimeValue::Utc(dt) => Ok(*dt),
            TimeValue::Local(dt) => Ok(dt.with_timezone(&Utc)),
            TimeValue::Unspecified(wall) => self.resolve_wall_clock(wall),
        }
    }

    fn render_local(&self, utc: &DateTime<Utc>) -> DateTime<FixedOffset> {
        let offset = self.zone.offset_at_utc(&utc.naive_utc());
        utc.with_timezone(&offset)
    }

    /// Finds the instant a local wall-clock time refers to.
    ///
    /// In an overlap the later instant (standard time) wins. In a gap the
    /// offset from before the transition is applied.
    fn resolve_wall_clock(&self, wall: &NaiveDateTime) -> Result<DateTime<Utc>, ConversionError> {
        let out_of_range = || ConversionError::out_of_range(wall.and_utc().timestamp(), "seconds");

        let offset = match self.zone.offset_at_local(wall) {
            MappedLocalTime::Single(offset) => offset,
            MappedLocalTime::Ambiguous(first, second) => {
                tracing::debug!(%wall, zone = ?self.zone, "ambiguous local time, using standard time");
                // The smaller offset maps to the later instant.
                if first.local_minus_utc() <= second.local_minus_utc() {
                    first
                } else {
                    second
                }
            }
            MappedLocalTime::None => {
                // Reads the wall time as UTC; a day back is before the transition in any zone.
                let before = wall
                    .checked_sub_signed(TimeDelta::days(1))
                    .ok_or_else(out_of_range)?;
                let offset = self.zone.offset_at_utc(&before);
                tracing::debug!(
                    %wall,
                    zone = ?self.zone,
                    %offset,
                    "local time falls in a DST gap, shifting forward"
                );
                offset
            }
        };

        offset
            .from_local_datetime(wall)
            .single()
            .map(|dt| dt.with_timezone(&Utc))
            .ok_or_else(out_of_range)
    }
}
