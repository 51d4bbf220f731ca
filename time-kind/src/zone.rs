use std::fmt;
use std::str::FromStr;

use chrono::{FixedOffset, Local, MappedLocalTime, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;

use crate::errors::ConfigError;

/// Answers "which UTC offset applies here" for the zone a converter treats as local.
pub trait OffsetSource: fmt::Debug + Send + Sync {
    /// Offset in effect at the given UTC instant.
    fn offset_at_utc(&self, utc: &NaiveDateTime) -> FixedOffset;

    /// Offsets that map the given wall-clock time to an instant. Empty in a
    /// DST gap, ambiguous in a DST overlap.
    fn offset_at_local(&self, local: &NaiveDateTime) -> MappedLocalTime<FixedOffset>;
}

impl<Z> OffsetSource for Z
where
    Z: TimeZone + fmt::Debug + Send + Sync,
{
    fn offset_at_utc(&self, utc: &NaiveDateTime) -> FixedOffset {
        self.offset_from_utc_datetime(utc).fix()
    }

    fn offset_at_local(&self, local: &NaiveDateTime) -> MappedLocalTime<FixedOffset> {
        self.offset_from_local_datetime(local).map(|offset| offset.fix())
    }
}

/// The zone a converter resolves local and unspecified times against.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LocalZone {
    /// Whatever the host is configured with (`TZ`, `/etc/localtime`, ...).
    #[default]
    System,
    Fixed(FixedOffset),
    Named(Tz),
}

impl LocalZone {
    pub fn utc() -> Self {
        Self::Fixed(Utc.fix())
    }
}

impl OffsetSource for LocalZone {
    fn offset_at_utc(&self, utc: &NaiveDateTime) -> FixedOffset {
        match self {
            Self::System => Local.offset_at_utc(utc),
            Self::Fixed(offset) => *offset,
            Self::Named(tz) => tz.offset_at_utc(utc),
        }
    }

    fn offset_at_local(&self, local: &NaiveDateTime) -> MappedLocalTime<FixedOffset> {
        match self {
            Self::System => Local.offset_at_local(local),
            Self::Fixed(offset) => MappedLocalTime::Single(*offset),
            Self::Named(tz) => tz.offset_at_local(local),
        }
    }
}

impl FromStr for LocalZone {
    type Err = ConfigError;

    /// Accepts `system`, `UTC`/`Z`, a `±HH:MM` offset or an IANA zone name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("system") {
            return Ok(Self::System);
        }
        if s.eq_ignore_ascii_case("utc") || s.eq_ignore_ascii_case("z") {
            return Ok(Self::utc());
        }
        if s.starts_with(['+', '-']) {
            return s
                .parse::<FixedOffset>()
                .map(Self::Fixed)
                .map_err(|_| ConfigError::UnknownTimezone(s.to_string()));
        }
        s.parse::<Tz>()
            .map(Self::Named)
            .map_err(|_| ConfigError::UnknownTimezone(s.to_string()))
    }
}

impl fmt::Display for LocalZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::System => f.write_str("system"),
            Self::Fixed(offset) => write!(f, "{offset}"),
            Self::Named(tz) => f.write_str(tz.name()),
        }
    }
}
