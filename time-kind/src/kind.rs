use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::errors::ConversionError;
use crate::ticks::{JsTimestamp, UtcTicks};

/// Which clock a [`TimeValue`] is expressed in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DateTimeKind {
    Local,
    Utc,
    Unspecified,
}

pub(crate) const LOCAL_OR_UNSPECIFIED: &[DateTimeKind] =
    &[DateTimeKind::Local, DateTimeKind::Unspecified];
pub(crate) const UTC_OR_UNSPECIFIED: &[DateTimeKind] =
    &[DateTimeKind::Utc, DateTimeKind::Unspecified];
pub(crate) const UTC_ONLY: &[DateTimeKind] = &[DateTimeKind::Utc];

/// A point in time tagged with the clock it was read from.
///
/// `Unspecified` carries bare wall-clock fields. It has no offset and is
/// resolved against the converter's local zone before any arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeValue {
    Local(DateTime<FixedOffset>),
    Utc(DateTime<Utc>),
    Unspecified(NaiveDateTime),
}

impl TimeValue {
    pub const fn kind(&self) -> DateTimeKind {
        match self {
            Self::Local(_) => DateTimeKind::Local,
            Self::Utc(_) => DateTimeKind::Utc,
            Self::Unspecified(_) => DateTimeKind::Unspecified,
        }
    }

    /// The wall-clock fields, without any offset.
    pub fn wall_clock(&self) -> NaiveDateTime {
        match self {
            Self::Local(dt) => dt.naive_local(),
            Self::Utc(dt) => dt.naive_utc(),
            Self::Unspecified(naive) => *naive,
        }
    }

    pub const fn as_utc_datetime(&self) -> Option<&DateTime<Utc>> {
        match self {
            Self::Utc(dt) => Some(dt),
            _ => None,
        }
    }

    pub const fn as_local_datetime(&self) -> Option<&DateTime<FixedOffset>> {
        match self {
            Self::Local(dt) => Some(dt),
            _ => None,
        }
    }

    /// Milliseconds since the Unix epoch. Only UTC values are accepted.
    pub fn to_js_timestamp(&self) -> Result<JsTimestamp, ConversionError> {
        let Self::Utc(dt) = self else {
            return Err(self.unsupported("time", UTC_ONLY));
        };
        Ok(UtcTicks::from_utc_datetime(dt)?.to_js_timestamp())
    }

    pub(crate) fn ensure_kind(
        &self,
        parameter: &'static str,
        accepted: &'static [DateTimeKind],
    ) -> Result<(), ConversionError> {
        if accepted.contains(&self.kind()) {
            Ok(())
        } else {
            Err(self.unsupported(parameter, accepted))
        }
    }

    const fn unsupported(
        &self,
        parameter: &'static str,
        accepted: &'static [DateTimeKind],
    ) -> ConversionError {
        ConversionError::UnsupportedKind {
            parameter,
            kind: self.kind(),
            accepted,
        }
    }
}

impl From<DateTime<Utc>> for TimeValue {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::Utc(dt)
    }
}

impl From<NaiveDateTime> for TimeValue {
    fn from(naive: NaiveDateTime) -> Self {
        Self::Unspecified(naive)
    }
}
