//! Conversions between local time, UTC time, UTC ticks, Unix timestamps
//! and JavaScript millisecond timestamps.
//!
//! Every time value carries its [`DateTimeKind`]. Entry points check the
//! kind they are handed and fail with [`ConversionError::UnsupportedKind`]
//! instead of guessing. Anything that depends on the local zone goes
//! through a [`TimeConverter`].
pub mod config;
pub mod converter;
pub mod errors;
pub mod kind;
pub mod telemetry;
pub mod ticks;
pub mod zone;

pub use config::TimeZoneConfig;
pub use converter::TimeConverter;
pub use errors::{ConfigError, ConversionError};
pub use kind::{DateTimeKind, TimeValue};
pub use ticks::{
    JsTimestamp, MILLIS_PER_SECOND, TICKS_PER_MILLISECOND, TICKS_PER_SECOND, UnixTimestamp,
    UtcTicks,
};
pub use zone::{LocalZone, OffsetSource};
