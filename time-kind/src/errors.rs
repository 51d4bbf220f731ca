use crate::kind::DateTimeKind;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    #[error("{parameter}.kind must be one of {accepted:?}, got {kind}")]
    UnsupportedKind {
        parameter: &'static str,
        kind: DateTimeKind,
        accepted: &'static [DateTimeKind],
    },
    #[error("{value} {unit} is outside the representable time range")]
    OutOfRange { value: i64, unit: &'static str },
}

impl ConversionError {
    pub(crate) const fn out_of_range(value: i64, unit: &'static str) -> Self {
        Self::OutOfRange { value, unit }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read timezone configuration from the environment: {0}")]
    Env(#[from] envy::Error),
    #[error("'{0}' is not a valid IANA timezone or UTC offset")]
    UnknownTimezone(String),
}
