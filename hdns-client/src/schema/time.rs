//! Timestamp wire type.
//!
//! Newer endpoints emit RFC 3339 timestamps, older ones still use the
//! human-readable layout `2021-01-02 03:04:05.999 +0000 UTC`. An empty string
//! means the timestamp was never set (e.g. a zone that is not verified yet).
//!
//! Serialization always emits RFC 3339, or `""` when unset.

use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// `chrono` layout of the legacy timestamp, minus the trailing zone abbreviation.
///
/// `%.f` also accepts a missing fractional part.
const LEGACY_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f %z";

/// A timestamp as it appears on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Time(Option<DateTime<Utc>>);

/// Returned when a non-empty timestamp matches neither accepted layout.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid timestamp {0:?}: expected RFC 3339 or \"YYYY-MM-DD HH:MM:SS.sss +ZZZZ ZONE\"")]
pub struct TimeParseError(String);

impl Time {
    /// The zero value: no timestamp.
    pub const UNSET: Self = Self(None);

    pub fn new(instant: DateTime<Utc>) -> Self {
        Self(Some(instant))
    }

    pub fn get(self) -> Option<DateTime<Utc>> {
        self.0
    }

    pub fn is_unset(self) -> bool {
        self.0.is_none()
    }

    /// Parses a wire timestamp.
    ///
    /// RFC 3339 is tried first; the legacy layout is only attempted when that
    /// fails. `""` yields [`Time::UNSET`].
    pub fn parse(s: &str) -> Result<Self, TimeParseError> {
        if s.is_empty() {
            return Ok(Self::UNSET);
        }
        DateTime::parse_from_rfc3339(s)
            .ok()
            .or_else(|| parse_legacy(s))
            .map(|dt| Self::new(dt.with_timezone(&Utc)))
            .ok_or_else(|| TimeParseError(s.to_string()))
    }
}

fn parse_legacy(s: &str) -> Option<DateTime<FixedOffset>> {
    // The abbreviation ("UTC", "CEST", ...) is redundant with the numeric offset.
    let (rest, abbreviation) = s.rsplit_once(' ')?;
    if abbreviation.is_empty() {
        return None;
    }
    DateTime::parse_from_str(rest, LEGACY_FORMAT).ok()
}

impl From<DateTime<Utc>> for Time {
    fn from(instant: DateTime<Utc>) -> Self {
        Self::new(instant)
    }
}

impl From<Option<DateTime<Utc>>> for Time {
    fn from(instant: Option<DateTime<Utc>>) -> Self {
        Self(instant)
    }
}

impl From<Time> for Option<DateTime<Utc>> {
    fn from(time: Time) -> Self {
        time.0
    }
}

impl Serialize for Time {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.0 {
            Some(dt) => serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            None => serializer.serialize_str(""),
        }
    }
}

impl<'de> Deserialize<'de> for Time {
    /// Accepts a string in either layout, `""`, or `null`.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        match Option::<String>::deserialize(deserializer)? {
            Some(s) => Self::parse(&s).map_err(Error::custom),
            None => Ok(Self::UNSET),
        }
    }
}
