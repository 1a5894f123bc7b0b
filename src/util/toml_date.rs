use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, ParseError, Utc};
use serde::Deserialize;

// Code adapted from https://www.seachess.net/notes/toml-dates/
//
// TOML has its own datetime syntax, so front matter dates arrive as
// toml::value::Datetime. Offset datetimes are converted to UTC; local
// datetimes and bare dates are taken as UTC.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct TomlDateTime(pub DateTime<Utc>);

impl<'de> Deserialize<'de> for TomlDateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
    {
        use serde::de::Error;
        let value = toml::value::Datetime::deserialize(deserializer)?;
        let date_time = TomlDateTime::from_str(&value.to_string()).map_err(Error::custom)?;
        Ok(date_time)
    }
}

impl FromStr for TomlDateTime {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(offset) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self(offset.with_timezone(&Utc)));
        }
        if let Ok(naive) = NaiveDateTime::from_str(s) {
            return Ok(Self(naive.and_utc()));
        }
        let date = NaiveDate::from_str(s)?;
        Ok(Self(date.and_time(NaiveTime::MIN).and_utc()))
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Deserialize)]
    pub struct Header {
        pub published_at: TomlDateTime,
    }

    fn utc(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_offset_date_time() {
        let toml_str = "published_at = 2024-04-22T10:30:00-03:00";
        let header: Header = toml::from_str::<Header>(toml_str).unwrap();
        assert_eq!(header.published_at, TomlDateTime(utc("2024-04-22T13:30:00Z")));
    }

    #[test]
    fn test_local_date_time() {
        let toml_str = "published_at = 2024-04-22T10:30:00";
        let header: Header = toml::from_str::<Header>(toml_str).unwrap();
        assert_eq!(header.published_at, TomlDateTime(utc("2024-04-22T10:30:00Z")));
    }

    #[test]
    fn test_bare_date() {
        let toml_str = "published_at = 2024-04-22";
        let header: Header = toml::from_str::<Header>(toml_str).unwrap();
        assert_eq!(header.published_at, TomlDateTime(utc("2024-04-22T00:00:00Z")));
    }

    #[test]
    fn test_time_only_is_rejected() {
        let toml_str = "published_at = 10:30:00";
        assert!(toml::from_str::<Header>(toml_str).is_err());
    }
}
