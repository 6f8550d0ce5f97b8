//! Date helpers and serde adapters for the human-readable dates used in the seed data.
//!
//! The data files carry dates the way the portal displays them
//! (`October 2, 2025`, `10:00 AM`, `October 4, 2025 at 2:30 PM`); these
//! modules parse them into chrono types on load and write the same shape back.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

const LONG_DATE_PARSE: &str = "%B %d, %Y";
const LONG_DATE_FORMAT: &str = "%B %-d, %Y";
const CLOCK_TIME_PARSE: &str = "%I:%M %p";
const CLOCK_TIME_FORMAT: &str = "%-I:%M %p";
const STAMP_PARSE: &str = "%B %d, %Y at %I:%M %p";
const STAMP_FORMAT: &str = "%B %-d, %Y at %-I:%M %p";

pub fn parse_long_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), LONG_DATE_PARSE).ok()
}

/// `October 2, 2025`
pub fn long_date(date: &NaiveDate) -> String {
    date.format(LONG_DATE_FORMAT).to_string()
}

/// `Oct 2, 2025`
pub fn short_date(date: &NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// `10:00 AM`
pub fn clock_time(time: &NaiveTime) -> String {
    time.format(CLOCK_TIME_FORMAT).to_string()
}

/// `Oct 11, 2:30 PM`
pub fn message_time(stamp: &NaiveDateTime) -> String {
    stamp.format("%b %-d, %-I:%M %p").to_string()
}

/// Relative age of a message against `now`: `45m ago`, `3h ago`, `2d ago`,
/// falling back to `Oct 4` after a week.
pub fn relative_time(stamp: &NaiveDateTime, now: &NaiveDateTime) -> String {
    let minutes = (*now - *stamp).num_minutes();
    if minutes < 60 {
        format!("{}m ago", minutes.max(0))
    } else if minutes < 60 * 24 {
        format!("{}h ago", minutes / 60)
    } else if minutes < 60 * 24 * 7 {
        format!("{}d ago", minutes / (60 * 24))
    } else {
        stamp.format("%b %-d").to_string()
    }
}

pub mod long_date_format {
    use chrono::NaiveDate;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    use super::{LONG_DATE_FORMAT, LONG_DATE_PARSE};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format(LONG_DATE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(raw.trim(), LONG_DATE_PARSE)
            .map_err(|e| D::Error::custom(format!("invalid date {:?}: {}", raw, e)))
    }
}

pub mod opt_long_date_format {
    use chrono::NaiveDate;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    use super::{LONG_DATE_FORMAT, LONG_DATE_PARSE};

    pub fn serialize<S: Serializer>(
        date: &Option<NaiveDate>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match date {
            Some(d) => serializer.serialize_some(&d.format(LONG_DATE_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        raw.map(|s| {
            NaiveDate::parse_from_str(s.trim(), LONG_DATE_PARSE)
                .map_err(|e| D::Error::custom(format!("invalid date {:?}: {}", s, e)))
        })
        .transpose()
    }
}

pub mod clock_time_format {
    use chrono::NaiveTime;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    use super::{CLOCK_TIME_FORMAT, CLOCK_TIME_PARSE};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(CLOCK_TIME_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(raw.trim(), CLOCK_TIME_PARSE)
            .map_err(|e| D::Error::custom(format!("invalid time {:?}: {}", raw, e)))
    }
}

pub mod stamp_format {
    use chrono::NaiveDateTime;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    use super::{STAMP_FORMAT, STAMP_PARSE};

    pub fn serialize<S: Serializer>(
        stamp: &NaiveDateTime,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&stamp.format(STAMP_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(raw.trim(), STAMP_PARSE)
            .map_err(|e| D::Error::custom(format!("invalid timestamp {:?}: {}", raw, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Dated {
        #[serde(with = "long_date_format")]
        day: NaiveDate,
        #[serde(with = "clock_time_format")]
        at: NaiveTime,
        #[serde(with = "stamp_format")]
        stamp: NaiveDateTime,
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_long_date() {
        assert_eq!(parse_long_date("October 2, 2025"), Some(ymd(2025, 10, 2)));
        assert_eq!(parse_long_date("September 28, 2025"), Some(ymd(2025, 9, 28)));
        assert_eq!(parse_long_date("October 8 - October 30, 2025"), None);
        assert_eq!(parse_long_date(""), None);
    }

    #[test]
    fn test_display_formats_drop_padding() {
        assert_eq!(long_date(&ymd(2025, 10, 2)), "October 2, 2025");
        assert_eq!(short_date(&ymd(2025, 10, 2)), "Oct 2, 2025");
        let t = NaiveTime::from_hms_opt(9, 5, 0).unwrap();
        assert_eq!(clock_time(&t), "9:05 AM");
    }

    #[test]
    fn test_serde_formats_read_seed_shapes() {
        let json = r#"{"day":"October 16, 2025","at":"2:00 PM","stamp":"October 4, 2025 at 2:30 PM"}"#;
        let parsed: Dated = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.day, ymd(2025, 10, 16));
        assert_eq!(parsed.at, NaiveTime::from_hms_opt(14, 0, 0).unwrap());
        assert_eq!(parsed.stamp, ymd(2025, 10, 4).and_hms_opt(14, 30, 0).unwrap());
        assert_eq!(serde_json::to_string(&parsed).unwrap(), json);
    }

    #[test]
    fn test_serde_rejects_free_text_dates() {
        let json = r#"{"day":"sometime soon","at":"2:00 PM","stamp":"October 4, 2025 at 2:30 PM"}"#;
        assert!(serde_json::from_str::<Dated>(json).is_err());
    }

    #[test]
    fn test_relative_time() {
        let now = ymd(2025, 10, 11).and_hms_opt(15, 0, 0).unwrap();
        let stamp = |d, h, m| ymd(2025, 10, d).and_hms_opt(h, m, 0).unwrap();
        assert_eq!(relative_time(&stamp(11, 14, 30), &now), "30m ago");
        assert_eq!(relative_time(&stamp(11, 10, 0), &now), "5h ago");
        assert_eq!(relative_time(&stamp(8, 15, 0), &now), "3d ago");
        assert_eq!(relative_time(&stamp(1, 9, 0), &now), "Oct 1");
    }
}
