use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

static EPISODE_NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#(\d+)").unwrap());

/// A single `<item>` from a podcast RSS feed, fields kept raw as they
/// appeared in the XML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedItem {
    /// Episode title
    pub title: String,
    /// Raw `<pubDate>` value (RFC 2822)
    pub pub_date: Option<String>,
    /// URL of the first `<enclosure>`
    pub audio_url: Option<String>,
    /// Raw `<itunes:duration>` value, seconds or `H:M:S` / `M:S`
    pub itunes_duration: Option<String>,
}

impl FeedItem {
    /// Extract the episode number from a `#<digits>` marker in the title
    pub fn episode_number(&self) -> Option<i64> {
        EPISODE_NUMBER_PATTERN
            .captures(&self.title)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
    }

    /// Parse the publish date from the RFC 2822 `<pubDate>` value
    pub fn publish_date(&self) -> Option<NaiveDate> {
        let raw = self.pub_date.as_deref()?;
        chrono::DateTime::parse_from_rfc2822(raw.trim())
            .ok()
            .map(|dt| dt.date_naive())
    }

    /// Normalize the iTunes duration to whole minutes.
    ///
    /// Accepts plain seconds (`"3600"`), `H:M:S` (`"1:05:00"`) or `M:S`
    /// (`"45:30"`). Anything else yields None.
    pub fn duration_minutes(&self) -> Option<i64> {
        let raw = self.itunes_duration.as_deref()?.trim();

        if raw.contains(':') {
            let parts: Vec<&str> = raw.split(':').collect();
            match parts.as_slice() {
                [hours, minutes, _seconds] => {
                    let hours: i64 = hours.parse().ok()?;
                    let minutes: i64 = minutes.parse().ok()?;
                    Some(hours * 60 + minutes)
                }
                [minutes, _seconds] => minutes.parse().ok(),
                _ => None,
            }
        } else {
            raw.parse::<i64>().ok().map(|seconds| seconds / 60)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item_with_title(title: &str) -> FeedItem {
        FeedItem {
            title: title.to_string(),
            ..FeedItem::default()
        }
    }

    #[test]
    fn test_episode_number_extraction() {
        assert_eq!(
            item_with_title("Folge #42: Vogelkunde").episode_number(),
            Some(42)
        );
        assert_eq!(
            item_with_title("#7 - Frühjahrsputz").episode_number(),
            Some(7)
        );
        assert_eq!(item_with_title("Trailer").episode_number(), None);
    }

    #[test]
    fn test_publish_date() {
        let item = FeedItem {
            pub_date: Some("Mon, 10 Mar 2025 06:00:00 +0000".to_string()),
            ..FeedItem::default()
        };
        assert_eq!(
            item.publish_date(),
            Some(NaiveDate::from_ymd_opt(2025, 3, 10).unwrap())
        );

        let bad = FeedItem {
            pub_date: Some("not a date".to_string()),
            ..FeedItem::default()
        };
        assert_eq!(bad.publish_date(), None);
    }

    #[test]
    fn test_duration_minutes() {
        let cases = [
            ("1:05:00", Some(65)),
            ("45:30", Some(45)),
            ("3600", Some(60)),
            ("90", Some(1)),
            ("abc", None),
            ("1:2:3:4", None),
        ];
        for (raw, expected) in cases {
            let item = FeedItem {
                itunes_duration: Some(raw.to_string()),
                ..FeedItem::default()
            };
            assert_eq!(item.duration_minutes(), expected, "duration {raw:?}");
        }

        assert_eq!(FeedItem::default().duration_minutes(), None);
    }
}
