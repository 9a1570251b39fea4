use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Priority of a backlog topic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopicPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl TopicPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            TopicPriority::Low => "low",
            TopicPriority::Medium => "medium",
            TopicPriority::High => "high",
        }
    }
}

impl FromStr for TopicPriority {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "low" => TopicPriority::Low,
            "high" => TopicPriority::High,
            _ => TopicPriority::Medium,
        })
    }
}

/// Lifecycle status of a backlog topic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopicStatus {
    #[default]
    Backlog,
    Planned,
    Discussed,
    Skipped,
}

impl TopicStatus {
    pub const ALL: [TopicStatus; 4] = [
        TopicStatus::Backlog,
        TopicStatus::Planned,
        TopicStatus::Discussed,
        TopicStatus::Skipped,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TopicStatus::Backlog => "backlog",
            TopicStatus::Planned => "planned",
            TopicStatus::Discussed => "discussed",
            TopicStatus::Skipped => "skipped",
        }
    }
}

impl FromStr for TopicStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "planned" => TopicStatus::Planned,
            "discussed" => TopicStatus::Discussed,
            "skipped" => TopicStatus::Skipped,
            _ => TopicStatus::Backlog,
        })
    }
}

/// A backlog topic for potential episode discussion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub priority: TopicPriority,
    pub status: TopicStatus,
    pub category: Option<String>,
    /// ISO-8601 timestamp, stamped by the server on create
    pub created_date: String,
}

/// Payload for creating a topic or fully replacing one (PUT semantics:
/// all five mutable fields are overwritten)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicPayload {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: TopicPriority,
    #[serde(default)]
    pub status: TopicStatus,
    #[serde(default)]
    pub category: Option<String>,
}

/// Per-status topic counts across the fixed status set
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TopicStats {
    pub backlog: i64,
    pub planned: i64,
    pub discussed: i64,
    pub skipped: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in TopicStatus::ALL {
            assert_eq!(status.as_str().parse::<TopicStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_unknown_strings_fall_back_to_default() {
        assert_eq!(
            "archiviert".parse::<TopicStatus>().unwrap(),
            TopicStatus::Backlog
        );
        assert_eq!(
            "urgent".parse::<TopicPriority>().unwrap(),
            TopicPriority::Medium
        );
    }

    #[test]
    fn test_serde_rejects_out_of_enum_values() {
        assert!(serde_json::from_str::<TopicStatus>("\"archiviert\"").is_err());
        assert!(serde_json::from_str::<TopicPriority>("\"urgent\"").is_err());
    }

    #[test]
    fn test_payload_defaults() {
        let payload: TopicPayload = serde_json::from_str(r#"{"title": "Zugvögel"}"#).unwrap();
        assert_eq!(payload.status, TopicStatus::Backlog);
        assert_eq!(payload.priority, TopicPriority::Medium);
        assert!(payload.description.is_none());
    }
}
