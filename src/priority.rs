//! Notification priority levels.

use serde::{Deserialize, Serialize};

/// Delivery urgency of a notification.
///
/// The five levels are sent on the wire as the numeric string tokens
/// `"1"` (min) through `"5"` (max).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Min,
    Low,
    #[default]
    Default,
    High,
    Max,
}

impl Priority {
    /// Protocol token carried in the `Priority` header.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Min => "1",
            Priority::Low => "2",
            Priority::Default => "3",
            Priority::High => "4",
            Priority::Max => "5",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_tokens_are_stable() {
        assert_eq!(Priority::Min.as_str(), "1");
        assert_eq!(Priority::Low.as_str(), "2");
        assert_eq!(Priority::Default.as_str(), "3");
        assert_eq!(Priority::High.as_str(), "4");
        assert_eq!(Priority::Max.as_str(), "5");
    }

    #[test]
    fn test_priority_default_is_default_level() {
        assert_eq!(Priority::default(), Priority::Default);
    }

    #[test]
    fn test_priority_display_matches_token() {
        assert_eq!(format!("{}", Priority::High), "4");
    }

    #[test]
    fn test_priority_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Priority::Max).unwrap(), "\"max\"");
        let parsed: Priority = serde_json::from_str("\"low\"").unwrap();
        assert_eq!(parsed, Priority::Low);
    }
}
