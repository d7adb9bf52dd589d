//! The full parameter set of one push.

use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::action::Action;
use crate::priority::Priority;

/// Everything one push can carry.
///
/// Build with the `with_*` methods and hand the result to
/// [`NtfyClient::push`](crate::NtfyClient::push). The payload is either
/// a text message or a file attachment, never both; the exactly-one-of
/// rule is checked when the notification is pushed.
///
/// ```ignore
/// let notification = Notification::message("backup finished")
///     .with_title("backup")
///     .with_priority(Priority::High)
///     .with_tag("floppy_disk");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Notification {
    pub(crate) title: Option<String>,
    pub(crate) message: Option<String>,
    pub(crate) filepath: Option<PathBuf>,
    pub(crate) priority: Priority,
    pub(crate) tags: Vec<String>,
    pub(crate) click: Option<String>,
    pub(crate) email: Option<String>,
    pub(crate) attach: Option<String>,
    pub(crate) icon: Option<String>,
    pub(crate) actions: Vec<Action>,
    pub(crate) at: Option<String>,
}

impl Notification {
    /// Empty notification; set a payload before pushing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Notification carrying a text message.
    pub fn message(text: impl Into<String>) -> Self {
        Self::new().with_message(text)
    }

    /// Notification carrying a file attachment.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::new().with_file(path)
    }

    /// Text payload. Mutually exclusive with a file payload.
    pub fn with_message(mut self, text: impl Into<String>) -> Self {
        self.message = Some(text.into());
        self
    }

    /// File attachment payload. Mutually exclusive with a text payload.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.filepath = Some(path.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Appends one tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Appends several tags.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// URL opened when the notification itself is tapped.
    pub fn with_click(mut self, url: impl Into<String>) -> Self {
        self.click = Some(url.into());
        self
    }

    /// Address the notification is also mailed to.
    pub fn with_email(mut self, address: impl Into<String>) -> Self {
        self.email = Some(address.into());
        self
    }

    /// Externally hosted attachment. The URL is validated at push time
    /// but carried by no header; the wire surface has no attach header.
    pub fn with_attach(mut self, url: impl Into<String>) -> Self {
        self.attach = Some(url.into());
        self
    }

    /// URL of an icon shown alongside the notification.
    pub fn with_icon(mut self, url: impl Into<String>) -> Self {
        self.icon = Some(url.into());
        self
    }

    /// Appends one action button.
    pub fn with_action(mut self, action: impl Into<Action>) -> Self {
        self.actions.push(action.into());
        self
    }

    /// Scheduled-delivery token, e.g. `"1m"` or a unix timestamp.
    pub fn with_at(mut self, at: impl Into<String>) -> Self {
        self.at = Some(at.into());
        self
    }

    /// Scheduled delivery at an absolute time, rendered as the unix
    /// timestamp token.
    pub fn deliver_at(mut self, when: DateTime<Utc>) -> Self {
        self.at = Some(when.timestamp().to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_message_constructor_sets_only_message() {
        let notification = Notification::message("hello");
        assert_eq!(notification.message.as_deref(), Some("hello"));
        assert!(notification.filepath.is_none());
    }

    #[test]
    fn test_builder_accumulates_tags() {
        let notification = Notification::message("hi")
            .with_tag("warning")
            .with_tags(["fire", "cat"]);
        assert_eq!(notification.tags, vec!["warning", "fire", "cat"]);
    }

    #[test]
    fn test_deliver_at_renders_unix_timestamp() {
        let when = Utc.with_ymd_and_hms(2026, 8, 7, 12, 0, 0).unwrap();
        let notification = Notification::message("later").deliver_at(when);
        assert_eq!(notification.at.as_deref(), Some("1786104000"));
    }

    #[test]
    fn test_priority_defaults_to_default() {
        assert_eq!(Notification::new().priority, Priority::Default);
    }
}
