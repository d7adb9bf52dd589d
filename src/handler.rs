//! A `log::Log` implementation that forwards records as notifications.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use log::{Level, Metadata, Record};

use crate::client::{DryRun, NtfyClient, DEFAULT_SERVER};
use crate::error::{NtfyError, Result};
use crate::levels::{default_priorities, default_tags, ALL_LEVELS};
use crate::notification::Notification;
use crate::priority::Priority;

type ErrorCallback = Box<dyn Fn(&NtfyError) + Send + Sync>;

/// Forwards log records to a topic.
///
/// The record target becomes the notification title and the rendered
/// message becomes the payload, unless the record's level is mapped to
/// an attachment file, in which case the file is pushed and the record
/// text is dropped. Push failures never reach the logging statement.
///
/// ```ignore
/// let handler = NtfyHandler::builder("my_app_alerts")
///     .debounce(true)
///     .build()?;
/// log::set_boxed_logger(Box::new(handler))?;
/// log::set_max_level(log::LevelFilter::Info);
/// ```
pub struct NtfyHandler {
    client: NtfyClient,
    topic: String,
    priorities: HashMap<Level, Priority>,
    tags: HashMap<Level, Vec<String>>,
    emails: HashMap<Level, String>,
    attachments: HashMap<Level, PathBuf>,
    /// target -> last message text; `None` when debouncing is disabled,
    /// so that no history is kept at all in that mode.
    last_messages: Option<Mutex<HashMap<String, String>>>,
    error_callback: Option<ErrorCallback>,
}

impl std::fmt::Debug for NtfyHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NtfyHandler")
            .field("client", &self.client)
            .field("topic", &self.topic)
            .field("priorities", &self.priorities)
            .field("tags", &self.tags)
            .field("emails", &self.emails)
            .field("attachments", &self.attachments)
            .field("last_messages", &self.last_messages)
            .field(
                "error_callback",
                &self.error_callback.as_ref().map(|_| "<callback>"),
            )
            .finish()
    }
}

impl NtfyHandler {
    pub fn builder(topic: impl Into<String>) -> NtfyHandlerBuilder {
        NtfyHandlerBuilder {
            topic: topic.into(),
            server: DEFAULT_SERVER.to_string(),
            dry_run: DryRun::Off,
            debounce: false,
            priorities: None,
            tags: default_tags(),
            emails: HashMap::new(),
            attachments: HashMap::new(),
            error_callback: None,
        }
    }

    /// Pushes one record.
    ///
    /// Failures are routed to the error callback (when one is set) and
    /// then to the stderr fallback; they never propagate to the caller.
    pub fn emit(&self, record: &Record) {
        let source = record.target();
        let text = record.args().to_string();

        if !self.should_push(source, &text) {
            return;
        }

        if let Err(e) = self.push_record(source, record.level(), text) {
            if let Some(callback) = &self.error_callback {
                callback(&e);
            }
            // a logger cannot report through the framework it implements;
            // stderr is the fallback path
            eprintln!("ntfy-push: failed to deliver record from {source}: {e}");
        }
    }

    fn push_record(&self, source: &str, level: Level, text: String) -> Result<()> {
        let mut notification = Notification::new().with_title(source);

        // an attachment-mapped level pushes the file, not the record text
        notification = match self.attachments.get(&level) {
            Some(path) => notification.with_file(path.clone()),
            None => notification.with_message(text),
        };

        if let Some(priority) = self.priorities.get(&level) {
            notification = notification.with_priority(*priority);
        }
        if let Some(tags) = self.tags.get(&level) {
            notification = notification.with_tags(tags.iter().cloned());
        }
        if let Some(email) = self.emails.get(&level) {
            notification = notification.with_email(email.clone());
        }

        self.client.push(&self.topic, &notification)
    }

    /// Consecutive identical text from one source is pushed once; the
    /// first occurrence for a source is always pushed and recorded.
    fn should_push(&self, source: &str, text: &str) -> bool {
        let Some(history) = &self.last_messages else {
            return true;
        };
        let mut history = match history.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        match history.entry(source.to_string()) {
            Entry::Occupied(mut seen) => {
                if seen.get() == text {
                    false
                } else {
                    seen.insert(text.to_string());
                    true
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(text.to_string());
                true
            }
        }
    }
}

impl log::Log for NtfyHandler {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.emit(record);
    }

    fn flush(&self) {}
}

/// Configures and validates a [`NtfyHandler`].
pub struct NtfyHandlerBuilder {
    topic: String,
    server: String,
    dry_run: DryRun,
    debounce: bool,
    priorities: Option<HashMap<Level, Priority>>,
    tags: HashMap<Level, Vec<String>>,
    emails: HashMap<Level, String>,
    attachments: HashMap<Level, PathBuf>,
    error_callback: Option<ErrorCallback>,
}

impl NtfyHandlerBuilder {
    /// Target server, `https://ntfy.sh` by default.
    pub fn server(mut self, server: impl Into<String>) -> Self {
        self.server = server.into();
        self
    }

    pub fn dry_run(mut self, dry_run: DryRun) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Suppress a record whose text is identical to the immediately
    /// preceding one from the same source. Off by default; when off, no
    /// history is kept and every record is pushed.
    pub fn debounce(mut self, debounce: bool) -> Self {
        self.debounce = debounce;
        self
    }

    /// Replaces the level→priority table. The table must cover every
    /// level; [`build`](Self::build) fails fast otherwise.
    pub fn priorities(mut self, priorities: HashMap<Level, Priority>) -> Self {
        self.priorities = Some(priorities);
        self
    }

    /// Replaces the level→tags table. Levels absent from the table
    /// contribute no tags.
    pub fn tags(mut self, tags: HashMap<Level, Vec<String>>) -> Self {
        self.tags = tags;
        self
    }

    /// Levels present in the table also request e-mail fan-out.
    pub fn emails(mut self, emails: HashMap<Level, String>) -> Self {
        self.emails = emails;
        self
    }

    /// Levels present in the table push the mapped file as payload
    /// instead of the record text.
    pub fn attachments(mut self, attachments: HashMap<Level, PathBuf>) -> Self {
        self.attachments = attachments;
        self
    }

    /// Called with every push error before the stderr fallback runs.
    pub fn error_callback(
        mut self,
        callback: impl Fn(&NtfyError) + Send + Sync + 'static,
    ) -> Self {
        self.error_callback = Some(Box::new(callback));
        self
    }

    pub fn build(self) -> Result<NtfyHandler> {
        if self.topic.is_empty() {
            return Err(NtfyError::config("topic must not be empty"));
        }
        let priorities = match self.priorities {
            None => default_priorities(),
            Some(table) => {
                for level in ALL_LEVELS {
                    if !table.contains_key(&level) {
                        return Err(NtfyError::config(format!(
                            "priority table misses a mapping for level {level}"
                        )));
                    }
                }
                table
            }
        };
        Ok(NtfyHandler {
            client: NtfyClient::new()
                .with_server(self.server)
                .with_dry_run(self.dry_run),
            topic: self.topic,
            priorities,
            tags: self.tags,
            emails: self.emails,
            attachments: self.attachments,
            last_messages: self.debounce.then(|| Mutex::new(HashMap::new())),
            error_callback: self.error_callback,
        })
    }
}
