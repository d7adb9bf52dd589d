//! Built-in level tables for the log handler.
//!
//! Both tables are read-only reference defaults; [`NtfyHandler`]
//! construction copies or replaces them, it never mutates them.
//!
//! [`NtfyHandler`]: crate::NtfyHandler

use std::collections::HashMap;

use log::Level;

use crate::priority::Priority;

pub(crate) const ALL_LEVELS: [Level; 5] = [
    Level::Error,
    Level::Warn,
    Level::Info,
    Level::Debug,
    Level::Trace,
];

/// Default priority pushed for each log level.
pub fn default_priorities() -> HashMap<Level, Priority> {
    HashMap::from([
        (Level::Error, Priority::High),
        (Level::Warn, Priority::High),
        (Level::Info, Priority::Default),
        (Level::Debug, Priority::Low),
        (Level::Trace, Priority::Min),
    ])
}

/// Default tags rendered alongside each level's notifications.
pub fn default_tags() -> HashMap<Level, Vec<String>> {
    HashMap::from([
        (Level::Error, vec!["broken_heart".to_string()]),
        (Level::Warn, vec!["warning".to_string()]),
        (Level::Info, vec!["artificial_satellite".to_string()]),
        (Level::Debug, vec!["speech_balloon".to_string()]),
        (Level::Trace, Vec::new()),
    ])
}
