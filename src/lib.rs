//! ntfy-push - push notifications to an ntfy-compatible topic, and
//! forward log records as notifications.
//!
//! One notification is one blocking HTTP PUT: the optional parameters
//! are validated, serialized into headers, and sent with a text or file
//! body. There is no retry, no queue, and no background worker.
//!
//! # Pushing
//! ```ignore
//! use ntfy_push::{Notification, NtfyClient, Priority, ViewAction};
//!
//! let client = NtfyClient::new();
//! let notification = Notification::message("deploy finished")
//!     .with_title("ci")
//!     .with_priority(Priority::High)
//!     .with_tag("rocket")
//!     .with_action(ViewAction::new("open dashboard", "https://ci.example.com")?);
//! client.push("deploys", &notification)?;
//! ```
//!
//! # Forwarding log records
//! ```ignore
//! use ntfy_push::NtfyHandler;
//!
//! let handler = NtfyHandler::builder("my_app_alerts").debounce(true).build()?;
//! log::set_boxed_logger(Box::new(handler))?;
//! log::set_max_level(log::LevelFilter::Info);
//! ```

pub mod action;
pub mod client;
pub mod error;
pub mod handler;
pub mod levels;
pub mod notification;
pub mod priority;

mod headers;
mod payload;
mod validate;

pub use action::{Action, HttpAction, HttpMethod, ViewAction};
pub use client::{push, DryRun, NtfyClient, DEFAULT_SERVER, DRY_RUN_REASON, DRY_RUN_STATUS};
pub use error::{NtfyError, Result};
pub use handler::{NtfyHandler, NtfyHandlerBuilder};
pub use levels::{default_priorities, default_tags};
pub use notification::Notification;
pub use priority::Priority;
