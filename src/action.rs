//! Action buttons attached to a notification.
//!
//! An action is either a [`ViewAction`] (open a link) or an
//! [`HttpAction`] (fire an HTTP request). Each one is serialized to a
//! single line of comma-separated `key=value` pairs; the lines of all
//! actions are joined with `"; "` into the `Actions` header. The field
//! order within a line is fixed and the receiving service's button
//! parser depends on it, so the encoding must stay byte-stable.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::validate::validate_url;

/// HTTP method fired by an [`HttpAction`].
///
/// Encoded on the wire as enumerated tokens, not the literal method
/// names: `Get` = `"1"`, `Post` = `"2"`, `Put` = `"3"`. These tokens are
/// stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
}

impl HttpMethod {
    /// Wire token carried in the `method=` field of an encoded action.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "1",
            HttpMethod::Post => "2",
            HttpMethod::Put => "3",
        }
    }
}

/// Button that opens a URL when tapped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewAction {
    label: String,
    url: String,
    clear: bool,
}

impl ViewAction {
    /// Fails with a `Config` error when `url` is not a valid URL.
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Result<Self> {
        let url = url.into();
        validate_url("action url", &url)?;
        Ok(Self {
            label: label.into(),
            url,
            clear: false,
        })
    }

    /// Delete the notification once the button is tapped.
    pub fn clear(mut self, clear: bool) -> Self {
        self.clear = clear;
        self
    }

    fn encode(&self) -> String {
        format!(
            "view, label={}, url={}, clear={}",
            self.label, self.url, self.clear
        )
    }
}

/// Button that fires an HTTP request when tapped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpAction {
    label: String,
    url: String,
    clear: bool,
    method: HttpMethod,
    headers: Vec<(String, String)>,
    body: Option<String>,
}

impl HttpAction {
    /// Fails with a `Config` error when `url` is not a valid URL.
    /// The method defaults to `Get`.
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Result<Self> {
        let url = url.into();
        validate_url("action url", &url)?;
        Ok(Self {
            label: label.into(),
            url,
            clear: false,
            method: HttpMethod::default(),
            headers: Vec::new(),
            body: None,
        })
    }

    /// Delete the notification once the request succeeds.
    pub fn clear(mut self, clear: bool) -> Self {
        self.clear = clear;
        self
    }

    pub fn method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    /// Adds one header to the fired request. Headers are encoded in the
    /// order they were added.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Body of the fired request.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    fn encode(&self) -> String {
        let mut line = format!(
            "http, label={}, url={}, clear={}, method={}",
            self.label,
            self.url,
            self.clear,
            self.method.as_str()
        );
        if let Some(body) = &self.body {
            line.push_str(&format!(", body={body}"));
        }
        for (name, value) in &self.headers {
            line.push_str(&format!(", headers.{name}={value}"));
        }
        line
    }
}

/// An interactive button attached to a notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Action {
    View(ViewAction),
    Http(HttpAction),
}

impl Action {
    /// Single-line wire form of this action.
    pub(crate) fn encode(&self) -> String {
        match self {
            Action::View(view) => view.encode(),
            Action::Http(http) => http.encode(),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.encode())
    }
}

impl From<ViewAction> for Action {
    fn from(action: ViewAction) -> Self {
        Action::View(action)
    }
}

impl From<HttpAction> for Action {
    fn from(action: HttpAction) -> Self {
        Action::Http(action)
    }
}
