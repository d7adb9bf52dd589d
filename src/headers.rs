//! Maps the parameter set of a notification onto its wire headers.

use crate::error::Result;
use crate::notification::Notification;
use crate::validate::validate_url;

/// Produces the `(name, value)` header pairs of one push.
///
/// Header names are lowercase; the HTTP layer normalizes them anyway and
/// the receiving service matches case-insensitively. Absent or empty
/// fields contribute no header; only `priority` is always present.
pub(crate) fn assemble(notification: &Notification) -> Result<Vec<(&'static str, String)>> {
    if let Some(click) = &notification.click {
        validate_url("click", click)?;
    }
    // attach is validated like the other URL fields but carried by no
    // header; the wire surface has no attach header
    if let Some(attach) = &notification.attach {
        validate_url("attach", attach)?;
    }
    if let Some(icon) = &notification.icon {
        validate_url("icon", icon)?;
    }

    let mut headers: Vec<(&'static str, String)> = Vec::new();

    let direct = [
        ("title", &notification.title),
        ("at", &notification.at),
        ("click", &notification.click),
        ("email", &notification.email),
        ("icon", &notification.icon),
    ];
    for (name, value) in direct {
        if let Some(value) = value {
            if !value.is_empty() {
                headers.push((name, value.clone()));
            }
        }
    }

    headers.push(("priority", notification.priority.as_str().to_string()));

    if !notification.tags.is_empty() {
        headers.push(("tags", notification.tags.join(",")));
    }

    if !notification.actions.is_empty() {
        let lines: Vec<String> = notification.actions.iter().map(|a| a.encode()).collect();
        headers.push(("actions", lines.join("; ")));
    }

    Ok(headers)
}
