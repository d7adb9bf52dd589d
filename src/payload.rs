//! Request body selection: a text message or the bytes of a local file.

use std::fs::File;
use std::path::Path;

use reqwest::blocking::Body;

use crate::error::{NtfyError, Result};

/// The single request body of one push.
///
/// A file payload keeps the handle open; the handle is closed when the
/// body is dropped, after the request finished, whatever its outcome.
#[derive(Debug)]
pub(crate) enum Payload {
    Text(Vec<u8>),
    Attachment(File),
}

impl Payload {
    /// Enforces the exactly-one-of rule between message and file.
    pub(crate) fn select(message: Option<&str>, filepath: Option<&Path>) -> Result<Payload> {
        match (message, filepath) {
            (None, None) => Err(NtfyError::config(
                "nothing to push: neither a message nor a file path was given",
            )),
            (Some(_), Some(_)) => Err(NtfyError::config(
                "ambiguous payload: a message and a file path were both given",
            )),
            (Some(text), None) => Ok(Payload::Text(to_single_byte(text))),
            (None, Some(path)) => {
                if !path.is_file() {
                    return Err(NtfyError::AttachmentNotFound {
                        path: path.to_path_buf(),
                    });
                }
                let file = File::open(path).map_err(|_| NtfyError::AttachmentNotFound {
                    path: path.to_path_buf(),
                })?;
                Ok(Payload::Attachment(file))
            }
        }
    }

    pub(crate) fn into_body(self) -> Body {
        match self {
            Payload::Text(bytes) => Body::from(bytes),
            Payload::Attachment(file) => Body::from(file),
        }
    }
}

/// Transcodes to one byte per character; characters above `U+00FF` are
/// replaced with `?`. This never fails.
fn to_single_byte(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
        .collect()
}
