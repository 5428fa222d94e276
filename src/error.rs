use std::io;
use std::path::PathBuf;

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Every way an upload can fail. Callers treat them all as one failure
/// path; the variants only decide how much detail gets printed.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("failed to open image file {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("request failed with status code {}", status.as_u16())]
    Status {
        status: StatusCode,
        body: Option<Value>,
    },
}

impl UploadError {
    /// Body the server sent along with a failed status, if any.
    pub fn response_body(&self) -> Option<&Value> {
        match self {
            UploadError::Status { body, .. } => body.as_ref(),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            UploadError::Status { status, .. } => Some(*status),
            UploadError::Transport(e) => e.status(),
            UploadError::File { .. } => None,
        }
    }
}

/// Turn a raw response body into a JSON value. Bodies that are not JSON
/// are kept verbatim as a string; empty bodies yield `None`.
pub(crate) fn body_to_value(text: &str) -> Option<Value> {
    if text.trim().is_empty() {
        return None;
    }
    Some(serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_error_exposes_body() {
        let err = UploadError::Status {
            status: StatusCode::BAD_REQUEST,
            body: Some(json!({"error": "bad image"})),
        };
        assert_eq!(err.response_body(), Some(&json!({"error": "bad image"})));
        assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
        assert_eq!(err.to_string(), "request failed with status code 400");
    }

    #[test]
    fn file_error_has_no_body() {
        let err = UploadError::File {
            path: PathBuf::from("missing.jpg"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };
        assert!(err.response_body().is_none());
        assert!(err.status().is_none());
        assert!(err.to_string().starts_with("failed to open image file missing.jpg"));
    }

    #[test]
    fn non_json_body_is_kept_as_text() {
        assert_eq!(body_to_value("{\"text\":\"hi\"}"), Some(json!({"text": "hi"})));
        assert_eq!(
            body_to_value("Internal Server Error"),
            Some(Value::String("Internal Server Error".into()))
        );
        assert_eq!(body_to_value("  \n"), None);
    }
}
