// API client module: a small blocking HTTP client that sends one image to
// the OCR server as multipart/form-data and hands back the JSON it answers
// with. The server owns the response schema, so the body is kept as a
// loosely typed `serde_json::Value`.

use reqwest::blocking::{multipart, Client};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::File;
use std::io;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::config::IMAGE_FIELD;
use crate::error::{body_to_value, UploadError};

/// OCR client holding a reqwest blocking client and the endpoint URL.
#[derive(Clone)]
pub struct OcrClient {
    client: Client,
    api_url: String,
}

/// Whatever JSON the OCR server returned. A few accessors read the
/// `status` / `error` / `message` envelope the server puts around its
/// results, but nothing here rejects a body that lacks them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct OcrResponse(pub Value);

impl OcrResponse {
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// The `status` field the server echoes in its body, if present.
    pub fn status_code(&self) -> Option<u16> {
        self.0
            .get("status")
            .and_then(Value::as_u64)
            .and_then(|s| u16::try_from(s).ok())
    }

    /// True when the body carries `"error": true`.
    pub fn is_error_flagged(&self) -> bool {
        self.0.get("error").and_then(Value::as_bool).unwrap_or(false)
    }

    pub fn message(&self) -> Option<&str> {
        self.0.get("message").and_then(Value::as_str)
    }
}

impl OcrClient {
    /// Build a client for `api_url`. The URL is not validated here; a bad
    /// one surfaces as a transport error on the first upload.
    ///
    /// No request timeout is configured: an upload waits for the server
    /// for as long as it takes.
    pub fn new(api_url: impl Into<String>) -> Result<Self, UploadError> {
        let client = Client::builder().timeout(None).build()?;
        Ok(OcrClient {
            client,
            api_url: api_url.into(),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Upload the image at `image_path` under the `image` form field and
    /// return the parsed response. The file is opened before anything goes
    /// on the wire, so a missing file never produces a request. Each call
    /// sends its own request; nothing is cached or retried.
    pub fn upload_image(&self, image_path: &Path) -> Result<OcrResponse, UploadError> {
        let file_error = |source| UploadError::File {
            path: image_path.to_path_buf(),
            source,
        };
        let file = File::open(image_path).map_err(file_error)?;
        let metadata = file.metadata().map_err(file_error)?;
        if !metadata.is_file() {
            return Err(file_error(io::Error::new(
                io::ErrorKind::InvalidInput,
                "not a regular file",
            )));
        }
        let len = metadata.len();
        debug!(path = %image_path.display(), bytes = len, "opened image file");

        let file_name = image_path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("image.jpg");

        let part = multipart::Part::reader_with_length(file, len)
            .file_name(file_name.to_string())
            .mime_str(guess_mime(image_path))?;
        let form = multipart::Form::new().part(IMAGE_FIELD, part);

        info!(url = %self.api_url, file = file_name, "sending image to OCR server");
        let res = self.client.post(&self.api_url).multipart(form).send()?;

        let status = res.status();
        debug!(status = status.as_u16(), "OCR server responded");

        if !status.is_success() {
            warn!(status = status.as_u16(), "OCR request rejected");
            let text = res.text().unwrap_or_else(|_| "".into());
            return Err(UploadError::Status {
                status,
                body: body_to_value(&text),
            });
        }
        let text = res.text()?;
        Ok(OcrResponse(body_to_value(&text).unwrap_or(Value::Null)))
    }
}

/// Pick a MIME type from the file extension. Anything unrecognised is sent
/// as a generic byte stream and left for the server to sniff.
pub fn guess_mime(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("bmp") => "image/bmp",
        Some("tif") | Some("tiff") => "image/tiff",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}
