// Library root
// -----------
// The binary (`main.rs`) wires these modules together; keeping them in a
// library lets the integration tests drive the upload without a terminal.
//
// Module responsibilities:
// - `config`: defaults and environment overrides (endpoint, image path).
// - `logging`: tracing subscriber setup.
// - `error`: the `UploadError` type shared by every failure.
// - `api`: the multipart upload to the OCR server.
// - `report`: prints a result or an error to the console.
// - `ui`: interactive prompt loop.
pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod report;
pub mod ui;

pub use api::{OcrClient, OcrResponse};
pub use config::Config;
pub use error::UploadError;
