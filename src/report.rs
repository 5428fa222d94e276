// Console output for an upload outcome. Writers are passed in so the
// binary can use stdout/stderr and tests can capture into buffers.

use std::io::{self, Write};

use serde_json::Value;

use crate::api::OcrResponse;
use crate::error::UploadError;

pub fn report_success<W: Write>(response: &OcrResponse, out: &mut W) -> io::Result<()> {
    writeln!(out, "OCR Response: {}", pretty(response.as_value()))
}

/// Print the error message and, when the server answered with a body,
/// that body on its own line.
pub fn report_failure<W: Write>(error: &UploadError, err: &mut W) -> io::Result<()> {
    writeln!(err, "API error: {}", error)?;
    if let Some(body) = error.response_body() {
        writeln!(err, "{}", pretty(body))?;
    }
    Ok(())
}

pub fn report<O: Write, E: Write>(
    outcome: &Result<OcrResponse, UploadError>,
    out: &mut O,
    err: &mut E,
) -> io::Result<()> {
    match outcome {
        Ok(response) => report_success(response, out),
        Err(error) => report_failure(error, err),
    }
}

fn pretty(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
    }
}
