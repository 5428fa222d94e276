// UI layer: interactive mode built on `dialoguer`. Asks for an image path,
// uploads it while a spinner runs, prints the result and offers to send
// another one.

use crate::api::OcrClient;
use crate::error::UploadError;
use crate::report;
use anyhow::Result;
use crossterm::style::Stylize;
use dialoguer::{Confirm, Input};
use indicatif::{ProgressBar, ProgressStyle};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Prompt loop. Every iteration is an independent upload; the loop ends
/// when the user declines to send another image.
pub fn interactive(client: &OcrClient, default_path: &Path) -> Result<()> {
    println!("OCR endpoint: {}", client.api_url().cyan());
    let mut last = default_path.display().to_string();
    loop {
        let raw: String = Input::new()
            .with_prompt("Image file path")
            .default(last.clone())
            .interact_text()?;
        let path = expand_home(raw.trim());

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
        spinner.set_message(format!("Uploading {}...", path.display()));
        spinner.enable_steady_tick(Duration::from_millis(100));
        let outcome = client.upload_image(&path);
        spinner.finish_and_clear();

        match &outcome {
            Ok(_) => println!("{}", "Upload successful".green()),
            Err(e) => println!("{}", failure_line(e).red()),
        }
        report::report(&outcome, &mut io::stdout(), &mut io::stderr())?;

        last = raw;
        let again = Confirm::new()
            .with_prompt("Upload another image?")
            .default(false)
            .interact()?;
        if !again {
            break;
        }
    }
    Ok(())
}

/// Short status line for a failed upload, naming the HTTP status when the
/// server got far enough to answer.
fn failure_line(error: &UploadError) -> String {
    match error.status() {
        Some(status) => format!("Upload failed ({})", status),
        None => "Upload failed".to_string(),
    }
}

/// Expand a leading `~` to the user's home directory. Paths without one,
/// or systems with no home directory, are returned unchanged.
pub fn expand_home(raw: &str) -> PathBuf {
    expand_home_with(raw, dirs::home_dir())
}

fn expand_home_with(raw: &str, home: Option<PathBuf>) -> PathBuf {
    match (raw.strip_prefix('~'), home) {
        (Some(""), Some(home)) => home,
        (Some(rest), Some(home)) if rest.starts_with('/') || rest.starts_with('\\') => {
            home.join(&rest[1..])
        }
        _ => PathBuf::from(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn tilde_expands_to_home() {
        let home = Some(PathBuf::from("/home/ocr"));
        assert_eq!(
            expand_home_with("~/scans/ktp.jpg", home.clone()),
            PathBuf::from("/home/ocr/scans/ktp.jpg")
        );
        assert_eq!(expand_home_with("~", home.clone()), PathBuf::from("/home/ocr"));
    }

    #[test]
    fn other_paths_are_untouched() {
        let home = Some(PathBuf::from("/home/ocr"));
        assert_eq!(
            expand_home_with("/tmp/sim.png", home.clone()),
            PathBuf::from("/tmp/sim.png")
        );
        assert_eq!(
            expand_home_with("~other/x.png", home),
            PathBuf::from("~other/x.png")
        );
        assert_eq!(expand_home_with("~/x.png", None), PathBuf::from("~/x.png"));
    }

    #[test]
    fn failure_line_names_status() {
        let err = UploadError::Status {
            status: StatusCode::BAD_REQUEST,
            body: None,
        };
        assert_eq!(failure_line(&err), "Upload failed (400 Bad Request)");

        let err = UploadError::File {
            path: PathBuf::from("missing.jpg"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(failure_line(&err), "Upload failed");
    }
}
