// Runtime configuration: the OCR endpoint, the image to send and the
// log level. Every value has a built-in default so the binary works with
// no environment at all; environment variables override the defaults and
// command line flags (see `main.rs`) override both.

use std::path::PathBuf;

/// OCR server endpoint used when `OCR_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "http://address.server.ocr:5000/ocr/document";

/// Image sent when neither a CLI argument nor `OCR_IMAGE_PATH` is given.
pub const DEFAULT_IMAGE_PATH: &str = "path/to/your/image.jpg";

pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Multipart field name the OCR server reads the uploaded file from.
pub const IMAGE_FIELD: &str = "image";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
    pub image_path: PathBuf,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            image_path: PathBuf::from(DEFAULT_IMAGE_PATH),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from `OCR_API_URL`, `OCR_IMAGE_PATH` and
    /// `RUST_LOG`, falling back to the defaults for anything unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env` but reads variables through `lookup`, which keeps
    /// the process environment out of the tests.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            api_url: lookup("OCR_API_URL")
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.api_url),
            image_path: lookup("OCR_IMAGE_PATH")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.image_path),
            log_level: lookup("RUST_LOG")
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.log_level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_match_hard_coded_endpoint() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config, Config::default());
        assert_eq!(config.api_url, "http://address.server.ocr:5000/ocr/document");
        assert_eq!(config.image_path, PathBuf::from("path/to/your/image.jpg"));
    }

    #[test]
    fn environment_overrides_defaults() {
        let vars: HashMap<&str, &str> = [
            ("OCR_API_URL", "http://127.0.0.1:5000/ocr/document"),
            ("OCR_IMAGE_PATH", "/tmp/card.png"),
        ]
        .into_iter()
        .collect();
        let config = Config::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.api_url, "http://127.0.0.1:5000/ocr/document");
        assert_eq!(config.image_path, PathBuf::from("/tmp/card.png"));
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn empty_variables_are_ignored() {
        let config = Config::from_lookup(|_| Some(String::new()));
        assert_eq!(config, Config::default());
    }
}
