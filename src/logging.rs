// Logging setup. Diagnostics go through `tracing` to stderr so they never
// mix with the OCR result printed on stdout.

use tracing_subscriber::EnvFilter;

use crate::config::DEFAULT_LOG_LEVEL;

/// Install the global subscriber filtered by `level`, which already folds in
/// `--log-level` and `RUST_LOG` (see `Config`). Calling this more than once
/// leaves the first subscriber in place.
pub fn init(level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_for(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Parse `level` as a filter directive; an unparsable one falls back to
/// the default level.
fn filter_for(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_directive_is_kept() {
        assert_eq!(filter_for("debug").to_string(), "debug");
    }

    #[test]
    fn invalid_directive_falls_back_to_default() {
        assert_eq!(filter_for("ocr=notalevel").to_string(), DEFAULT_LOG_LEVEL);
    }
}
