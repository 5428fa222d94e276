// Entrypoint for the CLI application.
// - Resolves configuration: flags win over environment variables, which
//   win over the built-in defaults. This includes the log level.
// - Sends one image, or hands over to the interactive loop.
// - An upload failure is printed, not returned: the process still exits
//   normally. Only setup errors make `main` fail.

use std::io;
use std::path::PathBuf;

use clap::Parser;
use ocr_upload_cli::{logging, report, ui, Config, OcrClient};

#[derive(Parser)]
#[command(name = "ocr-upload")]
#[command(about = "Send an image to an OCR server and print its JSON answer")]
#[command(version)]
struct Cli {
    /// Image file to upload (defaults to OCR_IMAGE_PATH or the built-in path)
    image: Option<PathBuf>,

    /// OCR endpoint URL (defaults to OCR_API_URL or the built-in URL)
    #[arg(short, long)]
    url: Option<String>,

    /// Prompt for image paths instead of sending a single file
    #[arg(short, long)]
    interactive: bool,

    /// Log level used when RUST_LOG is not set
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let env = Config::from_env();
    let config = Config {
        api_url: cli.url.unwrap_or(env.api_url),
        image_path: cli.image.unwrap_or(env.image_path),
        log_level: cli.log_level.unwrap_or(env.log_level),
    };

    logging::init(&config.log_level);

    let client = OcrClient::new(config.api_url.as_str())?;

    if cli.interactive {
        return ui::interactive(&client, &config.image_path);
    }

    let outcome = client.upload_image(&config.image_path);
    report::report(&outcome, &mut io::stdout(), &mut io::stderr())?;
    Ok(())
}
