use std::convert::Infallible;
use std::ffi::OsStr;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::error::AppIconError;

mod error;
mod iconset;

const USAGE: &str = "Usage: appicon-contents <appicon_dir> [icons_dir]";

#[derive(Debug)]
struct Args {
    /// The AppIcon.appiconset directory
    icon_set_dir: PathBuf,

    /// Accepted for compatibility with existing packaging scripts
    icons_dir: Option<PathBuf>,
}

impl Args {
    /// Parses the positional arguments, returns `None` if the icon set directory is missing.
    fn from_env() -> Result<Option<Self>, pico_args::Error> {
        let mut args = pico_args::Arguments::from_env();

        let icon_set_dir = match args.opt_free_from_os_str(parse_path)? {
            Some(v) => v,
            None => return Ok(None),
        };
        let icons_dir = args.opt_free_from_os_str(parse_path)?;

        let remaining = args.finish();
        if !remaining.is_empty() {
            tracing::warn!("Ignoring extra arguments: {:?}", remaining);
        }

        Ok(Some(Self {
            icon_set_dir,
            icons_dir,
        }))
    }
}

fn parse_path(value: &OsStr) -> Result<PathBuf, Infallible> {
    Ok(PathBuf::from(value))
}

fn main() -> ExitCode {
    // Set up logging using tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(std::io::stdout().is_terminal()),
        )
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let args = match Args::from_env() {
        Ok(Some(v)) => v,
        Ok(None) => {
            eprintln!("{}", USAGE);
            return ExitCode::FAILURE;
        }
        Err(err) => {
            tracing::error!("Failed to parse arguments: {}", err);
            eprintln!("{}", USAGE);
            return ExitCode::FAILURE;
        }
    };

    tracing::debug!(
        "{} version {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );
    tracing::info!(
        "Updating {} in {}",
        iconset::MANIFEST_FILE_NAME,
        args.icon_set_dir.display()
    );

    match iconset::update(&args.icon_set_dir, args.icons_dir.as_deref()) {
        Ok(outcome) => {
            tracing::trace!("Written manifest: {:?}", outcome.manifest);

            let summary = outcome.summary;
            for assigned in &summary.assigned {
                tracing::info!("Image {} -> {}", assigned.index, assigned.filename);
            }

            if summary.missing > 0 {
                tracing::info!(
                    "{} of {} images have no icon file yet",
                    summary.missing,
                    summary.entries
                );
            }

            tracing::info!("{} updated", iconset::MANIFEST_FILE_NAME);
            ExitCode::SUCCESS
        }
        Err(err @ AppIconError::ManifestNotFound(_)) => {
            tracing::error!("{}", err);
            ExitCode::FAILURE
        }
        Err(err) => {
            tracing::error!("Failed to update {}: {}", iconset::MANIFEST_FILE_NAME, err);
            ExitCode::FAILURE
        }
    }
}
