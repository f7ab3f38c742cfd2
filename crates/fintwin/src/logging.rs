use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset: CLI messages at `level`, engine warnings only.
fn default_filter(level: &str) -> String {
    format!("fintwin={level},fintwin_core=warn")
}

/// Initialize logging.
///
/// With `log_file` set, records are appended to that file without ANSI colours;
/// otherwise they go to stderr so stdout stays clean for reports and JSON.
/// `RUST_LOG` overrides `level` when present.
pub fn init_logging(log_file: Option<&Path>, level: &str) -> color_eyre::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(level)));

    let registry = tracing_subscriber::registry().with(env_filter);

    match log_file {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            registry
                .with(
                    fmt::layer()
                        .with_writer(Mutex::new(file))
                        .with_ansi(false)
                        .with_target(true),
                )
                .try_init()?;
            tracing::info!(log_path = %path.display(), "fintwin logging initialized");
        }
        None => {
            registry
                .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
                .try_init()?;
        }
    }
    Ok(())
}
