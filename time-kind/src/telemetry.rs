use color_eyre::eyre::Result;
use tracing::Level;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Installs a global subscriber printing conversion events.
///
/// `RUST_LOG` takes precedence over `log_level`, which defaults to `INFO`.
pub fn init_tracing(log_level: Option<Level>) -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(log_level.unwrap_or(Level::INFO)).into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_file(false)
                .with_line_number(false)
                .pretty(),
        )
        .try_init()?;

    Ok(())
}
