use tracing::subscriber::DefaultGuard;
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Maps the `--debug` flag onto the level the CLI logs at.
pub fn level_from_debug(debug: bool) -> Level {
    if debug {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

fn filter_for(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if level >= Level::DEBUG {
            EnvFilter::new("plan_photos=debug,info")
        } else {
            EnvFilter::new(format!("plan_photos={}", level.as_str().to_lowercase()))
        }
    })
}

/// Installs the CLI subscriber as the default for the current thread.
///
/// Logging stays active for as long as the returned guard is alive.
pub fn init_cli_logger(level: Level) -> DefaultGuard {
    tracing_subscriber::registry()
        .with(filter_for(level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .set_default()
}
