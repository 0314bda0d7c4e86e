use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    Layer, filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

// error!("Goes to stderr and file");
// warn!("Goes to stderr and file");
// info!("Goes to stderr and file");
// debug!("Goes to file only");
pub fn configure(log_path: &Path) -> anyhow::Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::never(log_path, "holler.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    // Info and above to stderr for the interactive user.
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(LevelFilter::INFO);

    // Debug detail to the log file where request/response traffic lands.
    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_writer(file_writer)
        .with_filter(LevelFilter::DEBUG);

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::configure;

    #[test]
    fn configure_installs_subscriber_once() {
        let dir = tempfile::tempdir().expect("tempdir");
        let first = configure(dir.path());
        assert!(first.is_ok());

        // The global subscriber slot is already taken.
        let second = configure(dir.path());
        assert!(second.is_err());
    }
}
