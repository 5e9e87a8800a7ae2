use tracing_appender::non_blocking::WorkerGuard;

use super::CustomEventFormat;

pub static LOG_GUARD: once_cell::sync::Lazy<once_cell::sync::OnceCell<WorkerGuard>> =
    once_cell::sync::Lazy::new(once_cell::sync::OnceCell::new);

/// Stdout plus a `<dir>/<level>.log` file. Only the first call installs the subscriber.
pub fn init_log(dir: &str, level: Option<&str>) -> Result<(), crate::Error> {
    let level = level.unwrap_or(super::DEFAULT_LOG_LEVEL);
    if !std::path::Path::new(dir).exists() {
        std::fs::create_dir_all(dir)?;
    }
    LOG_GUARD.get_or_init(|| _init_log(level, dir));

    Ok(())
}

fn _init_log(level: &str, dir: &str) -> WorkerGuard {
    use tracing_subscriber::{
        fmt, prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt, EnvFilter,
        Registry,
    };
    let file_appender = tracing_appender::rolling::never(dir, format!("{level}.log"));
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .event_format(CustomEventFormat);

    let _ = Registry::default()
        .with(env_filter)
        .with(fmt::layer().event_format(CustomEventFormat))
        .with(file_layer)
        .try_init();
    tracing::info!("[init log] Init log success");
    guard
}
