use tracing_subscriber::EnvFilter;

/// Sink for the diagnostic events the assistant emits.
pub trait EventLog: Send + Sync {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

/// Forwards events to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLog;

impl EventLog for TracingLog {
    fn info(&self, message: &str) {
        tracing::info!(target: "dish_assistant", "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "dish_assistant", "{}", message);
    }
}

/// Drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentLog;

impl EventLog for SilentLog {
    fn info(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}

/// Installs the global fmt subscriber. `RUST_LOG` wins over `verbose`.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "dish_assistant=debug" } else { "dish_assistant=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
