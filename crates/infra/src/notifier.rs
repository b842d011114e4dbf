// crates/infra/src/notifier.rs
use livecount_ports::{Notifier, Severity};

/// Routes user-facing messages into the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Info => log::info!("{message}"),
            Severity::Warning => log::warn!("{message}"),
            Severity::Error => log::error!("{message}"),
        }
    }
}

/// Writes user-facing messages to stderr as `[level] message`, whatever the log filter.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrNotifier {
    pub quiet: bool,
}

impl Notifier for StderrNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        if self.quiet && severity < Severity::Error {
            return;
        }
        eprintln!("[{severity}] {message}");
    }
}
