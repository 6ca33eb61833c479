/// How serious a reported diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Debug,
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn level(self) -> log::Level {
        match self {
            Severity::Debug => log::Level::Debug,
            Severity::Info => log::Level::Info,
            Severity::Warning => log::Level::Warn,
            Severity::Error => log::Level::Error,
        }
    }
}

/// Sink for diagnostics raised by the geometry types.
///
/// Reporting never changes the result of the operation that reported; callers
/// always get a (possibly degenerate) value back.
pub trait Reporter {
    fn report(&self, message: &str, severity: Severity);
}

/// Forwards diagnostics to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&self, message: &str, severity: Severity) {
        log::log!(target: "cannon_math", severity.level(), "{message}");
    }
}

/// Drops every diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn report(&self, _message: &str, _severity: Severity) {}
}

impl<F> Reporter for F
where
    F: Fn(&str, Severity),
{
    fn report(&self, message: &str, severity: Severity) {
        self(message, severity)
    }
}
