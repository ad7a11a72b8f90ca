use crate::domain::model::LocalTime;

/// Ambient clock, decomposed into the business timezone's local calendar.
/// Implementations must be substitutable with a fixed clock in tests.
pub trait ClockSource: Send + Sync {
    fn now(&self) -> LocalTime;
}

/// Non-fatal notice channel for resolution outcomes that deserve operator
/// attention (default fallback hit, nothing resolved).
pub trait DiagnosticSink: Send + Sync {
    fn warn(&self, message: &str);
}

impl<T: ClockSource + ?Sized> ClockSource for &T {
    fn now(&self) -> LocalTime {
        (**self).now()
    }
}

impl<T: ClockSource + ?Sized> ClockSource for std::sync::Arc<T> {
    fn now(&self) -> LocalTime {
        (**self).now()
    }
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for &T {
    fn warn(&self, message: &str) {
        (**self).warn(message)
    }
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for std::sync::Arc<T> {
    fn warn(&self, message: &str) {
        (**self).warn(message)
    }
}
