//! Observability for registries
//!
//! Structured JSON logging with typed lifecycle events. Logging is
//! read-only: it never changes the outcome of a build or a validation.
//!
//! # Usage
//!
//! ```
//! use algebraic_type::observability::{log_event_with_fields, Event, Logger, Severity};
//!
//! Logger::set_threshold(Severity::Info);
//! log_event_with_fields(Event::RegistryBuilt, &[("variants", "5")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

#[cfg(test)]
pub(crate) use logger::ThresholdGuard;

/// Log a lifecycle event
pub fn log_event(event: Event) {
    Logger::log(event.severity(), event.as_str(), &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
