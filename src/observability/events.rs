//! Observable events
//!
//! Events are explicit and typed.

use std::fmt;

use super::logger::Severity;

/// Observable events emitted while building and using registries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A union definition was parsed
    DefinitionLoaded,
    /// A variant was added to a registry under construction
    VariantRegistered,
    /// A registry finished building
    RegistryBuilt,
    /// A build was aborted by a naming violation
    NamingRejected,
    /// A value failed its variant's field schema
    SchemaRejected,
    /// A value without a `type` was handed to `validate`
    UntypedRejected,
    /// A value with an unregistered tag passed through `validate`
    ForeignTagPassed,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::DefinitionLoaded => "DEFINITION_LOADED",
            Event::VariantRegistered => "VARIANT_REGISTERED",
            Event::RegistryBuilt => "REGISTRY_BUILT",
            Event::NamingRejected => "NAMING_REJECTED",
            Event::SchemaRejected => "SCHEMA_REJECTED",
            Event::UntypedRejected => "UNTYPED_REJECTED",
            Event::ForeignTagPassed => "FOREIGN_TAG_PASSED",
        }
    }

    /// Severity the event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::DefinitionLoaded | Event::RegistryBuilt => Severity::Info,
            Event::NamingRejected => Severity::Warn,
            Event::VariantRegistered
            | Event::SchemaRejected
            | Event::UntypedRejected
            | Event::ForeignTagPassed => Severity::Trace,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
