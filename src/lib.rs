pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::clock::{BusinessClock, FixedClock};
pub use adapters::diagnostics::{MemorySink, TracingSink};
pub use config::mapping::MappingConfig;
pub use core::resolver::ResponsibleResolver;
pub use domain::model::{
    LocalTime, MatchedBy, Order, OrderId, ResolutionResult, ResponsibleId,
};
pub use domain::ports::{ClockSource, DiagnosticSink};
pub use utils::error::{ResolverError, Result};
