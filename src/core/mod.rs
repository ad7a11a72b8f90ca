pub mod resolver;

pub use crate::domain::model::{
    LocalTime, MatchedBy, Order, OrderId, ResolutionResult, ResponsibleId,
};
pub use crate::domain::ports::{ClockSource, DiagnosticSink};
pub use crate::utils::error::Result;
