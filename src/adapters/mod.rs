// Adapters layer: concrete implementations of the domain ports (ambient
// clock, diagnostic transports).

pub mod clock;
pub mod diagnostics;
