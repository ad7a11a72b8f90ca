pub mod mapping;

#[cfg(feature = "cli")]
pub mod cli;

pub use mapping::MappingConfig;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
