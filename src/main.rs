use anyhow::Context;
use clap::Parser;
use responsible_resolver::utils::{logger, validation::Validate};
use responsible_resolver::{
    BusinessClock, CliConfig, MappingConfig, Order, ResolutionResult, ResponsibleResolver,
    TracingSink,
};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_service_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting responsible-resolver");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let mapping = MappingConfig::from_file(&config.mapping)
        .with_context(|| format!("failed to load mapping from {}", config.mapping))?;

    if let Err(e) = mapping.validate() {
        tracing::error!("❌ Mapping validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let order_content = std::fs::read_to_string(&config.order)
        .with_context(|| format!("failed to read order from {}", config.order))?;
    let order: Order = serde_json::from_str(&order_content)
        .with_context(|| format!("failed to parse order from {}", config.order))?;

    let resolver = ResponsibleResolver::new(BusinessClock::new(), TracingSink::new());

    match resolver.resolve(&mapping, &order) {
        ResolutionResult::Resolved { id, matched_by } => {
            tracing::info!(
                "✅ Order {} assigned to {} (matched by {})",
                order.id,
                id,
                matched_by
            );
            println!("{}", id);
        }
        ResolutionResult::Unresolved => {
            // The resolver already warned through the diagnostic sink.
            eprintln!("❌ No responsible found for order {}", order.id);
            std::process::exit(1);
        }
    }

    Ok(())
}
