use anyhow::{Context, Result};
use contracts_parser::load_metadata;
use std::path::Path;
use tracing::info;

use crate::output::{self, OutputFormat};

pub fn execute(contract_path: &str, format: OutputFormat) -> Result<()> {
    info!("Checking contract payloads: {}", contract_path);

    let path = Path::new(contract_path);
    let contracts = load_metadata(path)
        .with_context(|| format!("Failed to parse contract file: {}", contract_path))?;

    if format == OutputFormat::Text {
        output::print_info(&format!(
            "Loaded {} contract(s) from {}",
            contracts.len(),
            contract_path
        ));
    }

    output::print_payload_report(&contracts, format)
}
