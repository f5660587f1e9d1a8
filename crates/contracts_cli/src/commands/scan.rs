use anyhow::{Context, Result};
use contracts_parser::scan_directory;
use std::path::Path;
use tracing::{debug, info};

use crate::output::{self, OutputFormat};

pub fn execute(dir: &str, format: OutputFormat, only_from_file: bool) -> Result<()> {
    info!("Scanning contracts under: {}", dir);

    let mut contracts = scan_directory(Path::new(dir))
        .with_context(|| format!("Failed to scan contract directory: {}", dir))?;

    if only_from_file {
        let total = contracts.len();
        contracts.retain(|metadata| metadata.any_payload_from_file());
        debug!(
            "Kept {} of {} contract(s) with file payloads",
            contracts.len(),
            total
        );
    }

    if contracts.is_empty() && format == OutputFormat::Text {
        output::print_info("No contracts found");
        return Ok(());
    }

    output::print_payload_report(&contracts, format)
}
