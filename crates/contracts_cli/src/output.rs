use anyhow::Result;
use clap::ValueEnum;
use colored::*;
use contracts_core::ContractMetadata;
use serde_json::json;

/// Report rendering selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored report
    Text,
    /// Machine-readable JSON document
    Json,
}

pub fn print_payload_report(contracts: &[ContractMetadata], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json_report(contracts),
        OutputFormat::Text => {
            print_text_report(contracts);
            Ok(())
        }
    }
}

fn print_text_report(contracts: &[ContractMetadata]) {
    println!("\n{}", "═".repeat(60));
    println!("{}", "  PAYLOAD SOURCING REPORT".bold());
    println!("{}", "═".repeat(60));

    for metadata in contracts {
        let contract = metadata.contract();
        println!(
            "\n{} [{}/{}] {} {}",
            metadata.path().display().to_string().bold(),
            metadata.order() + 1,
            metadata.group_size(),
            contract.style(),
            contract.name().unwrap_or("(unnamed)")
        );

        if metadata.any_payload_from_file() {
            println!(
                "  {} {}",
                "⚠".yellow().bold(),
                "Payload read from file".yellow()
            );
            for (slot, file) in metadata.payload_files() {
                println!("    - {}: {} ({:?})", slot, file.path, file.encoding);
            }
        } else {
            println!("  {} {}", "✓".green().bold(), "All payloads inline".green());
        }
    }

    let with_files = count_with_files(contracts);
    println!("\n{}", "Summary:".bold());
    println!("  Contracts:               {}", contracts.len());
    println!("  With payloads from file: {}", with_files);
    println!("{}", "═".repeat(60));
}

fn print_json_report(contracts: &[ContractMetadata]) -> Result<()> {
    let entries: Vec<_> = contracts
        .iter()
        .map(|metadata| {
            let contract = metadata.contract();
            let files: Vec<_> = metadata
                .payload_files()
                .into_iter()
                .map(|(slot, file)| {
                    json!({
                        "slot": slot,
                        "path": file.path,
                        "encoding": file.encoding,
                    })
                })
                .collect();

            json!({
                "path": metadata.path().display().to_string(),
                "order": metadata.order(),
                "group_size": metadata.group_size(),
                "alternate_format": metadata.alternate_format(),
                "style": contract.style(),
                "name": contract.name(),
                "any_payload_from_file": metadata.any_payload_from_file(),
                "payload_files": files,
            })
        })
        .collect();

    let output = json!({
        "contracts": entries,
        "summary": {
            "contract_count": contracts.len(),
            "with_payloads_from_file": count_with_files(contracts),
        }
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn count_with_files(contracts: &[ContractMetadata]) -> usize {
    contracts
        .iter()
        .filter(|metadata| metadata.any_payload_from_file())
        .count()
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}
