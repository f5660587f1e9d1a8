//! Loading contracts from disk into `ContractMetadata`.

use crate::{declares_contract, detect_format, parse_file, ParserError, Result};
use contracts_core::ContractMetadata;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// Load every contract defined in a file.
///
/// Each contract is wrapped with the file path, the number of contracts in the
/// file and its zero-based position among them.
///
/// # Example
///
/// ```no_run
/// use contracts_parser::load_metadata;
/// use std::path::Path;
///
/// for metadata in load_metadata(Path::new("contracts/orders.yml")).unwrap() {
///     println!("{} -> {}", metadata.order(), metadata.any_payload_from_file());
/// }
/// ```
pub fn load_metadata(path: &Path) -> Result<Vec<ContractMetadata>> {
    let contracts = parse_file(path)?;
    let group_size = contracts.len();
    debug!("Loaded {} contract(s) from {}", group_size, path.display());

    Ok(contracts
        .into_iter()
        .enumerate()
        .map(|(order, contract)| ContractMetadata::new(path, false, group_size, order, contract))
        .collect())
}

/// Load every contract found under a directory.
///
/// The directory is walked recursively in file name order. Files whose
/// extension is not a recognised contract format are skipped, and so are
/// files that declare no contract at all, such as payload files referenced
/// through `bodyFromFile`.
///
/// # Errors
///
/// Returns `ParserError::NotADirectory` if `dir` is not a directory, and the
/// first parse error encountered otherwise. A file that declares a contract
/// but fails to convert is an error, not a skip.
pub fn scan_directory(dir: &Path) -> Result<Vec<ContractMetadata>> {
    if !dir.is_dir() {
        return Err(ParserError::NotADirectory(dir.to_path_buf()));
    }

    let mut loaded = Vec::new();
    for entry in WalkDir::new(dir).follow_links(false).sort_by_file_name() {
        let entry = entry.map_err(|e| ParserError::IoError(e.into()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if detect_format(path).is_err() {
            debug!("Skipping non-contract file {}", path.display());
            continue;
        }
        if !declares_contract(path)? {
            debug!("Skipping {}: no contract keys", path.display());
            continue;
        }

        loaded.extend(load_metadata(path)?);
    }

    debug!(
        "Scanned {}: {} contract(s) total",
        dir.display(),
        loaded.len()
    );
    Ok(loaded)
}
