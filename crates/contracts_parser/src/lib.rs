//! Parser for contract definitions (YAML/JSON/TOML formats).
//!
//! This module parses contract definition files into strongly-typed
//! [`Contract`] values and wraps them in
//! [`ContractMetadata`](contracts_core::ContractMetadata).
//!
//! A YAML file may hold several contracts as separate documents, and a JSON
//! file may hold an array of contracts.
//!
//! # Example
//!
//! ```rust
//! use contracts_parser::parse_yaml;
//!
//! let yaml = r#"
//! request:
//!   method: GET
//!   url: /foo
//!   bodyFromFile: request.json
//! response:
//!   status: 200
//! "#;
//!
//! let contracts = parse_yaml(yaml).expect("Failed to parse contract");
//! assert!(contracts[0].any_payload_from_file());
//! ```

mod definition;
mod loader;

pub use definition::{
    ContractDefinition, InputDefinition, OutputMessageDefinition, RequestDefinition,
    ResponseDefinition,
};
pub use loader::{load_metadata, scan_directory};

use contracts_core::{Contract, ContractError};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during contract parsing.
#[derive(Debug, Error)]
pub enum ParserError {
    /// YAML parsing or deserialization failed
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml_ng::Error),

    /// JSON parsing or deserialization failed
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// TOML parsing or deserialization failed
    #[error("Failed to parse TOML: {0}")]
    TomlError(String),

    /// File I/O error
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Unsupported file format
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Invalid file extension
    #[error("Invalid or missing file extension")]
    InvalidExtension,

    /// A definition parsed but does not describe a valid contract
    #[error("Invalid contract at index {index}: {source}")]
    InvalidContract {
        /// Zero-based position of the contract in its file
        index: usize,
        /// Underlying construction error
        source: ContractError,
    },

    /// Directory scanning was pointed at something else
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;

/// Supported contract file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractFormat {
    /// YAML format (.yml, .yaml)
    Yaml,
    /// JSON format (.json)
    Json,
    /// TOML format (.toml)
    Toml,
}

/// Parse every contract from a YAML string.
///
/// Each YAML document holds one contract. Empty documents (a trailing `---`
/// or a document holding only comments) are skipped and do not count towards
/// contract indices.
///
/// # Example
///
/// ```rust
/// use contracts_parser::parse_yaml;
///
/// let yaml = r#"
/// input:
///   triggeredBy: foo()
/// ---
/// outputMessage:
///   sentTo: orders
///   bodyFromFile: order.json
/// "#;
///
/// let contracts = parse_yaml(yaml).unwrap();
/// assert_eq!(contracts.len(), 2);
/// assert!(!contracts[0].any_payload_from_file());
/// assert!(contracts[1].any_payload_from_file());
/// ```
pub fn parse_yaml(content: &str) -> Result<Vec<Contract>> {
    let definitions = yaml_documents(content)?
        .into_iter()
        .map(serde_yaml_ng::from_value::<ContractDefinition>)
        .collect::<std::result::Result<Vec<_>, _>>()?;
    into_contracts(definitions)
}

fn yaml_documents(content: &str) -> Result<Vec<serde_yaml_ng::Value>> {
    let mut documents = Vec::new();
    for document in serde_yaml_ng::Deserializer::from_str(content) {
        let value = serde_yaml_ng::Value::deserialize(document)?;
        if !value.is_null() {
            documents.push(value);
        }
    }
    Ok(documents)
}

/// Parse every contract from a JSON string.
///
/// The document is either a single contract object or an array of them.
pub fn parse_json(content: &str) -> Result<Vec<Contract>> {
    let definitions = match serde_json::from_str::<serde_json::Value>(content)? {
        serde_json::Value::Array(items) => items
            .into_iter()
            .map(serde_json::from_value)
            .collect::<std::result::Result<Vec<ContractDefinition>, _>>()?,
        single => vec![serde_json::from_value(single)?],
    };
    into_contracts(definitions)
}

/// Parse a contract from a TOML string.
///
/// TOML files hold exactly one contract.
pub fn parse_toml(content: &str) -> Result<Vec<Contract>> {
    let definition: ContractDefinition =
        toml::from_str(content).map_err(|e| ParserError::TomlError(e.to_string()))?;
    into_contracts(vec![definition])
}

fn into_contracts(definitions: Vec<ContractDefinition>) -> Result<Vec<Contract>> {
    definitions
        .into_iter()
        .enumerate()
        .map(|(index, definition)| {
            definition
                .into_contract()
                .map_err(|source| ParserError::InvalidContract { index, source })
        })
        .collect()
}

/// Top-level keys that mark a document as a contract definition.
pub const CONTRACT_KEYS: [&str; 4] = ["request", "response", "input", "outputMessage"];

/// Check whether a file declares at least one contract.
///
/// A file declares a contract when one of its documents (or, for a JSON
/// array, one of its elements) has a top-level key from [`CONTRACT_KEYS`].
/// Payload files such as `main.json` sitting next to contracts do not.
///
/// # Errors
///
/// Fails on unsupported extensions, I/O errors and syntax errors.
pub fn declares_contract(path: &Path) -> Result<bool> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;

    let declares = match format {
        ContractFormat::Yaml => yaml_documents(&content)?.iter().any(|document| {
            CONTRACT_KEYS
                .iter()
                .any(|key| document.get(*key).is_some())
        }),
        ContractFormat::Json => {
            let value: serde_json::Value = serde_json::from_str(&content)?;
            let has_keys = |item: &serde_json::Value| {
                CONTRACT_KEYS.iter().any(|key| item.get(*key).is_some())
            };
            match &value {
                serde_json::Value::Array(items) => items.iter().any(has_keys),
                other => has_keys(other),
            }
        }
        ContractFormat::Toml => {
            let table: toml::Table =
                toml::from_str(&content).map_err(|e| ParserError::TomlError(e.to_string()))?;
            CONTRACT_KEYS.iter().any(|key| table.contains_key(*key))
        }
    };
    Ok(declares)
}

/// Detect the contract format from a file path based on its extension.
///
/// # Supported Extensions
///
/// * `.yaml`, `.yml` → `ContractFormat::Yaml`
/// * `.json` → `ContractFormat::Json`
/// * `.toml` → `ContractFormat::Toml`
///
/// # Errors
///
/// Returns `ParserError::InvalidExtension` if the file has no extension.
/// Returns `ParserError::UnsupportedFormat` if the extension is not recognized.
pub fn detect_format(path: &Path) -> Result<ContractFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(ParserError::InvalidExtension)?;

    match extension.to_lowercase().as_str() {
        "yaml" | "yml" => Ok(ContractFormat::Yaml),
        "json" => Ok(ContractFormat::Json),
        "toml" => Ok(ContractFormat::Toml),
        other => Err(ParserError::UnsupportedFormat(other.to_string())),
    }
}

/// Parse every contract in a file with automatic format detection.
///
/// # Example
///
/// ```no_run
/// use contracts_parser::parse_file;
/// use std::path::Path;
///
/// let contracts = parse_file(Path::new("contracts/shouldReturnFoo.yml")).unwrap();
/// println!("Loaded {} contracts", contracts.len());
/// ```
pub fn parse_file(path: &Path) -> Result<Vec<Contract>> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;

    match format {
        ContractFormat::Yaml => parse_yaml(&content),
        ContractFormat::Json => parse_json(&content),
        ContractFormat::Toml => parse_toml(&content),
    }
}
