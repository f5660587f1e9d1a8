//! Contract metadata.
//!
//! Wraps a [`Contract`] together with where it was defined and its position
//! among the contracts defined at that location.

use std::path::{Path, PathBuf};

use crate::{Contract, FileBody, PayloadSlot};

/// A contract plus the bookkeeping collected while loading it.
///
/// Immutable once constructed; the metadata exclusively owns its contract.
///
/// # Example
///
/// ```rust
/// use contracts_core::{Body, ContractBuilder, ContractMetadata, ResponseBuilder, RequestBuilder};
///
/// let contract = ContractBuilder::new()
///     .request(RequestBuilder::new("GET", "/foo"))
///     .response(ResponseBuilder::new(200).body(Body::file("main.json")))
///     .build()
///     .unwrap();
///
/// let metadata = ContractMetadata::new("contracts/foo.yml", false, 1, 0, contract);
/// assert!(metadata.any_payload_from_file());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ContractMetadata {
    path: PathBuf,
    alternate_format: bool,
    group_size: usize,
    order: usize,
    contract: Contract,
}

impl ContractMetadata {
    /// Creates metadata for a loaded contract.
    ///
    /// # Arguments
    ///
    /// * `path` - Location the contract was defined at
    /// * `alternate_format` - Whether the contract uses the alternate stub format
    /// * `group_size` - Number of contracts defined at `path`
    /// * `order` - Zero-based index of this contract among them
    /// * `contract` - The contract itself
    pub fn new(
        path: impl Into<PathBuf>,
        alternate_format: bool,
        group_size: usize,
        order: usize,
        contract: Contract,
    ) -> Self {
        Self {
            path: path.into(),
            alternate_format,
            group_size,
            order,
            contract,
        }
    }

    /// Location the contract was defined at.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the contract uses the alternate stub format.
    pub fn alternate_format(&self) -> bool {
        self.alternate_format
    }

    /// Number of contracts defined at the same location.
    pub fn group_size(&self) -> usize {
        self.group_size
    }

    /// Zero-based index of this contract at its location.
    pub fn order(&self) -> usize {
        self.order
    }

    /// The wrapped contract.
    pub fn contract(&self) -> &Contract {
        &self.contract
    }

    /// Returns `true` if any request, response, input or output message body
    /// is read from a file.
    pub fn any_payload_from_file(&self) -> bool {
        self.contract.any_payload_from_file()
    }

    /// Lists the file references behind file-backed payloads.
    pub fn payload_files(&self) -> Vec<(PayloadSlot, &FileBody)> {
        self.contract.payload_files()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Body, ContractBuilder, InputMessageBuilder, RequestBuilder, ResponseBuilder};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_accessors() {
        let contract = ContractBuilder::new()
            .input(InputMessageBuilder::new().triggered_by("foo"))
            .build()
            .expect("valid contract");
        let metadata = ContractMetadata::new("contracts/a.yml", true, 3, 2, contract.clone());

        assert_eq!(metadata.path(), Path::new("contracts/a.yml"));
        assert!(metadata.alternate_format());
        assert_eq!(metadata.group_size(), 3);
        assert_eq!(metadata.order(), 2);
        assert_eq!(metadata.contract(), &contract);
    }

    #[test]
    fn test_payload_files_matches_predicate() {
        let contract = ContractBuilder::new()
            .request(RequestBuilder::new("GET", "/foo").body(Body::text("{}")))
            .response(ResponseBuilder::new(200).body(Body::file("main.json")))
            .build()
            .expect("valid contract");
        let metadata = ContractMetadata::new(".", false, 1, 0, contract);

        let files = metadata.payload_files();
        assert!(metadata.any_payload_from_file());
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].0, PayloadSlot::ResponseBody);
        assert_eq!(files[0].1.path, "main.json");
    }
}
