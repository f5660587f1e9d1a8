//! Error types for contracts.
//!
//! Inspecting a contract never fails. These errors only surface while a
//! contract is being assembled from its sides.

use thiserror::Error;

/// Result type for contract operations.
pub type Result<T> = std::result::Result<T, ContractError>;

/// Main error type for contract construction.
#[derive(Error, Debug)]
pub enum ContractError {
    /// HTTP and messaging sides were both supplied
    #[error("Contract mixes HTTP sides ({http}) with messaging sides ({messaging})")]
    MixedStyles {
        /// HTTP sides that were set
        http: String,
        /// Messaging sides that were set
        messaging: String,
    },

    /// Neither an HTTP nor a messaging side was supplied
    #[error("Contract defines no request, response, input or output message")]
    EmptyContract,

    /// A side declared both an inline body and a file body
    #[error("Side '{side}' declares both an inline body and a body from file")]
    ConflictingBody {
        /// Side carrying the conflicting bodies
        side: String,
    },

    /// A body key was written on a side that does not own it
    #[error("Side '{side}' does not accept body key '{key}'")]
    MisplacedBodyKey {
        /// Side carrying the key
        side: String,
        /// Offending key
        key: String,
    },

    /// A side is missing a required attribute
    #[error("Side '{side}' is missing required field '{field}'")]
    MissingField {
        /// Side being built
        side: String,
        /// Name of the missing attribute
        field: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ContractError::ConflictingBody {
            side: "request".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Side 'request' declares both an inline body and a body from file"
        );

        let err = ContractError::MixedStyles {
            http: "request".to_string(),
            messaging: "input".to_string(),
        };
        assert!(err.to_string().contains("request"));
        assert!(err.to_string().contains("input"));
    }
}
