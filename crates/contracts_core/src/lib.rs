//! # Contracts Core
//!
//! Core data structures for consumer-driven contracts and the payload
//! sourcing check built on them.
//!
//! A contract describes one HTTP interaction (request and response) or one
//! messaging interaction (input and output message). Each side may carry a
//! body, given either inline or as a reference to an external file.
//!
//! ## Key Concepts
//!
//! - **Contract**: An HTTP or messaging interaction, never both
//! - **Body**: Literal content or a file reference
//! - **ContractMetadata**: A contract plus its source location and position
//!
//! ## Example
//!
//! ```rust
//! use contracts_core::{Body, ContractBuilder, ContractMetadata, InputMessageBuilder};
//!
//! let contract = ContractBuilder::new()
//!     .input(InputMessageBuilder::new().message_body(Body::file("main.json")))
//!     .build()
//!     .unwrap();
//!
//! let metadata = ContractMetadata::new("contracts", false, 1, 0, contract);
//! assert!(metadata.any_payload_from_file());
//! ```

pub mod builder;
pub mod contract;
pub mod error;
pub mod metadata;

pub use builder::*;
pub use contract::*;
pub use error::*;
pub use metadata::*;
