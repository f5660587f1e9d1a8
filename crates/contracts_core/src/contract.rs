//! Contract types and structures.
//!
//! This module contains the shape of a single consumer-driven contract: either
//! an HTTP request/response pair or a messaging input/output pair, each side
//! optionally carrying a [`Body`].

use serde::{Deserialize, Serialize};

/// A single consumer-driven contract.
///
/// The variant is the contract style, so an HTTP side and a messaging side can
/// never live in the same value.
///
/// # Example
///
/// ```rust
/// use contracts_core::{Body, Contract, HttpContract, Request, Response};
///
/// let contract = Contract::Http(HttpContract {
///     name: Some("fetch_foo".to_string()),
///     description: None,
///     request: Some(Request {
///         method: "GET".to_string(),
///         url: "/foo".to_string(),
///         body: Some(Body::file("main.json")),
///     }),
///     response: Some(Response {
///         status: 200,
///         body: None,
///     }),
/// });
///
/// assert!(contract.any_payload_from_file());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "style", rename_all = "lowercase")]
pub enum Contract {
    /// Synchronous request/response interaction
    Http(HttpContract),
    /// Asynchronous input/output message interaction
    Messaging(MessagingContract),
}

/// Discriminant of [`Contract`], handy for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractStyle {
    /// Request/response contract
    Http,
    /// Input/output message contract
    Messaging,
}

impl std::fmt::Display for ContractStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContractStyle::Http => write!(f, "http"),
            ContractStyle::Messaging => write!(f, "messaging"),
        }
    }
}

/// HTTP-style contract: a request and the response it should produce.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HttpContract {
    /// Optional contract name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Optional human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Request half of the interaction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<Request>,

    /// Response half of the interaction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<Response>,
}

/// Messaging-style contract: what triggers a message and what gets emitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessagingContract {
    /// Optional contract name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Optional human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Consumer-triggering half
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<InputMessage>,

    /// Producer-emitted half
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_message: Option<OutputMessage>,
}

/// Request side of an HTTP contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    /// HTTP method (e.g., "GET", "POST")
    pub method: String,

    /// Request URL or path
    pub url: String,

    /// Optional request payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Body>,
}

/// Response side of an HTTP contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// HTTP status code
    pub status: u16,

    /// Optional response payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Body>,
}

/// Input side of a messaging contract.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputMessage {
    /// Name of the trigger that fires the interaction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub triggered_by: Option<String>,

    /// Destination the input message is received from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_from: Option<String>,

    /// Optional input message payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_body: Option<Body>,
}

/// Output side of a messaging contract.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputMessage {
    /// Destination the message is sent to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sent_to: Option<String>,

    /// Optional output message payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Body>,
}

/// Payload of a contract side.
///
/// A body is either given inline or points at an external file whose content
/// stands in for the body at verification time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Body {
    /// Inline content
    Literal(LiteralBody),
    /// Reference to an external file
    File(FileBody),
}

/// Inline body content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiteralBody {
    /// Plain string content
    Text(String),
    /// Mapping or sequence content
    Structured(serde_json::Value),
    /// Matcher expression (e.g., a regular expression)
    Matcher(String),
}

/// Reference to a file holding the body content.
///
/// Only the path is stored. The file itself is never opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileBody {
    /// Path relative to the contract definition
    pub path: String,

    /// How the file content should be interpreted
    #[serde(default)]
    pub encoding: FileEncoding,
}

/// Interpretation of a file-backed body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileEncoding {
    /// Content is read as text
    #[default]
    Text,
    /// Content is read as raw bytes
    Binary,
}

/// One of the four places a contract can carry a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayloadSlot {
    /// `request.body`
    RequestBody,
    /// `response.body`
    ResponseBody,
    /// `input.message_body`
    InputMessageBody,
    /// `output_message.body`
    OutputMessageBody,
}

impl std::fmt::Display for PayloadSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PayloadSlot::RequestBody => "request body",
            PayloadSlot::ResponseBody => "response body",
            PayloadSlot::InputMessageBody => "input message body",
            PayloadSlot::OutputMessageBody => "output message body",
        };
        f.write_str(name)
    }
}

/// A present body together with the slot it occupies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Payload<'a> {
    /// Where the body lives in the contract
    pub slot: PayloadSlot,
    /// The body itself
    pub body: &'a Body,
}

impl Body {
    /// Creates a plain text body.
    pub fn text(content: impl Into<String>) -> Self {
        Body::Literal(LiteralBody::Text(content.into()))
    }

    /// Creates a structured body from a JSON value.
    pub fn structured(value: serde_json::Value) -> Self {
        Body::Literal(LiteralBody::Structured(value))
    }

    /// Creates a matcher body.
    pub fn matcher(expression: impl Into<String>) -> Self {
        Body::Literal(LiteralBody::Matcher(expression.into()))
    }

    /// Creates a body read from a text file.
    pub fn file(path: impl Into<String>) -> Self {
        Body::File(FileBody {
            path: path.into(),
            encoding: FileEncoding::Text,
        })
    }

    /// Creates a body read from a file as raw bytes.
    pub fn file_as_bytes(path: impl Into<String>) -> Self {
        Body::File(FileBody {
            path: path.into(),
            encoding: FileEncoding::Binary,
        })
    }

    /// Returns `true` if the content comes from an external file.
    pub fn is_from_file(&self) -> bool {
        self.as_file().is_some()
    }

    /// Returns the file reference, if this is a file-backed body.
    pub fn as_file(&self) -> Option<&FileBody> {
        match self {
            Body::File(file) => Some(file),
            Body::Literal(_) => None,
        }
    }
}

impl Contract {
    /// Returns the style of this contract.
    pub fn style(&self) -> ContractStyle {
        match self {
            Contract::Http(_) => ContractStyle::Http,
            Contract::Messaging(_) => ContractStyle::Messaging,
        }
    }

    /// Returns the contract name, if any.
    pub fn name(&self) -> Option<&str> {
        match self {
            Contract::Http(http) => http.name.as_deref(),
            Contract::Messaging(messaging) => messaging.name.as_deref(),
        }
    }

    /// Returns the contract description, if any.
    pub fn description(&self) -> Option<&str> {
        match self {
            Contract::Http(http) => http.description.as_deref(),
            Contract::Messaging(messaging) => messaging.description.as_deref(),
        }
    }

    /// Returns every body present in the contract, tagged with its slot.
    ///
    /// Absent sides and sides without a body are skipped.
    pub fn payloads(&self) -> Vec<Payload<'_>> {
        let slots = match self {
            Contract::Http(HttpContract {
                request, response, ..
            }) => [
                (
                    PayloadSlot::RequestBody,
                    request.as_ref().and_then(|r| r.body.as_ref()),
                ),
                (
                    PayloadSlot::ResponseBody,
                    response.as_ref().and_then(|r| r.body.as_ref()),
                ),
            ],
            Contract::Messaging(MessagingContract {
                input,
                output_message,
                ..
            }) => [
                (
                    PayloadSlot::InputMessageBody,
                    input.as_ref().and_then(|i| i.message_body.as_ref()),
                ),
                (
                    PayloadSlot::OutputMessageBody,
                    output_message.as_ref().and_then(|o| o.body.as_ref()),
                ),
            ],
        };

        slots
            .into_iter()
            .filter_map(|(slot, body)| body.map(|body| Payload { slot, body }))
            .collect()
    }

    /// Returns the file references among the contract's payloads.
    pub fn payload_files(&self) -> Vec<(PayloadSlot, &FileBody)> {
        self.payloads()
            .into_iter()
            .filter_map(|payload| payload.body.as_file().map(|file| (payload.slot, file)))
            .collect()
    }

    /// Returns `true` if any payload slot holds a file-backed body.
    pub fn any_payload_from_file(&self) -> bool {
        self.payloads()
            .iter()
            .any(|payload| payload.body.is_from_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn http(request_body: Option<Body>, response_body: Option<Body>) -> Contract {
        Contract::Http(HttpContract {
            request: Some(Request {
                method: "GET".to_string(),
                url: "/foo".to_string(),
                body: request_body,
            }),
            response: Some(Response {
                status: 200,
                body: response_body,
            }),
            ..Default::default()
        })
    }

    #[test]
    fn test_body_constructors() {
        assert_eq!(
            Body::text("foo"),
            Body::Literal(LiteralBody::Text("foo".to_string()))
        );
        assert_eq!(
            Body::file_as_bytes("img.png").as_file().map(|f| f.encoding),
            Some(FileEncoding::Binary)
        );
        assert!(Body::file("main.json").is_from_file());
        assert!(!Body::matcher("[a-z]+").is_from_file());
        assert!(!Body::structured(json!({"a": 1})).is_from_file());
    }

    #[test]
    fn test_style() {
        assert_eq!(http(None, None).style(), ContractStyle::Http);
        assert_eq!(
            Contract::Messaging(MessagingContract::default()).style(),
            ContractStyle::Messaging
        );
        assert_eq!(ContractStyle::Messaging.to_string(), "messaging");
    }

    #[test]
    fn test_payloads_skip_absent_bodies() {
        let contract = http(None, Some(Body::text("ok")));
        let payloads = contract.payloads();

        assert_eq!(payloads.len(), 1);
        assert_eq!(payloads[0].slot, PayloadSlot::ResponseBody);
    }

    #[test]
    fn test_payloads_absent_sides() {
        let contract = Contract::Http(HttpContract::default());
        assert!(contract.payloads().is_empty());
        assert!(!contract.any_payload_from_file());

        let contract = Contract::Messaging(MessagingContract::default());
        assert!(contract.payloads().is_empty());
        assert!(!contract.any_payload_from_file());
    }

    #[test]
    fn test_payload_files_lists_every_file_slot() {
        let contract = http(Some(Body::file("req.json")), Some(Body::file_as_bytes("res.bin")));
        let files = contract.payload_files();

        assert_eq!(files.len(), 2);
        assert_eq!(files[0].0, PayloadSlot::RequestBody);
        assert_eq!(files[0].1.path, "req.json");
        assert_eq!(files[1].0, PayloadSlot::ResponseBody);
        assert_eq!(files[1].1.encoding, FileEncoding::Binary);
    }

    #[test]
    fn test_messaging_output_file() {
        let contract = Contract::Messaging(MessagingContract {
            output_message: Some(OutputMessage {
                sent_to: Some("topic".to_string()),
                body: Some(Body::file("main.json")),
            }),
            ..Default::default()
        });

        assert!(contract.any_payload_from_file());
        assert_eq!(
            contract.payload_files()[0].0,
            PayloadSlot::OutputMessageBody
        );
    }

    #[test]
    fn test_serde_tagging() {
        let contract = http(Some(Body::file("main.json")), None);
        let value = serde_json::to_value(&contract).expect("serialize");

        assert_eq!(value["style"], "http");
        assert_eq!(value["request"]["body"]["kind"], "file");
        assert_eq!(value["request"]["body"]["value"]["path"], "main.json");

        let back: Contract = serde_json::from_value(value).expect("deserialize");
        assert_eq!(back, contract);
    }

    #[test]
    fn test_payload_slot_display() {
        assert_eq!(PayloadSlot::InputMessageBody.to_string(), "input message body");
    }
}
