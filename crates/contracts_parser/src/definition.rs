//! On-disk shape of a contract definition.
//!
//! Definitions are written with camelCase keys and spell file-backed bodies
//! as separate keys (`bodyFromFile`, `messageBodyFromFile`, ...). They are
//! converted into the strongly-typed [`Contract`] through the core builders.

use contracts_core::{
    Body, Contract, ContractBuilder, ContractError, InputMessageBuilder, OutputMessageBuilder,
    RequestBuilder, ResponseBuilder,
};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

/// A single contract as written in a YAML, JSON or TOML document.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractDefinition {
    pub name: Option<String>,
    pub description: Option<String>,
    pub request: Option<RequestDefinition>,
    pub response: Option<ResponseDefinition>,
    pub input: Option<InputDefinition>,
    pub output_message: Option<OutputMessageDefinition>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestDefinition {
    pub method: Option<String>,
    #[serde(alias = "urlPath")]
    pub url: Option<String>,
    pub body: Option<Value>,
    pub body_from_file: Option<String>,
    pub body_from_file_as_bytes: Option<String>,
    /// Keys this side does not model (headers, matchers, ...)
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseDefinition {
    pub status: Option<u16>,
    pub body: Option<Value>,
    pub body_from_file: Option<String>,
    pub body_from_file_as_bytes: Option<String>,
    /// Keys this side does not model (headers, matchers, ...)
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDefinition {
    pub triggered_by: Option<String>,
    pub message_from: Option<String>,
    pub message_body: Option<Value>,
    pub message_body_from_file: Option<String>,
    pub message_body_from_file_as_bytes: Option<String>,
    /// Keys this side does not model (headers, matchers, ...)
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputMessageDefinition {
    pub sent_to: Option<String>,
    pub body: Option<Value>,
    pub body_from_file: Option<String>,
    pub body_from_file_as_bytes: Option<String>,
    /// Keys this side does not model (headers, matchers, ...)
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl ContractDefinition {
    /// Converts the definition into a contract.
    ///
    /// # Errors
    ///
    /// Fails when a side declares more than one body, when a side carries a
    /// body key meant for another side, when a request or response lacks a
    /// required attribute, or when HTTP and messaging sides are mixed.
    pub fn into_contract(self) -> Result<Contract, ContractError> {
        let mut builder = ContractBuilder::new();
        if let Some(name) = self.name {
            builder = builder.name(name);
        }
        if let Some(description) = self.description {
            builder = builder.description(description);
        }

        if let Some(request) = self.request {
            check_extra_keys("request", &request.extra)?;
            let method = required("request", "method", request.method)?;
            let url = required("request", "url", request.url)?;
            let mut side = RequestBuilder::new(method, url);
            if let Some(body) = resolve_body(
                "request",
                request.body,
                request.body_from_file,
                request.body_from_file_as_bytes,
            )? {
                side = side.body(body);
            }
            builder = builder.request(side);
        }

        if let Some(response) = self.response {
            check_extra_keys("response", &response.extra)?;
            let status = required("response", "status", response.status)?;
            let mut side = ResponseBuilder::new(status);
            if let Some(body) = resolve_body(
                "response",
                response.body,
                response.body_from_file,
                response.body_from_file_as_bytes,
            )? {
                side = side.body(body);
            }
            builder = builder.response(side);
        }

        if let Some(input) = self.input {
            check_extra_keys("input", &input.extra)?;
            let mut side = InputMessageBuilder::new();
            if let Some(trigger) = input.triggered_by {
                side = side.triggered_by(trigger);
            }
            if let Some(from) = input.message_from {
                side = side.message_from(from);
            }
            if let Some(body) = resolve_body(
                "input",
                input.message_body,
                input.message_body_from_file,
                input.message_body_from_file_as_bytes,
            )? {
                side = side.message_body(body);
            }
            builder = builder.input(side);
        }

        if let Some(output) = self.output_message {
            check_extra_keys("outputMessage", &output.extra)?;
            let mut side = OutputMessageBuilder::new();
            if let Some(sent_to) = output.sent_to {
                side = side.sent_to(sent_to);
            }
            if let Some(body) = resolve_body(
                "outputMessage",
                output.body,
                output.body_from_file,
                output.body_from_file_as_bytes,
            )? {
                side = side.body(body);
            }
            builder = builder.output_message(side);
        }

        builder.build()
    }
}

fn required<T>(side: &str, field: &str, value: Option<T>) -> Result<T, ContractError> {
    value.ok_or_else(|| ContractError::MissingField {
        side: side.to_string(),
        field: field.to_string(),
    })
}

/// Rejects body keys that belong to another side; other unmodelled keys are
/// ignored.
fn check_extra_keys(side: &str, extra: &BTreeMap<String, Value>) -> Result<(), ContractError> {
    for key in extra.keys() {
        if key.to_ascii_lowercase().contains("body") {
            return Err(ContractError::MisplacedBodyKey {
                side: side.to_string(),
                key: key.clone(),
            });
        }
        debug!("Ignoring key '{}' on {}", key, side);
    }
    Ok(())
}

/// Picks the single body declared on a side, if any.
fn resolve_body(
    side: &str,
    inline: Option<Value>,
    from_file: Option<String>,
    from_file_as_bytes: Option<String>,
) -> Result<Option<Body>, ContractError> {
    // An explicit `body: null` counts as no body.
    let inline = inline.filter(|value| !value.is_null());

    match (inline, from_file, from_file_as_bytes) {
        (None, None, None) => Ok(None),
        (Some(value), None, None) => Ok(Some(literal_body(value))),
        (None, Some(path), None) => Ok(Some(Body::file(path))),
        (None, None, Some(path)) => Ok(Some(Body::file_as_bytes(path))),
        _ => Err(ContractError::ConflictingBody {
            side: side.to_string(),
        }),
    }
}

fn literal_body(value: Value) -> Body {
    match value {
        Value::String(text) => Body::text(text),
        Value::Object(map) => match single_matcher(&map) {
            Some(expression) => Body::matcher(expression),
            None => Body::structured(Value::Object(map)),
        },
        Value::Array(_) => Body::structured(value),
        scalar => Body::text(scalar.to_string()),
    }
}

/// Recognises `{ matches: "<regex>" }`.
fn single_matcher(map: &serde_json::Map<String, Value>) -> Option<String> {
    if map.len() != 1 {
        return None;
    }
    map.get("matches")
        .and_then(Value::as_str)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts_core::{FileEncoding, LiteralBody};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_resolve_body_variants() {
        assert_eq!(resolve_body("request", None, None, None).unwrap(), None);
        assert_eq!(
            resolve_body("request", Some(json!("foo")), None, None).unwrap(),
            Some(Body::text("foo"))
        );
        assert_eq!(
            resolve_body("request", None, Some("a.json".to_string()), None).unwrap(),
            Some(Body::file("a.json"))
        );

        let body = resolve_body("request", None, None, Some("a.bin".to_string()))
            .unwrap()
            .expect("body should be present");
        assert_eq!(
            body.as_file().map(|f| f.encoding),
            Some(FileEncoding::Binary)
        );
    }

    #[test]
    fn test_resolve_body_null_is_absent() {
        assert_eq!(resolve_body("response", Some(Value::Null), None, None).unwrap(), None);
    }

    #[test]
    fn test_resolve_body_conflict() {
        let result = resolve_body(
            "response",
            Some(json!({"id": 1})),
            Some("a.json".to_string()),
            None,
        );
        assert!(matches!(
            result,
            Err(ContractError::ConflictingBody { ref side }) if side == "response"
        ));
    }

    #[test]
    fn test_literal_body_kinds() {
        assert_eq!(
            literal_body(json!({"matches": "[0-9]+"})),
            Body::Literal(LiteralBody::Matcher("[0-9]+".to_string()))
        );
        assert_eq!(
            literal_body(json!([1, 2])),
            Body::Literal(LiteralBody::Structured(json!([1, 2])))
        );
        assert_eq!(
            literal_body(json!({"matches": "x", "other": 1})),
            Body::Literal(LiteralBody::Structured(json!({"matches": "x", "other": 1})))
        );
        assert_eq!(literal_body(json!(42)), Body::text("42"));
    }

    #[test]
    fn test_file_key_on_wrong_side_is_rejected() {
        let definition: ContractDefinition = serde_json::from_value(json!({
            "outputMessage": {"messageBodyFromFile": "main.json"}
        }))
        .expect("definition should deserialize");

        match definition.into_contract() {
            Err(ContractError::MisplacedBodyKey { side, key }) => {
                assert_eq!(side, "outputMessage");
                assert_eq!(key, "messageBodyFromFile");
            }
            other => panic!("Expected MisplacedBodyKey, got {:?}", other),
        }
    }

    #[test]
    fn test_unmodelled_keys_are_ignored() {
        let definition: ContractDefinition = serde_json::from_value(json!({
            "request": {
                "method": "PUT",
                "url": "/foo",
                "headers": {"Content-Type": "application/json"},
                "bodyFromFile": "main.json"
            },
            "response": {"status": 204, "matchers": {"headers": []}}
        }))
        .expect("definition should deserialize");

        let contract = definition.into_contract().expect("contract should be valid");
        assert!(contract.any_payload_from_file());
    }

    #[test]
    fn test_missing_request_method() {
        let definition = ContractDefinition {
            request: Some(RequestDefinition {
                url: Some("/foo".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };

        assert!(matches!(
            definition.into_contract(),
            Err(ContractError::MissingField { ref field, .. }) if field == "method"
        ));
    }
}
