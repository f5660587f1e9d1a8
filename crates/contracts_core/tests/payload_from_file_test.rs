//! Tests for detecting file-backed payloads through `ContractMetadata`.

use contracts_core::{
    Body, Contract, ContractBuilder, ContractMetadata, InputMessageBuilder, OutputMessageBuilder,
    RequestBuilder, ResponseBuilder,
};
use serde_json::json;

fn metadata(contract: Contract) -> ContractMetadata {
    ContractMetadata::new(".", false, 1, 0, contract)
}

fn build(builder: ContractBuilder) -> Contract {
    builder.build().expect("contract should be valid")
}

#[test]
fn test_http_without_file_payload() {
    let contract = build(
        ContractBuilder::new()
            .request(RequestBuilder::new("GET", "/foo"))
            .response(ResponseBuilder::new(200)),
    );

    assert!(!metadata(contract).any_payload_from_file());
}

#[test]
fn test_messaging_without_file_payload() {
    let contract = build(
        ContractBuilder::new()
            .input(InputMessageBuilder::new().triggered_by("foo"))
            .output_message(OutputMessageBuilder::new().body(Body::text("foo"))),
    );

    assert!(!metadata(contract).any_payload_from_file());
}

#[test]
fn test_request_with_file_payload() {
    let contract = build(
        ContractBuilder::new()
            .request(RequestBuilder::new("GET", "/foo").body(Body::file("main.json")))
            .response(ResponseBuilder::new(200)),
    );

    assert!(metadata(contract).any_payload_from_file());
}

#[test]
fn test_response_with_file_payload() {
    let contract = build(
        ContractBuilder::new()
            .request(RequestBuilder::new("GET", "/foo"))
            .response(ResponseBuilder::new(200).body(Body::file("main.json"))),
    );

    assert!(metadata(contract).any_payload_from_file());
}

#[test]
fn test_input_message_with_file_payload() {
    let contract = build(
        ContractBuilder::new()
            .input(InputMessageBuilder::new().message_body(Body::file("main.json"))),
    );

    assert!(metadata(contract).any_payload_from_file());
}

#[test]
fn test_output_message_with_file_payload() {
    let contract = build(
        ContractBuilder::new()
            .output_message(OutputMessageBuilder::new().body(Body::file("main.json"))),
    );

    assert!(metadata(contract).any_payload_from_file());
}

#[test]
fn test_binary_file_payload_counts() {
    let contract = build(
        ContractBuilder::new()
            .request(RequestBuilder::new("POST", "/upload").body(Body::file_as_bytes("img.png"))),
    );

    assert!(metadata(contract).any_payload_from_file());
}

#[test]
fn test_literal_variants_never_count() {
    let contract = build(
        ContractBuilder::new()
            .request(
                RequestBuilder::new("POST", "/foo").body(Body::structured(json!({"id": [1, 2]}))),
            )
            .response(ResponseBuilder::new(201).body(Body::matcher("[0-9]+"))),
    );
    let metadata = metadata(contract);

    assert!(!metadata.any_payload_from_file());
    assert!(metadata.payload_files().is_empty());
}

#[test]
fn test_bookkeeping_is_not_consulted() {
    let contract = build(
        ContractBuilder::new()
            .request(RequestBuilder::new("GET", "/foo"))
            .response(ResponseBuilder::new(200)),
    );

    for (alternate, size, order) in [(true, 5, 4), (false, 2, 1), (true, 1, 0)] {
        let metadata = ContractMetadata::new("a/b", alternate, size, order, contract.clone());
        assert!(!metadata.any_payload_from_file());
    }
}

#[test]
fn test_repeated_calls_agree() {
    let metadata = metadata(build(
        ContractBuilder::new()
            .request(RequestBuilder::new("GET", "/foo").body(Body::file("main.json"))),
    ));

    let first = metadata.any_payload_from_file();
    for _ in 0..10 {
        assert_eq!(metadata.any_payload_from_file(), first);
    }
}

#[test]
fn test_shared_across_threads() {
    let metadata = std::sync::Arc::new(metadata(build(
        ContractBuilder::new()
            .output_message(OutputMessageBuilder::new().body(Body::file("main.json"))),
    )));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let metadata = std::sync::Arc::clone(&metadata);
            std::thread::spawn(move || metadata.any_payload_from_file())
        })
        .collect();

    for handle in handles {
        assert!(handle.join().expect("thread panicked"));
    }
}
