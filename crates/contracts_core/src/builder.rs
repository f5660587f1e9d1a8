//! Builder pattern for creating contracts.
//!
//! This module provides ergonomic builders for assembling a contract side by
//! side with a fluent API. The contract style is decided by which sides are
//! supplied.

use crate::{
    Body, Contract, ContractError, HttpContract, InputMessage, MessagingContract, OutputMessage,
    Request, Response, Result,
};

/// Builder for creating a `Contract`.
///
/// # Example
///
/// ```rust
/// use contracts_core::{Body, ContractBuilder, RequestBuilder, ResponseBuilder};
///
/// let contract = ContractBuilder::new()
///     .name("fetch_foo")
///     .request(RequestBuilder::new("GET", "/foo").body(Body::file("main.json")))
///     .response(ResponseBuilder::new(200))
///     .build()
///     .unwrap();
///
/// assert!(contract.any_payload_from_file());
/// ```
#[derive(Debug, Default)]
pub struct ContractBuilder {
    name: Option<String>,
    description: Option<String>,
    request: Option<Request>,
    response: Option<Response>,
    input: Option<InputMessage>,
    output_message: Option<OutputMessage>,
}

impl ContractBuilder {
    /// Creates an empty contract builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the contract name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the contract description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the HTTP request side.
    pub fn request(mut self, request: RequestBuilder) -> Self {
        self.request = Some(request.build());
        self
    }

    /// Sets the HTTP response side.
    pub fn response(mut self, response: ResponseBuilder) -> Self {
        self.response = Some(response.build());
        self
    }

    /// Sets the messaging input side.
    pub fn input(mut self, input: InputMessageBuilder) -> Self {
        self.input = Some(input.build());
        self
    }

    /// Sets the messaging output side.
    pub fn output_message(mut self, output: OutputMessageBuilder) -> Self {
        self.output_message = Some(output.build());
        self
    }

    /// Builds the contract.
    ///
    /// # Errors
    ///
    /// Returns `ContractError::MixedStyles` if HTTP and messaging sides are
    /// both set, and `ContractError::EmptyContract` if no side is set.
    pub fn build(self) -> Result<Contract> {
        let http_sides = side_names(&[
            ("request", self.request.is_some()),
            ("response", self.response.is_some()),
        ]);
        let messaging_sides = side_names(&[
            ("input", self.input.is_some()),
            ("output_message", self.output_message.is_some()),
        ]);

        match (http_sides.is_empty(), messaging_sides.is_empty()) {
            (false, false) => Err(ContractError::MixedStyles {
                http: http_sides.join(", "),
                messaging: messaging_sides.join(", "),
            }),
            (true, true) => Err(ContractError::EmptyContract),
            (false, true) => Ok(Contract::Http(HttpContract {
                name: self.name,
                description: self.description,
                request: self.request,
                response: self.response,
            })),
            (true, false) => Ok(Contract::Messaging(MessagingContract {
                name: self.name,
                description: self.description,
                input: self.input,
                output_message: self.output_message,
            })),
        }
    }
}

fn side_names(sides: &[(&'static str, bool)]) -> Vec<&'static str> {
    sides
        .iter()
        .filter(|(_, present)| *present)
        .map(|(name, _)| *name)
        .collect()
}

/// Builder for creating a `Request`.
#[derive(Debug)]
pub struct RequestBuilder {
    method: String,
    url: String,
    body: Option<Body>,
}

impl RequestBuilder {
    /// Creates a new request builder.
    ///
    /// # Arguments
    ///
    /// * `method` - HTTP method
    /// * `url` - Request URL or path
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            body: None,
        }
    }

    /// Sets the request body.
    pub fn body(mut self, body: Body) -> Self {
        self.body = Some(body);
        self
    }

    /// Builds the request.
    pub fn build(self) -> Request {
        Request {
            method: self.method,
            url: self.url,
            body: self.body,
        }
    }
}

/// Builder for creating a `Response`.
#[derive(Debug)]
pub struct ResponseBuilder {
    status: u16,
    body: Option<Body>,
}

impl ResponseBuilder {
    /// Creates a new response builder with the given status code.
    pub fn new(status: u16) -> Self {
        Self { status, body: None }
    }

    /// Sets the response body.
    pub fn body(mut self, body: Body) -> Self {
        self.body = Some(body);
        self
    }

    /// Builds the response.
    pub fn build(self) -> Response {
        Response {
            status: self.status,
            body: self.body,
        }
    }
}

/// Builder for creating an `InputMessage`.
#[derive(Debug, Default)]
pub struct InputMessageBuilder {
    triggered_by: Option<String>,
    message_from: Option<String>,
    message_body: Option<Body>,
}

impl InputMessageBuilder {
    /// Creates a new input message builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the trigger that fires the interaction.
    pub fn triggered_by(mut self, trigger: impl Into<String>) -> Self {
        self.triggered_by = Some(trigger.into());
        self
    }

    /// Sets the destination the message is received from.
    pub fn message_from(mut self, destination: impl Into<String>) -> Self {
        self.message_from = Some(destination.into());
        self
    }

    /// Sets the input message body.
    pub fn message_body(mut self, body: Body) -> Self {
        self.message_body = Some(body);
        self
    }

    /// Builds the input message.
    pub fn build(self) -> InputMessage {
        InputMessage {
            triggered_by: self.triggered_by,
            message_from: self.message_from,
            message_body: self.message_body,
        }
    }
}

/// Builder for creating an `OutputMessage`.
#[derive(Debug, Default)]
pub struct OutputMessageBuilder {
    sent_to: Option<String>,
    body: Option<Body>,
}

impl OutputMessageBuilder {
    /// Creates a new output message builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the destination the message is sent to.
    pub fn sent_to(mut self, destination: impl Into<String>) -> Self {
        self.sent_to = Some(destination.into());
        self
    }

    /// Sets the output message body.
    pub fn body(mut self, body: Body) -> Self {
        self.body = Some(body);
        self
    }

    /// Builds the output message.
    pub fn build(self) -> OutputMessage {
        OutputMessage {
            sent_to: self.sent_to,
            body: self.body,
        }
    }
}
