// crates/reservation-client/src/client.rs
// ============================================================================
// Module: Reservation HTTP Client
// Description: Blocking client for the citizen, registration, and reservation endpoints.
// Purpose: Issue form-encoded calls and decode JSON feedback responses.
// Dependencies: reqwest, serde, serde_json, thiserror, url
// ============================================================================

//! ## Overview
//! [`ReservationClient`] sends form-encoded requests to the reservation
//! service and decodes each JSON body into an [`ApiResponse`]. Business
//! failures are not errors here: the service reports them as `feedback`
//! strings in 200 responses, and callers assert on them. [`ClientError`]
//! covers only local failures (transport, size limits, undecodable bodies,
//! absent or unknown feedback).
//! Invariants:
//! - Base URLs are `http` or `https` and carry no credentials.
//! - Registration and reservation bodies larger than [`MAX_RESPONSE_BYTES`]
//!   fail closed. Fixture resets record them as null.
//! - Each call, successful or not, is appended to the transcript.
//! - No retries; a failed call surfaces immediately.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Read;
use std::time::Duration;

use reqwest::Method;
use reqwest::blocking::Client;
use reqwest::blocking::Response;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use url::Url;

use crate::feedback::Feedback;
use crate::records::RegistrationRecord;
use crate::records::ReservationRecord;
use crate::transcript::Transcript;
use crate::transcript::TranscriptEntry;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Public deployment of the reservation service.
pub const DEFAULT_BASE_URL: &str = "https://wcg-apis.herokuapp.com";
/// Upper bound on response body size.
pub const MAX_RESPONSE_BYTES: usize = 1024 * 1024;
/// User agent sent with every request.
const USER_AGENT: &str = "reservation-client/0.1";

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Local failures raised by [`ReservationClient`].
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - Messages never include request bodies.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Base URL failed to parse or violates URL policy.
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),
    /// The underlying HTTP client could not be built.
    #[error("http client build failed: {0}")]
    ClientBuild(String),
    /// Request payload could not be encoded.
    #[error("request encoding failed: {0}")]
    Encode(String),
    /// The request never produced a response.
    #[error("http request failed: {0}")]
    Transport(String),
    /// The response body exceeded [`MAX_RESPONSE_BYTES`].
    #[error("response exceeds size limit")]
    ResponseTooLarge,
    /// The response body was not a JSON object.
    #[error("invalid json response (status {status}): {message}")]
    InvalidJson {
        /// HTTP status of the response.
        status: u16,
        /// Decoder message.
        message: String,
    },
    /// The JSON body had no string `feedback` field.
    #[error("response (status {status}) has no feedback field")]
    MissingFeedback {
        /// HTTP status of the response.
        status: u16,
    },
    /// The `feedback` string is outside the known set.
    #[error("unknown feedback: {0}")]
    UnknownFeedback(String),
}

// ============================================================================
// SECTION: Endpoints
// ============================================================================

/// Service endpoints exercised by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Endpoint {
    /// `DELETE /citizen`, fixture reset.
    Citizen,
    /// `POST /registration`.
    Registration,
    /// `POST /reservation`.
    Reservation,
}

impl Endpoint {
    /// Returns the endpoint path.
    const fn path(self) -> &'static str {
        match self {
            Self::Citizen => "/citizen",
            Self::Registration => "/registration",
            Self::Reservation => "/reservation",
        }
    }

    /// Returns the HTTP method used against the endpoint.
    const fn method(self) -> Method {
        match self {
            Self::Citizen => Method::DELETE,
            Self::Registration | Self::Reservation => Method::POST,
        }
    }
}

// ============================================================================
// SECTION: Responses
// ============================================================================

/// Decoded service response.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// `feedback` field when present and a string.
    pub feedback: Option<String>,
    /// Full JSON body.
    pub body: Value,
}

impl ApiResponse {
    /// Builds a response from a decoded JSON body.
    #[must_use]
    pub fn from_body(status: u16, body: Value) -> Self {
        let feedback = body.get("feedback").and_then(Value::as_str).map(str::to_string);
        Self {
            status,
            feedback,
            body,
        }
    }

    /// Returns the raw feedback string.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingFeedback`] when the body has no feedback.
    pub fn feedback(&self) -> Result<&str, ClientError> {
        self.feedback.as_deref().ok_or(ClientError::MissingFeedback {
            status: self.status,
        })
    }

    /// Returns the feedback as a known outcome.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingFeedback`] or [`ClientError::UnknownFeedback`].
    pub fn outcome(&self) -> Result<Feedback, ClientError> {
        let raw = self.feedback()?;
        Feedback::parse(raw).ok_or_else(|| ClientError::UnknownFeedback(raw.to_string()))
    }
}

// ============================================================================
// SECTION: Client
// ============================================================================

/// Blocking client for the reservation service.
///
/// # Invariants
/// - `base_url` has no trailing slash.
/// - Clones share one transcript.
#[derive(Debug, Clone)]
pub struct ReservationClient {
    /// Service base URL without trailing slash.
    base_url: String,
    /// Underlying blocking HTTP client.
    client: Client,
    /// Transcript of all exchanges.
    transcript: Transcript,
}

impl ReservationClient {
    /// Creates a client for `base_url` with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the URL is invalid or the client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let base_url = validate_base_url(base_url)?;
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|err| ClientError::ClientBuild(err.to_string()))?;
        Ok(Self {
            base_url,
            client,
            transcript: Transcript::default(),
        })
    }

    /// Returns the normalized base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns a snapshot of the transcript.
    #[must_use]
    pub fn transcript(&self) -> Vec<TranscriptEntry> {
        self.transcript.entries()
    }

    /// Deletes the citizen named by `record`, tolerating any status.
    ///
    /// The body is decoded when it is a readable JSON document within
    /// [`MAX_RESPONSE_BYTES`] and recorded as null otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] only when no response arrives.
    pub fn reset_citizen(&self, record: &ReservationRecord) -> Result<u16, ClientError> {
        let endpoint = Endpoint::Citizen;
        let request = encode_request(record)?;
        let response = self.send(endpoint, record, &request)?;
        let status = response.status().as_u16();
        let body = read_response_limited(response, MAX_RESPONSE_BYTES)
            .ok()
            .and_then(|body| serde_json::from_slice::<Value>(&body).ok())
            .unwrap_or(Value::Null);
        self.record(endpoint, request, Some(status), body, None);
        Ok(status)
    }

    /// Registers a citizen.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or an undecodable body.
    pub fn register(&self, record: &RegistrationRecord) -> Result<ApiResponse, ClientError> {
        self.call_json(Endpoint::Registration, record)
    }

    /// Reserves a vaccine slot.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or an undecodable body.
    pub fn reserve(&self, record: &ReservationRecord) -> Result<ApiResponse, ClientError> {
        self.call_json(Endpoint::Reservation, record)
    }

    /// Issues a call whose response must be a bounded JSON object.
    fn call_json<T: Serialize>(
        &self,
        endpoint: Endpoint,
        form: &T,
    ) -> Result<ApiResponse, ClientError> {
        let request = encode_request(form)?;
        let response = self.send(endpoint, form, &request)?;
        let status = response.status().as_u16();
        let decoded = read_response_limited(response, MAX_RESPONSE_BYTES)
            .and_then(|body| decode_object(status, &body));
        match decoded {
            Ok(value) => {
                self.record(endpoint, request, Some(status), value.clone(), None);
                Ok(ApiResponse::from_body(status, value))
            }
            Err(err) => {
                self.record(endpoint, request, Some(status), Value::Null, Some(err.to_string()));
                Err(err)
            }
        }
    }

    /// Sends the form, recording the call when no response arrives.
    fn send<T: Serialize>(
        &self,
        endpoint: Endpoint,
        form: &T,
        request: &Value,
    ) -> Result<Response, ClientError> {
        let url = format!("{}{}", self.base_url, endpoint.path());
        let result = self
            .client
            .request(endpoint.method(), url)
            .form(form)
            .send()
            .map_err(|err| ClientError::Transport(err.to_string()));
        if let Err(err) = &result {
            self.record(endpoint, request.clone(), None, Value::Null, Some(err.to_string()));
        }
        result
    }

    /// Appends an exchange to the transcript.
    fn record(
        &self,
        endpoint: Endpoint,
        request: Value,
        status: Option<u16>,
        response: Value,
        error: Option<String>,
    ) {
        self.transcript.record(
            endpoint.method().as_str(),
            endpoint.path(),
            request,
            status,
            response,
            error,
        );
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Validates and normalizes the base URL.
fn validate_base_url(raw: &str) -> Result<String, ClientError> {
    let trimmed = raw.trim();
    let url = Url::parse(trimmed).map_err(|err| ClientError::InvalidBaseUrl(err.to_string()))?;
    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(ClientError::InvalidBaseUrl(format!("unsupported scheme: {other}")));
        }
    }
    if !url.username().is_empty() || url.password().is_some() {
        return Err(ClientError::InvalidBaseUrl("credentials are not allowed".to_string()));
    }
    if url.host_str().is_none() {
        return Err(ClientError::InvalidBaseUrl("host required".to_string()));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(ClientError::InvalidBaseUrl("query and fragment are not allowed".to_string()));
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}

/// Encodes a form payload as JSON for the transcript.
fn encode_request<T: Serialize>(form: &T) -> Result<Value, ClientError> {
    serde_json::to_value(form).map_err(|err| ClientError::Encode(err.to_string()))
}

/// Decodes a body that must be a JSON object.
fn decode_object(status: u16, body: &[u8]) -> Result<Value, ClientError> {
    let value: Value = serde_json::from_slice(body).map_err(|err| ClientError::InvalidJson {
        status,
        message: err.to_string(),
    })?;
    if !value.is_object() {
        return Err(ClientError::InvalidJson {
            status,
            message: "body is not a json object".to_string(),
        });
    }
    Ok(value)
}

/// Reads the response body while enforcing a byte limit.
fn read_response_limited(response: Response, max_bytes: usize) -> Result<Vec<u8>, ClientError> {
    let max_bytes_u64 = u64::try_from(max_bytes).map_err(|_| ClientError::ResponseTooLarge)?;
    if let Some(expected) = response.content_length()
        && expected > max_bytes_u64
    {
        return Err(ClientError::ResponseTooLarge);
    }
    let mut buf = Vec::new();
    let mut handle = response.take(max_bytes_u64.saturating_add(1));
    handle
        .read_to_end(&mut buf)
        .map_err(|err| ClientError::Transport(format!("failed to read response: {err}")))?;
    if buf.len() > max_bytes {
        return Err(ClientError::ResponseTooLarge);
    }
    Ok(buf)
}
