//! HTTP transport types for Airtable API communication.
//!
//! This module provides the foundational transport layer for making
//! authenticated requests to the Airtable API. It handles the network round
//! trip, response buffering and parsing, and status-code validation.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async transport adapter (one round trip per call)
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, PATCH, DELETE)
//! - [`HttpResponse`]: A parsed response envelope; its
//!   [`validate`](HttpResponse::validate) method is the response validator
//! - [`RequestError`] / [`InvalidRequestError`]: Typed failures
//! - [`RetryPolicy`]: Pluggable retry behavior for batch requests
//!
//! # Layering
//!
//! The transport adapter never interprets status codes; it returns an
//! envelope for every received response. The validator maps non-200
//! envelopes to the fixed error taxonomy, preferring a server-supplied
//! `error.message` when one is present. Callers above this layer
//! ([`crate::AirtableClient`]) compose `send` + `validate` + deserialize.

mod errors;
mod http_client;
mod http_response;
mod retry;

pub use errors::{InvalidRequestError, RequestError};
pub use http_client::{HttpClient, HttpMethod, REQUEST_TIMEOUT, SDK_VERSION};
pub use http_response::{status_condition, HttpResponse};
pub use retry::{RetryPolicy, RETRY_BACKOFF};
