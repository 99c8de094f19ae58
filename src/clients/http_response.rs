//! HTTP response envelope and response validation.
//!
//! This module provides the [`HttpResponse`] type returned by the transport
//! adapter and the validator that turns an envelope into either its body or
//! a typed failure.

use serde_json::Value;

use crate::clients::errors::RequestError;

/// An HTTP response envelope from the Airtable API.
///
/// The transport adapter returns an envelope for every received response,
/// including non-2xx statuses; interpreting the status is the validator's
/// job. Envelopes are ephemeral: they are consumed by [`validate`](Self::validate)
/// immediately after the round trip.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The status text accompanying the code (e.g. "OK", "Not Found").
    pub status_text: String,
    /// The parsed JSON response body.
    pub body: Value,
}

impl HttpResponse {
    /// Creates a new response envelope.
    #[must_use]
    pub const fn new(code: u16, status_text: String, body: Value) -> Self {
        Self {
            code,
            status_text,
            body,
        }
    }

    /// Returns `true` if the response status is 200.
    ///
    /// The Airtable record endpoints answer every success with 200; other
    /// 2xx codes are not part of the contract and fall through to the
    /// taxonomy as unexpected.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code == 200
    }

    /// Validates the envelope, returning the body on success.
    ///
    /// This function is pure and deterministic: it performs no I/O and
    /// depends only on the envelope's contents.
    ///
    /// # Errors
    ///
    /// For any non-200 status, returns [`RequestError::Api`]. The message is
    /// the server-supplied diagnostic when the body carries
    /// `{"error": {"message": ...}}`; otherwise it is the fixed text for the
    /// status code (see [`status_condition`]).
    pub fn validate(self) -> Result<Value, RequestError> {
        if self.is_ok() {
            return Ok(self.body);
        }

        // Server-supplied diagnostics take precedence over the taxonomy.
        let server_message = self
            .body
            .get("error")
            .and_then(|error| error.get("message"))
            .and_then(Value::as_str)
            .map(ToString::to_string);

        Err(RequestError::Api {
            status: self.code,
            message: server_message
                .unwrap_or_else(|| status_condition(self.code).to_string()),
        })
    }
}

/// Maps a non-200 status code to its fixed error message.
#[must_use]
pub const fn status_condition(code: u16) -> &'static str {
    match code {
        401 => "Incorrect API Key.",
        403 => "Not authorized.",
        404 => "Table or record not found.",
        413 => "Request body is too large.",
        422 => "Operation cannot be processed. Do the field names match?",
        429 => "Too many requests to the Airtable server.",
        500 => "Airtable server error.",
        503 => "Airtable service unavailable.",
        _ => "Unexpected error.",
    }
}
