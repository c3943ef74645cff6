//! Maps service statuses onto harness errors.

use crate::wire;

use spanner_harness_core::Error;

/// Canonical RPC codes the harness cares about.
const NOT_FOUND: i32 = 5;
const ALREADY_EXISTS: i32 = 6;

/// Error for a non-2xx HTTP response.
pub(crate) fn from_http(http_status: u16, body: &str) -> Error {
    let status = parse_error_body(body);
    let message = status
        .as_ref()
        .map(|status| status.message.clone())
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| body.trim().to_string());

    let rpc_code = status.as_ref().map(|status| status.code);

    match (http_status, rpc_code) {
        (409, _) | (_, Some(ALREADY_EXISTS)) => Error::already_exists(message),
        (404, _) | (_, Some(NOT_FOUND)) => Error::not_found(message),
        _ => Error::remote_failure(i32::from(http_status), message),
    }
}

/// Error for a long-running operation that finished unsuccessfully.
pub(crate) fn from_operation(status: wire::Status) -> Error {
    match status.code {
        ALREADY_EXISTS => Error::already_exists(status.message),
        NOT_FOUND => Error::not_found(status.message),
        code => Error::remote_failure(code, status.message),
    }
}

/// The gateway answers with either a bare status
/// (`{"code": 6, "message": ".."}`) or the Google API envelope
/// (`{"error": {"code": 409, "message": "..", "status": "ALREADY_EXISTS"}}`).
/// Both are normalized to an RPC status.
fn parse_error_body(body: &str) -> Option<wire::Status> {
    let body: wire::ErrorBody = serde_json::from_str(body).ok()?;

    match body.error {
        Some(envelope) => {
            let code = match envelope.status.as_deref() {
                Some("ALREADY_EXISTS") => ALREADY_EXISTS,
                Some("NOT_FOUND") => NOT_FOUND,
                _ => envelope.code,
            };

            Some(wire::Status {
                code,
                message: envelope.message,
            })
        }
        None => Some(wire::Status {
            code: body.code?,
            message: body.message.unwrap_or_default(),
        }),
    }
}
