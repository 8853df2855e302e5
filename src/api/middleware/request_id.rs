//! `x-request-id` middleware.
//!
//! Incoming requests without an id get a fresh UUID; the id is copied onto the
//! response so clients can correlate it with server logs.

use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};

/// Assigns an `x-request-id` header to requests that lack one.
///
/// Must wrap the tracing layer so the id is visible in request spans.
pub fn set_layer() -> SetRequestIdLayer<MakeRequestUuid> {
    SetRequestIdLayer::x_request_id(MakeRequestUuid)
}

/// Copies the request's `x-request-id` onto the response.
pub fn propagate_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::x_request_id()
}
