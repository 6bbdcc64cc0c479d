//! Outgoing HTTP response type.
//!
//! A thin layer over `http::Response` so handlers stay free of hyper types.
//! Build one with [`Response::text`] or [`Response::status`]; the server
//! hands it to hyper via `into_inner`.

use bytes::Bytes;
use http::StatusCode;
use http::header::{self, HeaderValue};
use http_body_util::Full;

/// An outgoing HTTP response.
pub struct Response {
    pub(crate) status: StatusCode,
    pub(crate) content_type: Option<&'static str>,
    pub(crate) body: Bytes,
}

impl Response {
    /// `200 OK` — `text/plain; charset=utf-8`.
    pub fn text(body: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            content_type: Some("text/plain; charset=utf-8"),
            body: Bytes::from(body.into()),
        }
    }

    /// Response with the given status and no body.
    pub fn status(code: StatusCode) -> Self {
        Self { status: code, content_type: None, body: Bytes::new() }
    }

    pub(crate) fn into_inner(self) -> http::Response<Full<Bytes>> {
        let mut response = http::Response::new(Full::new(self.body));
        *response.status_mut() = self.status;
        if let Some(content_type) = self.content_type {
            // Only static, known-valid values reach this point.
            response
                .headers_mut()
                .insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
        }
        response
    }
}
