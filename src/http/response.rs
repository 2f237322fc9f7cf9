//! HTTP response building module
//!
//! Builders for the two responses the server ever produces: a JSON body
//! and the default not-found page.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{CONTENT_LENGTH, CONTENT_TYPE, ETAG, HeaderValue};
use hyper::{Response, StatusCode};
use serde::Serialize;

use super::cache;

const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";
const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// Build a 200 JSON response with a weak `ETag`
///
/// HEAD requests keep the headers and drop the body. A matching
/// `If-None-Match` yields 304 with only the `ETag` header.
pub fn build_json_response<T: Serialize>(
    body: &T,
    is_head: bool,
    if_none_match: Option<&str>,
) -> Response<Full<Bytes>> {
    let json = match serde_json::to_vec(body) {
        Ok(j) => j,
        Err(e) => {
            crate::logger::log_error(&format!("Failed to serialize response: {e}"));
            return build_500_response();
        }
    };

    let etag = cache::generate_weak_etag(&json);
    if cache::etag_matches(if_none_match, &etag) {
        return build_304_response(&etag);
    }

    let mut response = build_response(StatusCode::OK, JSON_CONTENT_TYPE, Bytes::from(json), is_head);
    if let Ok(value) = HeaderValue::from_str(&etag) {
        response.headers_mut().insert(ETAG, value);
    }
    response
}

/// Build 304 Not Modified response: no body and no entity headers
fn build_304_response(etag: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::NOT_MODIFIED)
        .header(ETAG, etag)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("304", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 404 Not Found response naming the unmatched method and path
pub fn build_404_response(method: &str, path: &str, is_head: bool) -> Response<Full<Bytes>> {
    let html = format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Error</title>\n</head>\n<body>\n<pre>Cannot {} {}</pre>\n</body>\n</html>\n",
        escape_html(method),
        escape_html(path)
    );

    let mut response = build_response(StatusCode::NOT_FOUND, HTML_CONTENT_TYPE, Bytes::from(html), is_head);
    let headers = response.headers_mut();
    headers.insert(
        "Content-Security-Policy",
        HeaderValue::from_static("default-src 'none'"),
    );
    headers.insert("X-Content-Type-Options", HeaderValue::from_static("nosniff"));
    response
}

/// Build 500 Internal Server Error response
pub fn build_500_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header(CONTENT_TYPE, "text/plain")
        .body(Full::new(Bytes::from("Internal Server Error")))
        .unwrap_or_else(|e| {
            log_build_error("500", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Attach `X-Powered-By` unless the configured value is empty or invalid
pub fn apply_powered_by(response: &mut Response<Full<Bytes>>, powered_by: &str) {
    if powered_by.is_empty() {
        return;
    }
    match HeaderValue::from_str(powered_by) {
        Ok(value) => {
            response.headers_mut().insert("X-Powered-By", value);
        }
        Err(e) => crate::logger::log_warning(&format!("Invalid X-Powered-By value: {e}")),
    }
}

fn build_response(
    status: StatusCode,
    content_type: &'static str,
    data: Bytes,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let content_length = data.len();
    let body = if is_head { Bytes::new() } else { data };

    Response::builder()
        .status(status)
        .header(CONTENT_TYPE, content_type)
        .header(CONTENT_LENGTH, content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error(status.as_str(), &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Escape the characters that are significant in HTML text
fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
