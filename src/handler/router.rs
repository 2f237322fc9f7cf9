//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: route matching, dispatch,
//! common headers and access logging.

use crate::config::AppState;
use crate::handler::add;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

const ADD_PATH: &str = "/add";

/// Request context encapsulating information needed for request processing
pub struct RequestContext<'a> {
    pub method: &'a Method,
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub is_head: bool,
    pub if_none_match: Option<&'a str>,
}

/// Main entry point for HTTP request handling
///
/// Generic over the body type because no route reads a request body.
#[allow(clippy::unused_async)]
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let uri = req.uri();
    let ctx = RequestContext {
        method: req.method(),
        path: uri.path(),
        query: uri.query(),
        is_head: req.method() == Method::HEAD,
        if_none_match: req
            .headers()
            .get(hyper::header::IF_NONE_MATCH)
            .and_then(|v| v.to_str().ok()),
    };

    let mut response = route_request(&ctx);
    http::apply_powered_by(&mut response, &state.config.http.powered_by);

    if state.access_log_enabled() {
        let mut entry = AccessLogEntry::new(
            peer_addr.ip().to_string(),
            ctx.method.to_string(),
            ctx.path.to_string(),
        );
        entry.query = ctx.query.map(ToString::to_string);
        entry.http_version = http_version_label(req.version()).to_string();
        entry.status = response.status().as_u16();
        entry.body_bytes = sent_body_bytes(&response);
        entry.user_agent = req
            .headers()
            .get(hyper::header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string);
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Route request to the add handler or the not-found page
pub fn route_request(ctx: &RequestContext<'_>) -> Response<Full<Bytes>> {
    let readable = *ctx.method == Method::GET || ctx.is_head;
    if readable && is_add_path(ctx.path) {
        return add::handle_add(ctx);
    }

    logger::log_debug(|| format!("[Router] No route for {} {}", ctx.method, ctx.path));
    http::build_404_response(ctx.method.as_str(), ctx.path, ctx.is_head)
}

/// Paths match case-insensitively and tolerate one trailing slash
fn is_add_path(path: &str) -> bool {
    let path = path.strip_suffix('/').unwrap_or(path);
    path.eq_ignore_ascii_case(ADD_PATH)
}

/// Bytes actually written for the body; 0 for HEAD and 304
fn sent_body_bytes(response: &Response<Full<Bytes>>) -> usize {
    response
        .body()
        .size_hint()
        .exact()
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or(0)
}

const fn http_version_label(version: hyper::Version) -> &'static str {
    match version {
        hyper::Version::HTTP_09 => "0.9",
        hyper::Version::HTTP_10 => "1.0",
        hyper::Version::HTTP_2 => "2",
        hyper::Version::HTTP_3 => "3",
        _ => "1.1",
    }
}
