//! `/add` handler
//!
//! Always answers 200; bad operands surface as a `null` result.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use super::query::QueryParams;
use super::router::RequestContext;
use crate::calc;
use crate::http;
use crate::logger;

pub fn handle_add(ctx: &RequestContext<'_>) -> Response<Full<Bytes>> {
    let params = QueryParams::parse(ctx.query);
    let a = params.get("a");
    let b = params.get("b");

    let body = calc::add(a.as_deref(), b.as_deref());
    logger::log_debug(|| format!(
        "[Add] a={:?} b={:?} result={:?}",
        a.as_deref(),
        b.as_deref(),
        body.result.0
    ));

    http::build_json_response(&body, ctx.is_head, ctx.if_none_match)
}
