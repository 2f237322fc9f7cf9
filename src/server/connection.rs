// Connection handling module
// Accepts a single TCP connection and serves HTTP/1 on it

use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::{TokioIo, TokioTimer};

use crate::config::{AppState, PerformanceConfig};
use crate::handler;
use crate::logger;

/// Accept and process a connection, checking limits and logging.
///
/// # Arguments
///
/// * `stream` - The TCP stream to handle
/// * `peer_addr` - The peer's socket address
/// * `state` - Shared application state (holds the connection counter)
pub fn accept_connection(
    stream: tokio::net::TcpStream,
    peer_addr: std::net::SocketAddr,
    state: &Arc<AppState>,
) {
    // Increment counter first, then check limit (prevents race condition)
    let prev_count = state.active_connections.fetch_add(1, Ordering::SeqCst);

    if let Some(max_conn) = state.config.performance.max_connections {
        if prev_count >= usize::try_from(max_conn).unwrap_or(usize::MAX) {
            state.active_connections.fetch_sub(1, Ordering::SeqCst);
            logger::log_warning(&format!(
                "Max connections reached: {prev_count}/{max_conn}. Connection rejected."
            ));
            drop(stream);
            return;
        }
    }

    logger::log_connection_accepted(&peer_addr);

    handle_connection(stream, peer_addr, Arc::clone(state));
}

/// Serve one connection on a local task.
///
/// Keep-alive follows `performance.keep_alive_timeout`: a connection idle
/// for that many seconds between requests is closed, and 0 turns
/// keep-alive off (the first request then gets `read_timeout` to arrive).
/// Independently, max(read_timeout, write_timeout) caps the lifetime of
/// the whole connection, however busy it is.
fn handle_connection(
    stream: tokio::net::TcpStream,
    peer_addr: std::net::SocketAddr,
    state: Arc<AppState>,
) {
    tokio::task::spawn_local(async move {
        let io = TokioIo::new(stream);

        let performance = &state.config.performance;
        let lifetime = Duration::from_secs(std::cmp::max(
            performance.read_timeout,
            performance.write_timeout,
        ));

        let mut builder = http1::Builder::new();
        builder
            .timer(TokioTimer::new())
            .keep_alive(performance.keep_alive_timeout > 0)
            .header_read_timeout(idle_timeout(performance));

        let service_state = Arc::clone(&state);
        let conn = builder.serve_connection(
            io,
            service_fn(move |req| handler::handle_request(req, Arc::clone(&service_state), peer_addr)),
        );

        match tokio::time::timeout(lifetime, conn).await {
            Ok(Ok(())) => {}
            Ok(Err(err)) if err.is_timeout() => {
                logger::log_debug(|| format!("[Connection] Closed idle connection from {peer_addr}"));
            }
            Ok(Err(err)) => logger::log_connection_error(&err),
            Err(_) => {
                logger::log_warning(&format!(
                    "Connection from {peer_addr} exceeded its {} second lifetime",
                    lifetime.as_secs()
                ));
            }
        }

        state.active_connections.fetch_sub(1, Ordering::SeqCst);
    });
}

/// How long the server waits for the next request's headers
fn idle_timeout(performance: &PerformanceConfig) -> Duration {
    let secs = if performance.keep_alive_timeout > 0 {
        performance.keep_alive_timeout
    } else {
        performance.read_timeout
    };
    Duration::from_secs(secs)
}
