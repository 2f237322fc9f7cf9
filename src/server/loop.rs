// Server loop module
// Accepts connections until shutdown is requested

use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use super::connection::accept_connection;
use crate::config::AppState;
use crate::logger;

/// Run the accept loop on `listener`.
///
/// Must be polled inside a `tokio::task::LocalSet`; every connection is
/// served on its own local task. Returns once `shutdown` is notified.
/// Connections already in flight are not awaited.
#[allow(clippy::ignored_unit_patterns)]
pub async fn start_server_loop(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown: Arc<Notify>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => accept_connection(stream, peer_addr, &state),
                    Err(e) => logger::log_error(&format!("Failed to accept connection: {e}")),
                }
            }

            _ = shutdown.notified() => {
                let addr = listener.local_addr()?;
                logger::log_debug(|| format!(
                    "[Shutdown] Listener {addr} closed with {} active connection(s)",
                    state.connection_count()
                ));
                return Ok(());
            }
        }
    }
}
