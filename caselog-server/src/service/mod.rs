// caselog validation service
//
// The remote copy of the duration rule, served over HTTP so browser or
// terminal clients can ask for a judgment without embedding the rule.
// The handler and the local fallback call the same shared function, so
// the two copies cannot disagree.

mod handlers;
mod routes;

pub use routes::create_router;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Default listen address for `caselog serve`.
pub const DEFAULT_LISTEN: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 8791);

/// Bind and serve until the process is stopped.
pub async fn serve(addr: SocketAddr) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("caselog: validation service listening on {}", addr);
    axum::serve(listener, create_router()).await
}
