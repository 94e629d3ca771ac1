//! Stand-in server for local bursts: every request gets `200 OK`.

use std::future::Future;

use axum::{
    http::{Method, Uri},
    Router,
};
use tokio::net::TcpListener;
use tracing::{debug, info};

pub const BIND: &str = "127.0.0.1:4444";

pub const BODY: &str = "Everything is okay :)";

pub fn router() -> Router {
    Router::new().fallback(respond)
}

/// Serves [`router`] on `listener` until `shutdown` resolves, then drains.
pub async fn serve<F>(listener: TcpListener, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!(%addr, "dummy target listening");
    axum::serve(listener, router())
        .with_graceful_shutdown(shutdown)
        .await?;
    info!(%addr, "dummy target stopped");
    Ok(())
}

async fn respond(method: Method, uri: Uri) -> &'static str {
    debug!(%method, %uri, "request");
    BODY
}
