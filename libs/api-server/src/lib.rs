mod error;
mod forms;
mod http;
mod pages;

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tokio_util::sync::CancellationToken;

use student_api::RecordStore;

#[derive(Clone)]
struct AppState {
    store: Arc<dyn RecordStore>,
}

/// Fixed route table. Identifiers travel in form bodies, never in the path;
/// anything not listed falls through to axum's default 404.
pub fn router(store: Arc<dyn RecordStore>) -> Router {
    let state = AppState { store };

    Router::new()
        .route("/", get(pages::index))
        .route("/index.html", get(pages::index))
        .route("/insert", get(pages::insert).post(http::handle_insert))
        .route("/insert.html", get(pages::insert))
        .route("/update", get(pages::update).post(http::handle_update))
        .route("/update.html", get(pages::update))
        .route("/delete", get(pages::delete).post(http::handle_delete))
        .route("/delete.html", get(pages::delete))
        .route("/display", get(pages::display))
        .route("/display.html", get(pages::display))
        .route("/api/display-data", get(http::handle_display_data))
        .with_state(state)
}

/// `bind` is a bare IP literal, v4 or v6 (`0.0.0.0`, `::`).
fn listen_addr(bind: &str, port: u16) -> Result<SocketAddr, String> {
    let ip: IpAddr = bind
        .parse()
        .map_err(|e| format!("bind address '{bind}': {e}"))?;
    Ok(SocketAddr::new(ip, port))
}

/// Student records HTTP server. Returns once `shutdown` is cancelled and
/// in-flight requests have drained.
pub async fn run(
    bind: &str,
    port: u16,
    store: Arc<dyn RecordStore>,
    shutdown: CancellationToken,
) -> Result<(), String> {
    let addr = listen_addr(bind, port)?;
    let app = router(store);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("bind api {addr}: {e}"))?;

    tracing::info!(addr = %addr, "server running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown.cancelled_owned())
        .await
        .map_err(|e| format!("axum serve: {e}"))?;

    Ok(())
}
