//! Energy Empire backend binary
//!
//! Loads configuration from the environment, opens the player store, and
//! serves the JSON API over HTTP/1.1. One tokio task per connection; the
//! store handle is shared across tasks as an `Arc`.

use empire_server::response::error_response;
use empire_server::{router, Config};

use empire_db::Store;
use http_body_util::{BodyExt, Full};
use hyper::body::{Bytes, Incoming};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

/// Handle an incoming HTTP request
async fn handle_request(
    store: Arc<Store>,
    req: Request<Incoming>,
) -> Result<Response<Full<Bytes>>, hyper::Error> {
    let method = req.method().clone();
    let uri = req.uri().clone();

    let body = match req.into_body().collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) => {
            return Ok(error_response(
                StatusCode::BAD_REQUEST,
                &format!("failed to read body: {}", e),
            ));
        }
    };

    Ok(router::route(
        &store,
        &method,
        uri.path(),
        uri.query(),
        &body,
    ))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    tracing::info!("Opening player store at {}", config.db_path.display());
    let store = Arc::new(Store::open(&config.db_path)?);

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{}", addr);

    loop {
        let (stream, remote_addr) = match listener.accept().await {
            Ok(conn) => conn,
            Err(e) => {
                tracing::error!("Accept error: {}", e);
                continue;
            }
        };

        let store = store.clone();
        tokio::spawn(async move {
            let io = TokioIo::new(stream);
            let service = service_fn(move |req| {
                let store = store.clone();
                async move { handle_request(store, req).await }
            });

            if let Err(e) = http1::Builder::new().serve_connection(io, service).await {
                tracing::debug!("Connection error from {}: {}", remote_addr, e);
            }
        });
    }
}
