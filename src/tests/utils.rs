//! Helpers for tests that need a real backend on a socket

use std::net::{SocketAddr, TcpListener};
use axum::body::HttpBody;
use axum::response::Response;
use axum::Router;
use clap::Parser;
use crate::config::Config;

/// Serves `app` on an ephemeral local port for the rest of the test.
pub fn spawn_backend(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let server = axum::Server::from_tcp(listener)
        .unwrap()
        .serve(app.into_make_service());
    tokio::spawn(server);
    addr
}

pub fn config_for(addr: SocketAddr, restaurant_name: &str) -> Config {
    config_with_timeout(addr, restaurant_name, 5)
}

pub fn config_with_timeout(addr: SocketAddr, restaurant_name: &str, timeout_secs: u64) -> Config {
    Config::parse_from([
        "restaurant-page".to_string(),
        "--backend-url".to_string(),
        format!("http://{}", addr),
        "--restaurant-name".to_string(),
        restaurant_name.to_string(),
        "--request-timeout-secs".to_string(),
        timeout_secs.to_string(),
    ])
}

/// An address nothing listens on.
pub fn closed_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap()
}

pub async fn body_text(res: Response) -> String {
    let mut body = res.into_body();
    let mut bytes = Vec::new();
    while let Some(chunk) = body.data().await {
        bytes.extend_from_slice(&chunk.unwrap());
    }
    String::from_utf8(bytes).unwrap()
}
