//! End-to-end tests over real TCP sockets.
//!
//! Each test binds its own listener on an ephemeral loopback port and talks
//! raw HTTP/1.1 to it. Configuration is injected through `Config::new`
//! instead of mutating the process environment, so tests run in parallel.

use std::net::{Ipv4Addr, SocketAddr};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use salute::{Config, Greeter, Server};

/// Spins up a server for `provider` and returns its bound address.
async fn spawn_service(provider: Option<&str>) -> SocketAddr {
    let mut config = Config::new(provider.map(str::to_owned));
    config.addr = SocketAddr::from((Ipv4Addr::LOCALHOST, 0));

    let greeter = Greeter::new(&config);
    let server = Server::bind(config.addr).await.expect("bind ephemeral port");
    let addr = server.local_addr();

    tokio::spawn(server.serve(greeter));
    addr
}

/// Sends one request and returns `(status, body)`.
async fn request(addr: SocketAddr, method: &str, path: &str) -> (u16, String) {
    let mut stream = TcpStream::connect(addr).await.expect("connect");
    let req =
        format!("{method} {path} HTTP/1.1\r\nhost: localhost\r\nconnection: close\r\n\r\n");
    stream.write_all(req.as_bytes()).await.expect("write request");

    let mut raw = Vec::new();
    stream.read_to_end(&mut raw).await.expect("read response");
    let text = String::from_utf8(raw).expect("utf-8 response");

    let status = text
        .split_whitespace()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .expect("status line");
    let body = text
        .split_once("\r\n\r\n")
        .map(|(_, b)| b.to_owned())
        .unwrap_or_default();
    (status, body)
}

#[tokio::test]
async fn root_greets_with_provider() {
    let addr = spawn_service(Some("AWS")).await;
    let (status, body) = request(addr, "GET", "/").await;
    assert_eq!(status, 200);
    assert_eq!(body, "Hello, World! I am running on AWS!");
}

#[tokio::test]
async fn unset_provider_greets_with_unknown() {
    let addr = spawn_service(None).await;
    let (status, body) = request(addr, "GET", "/").await;
    assert_eq!(status, 200);
    assert_eq!(body, "Hello, World! I am running on Unknown!");
}

#[tokio::test]
async fn empty_provider_greets_with_unknown() {
    let addr = spawn_service(Some("")).await;
    let (_, body) = request(addr, "GET", "/").await;
    assert_eq!(body, "Hello, World! I am running on Unknown!");
}

#[tokio::test]
async fn provider_with_spaces_and_unicode_survives_verbatim() {
    let addr = spawn_service(Some("Oracle Cloud ∞")).await;
    let (status, body) = request(addr, "GET", "/").await;
    assert_eq!(status, 200);
    assert_eq!(body, "Hello, World! I am running on Oracle Cloud ∞!");
}

#[tokio::test]
async fn repeated_requests_are_identical() {
    let addr = spawn_service(Some("GCP")).await;
    let first = request(addr, "GET", "/").await;
    let second = request(addr, "GET", "/").await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn unknown_path_is_404() {
    let addr = spawn_service(Some("AWS")).await;
    let (status, body) = request(addr, "GET", "/nope").await;
    assert_eq!(status, 404);
    assert_eq!(body, "");
}

#[tokio::test]
async fn non_get_method_is_404() {
    let addr = spawn_service(Some("AWS")).await;
    let (status, _) = request(addr, "POST", "/").await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn binding_a_taken_port_fails_with_diagnostic() {
    let addr = spawn_service(None).await;
    let err = Server::bind(addr).await.expect_err("second bind must fail");
    assert!(err.to_string().contains(&addr.to_string()));
}
