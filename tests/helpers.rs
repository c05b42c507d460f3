// Shared test helpers for mock servers and checker setup.

use std::net::SocketAddr;

use hsts_check::{Config, HstsChecker};
use httptest::{matchers::*, responders::*, Expectation, Server};

/// Builds a checker with a short timeout so failing tests do not hang.
#[allow(dead_code)] // Used by other test files
pub fn test_checker() -> HstsChecker {
    let config = Config {
        timeout_seconds: 5,
        ..Default::default()
    };
    HstsChecker::new(&config).expect("Failed to build checker")
}

/// Starts a mock server answering `GET /` once with the given status and
/// optional `Strict-Transport-Security` value.
#[allow(dead_code)] // Used by other test files
pub fn hsts_server(status: u16, hsts: Option<&str>) -> Server {
    let server = Server::run();
    let mut responder = status_code(status).body("<html><body>ok</body></html>");
    if let Some(value) = hsts {
        responder = responder.append_header("Strict-Transport-Security", value.to_string());
    }
    server.expect(Expectation::matching(request::method_path("GET", "/")).respond_with(responder));
    server
}

/// Root URL of a mock server.
#[allow(dead_code)] // Used by other test files
pub fn root_url(server: &Server) -> String {
    format!("http://{}/", server.addr())
}

/// Returns an address that nothing is listening on.
#[allow(dead_code)] // Used by other test files
pub fn closed_local_addr() -> SocketAddr {
    let listener =
        std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind ephemeral port");
    let addr = listener.local_addr().expect("Failed to read local address");
    drop(listener);
    addr
}

/// Starts a TCP listener that accepts connections and never answers.
#[allow(dead_code)] // Used by other test files
pub async fn start_silent_server() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind silent server");
    let addr = listener.local_addr().expect("Failed to read local address");
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((stream, _)) = listener.accept().await {
            held.push(stream);
        }
    });
    addr
}
