//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::time::Duration;

use fixture_server::config::FixtureConfig;
use fixture_server::net::Listener;
use fixture_server::{HttpServer, Shutdown};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// A fixture server running on an ephemeral port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    handle: tokio::task::JoinHandle<Result<(), std::io::Error>>,
}

impl TestServer {
    pub async fn start() -> Self {
        Self::start_with(FixtureConfig::default()).await
    }

    pub async fn start_with(mut config: FixtureConfig) -> Self {
        config.timeouts.shutdown_grace_secs = 1;

        let tcp = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = tcp.local_addr().unwrap();
        let listener = Listener::from_tcp(tcp, config.listener.max_connections);

        let shutdown = Shutdown::new();
        let server = HttpServer::new(config);
        let rx = shutdown.subscribe();
        let handle = tokio::spawn(async move { server.run(listener, rx).await });

        Self {
            addr,
            shutdown,
            handle,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Trigger shutdown and wait for the serve loop to return.
    pub async fn stop(self) {
        self.shutdown.trigger();
        let result = tokio::time::timeout(Duration::from_secs(5), self.handle)
            .await
            .expect("server did not stop in time");
        result.unwrap().unwrap();
    }
}

/// Client that reports redirects instead of following them.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .no_proxy()
        .build()
        .unwrap()
}

/// Send a raw HTTP/1.1 request and return the raw response text.
pub async fn raw_request(addr: SocketAddr, request: &str) -> String {
    let mut socket = TcpStream::connect(addr).await.unwrap();
    socket.write_all(request.as_bytes()).await.unwrap();

    let mut response = Vec::new();
    socket.read_to_end(&mut response).await.unwrap();
    String::from_utf8(response).unwrap()
}
