//! Shared utilities for integration tests.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use pathprobe::probe::{FetchError, Fetcher};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;

/// Start a mock HTTP server on an ephemeral port that answers each request
/// with the status chosen by `f` for its path.
#[allow(dead_code)]
pub async fn start_path_backend<F>(f: F) -> SocketAddr
where
    F: Fn(&str) -> u16 + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((socket, _)) => {
                    let f = f.clone();
                    tokio::spawn(async move {
                        let mut reader = BufReader::new(socket);
                        let mut request_line = String::new();
                        if reader.read_line(&mut request_line).await.is_err() {
                            return;
                        }
                        let path = request_line
                            .split_whitespace()
                            .nth(1)
                            .unwrap_or("/")
                            .to_string();

                        // Skip headers.
                        loop {
                            let mut line = String::new();
                            match reader.read_line(&mut line).await {
                                Ok(0) => break,
                                Ok(_) if line == "\r\n" => break,
                                Ok(_) => continue,
                                Err(_) => return,
                            }
                        }

                        let status = f(&path);
                        let reason = match status {
                            200 => "OK",
                            403 => "Forbidden",
                            404 => "Not Found",
                            500 => "Internal Server Error",
                            503 => "Service Unavailable",
                            _ => "Unknown",
                        };
                        let body = "mock";
                        let response = format!(
                            "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status,
                            reason,
                            body.len(),
                            body
                        );
                        let mut socket = reader.into_inner();
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// An address nothing is listening on.
#[allow(dead_code)]
pub async fn closed_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

/// [`Fetcher`] answering from a fixed URL → status table; unknown URLs get 404.
#[allow(dead_code)]
pub struct StaticFetcher {
    statuses: HashMap<String, u16>,
    calls: AtomicUsize,
}

#[allow(dead_code)]
impl StaticFetcher {
    pub fn new(statuses: &[(&str, u16)]) -> Self {
        Self {
            statuses: statuses
                .iter()
                .map(|(url, status)| (url.to_string(), *status))
                .collect(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Fetcher for StaticFetcher {
    async fn fetch_status(&self, url: &str) -> Result<u16, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.statuses.get(url).copied().unwrap_or(404))
    }
}

/// Unique path in the system temp directory.
#[allow(dead_code)]
pub fn temp_path(prefix: &str) -> PathBuf {
    std::env::temp_dir().join(format!("pathprobe-{}-{}.txt", prefix, uuid::Uuid::new_v4()))
}
