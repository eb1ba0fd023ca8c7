//! Minimal HTTP/1.1 server for acquisition integration tests.
//!
//! Serves a single static body with a configurable status and content type,
//! counts connections so tests can assert attempt counts, and can stall
//! without responding to provoke client-side timeouts. Paths under
//! `/redirect/` answer 302 to the stripped path.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct MockOptions {
    /// Status line code for normal responses.
    pub status: u32,
    /// Content-Type header value; omitted entirely when None.
    pub content_type: Option<String>,
    /// Hold each connection open this long without responding. The client
    /// is expected to time out first.
    pub stall: Option<Duration>,
}

impl Default for MockOptions {
    fn default() -> Self {
        Self {
            status: 200,
            content_type: Some("application/octet-stream".to_string()),
            stall: None,
        }
    }
}

/// Handle to a running mock server.
pub struct MockRemote {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
}

impl MockRemote {
    /// Number of connections accepted so far (one per client attempt; the
    /// server closes every connection after responding).
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Starts a server in a background thread serving `body`. The server runs
/// until the process exits.
pub fn start(body: Vec<u8>, opts: MockOptions) -> MockRemote {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body);
    let hits = Arc::new(AtomicUsize::new(0));
    let accepted = Arc::clone(&hits);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            accepted.fetch_add(1, Ordering::SeqCst);
            let body = Arc::clone(&body);
            let opts = opts.clone();
            thread::spawn(move || handle(stream, &body, &opts));
        }
    });
    MockRemote {
        base_url: format!("http://127.0.0.1:{}", port),
        hits,
    }
}

fn handle(mut stream: TcpStream, body: &[u8], opts: &MockOptions) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(5)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(5)));

    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let path = request_path(request);

    if let Some(stall) = opts.stall {
        // Keep the connection open without a response; the client times out.
        thread::sleep(stall);
        return;
    }

    if let Some(rest) = path.strip_prefix("/redirect") {
        let location = if rest.is_empty() { "/" } else { rest };
        let response = format!(
            "HTTP/1.1 302 Found\r\nLocation: {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            location
        );
        let _ = stream.write_all(response.as_bytes());
        return;
    }

    let content_type = match &opts.content_type {
        Some(ct) => format!("Content-Type: {}\r\n", ct),
        None => String::new(),
    };
    let response = format!(
        "HTTP/1.1 {} Mock\r\nContent-Length: {}\r\n{}Connection: close\r\n\r\n",
        opts.status,
        body.len(),
        content_type
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(body);
}

fn request_path(request: &str) -> &str {
    request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
}
