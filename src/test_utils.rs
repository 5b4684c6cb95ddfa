//! Shared test helpers.
//!
//! [`serve_once`] binds a listener on a random local port and answers exactly
//! one HTTP request with a fixed status and body, then its thread exits. The
//! request line it saw is kept so tests can assert on the exact path and
//! query string the client sent.
//!
//! [`TestServer::request_target`] consumes the server: it waits up to five
//! seconds for the request, joins the serving thread and returns the target
//! (`/api/search?q=...`). Call [`TestServer::base_url`] first and issue the
//! request before asking for the target. A server that is dropped without
//! being asked leaves its thread blocked in `accept` until the test process
//! ends.
//!
//! [`unused_local_port`] returns a port nothing listens on, for
//! connection-refused cases.

use std::io::{BufRead, BufReader, Write};
use std::net::{SocketAddr, TcpListener};
use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::Duration;

/// A one-request HTTP responder bound to a random local port.
pub struct TestServer {
    addr: SocketAddr,
    handle: Option<JoinHandle<()>>,
    request_line: mpsc::Receiver<String>,
}

impl TestServer {
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Path and query of the request the server received.
    pub fn request_target(mut self) -> String {
        let line = self
            .request_line
            .recv_timeout(Duration::from_secs(5))
            .expect("server saw no request");
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
        line.split_whitespace().nth(1).unwrap_or_default().to_string()
    }
}

/// Serves exactly one request with `status` and `body`, then stops.
pub fn serve_once(status: u16, body: &str) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test server");
    let addr = listener.local_addr().expect("local addr");
    let body = body.to_string();
    let (tx, rx) = mpsc::channel();

    let handle = std::thread::spawn(move || {
        let Ok((stream, _)) = listener.accept() else {
            return;
        };
        let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));

        let mut request_line = String::new();
        let _ = reader.read_line(&mut request_line);
        loop {
            let mut header = String::new();
            match reader.read_line(&mut header) {
                Ok(0) => break,
                Ok(_) if header == "\r\n" || header == "\n" => break,
                Ok(_) => {}
                Err(_) => break,
            }
        }
        let _ = tx.send(request_line.trim_end().to_string());

        let mut stream = stream;
        let response = format!(
            "HTTP/1.1 {status} Test\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let _ = stream.write_all(response.as_bytes());
        let _ = stream.flush();
    });

    TestServer {
        addr,
        handle: Some(handle),
        request_line: rx,
    }
}

/// A local port with nothing listening on it.
pub fn unused_local_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind probe");
    listener.local_addr().expect("local addr").port()
}
