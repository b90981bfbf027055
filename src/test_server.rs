//! Minimal HTTP/1.1 server for tests.
//!
//! Serves a fixed set of routes; every other path gets a 404 with
//! `NOT_FOUND_BODY`. Each connection is answered once and closed.

use reqwest::Client;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

pub const NOT_FOUND_BODY: &[u8] = b"<html><body>404 Not Found</body></html>";

#[derive(Debug, Clone)]
pub struct Route {
    pub path: String,
    pub status: u16,
    pub body: Vec<u8>,
}

impl Route {
    pub fn ok(path: &str, body: impl Into<Vec<u8>>) -> Route {
        Route {
            path: path.to_string(),
            status: 200,
            body: body.into(),
        }
    }

    pub fn status(path: &str, status: u16) -> Route {
        Route {
            path: path.to_string(),
            status,
            body: Vec::new(),
        }
    }
}

/// Starts the server on a background thread and returns its base URL
/// without a trailing slash, e.g. "http://127.0.0.1:12345".
pub fn start(routes: Vec<Route>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes = Arc::new(routes);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            thread::spawn(move || handle(stream, &routes));
        }
    });
    format!("http://127.0.0.1:{}", port)
}

/// Client that never goes through a proxy configured in the environment.
pub fn client() -> Client {
    Client::builder().no_proxy().build().expect("client")
}

fn handle(mut stream: TcpStream, routes: &[Route]) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));

    let mut request = Vec::new();
    let mut buf = [0u8; 4096];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => break,
            Ok(n) => request.extend_from_slice(&buf[..n]),
        }
    }
    let request = String::from_utf8_lossy(&request);
    let path = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/");

    let (status, body) = match routes.iter().find(|r| r.path == path) {
        Some(route) => (route.status, route.body.as_slice()),
        None => (404, NOT_FOUND_BODY),
    };
    let header = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        reason(status),
        body.len()
    );
    let _ = stream.write_all(header.as_bytes());
    let _ = stream.write_all(body);
    let _ = stream.flush();
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}
