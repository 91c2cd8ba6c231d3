//! Loopback HTTP server that answers a single request with a canned response.

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

pub(crate) const FIXTURE: &str = include_str!("../fixtures/metar_response.xml");

/// What the server saw of the request.
#[derive(Debug)]
pub(crate) struct CapturedRequest {
    pub request_line: String,
    headers: Vec<(String, String)>,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<String> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.clone())
    }
}

pub(crate) struct CannedServer {
    /// `http://127.0.0.1:<port>/httpparam`
    pub base_url: String,
    handle: JoinHandle<CapturedRequest>,
}

impl CannedServer {
    /// Waits for the single request to be served.
    pub fn finish(self) -> CapturedRequest {
        self.handle.join().expect("canned server thread panicked")
    }
}

pub(crate) fn serve_once(status: u16, reason: &str, body: &str) -> CannedServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback listener");
    let addr = listener.local_addr().expect("listener address");
    let response = format!(
        "HTTP/1.1 {status} {reason}\r\nContent-Type: text/xml\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept connection");
        let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));

        let mut request_line = String::new();
        reader.read_line(&mut request_line).expect("read request line");

        let mut headers = Vec::new();
        loop {
            let mut line = String::new();
            if reader.read_line(&mut line).expect("read header") == 0 || line == "\r\n" {
                break;
            }
            if let Some((key, value)) = line.trim_end().split_once(':') {
                headers.push((key.trim().to_string(), value.trim().to_string()));
            }
        }

        stream.write_all(response.as_bytes()).expect("write response");
        stream.flush().expect("flush response");

        CapturedRequest {
            request_line: request_line.trim_end().to_string(),
            headers,
        }
    });

    CannedServer {
        base_url: format!("http://{addr}/httpparam"),
        handle,
    }
}

/// Base URL on a loopback port nobody listens on.
pub(crate) fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback listener");
    let addr = listener.local_addr().expect("listener address");
    drop(listener);
    format!("http://{addr}/httpparam")
}
