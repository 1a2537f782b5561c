use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

/// Minimal one-shot HTTP server standing in for the GitHub API.
///
/// Accepts a single connection, answers with the given status line and
/// JSON body, and hands back the raw request text through the join handle.
pub struct HttpStub {
    pub base_url: String,
    handle: JoinHandle<String>,
}

impl HttpStub {
    pub fn respond_once(status_line: &str, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            stream.write_all(response.as_bytes()).unwrap();
            String::from_utf8_lossy(&request).into_owned()
        });

        Self { base_url, handle }
    }

    /// Waits for the stub to finish and returns the request it received.
    pub fn received_request(self) -> String {
        self.handle.join().unwrap()
    }
}
