//! Integration tests for [`ApiClient`] against a local HTTP server.
//!
//! The server is a minimal hand-rolled HTTP/1.1 responder on a background
//! thread; each test gets its own listener with one canned response and a
//! channel carrying the raw requests it received.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use url::Url;

use elong_api::ApiClient;
use elong_core::Error;

const TIMEOUT: Duration = Duration::from_secs(5);

/// Start a server answering every request with `status_line` + `body`.
///
/// Returns the base URL and a receiver yielding the raw text of each
/// request. The listener thread exits with the process.
fn serve(status_line: &'static str, body: &'static str) -> (Url, mpsc::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let (req_tx, req_rx) = mpsc::channel();

    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let _ = req_tx.send(handle(stream, status_line, body));
        }
    });

    let base = Url::parse(&format!("http://127.0.0.1:{port}")).unwrap();
    (base, req_rx)
}

fn handle(mut stream: std::net::TcpStream, status_line: &str, body: &str) -> String {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));

    let request = read_request(&mut stream);

    let response = format!(
        "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());

    request
}

/// Read headers plus a Content-Length body; enough HTTP for these tests.
fn read_request(stream: &mut std::net::TcpStream) -> String {
    let mut data = Vec::new();
    let mut buf = [0u8; 4096];

    loop {
        let n = match stream.read(&mut buf) {
            Ok(0) | Err(_) => break,
            Ok(n) => n,
        };
        data.extend_from_slice(&buf[..n]);

        let text = String::from_utf8_lossy(&data);
        if let Some(header_end) = text.find("\r\n\r\n") {
            let content_length = text
                .lines()
                .find_map(|line| line.strip_prefix("content-length: "))
                .or_else(|| {
                    text.lines()
                        .find_map(|line| line.strip_prefix("Content-Length: "))
                })
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);

            if data.len() >= header_end + 4 + content_length {
                break;
            }
        }
    }

    String::from_utf8_lossy(&data).into_owned()
}

#[tokio::test]
async fn test_success_response_returns_short_url_verbatim() {
    let (base, _req_rx) = serve(
        "HTTP/1.1 200 OK",
        r#"{"original_url":"https://example.com","short_url":"http://localhost:3000/r/xK9mP2qL","short_code":"xK9mP2qL"}"#,
    );
    let client = ApiClient::new(&base, TIMEOUT).unwrap();

    let response = client.shorten("https://example.com").await.unwrap();

    assert_eq!(response.short_url, "http://localhost:3000/r/xK9mP2qL");
    assert_eq!(response.original_url.as_deref(), Some("https://example.com"));
}

#[tokio::test]
async fn test_exactly_one_request_with_url_as_json_payload() {
    let (base, req_rx) = serve("HTTP/1.1 200 OK", r#"{"short_url":"http://sho.rt/x"}"#);
    let client = ApiClient::new(&base, TIMEOUT).unwrap();

    client
        .shorten("https://example.com/a/very/long/path")
        .await
        .unwrap();

    let request = req_rx.recv_timeout(Duration::from_secs(2)).unwrap();
    assert!(request.starts_with("POST /api/shorten HTTP/1.1"));

    let body = request.split("\r\n\r\n").nth(1).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(
        parsed,
        serde_json::json!({"url": "https://example.com/a/very/long/path"})
    );

    // No retries: nothing else arrives
    assert!(req_rx.recv_timeout(Duration::from_millis(200)).is_err());
}

#[tokio::test]
async fn test_failure_with_error_field_surfaces_server_reason() {
    let (base, _req_rx) = serve("HTTP/1.1 400 Bad Request", r#"{"error":"bad url"}"#);
    let client = ApiClient::new(&base, TIMEOUT).unwrap();

    let err = client.shorten("not a url").await.unwrap_err();

    match err {
        Error::Api(reason) => assert_eq!(reason, "bad url"),
        other => panic!("expected Error::Api, got {other:?}"),
    }
}

#[tokio::test]
async fn test_failure_without_error_field_is_transport_class() {
    let (base, _req_rx) = serve("HTTP/1.1 500 Internal Server Error", r#"{"status":"failed"}"#);
    let client = ApiClient::new(&base, TIMEOUT).unwrap();

    let err = client.shorten("https://example.com").await.unwrap_err();

    // No usable reason; callers show the fixed fallback for this class
    assert!(matches!(err, Error::Http(_)));
    assert!(err.is_recoverable());
}

#[tokio::test]
async fn test_failure_with_non_json_body_is_transport_class() {
    let (base, _req_rx) = serve("HTTP/1.1 502 Bad Gateway", "<html>502 Bad Gateway</html>");
    let client = ApiClient::new(&base, TIMEOUT).unwrap();

    let err = client.shorten("https://example.com").await.unwrap_err();

    assert!(matches!(err, Error::Http(_)));
}
