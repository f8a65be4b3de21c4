#![allow(dead_code)]

use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;
use tokio::time::timeout;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(6);
const MAX_REQUEST_BYTES: usize = 256 * 1024;

pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub headers: HashMap<String, String>,
    pub query: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(String::as_str)
    }

    pub fn json_body(&self) -> Value {
        serde_json::from_slice(&self.body).expect("json body")
    }
}

/// Accepts a single connection, captures the request and replies with `response`.
pub async fn serve_once(
    response: impl Into<String>,
) -> (String, oneshot::Receiver<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    let (tx, rx) = oneshot::channel();
    let response = response.into();

    tokio::spawn(async move {
        if let Ok((mut stream, _)) = listener.accept().await {
            let req = read_request(&mut stream).await;
            let _ = tx.send(req);
            let _ = stream.write_all(response.as_bytes()).await;
        }
    });

    (format!("http://{}", addr), rx)
}

pub async fn captured(rx: oneshot::Receiver<CapturedRequest>) -> CapturedRequest {
    timeout(REQUEST_TIMEOUT, rx)
        .await
        .expect("request timeout")
        .expect("request")
}

pub fn response_with_body(status: &str, content_type: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {status}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\n\r\n{body}",
        body.len()
    )
}

pub fn json_response(status: &str, body: &str) -> String {
    response_with_body(status, "application/json", body)
}

pub fn empty_response(status: &str) -> String {
    format!("HTTP/1.1 {status}\r\nContent-Length: 0\r\n\r\n")
}

async fn read_request(stream: &mut TcpStream) -> CapturedRequest {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
        match read_chunk(stream, &mut chunk).await {
            0 => panic!("connection closed before request headers"),
            read => buf.extend_from_slice(&chunk[..read]),
        }
        assert!(buf.len() <= MAX_REQUEST_BYTES, "request headers too large");
    };

    let header_str = String::from_utf8_lossy(&buf[..header_end]).into_owned();
    let mut lines = header_str.split("\r\n");
    let mut request_line = lines.next().unwrap_or("").split_whitespace();
    let method = request_line.next().unwrap_or("").to_string();
    let target = request_line.next().unwrap_or("");
    let (path, query_str) = target.split_once('?').unwrap_or((target, ""));
    let path = path.to_string();
    let query = url::form_urlencoded::parse(query_str.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    let headers: HashMap<String, String> = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(name, value)| (name.trim().to_ascii_lowercase(), value.trim().to_string()))
        .collect();

    let content_length = headers
        .get("content-length")
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(0);
    assert!(content_length <= MAX_REQUEST_BYTES, "request body too large");
    while buf.len() < header_end + content_length {
        match read_chunk(stream, &mut chunk).await {
            0 => panic!("connection closed before request body"),
            read => buf.extend_from_slice(&chunk[..read]),
        }
    }
    let body = buf[header_end..header_end + content_length].to_vec();

    CapturedRequest {
        method,
        path,
        headers,
        query,
        body,
    }
}

async fn read_chunk(stream: &mut TcpStream, chunk: &mut [u8]) -> usize {
    match timeout(REQUEST_TIMEOUT, stream.read(chunk)).await {
        Ok(Ok(read)) => read,
        Ok(Err(e)) => panic!("read_request I/O error: {e}"),
        Err(_) => panic!("timed out reading request"),
    }
}
