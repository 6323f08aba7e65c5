// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HttpTransport against a scripted local HTTP server.

use std::io::Write;

use super::*;
use boa_wire::encode_response;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// Canned HTTP response
struct Reply {
    status: &'static str,
    headers: Vec<(&'static str, String)>,
    body: Vec<u8>,
}

impl Reply {
    fn xml(status: &'static str, body: String) -> Self {
        let headers = vec![("Content-Type", "text/xml".to_string())];
        Self { status, headers, body: body.into_bytes() }
    }

    fn bytes(body: Vec<u8>) -> Self {
        Self { status: "200 OK", headers: vec![("Content-Type", "text/plain".to_string())], body }
    }

    fn header(mut self, name: &'static str, value: &str) -> Self {
        self.headers.push((name, value.to_string()));
        self
    }
}

async fn bind() -> (TcpListener, Url) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let url = Url::parse(&format!("http://{}/boa/?q=boa/api", addr)).unwrap();
    (listener, url)
}

/// Answer successive connections with `replies`; the handle yields the raw
/// request texts.
fn serve(listener: TcpListener, replies: Vec<Reply>) -> JoinHandle<Vec<String>> {
    tokio::spawn(async move {
        let mut requests = Vec::new();
        for reply in replies {
            let (mut stream, _) = listener.accept().await.unwrap();
            requests.push(read_request(&mut stream).await);
            let mut head = format!("HTTP/1.1 {}\r\n", reply.status);
            for (name, value) in &reply.headers {
                head.push_str(&format!("{}: {}\r\n", name, value));
            }
            head.push_str(&format!(
                "Content-Length: {}\r\nConnection: close\r\n\r\n",
                reply.body.len()
            ));
            stream.write_all(head.as_bytes()).await.unwrap();
            stream.write_all(&reply.body).await.unwrap();
            let _ = stream.shutdown().await;
        }
        requests
    })
}

/// Serve a single HTTP response; the handle yields the raw request text.
async fn serve_once(status: &'static str, body: String) -> (Url, JoinHandle<String>) {
    let (listener, url) = bind().await;
    let server = serve(listener, vec![Reply::xml(status, body)]);
    let handle = tokio::spawn(async move { server.await.unwrap().remove(0) });
    (url, handle)
}

async fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = stream.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        let text = String::from_utf8_lossy(&buf).into_owned();
        if let Some(head_end) = text.find("\r\n\r\n") {
            let content_length = text[..head_end]
                .lines()
                .filter_map(|line| line.split_once(':'))
                .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
                .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= head_end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

fn transport(url: Url) -> HttpTransport {
    HttpTransport::with_url(url, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn posts_method_call_with_session_headers() {
    let datasets = Value::Array(vec![[("id", Value::from("1")), ("name", Value::from("small"))]
        .into_iter()
        .collect()]);
    let (url, server) = serve_once("200 OK", encode_response(&MethodResponse::Success(datasets.clone()))).await;

    let credentials = Credentials::from_session("SESS1", "abc", Some("tok".to_string()));
    let value = transport(url).call(Method::Datasets, vec![], Some(&credentials)).await.unwrap();
    assert_eq!(value, datasets);

    let request = server.await.unwrap();
    let lower = request.to_ascii_lowercase();
    assert!(request.starts_with("POST /boa/?q=boa/api HTTP/1.1"), "{request}");
    assert!(lower.contains("content-type: text/xml"), "{request}");
    assert!(lower.contains("cookie: sess1=abc"), "{request}");
    assert!(lower.contains("x-csrf-token: tok"), "{request}");
    assert!(request.contains("<methodName>boa.datasets</methodName>"), "{request}");
}

#[tokio::test]
async fn omits_session_headers_without_credentials() {
    let (url, server) =
        serve_once("200 OK", encode_response(&MethodResponse::Success(Value::from("ok")))).await;

    transport(url)
        .call(Method::UserLogin, vec![Value::from("bob"), Value::from("pw")], None)
        .await
        .unwrap();

    let lower = server.await.unwrap().to_ascii_lowercase();
    assert!(!lower.contains("cookie:"));
    assert!(!lower.contains("x-csrf-token:"));
    assert!(lower.contains("<string>bob</string>"));
}

#[tokio::test]
async fn skips_csrf_header_when_token_absent() {
    let (url, server) =
        serve_once("200 OK", encode_response(&MethodResponse::Success(Value::Nil))).await;

    let credentials = Credentials::new("SESS1=abc", None);
    transport(url).call(Method::UserToken, vec![], Some(&credentials)).await.unwrap();

    let lower = server.await.unwrap().to_ascii_lowercase();
    assert!(lower.contains("cookie: sess1=abc"));
    assert!(!lower.contains("x-csrf-token:"));
}

#[tokio::test]
async fn fault_becomes_transport_fault() {
    let fault = MethodResponse::Fault { code: 401, message: "Wrong username or password.".into() };
    let (url, _server) = serve_once("200 OK", encode_response(&fault)).await;

    let err = transport(url).call(Method::UserLogin, vec![], None).await.unwrap_err();
    assert_eq!(
        err,
        TransportError::Fault { code: 401, message: "Wrong username or password.".into() }
    );
}

#[tokio::test]
async fn non_success_status() {
    let (url, _server) = serve_once("404 Not Found", "<html>missing</html>".to_string()).await;

    let err = transport(url).call(Method::Datasets, vec![], None).await.unwrap_err();
    assert_eq!(err, TransportError::Status { status: 404 });
}

#[tokio::test]
async fn html_body_is_a_codec_error() {
    let (url, _server) = serve_once("200 OK", "<html><body>Welcome</body></html>".to_string()).await;

    let err = transport(url).call(Method::Datasets, vec![], None).await.unwrap_err();
    assert!(matches!(err, TransportError::Codec(_)), "{err:?}");
}

#[tokio::test]
async fn connection_refused_is_http_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let url = Url::parse(&format!("http://{}/api", addr)).unwrap();
    let err = transport(url).call(Method::Datasets, vec![], None).await.unwrap_err();
    assert!(matches!(err, TransportError::Http(_)), "{err:?}");
}

#[tokio::test]
async fn job_output_is_downloaded_from_returned_url() {
    let output = "counts[] = 42\n".repeat(4);
    let mut gzip = flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
    gzip.write_all(output.as_bytes()).unwrap();

    let (listener, api) = bind().await;
    let location = api.join("/boa/output/42.txt").unwrap();
    let server = serve(
        listener,
        vec![
            Reply::xml(
                "200 OK",
                encode_response(&MethodResponse::Success(Value::from(location.as_str()))),
            ),
            Reply::bytes(gzip.finish().unwrap()).header("Content-Encoding", "gzip"),
        ],
    );

    let transport = transport(api);
    let credentials = Credentials::from_session("SESS1", "abc", Some("tok".to_string()));
    let value = transport
        .call(Method::JobOutput, vec![Value::from("42")], Some(&credentials))
        .await
        .unwrap();
    assert_eq!(value, Value::from(location.as_str()));

    let body = transport.fetch(&location, None).await.unwrap();
    assert_eq!(body, output);

    let requests = server.await.unwrap();
    assert!(requests[0].contains("<methodName>job.output</methodName>"), "{}", requests[0]);
    assert!(requests[1].starts_with("GET /boa/output/42.txt HTTP/1.1"), "{}", requests[1]);
    assert!(requests[1].to_ascii_lowercase().contains("accept-encoding: gzip"), "{}", requests[1]);
}

#[tokio::test]
async fn ranged_download_sends_range_header() {
    let (listener, api) = bind().await;
    let location = api.join("/boa/output/42.txt").unwrap();
    let server = serve(
        listener,
        vec![
            Reply::bytes(b"= 1".to_vec()).header("Content-Range", "bytes 5-7/20"),
            Reply::bytes(b"= 1\n".to_vec()),
        ],
    );

    let transport = transport(api);
    assert_eq!(transport.fetch(&location, Some(ByteRange::new(5, 3))).await.unwrap(), "= 1");
    transport.fetch(&location, Some(ByteRange::new(5, 0))).await.unwrap();

    let requests: Vec<String> =
        server.await.unwrap().into_iter().map(|r| r.to_ascii_lowercase()).collect();
    assert!(requests[0].contains("range: bytes=5-7"), "{}", requests[0]);
    assert!(requests[1].contains("range: bytes=5-\r\n"), "{}", requests[1]);
}

#[tokio::test]
async fn missing_download_is_status_error() {
    let (listener, api) = bind().await;
    let server = serve(listener, vec![Reply::xml("404 Not Found", "gone".to_string())]);

    let location = api.join("/boa/output/9.txt").unwrap();
    let err = transport(api).fetch(&location, None).await.unwrap_err();
    assert_eq!(err, TransportError::Status { status: 404 });
    server.await.unwrap();
}

#[yare::parameterized(
    bounded = { 0, 10, "bytes=0-9" },
    single = { 7, 1, "bytes=7-7" },
    open_ended = { 100, 0, "bytes=100-" },
)]
fn range_header(start: u64, len: u64, expected: &str) {
    assert_eq!(ByteRange::new(start, len).header_value(), expected);
}

#[test]
fn endpoint_url_is_https() {
    let transport = HttpTransport::new(&Endpoint::default()).unwrap();
    assert_eq!(transport.url().scheme(), "https");
}
