//! AuditClientテスト
//!
//! ローカルの単発HTTPサーバーに対して実際にmultipart送信する

use bias_audit::analyzer::{AuditClient, Uploader};
use bias_audit::scanner::ImageFile;
use bias_audit_common::{AuditError, AuditResult, Score};
use std::path::PathBuf;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// 1リクエストだけ受けて決まった応答を返す。受け取ったリクエスト全体を返す。
async fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind失敗");
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept失敗");
        let request = read_request(&mut socket).await;

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();

        String::from_utf8_lossy(&request).to_string()
    });

    (format!("http://{}/audit/", addr), handle)
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> Vec<u8> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    loop {
        let n = socket.read(&mut chunk).await.expect("read失敗");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        let Some(header_end) = find(&buf, b"\r\n\r\n") else {
            continue;
        };
        let headers = String::from_utf8_lossy(&buf[..header_end]).to_lowercase();
        let body = &buf[header_end + 4..];

        let complete = match content_length(&headers) {
            Some(len) => body.len() >= len,
            // chunked
            None => body.ends_with(b"0\r\n\r\n"),
        };
        if complete {
            break;
        }
    }

    buf
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

fn content_length(headers: &str) -> Option<usize> {
    headers
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|v| v.trim().parse().ok())
}

fn sample_image() -> ImageFile {
    ImageFile {
        path: PathBuf::from("face.png"),
        file_name: "face.png".to_string(),
        mime_type: "image/png".to_string(),
        bytes: b"fake-png-bytes".to_vec(),
    }
}

#[tokio::test]
async fn test_upload_sends_multipart_file_field() {
    let (url, server) = serve_once("200 OK", r#"{"White": 0.1234, "Black": 0.5678}"#).await;
    let client = AuditClient::new(url.clone(), None).unwrap();
    assert_eq!(client.endpoint(), url);

    let result = client.upload(&sample_image()).await.expect("送信失敗");
    let request = server.await.unwrap();

    assert!(request.starts_with("POST /audit/ HTTP/1.1"));
    assert!(request.to_lowercase().contains("content-type: multipart/form-data; boundary="));
    assert!(request.contains(r#"name="file""#));
    assert!(request.contains(r#"filename="face.png""#));
    assert!(request.contains("Content-Type: image/png"));
    assert!(request.contains("fake-png-bytes"));

    assert!(matches!(result, AuditResult::GroupScores(ref groups) if groups.len() == 2));
}

#[tokio::test]
async fn test_upload_closest_group_response() {
    let body = r#"{"closest_group": "White", "distances": {"White": 0.12, "Black": 0.45}}"#;
    let (url, server) = serve_once("200 OK", body).await;
    let client = AuditClient::new(url, None).unwrap();

    let result = client.upload(&sample_image()).await.expect("送信失敗");
    server.await.unwrap();

    assert_eq!(
        result,
        AuditResult::ClosestGroup {
            closest_group: "White".to_string(),
            distances: vec![
                ("White".to_string(), Score::Number(0.12)),
                ("Black".to_string(), Score::Number(0.45)),
            ],
        }
    );
}

#[tokio::test]
async fn test_upload_non_success_status() {
    // 本文がJSONでもステータスが失敗なら読まない
    let (url, server) = serve_once("500 Internal Server Error", r#"{"White": 0.5}"#).await;
    let client = AuditClient::new(url, None).unwrap();

    let err = client.upload(&sample_image()).await.unwrap_err();
    server.await.unwrap();

    assert_eq!(err, AuditError::Status(500));
}

#[tokio::test]
async fn test_upload_invalid_json() {
    let (url, server) = serve_once("200 OK", "<html>oops</html>").await;
    let client = AuditClient::new(url, None).unwrap();

    let err = client.upload(&sample_image()).await.unwrap_err();
    server.await.unwrap();

    assert!(matches!(err, AuditError::Parse(_)));
}

#[tokio::test]
async fn test_upload_connection_refused() {
    // bindしてすぐ閉じたポートには誰もいない
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = AuditClient::new(format!("http://{}/audit/", addr), None).unwrap();
    let err = client.upload(&sample_image()).await.unwrap_err();

    assert!(matches!(err, AuditError::Transport(_)));
}
