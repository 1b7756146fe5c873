use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use triviatui::client::{HttpBackend, TriviaBackend};
use triviatui::error::RequestError;

/// What the canned server saw: request line and body.
struct Seen {
    request_line: String,
    body: String,
}

/// Serve exactly one canned response on a local port.
fn serve_once(status: &str, body: &str) -> (HttpBackend, mpsc::Receiver<Seen>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Cannot bind");
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut raw = Vec::new();
        let mut buf = [0u8; 1024];

        // Headers, then as much body as Content-Length announces
        let header_end = loop {
            let n = stream.read(&mut buf).unwrap();
            raw.extend_from_slice(&buf[..n]);
            if let Some(pos) = raw.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
            if n == 0 {
                break raw.len();
            }
        };
        let head = String::from_utf8_lossy(&raw[..header_end]).to_string();
        let content_length = head
            .lines()
            .filter_map(|l| l.split_once(':'))
            .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
            .and_then(|(_, v)| v.trim().parse::<usize>().ok())
            .unwrap_or(0);
        while raw.len() < header_end + content_length {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            raw.extend_from_slice(&buf[..n]);
        }

        stream.write_all(response.as_bytes()).unwrap();
        let _ = tx.send(Seen {
            request_line: head.lines().next().unwrap_or_default().to_string(),
            body: String::from_utf8_lossy(&raw[header_end..]).to_string(),
        });
    });

    let backend = HttpBackend::new(&format!("http://{}/", addr), Some(Duration::from_secs(5)))
        .expect("Cannot build client");
    (backend, rx)
}

const PAGE_BODY: &str = r#"{
    "questions": [{"id": 7, "question": "q?", "answer": "a", "category": "2", "difficulty": 3}],
    "total_questions": 11,
    "categories": [{"id": 2, "type": "Art"}],
    "current_category": null,
    "success": true
}"#;

#[test]
fn test_questions_sends_page_and_decodes() {
    let (backend, seen) = serve_once("200 OK", PAGE_BODY);

    let page = backend.questions(2).unwrap();
    assert_eq!(page.total_questions, 11);
    assert_eq!(page.questions[0].category, 2);

    let seen = seen.recv().unwrap();
    assert_eq!(seen.request_line, "GET /questions?page=2 HTTP/1.1");
}

#[test]
fn test_not_found_is_status_error() {
    let (backend, _seen) = serve_once("404 NOT FOUND", r#"{"success": false}"#);

    match backend.questions_by_category(99) {
        Err(RequestError::Status(404)) => {}
        other => panic!("Expected Status(404), got {:?}", other),
    }
}

#[test]
fn test_server_error_is_status_error() {
    let (backend, _seen) = serve_once("500 INTERNAL SERVER ERROR", "");
    assert!(matches!(backend.questions(1), Err(RequestError::Status(500))));
}

#[test]
fn test_listing_with_success_false_is_rejected() {
    let (backend, _seen) = serve_once(
        "200 OK",
        r#"{"questions": [], "total_questions": 0, "success": false}"#,
    );
    assert!(matches!(backend.questions(1), Err(RequestError::Rejected)));
}

#[test]
fn test_search_posts_term_and_rejects_success_false() {
    let (backend, seen) = serve_once(
        "200 OK",
        r#"{"questions": [], "total_questions": 0, "current_category": null, "success": false}"#,
    );

    assert!(matches!(backend.search("title"), Err(RequestError::Rejected)));

    let seen = seen.recv().unwrap();
    assert_eq!(seen.request_line, "POST /questions/search HTTP/1.1");
    let body: serde_json::Value = serde_json::from_str(&seen.body).unwrap();
    assert_eq!(body["search_term"], "title");
}

#[test]
fn test_malformed_body_is_decode_error() {
    let (backend, _seen) = serve_once("200 OK", "<html>oops</html>");
    assert!(matches!(backend.questions(1), Err(RequestError::Decode(_))));
}

#[test]
fn test_delete_with_empty_body_succeeds() {
    let (backend, seen) = serve_once("200 OK", "");

    assert!(backend.delete_question(5).is_ok());
    assert_eq!(seen.recv().unwrap().request_line, "DELETE /questions/5 HTTP/1.1");
}

#[test]
fn test_delete_with_success_false_is_rejected() {
    let (backend, _seen) = serve_once("200 OK", r#"{"success": false}"#);
    assert!(matches!(backend.delete_question(5), Err(RequestError::Rejected)));
}

#[test]
fn test_delete_not_found_is_status_error() {
    let (backend, _seen) = serve_once("404 NOT FOUND", "");
    assert!(matches!(backend.delete_question(5), Err(RequestError::Status(404))));
}

#[test]
fn test_categories_decodes_list() {
    let (backend, seen) = serve_once(
        "200 OK",
        r#"{"categories": [{"id": 1, "type": "Science"}, {"id": "2", "type": "Art"}], "success": true}"#,
    );

    let categories = backend.categories().unwrap();
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[1].id, 2);
    assert_eq!(seen.recv().unwrap().request_line, "GET /categories HTTP/1.1");
}
