#[cfg(test)]
mod tests {
    use super::super::http::*;
    use super::super::{RecommendBackend, RecommendRequest, TransportError};
    use crate::config::ClientConfig;
    use std::io::{BufRead, BufReader, Read, Write};
    use std::net::TcpListener;
    use std::sync::mpsc::{self, Receiver};
    use std::thread;
    use std::time::Duration;

    struct CapturedRequest {
        request_line: String,
        content_type: Option<String>,
        body: String,
    }

    /// Serve exactly one HTTP exchange on a random local port.
    fn spawn_stub(
        status_line: &'static str,
        body: &'static str,
        delay: Duration,
    ) -> (String, Receiver<CapturedRequest>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());

            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();

            let mut content_length = 0usize;
            let mut content_type = None;
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).unwrap();
                let line = line.trim_end();
                if line.is_empty() {
                    break;
                }
                if let Some((name, value)) = line.split_once(':') {
                    let name = name.trim().to_ascii_lowercase();
                    if name == "content-length" {
                        content_length = value.trim().parse().unwrap();
                    } else if name == "content-type" {
                        content_type = Some(value.trim().to_string());
                    }
                }
            }

            let mut body_bytes = vec![0u8; content_length];
            reader.read_exact(&mut body_bytes).unwrap();
            let _ = tx.send(CapturedRequest {
                request_line: request_line.trim_end().to_string(),
                content_type,
                body: String::from_utf8(body_bytes).unwrap(),
            });

            thread::sleep(delay);

            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let mut stream = stream;
            // The client may already have given up when the delay exceeds its timeout.
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.flush();
        });

        (format!("http://{addr}"), rx)
    }

    fn client_for(base_url: &str, timeout_ms: u64) -> HttpRecommendClient {
        let config = ClientConfig::new(base_url, timeout_ms, 5).unwrap();
        HttpRecommendClient::new(&config).unwrap()
    }

    const THREE_RECORDS: &str = r#"[
        {"name": "Dr. A", "specialization": "Machine Learning", "bio": "a", "profile_url": "https://example.edu/a"},
        {"name": "Dr. B", "specialization": "Deep Learning", "bio": "b", "profile_url": "https://example.edu/b"},
        {"name": "Dr. C", "specialization": "Statistics", "bio": "c", "profile_url": "https://example.edu/c"}
    ]"#;

    #[test]
    fn test_posts_query_and_top_k_to_recommend() {
        let (url, captured) = spawn_stub("200 OK", "[]", Duration::ZERO);
        let client = client_for(&url, 2_000);

        let records = client
            .recommend(&RecommendRequest::new("Machine Learning", 5))
            .unwrap();
        assert!(records.is_empty());

        let request = captured.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(request.request_line, "POST /recommend HTTP/1.1");
        assert_eq!(request.content_type.as_deref(), Some("application/json"));

        let body: serde_json::Value = serde_json::from_str(&request.body).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "query": "Machine Learning", "top_k": 5 })
        );
    }

    #[test]
    fn test_success_preserves_backend_order() {
        let (url, _captured) = spawn_stub("200 OK", THREE_RECORDS, Duration::ZERO);
        let client = client_for(&url, 2_000);

        let records = client
            .recommend(&RecommendRequest::new("learning", 5))
            .unwrap();

        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Dr. A", "Dr. B", "Dr. C"]);
        assert_eq!(records[1].profile_url, "https://example.edu/b");
    }

    #[test]
    fn test_server_error_maps_to_status() {
        let (url, _captured) = spawn_stub(
            "500 Internal Server Error",
            r#"{"detail":"boom"}"#,
            Duration::ZERO,
        );
        let client = client_for(&url, 2_000);

        let err = client
            .recommend(&RecommendRequest::new("Quantum", 5))
            .unwrap_err();
        assert!(matches!(err, TransportError::Status(500)));
    }

    #[test]
    fn test_non_array_body_maps_to_decode() {
        let (url, _captured) = spawn_stub(
            "200 OK",
            r#"{"error":"Faculty not found"}"#,
            Duration::ZERO,
        );
        let client = client_for(&url, 2_000);

        let err = client
            .recommend(&RecommendRequest::new("Quantum", 5))
            .unwrap_err();
        assert!(matches!(err, TransportError::Decode(_)));
    }

    #[test]
    fn test_slow_backend_times_out() {
        let (url, _captured) = spawn_stub("200 OK", "[]", Duration::from_millis(1_500));
        let client = client_for(&url, 200);

        let err = client
            .recommend(&RecommendRequest::new("Quantum", 5))
            .unwrap_err();
        assert!(err.is_timeout(), "expected timeout, got {err:?}");
    }

    #[test]
    fn test_unreachable_backend_is_a_transport_error() {
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let client = client_for(&format!("http://127.0.0.1:{port}"), 2_000);

        let err = client
            .recommend(&RecommendRequest::new("Quantum", 5))
            .unwrap_err();
        assert!(matches!(
            err,
            TransportError::Connect(_) | TransportError::Request(_)
        ));
    }

    #[test]
    fn test_endpoint_is_derived_from_config() {
        let client = client_for("https://api.example.edu/v1", 1_000);
        assert_eq!(
            client.endpoint().as_str(),
            "https://api.example.edu/v1/recommend"
        );
    }
}
