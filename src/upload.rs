/// Multipart upload client
///
/// Serializes a form snapshot plus the prepared photo into a single
/// multipart/form-data POST against the configured endpoint. Any 2xx
/// response counts as success; nothing is retried.

use reqwest::multipart::{Form, Part};
use std::time::Duration;
use thiserror::Error;

use crate::state::form::FormSnapshot;

/// Errors surfaced by an upload attempt
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UploadError {
    /// The server answered with a non-success status
    #[error("server rejected the upload with status {status}")]
    ServerRejected { status: u16 },
    /// The request never completed (timeout, DNS, connection refused)
    #[error("network failure: {0}")]
    NetworkFailure(String),
    /// The prepared photo could not be read from disk
    #[error("failed to read photo: {0}")]
    PhotoUnreadable(String),
}

/// HTTP client bound to the record endpoint
#[derive(Debug, Clone)]
pub struct UploadClient {
    http: reqwest::Client,
    endpoint: String,
}

impl UploadClient {
    /// Build a client for the given endpoint
    ///
    /// The timeout covers the whole request; expiry surfaces as
    /// `UploadError::NetworkFailure`.
    pub fn new(endpoint: String, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        UploadClient { http, endpoint }
    }

    /// POST one record as multipart form data
    ///
    /// The body carries five text parts (idno, lastname, firstname,
    /// course, level) and one file part named `image` whose filename
    /// is `<idno>.jpg` with content type `image/jpeg`.
    pub async fn upload(&self, snapshot: FormSnapshot) -> Result<(), UploadError> {
        let photo_bytes = tokio::fs::read(&snapshot.photo)
            .await
            .map_err(|e| UploadError::PhotoUnreadable(e.to_string()))?;

        println!(
            "⬆️  Uploading record {} ({} photo bytes) to {}",
            snapshot.id_number,
            photo_bytes.len(),
            self.endpoint
        );

        let form = build_form(&snapshot, photo_bytes)?;

        let response = self
            .http
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| UploadError::NetworkFailure(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            println!("✅ Server accepted record {} ({})", snapshot.id_number, status);
            Ok(())
        } else {
            eprintln!("❌ Server rejected record {} ({})", snapshot.id_number, status);
            Err(UploadError::ServerRejected {
                status: status.as_u16(),
            })
        }
    }
}

/// Build the multipart body: five text parts plus the photo file part
fn build_form(snapshot: &FormSnapshot, photo_bytes: Vec<u8>) -> Result<Form, UploadError> {
    let photo_part = Part::bytes(photo_bytes)
        .file_name(format!("{}.jpg", snapshot.id_number))
        .mime_str("image/jpeg")
        .map_err(|e| UploadError::NetworkFailure(e.to_string()))?;

    Ok(Form::new()
        .text("idno", snapshot.id_number.clone())
        .text("lastname", snapshot.last_name.clone())
        .text("firstname", snapshot.first_name.clone())
        .text("course", snapshot.course.clone())
        .text("level", snapshot.level.clone())
        .part("image", photo_part))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::{TcpListener, TcpStream};
    use std::path::PathBuf;
    use std::thread;

    fn snapshot(photo: PathBuf) -> FormSnapshot {
        FormSnapshot {
            id_number: "123".to_string(),
            last_name: "Cruz".to_string(),
            first_name: "Ana".to_string(),
            course: "BSCS".to_string(),
            level: "3".to_string(),
            photo,
        }
    }

    fn temp_photo(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, b"\xFF\xD8 fake jpeg bytes \xFF\xD9").unwrap();
        path
    }

    fn client(endpoint: String) -> UploadClient {
        UploadClient::new(endpoint, Duration::from_secs(5))
    }

    /// One-shot HTTP server: reads one full request, answers with the
    /// given status line, and hands the raw request back for
    /// inspection.
    fn one_shot_server(status_line: &'static str) -> (String, thread::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let request = read_full_request(&mut stream);
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
                status_line
            );
            stream.write_all(response.as_bytes()).unwrap();
            request
        });

        (format!("http://{}/saveimage", addr), handle)
    }

    /// Read headers plus the Content-Length-delimited body
    fn read_full_request(stream: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];

        loop {
            let n = stream.read(&mut chunk).unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);

            if let Some(header_end) = find(&buf, b"\r\n\r\n") {
                let headers = String::from_utf8_lossy(&buf[..header_end]).to_string();
                let content_length = headers
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        if name.eq_ignore_ascii_case("content-length") {
                            value.trim().parse::<usize>().ok()
                        } else {
                            None
                        }
                    })
                    .unwrap_or(0);

                if buf.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }

        String::from_utf8_lossy(&buf).to_string()
    }

    fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
        haystack.windows(needle.len()).position(|w| w == needle)
    }

    #[tokio::test]
    async fn test_upload_succeeds_on_201() {
        let (endpoint, server) = one_shot_server("201 Created");
        let photo = temp_photo("upload_201.jpg");

        let result = client(endpoint).upload(snapshot(photo)).await;
        assert_eq!(result, Ok(()));

        // The body must carry all six parts with the wire field names
        let request = server.join().unwrap();
        assert!(request.starts_with("POST /saveimage"));
        for field in ["idno", "lastname", "firstname", "course", "level"] {
            assert!(
                request.contains(&format!("name=\"{}\"", field)),
                "missing text part {}",
                field
            );
        }
        assert!(request.contains("name=\"image\""));
        assert!(request.contains("filename=\"123.jpg\""));
        assert!(request.contains("image/jpeg"));
        // The redesigned request carries no query-string duplicates
        assert!(!request.contains("/saveimage?"));
    }

    #[tokio::test]
    async fn test_upload_succeeds_on_200() {
        let (endpoint, server) = one_shot_server("200 OK");
        let photo = temp_photo("upload_200.jpg");

        let result = client(endpoint).upload(snapshot(photo)).await;
        assert_eq!(result, Ok(()));
        server.join().unwrap();
    }

    #[tokio::test]
    async fn test_upload_rejected_on_403() {
        let (endpoint, server) = one_shot_server("403 Forbidden");
        let photo = temp_photo("upload_403.jpg");

        let result = client(endpoint).upload(snapshot(photo)).await;
        assert_eq!(result, Err(UploadError::ServerRejected { status: 403 }));
        server.join().unwrap();
    }

    #[tokio::test]
    async fn test_upload_rejected_on_500() {
        let (endpoint, server) = one_shot_server("500 Internal Server Error");
        let photo = temp_photo("upload_500.jpg");

        let result = client(endpoint).upload(snapshot(photo)).await;
        assert_eq!(result, Err(UploadError::ServerRejected { status: 500 }));
        server.join().unwrap();
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_failure() {
        // Bind then drop the listener so the port is free but closed
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let endpoint = format!("http://{}/saveimage", listener.local_addr().unwrap());
        drop(listener);

        let photo = temp_photo("upload_refused.jpg");
        let result = client(endpoint).upload(snapshot(photo)).await;
        assert!(matches!(result, Err(UploadError::NetworkFailure(_))));
    }

    #[tokio::test]
    async fn test_timeout_is_network_failure() {
        // A server that accepts but never answers
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let endpoint = format!("http://{}/saveimage", listener.local_addr().unwrap());
        thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            thread::sleep(Duration::from_secs(5));
            drop(stream);
        });

        let photo = temp_photo("upload_timeout.jpg");
        let stalled = UploadClient::new(endpoint, Duration::from_millis(300));
        let result = stalled.upload(snapshot(photo)).await;
        assert!(matches!(result, Err(UploadError::NetworkFailure(_))));
    }

    #[tokio::test]
    async fn test_missing_photo_is_unreadable() {
        let gone = std::env::temp_dir().join("no-such-photo.jpg");
        let result = client("http://127.0.0.1:1/saveimage".to_string())
            .upload(snapshot(gone))
            .await;
        assert!(matches!(result, Err(UploadError::PhotoUnreadable(_))));
    }
}
