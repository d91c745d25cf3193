//! Stage 1 — fetch the source photograph.

use std::time::Duration;

use reqwest::Client;

use crate::error::OverlayError;

/// Download the image at `url`, returning its raw bytes.
///
/// Performs exactly one GET, bounded by `timeout`. A non-success status, a
/// timeout, or a transport failure each abort the pipeline; there are no
/// retries.
///
/// # Example
///
/// ```rust,no_run
/// use exif_overlay::fetch::fetch_image;
/// use std::time::Duration;
///
/// # async fn example() -> Result<(), exif_overlay::error::OverlayError> {
/// let client = reqwest::Client::new();
/// let bytes = fetch_image(
///     &client,
///     "https://example.com/photo.jpg",
///     Duration::from_secs(30),
/// )
/// .await?;
/// println!("Fetched {} bytes", bytes.len());
/// # Ok(())
/// # }
/// ```
pub async fn fetch_image(
    client: &Client,
    url: &str,
    timeout: Duration,
) -> Result<Vec<u8>, OverlayError> {
    log::info!("Downloading image from {url}...");
    let seconds = timeout.as_secs();

    let resp = client
        .get(url)
        .timeout(timeout)
        .send()
        .await
        .map_err(|e| classify(e, seconds))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(OverlayError::Network { status });
    }

    let body = resp.bytes().await.map_err(|e| classify(e, seconds))?;
    log::debug!("Fetched {} bytes ({status})", body.len());
    Ok(body.to_vec())
}

/// A timeout gets its own kind; everything else that happens before a status
/// line is a transport failure.
fn classify(err: reqwest::Error, seconds: u64) -> OverlayError {
    if err.is_timeout() {
        OverlayError::Timeout { seconds }
    } else {
        OverlayError::Transport(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;

    /// Serve a single canned HTTP response on a loopback port.
    fn serve_once(status_line: &'static str, body: Vec<u8>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 1024];
                let _ = stream.read(&mut buf);
                let header = format!(
                    "{status_line}\r\nContent-Type: application/octet-stream\r\n\
                     Content-Length: {}\r\nConnection: close\r\n\r\n",
                    body.len()
                );
                let _ = stream.write_all(header.as_bytes());
                let _ = stream.write_all(&body);
            }
        });
        format!("http://{addr}/image.jpg")
    }

    // ── fetch_image ──────────────────────────────────────────────────

    #[tokio::test]
    async fn returns_body_on_success() {
        let url = serve_once("HTTP/1.1 200 OK", b"payload".to_vec());
        let client = Client::new();

        let bytes = fetch_image(&client, &url, Duration::from_secs(5))
            .await
            .unwrap();
        assert_eq!(bytes, b"payload");
    }

    #[tokio::test]
    async fn non_success_status_is_network_error() {
        let url = serve_once("HTTP/1.1 500 Internal Server Error", Vec::new());
        let client = Client::new();

        let err = fetch_image(&client, &url, Duration::from_secs(5))
            .await
            .unwrap_err();
        match err {
            OverlayError::Network { status } => assert_eq!(status.as_u16(), 500),
            other => panic!("expected Network error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn not_found_is_network_error() {
        let url = serve_once("HTTP/1.1 404 Not Found", Vec::new());
        let client = Client::new();

        let err = fetch_image(&client, &url, Duration::from_secs(5))
            .await
            .unwrap_err();
        assert!(matches!(err, OverlayError::Network { .. }));
    }

    #[tokio::test]
    async fn refused_connection_is_transport_error() {
        // Bind and immediately drop the listener to get a dead port.
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let client = Client::new();

        let err = fetch_image(
            &client,
            &format!("http://127.0.0.1:{port}/image.jpg"),
            Duration::from_secs(5),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, OverlayError::Transport(_)));
    }

    #[tokio::test]
    async fn stalled_server_is_timeout_error() {
        // Accept the connection but never answer.
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || {
            if let Ok((stream, _)) = listener.accept() {
                std::thread::sleep(std::time::Duration::from_secs(10));
                drop(stream);
            }
        });
        let client = Client::new();

        let err = fetch_image(
            &client,
            &format!("http://{addr}/image.jpg"),
            Duration::from_millis(200),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, OverlayError::Timeout { .. }));
    }
}
