//! Probe execution and outcome classification.

use std::time::Duration;

use tracing::{error, info};

/// Classified result of a single reachability probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The endpoint answered with a status below 400.
    Reachable { status: u16 },
    /// The endpoint answered, but with a status of 400 or above.
    Denied { status: u16 },
    /// The request never produced a response (timeout, DNS failure,
    /// connection refused, TLS error).
    Unreachable { error: String },
}

impl ProbeOutcome {
    /// Whether the probe counts as successful.
    pub fn is_success(&self) -> bool {
        matches!(self, ProbeOutcome::Reachable { .. })
    }

    /// HTTP status code, when a response was received at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ProbeOutcome::Reachable { status } | ProbeOutcome::Denied { status } => Some(*status),
            ProbeOutcome::Unreachable { .. } => None,
        }
    }

    /// Transport error description, when the request never completed.
    pub fn error(&self) -> Option<&str> {
        match self {
            ProbeOutcome::Unreachable { error } => Some(error),
            _ => None,
        }
    }
}

/// Issue a single GET against `endpoint` with the given timeout.
///
/// The endpoint may be a bare `host:port` or a full URL; bare targets get
/// an `http://` prefix. All failures are classified into the returned
/// outcome; this never returns an error to the caller.
pub async fn probe(endpoint: &str, timeout: Duration) -> ProbeOutcome {
    let url = normalize_endpoint(endpoint);
    info!(%endpoint, "checking gsocket access");

    let client = match reqwest::Client::builder().timeout(timeout).build() {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "failed to build probe client");
            return ProbeOutcome::Unreachable {
                error: e.to_string(),
            };
        }
    };

    match client.get(&url).send().await {
        Ok(response) => {
            let status = response.status().as_u16();
            if status < 400 {
                info!(status, "gsocket access successful");
                ProbeOutcome::Reachable { status }
            } else {
                error!(status, "gsocket access failed");
                ProbeOutcome::Denied { status }
            }
        }
        Err(e) => {
            error!(error = %e, "gsocket access failed");
            ProbeOutcome::Unreachable {
                error: e.to_string(),
            }
        }
    }
}

/// Prefix bare `host:port` targets with an explicit scheme.
fn normalize_endpoint(endpoint: &str) -> String {
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        endpoint.to_string()
    } else {
        format!("http://{endpoint}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one connection with a canned HTTP response, then exit.
    async fn one_shot_server(status_line: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {status_line}\r\ncontent-length: 0\r\nconnection: close\r\n\r\n"
            );
            let _ = stream.write_all(response.as_bytes()).await;
        });

        addr.to_string()
    }

    #[test]
    fn normalize_adds_scheme_to_bare_targets() {
        assert_eq!(normalize_endpoint("localhost:8080"), "http://localhost:8080");
        assert_eq!(
            normalize_endpoint("http://localhost:8080"),
            "http://localhost:8080"
        );
        assert_eq!(
            normalize_endpoint("https://example.com/health"),
            "https://example.com/health"
        );
    }

    #[tokio::test]
    async fn probe_classifies_2xx_as_reachable() {
        let addr = one_shot_server("200 OK").await;
        let outcome = probe(&addr, Duration::from_secs(2)).await;
        assert!(outcome.is_success());
        assert_eq!(outcome.status(), Some(200));
        assert_eq!(outcome.error(), None);
    }

    #[tokio::test]
    async fn probe_classifies_3xx_as_reachable() {
        let addr = one_shot_server("302 Found").await;
        let outcome = probe(&addr, Duration::from_secs(2)).await;
        assert!(outcome.is_success());
        assert_eq!(outcome.status(), Some(302));
    }

    #[tokio::test]
    async fn probe_classifies_4xx_as_denied_with_status() {
        let addr = one_shot_server("404 Not Found").await;
        let outcome = probe(&addr, Duration::from_secs(2)).await;
        assert!(!outcome.is_success());
        assert_eq!(outcome.status(), Some(404));
        assert_eq!(outcome.error(), None);
    }

    #[tokio::test]
    async fn probe_classifies_5xx_as_denied() {
        let addr = one_shot_server("503 Service Unavailable").await;
        let outcome = probe(&addr, Duration::from_secs(2)).await;
        assert!(!outcome.is_success());
        assert_eq!(outcome.status(), Some(503));
    }

    #[tokio::test]
    async fn probe_to_closed_port_is_unreachable() {
        // Port 1 won't be listening.
        let outcome = probe("127.0.0.1:1", Duration::from_millis(500)).await;
        assert!(!outcome.is_success());
        assert_eq!(outcome.status(), None);
        assert!(outcome.error().is_some());
    }
}
