//! E2E test booting the full dashboard server
//!
//! Binds a real local port. Run with: cargo test -- --ignored

#[cfg(test)]
mod tests {
    use futures::StreamExt;
    use stackboard::Dashboard;
    use stackboard::config::Config;
    use stackboard::core::health::EndpointSpec;
    use std::time::Duration;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const PORT: u16 = 48123;

    /// Full round trip: boot the server, probe a mock service, read the
    /// JSON endpoints and the first SSE frame
    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    #[ignore]
    async fn test_server_serves_dashboard_over_http() {
        let service = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&service)
            .await;

        let mut config = Config::default();
        config.dashboard.server.host = "127.0.0.1".to_string();
        config.dashboard.server.port = PORT;
        config.dashboard.services.endpoints = vec![EndpointSpec::new(
            "langfuse",
            format!("{}/api/public/health", service.uri()),
            2_000,
        )];
        // Point the session source at a binary that cannot exist so the
        // degraded path is deterministic
        config.dashboard.sessions.program = "/nonexistent/stackboard-e2e-cli".to_string();

        let dashboard = Dashboard::new(config).unwrap();
        tokio::spawn(dashboard.run());

        let client = reqwest::Client::new();
        let base = format!("http://127.0.0.1:{PORT}");

        let mut ready = false;
        for _ in 0..50 {
            if client.get(format!("{base}/health")).send().await.is_ok() {
                ready = true;
                break;
            }
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        assert!(ready, "server did not come up on {base}");

        // Service status reflects the mock endpoint
        let status: serde_json::Value = client
            .get(format!("{base}/api/services/status"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(status["status"], "all-healthy");
        assert_eq!(status["totalCount"], 1);
        assert_eq!(status["services"][0]["name"], "langfuse");

        // The missing session CLI degrades the snapshot without failing it
        let resp = client
            .get(format!("{base}/api/dashboard"))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status().as_u16(), 200);
        let snapshot: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(snapshot["health"]["onlineCount"], 1);
        assert!(snapshot["agents"]["error"].is_string());
        assert!(snapshot["costs"]["error"].is_string());

        // The stream sends its first frame immediately
        let resp = client
            .get(format!("{base}/api/dashboard/stream"))
            .send()
            .await
            .unwrap();
        assert_eq!(
            resp.headers()["content-type"].to_str().unwrap(),
            "text/event-stream"
        );
        let mut stream = resp.bytes_stream();
        let mut frame = String::new();
        let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
        while !frame.contains("\n\n") {
            let chunk = tokio::time::timeout_at(deadline, stream.next())
                .await
                .expect("timed out waiting for first SSE frame")
                .expect("stream ended before first frame")
                .expect("stream errored");
            frame.push_str(&String::from_utf8_lossy(&chunk));
        }
        assert!(frame.starts_with("data: "));
        assert!(frame.contains("\"health\""));
    }
}
