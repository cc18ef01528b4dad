//! Endpoint probing integration tests
//!
//! These tests run the prober against mock HTTP services to verify the
//! aggregation contract: one outcome per endpoint, input order kept, and
//! failures contained to their own entry.

#[cfg(test)]
mod tests {
    use stackboard::core::health::{EndpointSpec, HealthProber, OverallStatus, ProbeStatus};
    use std::time::{Duration, Instant};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mock_endpoint(status_code: u16, delay: Option<Duration>) -> MockServer {
        let server = MockServer::start().await;
        let mut template = ResponseTemplate::new(status_code);
        if let Some(delay) = delay {
            template = template.set_delay(delay);
        }
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(template)
            .mount(&server)
            .await;
        server
    }

    fn spec_for(name: &str, server: &MockServer, timeout_ms: u64) -> EndpointSpec {
        EndpointSpec::new(name, format!("{}/health", server.uri()), timeout_ms)
    }

    // ==================== Aggregation Contract ====================

    /// One outcome per endpoint, in input order, regardless of failures
    #[tokio::test]
    async fn test_probe_round_reports_every_endpoint_in_order() {
        let healthy = mock_endpoint(200, None).await;
        let broken = mock_endpoint(500, None).await;

        let specs = vec![
            spec_for("langfuse", &healthy, 2_000),
            spec_for("ollama", &broken, 2_000),
            EndpointSpec::new("qdrant", "http://127.0.0.1:1/healthz", 1_000),
        ];

        let aggregate = HealthProber::new().probe_all(&specs).await.unwrap();

        assert_eq!(aggregate.services.len(), 3);
        let names: Vec<&str> = aggregate
            .services
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, ["langfuse", "ollama", "qdrant"]);

        assert_eq!(aggregate.services[0].status, ProbeStatus::Online);
        assert_eq!(aggregate.services[1].status, ProbeStatus::Offline);
        assert_eq!(aggregate.services[2].status, ProbeStatus::Offline);

        assert_eq!(aggregate.status, OverallStatus::Degraded);
        assert_eq!(aggregate.online_count, 1);
        assert_eq!(aggregate.total_count, 3);
    }

    /// Every endpoint answering makes the aggregate all-healthy
    #[tokio::test]
    async fn test_all_healthy_when_every_endpoint_answers() {
        let first = mock_endpoint(200, None).await;
        let second = mock_endpoint(200, None).await;

        let specs = vec![
            spec_for("langfuse", &first, 2_000),
            spec_for("chroma", &second, 2_000),
        ];

        let aggregate = HealthProber::new().probe_all(&specs).await.unwrap();

        assert_eq!(aggregate.status, OverallStatus::AllHealthy);
        assert_eq!(aggregate.online_count, 2);
        assert_eq!(aggregate.total_count, 2);
        for outcome in &aggregate.services {
            assert_eq!(outcome.status, ProbeStatus::Online);
            assert!(outcome.latency_ms.is_some());
            assert!(outcome.error.is_none());
        }
    }

    // ==================== Status Classification ====================

    /// Auth walls and other 4xx responses still prove the service is up
    #[tokio::test]
    async fn test_auth_walls_and_client_errors_count_online() {
        let auth_walled = mock_endpoint(401, None).await;
        let not_found = mock_endpoint(404, None).await;

        let specs = vec![
            spec_for("langfuse", &auth_walled, 2_000),
            spec_for("searxng", &not_found, 2_000),
        ];

        let aggregate = HealthProber::new().probe_all(&specs).await.unwrap();

        assert_eq!(aggregate.status, OverallStatus::AllHealthy);
        assert_eq!(aggregate.online_count, 2);
    }

    /// 5xx responses are offline entries that keep their measured latency
    #[tokio::test]
    async fn test_server_errors_reported_offline_with_latency() {
        let broken = mock_endpoint(503, None).await;

        let specs = vec![spec_for("anythingllm", &broken, 2_000)];
        let aggregate = HealthProber::new().probe_all(&specs).await.unwrap();

        let outcome = &aggregate.services[0];
        assert_eq!(outcome.status, ProbeStatus::Offline);
        assert!(outcome.latency_ms.is_some());
        assert!(outcome.error.as_deref().unwrap().contains("HTTP 503"));
    }

    /// A probe that exceeds its own timeout reports offline without latency
    #[tokio::test]
    async fn test_slow_endpoint_times_out_without_latency() {
        let slow = mock_endpoint(200, Some(Duration::from_millis(500))).await;

        let specs = vec![spec_for("ollama", &slow, 100)];
        let aggregate = HealthProber::new().probe_all(&specs).await.unwrap();

        let outcome = &aggregate.services[0];
        assert_eq!(outcome.status, ProbeStatus::Offline);
        assert!(outcome.latency_ms.is_none());
        assert!(
            outcome
                .error
                .as_deref()
                .unwrap()
                .contains("timed out after 100ms")
        );
    }

    /// An unreachable endpoint never drags down its healthy siblings
    #[tokio::test]
    async fn test_unreachable_service_keeps_healthy_sibling_online() {
        let healthy = mock_endpoint(200, None).await;

        let specs = vec![
            spec_for("langfuse", &healthy, 2_000),
            EndpointSpec::new("qdrant", "http://127.0.0.1:1/healthz", 1_000),
        ];

        let aggregate = HealthProber::new().probe_all(&specs).await.unwrap();

        assert_eq!(aggregate.status, OverallStatus::Degraded);
        assert_eq!(aggregate.online_count, 1);
        assert_eq!(aggregate.total_count, 2);
        assert_eq!(aggregate.services[0].status, ProbeStatus::Online);
        assert_eq!(aggregate.services[1].status, ProbeStatus::Offline);
        assert!(aggregate.services[1].error.is_some());
    }

    // ==================== Concurrency ====================

    /// Probes run concurrently, so the round is bounded by the slowest
    /// endpoint rather than the sum of latencies
    #[tokio::test]
    async fn test_probe_round_wall_time_bounded_by_slowest() {
        let delay = Duration::from_millis(500);
        let first = mock_endpoint(200, Some(delay)).await;
        let second = mock_endpoint(200, Some(delay)).await;
        let third = mock_endpoint(200, Some(delay)).await;

        let specs = vec![
            spec_for("langfuse", &first, 5_000),
            spec_for("ollama", &second, 5_000),
            spec_for("chroma", &third, 5_000),
        ];

        let start = Instant::now();
        let aggregate = HealthProber::new().probe_all(&specs).await.unwrap();
        let elapsed = start.elapsed();

        assert_eq!(aggregate.online_count, 3);
        // Sequential probing would take at least 1500ms
        assert!(
            elapsed < Duration::from_millis(1_200),
            "probe round took {elapsed:?}, expected concurrent execution"
        );
    }
}
