//! API route contract tests
//!
//! These tests mount the full Actix app with stub collaborators and
//! verify the exact JSON shapes the dashboard UI consumes.

#[cfg(test)]
mod tests {
    use crate::common::fixtures::{FailingSource, StaticSource, app_state, session};
    use actix_web::http::StatusCode;
    use actix_web::{test, web};
    use chrono::{Duration, Utc};
    use serde_json::{Value, json};
    use stackboard::core::health::EndpointSpec;
    use stackboard::server::{AppState, HttpServer};
    use std::sync::Arc;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mock_service(status_code: u16) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(status_code))
            .mount(&server)
            .await;
        server
    }

    fn spec_for(name: &str, server: &MockServer) -> EndpointSpec {
        EndpointSpec::new(name, format!("{}/health", server.uri()), 2_000)
    }

    async fn get_json(
        state: AppState,
        uri: &str,
        expected: StatusCode,
    ) -> Value {
        let app = test::init_service(HttpServer::create_app(web::Data::new(state))).await;
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), expected, "unexpected status for {uri}");
        test::read_body_json(resp).await
    }

    // ==================== Process Health ====================

    #[actix_web::test]
    async fn test_health_route() {
        let state = app_state(vec![], Arc::new(StaticSource(vec![])));
        let body = get_json(state, "/health", StatusCode::OK).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        assert!(body["timestamp"].is_string());
    }

    #[actix_web::test]
    async fn test_unknown_route_is_404() {
        let state = app_state(vec![], Arc::new(StaticSource(vec![])));
        let app = test::init_service(HttpServer::create_app(web::Data::new(state))).await;
        let req = test::TestRequest::get().uri("/api/nope").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    // ==================== Service Status ====================

    #[actix_web::test]
    async fn test_service_status_contract() {
        let online = mock_service(200).await;
        let broken = mock_service(500).await;
        let state = app_state(
            vec![spec_for("langfuse", &online), spec_for("ollama", &broken)],
            Arc::new(StaticSource(vec![])),
        );

        let body = get_json(state, "/api/services/status", StatusCode::OK).await;

        assert_eq!(body["status"], "degraded");
        assert_eq!(body["onlineCount"], 1);
        assert_eq!(body["totalCount"], 2);
        assert!(body["timestamp"].is_string());

        let services = body["services"].as_array().unwrap();
        assert_eq!(services.len(), 2);
        assert_eq!(services[0]["name"], "langfuse");
        assert_eq!(services[0]["status"], "online");
        assert!(services[0]["latency"].is_u64());
        assert!(services[0].get("error").is_none());
        assert_eq!(services[1]["name"], "ollama");
        assert_eq!(services[1]["status"], "offline");
        assert!(
            services[1]["error"]
                .as_str()
                .unwrap()
                .contains("HTTP 500")
        );
    }

    #[actix_web::test]
    async fn test_service_status_empty_config_is_all_healthy() {
        let state = app_state(vec![], Arc::new(StaticSource(vec![])));
        let body = get_json(state, "/api/services/status", StatusCode::OK).await;

        assert_eq!(body["status"], "all-healthy");
        assert_eq!(body["onlineCount"], 0);
        assert_eq!(body["totalCount"], 0);
        assert_eq!(body["services"].as_array().unwrap().len(), 0);
    }

    // ==================== Agent Activity ====================

    #[actix_web::test]
    async fn test_agent_activity_contract() {
        let now = Utc::now();
        let sessions = vec![
            session(
                "agent:market-research:discord",
                Some("anthropic/claude-3-5-sonnet-20241022"),
                12_500,
                now - Duration::minutes(1),
            ),
            session(
                "agent:ops:cron:hourly",
                Some("anthropic/claude-3-5-haiku-20241022"),
                2_000,
                now - Duration::minutes(2),
            ),
        ];
        let state = app_state(vec![], Arc::new(StaticSource(sessions)));

        let body = get_json(state, "/api/agents/activity", StatusCode::OK).await;

        // Cron-keyed sessions count toward totals but stay out of the feed
        assert_eq!(body["totalAgents"], 2);
        assert_eq!(body["activeNow"], 1);
        assert_eq!(body["stats"]["totalTokens"], 14_500);
        assert!(body.get("error").is_none());

        let agents = body["agents"].as_array().unwrap();
        assert_eq!(agents.len(), 1);
        assert_eq!(agents[0]["name"], "Market Research");
        assert_eq!(agents[0]["type"], "agent");
        assert_eq!(agents[0]["status"], "active");
        assert_eq!(agents[0]["model"], "claude-3-5-sonnet-20241022");
        assert_eq!(agents[0]["tokens"], 12_500);
        assert_eq!(agents[0]["tasks"], 3);
        assert_eq!(agents[0]["lastActive"], "1m ago");
    }

    #[actix_web::test]
    async fn test_agent_activity_degrades_when_source_fails() {
        let state = app_state(vec![], Arc::new(FailingSource));

        let body = get_json(
            state,
            "/api/agents/activity",
            StatusCode::INTERNAL_SERVER_ERROR,
        )
        .await;

        assert_eq!(body["error"], "Could not fetch agent activity");
        assert_eq!(body["totalAgents"], 0);
        assert_eq!(body["agents"].as_array().unwrap().len(), 0);
        assert_eq!(body["stats"]["totalTokens"], 0);
    }

    // ==================== Cost Metrics ====================

    #[actix_web::test]
    async fn test_cost_metrics_contract() {
        let now = Utc::now();
        let sessions = vec![session(
            "agent:main:discord",
            Some("gpt-4o"),
            1_000_000,
            now,
        )];
        let state = app_state(vec![], Arc::new(StaticSource(sessions)));

        let body = get_json(state, "/api/costs", StatusCode::OK).await;

        // 1M tokens at the blended gpt-4o rate of $10 per million
        assert_eq!(body["today"], json!(10.0));
        assert_eq!(body["thisMonth"], json!(10.0));
        assert_eq!(body["projectedMonthly"], json!(300.0));
        assert_eq!(body["costBreakdown"]["gpt-4o"], json!(10.0));
        assert_eq!(body["budgetStatus"], "under-budget");
        assert_eq!(body["monthlyTarget"], json!(300.0));
        assert_eq!(body["monthlyBudget"], json!(500.0));
        assert_eq!(body["savings"]["period"], "monthly");
        assert_eq!(body["dailyTrend"].as_object().unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_cost_metrics_degrades_when_source_fails() {
        let state = app_state(vec![], Arc::new(FailingSource));

        let body = get_json(state, "/api/costs", StatusCode::INTERNAL_SERVER_ERROR).await;

        assert_eq!(body["error"], "Could not fetch cost metrics");
        assert_eq!(body["today"], json!(0.0));
        assert_eq!(body["budgetStatus"], "under-budget");
        assert_eq!(body["costBreakdown"].as_object().unwrap().len(), 0);
    }

    // ==================== Dashboard Snapshot ====================

    #[actix_web::test]
    async fn test_dashboard_snapshot_combines_sections() {
        let online = mock_service(200).await;
        let now = Utc::now();
        let sessions = vec![session(
            "agent:research:discord",
            Some("gpt-4o-mini"),
            10_000,
            now,
        )];
        let state = app_state(
            vec![spec_for("langfuse", &online)],
            Arc::new(StaticSource(sessions)),
        );

        let body = get_json(state, "/api/dashboard", StatusCode::OK).await;

        assert!(body["timestamp"].is_string());
        assert_eq!(body["health"]["onlineCount"], 1);
        assert_eq!(body["health"]["status"], "all-healthy");
        assert_eq!(body["agents"]["totalAgents"], 1);
        assert!(body["costs"]["costBreakdown"]["gpt-4o-mini"].is_number());
    }

    #[actix_web::test]
    async fn test_dashboard_snapshot_degrades_without_sessions() {
        let online = mock_service(200).await;
        let state = app_state(vec![spec_for("langfuse", &online)], Arc::new(FailingSource));

        // Session failures degrade the sections but never fail the snapshot
        let body = get_json(state, "/api/dashboard", StatusCode::OK).await;

        assert_eq!(body["health"]["status"], "all-healthy");
        assert_eq!(body["agents"]["error"], "Could not fetch agent activity");
        assert_eq!(body["costs"]["error"], "Could not fetch cost metrics");
    }

    // ==================== Settings ====================

    #[actix_web::test]
    async fn test_settings_defaults_and_merge() {
        let state = app_state(vec![], Arc::new(StaticSource(vec![])));
        let app =
            test::init_service(HttpServer::create_app(web::Data::new(state))).await;

        let req = test::TestRequest::get().uri("/api/settings").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["settings"]["monitoring"]["updateInterval"], 5_000);
        assert_eq!(body["settings"]["alerts"]["costThreshold"], json!(300.0));
        assert!(body["lastUpdated"].is_string());

        let patch = json!({
            "monitoring": {"updateInterval": 10_000},
            "alerts": {"costThreshold": 450.5}
        });
        let req = test::TestRequest::post()
            .uri("/api/settings")
            .set_json(&patch)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["settings"]["monitoring"]["updateInterval"], 10_000);
        assert_eq!(body["settings"]["alerts"]["costThreshold"], json!(450.5));
        // Untouched fields keep their defaults
        assert_eq!(body["settings"]["alerts"]["costAlertSlack"], false);
        assert_eq!(
            body["settings"]["services"]["whitelist"]
                .as_array()
                .unwrap()
                .len(),
            6
        );

        // The merge is visible on the next read
        let req = test::TestRequest::get().uri("/api/settings").to_request();
        let resp = test::call_service(&app, req).await;
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["settings"]["monitoring"]["updateInterval"], 10_000);
    }

    #[actix_web::test]
    async fn test_settings_rejects_malformed_payload() {
        let state = app_state(vec![], Arc::new(StaticSource(vec![])));
        let app =
            test::init_service(HttpServer::create_app(web::Data::new(state))).await;

        let req = test::TestRequest::post()
            .uri("/api/settings")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
