//! Chat, streaming, summaries and report widgets.

mod common;

use auras_client::mock::{MockResponse, MockServer};
use auras_core::enums::{GhostActionKind, LoopStatus, MeetingStatus, SummaryKind, Widget};
use auras_core::payloads::{ChatContext, ChatRequest, SummaryRequest};
use auras_services::DEFAULT_GHOST_ACTION_LIMIT;
use common::{serve, services_at};
use pretty_assertions::assert_eq;
use serde_json::json;

#[tokio::test]
async fn send_message_returns_answer_with_widget() {
    let (server, services) = serve(vec![(
        "POST",
        "/api/chat",
        MockResponse::json(
            200,
            json!({
                "success": true,
                "message": "3 tasks are blocked",
                "widget": "table",
                "data": [{"id": "t-1"}],
                "suggestions": ["Show blockers"]
            }),
        ),
    )]);
    let request = ChatRequest::new("what is blocked?").with_context(ChatContext {
        project_id: Some("p-1".into()),
        ..ChatContext::default()
    });

    let answer = services.ai.send_message(&request).await.unwrap();
    assert_eq!(answer.widget, Some(Widget::Table));
    assert_eq!(answer.suggestions, ["Show blockers"]);
    assert_eq!(
        server.requests()[0].json(),
        json!({"message": "what is blocked?", "context": {"projectId": "p-1"}})
    );
}

#[tokio::test]
async fn send_message_failure_uses_fallback() {
    let services = services_at(&MockServer::unreachable_base_url());
    let err = services
        .ai
        .send_message(&ChatRequest::new("hi"))
        .await
        .unwrap_err();
    assert_eq!(err.message, "Failed to send message");
    assert_eq!(err.status, None);
}

#[tokio::test]
async fn streamed_chat_delivers_every_chunk_with_auth() {
    let (server, services) = serve(vec![(
        "POST",
        "/api/chat/stream",
        MockResponse::chunked(200, &["Sprint 4 ", "is on ", "track."]),
    )]);
    services.session().establish("T1", None).unwrap();

    let mut received = Vec::new();
    let full = services
        .ai
        .send_message_stream(&ChatRequest::new("status?"), |chunk| {
            received.push(chunk.to_string());
        })
        .await
        .unwrap();

    assert_eq!(full, "Sprint 4 is on track.");
    assert_eq!(received.concat(), full);
    assert!(!received.is_empty());
    assert_eq!(server.requests()[0].header("authorization"), Some("Bearer T1"));
}

#[tokio::test]
async fn streamed_chat_failure_has_fixed_message() {
    let (_server, services) = serve(vec![(
        "POST",
        "/api/chat/stream",
        MockResponse::json(503, json!({"message": "model overloaded"})),
    )]);

    let mut calls = 0;
    let err = services
        .ai
        .send_message_stream(&ChatRequest::new("status?"), |_| calls += 1)
        .await
        .unwrap_err();
    assert_eq!(err.message, "Failed to stream message");
    assert_eq!(err.status, Some(503));
    assert_eq!(calls, 0);
}

#[tokio::test]
async fn summary_and_analyses() {
    let (server, services) = serve(vec![
        (
            "POST",
            "/api/summary",
            MockResponse::json(
                200,
                json!({"success": true, "summary": "Good week", "insights": ["a"], "recommendations": []}),
            ),
        ),
        (
            "POST",
            "/api/analyze/sprint",
            MockResponse::json(200, json!({"success": true, "health": 0.8})),
        ),
        (
            "POST",
            "/api/analyze/burnout",
            MockResponse::json(400, json!({})),
        ),
    ]);
    let request = SummaryRequest {
        kind: SummaryKind::Weekly,
        project_id: Some("p-1".into()),
        sprint_id: None,
        meeting_id: None,
    };

    let summary = services.ai.generate_summary(&request).await.unwrap();
    assert_eq!(summary.summary, "Good week");

    let health = services.ai.analyze_sprint_health("s-4").await.unwrap();
    assert_eq!(health["health"], 0.8);

    let err = services.ai.analyze_burnout(None).await.unwrap_err();
    assert_eq!(err.message, "Failed to analyze burnout");

    let recorded = server.requests();
    assert_eq!(recorded[0].json(), json!({"type": "weekly", "projectId": "p-1"}));
    assert_eq!(recorded[1].json(), json!({"sprintId": "s-4"}));
    assert_eq!(recorded[2].json(), json!({}));
}

#[tokio::test]
async fn suggestions_and_ghost_actions_default_to_empty() {
    let (server, services) = serve(vec![
        (
            "GET",
            "/api/suggestions",
            MockResponse::json(200, json!({"suggestions": ["Plan sprint 5"]})),
        ),
        (
            "GET",
            "/api/ghost-actions",
            MockResponse::json(500, json!({"message": "nope"})),
        ),
    ]);

    assert_eq!(services.ai.get_suggestions(Some("p-1")).await, ["Plan sprint 5"]);
    assert!(services.ai.get_ghost_actions(DEFAULT_GHOST_ACTION_LIMIT).await.is_empty());

    let recorded = server.requests();
    assert_eq!(recorded[0].query.as_deref(), Some("projectId=p-1"));
    assert_eq!(recorded[1].query.as_deref(), Some("limit=10"));
}

#[tokio::test]
async fn report_widgets_decode() {
    let (server, services) = serve(vec![
        (
            "GET",
            "/api/reports/execution-health",
            MockResponse::json(
                200,
                json!({"success": true, "data": {"sprintProgress": 64, "healthy": 12, "atRisk": 3, "blocked": 1}}),
            ),
        ),
        (
            "GET",
            "/api/reports/discussion-loops",
            MockResponse::json(
                200,
                json!({"loops": [{
                    "id": "d-1", "topic": "Pricing", "status": "stalled",
                    "participants": ["ana"], "lastUpdated": "2d ago"
                }]}),
            ),
        ),
        (
            "GET",
            "/api/reports/ghost-actions",
            MockResponse::json(
                200,
                json!({"actions": [{
                    "id": "g-1", "action": "Escalated blocker", "timestamp": "now", "type": "escalation"
                }]}),
            ),
        ),
        (
            "GET",
            "/api/reports/meetings",
            MockResponse::json(
                200,
                json!({"meetings": [{
                    "id": "m-1", "title": "Standup", "duration": 15, "participants": 6, "status": "live"
                }]}),
            ),
        ),
    ]);

    let health = services.reports.get_execution_health(Some("s-4")).await.unwrap();
    assert_eq!(health.at_risk, 3);
    assert_eq!(health.velocity_alert, None);

    let loops = services.reports.get_discussion_loops().await;
    assert_eq!(loops[0].status, LoopStatus::Stalled);

    let actions = services.reports.get_ghost_actions(5).await;
    assert_eq!(actions[0].kind, GhostActionKind::Escalation);

    let meetings = services.reports.get_meetings(Some(MeetingStatus::Live)).await;
    assert_eq!(meetings[0].participants, 6);

    let recorded = server.requests();
    assert_eq!(recorded[0].query.as_deref(), Some("sprintId=s-4"));
    assert_eq!(recorded[2].query.as_deref(), Some("limit=5"));
    assert_eq!(recorded[3].query.as_deref(), Some("status=live"));
}

#[tokio::test]
async fn report_lists_are_empty_when_unreachable() {
    let services = services_at(&MockServer::unreachable_base_url());
    assert!(services.reports.get_discussion_loops().await.is_empty());
    assert!(services.reports.get_meetings(None).await.is_empty());
    assert!(services.reports.get_ghost_actions(10).await.is_empty());

    let err = services.reports.get_execution_health(None).await.unwrap_err();
    assert_eq!(err.message, "Failed to fetch execution health");
}

#[tokio::test]
async fn raw_report_payloads_pass_through() {
    let (server, services) = serve(vec![
        (
            "GET",
            "/api/reports/velocity",
            MockResponse::json(200, json!({"success": true, "velocity": [30, 42]})),
        ),
        (
            "GET",
            "/api/reports/burnout-risk",
            MockResponse::json(403, json!({"message": "Managers only"})),
        ),
        (
            "POST",
            "/api/reports/weekly",
            MockResponse::json(200, json!({"success": true, "report": "..."})),
        ),
    ]);
    services.session().establish("T1", None).unwrap();

    let velocity = services.reports.get_velocity_metrics(None).await.unwrap();
    assert_eq!(velocity["velocity"], json!([30, 42]));

    let err = services.reports.get_burnout_risk(Some("team-a")).await.unwrap_err();
    assert_eq!(err.message, "Managers only");
    assert_eq!(err.status, Some(403));
    assert!(services.session().is_authenticated());

    let weekly = services.reports.generate_weekly_report(Some("p-1")).await.unwrap();
    assert_eq!(weekly["success"], true);
    assert_eq!(server.requests()[2].json(), json!({"projectId": "p-1"}));
}
