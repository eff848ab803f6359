//! Shared fixtures: services wired to a scripted local server.

#![allow(dead_code)]

use auras_client::ApiClients;
use auras_client::mock::{MockResponse, MockServer};
use auras_config::{AurasConfig, ServicesConfig};
use auras_session::Session;
use auras_services::Services;
use serde_json::{Value, json};

/// Every backend pointed at `base_url`, with an in-memory session.
pub fn services_at(base_url: &str) -> Services {
    let config = AurasConfig {
        services: ServicesConfig::all_at(base_url),
        ..AurasConfig::default()
    };
    let clients = ApiClients::new(&config, Session::in_memory()).unwrap();
    Services::new(&clients)
}

pub fn serve(routes: Vec<(&str, &str, MockResponse)>) -> (MockServer, Services) {
    let server = MockServer::start(routes);
    let services = services_at(&server.base_url());
    (server, services)
}

pub fn user_json() -> Value {
    json!({"id": "1", "name": "A", "email": "a@b.com", "role": "Founder"})
}

pub fn task_json(id: &str) -> Value {
    json!({
        "id": id,
        "title": "Wire auth",
        "description": "",
        "status": "todo",
        "priority": "high",
        "projectId": "p-1",
        "createdAt": "2025-03-14T09:30:00Z",
        "updatedAt": "2025-03-14T09:30:00Z"
    })
}

pub fn project_json(id: &str) -> Value {
    json!({
        "id": id,
        "name": "Liaison",
        "description": "Executive assistant",
        "status": "active",
        "createdAt": "2025-03-14T09:30:00Z",
        "updatedAt": "2025-03-14T09:30:00Z"
    })
}

pub fn sprint_json(id: &str) -> Value {
    json!({
        "id": id,
        "name": "Sprint 4",
        "projectId": "p-1",
        "startDate": "2025-03-10",
        "endDate": "2025-03-24",
        "status": "active",
        "velocity": 42,
        "burnoutRisk": "low"
    })
}
