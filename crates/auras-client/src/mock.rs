//! Scripted local HTTP server for exercising clients end to end.
//!
//! Routes are matched on exact method and path (query ignored). Every request
//! is recorded so tests can assert on headers and bodies after the fact.

use std::io::Cursor;
use std::net::TcpListener;
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::JoinHandle;

use serde_json::Value;
use tiny_http::{Header, Response, Server, StatusCode};

/// A canned response.
#[derive(Debug, Clone)]
pub struct MockResponse {
    status: u16,
    body: Vec<u8>,
    content_type: Option<&'static str>,
    chunked: bool,
}

impl MockResponse {
    #[must_use]
    pub fn json(status: u16, body: Value) -> Self {
        Self {
            status,
            body: body.to_string().into_bytes(),
            content_type: Some("application/json"),
            chunked: false,
        }
    }

    #[must_use]
    pub fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.as_bytes().to_vec(),
            content_type: Some("text/plain"),
            chunked: false,
        }
    }

    #[must_use]
    pub const fn empty(status: u16) -> Self {
        Self {
            status,
            body: Vec::new(),
            content_type: None,
            chunked: false,
        }
    }

    /// A plain-text body sent with chunked transfer encoding.
    ///
    /// The server may coalesce `parts` into fewer chunks on the wire.
    #[must_use]
    pub fn chunked(status: u16, parts: &[&str]) -> Self {
        Self {
            status,
            body: parts.concat().into_bytes(),
            content_type: Some("text/plain; charset=utf-8"),
            chunked: true,
        }
    }

    fn into_response(self) -> Response<Cursor<Vec<u8>>> {
        let headers = self
            .content_type
            .and_then(|value| Header::from_bytes(&b"Content-Type"[..], value.as_bytes()).ok())
            .into_iter()
            .collect();
        let length = (!self.chunked).then_some(self.body.len());
        Response::new(
            StatusCode(self.status),
            headers,
            Cursor::new(self.body),
            length,
            None,
        )
    }
}

/// A request the server received.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    /// Path plus query, as sent.
    pub url: String,
    pub path: String,
    pub query: Option<String>,
    /// Header names lowercased.
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    /// Value of the first header called `name`, case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        let name = name.to_ascii_lowercase();
        self.headers
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    /// The body as JSON, or `null` if it is not JSON.
    #[must_use]
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap_or(Value::Null)
    }
}

type Route = (String, String, MockResponse);

/// A running mock server. Stops when dropped.
pub struct MockServer {
    server: Arc<Server>,
    base_url: String,
    recorded: Arc<Mutex<Vec<RecordedRequest>>>,
    worker: Option<JoinHandle<()>>,
}

impl MockServer {
    /// Bind an ephemeral port on 127.0.0.1 and serve `routes`.
    ///
    /// Unmatched requests get `404 {"message":"no mock route"}`.
    ///
    /// # Panics
    ///
    /// Panics if no local port can be bound.
    #[must_use]
    pub fn start(routes: Vec<(&str, &str, MockResponse)>) -> Self {
        let server = Arc::new(Server::http("127.0.0.1:0").expect("bind mock server"));
        let base_url = server
            .server_addr()
            .to_ip()
            .map(|addr| format!("http://{addr}"))
            .unwrap_or_default();
        let routes: Vec<Route> = routes
            .into_iter()
            .map(|(method, path, response)| (method.to_ascii_uppercase(), path.to_string(), response))
            .collect();
        let recorded = Arc::new(Mutex::new(Vec::new()));

        let worker = {
            let server = Arc::clone(&server);
            let recorded = Arc::clone(&recorded);
            std::thread::spawn(move || serve(&server, &routes, &recorded))
        };

        Self {
            server,
            base_url,
            recorded,
            worker: Some(worker),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> String {
        self.base_url.clone()
    }

    /// Requests received so far, in arrival order.
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.recorded
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// A base URL on which nothing is listening.
    #[must_use]
    pub fn unreachable_base_url() -> String {
        let port = TcpListener::bind("127.0.0.1:0")
            .and_then(|listener| listener.local_addr())
            .map_or(9, |addr| addr.port());
        format!("http://127.0.0.1:{port}")
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.server.unblock();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

fn serve(server: &Server, routes: &[Route], recorded: &Mutex<Vec<RecordedRequest>>) {
    for mut request in server.incoming_requests() {
        let mut body = Vec::new();
        let _ = request.as_reader().read_to_end(&mut body);

        let method = request.method().as_str().to_ascii_uppercase();
        let url = request.url().to_string();
        let (path, query) = match url.split_once('?') {
            Some((path, query)) => (path.to_string(), Some(query.to_string())),
            None => (url.clone(), None),
        };
        let headers = request
            .headers()
            .iter()
            .map(|h| {
                (
                    h.field.as_str().as_str().to_ascii_lowercase(),
                    h.value.as_str().to_string(),
                )
            })
            .collect();

        let response = routes
            .iter()
            .find(|(m, p, _)| *m == method && *p == path)
            .map_or_else(
                || MockResponse::json(404, serde_json::json!({"message": "no mock route"})),
                |(_, _, response)| response.clone(),
            );

        recorded
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedRequest {
                method,
                url,
                path,
                query,
                headers,
                body,
            });

        let _ = request.respond(response.into_response());
    }
}
