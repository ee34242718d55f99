// src/github/mock.rs
// =============================================================================
// A scripted GithubApi for tests.
//
// Replies are queued per path and handed out in order. A path with nothing
// queued answers 404, which is what GitHub does for a missing README.
// Every request is recorded so tests can assert exactly what was asked for.
// =============================================================================

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::StatusCode;
use serde_json::{json, Value};

use super::client::{ApiResponse, GithubApi};

/// One recorded request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub path: String,
    pub query: Vec<(String, String)>,
}

impl RecordedRequest {
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

enum Reply {
    Response(ApiResponse),
    TransportError(String),
}

#[derive(Default)]
pub struct ScriptedApi {
    replies: Mutex<HashMap<String, VecDeque<Reply>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply with the given status and raw body
    pub fn reply(&self, path: &str, status: u16, body: impl Into<String>) -> &Self {
        let status = StatusCode::from_u16(status).unwrap();
        self.push(path, Reply::Response(ApiResponse { status, body: body.into() }))
    }

    /// Queue a 200 reply with a JSON body
    pub fn reply_json(&self, path: &str, body: Value) -> &Self {
        self.reply(path, 200, body.to_string())
    }

    /// Queue a transport failure (no HTTP status at all)
    pub fn fail(&self, path: &str, message: &str) -> &Self {
        self.push(path, Reply::TransportError(message.to_string()))
    }

    /// Queue a contents-API reply carrying `text` as base64,
    /// wrapped at 60 columns like GitHub does
    pub fn reply_readme(&self, path: &str, text: &str) -> &Self {
        let encoded = STANDARD.encode(text.as_bytes());
        let wrapped: Vec<String> = encoded
            .as_bytes()
            .chunks(60)
            .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
            .collect();
        self.reply_json(
            path,
            json!({ "encoding": "base64", "content": wrapped.join("\n") + "\n" }),
        )
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        self.requests().into_iter().filter(|r| r.path == path).collect()
    }

    fn push(&self, path: &str, reply: Reply) -> &Self {
        self.replies
            .lock()
            .unwrap()
            .entry(path.to_string())
            .or_default()
            .push_back(reply);
        self
    }
}

#[async_trait]
impl GithubApi for ScriptedApi {
    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<ApiResponse> {
        self.requests.lock().unwrap().push(RecordedRequest {
            path: path.to_string(),
            query: query.iter().map(|(k, v)| (k.to_string(), v.clone())).collect(),
        });

        let next = self
            .replies
            .lock()
            .unwrap()
            .get_mut(path)
            .and_then(|queue| queue.pop_front());

        match next {
            Some(Reply::Response(response)) => Ok(response),
            Some(Reply::TransportError(message)) => Err(anyhow!(message)),
            None => Ok(ApiResponse {
                status: StatusCode::NOT_FOUND,
                body: r#"{"message":"Not Found"}"#.to_string(),
            }),
        }
    }
}
