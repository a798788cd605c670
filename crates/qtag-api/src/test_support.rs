//! In-memory [`Transport`] that records every call and replays canned replies.
//!
//! Replies are queued per `(method, path)`. Each call pops the front reply;
//! the last reply of a queue is kept and repeated. A call with no queued
//! reply fails with a 404 [`ApiError::Api`].

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use qtag_core::{HostAsset, Tag};
use serde_json::{Value, json};

use crate::error::ApiError;
use crate::transport::Transport;

/// One recorded request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Get { path: String },
    Post { path: String, body: Value },
}

impl Call {
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Get { path } | Self::Post { path, .. } => path,
        }
    }
}

/// Canned reply for a route.
#[derive(Debug, Clone)]
pub enum Reply {
    Json(Value),
    Status(u16, String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Method {
    Get,
    Post,
}

#[derive(Debug, Default)]
pub struct RecordingTransport {
    routes: Mutex<HashMap<(Method, String), VecDeque<Reply>>>,
    calls: Mutex<Vec<Call>>,
}

impl RecordingTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply for `GET path`.
    pub fn on_get(&self, path: &str, reply: Reply) -> &Self {
        self.queue(Method::Get, path, reply)
    }

    /// Queue a reply for `POST path`.
    pub fn on_post(&self, path: &str, reply: Reply) -> &Self {
        self.queue(Method::Post, path, reply)
    }

    /// Every call made so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().expect("calls lock").clone()
    }

    /// Recorded calls whose path starts with `prefix`.
    #[must_use]
    pub fn calls_to(&self, prefix: &str) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|call| call.path().starts_with(prefix))
            .collect()
    }

    fn queue(&self, method: Method, path: &str, reply: Reply) -> &Self {
        self.routes
            .lock()
            .expect("routes lock")
            .entry((method, path.to_string()))
            .or_default()
            .push_back(reply);
        self
    }

    fn reply(&self, method: Method, path: &str) -> Result<Value, ApiError> {
        let mut routes = self.routes.lock().expect("routes lock");
        let reply = routes
            .get_mut(&(method, path.to_string()))
            .and_then(|queue| {
                if queue.len() > 1 {
                    queue.pop_front()
                } else {
                    queue.front().cloned()
                }
            });

        match reply {
            Some(Reply::Json(value)) => Ok(value),
            Some(Reply::Status(status, message)) => Err(ApiError::Api { status, message }),
            None => Err(ApiError::Api {
                status: 404,
                message: format!("no reply queued for {method:?} {path}"),
            }),
        }
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn get(&self, path: &str) -> Result<Value, ApiError> {
        self.calls.lock().expect("calls lock").push(Call::Get {
            path: path.to_string(),
        });
        self.reply(Method::Get, path)
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.calls.lock().expect("calls lock").push(Call::Post {
            path: path.to_string(),
            body: body.clone(),
        });
        self.reply(Method::Post, path)
    }
}

/// Response and entity builders shaped like real platform payloads.
pub mod fixtures {
    use super::{HostAsset, Reply, Tag, Value, json};

    #[must_use]
    pub fn host(id: u64, name: &str, dns_host_name: Option<&str>) -> HostAsset {
        HostAsset {
            id,
            name: name.to_string(),
            dns_host_name: dns_host_name.map(str::to_string),
            tags: qtag_core::TagList::default(),
        }
    }

    #[must_use]
    pub fn tag(id: u64, name: &str) -> Tag {
        Tag {
            id,
            name: name.to_string(),
        }
    }

    #[must_use]
    pub fn hosts_reply(hosts: &[HostAsset]) -> Reply {
        let data = hosts
            .iter()
            .map(|host| json!({ "HostAsset": host }))
            .collect::<Vec<_>>();
        Reply::Json(success(data))
    }

    #[must_use]
    pub fn tags_reply(tags: &[Tag]) -> Reply {
        let data = tags
            .iter()
            .map(|tag| json!({ "Tag": tag }))
            .collect::<Vec<_>>();
        Reply::Json(success(data))
    }

    /// Reply of a successful update call.
    #[must_use]
    pub fn updated_reply(id: u64) -> Reply {
        Reply::Json(success(vec![json!({ "HostAsset": { "id": id } })]))
    }

    fn success(data: Vec<Value>) -> Value {
        json!({
            "ServiceResponse": {
                "responseCode": "SUCCESS",
                "count": data.len(),
                "data": data
            }
        })
    }
}
