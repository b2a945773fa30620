//! Test doubles and common utilities for the engine contract tests
//!
//! The doubles are `Clone`: clones share the same call counters and
//! captured requests, so a test can keep one handle for assertions and
//! hand a boxed clone to the engine.

use ddns_update_core::error::Result;
use ddns_update_core::traits::{IpSource, RecordResolver, UpdateRequest, UpdateService};
use ddns_update_core::{Config, Error, HttpResponse};
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Scripted behavior for [`ScriptedResolver`]
#[derive(Clone)]
enum ResolverScript {
    /// Answer every query with this record data
    Answer(String),
    /// Reject every query as a non-200 DoH response
    FailStatus { status: u16, body: String },
}

/// A record resolver that replays a script and tracks calls
#[derive(Clone)]
pub struct ScriptedResolver {
    script: ResolverScript,
    calls: Arc<AtomicUsize>,
    queries: Arc<Mutex<Vec<(String, String)>>>,
}

impl ScriptedResolver {
    /// Resolver that answers every query with `data`
    pub fn answering(data: impl Into<String>) -> Self {
        Self {
            script: ResolverScript::Answer(data.into()),
            calls: Arc::new(AtomicUsize::new(0)),
            queries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Resolver that fails every query with a non-200 status
    pub fn failing_with_status(status: u16, body: impl Into<String>) -> Self {
        Self {
            script: ResolverScript::FailStatus {
                status,
                body: body.into(),
            },
            calls: Arc::new(AtomicUsize::new(0)),
            queries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of times resolve() was called
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The (name, record_type) pairs seen so far
    pub fn queries(&self) -> Vec<(String, String)> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl RecordResolver for ScriptedResolver {
    async fn resolve(&self, name: &str, record_type: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries
            .lock()
            .unwrap()
            .push((name.to_string(), record_type.to_string()));

        match &self.script {
            ResolverScript::Answer(data) => Ok(data.clone()),
            ResolverScript::FailStatus { status, body } => {
                Err(Error::resolver(*status, body.clone()))
            }
        }
    }
}

/// Scripted behavior for [`ScriptedIpSource`]
#[derive(Clone)]
enum IpScript {
    Observe(String),
    FailTransport(String),
}

/// An IP source that replays a script and tracks calls
#[derive(Clone)]
pub struct ScriptedIpSource {
    script: IpScript,
    calls: Arc<AtomicUsize>,
}

impl ScriptedIpSource {
    /// Source that observes `ip` on every call
    pub fn observing(ip: impl Into<String>) -> Self {
        Self {
            script: IpScript::Observe(ip.into()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Source that fails every call with a transport error
    pub fn failing(msg: impl Into<String>) -> Self {
        Self {
            script: IpScript::FailTransport(msg.into()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of times current() was called
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl IpSource for ScriptedIpSource {
    async fn current(&self) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.script {
            IpScript::Observe(ip) => Ok(ip.clone()),
            IpScript::FailTransport(msg) => Err(Error::transport(msg.clone())),
        }
    }
}

/// An update service that records every request and replies with a canned response
#[derive(Clone)]
pub struct MockUpdateService {
    reply: HttpResponse,
    calls: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<UpdateRequest>>>,
}

impl MockUpdateService {
    /// Service replying 200 with a fixed body
    pub fn new() -> Self {
        Self::replying(200, "record updated\n")
    }

    /// Service replying with the given status and body
    pub fn replying(status: u16, body: impl Into<String>) -> Self {
        Self {
            reply: HttpResponse {
                status,
                body: body.into(),
            },
            calls: Arc::new(AtomicUsize::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of times trigger_update() was called
    pub fn trigger_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The requests received so far
    pub fn requests(&self) -> Vec<UpdateRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl UpdateService for MockUpdateService {
    async fn trigger_update(&self, request: &UpdateRequest) -> Result<HttpResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());
        Ok(self.reply.clone())
    }
}

/// Helper to create a minimal Config for testing
pub fn minimal_config() -> Config {
    Config::with_token("test-token")
}
