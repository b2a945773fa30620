//! Minimal embedding example for ddns-update-core
//!
//! This example demonstrates using ddns-update-core as a library in a custom
//! application: the three seams are implemented in-process and the engine is
//! driven directly, with no HTTP anywhere.

use ddns_update_core::{
    Config, HttpResponse, Result, UpdateEngine, UpdateOutcome,
    traits::{IpSource, RecordResolver, UpdateRequest, UpdateService},
};

/// Resolver answering every query from a fixed table entry
struct EmbeddedResolver {
    published_ip: String,
}

#[async_trait::async_trait]
impl RecordResolver for EmbeddedResolver {
    async fn resolve(&self, name: &str, record_type: &str) -> Result<String> {
        println!("[Embedded] resolving {} {}", record_type, name);
        Ok(self.published_ip.clone())
    }
}

/// IP source reporting a fixed address
struct EmbeddedIpSource {
    current_ip: String,
}

#[async_trait::async_trait]
impl IpSource for EmbeddedIpSource {
    async fn current(&self) -> Result<String> {
        Ok(self.current_ip.clone())
    }
}

/// Update service that prints instead of calling out
struct EmbeddedUpdateService {
    update_calls: std::sync::Arc<std::sync::atomic::AtomicUsize>,
}

impl EmbeddedUpdateService {
    fn new() -> Self {
        Self {
            update_calls: std::sync::Arc::new(std::sync::atomic::AtomicUsize::new(0)),
        }
    }
}

#[async_trait::async_trait]
impl UpdateService for EmbeddedUpdateService {
    async fn trigger_update(&self, request: &UpdateRequest) -> Result<HttpResponse> {
        self.update_calls
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        println!(
            "[Embedded] updating zone {} record {}",
            request.zone_id, request.record
        );

        // Simulate a successful update
        Ok(HttpResponse {
            status: 200,
            body: "record updated\n".to_string(),
        })
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let config = Config::with_token("embedded-demo-token");

    let update_service = EmbeddedUpdateService::new();
    let update_calls = update_service.update_calls.clone();

    let engine = UpdateEngine::new(
        &config,
        Box::new(EmbeddedResolver {
            published_ip: "198.51.100.1".to_string(),
        }),
        Box::new(EmbeddedIpSource {
            current_ip: "198.51.100.2".to_string(),
        }),
        Box::new(update_service),
    )?;

    match engine.run_once().await? {
        UpdateOutcome::Unchanged { ip } => {
            println!("[Embedded] record already points at {}", ip);
        }
        UpdateOutcome::Updated {
            previous_ip,
            new_ip,
            response,
        } => {
            println!(
                "[Embedded] repointed {} -> {} ({})",
                previous_ip, new_ip, response.status
            );
        }
        UpdateOutcome::DryRun {
            previous_ip,
            new_ip,
        } => {
            println!("[Embedded] would repoint {} -> {}", previous_ip, new_ip);
        }
    }

    println!(
        "[Embedded] update endpoint called {} time(s)",
        update_calls.load(std::sync::atomic::Ordering::SeqCst)
    );

    Ok(())
}
