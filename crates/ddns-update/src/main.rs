// # ddns-update - one-shot dynamic DNS update client
//
// The binary is a thin shell over ddns-update-core: read the environment,
// wire the HTTP implementations into the engine, run one cycle, exit.
//
// ## Configuration
//
// All configuration is done via environment variables:
//
// - `DDNS_UPDATE_AUTH_TOKEN`: token sent to the update endpoint (required)
// - `DDNS_MODE`: set to `dry-run` to skip the update call
// - `DDNS_LOG_LEVEL`: trace, debug, info, warn, error (default: info)
//
// ## Output
//
// Logs go to stderr. Stdout carries exactly one thing: the raw body of the
// update endpoint's response, when an update was triggered. A run that finds
// the record already in sync prints nothing and exits 0.
//
// ## Example
//
// ```bash
// export DDNS_UPDATE_AUTH_TOKEN=your_token
//
// ddns-update
// ```

use anyhow::Result;
use ddns_update_core::{Config, UpdateEngine, UpdateOutcome};
use ddns_update_http::{DohResolver, HttpIpSource, HttpUpdateService};
use std::env;
use tracing::{Level, debug, info};
use tracing_subscriber::FmtSubscriber;

/// Initialize tracing on stderr, leaving stdout to the update response
fn init_tracing() -> Result<()> {
    let log_level = match env::var("DDNS_LOG_LEVEL")
        .unwrap_or_default()
        .to_lowercase()
        .as_str()
    {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing()?;

    let config = Config::from_env()?;
    debug!("loaded configuration: {:?}", config);

    info!(
        "Starting ddns-update for {} [mode: {}]",
        config.domain,
        if config.dry_run { "dry-run" } else { "live" }
    );

    let engine = UpdateEngine::new(
        &config,
        Box::new(DohResolver::new(config.doh_endpoint.clone())),
        Box::new(HttpIpSource::new(config.myip_endpoint.clone())),
        Box::new(HttpUpdateService::new(
            config.update_endpoint.clone(),
            config.auth_token.clone(),
        )),
    )?;

    match engine.run_once().await? {
        UpdateOutcome::Unchanged { ip } => {
            debug!("{} already points at {}", config.domain, ip);
        }
        UpdateOutcome::Updated { response, .. } => {
            // Stdout carries the update response body and nothing else.
            println!("{}", response.body);
        }
        UpdateOutcome::DryRun {
            previous_ip,
            new_ip,
        } => {
            debug!(
                "dry-run left {} at {:?} instead of {}",
                config.domain, previous_ip, new_ip
            );
        }
    }

    Ok(())
}
