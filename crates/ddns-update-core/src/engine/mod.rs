//! Core update engine
//!
//! The UpdateEngine is responsible for:
//! - Reading the currently published record via RecordResolver
//! - Observing the current public IP via IpSource
//! - Triggering the remote update via UpdateService when the two differ
//!
//! ## Run Flow
//!
//! 1. Resolve the published "A" record for the configured domain
//! 2. Observe the caller's public IP
//! 3. Compare the two strings for exact equality
//! 4. Equal → done; different → exactly one authenticated update call
//!
//! Each run is stateless: nothing survives between invocations, and a rerun
//! is idempotent modulo the remote DNS state.

use crate::config::Config;
use crate::error::Result;
use crate::http::HttpResponse;
use crate::traits::{IpSource, RecordResolver, UpdateRequest, UpdateService};
use tracing::{debug, info};

/// Record type kept in sync
const RECORD_TYPE: &str = "A";

/// Terminal states of a single run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The published record already matches the observed IP
    Unchanged {
        /// The address both sides agree on
        ip: String,
    },

    /// The update endpoint was called
    Updated {
        /// Previously published address ("" when the record was absent)
        previous_ip: String,
        /// Observed address the record now points at
        new_ip: String,
        /// Raw response from the update endpoint; status never branched on
        response: HttpResponse,
    },

    /// An update was needed but deliberately skipped
    DryRun {
        previous_ip: String,
        new_ip: String,
    },
}

/// Core update engine
///
/// Composes the three seams behind a single [`run_once`](Self::run_once)
/// call. Implementations are boxed so the decision logic stays testable
/// against scripted stand-ins.
pub struct UpdateEngine {
    /// Reader for the currently published record
    resolver: Box<dyn RecordResolver>,

    /// Observer for the current public IP
    ip_source: Box<dyn IpSource>,

    /// Trigger for the remote update
    update_service: Box<dyn UpdateService>,

    /// Record name under management
    domain: String,

    /// Zone sent in the update body
    zone_id: String,

    /// Skip the update call and report what would have happened
    dry_run: bool,
}

impl UpdateEngine {
    /// Create a new update engine
    ///
    /// Validates the configuration up front, so a missing token fails here,
    /// before any network call is made.
    pub fn new(
        config: &Config,
        resolver: Box<dyn RecordResolver>,
        ip_source: Box<dyn IpSource>,
        update_service: Box<dyn UpdateService>,
    ) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            resolver,
            ip_source,
            update_service,
            domain: config.domain.clone(),
            zone_id: config.zone_id.clone(),
            dry_run: config.dry_run,
        })
    }

    /// Execute one resolve → observe → compare → update cycle
    ///
    /// The three calls run strictly in sequence. A resolver or transport
    /// failure aborts the run before the later calls are attempted.
    pub async fn run_once(&self) -> Result<UpdateOutcome> {
        let record_ip = self.resolver.resolve(&self.domain, RECORD_TYPE).await?;
        debug!("published {} record for {}: {:?}", RECORD_TYPE, self.domain, record_ip);

        let observed_ip = self.ip_source.current().await?;
        debug!("observed WAN IP: {:?}", observed_ip);

        if record_ip == observed_ip {
            debug!("record already points at {}, nothing to do", observed_ip);
            return Ok(UpdateOutcome::Unchanged { ip: observed_ip });
        }

        info!("WAN IP changed from {} to {}", record_ip, observed_ip);

        if self.dry_run {
            info!(
                "[DRY-RUN] would update zone {} record {} to {}",
                self.zone_id, self.domain, observed_ip
            );
            return Ok(UpdateOutcome::DryRun {
                previous_ip: record_ip,
                new_ip: observed_ip,
            });
        }

        let request = UpdateRequest {
            zone_id: self.zone_id.clone(),
            record: self.domain.clone(),
        };
        let response = self.update_service.trigger_update(&request).await?;
        info!("update endpoint answered {}", response.status);

        Ok(UpdateOutcome::Updated {
            previous_ip: record_ip,
            new_ip: observed_ip,
            response,
        })
    }
}
