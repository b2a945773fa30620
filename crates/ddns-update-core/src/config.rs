//! Configuration for the ddns-update client
//!
//! All endpoints and identifiers are compiled-in defaults; the only values
//! read from the environment are the secret token and the run mode. The
//! resulting [`Config`] is immutable and passed explicitly to components,
//! never consulted as ambient global state.

use crate::error::{Error, Result};

/// Endpoint answering `GET /` with the caller's public IP as plain text
pub const DEFAULT_MYIP_ENDPOINT: &str = "https://ddns.yacn.me";

/// Endpoint accepting the authenticated update POST
pub const DEFAULT_UPDATE_ENDPOINT: &str = "https://ddns.yacn.me/update";

/// DoH JSON resolver used to read the currently published record
pub const DEFAULT_DOH_ENDPOINT: &str = "https://cloudflare-dns.com/dns-query";

/// Zone holding the managed record
pub const DEFAULT_ZONE_ID: &str = "351f734a5aed65f0b80560e62acfd56f";

/// The DNS record kept in sync
pub const DEFAULT_DOMAIN: &str = "rwc.yacn.me";

/// Environment variable supplying the update secret
pub const AUTH_TOKEN_ENV: &str = "DDNS_UPDATE_AUTH_TOKEN";

/// Environment variable selecting the run mode (`dry-run` skips the update)
pub const MODE_ENV: &str = "DDNS_MODE";

/// Immutable per-run configuration
///
/// Construct with [`Config::from_env`] in the binary or
/// [`Config::with_token`] when embedding the engine elsewhere.
#[derive(Clone)]
pub struct Config {
    /// DoH JSON resolver endpoint
    pub doh_endpoint: String,

    /// "What is my IP" endpoint
    pub myip_endpoint: String,

    /// Authenticated update endpoint
    pub update_endpoint: String,

    /// Zone identifier sent in the update body
    pub zone_id: String,

    /// Record name to resolve and keep pointed at the current IP
    pub domain: String,

    /// Secret carried in the `My-Secret-Token` header
    pub auth_token: String,

    /// When true, report the would-be update without calling the endpoint
    pub dry_run: bool,
}

// The token never appears in Debug output.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("doh_endpoint", &self.doh_endpoint)
            .field("myip_endpoint", &self.myip_endpoint)
            .field("update_endpoint", &self.update_endpoint)
            .field("zone_id", &self.zone_id)
            .field("domain", &self.domain)
            .field("auth_token", &"<REDACTED>")
            .field("dry_run", &self.dry_run)
            .finish()
    }
}

impl Config {
    /// Create a configuration from the compiled-in defaults and an explicit token
    pub fn with_token(auth_token: impl Into<String>) -> Self {
        Self {
            doh_endpoint: DEFAULT_DOH_ENDPOINT.to_string(),
            myip_endpoint: DEFAULT_MYIP_ENDPOINT.to_string(),
            update_endpoint: DEFAULT_UPDATE_ENDPOINT.to_string(),
            zone_id: DEFAULT_ZONE_ID.to_string(),
            domain: DEFAULT_DOMAIN.to_string(),
            auth_token: auth_token.into(),
            dry_run: false,
        }
    }

    /// Load the configuration from the process environment
    ///
    /// Reads `DDNS_UPDATE_AUTH_TOKEN` (required, must be non-empty) and
    /// `DDNS_MODE` (optional; `dry-run`, case-insensitive, enables dry-run).
    pub fn from_env() -> Result<Self> {
        Self::from_env_with(|name| std::env::var(name).ok())
    }

    /// Load the configuration through an injected variable lookup
    ///
    /// The binary passes `std::env::var`; tests pass a closure over fixed
    /// values so they never have to mutate the process environment.
    pub fn from_env_with(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let auth_token = lookup(AUTH_TOKEN_ENV).unwrap_or_default();
        if auth_token.is_empty() {
            return Err(Error::config(format!("{AUTH_TOKEN_ENV} is not set")));
        }

        let dry_run = lookup(MODE_ENV).unwrap_or_default().to_lowercase() == "dry-run";

        let mut config = Self::with_token(auth_token);
        config.dry_run = dry_run;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// Rejects an empty token before any network call is attempted, and
    /// empty endpoints or identifiers that would make the run meaningless.
    pub fn validate(&self) -> Result<()> {
        if self.auth_token.is_empty() {
            return Err(Error::config(format!("{AUTH_TOKEN_ENV} is not set")));
        }
        if self.doh_endpoint.is_empty() {
            return Err(Error::config("DoH endpoint cannot be empty"));
        }
        if self.myip_endpoint.is_empty() {
            return Err(Error::config("self-IP endpoint cannot be empty"));
        }
        if self.update_endpoint.is_empty() {
            return Err(Error::config("update endpoint cannot be empty"));
        }
        if self.zone_id.is_empty() {
            return Err(Error::config("zone ID cannot be empty"));
        }
        if self.domain.is_empty() {
            return Err(Error::config("domain cannot be empty"));
        }
        Ok(())
    }
}
