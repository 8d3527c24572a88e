//! Server configuration, built once from the environment at bootstrap and
//! passed into the router explicitly.

use anyhow::{Context, Result};
use doctool_pdf::SelectorPolicy;
use std::net::{IpAddr, SocketAddr};

use crate::upload::SpoolMode;

/// 50 MB default request body ceiling.
const DEFAULT_MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct Config {
    /// Address the server binds to.
    pub listen_addr: SocketAddr,
    /// Request bodies above this are rejected with 413 before any handler
    /// logic runs.
    pub max_upload_bytes: usize,
    /// Whether bad page-selector entries fail the request or are dropped.
    pub selector_policy: SelectorPolicy,
    /// Where uploaded bodies are held while a request is processed.
    pub spool_mode: SpoolMode,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let host: IpAddr = std::env::var("HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string())
            .parse()
            .context("invalid HOST")?;

        let port: u16 = match std::env::var("PORT") {
            Ok(p) => p.parse().context("invalid PORT")?,
            Err(_) => 3000,
        };

        let max_upload_bytes = match std::env::var("MAX_UPLOAD_BYTES") {
            Ok(v) => v.parse().context("invalid MAX_UPLOAD_BYTES")?,
            Err(_) => DEFAULT_MAX_UPLOAD_BYTES,
        };

        let selector_policy = if env_flag("STRICT_PAGE_SELECTORS") {
            SelectorPolicy::Strict
        } else {
            SelectorPolicy::Lenient
        };

        let spool_mode = match std::env::var("UPLOAD_SPOOL").as_deref() {
            Ok("disk") => SpoolMode::Disk,
            Ok("memory") | Err(_) => SpoolMode::Memory,
            Ok(other) => anyhow::bail!("invalid UPLOAD_SPOOL: {:?}", other),
        };

        Ok(Self {
            listen_addr: SocketAddr::new(host, port),
            max_upload_bytes,
            selector_policy,
            spool_mode,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            selector_policy: SelectorPolicy::Lenient,
            spool_mode: SpoolMode::Memory,
        }
    }
}

fn env_flag(name: &str) -> bool {
    matches!(
        std::env::var(name).as_deref(),
        Ok("1") | Ok("true") | Ok("yes")
    )
}
