use std::net::SocketAddr;

use serde::Deserialize;
use notekeep_core::error::{NoteError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub metrics: MetricsSection,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            metrics: MetricsSection::default(),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(NoteError::UnsupportedVersion);
        }
        self.server.validate()?;
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            NoteError::InvalidConfig(format!(
                "server.listen must be a socket address ({}): {e}",
                self.listen
            ))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:5000".into()
}

/// How request metrics label the `endpoint` dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupBy {
    /// Route template, e.g. `/notes/:index`.
    #[default]
    Endpoint,
    /// Raw request path, e.g. `/notes/3`.
    Path,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricsSection {
    #[serde(default = "default_metrics_enabled")]
    pub enabled: bool,

    #[serde(default)]
    pub group_by: GroupBy,
}

impl Default for MetricsSection {
    fn default() -> Self {
        Self {
            enabled: default_metrics_enabled(),
            group_by: GroupBy::default(),
        }
    }
}

fn default_metrics_enabled() -> bool {
    true
}
