//! Server config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use notekeep_core::error::{NoteError, Result};

pub use schema::{GroupBy, MetricsSection, ServerConfig, ServerSection};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "NOTEKEEP_CONFIG";
/// Config file picked up from the working directory when present.
pub const DEFAULT_PATH: &str = "notekeep.yaml";

pub fn load_from_file(path: impl AsRef<Path>) -> Result<ServerConfig> {
    let path = path.as_ref();
    let s = fs::read_to_string(path).map_err(|e| {
        NoteError::InvalidConfig(format!("read {} failed: {e}", path.display()))
    })?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ServerConfig> {
    let cfg: ServerConfig = serde_yaml::from_str(s)
        .map_err(|e| NoteError::InvalidConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Resolve config the way the binary does: an explicit path must load,
/// the default file is optional, and built-in defaults cover the rest.
pub fn load(explicit: Option<&str>) -> Result<ServerConfig> {
    load_in(Path::new("."), explicit)
}

/// `load` with the default file looked up in `dir` instead of the working
/// directory. Explicit paths are used as given.
pub fn load_in(dir: &Path, explicit: Option<&str>) -> Result<ServerConfig> {
    if let Some(path) = explicit {
        tracing::info!(%path, "loading config");
        return load_from_file(path);
    }
    let default = dir.join(DEFAULT_PATH);
    if default.exists() {
        tracing::info!(path = %default.display(), "loading config");
        return load_from_file(&default);
    }
    tracing::info!("no config file, using defaults");
    Ok(ServerConfig::default())
}
