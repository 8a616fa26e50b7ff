//! Listen port and configuration file resolution
//!
//! Every service resolves its port through the same priority order:
//! 1. Command-line argument (highest priority)
//! 2. `SEMINOTE_<SERVICE>_PORT` environment variable
//! 3. `[ports]` table in the platform config file
//! 4. Compiled per-service default (fallback)
//!
//! Malformed values at one tier are logged and the next tier is tried.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;
use tracing::warn;

/// Parsed platform configuration file (`config.toml`)
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    /// Listen port overrides keyed by service name ("user", "gateway", ...)
    #[serde(default)]
    pub ports: HashMap<String, u16>,
}

/// Resolve the listen port for a service
pub fn resolve_port(cli: Option<u16>, service: &str, default: u16) -> u16 {
    // Priority 1: Command-line argument
    if let Some(port) = cli {
        return port;
    }

    // Priority 2: Environment variable
    let env_var = env_var_name(service);
    if let Ok(raw) = std::env::var(&env_var) {
        match raw.parse::<u16>() {
            Ok(port) => return port,
            Err(_) => warn!("Ignoring {}: not a valid port: {:?}", env_var, raw),
        }
    }

    // Priority 3: Platform config file
    if let Some(path) = config_file_path() {
        match std::fs::read_to_string(&path) {
            Ok(text) => {
                if let Some(port) = port_from_config_str(&text, service) {
                    return port;
                }
            }
            Err(e) => warn!("Could not read config file {}: {}", path.display(), e),
        }
    }

    // Priority 4: Compiled default
    default
}

/// Environment variable carrying a service's port override
fn env_var_name(service: &str) -> String {
    format!(
        "SEMINOTE_{}_PORT",
        service.to_uppercase().replace('-', "_")
    )
}

/// Locate the platform config file, if one exists.
///
/// `SEMINOTE_CONFIG` overrides the search. Otherwise the user config
/// directory (`seminote/config.toml`) is tried first, then the
/// system-wide `/etc/seminote/config.toml`.
pub fn config_file_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("SEMINOTE_CONFIG") {
        return Some(PathBuf::from(path));
    }

    if let Some(path) = dirs::config_dir().map(|d| d.join("seminote").join("config.toml")) {
        if path.exists() {
            return Some(path);
        }
    }

    let system = PathBuf::from("/etc/seminote/config.toml");
    if system.exists() {
        return Some(system);
    }

    None
}

/// Extract a service's port from config file text.
///
/// Returns `None` when the text is not valid TOML or the `[ports]`
/// table has no entry for the service.
pub fn port_from_config_str(text: &str, service: &str) -> Option<u16> {
    let config: ConfigFile = match toml::from_str(text) {
        Ok(config) => config,
        Err(e) => {
            warn!("Ignoring malformed config file: {}", e);
            return None;
        }
    };
    config.ports.get(service).copied()
}
