//! Environment-driven server configuration.
//!
//! Settings are read through a [`mockable::Env`] parameter so parsing and
//! validation can be tested without touching the process environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use actix_web::cookie::Key;
use mockable::Env;
use thiserror::Error;
use tracing::warn;

const BIND_ADDR_ENV: &str = "WEBOS_BIND_ADDR";
const DATA_DIR_ENV: &str = "WEBOS_DATA_DIR";
const KEY_FILE_ENV: &str = "SESSION_KEY_FILE";
const COOKIE_SECURE_ENV: &str = "SESSION_COOKIE_SECURE";
const ALLOW_EPHEMERAL_ENV: &str = "SESSION_ALLOW_EPHEMERAL";

const DEFAULT_KEY_PATH: &str = "/var/run/secrets/session_key";
const BOOL_EXPECTED: &str = "1|0|true|false|yes|no";

/// Errors raised while validating server configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variable is present but contains an invalid value.
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidEnv {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
    /// Reading the session key file failed and ephemeral keys are not allowed.
    #[error("failed to read session key at {path}: {source}")]
    KeyRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Settings the server is started with.
pub struct ServerConfig {
    /// Socket the HTTP server binds to.
    pub bind_addr: SocketAddr,
    /// Root of the shell's filesystem tree; per-user ROM directories live
    /// under `static/filesystem/home/` inside it.
    pub data_dir: PathBuf,
    /// Signing key for cookie sessions.
    pub session_key: Key,
    /// Whether session cookies are marked `Secure`.
    pub cookie_secure: bool,
}

/// Build the server configuration from environment variables.
///
/// `WEBOS_BIND_ADDR` defaults to `0.0.0.0:8080` and `WEBOS_DATA_DIR` to the
/// working directory. A missing session key file falls back to an ephemeral
/// key in debug builds or when `SESSION_ALLOW_EPHEMERAL=1`; release builds
/// without that toggle fail instead.
pub fn server_config_from_env<E: Env>(env: &E) -> Result<ServerConfig, ConfigError> {
    let bind_addr = bind_addr_from_env(env)?;
    let data_dir = env.string(DATA_DIR_ENV).map_or_else(|| PathBuf::from("."), PathBuf::from);
    let cookie_secure = bool_from_env(env, COOKIE_SECURE_ENV, true)?;
    let session_key = session_key_from_env(env)?;

    Ok(ServerConfig {
        bind_addr,
        data_dir,
        session_key,
        cookie_secure,
    })
}

fn bind_addr_from_env<E: Env>(env: &E) -> Result<SocketAddr, ConfigError> {
    match env.string(BIND_ADDR_ENV) {
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidEnv {
            name: BIND_ADDR_ENV,
            value,
            expected: "host:port socket address",
        }),
        None => Ok(SocketAddr::from(([0, 0, 0, 0], 8080))),
    }
}

fn bool_from_env<E: Env>(
    env: &E,
    name: &'static str,
    default: bool,
) -> Result<bool, ConfigError> {
    match env.string(name) {
        Some(value) => parse_bool(&value).ok_or(ConfigError::InvalidEnv {
            name,
            value,
            expected: BOOL_EXPECTED,
        }),
        None => Ok(default),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

fn session_key_from_env<E: Env>(env: &E) -> Result<Key, ConfigError> {
    let key_path = env
        .string(KEY_FILE_ENV)
        .map_or_else(|| PathBuf::from(DEFAULT_KEY_PATH), PathBuf::from);

    match std::fs::read(&key_path) {
        Ok(bytes) => Ok(Key::derive_from(&bytes)),
        Err(source) => {
            let allow_ephemeral = bool_from_env(env, ALLOW_EPHEMERAL_ENV, false)?;
            if cfg!(debug_assertions) || allow_ephemeral {
                warn!(path = %key_path.display(), error = %source, "using ephemeral session key");
                Ok(Key::generate())
            } else {
                Err(ConfigError::KeyRead {
                    path: key_path,
                    source,
                })
            }
        }
    }
}
