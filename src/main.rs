//! Host entry-point: wires the app-dispatch endpoint and health probes.

use actix_web::{HttpServer, web};
use mockable::DefaultEnv;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use webos_apps::domain::UserDirectory;
use webos_apps::inbound::http::health::HealthState;
use webos_apps::outbound::storage::DataDirStorage;
use webos_apps::server::{AppDependencies, build_app, builtin_registry, server_config_from_env};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = server_config_from_env(&DefaultEnv::default()).map_err(std::io::Error::other)?;

    // The storage root must exist before the capability handle is opened.
    std::fs::create_dir_all(&config.data_dir)?;
    let storage = Arc::new(DataDirStorage::open(&config.data_dir)?);

    let registry = web::Data::new(builtin_registry(storage));
    let users = web::Data::new(UserDirectory::with_fixture());
    let health_state = web::Data::new(HealthState::new());

    info!(
        addr = %config.bind_addr,
        data_dir = %config.data_dir.display(),
        apps = ?registry.slugs(),
        "starting app backend host"
    );

    let server_registry = registry.clone();
    let server_users = users.clone();
    let server_health_state = health_state.clone();
    let key = config.session_key.clone();
    let cookie_secure = config.cookie_secure;

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            registry: server_registry.clone(),
            users: server_users.clone(),
            health_state: server_health_state.clone(),
            key: key.clone(),
            cookie_secure,
        })
    })
    .bind(config.bind_addr)?;

    health_state.mark_ready();
    server.run().await
}
