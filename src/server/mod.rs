//! Server construction and middleware wiring.

mod config;

pub use config::{ConfigError, ServerConfig, server_config_from_env};

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Key, SameSite};
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::apps::AppRegistry;
use crate::apps::profile::ProfileEcho;
use crate::apps::rom_library::{GBA, N64, RomLibrary};
use crate::domain::{RomStorage, UserDirectory};
use crate::inbound::http::dispatch::invoke_app;
use crate::inbound::http::health::{HealthState, live, ready};
use crate::middleware::Trace;

/// Registry with the built-in app backends wired to the given storage.
pub fn builtin_registry(storage: Arc<dyn RomStorage>) -> AppRegistry {
    let mut registry = AppRegistry::new();
    registry.register(Arc::new(RomLibrary::new(&GBA, storage.clone())));
    registry.register(Arc::new(RomLibrary::new(&N64, storage)));
    registry.register(Arc::new(ProfileEcho));
    registry
}

/// Shared state and settings the app factory closes over.
#[derive(Clone)]
pub struct AppDependencies {
    pub registry: web::Data<AppRegistry>,
    pub users: web::Data<UserDirectory>,
    pub health_state: web::Data<HealthState>,
    pub key: Key,
    pub cookie_secure: bool,
}

/// Assemble the actix application: cookie sessions, trace middleware, the
/// app-dispatch endpoint, and health probes.
pub fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        registry,
        users,
        health_state,
        key,
        cookie_secure,
    } = deps;

    let session = SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".into())
        .cookie_path("/".into())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_same_site(SameSite::Lax)
        .build();

    #[cfg_attr(not(debug_assertions), allow(unused_mut))]
    let mut app = App::new()
        .app_data(registry)
        .app_data(users)
        .app_data(health_state)
        .wrap(session)
        .wrap(Trace)
        .service(invoke_app)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    {
        app = app.service(crate::doc::openapi_json);
    }

    app
}
