//! OpenAPI documentation configuration.
//!
//! Debug builds serve the generated document at `/api-docs/openapi.json` for
//! external tooling; release builds skip the route entirely.

use utoipa::OpenApi;

/// OpenAPI document for the host dispatch surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "WebOS app backends",
        description = "Host surface dispatching JSON requests to per-app backend handlers."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::dispatch::invoke_app,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    tags(
        (name = "apps", description = "Per-app backend dispatch"),
        (name = "health", description = "Probes")
    )
)]
pub struct ApiDoc;

/// Serve the OpenAPI document (debug builds only).
#[cfg(debug_assertions)]
#[actix_web::get("/api-docs/openapi.json")]
pub async fn openapi_json() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(ApiDoc::openapi())
}
