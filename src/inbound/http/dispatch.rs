//! Host dispatch endpoint for per-app backends.
//!
//! ```text
//! POST /apps/gbaemulator {"action":"list_roms"}
//! POST /apps/profile {}
//! ```

use actix_web::{HttpResponse, post, web};
use serde_json::Value;
use tracing::{debug, warn};

use crate::apps::AppRegistry;
use crate::domain::{Invocation, UserDirectory};
use crate::inbound::http::session::SessionContext;

/// Parse the request body the way the original host did: anything that does
/// not parse as JSON becomes an absent payload, and each backend applies its
/// own validation.
fn parse_payload(body: &[u8]) -> Option<Value> {
    serde_json::from_slice(body).ok()
}

/// Invoke the app backend registered under `slug`.
///
/// The response is always the backend envelope: `{"success":true,...}` or
/// `{"success":false,"error":...}`. Validation and filesystem failures keep
/// status 200 with `success=false`; a missing app or user record yields 404.
#[utoipa::path(
    post,
    path = "/apps/{slug}",
    request_body = String,
    params(
        ("slug" = String, Path, description = "Registered app backend, e.g. gbaemulator")
    ),
    responses(
        (status = 200, description = "Backend reply envelope"),
        (status = 404, description = "Unknown app, or no user record for the session")
    ),
    tags = ["apps"],
    operation_id = "invokeAppBackend"
)]
#[post("/apps/{slug}")]
pub async fn invoke_app(
    path: web::Path<String>,
    body: web::Bytes,
    session: SessionContext,
    registry: web::Data<AppRegistry>,
    users: web::Data<UserDirectory>,
) -> HttpResponse {
    let slug = path.into_inner();
    let session_info = session.info();
    // The user record is only injected for a username the session actually
    // carries; the default username stands in for path construction alone.
    let user = session_info
        .raw_username()
        .and_then(|name| users.find(name));
    let invocation = Invocation::new(parse_payload(&body), session_info, user);

    match registry.dispatch(&slug, &invocation) {
        Ok(reply) => {
            debug!(app = %slug, "app backend replied");
            HttpResponse::Ok().json(reply.into_body())
        }
        Err(error) => {
            warn!(app = %slug, %error, "app backend failed");
            HttpResponse::build(error.status()).json(error.to_body())
        }
    }
}
