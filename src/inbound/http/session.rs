//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! Thin wrapper over Actix sessions so the dispatch handler only deals with
//! the shell's username, not cookie mechanics.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;

use crate::domain::SessionInfo;

pub(crate) const USERNAME_KEY: &str = "username";

/// Newtype wrapper exposing higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Store the shell user's name in the session cookie. The shell calls
    /// this at login; it is public so deployments and tests can establish a
    /// session without the full shell.
    pub fn persist_username(&self, username: &str) -> actix_web::Result<()> {
        self.0
            .insert(USERNAME_KEY, username)
            .map_err(actix_web::error::ErrorInternalServerError)
    }

    /// Username stored by the shell, if any. An unreadable session value is
    /// treated as anonymous rather than failing the request.
    pub fn username(&self) -> Option<String> {
        match self.0.get::<String>(USERNAME_KEY) {
            Ok(value) => value,
            Err(error) => {
                tracing::warn!(%error, "unreadable session value; treating as anonymous");
                None
            }
        }
    }

    /// Session view handed to app backends.
    pub fn info(&self) -> SessionInfo {
        SessionInfo::new(self.username())
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
