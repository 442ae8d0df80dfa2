//! Invocation context handed to app backends.
//!
//! The original host exposed `request`, `session`, and `user` as ambient
//! globals to each script. Here the context is an explicit parameter object,
//! so a backend is a pure function of its inputs and testable without the
//! host.

use serde_json::Value;

use super::{BackendError, UserRecord};

/// Username assumed when the session carries none, matching the original
/// scripts' fallback.
pub const DEFAULT_USERNAME: &str = "nakildias";

/// Session state visible to app backends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionInfo {
    username: Option<String>,
}

impl SessionInfo {
    /// Session view with an optional stored username.
    pub fn new(username: Option<String>) -> Self {
        Self { username }
    }

    /// Session with no stored username.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Username actually present in the session, if any.
    pub fn raw_username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Username with the [`DEFAULT_USERNAME`] fallback applied.
    pub fn username(&self) -> &str {
        self.username.as_deref().unwrap_or(DEFAULT_USERNAME)
    }
}

/// One backend invocation: parsed request body, session view, and the
/// authenticated user record when the host resolved one.
#[derive(Debug, Clone)]
pub struct Invocation {
    payload: Option<Value>,
    session: SessionInfo,
    user: Option<UserRecord>,
}

impl Invocation {
    pub fn new(payload: Option<Value>, session: SessionInfo, user: Option<UserRecord>) -> Self {
        Self {
            payload,
            session,
            user,
        }
    }

    pub fn payload(&self) -> Option<&Value> {
        self.payload.as_ref()
    }

    pub fn session(&self) -> &SessionInfo {
        &self.session
    }

    pub fn user(&self) -> Option<&UserRecord> {
        self.user.as_ref()
    }

    /// The `action` string from the payload.
    ///
    /// An absent, non-object, or empty-object payload is indistinguishable
    /// from a missing body in the original host (a falsy parse result), so
    /// all three report `InvalidPayload`. A populated object without a string
    /// `action` reports `InvalidAction`.
    pub fn require_action(&self) -> Result<&str, BackendError> {
        let payload = match self.payload.as_ref() {
            Some(Value::Object(map)) if !map.is_empty() => map,
            _ => return Err(BackendError::InvalidPayload),
        };
        match payload.get("action") {
            Some(Value::String(action)) => Ok(action),
            _ => Err(BackendError::InvalidAction),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn invocation(payload: Option<Value>) -> Invocation {
        Invocation::new(payload, SessionInfo::anonymous(), None)
    }

    #[rstest]
    #[case(None)]
    #[case(Some(json!({})))]
    #[case(Some(json!(null)))]
    #[case(Some(json!([1, 2])))]
    #[case(Some(json!("list_roms")))]
    fn missing_or_degenerate_payloads_are_invalid(#[case] payload: Option<Value>) {
        assert!(matches!(
            invocation(payload).require_action(),
            Err(BackendError::InvalidPayload)
        ));
    }

    #[rstest]
    #[case(json!({ "foo": 1 }))]
    #[case(json!({ "action": 7 }))]
    #[case(json!({ "action": null }))]
    fn populated_payload_without_action_string_is_invalid_action(#[case] payload: Value) {
        assert!(matches!(
            invocation(Some(payload)).require_action(),
            Err(BackendError::InvalidAction)
        ));
    }

    #[rstest]
    fn action_string_is_returned() {
        let ctx = invocation(Some(json!({ "action": "list_roms" })));
        assert_eq!(ctx.require_action().expect("action"), "list_roms");
    }

    #[rstest]
    fn session_username_defaults_when_unset() {
        assert_eq!(SessionInfo::anonymous().username(), DEFAULT_USERNAME);
        assert_eq!(SessionInfo::anonymous().raw_username(), None);

        let session = SessionInfo::new(Some("ada".into()));
        assert_eq!(session.username(), "ada");
        assert_eq!(session.raw_username(), Some("ada"));
    }
}
