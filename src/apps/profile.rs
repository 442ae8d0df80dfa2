//! Profile echo backend.
//!
//! Greets the authenticated user with their id and role. The request body is
//! ignored; the backend depends only on the injected user record.

use crate::apps::AppBackend;
use crate::domain::{BackendError, Invocation, Reply};

pub struct ProfileEcho;

impl AppBackend for ProfileEcho {
    fn slug(&self) -> &'static str {
        "profile"
    }

    fn handle(&self, invocation: &Invocation) -> Result<Reply, BackendError> {
        let user = invocation.user().ok_or(BackendError::UserNotFound)?;
        let role = if user.is_admin {
            "You are an administrator."
        } else {
            "You are a standard user."
        };
        Ok(Reply::Greeting {
            message: format!(
                "Hello, {}! Your user ID is {}. {role}",
                user.username, user.id
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SessionInfo, UserRecord};
    use rstest::rstest;

    fn invoke(user: Option<UserRecord>) -> Result<Reply, BackendError> {
        ProfileEcho.handle(&Invocation::new(None, SessionInfo::anonymous(), user))
    }

    #[rstest]
    #[case(true, "Hello, alice! Your user ID is 7. You are an administrator.")]
    #[case(false, "Hello, alice! Your user ID is 7. You are a standard user.")]
    fn greeting_reflects_the_admin_flag(#[case] is_admin: bool, #[case] expected: &str) {
        let reply = invoke(Some(UserRecord::new("alice", 7, is_admin))).expect("greeting");
        assert_eq!(
            reply,
            Reply::Greeting {
                message: expected.into()
            }
        );
    }

    #[rstest]
    fn missing_user_is_not_found() {
        assert!(matches!(invoke(None), Err(BackendError::UserNotFound)));
    }
}
