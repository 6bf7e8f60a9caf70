//! Authenticated actor context.
//!
//! Operations that need the current user take an explicit
//! `Option<&Session>` instead of reaching into process-wide state; whoever
//! owns login and logout decides what to pass.

use basin_types::Pointer;
use serde::{Deserialize, Serialize};

/// Class name of user objects on the server.
pub const USER_CLASS: &str = "_User";

/// An authenticated actor: the user's id plus the token proving it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Server id of the actor's [`USER_CLASS`] object.
    pub user_id: String,
    /// Token sent as `X-Basin-Session-Token` on authenticated writes.
    pub session_token: String,
}

impl Session {
    /// Creates a session, typically from a login response.
    #[must_use]
    pub fn new(user_id: impl Into<String>, session_token: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            session_token: session_token.into(),
        }
    }

    /// Pointer to this actor's user object, used for author fields.
    #[must_use]
    pub fn user_pointer(&self) -> Pointer {
        Pointer::new(USER_CLASS, self.user_id.clone())
    }
}
