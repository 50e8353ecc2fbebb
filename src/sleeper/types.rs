use crate::cli::types::ids::{UserHandle, UserId};
use serde::{Deserialize, Serialize};

/// A Sleeper account as returned by `/user/{handle}` or a league member list.
///
/// Extra fields in the payload (avatar, metadata, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserRecord {
    pub user_id: UserId,
    /// Not guaranteed on the user endpoint.
    #[serde(default)]
    pub display_name: Option<String>,
}

/// One entry of `/league/{league_id}/users`.
pub type LeagueMember = UserRecord;

/// Raw league object; only its presence is counted.
pub type LeagueSummary = serde_json::Value;

/// Input to the batch lookup: either a handle typed by the caller or a member
/// taken from a league list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchInput {
    RawHandle(UserHandle),
    ResolvedMember(UserRecord),
}

impl BatchInput {
    /// The handle sent to the user endpoint.
    ///
    /// Members are looked up by display name, falling back to their user id
    /// (the endpoint accepts both).
    pub fn lookup_handle(&self) -> &str {
        match self {
            BatchInput::RawHandle(handle) => handle.as_str(),
            BatchInput::ResolvedMember(member) => member
                .display_name
                .as_deref()
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| member.user_id.as_str()),
        }
    }
}

impl From<UserHandle> for BatchInput {
    fn from(handle: UserHandle) -> Self {
        BatchInput::RawHandle(handle)
    }
}

impl From<LeagueMember> for BatchInput {
    fn from(member: LeagueMember) -> Self {
        BatchInput::ResolvedMember(member)
    }
}
