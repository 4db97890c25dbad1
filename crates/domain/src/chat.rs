//! Chat values — messages relayed between participants and hub notices.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::id::ParticipantId;

/// A message sent by one participant and relayed to the others.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: ParticipantId,
    pub sender_name: String,
    pub body: String,
}

impl ChatMessage {
    #[must_use]
    pub fn new(
        sender: ParticipantId,
        sender_name: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            sender,
            sender_name: sender_name.into(),
            body: body.into(),
        }
    }
}

impl fmt::Display for ChatMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.sender_name, self.body)
    }
}

/// A membership change broadcast by the hub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Joined { name: String },
    Left { name: String },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Joined { name } => write!(f, "{name} joined the chat."),
            Self::Left { name } => write!(f, "{name} left the chat."),
        }
    }
}

/// Whether a newly registered participant receives its own join notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinNoticePolicy {
    /// Every member, the newcomer included, is told about the join.
    #[default]
    IncludeNewcomer,
    /// Only the members already present are told about the join.
    ExcludeNewcomer,
}

impl JoinNoticePolicy {
    #[must_use]
    pub fn notifies_newcomer(self) -> bool {
        matches!(self, Self::IncludeNewcomer)
    }
}

impl fmt::Display for JoinNoticePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncludeNewcomer => f.write_str("include_newcomer"),
            Self::ExcludeNewcomer => f.write_str("exclude_newcomer"),
        }
    }
}

/// Error returned when parsing an unknown [`JoinNoticePolicy`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown join notice policy `{0}`")]
pub struct UnknownJoinNoticePolicy(pub String);

impl FromStr for JoinNoticePolicy {
    type Err = UnknownJoinNoticePolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "include_newcomer" => Ok(Self::IncludeNewcomer),
            "exclude_newcomer" => Ok(Self::ExcludeNewcomer),
            other => Err(UnknownJoinNoticePolicy(other.to_string())),
        }
    }
}
