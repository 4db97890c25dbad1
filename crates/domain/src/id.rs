//! Typed identifier newtypes backed by UUIDs.

use std::fmt;

/// Unique identifier for a chat participant.
///
/// Two participants may share a display name; the hub tells them apart by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParticipantId(uuid::Uuid);

impl Default for ParticipantId {
    fn default() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl ParticipantId {
    /// Generate a new random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_generate_unique_ids_when_called_twice() {
        let a = ParticipantId::new();
        let b = ParticipantId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn should_display_as_hyphenated_uuid() {
        let text = ParticipantId::new().to_string();
        assert_eq!(text.len(), 36);
        assert_eq!(text.matches('-').count(), 4);
    }
}
