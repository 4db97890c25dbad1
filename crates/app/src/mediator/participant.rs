//! Participants — members of a chat room.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use patternhub_domain::chat::{ChatMessage, Notice};
use patternhub_domain::error::{PatternHubError, ValidationError};
use patternhub_domain::id::ParticipantId;

use super::chat_room::ChatRoom;
use crate::ports::Console;

/// A member of a [`ChatRoom`].
///
/// The room attaches itself when the participant registers and detaches
/// itself on removal. A participant never owns the room.
pub trait Participant {
    fn id(&self) -> ParticipantId;

    fn name(&self) -> &str;

    /// The room this participant currently belongs to, if it is still alive.
    fn hub(&self) -> Option<Rc<ChatRoom>>;

    fn attach(&self, hub: Weak<ChatRoom>);

    fn detach(&self);

    fn receive_message(&self, message: &ChatMessage, console: &mut dyn Console);

    fn receive_notice(&self, notice: &Notice, console: &mut dyn Console);

    /// Send `body` to every other member of the room.
    ///
    /// Returns how many members received it. Outside a room this only
    /// prints a notice and returns zero.
    fn send(&self, body: &str, console: &mut dyn Console) -> usize {
        let Some(hub) = self.hub() else {
            console.say(&format!("{} is not a member of the chat.", self.name()));
            return 0;
        };
        console.say(&format!("{} sends: {body}", self.name()));
        hub.relay(&ChatMessage::new(self.id(), self.name(), body), console)
    }
}

/// A participant that prints what it receives and keeps a copy.
pub struct ChatUser {
    id: ParticipantId,
    name: String,
    hub: RefCell<Weak<ChatRoom>>,
    inbox: RefCell<Vec<ChatMessage>>,
    notices: RefCell<Vec<Notice>>,
}

impl ChatUser {
    /// Create a user that is not a member of any room yet.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] when `name` is blank.
    pub fn new(name: impl Into<String>) -> Result<Self, PatternHubError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(Self {
            id: ParticipantId::new(),
            name,
            hub: RefCell::new(Weak::new()),
            inbox: RefCell::new(Vec::new()),
            notices: RefCell::new(Vec::new()),
        })
    }

    /// Messages received so far, oldest first.
    #[must_use]
    pub fn inbox(&self) -> Vec<ChatMessage> {
        self.inbox.borrow().clone()
    }

    /// Notices received so far, oldest first.
    #[must_use]
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }
}

impl Participant for ChatUser {
    fn id(&self) -> ParticipantId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn hub(&self) -> Option<Rc<ChatRoom>> {
        self.hub.borrow().upgrade()
    }

    fn attach(&self, hub: Weak<ChatRoom>) {
        *self.hub.borrow_mut() = hub;
    }

    fn detach(&self) {
        *self.hub.borrow_mut() = Weak::new();
    }

    fn receive_message(&self, message: &ChatMessage, console: &mut dyn Console) {
        console.say(&format!(
            "{} received a message from {}: {}",
            self.name, message.sender_name, message.body
        ));
        self.inbox.borrow_mut().push(message.clone());
    }

    fn receive_notice(&self, notice: &Notice, console: &mut dyn Console) {
        console.say(&format!("{} received a notice: {notice}", self.name));
        self.notices.borrow_mut().push(notice.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingConsole;
    use patternhub_domain::chat::JoinNoticePolicy;

    #[test]
    fn should_reject_blank_name() {
        assert!(matches!(
            ChatUser::new("  "),
            Err(PatternHubError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_start_without_hub() {
        let user = ChatUser::new("Alice").unwrap();
        assert!(user.hub().is_none());
    }

    #[test]
    fn should_print_not_member_notice_when_sending_without_hub() {
        let user = ChatUser::new("Alice").unwrap();
        let mut console = RecordingConsole::default();

        let delivered = user.send("anyone there?", &mut console);

        assert_eq!(delivered, 0);
        assert_eq!(console.lines, vec!["Alice is not a member of the chat."]);
    }

    #[test]
    fn should_lose_hub_when_room_is_dropped() {
        let user = ChatUser::new("Alice").unwrap();
        let room = ChatRoom::new(JoinNoticePolicy::default());
        user.attach(Rc::downgrade(&room));
        assert!(user.hub().is_some());

        drop(room);

        assert!(user.hub().is_none());
    }

    #[test]
    fn should_keep_received_messages_and_notices() {
        let alice = ChatUser::new("Alice").unwrap();
        let bob = ChatUser::new("Bob").unwrap();
        let mut console = RecordingConsole::default();

        alice.receive_message(&ChatMessage::new(bob.id(), "Bob", "hi"), &mut console);
        alice.receive_notice(
            &Notice::Joined {
                name: "Bob".to_string(),
            },
            &mut console,
        );

        assert_eq!(alice.inbox().len(), 1);
        assert_eq!(alice.inbox()[0].body, "hi");
        assert_eq!(alice.notices().len(), 1);
        assert_eq!(
            console.lines,
            vec![
                "Alice received a message from Bob: hi",
                "Alice received a notice: Bob joined the chat.",
            ]
        );
    }
}
