//! Chat room — the hub every message and membership change goes through.

use std::cell::RefCell;
use std::rc::Rc;

use patternhub_domain::chat::{ChatMessage, JoinNoticePolicy, Notice};
use patternhub_domain::id::ParticipantId;

use super::participant::Participant;
use crate::ports::Console;

/// Registry of participants that relays messages and broadcasts notices.
///
/// Members are notified in the order they registered. The room is always
/// handled through an [`Rc`] so it can hand weak references of itself to
/// the participants it registers.
pub struct ChatRoom {
    policy: JoinNoticePolicy,
    members: RefCell<Vec<Rc<dyn Participant>>>,
}

impl ChatRoom {
    #[must_use]
    pub fn new(policy: JoinNoticePolicy) -> Rc<Self> {
        Rc::new(Self {
            policy,
            members: RefCell::new(Vec::new()),
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.borrow().is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: ParticipantId) -> bool {
        self.members.borrow().iter().any(|member| member.id() == id)
    }

    /// Names of the current members, in registration order.
    #[must_use]
    pub fn member_names(&self) -> Vec<String> {
        self.members
            .borrow()
            .iter()
            .map(|member| member.name().to_string())
            .collect()
    }

    /// Add `participant` and announce it.
    ///
    /// Returns `false`, without announcing anything, when the participant is
    /// already a member or still belongs to another room.
    pub fn register(
        self: &Rc<Self>,
        participant: Rc<dyn Participant>,
        console: &mut dyn Console,
    ) -> bool {
        let id = participant.id();
        if self.contains(id) {
            tracing::debug!(%id, name = participant.name(), "already registered");
            return false;
        }
        if participant.hub().is_some_and(|hub| !Rc::ptr_eq(&hub, self)) {
            tracing::debug!(%id, name = participant.name(), "member of another room");
            return false;
        }

        participant.attach(Rc::downgrade(self));
        self.members.borrow_mut().push(Rc::clone(&participant));
        tracing::debug!(
            %id,
            name = participant.name(),
            members = self.len(),
            "participant joined"
        );

        let skip = (!self.policy.notifies_newcomer()).then_some(id);
        let notice = Notice::Joined {
            name: participant.name().to_string(),
        };
        self.broadcast(&notice, skip, console);
        true
    }

    /// Remove `participant` and tell the remaining members.
    ///
    /// Returns `false`, without announcing anything, when the participant was
    /// not a member.
    pub fn remove(&self, participant: &dyn Participant, console: &mut dyn Console) -> bool {
        let id = participant.id();
        let removed = {
            let mut members = self.members.borrow_mut();
            let before = members.len();
            members.retain(|member| member.id() != id);
            members.len() != before
        };
        if !removed {
            tracing::debug!(%id, name = participant.name(), "not a member, nothing to remove");
            return false;
        }

        if participant.hub().is_some_and(|hub| self.is(&hub)) {
            participant.detach();
        }
        tracing::debug!(
            %id,
            name = participant.name(),
            members = self.len(),
            "participant left"
        );

        let notice = Notice::Left {
            name: participant.name().to_string(),
        };
        self.broadcast(&notice, None, console);
        true
    }

    /// Deliver `message` to every member except its sender.
    ///
    /// Returns the number of members that received it.
    pub fn relay(&self, message: &ChatMessage, console: &mut dyn Console) -> usize {
        let mut delivered = 0;
        for member in self.snapshot() {
            if member.id() == message.sender {
                continue;
            }
            member.receive_message(message, console);
            delivered += 1;
        }
        tracing::debug!(sender = %message.sender_name, delivered, "relayed message");
        delivered
    }

    fn broadcast(
        &self,
        notice: &Notice,
        skip: Option<ParticipantId>,
        console: &mut dyn Console,
    ) {
        for member in self.snapshot() {
            if Some(member.id()) == skip {
                continue;
            }
            member.receive_notice(notice, console);
        }
    }

    fn is(&self, hub: &Rc<ChatRoom>) -> bool {
        std::ptr::eq(Rc::as_ptr(hub), self)
    }

    // Members may re-enter the room while being notified, so iterate over a copy.
    fn snapshot(&self) -> Vec<Rc<dyn Participant>> {
        self.members.borrow().clone()
    }
}
