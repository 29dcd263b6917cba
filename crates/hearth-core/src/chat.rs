//! Chat Transcript
//!
//! The assistant view's message list plus the bookkeeping for a delayed
//! reply. A submitted message yields a ticket; the reply is only appended if
//! that ticket is still the outstanding one when it arrives.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::profile::UserProfile;
use crate::responder;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: u64,
    pub content: String,
    pub sender: Sender,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
}

/// A reply the view still owes the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    pub ticket: u64,
    pub input: String,
}

#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    messages: Vec<Message>,
    next_id: u64,
    pending: Option<u64>,
}

impl ChatSession {
    /// New transcript opened by the assistant's greeting
    pub fn new(profile: &UserProfile, now_ms: i64) -> Self {
        let mut session = Self::default();
        session.push(responder::opening_message(profile), Sender::Assistant, now_ms);
        session
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// True while a reply is outstanding
    pub fn is_typing(&self) -> bool {
        self.pending.is_some()
    }

    /// Record the user's message. Blank input, or input sent while a reply is
    /// outstanding, is ignored.
    pub fn submit(&mut self, text: &str, now_ms: i64) -> Option<PendingReply> {
        if text.trim().is_empty() || self.pending.is_some() {
            return None;
        }
        self.push(text.to_string(), Sender::User, now_ms);
        let ticket = self.next_id;
        self.next_id += 1;
        self.pending = Some(ticket);
        Some(PendingReply {
            ticket,
            input: text.to_string(),
        })
    }

    /// Append the assistant's reply for `ticket`; stale tickets are dropped
    pub fn deliver(&mut self, ticket: u64, content: String, now_ms: i64) -> bool {
        if self.pending != Some(ticket) {
            return false;
        }
        self.pending = None;
        self.push(content, Sender::Assistant, now_ms);
        true
    }

    /// Compose the reply for `pending` now that its delay has elapsed. The
    /// responder only runs while the ticket is still outstanding.
    pub fn answer<R: Rng + ?Sized>(
        &mut self,
        pending: &PendingReply,
        profile: &UserProfile,
        rng: &mut R,
        now_ms: i64,
    ) -> bool {
        if self.pending != Some(pending.ticket) {
            return false;
        }
        let reply = responder::respond(&pending.input, profile, rng);
        self.deliver(pending.ticket, reply, now_ms)
    }

    /// Forget the outstanding reply, if any
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    fn push(&mut self, content: String, sender: Sender, now_ms: i64) {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(Message {
            id,
            content,
            sender,
            timestamp: now_ms,
        });
    }
}
