//! The fulfillment response envelope.
//!
//! A [`Fulfillment`] is an ordered collection of [`Message`]s, optionally
//! decorated with an outbound [`Context`] before serialization:
//!
//! ```json
//! {
//!   "messages": [{"type": 0, "speech": "Hi!"}],
//!   "contextOut": {"name": "greeted", "lifespan": 5, "parameters": {}}
//! }
//! ```

use serde::Serialize;

use crate::message::Message;
use crate::payload::Context;

/// An ordered, append-only collection of messages returned by a handler.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Fulfillment {
    messages: Vec<Message>,
    #[serde(rename = "contextOut", skip_serializing_if = "Option::is_none")]
    context_out: Option<Context>,
}

impl Fulfillment {
    /// Creates an empty fulfillment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message, preserving insertion order. Duplicates are allowed.
    pub fn push(&mut self, message: impl Into<Message>) {
        self.messages.push(message.into());
    }

    /// The messages appended so far, in order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// The outbound context attached to this response, if any.
    pub fn context_out(&self) -> Option<&Context> {
        self.context_out.as_ref()
    }

    /// Attaches an outbound context, replacing any previous one.
    pub fn set_context_out(&mut self, context: Context) {
        self.context_out = Some(context);
    }
}

impl From<Message> for Fulfillment {
    fn from(message: Message) -> Self {
        let mut fulfillment = Fulfillment::new();
        fulfillment.push(message);
        fulfillment
    }
}

impl FromIterator<Message> for Fulfillment {
    fn from_iter<I: IntoIterator<Item = Message>>(iter: I) -> Self {
        Fulfillment {
            messages: iter.into_iter().collect(),
            context_out: None,
        }
    }
}

impl Extend<Message> for Fulfillment {
    fn extend<I: IntoIterator<Item = Message>>(&mut self, iter: I) {
        self.messages.extend(iter);
    }
}
