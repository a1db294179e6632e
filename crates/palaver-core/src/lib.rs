//! # Palaver Core
//!
//! Domain types shared across the Palaver fulfillment framework:
//!
//! - [`message`]: typed rich messages and their flat wire serialization
//! - [`fulfillment`]: the response envelope handlers return
//! - [`payload`]: the inbound webhook request and conversational contexts
//!
//! These types are transport-agnostic; dispatching lives in
//! `palaver-agent` and the HTTP boundary in `palaver-http`.

pub mod fulfillment;
pub mod message;
pub mod payload;

pub use fulfillment::Fulfillment;
pub use message::{
    CardButton, CardMessage, CustomMessage, ImageMessage, Message, MessageType, Platform,
    QuickReplyMessage, TextMessage,
};
pub use payload::{Context, Metadata, QueryResult, WebhookRequest};
