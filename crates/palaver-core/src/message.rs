//! Dialogflow (API.AI v1) rich message types.
//!
//! Fulfillment responses carry a list of messages, each serialized as a flat
//! JSON object with a numeric `type` tag:
//!
//! ```json
//! {"type": 0, "speech": "Hi!"}
//! {"type": 3, "imageUrl": "https://example.com/cat.png", "platform": "slack"}
//! ```
//!
//! Optional fields (most notably the target [`Platform`]) are omitted from
//! the output entirely when unset, never emitted as `null`.
//!
//! # Example
//!
//! ```rust
//! use palaver_core::{Message, Platform};
//!
//! let greeting = Message::text("Hello!");
//! let picture = Message::image("https://example.com/cat.png")
//!     .with_platform(Platform::Telegram);
//! ```

use serde::{Deserialize, Serialize, Serializer};

// ============================================================================
// Platform - target platform annotation
// ============================================================================

/// Target platforms a message can be addressed to.
///
/// Serializes as the lowercase platform name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Facebook,
    Kik,
    Line,
    Skype,
    Slack,
    Telegram,
    Viber,
}

impl Platform {
    /// Returns the wire name of the platform.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Facebook => "facebook",
            Platform::Kik => "kik",
            Platform::Line => "line",
            Platform::Skype => "skype",
            Platform::Slack => "slack",
            Platform::Telegram => "telegram",
            Platform::Viber => "viber",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// MessageType - numeric type tags
// ============================================================================

/// Numeric message type tags defined by the platform.
///
/// The values are part of the wire format and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MessageType {
    Text = 0,
    Card = 1,
    QuickReply = 2,
    Image = 3,
    Custom = 4,
}

impl Serialize for MessageType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

// ============================================================================
// Message variants
// ============================================================================

/// A plain text reply.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextMessage {
    #[serde(rename = "type")]
    kind: MessageType,
    /// Text spoken or displayed to the user.
    pub speech: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
}

impl TextMessage {
    /// Creates a text message.
    pub fn new(speech: impl Into<String>) -> Self {
        Self {
            kind: MessageType::Text,
            speech: speech.into(),
            platform: None,
        }
    }

    /// Addresses the message to a specific platform.
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }
}

/// An image reply.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageMessage {
    #[serde(rename = "type")]
    kind: MessageType,
    /// URL of the image to display.
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
}

impl ImageMessage {
    /// Creates an image message from an image URL.
    pub fn new(image_url: impl Into<String>) -> Self {
        Self {
            kind: MessageType::Image,
            image_url: image_url.into(),
            platform: None,
        }
    }

    /// Addresses the message to a specific platform.
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }
}

/// A quick-reply prompt: a title plus a set of suggested replies.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuickReplyMessage {
    #[serde(rename = "type")]
    kind: MessageType,
    /// Prompt shown above the reply chips.
    pub title: String,
    /// Suggested replies, in display order.
    pub replies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
}

impl QuickReplyMessage {
    /// Creates a quick-reply message.
    pub fn new(title: impl Into<String>, replies: Vec<String>) -> Self {
        Self {
            kind: MessageType::QuickReply,
            title: title.into(),
            replies,
            platform: None,
        }
    }

    /// Addresses the message to a specific platform.
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }
}

/// A button on a [`CardMessage`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardButton {
    /// Button label.
    pub text: String,
    /// Text or payload sent back to the agent when pressed.
    pub postback: String,
}

impl CardButton {
    /// Creates a card button.
    pub fn new(text: impl Into<String>, postback: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            postback: postback.into(),
        }
    }
}

/// A rich card with an image, title, subtitle and buttons.
///
/// Cards serialize with type tag `1`. Some legacy emitters tagged cards with
/// the quick-reply value `2`; that made the two kinds indistinguishable on
/// the wire, so this implementation uses the documented card tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardMessage {
    #[serde(rename = "type")]
    kind: MessageType,
    /// Buttons rendered below the card, in order.
    pub buttons: Vec<CardButton>,
    /// URL of the card image.
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    /// Card title.
    pub title: String,
    /// Card subtitle.
    pub subtitle: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
}

impl CardMessage {
    /// Creates a card message.
    pub fn new(
        buttons: Vec<CardButton>,
        image_url: impl Into<String>,
        title: impl Into<String>,
        subtitle: impl Into<String>,
    ) -> Self {
        Self {
            kind: MessageType::Card,
            buttons,
            image_url: image_url.into(),
            title: title.into(),
            subtitle: subtitle.into(),
            platform: None,
        }
    }

    /// Addresses the message to a specific platform.
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }
}

/// An opaque custom payload forwarded to the platform as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomMessage {
    #[serde(rename = "type")]
    kind: MessageType,
    /// Arbitrary JSON payload interpreted by the platform integration.
    pub payload: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
}

impl CustomMessage {
    /// Creates a custom payload message.
    pub fn new(payload: serde_json::Value) -> Self {
        Self {
            kind: MessageType::Custom,
            payload,
            platform: None,
        }
    }

    /// Addresses the message to a specific platform.
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }
}

// ============================================================================
// Message - the union over all variants
// ============================================================================

/// A single renderable unit in a fulfillment response.
///
/// Each variant serializes flat, with its numeric `type` tag inline; the
/// enum itself adds no wrapper object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Message {
    Text(TextMessage),
    Image(ImageMessage),
    QuickReply(QuickReplyMessage),
    Card(CardMessage),
    Custom(CustomMessage),
}

impl Message {
    /// Creates a plain text message.
    pub fn text(speech: impl Into<String>) -> Self {
        Message::Text(TextMessage::new(speech))
    }

    /// Creates an image message.
    pub fn image(image_url: impl Into<String>) -> Self {
        Message::Image(ImageMessage::new(image_url))
    }

    /// Creates a quick-reply message.
    pub fn quick_reply(title: impl Into<String>, replies: Vec<String>) -> Self {
        Message::QuickReply(QuickReplyMessage::new(title, replies))
    }

    /// Creates a card message.
    pub fn card(
        buttons: Vec<CardButton>,
        image_url: impl Into<String>,
        title: impl Into<String>,
        subtitle: impl Into<String>,
    ) -> Self {
        Message::Card(CardMessage::new(buttons, image_url, title, subtitle))
    }

    /// Creates a custom payload message.
    pub fn custom(payload: serde_json::Value) -> Self {
        Message::Custom(CustomMessage::new(payload))
    }

    /// Returns the numeric type tag of this message.
    pub fn message_type(&self) -> MessageType {
        match self {
            Message::Text(_) => MessageType::Text,
            Message::Image(_) => MessageType::Image,
            Message::QuickReply(_) => MessageType::QuickReply,
            Message::Card(_) => MessageType::Card,
            Message::Custom(_) => MessageType::Custom,
        }
    }

    /// Returns the target platform annotation, if any.
    pub fn platform(&self) -> Option<Platform> {
        match self {
            Message::Text(m) => m.platform,
            Message::Image(m) => m.platform,
            Message::QuickReply(m) => m.platform,
            Message::Card(m) => m.platform,
            Message::Custom(m) => m.platform,
        }
    }

    /// Addresses the message to a specific platform.
    pub fn with_platform(self, platform: Platform) -> Self {
        match self {
            Message::Text(m) => Message::Text(m.with_platform(platform)),
            Message::Image(m) => Message::Image(m.with_platform(platform)),
            Message::QuickReply(m) => Message::QuickReply(m.with_platform(platform)),
            Message::Card(m) => Message::Card(m.with_platform(platform)),
            Message::Custom(m) => Message::Custom(m.with_platform(platform)),
        }
    }
}

impl From<TextMessage> for Message {
    fn from(m: TextMessage) -> Self {
        Message::Text(m)
    }
}

impl From<ImageMessage> for Message {
    fn from(m: ImageMessage) -> Self {
        Message::Image(m)
    }
}

impl From<QuickReplyMessage> for Message {
    fn from(m: QuickReplyMessage) -> Self {
        Message::QuickReply(m)
    }
}

impl From<CardMessage> for Message {
    fn from(m: CardMessage) -> Self {
        Message::Card(m)
    }
}

impl From<CustomMessage> for Message {
    fn from(m: CustomMessage) -> Self {
        Message::Custom(m)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_message_serializes_flat() {
        let msg = Message::text("Hi!");
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value, json!({"type": 0, "speech": "Hi!"}));
    }

    #[test]
    fn platform_is_omitted_when_unset() {
        let value = serde_json::to_value(Message::text("Hi!")).unwrap();
        assert!(value.get("platform").is_none());
    }

    #[test]
    fn platform_serializes_as_lowercase_name() {
        let msg = Message::text("Hi!").with_platform(Platform::Slack);
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value, json!({"type": 0, "speech": "Hi!", "platform": "slack"}));
    }

    #[test]
    fn image_message_uses_camel_case_url() {
        let msg = Message::image("https://example.com/cat.png");
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(
            value,
            json!({"type": 3, "imageUrl": "https://example.com/cat.png"})
        );
    }

    #[test]
    fn quick_reply_message_serializes() {
        let msg = Message::quick_reply("Pick one", vec!["yes".into(), "no".into()]);
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(
            value,
            json!({"type": 2, "title": "Pick one", "replies": ["yes", "no"]})
        );
    }

    #[test]
    fn card_message_uses_card_type_tag() {
        // Pins the fix for the legacy emitters that tagged cards as 2.
        let msg = Message::card(
            vec![CardButton::new("Open", "open")],
            "https://example.com/card.png",
            "Title",
            "Subtitle",
        );
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value["type"], json!(1));
        assert_eq!(
            value,
            json!({
                "type": 1,
                "buttons": [{"text": "Open", "postback": "open"}],
                "imageUrl": "https://example.com/card.png",
                "title": "Title",
                "subtitle": "Subtitle"
            })
        );
    }

    #[test]
    fn custom_message_carries_payload() {
        let msg = Message::custom(json!({"kind": "weather", "temp": 21}));
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(
            value,
            json!({"type": 4, "payload": {"kind": "weather", "temp": 21}})
        );
    }

    #[test]
    fn message_type_tags_are_stable() {
        assert_eq!(MessageType::Text as u8, 0);
        assert_eq!(MessageType::Card as u8, 1);
        assert_eq!(MessageType::QuickReply as u8, 2);
        assert_eq!(MessageType::Image as u8, 3);
        assert_eq!(MessageType::Custom as u8, 4);
    }
}
