//! Chat message classification.
//!
//! Every message posted to a room is either a tip instruction, which is
//! handed to the payment builder, or ordinary chat, which is delivered as-is.

use serde::{Deserialize, Serialize};
use soapbox_tip::{TipCommand, TipParser};

/// What a single chat message asks for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MessageIntent {
    /// The message parsed as a tip command.
    Tip { command: TipCommand },
    /// Ordinary chat, carried through unchanged.
    Chat { text: String },
}

impl MessageIntent {
    /// The tip command, if this message is one.
    pub fn as_tip(&self) -> Option<&TipCommand> {
        match self {
            MessageIntent::Tip { command } => Some(command),
            MessageIntent::Chat { .. } => None,
        }
    }

    pub fn is_tip(&self) -> bool {
        self.as_tip().is_some()
    }
}

/// Classify one chat message.
pub fn classify_message(parser: &TipParser, text: &str) -> MessageIntent {
    match parser.parse(text) {
        Some(command) => {
            crate::debug_info!("CHAT", "tip intent: {}", command);
            MessageIntent::Tip { command }
        }
        None => MessageIntent::Chat {
            text: text.to_string(),
        },
    }
}

/// Classify a batch of messages, preserving order.
pub fn classify_messages<'a, I>(parser: &TipParser, messages: I) -> Vec<MessageIntent>
where
    I: IntoIterator<Item = &'a str>,
{
    let intents: Vec<MessageIntent> = messages
        .into_iter()
        .map(|text| classify_message(parser, text))
        .collect();
    crate::debug_log!(
        "CHAT",
        "classified {} messages, {} tips",
        intents.len(),
        intents.iter().filter(|i| i.is_tip()).count()
    );
    intents
}
